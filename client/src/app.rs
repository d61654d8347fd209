use std::time::Duration;

use iced::{Element, Length, Subscription, Task};
use iced::widget::canvas::Canvas;

use crate::messages::Msg;
use crate::states::TablePhase;
use crate::sync::{GameApi, DEFAULT_BASE_URL};
use crate::ui::canvas::GameTable;
use crate::view_state::ViewState;

/// Application root. Owns the one [`ViewState`]; every mutation happens in
/// `update` on the event loop, so settlement handlers never race. The
/// renderer and hit-testing get per-frame snapshots, never a reference that
/// lives across an await.
pub struct App {
    pub view_state: ViewState,
    pub api: GameApi,
    /// One outstanding request at a time: pointer dispatch is ignored while
    /// set, so overlapping responses can't silently overwrite each other.
    pub in_flight: bool,
    /// Display-only "opponent is acting" flag, raised around end-turn.
    pub opponent_thinking: bool,
    /// Last user-facing action notice (e.g. a rejected play).
    pub notice: Option<String>,
    pub started: bool,
    pub log: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            view_state: ViewState::default(),
            api: GameApi::new(DEFAULT_BASE_URL),
            in_flight: false,
            opponent_thinking: false,
            notice: None,
            started: false,
            log: Vec::new(),
        }
    }
}

impl App {
    pub fn log<S: Into<String>>(&mut self, s: S) {
        self.log.push(s.into());
        if self.log.len() > 400 {
            self.log.remove(0);
        }
    }

    pub fn phase(&self) -> TablePhase {
        TablePhase::derive(&self.view_state, self.opponent_thinking)
    }

    fn fetch_task(&self) -> Task<Msg> {
        let api = self.api.clone();
        Task::perform(async move { api.fetch_state().await }, Msg::FetchSettled)
    }

    pub fn update(&mut self, msg: Msg) -> Task<Msg> {
        match msg {
            Msg::Tick => {
                if !self.started {
                    // First tick doubles as startup: pull the full state.
                    self.started = true;
                    self.in_flight = true;
                    return self.fetch_task();
                }
                Task::none()
            }

            Msg::HandCardPressed(i) => {
                if self.in_flight || !self.phase().can_act() {
                    return Task::none();
                }
                let Some(&card) = self.view_state.hand.get(i) else {
                    return Task::none();
                };
                self.notice = None;
                self.in_flight = true;
                self.log(format!("playing {}", card));
                let api = self.api.clone();
                Task::perform(async move { api.play_card(card).await }, Msg::PlaySettled)
            }

            Msg::DrawPressed => {
                if self.in_flight || !self.phase().can_act() {
                    return Task::none();
                }
                self.notice = None;
                self.in_flight = true;
                let api = self.api.clone();
                Task::perform(async move { api.draw_card().await }, Msg::DrawSettled)
            }

            Msg::EndTurnPressed => {
                if self.in_flight || !self.phase().can_act() {
                    return Task::none();
                }
                self.notice = None;
                self.in_flight = true;
                self.opponent_thinking = true;
                let api = self.api.clone();
                Task::perform(async move { api.end_turn().await }, Msg::EndTurnSettled)
            }

            Msg::UnoPressed => {
                // No server contract for the declaration; log it and move on.
                log::info!("UNO! declared");
                self.log("UNO! declared (no server action defined)");
                Task::none()
            }

            Msg::ColorChosen(color) => {
                // The contract has no choose-color endpoint; the server
                // drives awaiting_color_choice down. Record the pick and
                // refresh so the table catches up.
                self.log(format!("color chosen: {}", color));
                if self.in_flight {
                    return Task::none();
                }
                self.in_flight = true;
                self.fetch_task()
            }

            Msg::FetchSettled(result) => {
                self.in_flight = false;
                match result {
                    Ok(body) => self.view_state.apply_full(body),
                    Err(e) => {
                        log::warn!("state fetch failed: {}", e);
                        self.log(format!("fetch failed: {}", e));
                        self.view_state = ViewState::connection_error();
                    }
                }
                Task::none()
            }

            Msg::DrawSettled(result) => {
                self.in_flight = false;
                match result {
                    Ok(body) => self.view_state.merge(body),
                    // Last-known-good values stay in place.
                    Err(e) => {
                        log::warn!("draw failed: {}", e);
                        self.log(format!("draw failed: {}", e));
                    }
                }
                Task::none()
            }

            Msg::PlaySettled(result) => {
                self.in_flight = false;
                match result {
                    Ok(body) => self.view_state.merge(body),
                    Err(e) => {
                        // Rejections and transport errors both surface to
                        // the user; the view is untouched either way.
                        self.log(format!("play refused: {}", e));
                        self.notice = Some(e.to_string());
                    }
                }
                Task::none()
            }

            Msg::EndTurnSettled(result) => {
                self.opponent_thinking = false;
                match result {
                    Ok(body) => {
                        self.in_flight = false;
                        self.view_state.merge(body);
                        if let Some(winner) = self.view_state.winner.clone() {
                            self.log(format!("game over, winner: {}", winner));
                        }
                        Task::none()
                    }
                    Err(e) => {
                        // Whatever happened server-side may have half
                        // applied; resynchronize with a full fetch.
                        log::warn!("end turn failed, resyncing: {}", e);
                        self.log(format!("end turn failed: {}", e));
                        self.in_flight = true;
                        self.fetch_task()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        Canvas::new(GameTable::snapshot(self))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Msg> {
        // A declared winner halts frame scheduling entirely.
        if self.view_state.frozen() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(33)).map(|_| Msg::Tick)
        }
    }
}
