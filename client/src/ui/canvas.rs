use iced::alignment::{Horizontal, Vertical};
use iced::border::Radius;
use iced::mouse;
use iced::widget::canvas::{self, event, Event, Frame, Path, Stroke, Text};
use iced::{Pixels, Point, Radians, Rectangle, Size, Vector};

use crate::app::App;
use crate::messages::Msg;
use crate::states::TablePhase;
use crate::ui::glyph::{self, DrawCmd};
use crate::ui::layout::{self, ButtonAction, HitTarget};
use crate::ui::theme;
use crate::view_state::ViewState;

const BOLD: iced::Font = iced::Font {
    weight: iced::font::Weight::Bold,
    ..iced::Font::DEFAULT
};

/// Per-frame snapshot of everything the table needs to draw and hit-test.
/// Cloned out of [`App`] when the view is built; it never outlives the frame.
#[derive(Debug, Clone)]
pub struct GameTable {
    pub view: ViewState,
    pub phase: TablePhase,
    pub notice: Option<String>,
}

impl GameTable {
    pub fn snapshot(app: &App) -> Self {
        GameTable {
            view: app.view_state.clone(),
            phase: app.phase(),
            notice: app.notice.clone(),
        }
    }
}

impl canvas::Program<Msg> for GameTable {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Msg>) {
        let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event else {
            return (event::Status::Ignored, None);
        };
        let Some(pos) = cursor.position_in(bounds) else {
            return (event::Status::Ignored, None);
        };
        if self.phase == TablePhase::GameOver {
            // The table no longer accepts turn actions.
            return (event::Status::Ignored, None);
        }
        let awaiting = self.phase == TablePhase::AwaitingColorChoice;
        let hit = layout::hit_test(bounds.width, bounds.height, pos, self.view.hand.len(), awaiting);
        match hit {
            Some(HitTarget::HandCard(i)) => (event::Status::Captured, Some(Msg::HandCardPressed(i))),
            Some(HitTarget::Button(ButtonAction::Draw)) => (event::Status::Captured, Some(Msg::DrawPressed)),
            Some(HitTarget::Button(ButtonAction::Uno)) => (event::Status::Captured, Some(Msg::UnoPressed)),
            Some(HitTarget::Button(ButtonAction::EndTurn)) => {
                (event::Status::Captured, Some(Msg::EndTurnPressed))
            }
            Some(HitTarget::ColorSwatch(c)) => (event::Status::Captured, Some(Msg::ColorChosen(c))),
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let (w, h) = (bounds.width, bounds.height);
        let view = &self.view;

        frame.fill(&Path::rectangle(Point::ORIGIN, bounds.size()), theme::TABLE_GREEN);

        // Hand, centered, left to right.
        for (card, rect) in view
            .hand
            .iter()
            .zip(layout::hand_positions(w, h, view.hand.len()))
        {
            paint(&mut frame, &glyph::card_commands(*card, rect.x, rect.y, rect.width, rect.height));
        }

        // Deck and discard pile.
        let deck = layout::deck_rect(h);
        paint(
            &mut frame,
            &glyph::deck_commands(deck.x, deck.y, deck.width, deck.height, view.deck_count),
        );
        let discard = layout::discard_rect(h);
        match view.discard_top {
            Some(card) => paint(
                &mut frame,
                &glyph::card_commands(card, discard.x, discard.y, discard.width, discard.height),
            ),
            None => {
                // Empty slot outline where the pile will grow.
                let slot = Path::rounded_rectangle(
                    Point::new(discard.x, discard.y),
                    Size::new(discard.width, discard.height),
                    Radius::from(discard.width / 15.0),
                );
                frame.fill(&slot, theme::DECK_PLACEHOLDER);
                frame.stroke(
                    &slot,
                    Stroke {
                        style: canvas::stroke::Style::Solid(theme::TEXT),
                        width: 1.0,
                        ..Stroke::default()
                    },
                );
            }
        }

        // Action buttons.
        for button in layout::buttons(w, h) {
            let b = button.bounds;
            frame.fill(
                &Path::rounded_rectangle(Point::new(b.x, b.y), Size::new(b.width, b.height), Radius::from(5.0)),
                button.fill,
            );
            frame.fill_text(Text {
                content: button.label.to_string(),
                position: Point::new(b.x + b.width / 2.0, b.y + b.height / 2.0),
                size: Pixels(b.height * 0.4),
                color: button.text_color,
                font: BOLD,
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        self.draw_status_block(&mut frame);
        self.draw_overlay(&mut frame, w, h);

        vec![frame.into_geometry()]
    }
}

impl GameTable {
    fn draw_status_block(&self, frame: &mut Frame) {
        let view = &self.view;
        let mut lines: Vec<(String, iced::Color)> = vec![
            (format!("Current player: {}", view.current_player), theme::TEXT),
            (
                format!(
                    "Active color: {}",
                    view.active_color.map(|c| c.to_string()).unwrap_or_else(|| "-".into())
                ),
                theme::TEXT,
            ),
            (format!("Players: {}", view.players.join(", ")), theme::TEXT),
            (format!("Direction: {}", view.direction), theme::TEXT),
            (
                format!("Deck: {}   Opponent cards: {}", view.deck_count, view.opponent_card_count),
                theme::TEXT,
            ),
        ];
        if view.pending_draw_amount > 0 {
            lines.push((format!("Pending draw: +{}", view.pending_draw_amount), theme::WARNING));
        }
        if !view.last_opponent_message.is_empty() {
            lines.push((format!("Opponent: {}", view.last_opponent_message), theme::TEXT));
        }
        if let Some(notice) = &self.notice {
            lines.push((format!("! {}", notice), theme::WARNING));
        }
        for (i, (content, color)) in lines.into_iter().enumerate() {
            frame.fill_text(Text {
                content,
                position: Point::new(30.0, 30.0 + i as f32 * 26.0),
                size: Pixels(18.0),
                color,
                horizontal_alignment: Horizontal::Left,
                vertical_alignment: Vertical::Top,
                ..Text::default()
            });
        }
    }

    /// Exclusive overlays: color prompt, then opponent scrim, then game over.
    fn draw_overlay(&self, frame: &mut Frame, w: f32, h: f32) {
        match self.phase {
            TablePhase::AwaitingColorChoice => {
                frame.fill(&Path::rectangle(Point::ORIGIN, Size::new(w, h)), theme::SCRIM);
                let panel = layout::color_prompt_panel(w, h);
                frame.fill(
                    &Path::rounded_rectangle(
                        Point::new(panel.x, panel.y),
                        Size::new(panel.width, panel.height),
                        Radius::from(10.0),
                    ),
                    theme::PANEL,
                );
                frame.fill_text(Text {
                    content: "Choose a color".into(),
                    position: Point::new(panel.x + panel.width / 2.0, panel.y + 35.0),
                    size: Pixels(24.0),
                    color: theme::TEXT,
                    font: BOLD,
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
                for (color, rect) in layout::color_swatches(w, h) {
                    frame.fill(
                        &Path::rounded_rectangle(
                            Point::new(rect.x, rect.y),
                            Size::new(rect.width, rect.height),
                            Radius::from(8.0),
                        ),
                        glyph::body_color(color),
                    );
                }
            }
            TablePhase::AwaitingOpponent => {
                frame.fill(&Path::rectangle(Point::ORIGIN, Size::new(w, h)), theme::SCRIM);
                frame.fill_text(Text {
                    content: "Opponent is thinking...".into(),
                    position: Point::new(w / 2.0, h / 2.0),
                    size: Pixels(32.0),
                    color: theme::TEXT,
                    font: BOLD,
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }
            TablePhase::GameOver => {
                frame.fill(&Path::rectangle(Point::ORIGIN, Size::new(w, h)), theme::SCRIM);
                frame.fill_text(Text {
                    content: "GAME OVER".into(),
                    position: Point::new(w / 2.0, h / 2.0 - 30.0),
                    size: Pixels(48.0),
                    color: theme::BUTTON_GOLD,
                    font: BOLD,
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
                if let Some(winner) = &self.view.winner {
                    frame.fill_text(Text {
                        content: format!("Winner: {}", winner),
                        position: Point::new(w / 2.0, h / 2.0 + 24.0),
                        size: Pixels(28.0),
                        color: theme::TEXT,
                        horizontal_alignment: Horizontal::Center,
                        vertical_alignment: Vertical::Center,
                        ..Text::default()
                    });
                }
            }
            TablePhase::Idle => {}
        }
    }
}

/// Execute a glyph command list against the frame.
pub fn paint(frame: &mut Frame, cmds: &[DrawCmd]) {
    for cmd in cmds {
        match cmd {
            DrawCmd::RoundedRect { x, y, width, height, radius, fill } => {
                frame.fill(
                    &Path::rounded_rectangle(
                        Point::new(*x, *y),
                        Size::new(*width, *height),
                        Radius::from(*radius),
                    ),
                    *fill,
                );
            }
            DrawCmd::Rect { x, y, width, height, fill } => {
                frame.fill(
                    &Path::rectangle(Point::new(*x, *y), Size::new(*width, *height)),
                    *fill,
                );
            }
            DrawCmd::Ellipse { cx, cy, rx, ry, tilt_deg, fill } => {
                let path = Path::new(|b| {
                    b.ellipse(canvas::path::arc::Elliptical {
                        center: Point::new(*cx, *cy),
                        radii: Vector::new(*rx, *ry),
                        rotation: Radians(tilt_deg.to_radians()),
                        start_angle: Radians(0.0),
                        end_angle: Radians(std::f32::consts::TAU),
                    });
                });
                frame.fill(&path, *fill);
            }
            DrawCmd::Label { content, x, y, size, fill, outline, angle_deg } => {
                frame.with_save(|frame| {
                    frame.translate(Vector::new(*x, *y));
                    if *angle_deg != 0.0 {
                        frame.rotate(Radians(angle_deg.to_radians()));
                    }
                    let base = Text {
                        content: content.clone(),
                        position: Point::ORIGIN,
                        size: Pixels(*size),
                        color: *fill,
                        font: BOLD,
                        horizontal_alignment: Horizontal::Center,
                        vertical_alignment: Vertical::Center,
                        ..Text::default()
                    };
                    // Canvas text has no stroke; fake the outline with four
                    // offset copies underneath.
                    if let Some(outline) = outline {
                        let d = outline.weight.max(0.5);
                        for (dx, dy) in [(-d, 0.0), (d, 0.0), (0.0, -d), (0.0, d)] {
                            frame.fill_text(Text {
                                position: Point::new(dx, dy),
                                color: outline.color,
                                ..base.clone()
                            });
                        }
                    }
                    frame.fill_text(base);
                });
            }
        }
    }
}
