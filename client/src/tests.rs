//! End-to-end scenarios over `App::update`: settled network messages drive
//! the same handlers the live client runs, no server required.

use serde_json::json;

use unofelt_protocol::{Card, GameStateBody};

use crate::app::App;
use crate::messages::Msg;
use crate::states::TablePhase;
use crate::sync::SyncError;
use crate::ui::glyph::{self, DrawCmd};
use crate::ui::layout;
use crate::view_state::ViewState;

fn body(v: serde_json::Value) -> GameStateBody {
    serde_json::from_value(v).unwrap()
}

fn full_state() -> serde_json::Value {
    json!({
        "player_hand": [
            { "color": "red", "value": "1" },
            { "color": "green", "value": "7" },
            { "color": "blue", "value": "drawTwo" },
            { "color": "yellow", "value": "0" },
            { "color": "red", "value": "skip" },
            { "color": "black", "value": "wild" }
        ],
        "discard_pile_top_card": { "color": "green", "value": "4" },
        "deck_card_count": 40,
        "current_player": "Player1",
        "current_chosen_color": "none",
        "awaiting_color_choice": false,
        "players_list": ["Player1", "Player2"],
        "play_direction": "clockwise",
        "ai_last_banter": "your move",
        "pending_draw_amount": 0,
        "opponent_card_count": 7,
        "game_winner": null
    })
}

/// An app that has completed its startup fetch.
fn loaded_app() -> App {
    let mut app = App::default();
    let _ = app.update(Msg::Tick);
    assert!(app.started && app.in_flight);
    let _ = app.update(Msg::FetchSettled(Ok(body(full_state()))));
    assert!(!app.in_flight);
    app
}

#[test]
fn scenario_empty_deck_renders_flat_placeholder() {
    let mut app = loaded_app();
    let mut state = full_state();
    state["deck_card_count"] = json!(0);
    let _ = app.update(Msg::FetchSettled(Ok(body(state))));
    assert_eq!(app.view_state.deck_count, 0);

    let deck = layout::deck_rect(layout::CANVAS_H);
    let cmds = glyph::deck_commands(deck.x, deck.y, deck.width, deck.height, app.view_state.deck_count);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], DrawCmd::RoundedRect { fill, .. } if fill == crate::ui::theme::DECK_PLACEHOLDER));
}

#[test]
fn scenario_rejected_play_leaves_state_and_surfaces_message() {
    let mut app = loaded_app();
    let before = app.view_state.clone();

    // Tap the wild card; the request goes out and the view is untouched.
    let _ = app.update(Msg::HandCardPressed(5));
    assert!(app.in_flight);
    assert_eq!(app.view_state, before);

    let _ = app.update(Msg::PlaySettled(Err(SyncError::Rejected("not your turn".into()))));
    assert!(!app.in_flight);
    assert_eq!(app.view_state, before);
    assert_eq!(app.notice.as_deref(), Some("not your turn"));
}

#[test]
fn scenario_winner_freezes_turn_actions() {
    let mut app = loaded_app();
    let _ = app.update(Msg::EndTurnPressed);
    assert!(app.opponent_thinking);
    assert_eq!(app.phase(), TablePhase::AwaitingOpponent);

    let mut state = full_state();
    state["game_winner"] = json!("Player2");
    let _ = app.update(Msg::EndTurnSettled(Ok(body(state))));
    assert!(!app.opponent_thinking);
    assert_eq!(app.view_state.winner.as_deref(), Some("Player2"));
    assert_eq!(app.phase(), TablePhase::GameOver);
    assert!(app.view_state.frozen());

    // Further input is ignored: nothing is dispatched, nothing changes.
    let frozen = app.view_state.clone();
    let _ = app.update(Msg::HandCardPressed(0));
    let _ = app.update(Msg::DrawPressed);
    let _ = app.update(Msg::EndTurnPressed);
    assert!(!app.in_flight);
    assert_eq!(app.view_state, frozen);
}

#[test]
fn scenario_transport_error_on_initial_fetch_shows_sentinels() {
    let mut app = App::default();
    let _ = app.update(Msg::Tick);
    let _ = app.update(Msg::FetchSettled(Err(SyncError::Transport("connection refused".into()))));

    assert_eq!(app.view_state, ViewState::connection_error());
    assert_eq!(app.view_state.hand, vec![Card::sentinel_error()]);
    assert_eq!(app.view_state.discard_top, Some(Card::sentinel_error()));
    assert_eq!(app.view_state.current_player, "Error");
}

#[test]
fn draw_failure_keeps_last_known_good_values() {
    let mut app = loaded_app();
    let before = app.view_state.clone();
    let _ = app.update(Msg::DrawPressed);
    let _ = app.update(Msg::DrawSettled(Err(SyncError::Transport("timeout".into()))));
    assert!(!app.in_flight);
    assert_eq!(app.view_state, before);
}

#[test]
fn draw_success_merges_partial_fields() {
    let mut app = loaded_app();
    let _ = app.update(Msg::DrawPressed);
    let _ = app.update(Msg::DrawSettled(Ok(body(json!({
        "player_hand": [
            { "color": "red", "value": "1" },
            { "color": "green", "value": "7" },
            { "color": "blue", "value": "drawTwo" },
            { "color": "yellow", "value": "0" },
            { "color": "red", "value": "skip" },
            { "color": "black", "value": "wild" },
            { "color": "blue", "value": "3" }
        ],
        "deck_card_count": 39
    })))));
    assert_eq!(app.view_state.hand.len(), 7);
    assert_eq!(app.view_state.deck_count, 39);
    // Fields the response omitted are untouched.
    assert_eq!(app.view_state.opponent_card_count, 7);
    assert_eq!(app.view_state.current_player, "Player1");
}

#[test]
fn end_turn_failure_falls_back_to_full_resync() {
    let mut app = loaded_app();
    let _ = app.update(Msg::EndTurnPressed);
    let _ = app.update(Msg::EndTurnSettled(Err(SyncError::Transport("reset by peer".into()))));
    // The scrim drops but a resync fetch is outstanding.
    assert!(!app.opponent_thinking);
    assert!(app.in_flight);

    let _ = app.update(Msg::FetchSettled(Ok(body(full_state()))));
    assert!(!app.in_flight);
    assert_eq!(app.view_state.current_player, "Player1");
}

#[test]
fn input_is_ignored_while_a_request_is_outstanding() {
    let mut app = loaded_app();
    let _ = app.update(Msg::DrawPressed);
    assert!(app.in_flight);

    // A second action before settlement is dropped on the floor.
    let _ = app.update(Msg::HandCardPressed(0));
    let _ = app.update(Msg::EndTurnPressed);
    assert!(!app.opponent_thinking);
    assert!(app.notice.is_none());
}

#[test]
fn awaiting_color_choice_gates_turn_actions() {
    let mut app = loaded_app();
    let mut state = full_state();
    state["awaiting_color_choice"] = json!(true);
    state["current_chosen_color"] = json!("");
    let _ = app.update(Msg::FetchSettled(Ok(body(state))));
    assert_eq!(app.phase(), TablePhase::AwaitingColorChoice);

    let _ = app.update(Msg::DrawPressed);
    assert!(!app.in_flight);

    // Picking a swatch logs the choice and refreshes.
    let _ = app.update(Msg::ColorChosen(unofelt_protocol::Color::Blue));
    assert!(app.in_flight);
    let mut resolved = full_state();
    resolved["current_chosen_color"] = json!("blue");
    let _ = app.update(Msg::FetchSettled(Ok(body(resolved))));
    assert_eq!(app.view_state.active_color, Some(unofelt_protocol::Color::Blue));
    assert_eq!(app.phase(), TablePhase::Idle);
}

#[test]
fn uno_declaration_is_logged_only() {
    let mut app = loaded_app();
    let before = app.view_state.clone();
    let _ = app.update(Msg::UnoPressed);
    assert!(!app.in_flight);
    assert_eq!(app.view_state, before);
    assert!(app.log.iter().any(|l| l.contains("UNO!")));
}

#[test]
fn play_success_merges_returned_fields() {
    let mut app = loaded_app();
    let _ = app.update(Msg::HandCardPressed(1));
    let _ = app.update(Msg::PlaySettled(Ok(body(json!({
        "player_hand": [
            { "color": "red", "value": "1" },
            { "color": "blue", "value": "drawTwo" },
            { "color": "yellow", "value": "0" },
            { "color": "red", "value": "skip" },
            { "color": "black", "value": "wild" }
        ],
        "discard_pile_top_card": { "color": "green", "value": "7" },
        "current_player": "Player2"
    })))));
    assert_eq!(app.view_state.hand.len(), 5);
    assert_eq!(
        app.view_state.discard_top,
        Some(Card::new(unofelt_protocol::Color::Green, unofelt_protocol::Value::Number(7)))
    );
    assert_eq!(app.view_state.current_player, "Player2");
    assert_eq!(app.view_state.deck_count, 40);
}
