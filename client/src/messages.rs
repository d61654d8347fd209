use unofelt_protocol::{Color, GameStateBody};

use crate::sync::SyncError;

#[derive(Debug, Clone)]
pub enum Msg {
    /// Display cadence; also bootstraps the first state fetch.
    Tick,

    // Pointer dispatch out of the canvas
    HandCardPressed(usize),
    DrawPressed,
    UnoPressed,
    EndTurnPressed,
    ColorChosen(Color),

    // Network settlements
    FetchSettled(Result<GameStateBody, SyncError>),
    DrawSettled(Result<GameStateBody, SyncError>),
    PlaySettled(Result<GameStateBody, SyncError>),
    EndTurnSettled(Result<GameStateBody, SyncError>),
}
