use crate::view_state::ViewState;

/// The interaction state machine the overlays and input gating run on.
/// Derived fresh from the view each frame; never stored.
///
/// Precedence mirrors the overlay stack: a pending color choice outranks the
/// opponent-thinking scrim, which outranks game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePhase {
    Idle,
    AwaitingColorChoice,
    AwaitingOpponent,
    GameOver,
}

impl TablePhase {
    pub fn derive(view: &ViewState, opponent_thinking: bool) -> Self {
        if view.awaiting_color_choice {
            TablePhase::AwaitingColorChoice
        } else if opponent_thinking {
            TablePhase::AwaitingOpponent
        } else if view.frozen() {
            TablePhase::GameOver
        } else {
            TablePhase::Idle
        }
    }

    /// Whether turn actions (play, draw, end turn) may be dispatched.
    pub fn can_act(&self) -> bool {
        matches!(self, TablePhase::Idle)
    }
}
