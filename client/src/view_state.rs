use unofelt_protocol::{Card, Color, GameStateBody, PlayDirection};

/// The client's mirror of the authoritative game state. One instance lives
/// on [`crate::app::App`]; only the settlement handlers write to it, and the
/// renderer gets a per-frame snapshot. Once a winner is recorded the mirror
/// freezes: replace and merge become no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// This client's cards, in display order.
    pub hand: Vec<Card>,
    pub discard_top: Option<Card>,
    pub deck_count: u32,
    pub current_player: String,
    pub players: Vec<String>,
    pub direction: PlayDirection,
    /// Color in force after a wild; `None` when the discard's own color rules.
    pub active_color: Option<Color>,
    pub awaiting_color_choice: bool,
    /// Unresolved stacked draw-two/draw-four obligation.
    pub pending_draw_amount: u32,
    pub opponent_card_count: u32,
    pub winner: Option<String>,
    pub last_opponent_message: String,
}

fn parse_active_color(raw: &str) -> Option<Color> {
    match raw.trim() {
        "" | "none" | "null" => None,
        s => Some(Color::from_wire(s)),
    }
}

impl ViewState {
    pub fn frozen(&self) -> bool {
        self.winner.is_some()
    }

    /// Full replacement from a complete fetch. Absent optional fields get
    /// the documented defaults rather than carrying anything over: a
    /// sentinel-error hand, an empty discard, zeroed counts, "N/A" strings.
    pub fn apply_full(&mut self, body: GameStateBody) {
        if self.frozen() {
            return;
        }
        self.hand = body.player_hand.unwrap_or_else(|| vec![Card::sentinel_error()]);
        self.discard_top = body.discard_pile_top_card;
        self.deck_count = body.deck_card_count.unwrap_or(0);
        self.current_player = body.current_player.unwrap_or_else(|| "N/A".into());
        self.players = body.players_list.unwrap_or_default();
        self.direction = body.play_direction.unwrap_or_default();
        self.active_color = body
            .current_chosen_color
            .as_deref()
            .and_then(parse_active_color);
        self.awaiting_color_choice = body.awaiting_color_choice.unwrap_or(false);
        self.pending_draw_amount = body.pending_draw_amount.unwrap_or(0);
        self.opponent_card_count = body.opponent_card_count.unwrap_or(0);
        self.last_opponent_message = body.ai_last_banter.unwrap_or_else(|| "N/A".into());
        self.winner = body.game_winner;
    }

    /// Per-field merge for action responses: present fields overwrite,
    /// absent fields keep the last known good value.
    pub fn merge(&mut self, body: GameStateBody) {
        if self.frozen() {
            return;
        }
        if let Some(hand) = body.player_hand {
            self.hand = hand;
        }
        if let Some(top) = body.discard_pile_top_card {
            self.discard_top = Some(top);
        }
        if let Some(count) = body.deck_card_count {
            self.deck_count = count;
        }
        if let Some(player) = body.current_player {
            self.current_player = player;
        }
        if let Some(raw) = body.current_chosen_color {
            // Present but "none" means the wild choice was cleared.
            self.active_color = parse_active_color(&raw);
        }
        if let Some(awaiting) = body.awaiting_color_choice {
            self.awaiting_color_choice = awaiting;
        }
        if let Some(players) = body.players_list {
            self.players = players;
        }
        if let Some(direction) = body.play_direction {
            self.direction = direction;
        }
        if let Some(banter) = body.ai_last_banter {
            self.last_opponent_message = banter;
        }
        if let Some(pending) = body.pending_draw_amount {
            self.pending_draw_amount = pending;
        }
        if let Some(count) = body.opponent_card_count {
            self.opponent_card_count = count;
        }
        if let Some(winner) = body.game_winner {
            self.winner = Some(winner);
        }
    }

    /// Distinguishable sentinel snapshot for a failed full fetch. The table
    /// stays drawable; nothing here is an error the caller has to handle.
    pub fn connection_error() -> Self {
        ViewState {
            hand: vec![Card::sentinel_error()],
            discard_top: Some(Card::sentinel_error()),
            deck_count: 0,
            current_player: "Error".into(),
            players: Vec::new(),
            direction: PlayDirection::default(),
            active_color: None,
            awaiting_color_choice: false,
            pending_draw_amount: 0,
            opponent_card_count: 0,
            winner: None,
            last_opponent_message: "Connection error".into(),
        }
    }
}
