use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ---- Card identity ----
///
/// Wire tokens follow the server contract: colors and values travel as
/// camelCase strings (`"drawTwo"`, `"wildDrawFour"`, numerals as `"0".."9"`).
/// Unrecognized tokens never fail decoding; they fold to the grey/error
/// sentinels so a degraded server can still be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Black,
    /// Sentinel for error/loading display and for unknown wire colors.
    Grey,
}

impl Color {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "red" => Color::Red,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "black" => Color::Black,
            _ => Color::Grey,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Grey => "grey",
        }
    }

    /// The four colors a wild card can select.
    pub const CHOOSABLE: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from_wire(&s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Numeral card, 0..=9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    /// Sentinel for degraded-connectivity display and unknown wire values.
    Error,
}

impl Value {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "skip" => Value::Skip,
            "reverse" => Value::Reverse,
            "drawTwo" => Value::DrawTwo,
            "wild" => Value::Wild,
            "wildDrawFour" => Value::WildDrawFour,
            _ => match s.parse::<u8>() {
                Ok(n) if n <= 9 => Value::Number(n),
                _ => Value::Error,
            },
        }
    }

    pub fn as_wire(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Skip => "skip".into(),
            Value::Reverse => "reverse".into(),
            Value::DrawTwo => "drawTwo".into(),
            Value::Wild => "wild".into(),
            Value::WildDrawFour => "wildDrawFour".into(),
            Value::Error => "error".into(),
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Value::Wild | Value::WildDrawFour)
    }

    /// The glyph stamped in the card corners. One lookup shared by every
    /// rendering site, instead of re-branching per call site.
    pub fn corner_glyph(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Skip => "S".into(),
            Value::Reverse => "R".into(),
            Value::DrawTwo => "+2".into(),
            Value::Wild => "W".into(),
            Value::WildDrawFour => "W+4".into(),
            Value::Error => "ERR".into(),
        }
    }

    /// The central glyph for non-wild cards. Same table as the corners,
    /// minus the wild markers (wilds get the quadrant treatment instead).
    pub fn center_glyph(&self) -> String {
        match self {
            Value::Wild | Value::WildDrawFour => String::new(),
            other => other.corner_glyph(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Value::from_wire(&s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub value: Value,
}

impl Card {
    pub fn new(color: Color, value: Value) -> Self {
        Card { color, value }
    }

    /// Synthetic card shown while the server is unreachable.
    pub fn sentinel_error() -> Self {
        Card { color: Color::Grey, value: Value::Error }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == Value::Error
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

/// ---- Turn order ----
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Clockwise,
    Counterclockwise,
}

impl Default for PlayDirection {
    fn default() -> Self {
        PlayDirection::Clockwise
    }
}

impl PlayDirection {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "counterclockwise" => PlayDirection::Counterclockwise,
            _ => PlayDirection::Clockwise,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            PlayDirection::Clockwise => "clockwise",
            PlayDirection::Counterclockwise => "counterclockwise",
        }
    }
}

impl fmt::Display for PlayDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for PlayDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for PlayDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PlayDirection::from_wire(&s))
    }
}

/// ---- HTTP bodies ----
///
/// Every field is optional: the server may answer with any subset of the
/// state, and an absent field means "no change" to the client's mirror.
/// The initial full fetch applies its own defaults instead (see the client's
/// `ViewState::apply_full`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameStateBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_hand: Option<Vec<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_pile_top_card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_card_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<String>,
    /// Color in force after a wild; empty or "none" means unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_chosen_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awaiting_color_choice: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_direction: Option<PlayDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_last_banter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_draw_amount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_card_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_winner: Option<String>,
}

/// Body of `POST /api/play_card` responses. On success the state fields ride
/// alongside the verdict; on rejection only `success`/`message` are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayCardResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub state: GameStateBody,
}

/// Error body some endpoints return with a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
