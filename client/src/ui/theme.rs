use iced::Color;

/// Table palette, matched to the classic green-felt look.
pub const TABLE_GREEN: Color = Color { r: 0.0, g: 0.392, b: 0.0, a: 1.0 };
pub const DECK_PLACEHOLDER: Color = Color { r: 0.0, g: 0.196, b: 0.0, a: 1.0 };

pub const BUTTON_GREEN: Color = Color { r: 0.0, g: 0.588, b: 0.0, a: 1.0 };
pub const BUTTON_GOLD: Color = Color { r: 1.0, g: 0.875, b: 0.0, a: 1.0 };
pub const BUTTON_RED: Color = Color { r: 0.784, g: 0.0, b: 0.0, a: 1.0 };

pub const TEXT: Color = Color { r: 0.92, g: 0.92, b: 0.94, a: 1.0 };
pub const WARNING: Color = Color { r: 1.0, g: 0.45, b: 0.35, a: 1.0 };
pub const SCRIM: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.70 };
pub const PANEL: Color = Color { r: 0.14, g: 0.14, b: 0.16, a: 1.0 };
