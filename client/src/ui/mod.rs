pub mod canvas;
pub mod glyph;
pub mod layout;
pub mod theme;
