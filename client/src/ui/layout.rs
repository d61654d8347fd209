use iced::{Point, Rectangle};

use unofelt_protocol::Color;

use crate::ui::theme;

/// Compiled-in table geometry. The window opens at `CANVAS_W`×`CANVAS_H`,
/// but every function here takes the live canvas size so a resized window
/// still lays out correctly.
pub const CANVAS_W: f32 = 1200.0;
pub const CANVAS_H: f32 = 800.0;

pub const CARD_W: f32 = 100.0;
pub const CARD_H: f32 = 150.0;
pub const HAND_SPACING: f32 = 10.0;
pub const HAND_BOTTOM_MARGIN: f32 = 40.0;

pub const DECK_X: f32 = 200.0;
pub const DISCARD_GAP: f32 = 50.0;

pub const BUTTON_W: f32 = 180.0;
pub const BUTTON_H: f32 = 50.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const BUTTON_RIGHT_MARGIN: f32 = 40.0;

pub const SWATCH_SIZE: f32 = 90.0;
pub const SWATCH_GAP: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Draw,
    Uno,
    EndTurn,
}

/// A fixed on-screen button; configured once per frame from constants.
#[derive(Debug, Clone)]
pub struct ActionButton {
    pub label: &'static str,
    pub bounds: Rectangle,
    pub fill: iced::Color,
    pub text_color: iced::Color,
    pub action: ButtonAction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    HandCard(usize),
    Button(ButtonAction),
    ColorSwatch(Color),
}

pub fn hand_y(canvas_h: f32) -> f32 {
    canvas_h - CARD_H - HAND_BOTTOM_MARGIN
}

pub fn hand_total_width(n: usize) -> f32 {
    if n == 0 {
        0.0
    } else {
        n as f32 * CARD_W + (n as f32 - 1.0) * HAND_SPACING
    }
}

/// Left edge of a centered hand of `n` cards.
pub fn hand_start_x(canvas_w: f32, n: usize) -> f32 {
    (canvas_w - hand_total_width(n)) / 2.0
}

pub fn hand_positions(canvas_w: f32, canvas_h: f32, n: usize) -> Vec<Rectangle> {
    let start_x = hand_start_x(canvas_w, n);
    let y = hand_y(canvas_h);
    (0..n)
        .map(|i| Rectangle {
            x: start_x + i as f32 * (CARD_W + HAND_SPACING),
            y,
            width: CARD_W,
            height: CARD_H,
        })
        .collect()
}

pub fn deck_rect(canvas_h: f32) -> Rectangle {
    Rectangle {
        x: DECK_X,
        y: canvas_h / 2.0 - CARD_H / 2.0,
        width: CARD_W,
        height: CARD_H,
    }
}

pub fn discard_rect(canvas_h: f32) -> Rectangle {
    let deck = deck_rect(canvas_h);
    Rectangle { x: deck.x + CARD_W + DISCARD_GAP, ..deck }
}

/// Visual stack depth of the deck: capped at 3, flat placeholder at 0.
pub fn deck_stack_depth(deck_count: u32) -> usize {
    deck_count.min(3) as usize
}

pub fn buttons(canvas_w: f32, canvas_h: f32) -> Vec<ActionButton> {
    let first_x = canvas_w - (BUTTON_W * 3.0 + 2.0 * BUTTON_GAP) - BUTTON_RIGHT_MARGIN;
    let y = hand_y(canvas_h) - BUTTON_H - 30.0;
    let at = |i: f32| Rectangle {
        x: first_x + i * (BUTTON_W + BUTTON_GAP),
        y,
        width: BUTTON_W,
        height: BUTTON_H,
    };
    vec![
        ActionButton {
            label: "Draw Card",
            bounds: at(0.0),
            fill: theme::BUTTON_GREEN,
            text_color: iced::Color::WHITE,
            action: ButtonAction::Draw,
        },
        ActionButton {
            label: "UNO!",
            bounds: at(1.0),
            fill: theme::BUTTON_GOLD,
            text_color: iced::Color::BLACK,
            action: ButtonAction::Uno,
        },
        ActionButton {
            label: "End Turn",
            bounds: at(2.0),
            fill: theme::BUTTON_RED,
            text_color: iced::Color::WHITE,
            action: ButtonAction::EndTurn,
        },
    ]
}

/// Panel behind the wild-color prompt, centered on the table.
pub fn color_prompt_panel(canvas_w: f32, canvas_h: f32) -> Rectangle {
    let width = Color::CHOOSABLE.len() as f32 * SWATCH_SIZE
        + (Color::CHOOSABLE.len() as f32 - 1.0) * SWATCH_GAP
        + 60.0;
    let height = SWATCH_SIZE + 120.0;
    Rectangle {
        x: (canvas_w - width) / 2.0,
        y: (canvas_h - height) / 2.0,
        width,
        height,
    }
}

pub fn color_swatches(canvas_w: f32, canvas_h: f32) -> Vec<(Color, Rectangle)> {
    let panel = color_prompt_panel(canvas_w, canvas_h);
    let total = Color::CHOOSABLE.len() as f32 * SWATCH_SIZE
        + (Color::CHOOSABLE.len() as f32 - 1.0) * SWATCH_GAP;
    let start_x = panel.x + (panel.width - total) / 2.0;
    let y = panel.y + 70.0;
    Color::CHOOSABLE
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            (
                c,
                Rectangle {
                    x: start_x + i as f32 * (SWATCH_SIZE + SWATCH_GAP),
                    y,
                    width: SWATCH_SIZE,
                    height: SWATCH_SIZE,
                },
            )
        })
        .collect()
}

/// First-match precedence over already-computed regions: hand cards left to
/// right, then buttons. Ties between overlapping regions go to the card.
pub fn resolve_hit(
    point: Point,
    hand_rects: &[Rectangle],
    buttons: &[ActionButton],
) -> Option<HitTarget> {
    for (i, rect) in hand_rects.iter().enumerate() {
        if rect.contains(point) {
            return Some(HitTarget::HandCard(i));
        }
    }
    buttons
        .iter()
        .find(|b| b.bounds.contains(point))
        .map(|b| HitTarget::Button(b.action))
}

/// Resolve a pointer position against the live layout.
///
/// While the color prompt is up it is exclusive, so its swatches are checked
/// alone. Anything unmatched is a no-op.
pub fn hit_test(
    canvas_w: f32,
    canvas_h: f32,
    point: Point,
    hand_len: usize,
    awaiting_color_choice: bool,
) -> Option<HitTarget> {
    if awaiting_color_choice {
        return color_swatches(canvas_w, canvas_h)
            .into_iter()
            .find(|(_, r)| r.contains(point))
            .map(|(c, _)| HitTarget::ColorSwatch(c));
    }
    resolve_hit(
        point,
        &hand_positions(canvas_w, canvas_h, hand_len),
        &buttons(canvas_w, canvas_h),
    )
}
