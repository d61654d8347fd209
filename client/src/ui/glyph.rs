//! Procedural card faces. No image assets: a card identity maps to a flat
//! list of drawing commands, and the canvas paints those verbatim. Keeping
//! the mapping pure makes the renderer deterministic and testable.

use iced::Color as Rgba;
use unofelt_protocol::{Card, Color, Value};

use crate::ui::layout::deck_stack_depth;
use crate::ui::theme;

/// Tilt applied to the central ellipse and glyph, in degrees.
const TILT_DEG: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgba,
    pub weight: f32,
}

/// One drawing primitive. Positions are absolute canvas coordinates; labels
/// are centered on their position and may be rotated around it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect { x: f32, y: f32, width: f32, height: f32, radius: f32, fill: Rgba },
    Rect { x: f32, y: f32, width: f32, height: f32, fill: Rgba },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32, tilt_deg: f32, fill: Rgba },
    Label {
        content: String,
        x: f32,
        y: f32,
        size: f32,
        fill: Rgba,
        outline: Option<Outline>,
        angle_deg: f32,
    },
}

const RED: Rgba = Rgba { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
const YELLOW: Rgba = Rgba { r: 1.0, g: 1.0, b: 0.0, a: 1.0 };
const GREEN: Rgba = Rgba { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
const BLUE: Rgba = Rgba { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
const NEUTRAL_GREY: Rgba = Rgba { r: 0.784, g: 0.784, b: 0.784, a: 1.0 };

/// Fixed color table for card bodies; the grey sentinel (and with it any
/// unrecognized wire color) renders neutral.
pub fn body_color(color: Color) -> Rgba {
    match color {
        Color::Red => RED,
        Color::Yellow => YELLOW,
        Color::Green => GREEN,
        Color::Blue => BLUE,
        Color::Black => BLACK,
        Color::Grey => NEUTRAL_GREY,
    }
}

/// Central glyph color: body color, except yellow cards get black for
/// contrast and the grey sentinel gets white.
fn glyph_color(color: Color) -> Rgba {
    match color {
        Color::Yellow => BLACK,
        Color::Grey => WHITE,
        other => body_color(other),
    }
}

/// Render a card face at `(x, y)` with the given size.
///
/// Never fails: the error sentinel degrades to a flat grey body with a fixed
/// invalid marker instead of a face.
pub fn card_commands(card: Card, x: f32, y: f32, w: f32, h: f32) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(10);
    let body = body_color(card.color);
    cmds.push(DrawCmd::RoundedRect {
        x,
        y,
        width: w,
        height: h,
        radius: w / 12.0,
        fill: body,
    });

    let cx = x + w / 2.0;
    let cy = y + h / 2.0;

    if card.value == Value::Error {
        // Degraded display: body plus the invalid marker, nothing else.
        cmds.push(DrawCmd::Label {
            content: "ERR".into(),
            x: cx,
            y: cy,
            size: w / 4.0,
            fill: WHITE,
            outline: None,
            angle_deg: 0.0,
        });
        return cmds;
    }

    if card.value.is_wild() {
        // Four color quadrants meeting at the center.
        let seg_w = w * 0.35;
        let seg_h = h * 0.3;
        for (dx, dy, fill) in [
            (-seg_w, -seg_h, RED),
            (0.0, -seg_h, YELLOW),
            (-seg_w, 0.0, GREEN),
            (0.0, 0.0, BLUE),
        ] {
            cmds.push(DrawCmd::Rect {
                x: cx + dx,
                y: cy + dy,
                width: seg_w,
                height: seg_h,
                fill,
            });
        }
        let (content, size, weight) = if card.value == Value::WildDrawFour {
            ("+4".to_string(), w / 3.0, w / 60.0)
        } else {
            ("WILD".to_string(), w / 5.0, w / 70.0)
        };
        cmds.push(DrawCmd::Label {
            content,
            x: cx,
            y: cy,
            size,
            fill: WHITE,
            outline: Some(Outline { color: BLACK, weight }),
            angle_deg: 0.0,
        });
    } else {
        // Tilted white backdrop ellipse under the central glyph.
        cmds.push(DrawCmd::Ellipse {
            cx,
            cy,
            rx: w * 0.75 / 2.0,
            ry: h * 0.78 / 2.0,
            tilt_deg: TILT_DEG,
            fill: WHITE,
        });
        let size = match card.value {
            Value::Number(_) => w / 2.5,
            _ => w / 2.0,
        };
        cmds.push(DrawCmd::Label {
            content: card.value.center_glyph(),
            x: cx,
            y: cy,
            size,
            fill: glyph_color(card.color),
            outline: Some(Outline { color: WHITE, weight: w / 75.0 }),
            angle_deg: TILT_DEG,
        });
    }

    // Corner indices, bottom-right one upside down.
    let corner = card.value.corner_glyph();
    let corner_size = w / 7.0;
    let ox = w * 0.12;
    let oy = h * 0.08;
    cmds.push(DrawCmd::Label {
        content: corner.clone(),
        x: x + ox,
        y: y + oy + corner_size / 3.0,
        size: corner_size,
        fill: WHITE,
        outline: None,
        angle_deg: 0.0,
    });
    cmds.push(DrawCmd::Label {
        content: corner,
        x: x + w - ox,
        y: y + h - oy - corner_size / 3.0,
        size: corner_size,
        fill: WHITE,
        outline: None,
        angle_deg: 180.0,
    });

    cmds
}

/// Render the face-down deck as an offset stack with the wordmark on top.
/// An empty deck collapses to a flat placeholder.
pub fn deck_commands(x: f32, y: f32, w: f32, h: f32, deck_count: u32) -> Vec<DrawCmd> {
    let radius = w / 15.0;
    let depth = deck_stack_depth(deck_count);
    if depth == 0 {
        return vec![DrawCmd::RoundedRect {
            x,
            y,
            width: w,
            height: h,
            radius,
            fill: theme::DECK_PLACEHOLDER,
        }];
    }

    let mut cmds = Vec::with_capacity(depth + 2);
    for i in 0..depth - 1 {
        cmds.push(DrawCmd::RoundedRect {
            x: x + i as f32 * 4.0,
            y: y - i as f32 * 4.0,
            width: w,
            height: h,
            radius,
            fill: BLACK,
        });
    }
    let top_x = x + (depth as f32 - 1.0) * 4.0;
    let top_y = y - (depth as f32 - 1.0) * 4.0;
    cmds.push(DrawCmd::RoundedRect {
        x: top_x,
        y: top_y,
        width: w,
        height: h,
        radius,
        fill: Rgba { r: 0.078, g: 0.078, b: 0.078, a: 1.0 },
    });
    // Double-printed wordmark, yellow shadow under red.
    let cx = top_x + w / 2.0;
    let cy = top_y + h / 2.0;
    let size = h / 3.5;
    let outline = Some(Outline { color: WHITE, weight: w / 50.0 });
    cmds.push(DrawCmd::Label {
        content: "UNO".into(),
        x: cx + w / 30.0,
        y: cy + h / 30.0,
        size,
        fill: YELLOW,
        outline,
        angle_deg: TILT_DEG,
    });
    cmds.push(DrawCmd::Label {
        content: "UNO".into(),
        x: cx,
        y: cy,
        size,
        fill: RED,
        outline,
        angle_deg: TILT_DEG,
    });
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Label { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rendering_is_deterministic() {
        let cards = [
            Card::new(Color::Red, Value::Number(7)),
            Card::new(Color::Yellow, Value::Skip),
            Card::new(Color::Black, Value::WildDrawFour),
            Card::sentinel_error(),
        ];
        for card in cards {
            let a = card_commands(card, 10.0, 20.0, 100.0, 150.0);
            let b = card_commands(card, 10.0, 20.0, 100.0, 150.0);
            assert_eq!(a, b, "{}", card);
        }
        assert_eq!(deck_commands(0.0, 0.0, 100.0, 150.0, 7), deck_commands(0.0, 0.0, 100.0, 150.0, 7));
    }

    #[test]
    fn number_card_has_ellipse_and_corners() {
        let cmds = card_commands(Card::new(Color::Blue, Value::Number(3)), 0.0, 0.0, 100.0, 150.0);
        assert!(matches!(cmds[0], DrawCmd::RoundedRect { fill, .. } if fill == BLUE));
        assert!(cmds.iter().any(|c| matches!(c, DrawCmd::Ellipse { tilt_deg, .. } if *tilt_deg == TILT_DEG)));
        assert_eq!(labels(&cmds), vec!["3", "3", "3"]);
    }

    #[test]
    fn yellow_glyph_is_black_for_contrast() {
        let cmds = card_commands(Card::new(Color::Yellow, Value::Number(0)), 0.0, 0.0, 100.0, 150.0);
        let center = cmds.iter().find_map(|c| match c {
            DrawCmd::Label { fill, angle_deg, .. } if *angle_deg == TILT_DEG => Some(*fill),
            _ => None,
        });
        assert_eq!(center, Some(BLACK));
    }

    #[test]
    fn letter_glyphs_are_larger_than_numerals() {
        let size_of = |v: Value| {
            let cmds = card_commands(Card::new(Color::Green, v), 0.0, 0.0, 100.0, 150.0);
            cmds.iter()
                .find_map(|c| match c {
                    DrawCmd::Label { size, angle_deg, .. } if *angle_deg == TILT_DEG => Some(*size),
                    _ => None,
                })
                .unwrap()
        };
        assert!(size_of(Value::Skip) > size_of(Value::Number(8)));
        assert_eq!(size_of(Value::DrawTwo), size_of(Value::Reverse));
    }

    #[test]
    fn wild_cards_get_quadrants_not_ellipse() {
        for (value, label) in [(Value::Wild, "WILD"), (Value::WildDrawFour, "+4")] {
            let cmds = card_commands(Card::new(Color::Black, value), 0.0, 0.0, 100.0, 150.0);
            let quadrants: Vec<_> = cmds
                .iter()
                .filter_map(|c| match c {
                    DrawCmd::Rect { fill, .. } => Some(*fill),
                    _ => None,
                })
                .collect();
            assert_eq!(quadrants, vec![RED, YELLOW, GREEN, BLUE]);
            assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Ellipse { .. })));
            assert!(labels(&cmds).contains(&label));
        }
    }

    #[test]
    fn wild_corners_use_w_markers() {
        let cmds = card_commands(Card::new(Color::Black, Value::Wild), 0.0, 0.0, 100.0, 150.0);
        assert_eq!(labels(&cmds), vec!["WILD", "W", "W"]);
        let four = card_commands(Card::new(Color::Black, Value::WildDrawFour), 0.0, 0.0, 100.0, 150.0);
        assert_eq!(labels(&four), vec!["+4", "W+4", "W+4"]);
    }

    #[test]
    fn sentinel_renders_flat_invalid_placeholder() {
        let cmds = card_commands(Card::sentinel_error(), 0.0, 0.0, 100.0, 150.0);
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0], DrawCmd::RoundedRect { fill, .. } if fill == NEUTRAL_GREY));
        assert_eq!(labels(&cmds), vec!["ERR"]);
        assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Ellipse { .. })));
    }

    #[test]
    fn empty_deck_is_flat_placeholder() {
        let cmds = deck_commands(200.0, 325.0, 100.0, 150.0, 0);
        assert_eq!(
            cmds,
            vec![DrawCmd::RoundedRect {
                x: 200.0,
                y: 325.0,
                width: 100.0,
                height: 150.0,
                radius: 100.0 / 15.0,
                fill: theme::DECK_PLACEHOLDER,
            }]
        );
    }

    #[test]
    fn deck_stack_depth_matches_count() {
        let rects = |count: u32| {
            deck_commands(0.0, 0.0, 100.0, 150.0, count)
                .iter()
                .filter(|c| matches!(c, DrawCmd::RoundedRect { .. }))
                .count()
        };
        assert_eq!(rects(1), 1);
        assert_eq!(rects(2), 2);
        assert_eq!(rects(3), 3);
        assert_eq!(rects(40), 3);
    }
}
