use crate::{
    foundation::core::{Point, REM_PX, Rgba8, Viewport, ViewportClass},
    shell::neighbors::Role,
};

/// Direction of an entry-to-entry slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the more recent entry.
    Next,
    /// Towards the older entry.
    Prev,
}

impl Direction {
    /// How far every role moves along the slot row.
    pub fn shift(self) -> i8 {
        match self {
            Self::Next => 1,
            Self::Prev => -1,
        }
    }

    /// Slide started by clicking `role`; only the adjacent dates navigate.
    pub fn from_role(role: Role) -> Option<Self> {
        match role {
            Role::Next => Some(Self::Next),
            Role::Prev => Some(Self::Prev),
            _ => None,
        }
    }
}

/// Which edge of the label sits on the anchor's x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    /// Left edge on the anchor.
    Start,
    /// Horizontally centred on the anchor.
    Center,
    /// Right edge on the anchor.
    End,
}

/// Which edge of the label sits on the anchor's y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    /// Top edge on the anchor.
    Top,
    /// Bottom edge on the anchor.
    Bottom,
}

/// Fixed screen position of a date label.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Anchor {
    /// Anchor point in viewport pixels.
    pub at: Point,
    /// Horizontal alignment against `at`.
    pub h_align: HAlign,
    /// Vertical alignment against `at`.
    pub v_align: VAlign,
}

/// Slot a role occupies, accounting for an in-flight slide, in `[-2, 2]`.
pub fn displayed_slot(role: Role, direction: Option<Direction>) -> i8 {
    let shift = direction.map_or(0, Direction::shift);
    (role.offset() - shift).clamp(-2, 2)
}

/// Anchor of `slot` (clamped to `[-2, 2]`) for `viewport`.
///
/// Wide viewports line the dates up along the bottom edge; narrow ones move
/// the row to the top, with the side dates hugging the screen edges.
pub fn anchor_for(slot: i8, viewport: Viewport) -> Anchor {
    let w = viewport.width;
    let slot = slot.clamp(-2, 2);
    match viewport.class() {
        ViewportClass::Wide => {
            let (x, h_align) = match slot {
                -2 => (-0.5 * w, HAlign::Start),
                -1 => (0.35 * w, HAlign::Center),
                0 => (0.5 * w, HAlign::Center),
                1 => (0.65 * w, HAlign::Center),
                _ => (w, HAlign::Start),
            };
            Anchor {
                at: Point::new(x, viewport.height - 2.0 * REM_PX),
                h_align,
                v_align: VAlign::Bottom,
            }
        }
        ViewportClass::Narrow => {
            let (x, h_align) = match slot {
                -2 => (0.0, HAlign::End),
                -1 => (2.0 * REM_PX, HAlign::Start),
                0 => (0.5 * w, HAlign::Center),
                1 => (w - 2.0 * REM_PX, HAlign::End),
                _ => (w, HAlign::Start),
            };
            Anchor {
                at: Point::new(x, 5.0 * REM_PX),
                h_align,
                v_align: VAlign::Top,
            }
        }
    }
}

/// Resolved presentation of one date label.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlotStyle {
    /// Displayed slot in `[-2, 2]`.
    pub slot: i8,
    pub anchor: Anchor,
    /// Slots outside `[-1, 1]` are hidden.
    pub visible: bool,
    pub opacity: f64,
    pub font_px: f64,
    /// Black in the centre, gray at the sides.
    pub color: Rgba8,
    /// Whether a click on this label starts a slide.
    pub interactive: bool,
}

/// Style of `role` while `direction` is in flight (or idle when `None`).
pub fn slot_style(role: Role, direction: Option<Direction>, viewport: Viewport) -> SlotStyle {
    let slot = displayed_slot(role, direction);
    let center = slot == 0;
    let visible = (-1..=1).contains(&slot);
    SlotStyle {
        slot,
        anchor: anchor_for(slot, viewport),
        visible,
        opacity: match (visible, center) {
            (false, _) => 0.0,
            (true, true) => 1.0,
            (true, false) => 0.7,
        },
        font_px: if center { 2.0 * REM_PX } else { 1.5 * REM_PX },
        color: if center { Rgba8::BLACK } else { Rgba8::GRAY },
        interactive: direction.is_none() && visible && !center,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/anchors.rs"]
mod tests;
