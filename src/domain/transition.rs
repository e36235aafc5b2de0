//! Transition computation for layers.
//!
//! A transition is a pure function of a layer's entry metadata. Progress is
//! expressed as how far the layer is towards being fully on screen: `0.0` is
//! hidden (entering just started, or leaving just finished) and `1.0` is at rest.

use super::models::{EntryDirection, EntryStyle, Layer};
use ratatui::layout::Rect;

/// Screen edge used by slide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl EntryDirection {
    pub fn edge(self) -> Option<Edge> {
        match self {
            EntryDirection::None => None,
            EntryDirection::Top => Some(Edge::Top),
            EntryDirection::Bottom => Some(Edge::Bottom),
            EntryDirection::Left => Some(Edge::Left),
            EntryDirection::Right => Some(Edge::Right),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Identity,
    Fade,
    Slide(Edge),
}

/// How a fading layer should be drawn at a given progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Hidden,
    Dimmed,
    Full,
}

impl Transition {
    pub fn for_layer(layer: &Layer) -> Self {
        match layer.entry_style {
            EntryStyle::Instant => Transition::Identity,
            EntryStyle::Animated => match layer.entry_direction.edge() {
                Some(edge) => Transition::Slide(edge),
                None => Transition::Fade,
            },
        }
    }

    /// Displacement in cells of a layer rendered into `area` at `progress`.
    pub fn offset(self, area: Rect, progress: f32) -> (i32, i32) {
        let Transition::Slide(edge) = self else {
            return (0, 0);
        };
        let remaining = 1.0 - ease_out_cubic(progress.clamp(0.0, 1.0));
        let dx = (f32::from(area.width) * remaining).round() as i32;
        let dy = (f32::from(area.height) * remaining).round() as i32;
        match edge {
            Edge::Top => (0, -dy),
            Edge::Bottom => (0, dy),
            Edge::Left => (-dx, 0),
            Edge::Right => (dx, 0),
        }
    }

    /// Terminals have no alpha, so a fade steps through hidden, dimmed and full.
    pub fn appearance(self, progress: f32) -> Appearance {
        match self {
            Transition::Fade if progress < 0.25 => Appearance::Hidden,
            Transition::Fade if progress < 1.0 => Appearance::Dimmed,
            _ => Appearance::Full,
        }
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
