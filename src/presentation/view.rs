//! Rendering of a [`LayerManager`] on top of host content.

use super::compositor::{blit, dim, is_painted, paint};
use crate::application::{Entry, LayerManager};
use crate::domain::{LayerId, Transition};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;

/// Composes `base` with the manager's layer stack and toast.
///
/// Draw order is the base, then each layer from the bottom of the stack up
/// (with a scrim under every modal), layers still animating out at the stack
/// position they left, and finally the toast. The view keeps no state of its
/// own, so rendering the same manager at the same instant always produces
/// the same buffer.
pub struct LayerView<'a, B, V> {
    manager: &'a LayerManager<V>,
    base: B,
}

impl<'a, B, V> LayerView<'a, B, V> {
    pub fn new(manager: &'a LayerManager<V>, base: B) -> Self {
        Self { manager, base }
    }
}

impl<B: Widget, V: Widget> Widget for LayerView<'_, B, V> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.base.render(area, buf);

        let manager = self.manager;
        let now = manager.now();
        let dim_scrim = manager.config().dim_scrim;
        let draw = |entry: &Entry<V>, progress: f32, buf: &mut Buffer| {
            let layer = entry.layer();
            if layer.is_modal && dim_scrim && progress >= 0.5 {
                dim(area, buf);
            }
            let canvas = paint(entry.view(), area);
            blit(&canvas, buf, area, Transition::for_layer(layer), progress);
        };

        let entries = manager.entries();
        for (index, entry) in entries.iter().enumerate() {
            for departure in manager.departing().iter().filter(|d| d.index() == index) {
                draw(departure.entry(), departure.progress(now), buf);
            }
            draw(entry, entry.progress(now), buf);
        }
        for departure in manager.departing().iter().filter(|d| d.index() >= entries.len()) {
            draw(departure.entry(), departure.progress(now), buf);
        }

        if let Some(departure) = manager.toast_departure() {
            draw(departure.entry(), departure.progress(now), buf);
        }
        if let Some(toast) = manager.toast_entry() {
            draw(toast, toast.progress(now), buf);
        }
    }
}

/// What a pointer press at some position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Toast(LayerId),
    Layer(LayerId),
    /// The dimmed area around a modal layer's content.
    Scrim(LayerId),
    Base,
}

/// Finds the topmost thing drawn at `position` when the manager is rendered
/// into `area`.
///
/// Layers are tested at rest, ignoring any transition in flight. Layers
/// animating out never receive hits.
pub fn hit_test<V: Widget>(manager: &LayerManager<V>, area: Rect, position: Position) -> Hit {
    if !area.contains(position) {
        return Hit::Base;
    }
    if let Some(toast) = manager.toast_entry() {
        if is_painted(&paint(toast.view(), area), position) {
            return Hit::Toast(toast.id());
        }
    }
    for entry in manager.entries().iter().rev() {
        if is_painted(&paint(entry.view(), area), position) {
            return Hit::Layer(entry.id());
        }
        if entry.layer().is_modal {
            return Hit::Scrim(entry.id());
        }
    }
    Hit::Base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ManualClock;
    use crate::domain::{EntryDirection, EntryStyle, LayerConfig};
    use ratatui::style::Modifier;
    use std::time::Duration;

    /// Fills a rectangle with one symbol.
    #[derive(Debug, Clone, Copy)]
    struct Patch {
        rect: Rect,
        symbol: &'static str,
    }

    impl Patch {
        fn new(x: u16, y: u16, width: u16, height: u16, symbol: &'static str) -> Self {
            Self {
                rect: Rect::new(x, y, width, height),
                symbol,
            }
        }
    }

    impl Widget for Patch {
        fn render(self, area: Rect, buf: &mut Buffer) {
            let rect = self.rect.intersection(area);
            for y in rect.top()..rect.bottom() {
                for x in rect.left()..rect.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(self.symbol);
                    }
                }
            }
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 6,
        height: 3,
    };

    fn background() -> Patch {
        Patch::new(0, 0, 6, 3, ".")
    }

    fn manager() -> (LayerManager<Patch>, ManualClock) {
        let clock = ManualClock::new();
        (LayerManager::with_clock(LayerConfig::default(), clock.clone()), clock)
    }

    fn render(manager: &LayerManager<Patch>) -> Buffer {
        let mut buf = Buffer::empty(AREA);
        LayerView::new(manager, background()).render(AREA, &mut buf);
        buf
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_base_only() {
        let (manager, _) = manager();
        assert_eq!(rows(&render(&manager)), vec!["......", "......", "......"]);
    }

    #[test]
    fn test_layers_render_in_stack_order() {
        let (mut manager, _) = manager();
        manager.push(EntryStyle::Instant, EntryDirection::None, false, false, None, |_| {
            Patch::new(0, 0, 3, 2, "a")
        });
        manager.push(EntryStyle::Instant, EntryDirection::None, false, false, None, |_| {
            Patch::new(2, 1, 3, 2, "b")
        });

        assert_eq!(rows(&render(&manager)), vec!["aaa...", "aabbb.", "..bbb."]);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let (mut manager, _) = manager();
        manager.push(EntryStyle::Animated, EntryDirection::Left, true, false, None, |_| {
            Patch::new(1, 1, 2, 1, "m")
        });
        assert_eq!(render(&manager), render(&manager));
    }

    #[test]
    fn test_modal_dims_content_beneath() {
        let (mut manager, _) = manager();
        manager.push(EntryStyle::Instant, EntryDirection::None, true, true, None, |_| {
            Patch::new(1, 1, 2, 1, "m")
        });
        let buf = render(&manager);

        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(0, 0)].symbol(), ".");
        assert_eq!(buf[(1, 1)].symbol(), "m");
        assert!(!buf[(1, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_scrim_can_be_disabled() {
        let clock = ManualClock::new();
        let config = LayerConfig {
            dim_scrim: false,
            ..LayerConfig::default()
        };
        let mut manager = LayerManager::with_clock(config, clock);
        manager.push(EntryStyle::Instant, EntryDirection::None, true, true, None, |_| {
            Patch::new(1, 1, 2, 1, "m")
        });

        assert!(!render(&manager)[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_slide_in_reaches_rest_position() {
        let (mut manager, clock) = manager();
        manager.push(EntryStyle::Animated, EntryDirection::Bottom, false, false, None, |_| {
            Patch::new(0, 0, 6, 1, "s")
        });

        assert_eq!(rows(&render(&manager)), vec!["......", "......", "......"]);

        clock.advance(Duration::from_millis(300));
        assert_eq!(rows(&render(&manager)), vec!["ssssss", "......", "......"]);
    }

    #[test]
    fn test_fade_in_is_hidden_then_dimmed() {
        let (mut manager, clock) = manager();
        manager.push(EntryStyle::Animated, EntryDirection::None, false, false, None, |_| {
            Patch::new(0, 0, 1, 1, "f")
        });

        assert_eq!(render(&manager)[(0, 0)].symbol(), ".");

        clock.advance(Duration::from_millis(150));
        let buf = render(&manager);
        assert_eq!(buf[(0, 0)].symbol(), "f");
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_departing_layer_keeps_its_slot_until_finished() {
        let (mut manager, clock) = manager();
        manager.push(EntryStyle::Instant, EntryDirection::None, false, false, None, |_| {
            Patch::new(0, 0, 2, 1, "a")
        });
        manager.push(EntryStyle::Animated, EntryDirection::Right, false, false, None, |_| {
            Patch::new(0, 0, 6, 1, "b")
        });
        manager.push(EntryStyle::Instant, EntryDirection::None, false, false, None, |_| {
            Patch::new(0, 0, 1, 1, "c")
        });
        clock.advance(Duration::from_millis(300));

        manager.pop_at(1);
        assert_eq!(rows(&render(&manager))[0], "cbbbbb");

        clock.advance(Duration::from_millis(300));
        manager.tick();
        assert_eq!(rows(&render(&manager))[0], "ca....");
    }

    #[test]
    fn test_toast_renders_above_layers() {
        let (mut manager, clock) = manager();
        manager.push(EntryStyle::Instant, EntryDirection::None, true, false, None, |_| {
            Patch::new(0, 0, 6, 3, "l")
        });
        manager.toast(EntryDirection::Top, Duration::from_secs(1), |_| Patch::new(0, 0, 3, 1, "t"));

        clock.advance(Duration::from_millis(500));
        assert_eq!(rows(&render(&manager))[0], "tttlll");

        clock.advance(Duration::from_millis(500));
        manager.tick();
        assert_eq!(rows(&render(&manager))[0], "tttlll");

        clock.advance(Duration::from_millis(500));
        manager.tick();
        assert_eq!(rows(&render(&manager))[0], "llllll");
    }

    #[test]
    fn test_hit_test() {
        let (mut manager, _) = manager();
        let sheet = manager.push(EntryStyle::Instant, EntryDirection::None, false, false, None, |_| {
            Patch::new(0, 0, 6, 1, "s")
        });
        let modal = manager.push(EntryStyle::Instant, EntryDirection::None, true, true, None, |_| {
            Patch::new(2, 1, 2, 1, "m")
        });
        let toast = manager.toast(EntryDirection::Top, Duration::from_secs(1), |_| Patch::new(5, 2, 1, 1, "t"));

        assert_eq!(hit_test(&manager, AREA, Position::new(5, 2)), Hit::Toast(toast));
        assert_eq!(hit_test(&manager, AREA, Position::new(2, 1)), Hit::Layer(modal));
        assert_eq!(hit_test(&manager, AREA, Position::new(0, 0)), Hit::Scrim(modal));
        assert_eq!(hit_test(&manager, AREA, Position::new(20, 20)), Hit::Base);

        manager.pop_with_id(modal);
        assert_eq!(hit_test(&manager, AREA, Position::new(0, 0)), Hit::Layer(sheet));
        assert_eq!(hit_test(&manager, AREA, Position::new(0, 2)), Hit::Base);
    }
}
