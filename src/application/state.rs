//! Demo application state.
//!
//! `App` owns the layer manager for the demo binary and wraps each stack
//! operation in a named action the key bindings can call.

use super::manager::{Completion, LayerManager};
use crate::domain::{EntryDirection, EntryStyle, LayerConfig};
use crate::presentation::{Card, Placement};
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::time::Duration;

/// How long demo toasts stay on screen.
pub const TOAST_LIFESPAN: Duration = Duration::from_secs(2);

/// Demo state: the manager plus a status line.
///
/// # Examples
///
/// ```
/// use tlayers::application::App;
/// use tlayers::domain::EntryDirection;
///
/// let mut app = App::default();
/// app.open_sheet(EntryDirection::Bottom);
/// assert_eq!(app.manager.len(), 1);
/// ```
#[derive(Debug)]
pub struct App {
    /// Layers and toast shown over the base screen
    pub manager: LayerManager<Card>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Area the layers were last drawn into, used for pointer hit testing
    pub viewport: Rect,
    /// Number of layers opened so far, used to label cards
    opened: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new(LayerManager::new())
    }
}

impl App {
    pub fn new(manager: LayerManager<Card>) -> Self {
        Self {
            manager,
            status_message: None,
            viewport: Rect::default(),
            opened: 0,
        }
    }

    pub fn with_config(config: LayerConfig) -> Self {
        Self::new(LayerManager::with_config(config))
    }

    fn next_label(&mut self) -> usize {
        self.opened += 1;
        self.opened
    }

    /// Slides a sheet in from `direction` (or fades one in for `None`).
    pub fn open_sheet(&mut self, direction: EntryDirection) {
        let label = self.next_label();
        let placement = Placement::for_direction(direction);
        self.manager.push(EntryStyle::Animated, direction, false, false, None, move |layer| {
            Card::new(format!("Sheet {label}"), format!("{:?} layer {}", layer.entry_direction, layer.id))
                .placement(placement)
        });
        self.status_message = Some(format!("Opened sheet {label}"));
    }

    /// Shows a layer with no transition at all.
    pub fn open_instant(&mut self) {
        let label = self.next_label();
        self.manager.push(EntryStyle::Instant, EntryDirection::None, false, false, None, move |layer| {
            Card::new(format!("Panel {label}"), format!("Instant layer {}", layer.id)).accent(Color::Yellow)
        });
        self.status_message = Some(format!("Opened panel {label}"));
    }

    /// Opens a modal that a click on its scrim dismisses. Once it has
    /// settled, a toast announces it.
    pub fn open_modal(&mut self) {
        let label = self.next_label();
        let settled: Completion<Card> = Box::new(move |manager: &mut LayerManager<Card>| {
            manager.toast(EntryDirection::Top, TOAST_LIFESPAN, move |_| {
                Card::new("Ready", format!("Modal {label} settled"))
                    .placement(Placement::Toast)
                    .accent(Color::Green)
            });
        });
        self.manager.push(EntryStyle::Animated, EntryDirection::None, true, true, Some(settled), move |layer| {
            Card::new(
                format!("Modal {label}"),
                format!("Click outside to dismiss {}", layer.id),
            )
            .accent(Color::Magenta)
        });
        self.status_message = Some(format!("Opened modal {label}"));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.manager.toast(EntryDirection::Top, TOAST_LIFESPAN, move |_| {
            Card::new("Notice", message.clone()).placement(Placement::Toast)
        });
    }

    pub fn close_top(&mut self) {
        match self.manager.top().map(|layer| layer.id) {
            Some(id) => {
                self.manager.pop();
                self.status_message = Some(format!("Closed layer {id}"));
            }
            None => self.status_message = Some("Nothing to close".to_string()),
        }
    }

    pub fn close_all(&mut self) {
        self.manager.pop_all();
        self.status_message = Some("Closed everything".to_string());
    }

    /// How long the event loop may block waiting for input.
    ///
    /// Animations need a redraw every frame; otherwise the loop only has to
    /// wake for the next scheduled completion or expiry.
    pub fn poll_timeout(&self) -> Duration {
        let config = self.manager.config();
        if self.manager.is_animating() {
            return config.frame_interval();
        }
        let idle = Duration::from_secs(1);
        match self.manager.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(self.manager.now()).min(idle),
            None => idle,
        }
    }
}
