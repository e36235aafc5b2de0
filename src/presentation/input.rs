use super::view::{hit_test, Hit};
use crate::application::App;
use crate::domain::EntryDirection;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Position;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }
        match key {
            KeyCode::Char('b') => app.open_sheet(EntryDirection::Bottom),
            KeyCode::Char('r') => app.open_sheet(EntryDirection::Right),
            KeyCode::Char('t') => app.open_sheet(EntryDirection::Top),
            KeyCode::Char('l') => app.open_sheet(EntryDirection::Left),
            KeyCode::Char('f') => app.open_sheet(EntryDirection::None),
            KeyCode::Char('i') => app.open_instant(),
            KeyCode::Char('m') => app.open_modal(),
            KeyCode::Char('n') => app.show_toast(format!("{} layer(s) open", app.manager.len())),
            KeyCode::Char('p') | KeyCode::Esc => app.close_top(),
            KeyCode::Char('x') => app.close_all(),
            _ => {}
        }
    }

    /// Routes a left click through the layer stack.
    ///
    /// Clicking a toast clears it and clicking a dismissable modal's scrim pops
    /// that modal. Everything else is ignored.
    pub fn handle_click(app: &mut App, position: Position) {
        match hit_test(&app.manager, app.viewport, position) {
            Hit::Toast(_) => app.manager.clear_toast(),
            Hit::Scrim(id) => {
                if app.manager.dismiss_from_scrim(id) {
                    app.status_message = Some(format!("Dismissed modal {id}"));
                }
            }
            Hit::Layer(_) | Hit::Base => {}
        }
    }
}
