use bulmaca_game::Direction;
use eframe::egui::{Event, InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 7] = [
    Shortcut::plain(Key::ArrowUp, Action::MoveCursor(Direction::Up)),
    Shortcut::plain(Key::ArrowDown, Action::MoveCursor(Direction::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::MoveCursor(Direction::Left)),
    Shortcut::plain(Key::ArrowRight, Action::MoveCursor(Direction::Right)),
    Shortcut::plain(Key::Backspace, Action::Backspace),
    Shortcut::plain(Key::Space, Action::ToggleAxis),
    Shortcut::plain(Key::Tab, Action::ToggleAxis),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // Shortcuts with Ctrl/Cmd belong to the platform (copy, quit, ...).
    if i.modifiers.command {
        return;
    }

    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) {
            action_queue.request(shortcut.action);
            return;
        }
    }

    // Letters come from text events, which carry composed characters.
    for event in &i.events {
        if let Event::Text(text) = event {
            for c in text.chars().filter(|c| !c.is_whitespace()) {
                action_queue.request(Action::InputLetter(c));
            }
        }
    }
}
