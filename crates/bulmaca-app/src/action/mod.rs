use std::mem;

use bulmaca_core::Position;
use bulmaca_game::Direction;

pub(crate) mod handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    InputLetter(char),
    Backspace,
    MoveCursor(Direction),
    SelectCell(Position),
    ToggleAxis,
    StartGame,
    Share,
    CloseModal,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
