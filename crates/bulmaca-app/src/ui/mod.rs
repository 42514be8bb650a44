pub mod clue_bar;
pub mod game_screen;
pub mod grid;
pub mod grid_theme;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod load_failure;
pub mod modal;
pub mod status_line;
