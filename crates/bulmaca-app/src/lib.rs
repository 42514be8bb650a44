//! Shared library module for the Bulmaca app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::{BulmacaApp, StartupError, start_session};

pub mod action;
pub mod app;
pub mod config;
pub mod localization;
pub mod puzzle_source;
pub mod share;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
