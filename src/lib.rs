pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod copy;
pub mod links;
pub mod logging;
pub mod ui;
pub mod utils;
