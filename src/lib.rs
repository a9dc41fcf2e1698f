pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;
pub mod worker;
