pub mod app;
pub mod components;
pub mod delete;
pub mod edit;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod loading;
pub mod login;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod users;

pub use runtime::run;
