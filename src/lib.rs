pub mod app;
pub mod content;
pub mod hub;
pub mod logging;
pub mod session;
pub mod settings;
pub mod theme;
