pub mod api;
pub mod config;
pub mod icons;
pub mod server;
