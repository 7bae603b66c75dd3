//! Application service layer - config, data layout, session wiring

pub mod app;
pub mod config;
pub mod layout;
pub mod repository;
