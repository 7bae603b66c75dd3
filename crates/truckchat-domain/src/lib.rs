//! Domain layer for truck-chat
//!
//! Reference data, fuzzy matching, storage traits, and the conversation
//! controller that drives one session.

pub mod conversation;
pub mod model;
pub mod repository;
pub mod service;
