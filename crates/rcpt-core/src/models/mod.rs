//! Data models shared by the parser, the categorizer and callers.

pub mod category;
pub mod config;
pub mod item;
