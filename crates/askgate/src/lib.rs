//! askgate - a small web front end that forwards one question at a time to an AI service.

pub mod config;
pub mod gate;
pub mod handlers;
pub mod response;
pub mod server;
pub mod upstream;
