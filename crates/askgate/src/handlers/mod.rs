//! HTTP request handlers.

mod ask;
mod health;
mod pages;

pub use ask::{AskBody, AskRequest, ask};
pub use health::{livez, readyz};
pub use pages::{about, chat, home, not_found};
