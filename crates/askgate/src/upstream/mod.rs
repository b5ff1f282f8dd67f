//! Client for the external question-answering service.

mod error;
mod provider;
mod types;

pub use error::UpstreamError;
pub use provider::{HttpUpstream, Upstream};
pub use types::{Answer, AskPayload};
