//! Question submission handler.

use std::convert::Infallible;

use axum::extract::{FromRequest, Request, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use tracing::debug;

use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: Option<String>,
}

/// Question taken from either a JSON or a urlencoded form body.
///
/// An unreadable body yields no question, which the gate rejects as invalid.
#[derive(Debug)]
pub struct AskBody(pub Option<String>);

impl<S> FromRequest<S> for AskBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<AskRequest>::from_request(req, state)
                .await
                .map(|Form(req)| req)
                .map_err(|e| e.to_string())
        } else {
            Json::<AskRequest>::from_request(req, state)
                .await
                .map(|Json(req)| req)
                .map_err(|e| e.to_string())
        };

        match parsed {
            Ok(req) => Ok(Self(req.question)),
            Err(e) => {
                debug!(error = %e, "Unreadable ask request body");
                Ok(Self(None))
            }
        }
    }
}

/// POST /api/ask
///
/// Request body: `{"question": "..."}` or `question=...` (urlencoded form).
///
/// On success the AI service's JSON body is returned as-is. Errors are
/// `{"error": "..."}` with 400 (missing question), 429 (busy) or 500
/// (AI service failed).
pub async fn ask(State(state): State<AppState>, AskBody(question): AskBody) -> Response {
    match state.gate.handle(question).await {
        Ok(answer) => (
            [(header::CONTENT_TYPE, "application/json")],
            answer.into_bytes(),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
