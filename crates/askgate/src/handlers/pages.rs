//! Static pages, embedded at build time.

use axum::response::{Html, IntoResponse};

use crate::response;

const HOME: &str = include_str!("../../assets/home.html");
const CHAT: &str = include_str!("../../assets/chat.html");
const ABOUT: &str = include_str!("../../assets/about.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME)
}

pub async fn chat() -> Html<&'static str> {
    Html(CHAT)
}

pub async fn about() -> Html<&'static str> {
    Html(ABOUT)
}

pub async fn not_found() -> impl IntoResponse {
    response::not_found("Not found")
}
