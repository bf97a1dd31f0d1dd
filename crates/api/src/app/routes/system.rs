use axum::{http::StatusCode, response::Html};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
