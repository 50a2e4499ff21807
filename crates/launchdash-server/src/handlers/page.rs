use axum::{
    http::header,
    response::{Html, IntoResponse},
};

// The page is a static shell; widgets are built client-side from /api/layout.
static INDEX_HTML: &str = include_str!("../../assets/index.html");
static DASHBOARD_JS: &str = include_str!("../../assets/dashboard.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}
