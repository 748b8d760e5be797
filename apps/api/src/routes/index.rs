use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET /
/// Static landing page with upload and answer forms.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
