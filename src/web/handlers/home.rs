//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page.
///
/// Renders `templates/index.html` with the input form posting to `/view`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct HomeTemplate {}

/// Renders the input form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
