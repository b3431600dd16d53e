//! Result page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::render::RenderResult;
use crate::error::{EmbedError, ErrorTemplate};
use crate::state::AppState;

/// Form submitted from the home page.
#[derive(Debug, Deserialize)]
pub struct ViewForm {
    pub tiktok_input: String,
}

/// Template for a successful lookup.
///
/// Renders `templates/result.html`. `embed_html` is inserted unescaped; it is
/// the markup returned by oEmbed.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub kind: &'static str,
    pub display_url: String,
    pub embed_html: Option<String>,
}

impl IntoResponse for RenderResult {
    fn into_response(self) -> Response {
        match self {
            RenderResult::ProfileHint { display_url } => ResultTemplate {
                kind: "profile",
                display_url,
                embed_html: None,
            }
            .into_response(),
            RenderResult::PostEmbed {
                display_url,
                embed_html,
            } => ResultTemplate {
                kind: "post",
                display_url,
                embed_html: Some(embed_html),
            }
            .into_response(),
            RenderResult::Error { message } => ErrorTemplate { message }.into_response(),
        }
    }
}

/// Resolves the submitted input and renders the outcome.
///
/// # Endpoint
///
/// `POST /view` (form field `tiktok_input`, required)
///
/// # Response Codes
///
/// **200 OK** for every lookup outcome. Profile hints and post embeds render `result.html`;
/// every [`EmbedError`] renders `error.html` with its message.
///
/// An empty `tiktok_input` is accepted by the extractor and ends up on the
/// invalid-input page. A request without `tiktok_input` is rejected by the [`Form`] extractor.
pub async fn view_handler(
    State(state): State<AppState>,
    Form(form): Form<ViewForm>,
) -> Result<RenderResult, EmbedError> {
    state.embed_service.try_resolve(&form.tiktok_input).await
}
