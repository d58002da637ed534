use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::{error, warn};

use crate::{
    api::{
        page::{self, PageView},
        types::{StoryForm, StoryRequest, StoryResponse},
        AppState,
    },
    story::StoryError,
};

type HandlerError = (StatusCode, String);

pub async fn index() -> Result<Html<String>, HandlerError> {
    render_page(&PageView::default()).map(Html)
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<StoryForm>,
) -> Result<(StatusCode, Html<String>), HandlerError> {
    match state.stories.generate(&form.topic).await {
        Ok(story) => {
            let view = PageView {
                topic: story.topic,
                error: None,
                story: Some(story.text),
            };
            Ok((StatusCode::OK, Html(render_page(&view)?)))
        }
        Err(StoryError::EmptyTopic) => {
            let view = PageView {
                topic: form.topic,
                error: Some(StoryError::EmptyTopic.to_string()),
                story: None,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(render_page(&view)?)))
        }
        Err(err) => Err(generation_failed(err)),
    }
}

pub async fn generate_story(
    State(state): State<AppState>,
    Json(payload): Json<StoryRequest>,
) -> Result<Json<StoryResponse>, HandlerError> {
    let story = state.stories.generate(&payload.topic).await.map_err(|err| match err {
        StoryError::EmptyTopic => (StatusCode::BAD_REQUEST, "topic_required".to_string()),
        other => generation_failed(other),
    })?;

    Ok(Json(StoryResponse {
        topic: story.topic,
        story: story.text,
        model: story.model,
    }))
}

pub async fn health() -> &'static str {
    "ok"
}

fn render_page(view: &PageView) -> Result<String, HandlerError> {
    page::render(view).map_err(|e| {
        error!(error = %e, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

fn generation_failed(err: StoryError) -> HandlerError {
    warn!(error = %err, "remote generation failed");
    (StatusCode::BAD_GATEWAY, err.to_string())
}
