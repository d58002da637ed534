use std::{fmt, sync::Arc};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    config::Settings,
    inference::{GeminiClient, TextGenerator},
    prompts,
};

pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic or sentence.";

#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub topic: String,
    pub text: String,
    pub model: String,
}

#[derive(Debug)]
pub enum StoryError {
    EmptyTopic,
    Generation(anyhow::Error),
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopic => f.write_str(EMPTY_TOPIC_MESSAGE),
            Self::Generation(err) => write!(f, "story generation failed: {err:#}"),
        }
    }
}

// No `source()`: Display already includes the backend's error chain.
impl std::error::Error for StoryError {}

/// Topic in, story out. Holds no per-request state.
#[derive(Clone)]
pub struct StoryService {
    generator: Arc<dyn TextGenerator>,
}

impl StoryService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Service backed by the hosted Gemini API.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(GeminiClient::new(settings)?)))
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Whitespace-only topics are rejected before the backend is touched.
    /// Anything else goes into the template verbatim and the backend is called
    /// exactly once; its failure is returned as-is.
    pub async fn generate(&self, topic: &str) -> Result<Story, StoryError> {
        if topic.trim().is_empty() {
            return Err(StoryError::EmptyTopic);
        }

        let request_id = Uuid::new_v4();
        let prompt = prompts::story_prompt(topic).map_err(StoryError::Generation)?;

        info!(
            %request_id,
            model = self.generator.model_name(),
            topic_len = topic.len(),
            "generating story"
        );

        let text = self
            .generator
            .generate(&prompt)
            .await
            .map_err(StoryError::Generation)?;

        info!(%request_id, story_len = text.len(), "story generated");

        Ok(Story {
            topic: topic.to_string(),
            text,
            model: self.generator.model_name().to_string(),
        })
    }
}
