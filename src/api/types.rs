use serde::{Deserialize, Serialize};

/// Body of the HTML form post.
#[derive(Debug, Deserialize)]
pub struct StoryForm {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub topic: String,
    pub story: String,
    pub model: String,
}
