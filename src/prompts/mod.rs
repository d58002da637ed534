use anyhow::Result;
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

// NOTE:
// The story prompt is a single fixed template with one slot. User input is
// substituted as-is: no trimming, no escaping.

const STORY_TEMPLATE_NAME: &str = "story_prompt.txt";

macro_rules! template_file {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $name))
    };
}

static PROMPTS: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(STORY_TEMPLATE_NAME, template_file!("story_prompt.txt"))
        .expect("invalid story prompt template");
    env
});

#[derive(Serialize)]
struct StoryPromptContext<'a> {
    user_input: &'a str,
}

/// Renders the story prompt with `user_input` in its slot.
pub fn story_prompt(user_input: &str) -> Result<String> {
    let prompt = PROMPTS
        .get_template(STORY_TEMPLATE_NAME)?
        .render(StoryPromptContext { user_input })?;
    Ok(prompt)
}
