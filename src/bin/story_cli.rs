use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use storyteller::{
    config::Settings,
    init_tracing,
    story::{StoryError, StoryService},
};
use tracing::warn;

/// Generate a short story on any topic from the terminal.
#[derive(Parser, Debug)]
#[command(name = "story_cli", version)]
struct Args {
    /// Topic or opening line for the story.
    #[arg(trailing_var_arg = true)]
    topic: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let settings = Settings::from_env().map_err(|err| {
        warn!("⚠️ {err}");
        err
    })?;

    let topic = args.topic.join(" ");
    let stories = StoryService::from_settings(&settings)?;

    match stories.generate(&topic).await {
        Ok(story) => {
            println!("📚 Generated Story\n");
            println!("{}", story.text);
            Ok(ExitCode::SUCCESS)
        }
        Err(StoryError::EmptyTopic) => {
            eprintln!("{}", StoryError::EmptyTopic);
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err.into()),
    }
}
