use anyhow::Result;
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

pub const PAGE_TITLE: &str = "Apple AI Story Generator";

// `.html` templates are auto-escaped, so topic and story text render as text.
const PAGE_TEMPLATE_NAME: &str = "index.html";

static PAGES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(
        PAGE_TEMPLATE_NAME,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html")),
    )
    .expect("invalid page template");
    env
});

#[derive(Debug, Default, Serialize)]
pub struct PageView {
    pub topic: String,
    pub error: Option<String>,
    pub story: Option<String>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    page_title: &'a str,
    #[serde(flatten)]
    view: &'a PageView,
}

pub fn render(view: &PageView) -> Result<String> {
    let html = PAGES.get_template(PAGE_TEMPLATE_NAME)?.render(PageContext {
        page_title: PAGE_TITLE,
        view,
    })?;
    Ok(html)
}
