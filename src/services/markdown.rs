//! Markdown rendering for note bodies.

use pulldown_cmark::{Options, Parser, html};

/// Render a Markdown document to an HTML fragment.
///
/// Raw HTML blocks are kept: note bodies are authored by the site owner.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
