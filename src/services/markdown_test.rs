use super::*;

#[test]
fn renders_headings_and_paragraphs() {
    let html = render_markdown("# Title\n\nHello *world*.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>Hello <em>world</em>.</p>"));
}

#[test]
fn renders_tables_and_strikethrough() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");
    assert!(html.contains("<table>"));
    assert!(html.contains("<del>old</del>"));
}

#[test]
fn renders_task_lists() {
    let html = render_markdown("- [x] done\n- [ ] todo");
    assert!(html.contains("checkbox"));
}

#[test]
fn escapes_text_but_keeps_author_html() {
    let html = render_markdown("1 < 2\n\n<div class=\"note\">raw</div>");
    assert!(html.contains("1 &lt; 2"));
    assert!(html.contains("<div class=\"note\">raw</div>"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render_markdown(""), "");
}
