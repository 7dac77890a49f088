use super::*;
use crate::i18n::Locale;
use crate::ui::Theme;

#[test]
fn links_back_to_locale_home() {
    let ctx = PageContext::new(Locale::En, Theme::System, "/en/apps/missing");
    let html = render_not_found(&ctx);
    assert!(html.contains("<title>Page not found | Nantoka</title>"));
    assert!(html.contains(r#"<a class="button" href="/en">Back to home</a>"#));
    assert!(html.contains(r#"<p class="status-code">404</p>"#));
}

#[test]
fn uses_page_locale() {
    let ctx = PageContext::new(Locale::Ja, Theme::System, "/ja/notes/missing");
    let html = render_not_found(&ctx);
    assert!(html.contains(r#"lang="ja""#));
    assert!(html.contains(r#"href="/ja""#));
}
