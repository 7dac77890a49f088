use leptos::prelude::*;

use super::{Card, Header, PageContext, TagList, render_page};
use crate::services::content::Note;
use crate::services::markdown::render_markdown;

pub fn render_notes_list(ctx: &PageContext, notes: &[Note]) -> String {
    let t = ctx.messages();
    let header_ctx = ctx.clone();

    render_page(ctx, Some(t.notes.title.as_str()), || {
        let cards = if notes.is_empty() {
            view! { <p class="empty">{t.notes.empty.as_str()}</p> }.into_any()
        } else {
            notes
                .iter()
                .map(|note| {
                    let href = ctx.href(&format!("/notes/{}", note.slug));
                    let title = note.title.clone();
                    let excerpt = note.excerpt.clone();
                    let tags = note.tags.clone();
                    let date = note.date.clone();
                    view! { <Card href=href title=title description=excerpt tags=tags date=date/> }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <Header ctx=header_ctx/>
            <main class="page">
                <h1 class="page-title">{t.notes.title.as_str()}</h1>
                <p class="page-description">{t.notes.description.as_str()}</p>
                <div class="list">{cards}</div>
            </main>
        }
        .into_any()
    })
}

/// Note page; the Markdown body is rendered to HTML and inserted as-is.
pub fn render_note_detail(ctx: &PageContext, note: &Note) -> String {
    let t = ctx.messages();
    let header_ctx = ctx.clone();
    let back_href = ctx.href("/notes");
    let body = render_markdown(note.content.as_deref().unwrap_or_default());

    render_page(ctx, Some(note.title.as_str()), || {
        let tags = note.tags.clone();
        view! {
            <Header ctx=header_ctx/>
            <main class="page detail">
                <a class="back-link" href=back_href>{t.notes.back.as_str()}</a>
                <article class="note">
                    <p class="detail-date">{note.date.clone()}</p>
                    <h1 class="page-title">{note.title.clone()}</h1>
                    <TagList tags=tags/>
                    <div class="prose" inner_html=body></div>
                </article>
            </main>
        }
        .into_any()
    })
}

#[cfg(test)]
#[path = "notes_test.rs"]
mod tests;
