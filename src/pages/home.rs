//! Home page: hero, featured apps, latest notes and the detail modal.
//!
//! Featured apps and latest notes share one index space so a single
//! `?open=N` query selects the entry shown in the modal. `nav=open` expands
//! the floating menu. Each toggle link points at the state after toggling it.

use leptos::prelude::*;

use super::{Card, FloatingMenu, Header, LinkButton, PageContext, TagList, render_page};
use crate::services::content::{App, Note};
use crate::ui::{DetailSelection, FloatingNav, header_hidden, home_query};

/// One item on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEntry {
    App(App),
    Note(Note),
}

impl HomeEntry {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::App(app) => &app.name,
            Self::Note(note) => &note.title,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::App(app) => &app.description,
            Self::Note(note) => &note.excerpt,
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        match self {
            Self::App(app) => &app.date,
            Self::Note(note) => &note.date,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::App(app) => &app.tags,
            Self::Note(note) => &note.tags,
        }
    }

    /// Full detail page for this entry.
    #[must_use]
    pub fn detail_href(&self, ctx: &PageContext) -> String {
        match self {
            Self::App(app) => ctx.href(&format!("/apps/{}", app.id)),
            Self::Note(note) => ctx.href(&format!("/notes/{}", note.slug)),
        }
    }
}

/// Apps first, then notes, in the order they appear on the page.
#[must_use]
pub fn home_entries(apps: Vec<App>, notes: Vec<Note>) -> Vec<HomeEntry> {
    apps.into_iter().map(HomeEntry::App).chain(notes.into_iter().map(HomeEntry::Note)).collect()
}

pub fn render_home(ctx: &PageContext, entries: &[HomeEntry], selection: DetailSelection, nav: FloatingNav) -> String {
    let ctx = &ctx.clone().with_query(home_query(selection, nav));
    let t = ctx.messages();
    let header_ctx = ctx.clone();
    let menu_ctx = ctx.clone();
    // Pages render at the top, so only an open detail hides the header.
    let hide_header = header_hidden(0, selection.is_open());

    render_page(ctx, None, || {
        let apps = section_items(ctx, entries, selection, |e| matches!(e, HomeEntry::App(_)));
        let notes = section_items(ctx, entries, selection, |e| matches!(e, HomeEntry::Note(_)));
        let modal = selection.selected().and_then(|i| entries.get(i)).map(|entry| detail_modal(ctx, entry, selection));
        view! {
            <Header ctx=header_ctx hidden=hide_header/>
            <main id="top" class="home">
                <section class="hero">
                    <h1 class="hero-title">{t.home.title.as_str()}</h1>
                    <p class="hero-subtitle">{t.home.subtitle.as_str()}</p>
                    <p class="hero-description">{t.home.description.as_str()}</p>
                </section>
                <section id="apps" class="section">
                    <h2 class="section-title">{t.home.featured.as_str()}</h2>
                    <div class="grid">{apps}</div>
                </section>
                <section id="notes" class="section">
                    <h2 class="section-title">{t.home.latest.as_str()}</h2>
                    <div class="list">{notes}</div>
                </section>
            </main>
            {modal}
            <FloatingMenu ctx=menu_ctx state=nav selection=selection/>
        }
        .into_any()
    })
}

fn section_items(
    ctx: &PageContext,
    entries: &[HomeEntry],
    selection: DetailSelection,
    include: impl Fn(&HomeEntry) -> bool,
) -> Vec<AnyView> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| include(entry))
        .map(|(index, entry)| entry_item(ctx, entry, index, selection))
        .collect()
}

fn entry_item(ctx: &PageContext, entry: &HomeEntry, index: usize, selection: DetailSelection) -> AnyView {
    let t = ctx.messages();
    let selected = selection.is_selected(index);
    let toggle_href = format!("{}{}", ctx.path, home_query(selection.toggled(index), FloatingNav::default()));
    let label = match (selected, entry) {
        (true, _) => t.modal.close.as_str(),
        (false, HomeEntry::App(_)) => t.modal.view_app.as_str(),
        (false, HomeEntry::Note(_)) => t.modal.read_note.as_str(),
    };
    let href = entry.detail_href(ctx);
    let title = entry.title().to_owned();
    let description = entry.description().to_owned();
    let tags = entry.tags().to_vec();
    let date = entry.date().to_owned();

    view! {
        <article class="entry" data-index=index.to_string()>
            <Card href=href title=title description=description tags=tags date=date marked=selected/>
            <a class="detail-toggle" href=toggle_href aria-expanded=selected.to_string()>
                {label}
            </a>
        </article>
    }
    .into_any()
}

fn detail_modal(ctx: &PageContext, entry: &HomeEntry, selection: DetailSelection) -> AnyView {
    let t = ctx.messages();
    let close_href = format!("{}{}", ctx.path, home_query(selection.closed(), FloatingNav::default()));
    let title = entry.title().to_owned();
    let description = entry.description().to_owned();
    let date = entry.date().to_owned();
    let tags = entry.tags().to_vec();
    let detail_href = entry.detail_href(ctx);

    let links = match entry {
        HomeEntry::App(app) => app
            .links
            .labeled()
            .into_iter()
            .map(|(label, url)| view! { <LinkButton href=url.to_owned()>{label}</LinkButton> })
            .collect_view()
            .into_any(),
        HomeEntry::Note(_) => ().into_any(),
    };
    let tags_heading = matches!(entry, HomeEntry::App(_)).then(|| view! { <h3>{t.modal.tech.as_str()}</h3> });

    let aria_label = title.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true" aria-label=aria_label>
                <a class="modal-close" href=close_href>{t.modal.close.as_str()}</a>
                <p class="modal-date">{date}</p>
                <h2 class="modal-title">{title}</h2>
                <p class="modal-description">{description}</p>
                {tags_heading}
                <TagList tags=tags/>
                <div class="modal-links">
                    {links}
                    <LinkButton href=detail_href>{t.modal.open_detail.as_str()}</LinkButton>
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
