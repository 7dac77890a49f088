//! Server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are Leptos components rendered to HTML strings on each request.
//! There is no client bundle: interactive chrome (theme toggle, language
//! switch, detail modal, floating nav) is expressed as links and forms whose
//! next state is encoded in the URL or a cookie.

pub mod admin;
pub mod apps;
pub mod home;
pub mod not_found;
pub mod notes;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::i18n::{Locale, Messages, switch_locale_path};
use crate::ui::{DetailSelection, FloatingNav, NAV_AUTO_CLOSE, NAV_FADE_OUT, Theme, home_query};

pub const SITE_TITLE: &str = "Nantoka";
pub const SITE_DESCRIPTION: &str = "Apps & Development Notes";

/// Per-request rendering inputs shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub locale: Locale,
    pub theme: Theme,
    /// Request path, used for the language switch and post-toggle redirects.
    pub path: String,
    /// Page state carried in the URL: empty or starting with `?`.
    pub query: String,
}

impl PageContext {
    #[must_use]
    pub fn new(locale: Locale, theme: Theme, path: impl Into<String>) -> Self {
        Self { locale, theme, path: path.into(), query: String::new() }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Current page including its state, where the theme form returns to.
    #[must_use]
    pub fn current_href(&self) -> String {
        format!("{}{}", self.path, self.query)
    }

    #[must_use]
    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Site-relative URL under this page's locale.
    #[must_use]
    pub fn href(&self, rest: &str) -> String {
        format!("/{}{rest}", self.locale)
    }

    /// Same page in the other language.
    #[must_use]
    pub fn alternate_href(&self) -> String {
        switch_locale_path(&self.path, self.locale, self.locale.toggle())
    }
}

/// Wrap page content in the document shell and render it.
pub fn render_page(ctx: &PageContext, title: Option<&str>, content: impl FnOnce() -> AnyView) -> String {
    let full_title = match title {
        Some(title) => format!("{title} | {SITE_TITLE}"),
        None => SITE_TITLE.to_owned(),
    };
    let lang = ctx.locale.as_str();
    let theme = ctx.theme.data_attribute();

    let html = Owner::new().with(|| {
        let body = content();
        view! {
            <html lang=lang data-theme=theme>
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{full_title}</title>
                    <meta name="description" content=SITE_DESCRIPTION/>
                    <link rel="icon" type="image/svg+xml" href="/assets/icon.svg"/>
                    <link rel="stylesheet" href="/assets/styles.css"/>
                </head>
                <body>{body}</body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

// =============================================================================
// SHARED COMPONENTS
// =============================================================================

/// Top bar with section links, theme toggle and language switch.
#[component]
pub fn Header(ctx: PageContext, #[prop(optional)] hidden: bool) -> impl IntoView {
    let t = ctx.messages();
    let class = if hidden { "header header-hidden" } else { "header" };
    let home_href = ctx.href("");
    let apps_href = ctx.href("/apps");
    let notes_href = ctx.href("/notes");
    let theme = ctx.theme;
    let redirect = ctx.current_href();

    view! {
        <header class=class>
            <div class="header-inner">
                <a class="nav-item brand" href=home_href>{SITE_TITLE}</a>
                <nav class="nav">
                    <a class="nav-link" href=apps_href>{t.nav.apps.as_str()}</a>
                    <a class="nav-link" href=notes_href>{t.nav.notes.as_str()}</a>
                </nav>
                <div class="controls">
                    <ThemeToggle theme=theme redirect=redirect/>
                    <LangToggle ctx=ctx/>
                </div>
            </div>
        </header>
    }
}

/// Posts to the preference endpoint, which cycles light, dark, system.
#[component]
pub fn ThemeToggle(theme: Theme, redirect: String) -> impl IntoView {
    let title = format!("Current: {}", theme.as_str());
    let icon = theme.icon(false);
    let label = theme.label(false);
    view! {
        <form class="theme-toggle" method="post" action="/preferences/theme">
            <input type="hidden" name="redirect" value=redirect/>
            <button type="submit" class="nav-item" aria-label="Toggle theme" title=title>
                <span class="theme-icon">{icon}</span>
                <span class="theme-label">{label}</span>
            </button>
        </form>
    }
}

/// Link to the other language. `query` is appended to the target path.
#[component]
pub fn LangToggle(ctx: PageContext, #[prop(optional)] query: String) -> impl IntoView {
    let href = format!("{}{query}", ctx.alternate_href());
    let hreflang = ctx.locale.toggle().as_str();
    let label = ctx.locale.label();
    view! {
        <a class="lang-toggle" href=href hreflang=hreflang aria-label="Toggle language">
            {label}
        </a>
    }
}

/// Home page floating menu. Every link carries the menu state it leads to,
/// and `selection` keeps an open detail across those links.
#[component]
pub fn FloatingMenu(
    ctx: PageContext,
    #[prop(optional)] state: FloatingNav,
    #[prop(optional)] selection: DetailSelection,
) -> impl IntoView {
    let t = ctx.messages();
    let trigger_href = format!("{}{}", ctx.path, home_query(selection, state.toggled()));
    let expanded = state.is_open().to_string();
    let phase = state.phase();

    let menu = state.is_open().then(|| {
        let jump = home_query(selection, state.navigated());
        let top_href = format!("{}{jump}#top", ctx.path);
        let apps_href = format!("{}{jump}#apps", ctx.path);
        let notes_href = format!("{}{jump}#notes", ctx.path);
        let kept = home_query(selection, state.touched());
        let redirect = format!("{}{kept}", ctx.path);
        let style = format!(
            "--nav-auto-close: {}ms; --nav-fade-out: {}ms",
            NAV_AUTO_CLOSE.as_millis(),
            NAV_FADE_OUT.as_millis()
        );
        let theme = ctx.theme;
        let lang_ctx = ctx.clone();

        view! {
            <div class="floating-menu" style=style>
                <a class="menu-item" href=top_href>{t.nav.home.as_str()}</a>
                <a class="menu-item" href=apps_href>{t.nav.apps.as_str()}</a>
                <a class="menu-item" href=notes_href>{t.nav.notes.as_str()}</a>
                <div class="divider"></div>
                <ThemeToggle theme=theme redirect=redirect/>
                <LangToggle ctx=lang_ctx query=kept/>
            </div>
        }
    });

    view! {
        <nav class="floating-nav" data-phase=phase>
            <a class="floating-trigger" href=trigger_href aria-label="Toggle navigation" aria-expanded=expanded>
                <span class="line"></span>
            </a>
            {menu}
        </nav>
    }
}

/// Summary card linking to a detail page.
#[component]
pub fn Card(
    href: String,
    title: String,
    description: String,
    #[prop(optional)] tags: Vec<String>,
    #[prop(optional)] date: String,
    #[prop(optional)] marked: bool,
) -> impl IntoView {
    let class = if marked { "card card-marked" } else { "card" };
    let date = (!date.is_empty()).then(|| view! { <p class="card-date">{date}</p> });

    view! {
        <a class=class href=href>
            <div class="card-content">
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{description}</p>
                <div class="card-footer">
                    <TagList tags=tags/>
                    {date}
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="tags">
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
    }
}

/// External links open in a new tab; site links stay in place.
#[component]
pub fn LinkButton(href: String, children: Children) -> impl IntoView {
    if is_external(&href) {
        view! {
            <a class="button" href=href target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! { <a class="button" href=href>{children()}</a> }.into_any()
    }
}

pub(crate) fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
