//! Admin entry list and editor.
//!
//! Both pages read rows through the worker proxy and post changes back to the
//! server, which redirects with `?error=` when the worker refuses.

use leptos::prelude::*;

use super::{PageContext, SITE_TITLE, ThemeToggle, render_page};
use crate::i18n::{Locale, Messages};
use crate::services::entries::{ContentEntry, EditorForm, EntryFilter, EntryKind, EntryStatus};
use crate::ui::Theme;

pub const ADMIN_PATH: &str = "/admin";
pub const EDITOR_PATH: &str = "/admin/editor";

/// Editor URL for an existing row, or for a new entry.
#[must_use]
pub fn editor_href(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{EDITOR_PATH}?id={id}"),
        None => EDITOR_PATH.to_owned(),
    }
}

/// `error` is the raw `?error=` query value; any non-empty value shows the alert.
pub fn render_admin(ctx: &PageContext, entries: &[ContentEntry], filter: EntryFilter, error: Option<&str>) -> String {
    let t = ctx.messages();
    let theme = ctx.theme;
    let redirect = ctx.current_href();
    let alert = error.filter(|e| !e.is_empty()).map(|e| alert_message(t, e));

    render_page(ctx, Some(t.admin.title.as_str()), || {
        let alert = alert.map(|message| view! { <div class="alert" role="alert">{message}</div> });
        let rows = if entries.is_empty() {
            view! { <p class="empty">{t.admin.empty.as_str()}</p> }.into_any()
        } else {
            entries.iter().map(|entry| entry_card(t, entry)).collect_view().into_any()
        };

        view! {
            <AdminHeader theme=theme redirect=redirect/>
            <main class="page admin">
                <div class="admin-toolbar">
                    <h1 class="page-title">{t.admin.title.as_str()}</h1>
                    <a class="button" href=EDITOR_PATH>{t.admin.create.as_str()}</a>
                </div>
                {alert}
                {filter_form(t, filter)}
                <div class="admin-entries">{rows}</div>
            </main>
        }
        .into_any()
    })
}

/// Editor for one entry. `form.id` set means the form updates that row.
pub fn render_editor(ctx: &PageContext, form: &EditorForm, error: Option<&str>) -> String {
    let t = ctx.messages();
    let theme = ctx.theme;
    let redirect = ctx.current_href();
    let editing = form.target_id().map(str::to_owned);
    let heading = if editing.is_some() { t.admin.edit_title.as_str() } else { t.admin.create_title.as_str() };
    let show_alert = error.is_some_and(|e| !e.is_empty());

    let kinds = EntryKind::ALL.map(|kind| (kind.as_str(), kind.as_str()));
    let locales = Locale::ALL.map(|locale| (locale.as_str(), locale.label()));
    let statuses = [EntryStatus::Draft, EntryStatus::Published].map(|status| (status.as_str(), status_label(t, status)));

    render_page(ctx, Some(heading), || {
        let alert = show_alert.then(|| view! { <div class="alert" role="alert">{t.admin.save_failed.as_str()}</div> });
        let id_field = editing.map(|id| view! { <input type="hidden" name="id" value=id/> });
        let entry_id = form.entry_id.clone();
        let title = form.title.clone();
        let description = form.description.clone();
        let date = form.date.clone();

        view! {
            <AdminHeader theme=theme redirect=redirect/>
            <main class="page admin">
                <h1 class="page-title">{heading}</h1>
                {alert}
                <form class="editor-form" method="post" action=EDITOR_PATH>
                    {id_field}
                    <label>
                        {t.admin.field_entry_id.as_str()}
                        <input type="text" name="entry_id" value=entry_id required=true/>
                    </label>
                    <label>
                        {t.admin.field_type.as_str()}
                        <select name="type">{select_options(&kinds, &form.kind)}</select>
                    </label>
                    <label>
                        {t.admin.field_locale.as_str()}
                        <select name="locale">{select_options(&locales, &form.locale)}</select>
                    </label>
                    <label>
                        {t.admin.field_title.as_str()}
                        <input type="text" name="title" value=title required=true/>
                    </label>
                    <label>
                        {t.admin.field_description.as_str()}
                        <textarea name="description" rows="4">{description}</textarea>
                    </label>
                    <label>
                        {t.admin.field_date.as_str()}
                        <input type="text" name="date" value=date placeholder="2024-12-04"/>
                    </label>
                    <label>
                        {t.admin.field_status.as_str()}
                        <select name="status">{select_options(&statuses, &form.status)}</select>
                    </label>
                    <div class="editor-actions">
                        <button type="submit" class="button">{t.admin.save.as_str()}</button>
                        <a class="button" href=ADMIN_PATH>{t.admin.cancel.as_str()}</a>
                    </div>
                </form>
            </main>
        }
        .into_any()
    })
}

#[component]
fn AdminHeader(theme: Theme, redirect: String) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <a class="nav-item brand" href=ADMIN_PATH>{SITE_TITLE}" admin"</a>
                <div class="controls">
                    <ThemeToggle theme=theme redirect=redirect/>
                </div>
            </div>
        </header>
    }
}

/// `(value, label)` options with `current` preselected.
fn select_options(options: &[(&'static str, &'static str)], current: &str) -> impl IntoView + use<> {
    options
        .iter()
        .map(|&(value, label)| {
            let selected = value == current;
            view! { <option value=value selected=selected>{label}</option> }
        })
        .collect_view()
}

fn alert_message(t: &'static Messages, error: &str) -> &'static str {
    match error {
        "save" => t.admin.save_failed.as_str(),
        "load" => t.admin.load_failed.as_str(),
        _ => t.admin.delete_failed.as_str(),
    }
}

fn filter_form(t: &'static Messages, filter: EntryFilter) -> impl IntoView {
    let locales = Locale::ALL
        .into_iter()
        .map(|locale| {
            let selected = filter.locale == Some(locale);
            view! { <option value=locale.as_str() selected=selected>{locale.label()}</option> }
        })
        .collect_view();
    let statuses = [EntryStatus::Draft, EntryStatus::Published]
        .into_iter()
        .map(|status| {
            let selected = filter.status == Some(status);
            view! { <option value=status.as_str() selected=selected>{status_label(t, status)}</option> }
        })
        .collect_view();
    let any_locale = filter.locale.is_none();
    let any_status = filter.status.is_none();

    view! {
        <form class="admin-filter" method="get" action=ADMIN_PATH>
            <select name="locale">
                <option value="" selected=any_locale>{t.admin.all_locales.as_str()}</option>
                {locales}
            </select>
            <select name="status">
                <option value="" selected=any_status>{t.admin.all_statuses.as_str()}</option>
                {statuses}
            </select>
            <button type="submit" class="button">{t.admin.filter.as_str()}</button>
        </form>
    }
}

fn entry_card(t: &'static Messages, entry: &ContentEntry) -> impl IntoView + use<> {
    let status_class = format!("badge badge-{}", entry.status.as_str());
    let edit_href = editor_href(Some(&entry.id.to_string()));
    let delete_action = format!("{ADMIN_PATH}/entries/{}/delete", entry.id);
    let status = status_label(t, entry.status);
    let locale = entry.locale.label();
    let kind = entry.kind.as_str();
    let date = entry.date.clone();
    let title = entry.title.clone();
    let description = entry.description.clone();

    view! {
        <article class="admin-entry">
            <div class="badges">
                <span class=status_class>{status}</span>
                <span class="badge">{locale}</span>
                <span class="badge">{kind}</span>
            </div>
            <p class="entry-date">{date}</p>
            <h2 class="entry-title">{title}</h2>
            <p class="entry-description">{description}</p>
            <div class="entry-actions">
                <a class="button" href=edit_href>{t.admin.edit.as_str()}</a>
                <form method="post" action=delete_action>
                    <button type="submit" class="button button-danger">{t.admin.delete.as_str()}</button>
                </form>
            </div>
        </article>
    }
}

fn status_label(t: &'static Messages, status: EntryStatus) -> &'static str {
    match status {
        EntryStatus::Draft => t.admin.draft.as_str(),
        EntryStatus::Published => t.admin.published.as_str(),
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
