use leptos::prelude::*;

use super::{Card, Header, LinkButton, PageContext, TagList, render_page};
use crate::services::content::App;

pub fn render_apps_list(ctx: &PageContext, apps: &[App]) -> String {
    let t = ctx.messages();
    let header_ctx = ctx.clone();

    render_page(ctx, Some(t.apps.title.as_str()), || {
        let cards = if apps.is_empty() {
            view! { <p class="empty">{t.apps.empty.as_str()}</p> }.into_any()
        } else {
            apps.iter()
                .map(|app| {
                    let href = ctx.href(&format!("/apps/{}", app.id));
                    let title = app.name.clone();
                    let description = app.description.clone();
                    let tags = app.tags.clone();
                    let date = app.date.clone();
                    let featured = app.featured;
                    view! {
                        <Card href=href title=title description=description tags=tags date=date marked=featured/>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <Header ctx=header_ctx/>
            <main class="page">
                <h1 class="page-title">{t.apps.title.as_str()}</h1>
                <p class="page-description">{t.apps.description.as_str()}</p>
                <div class="grid">{cards}</div>
            </main>
        }
        .into_any()
    })
}

pub fn render_app_detail(ctx: &PageContext, app: &App) -> String {
    let t = ctx.messages();
    let header_ctx = ctx.clone();
    let back_href = ctx.href("/apps");

    render_page(ctx, Some(app.name.as_str()), || {
        let icon = app.icon.clone().map(|src| view! { <img class="app-icon" src=src alt="" width="96" height="96"/> });
        let links = app
            .links
            .labeled()
            .into_iter()
            .map(|(label, url)| view! { <LinkButton href=url.to_owned()>{label}</LinkButton> })
            .collect_view();

        let tags = app.tags.clone();

        view! {
            <Header ctx=header_ctx/>
            <main class="page detail">
                <a class="back-link" href=back_href>{t.apps.back.as_str()}</a>
                <article>
                    {icon}
                    <p class="detail-date">{app.date.clone()}</p>
                    <h1 class="page-title">{app.name.clone()}</h1>
                    <p class="page-description">{app.description.clone()}</p>
                    <h2>{t.modal.tech.as_str()}</h2>
                    <TagList tags=tags/>
                    <div class="detail-links">{links}</div>
                </article>
            </main>
        }
        .into_any()
    })
}

#[cfg(test)]
#[path = "apps_test.rs"]
mod tests;
