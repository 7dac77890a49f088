use leptos::prelude::*;

use super::{Header, PageContext, render_page};

pub fn render_not_found(ctx: &PageContext) -> String {
    let t = ctx.messages();
    let header_ctx = ctx.clone();
    let home_href = ctx.href("");

    render_page(ctx, Some(t.not_found.title.as_str()), || {
        view! {
            <Header ctx=header_ctx/>
            <main class="page not-found">
                <p class="status-code">"404"</p>
                <h1 class="page-title">{t.not_found.title.as_str()}</h1>
                <a class="button" href=home_href>{t.not_found.back_home.as_str()}</a>
            </main>
        }
        .into_any()
    })
}

#[cfg(test)]
#[path = "not_found_test.rs"]
mod tests;
