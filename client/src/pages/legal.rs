//! Legal documents (`/legal/privacy`, `/legal/terms`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::content::legal_doc;
use crate::pages::not_found::NotFound;
use crate::util::markdown::render_markdown;

#[component]
pub fn LegalPage() -> impl IntoView {
    let params = use_params_map();

    move || match params.read().get("doc").as_deref().and_then(legal_doc) {
        Some(doc) => view! {
            <main class="page page--legal">
                <h1>{doc.title}</h1>
                <p class="legal__updated">"Last updated " <time datetime=doc.updated>{doc.updated}</time></p>
                <div class="legal__body" inner_html=render_markdown(doc.body)></div>
            </main>
        }
        .into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}
