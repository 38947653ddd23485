//! Fallback for unknown routes and slugs.

use leptos::prelude::*;

use crate::util::i18n::t;
use crate::util::language::Language;

#[component]
pub fn NotFound() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <main class="page page--not-found">
            <h1>{move || t(lang.get(), "not_found.title")}</h1>
            <a href="/">{move || t(lang.get(), "nav.home")}</a>
        </main>
    }
}
