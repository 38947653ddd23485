//! Research listing and article pages.
//!
//! The listing grid carries `data-scroll-section`, so any click inside it
//! snapshots the scroll offset before the article opens. Coming back restores
//! the visitor to the card they left from.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::ArticleCard;
use crate::components::article_view::ArticleView;
use crate::content::{RESEARCH, research_article};
use crate::pages::not_found::NotFound;
use crate::util::i18n::t;
use crate::util::language::Language;

#[component]
pub fn ResearchPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let read_more = Signal::derive(move || t(lang.get(), "research.read_more"));

    view! {
        <main class="page page--research">
            <h1>{move || t(lang.get(), "research.title")}</h1>
            <section class="article-grid" data-scroll-section="research">
                {RESEARCH
                    .iter()
                    .map(|a| view! { <ArticleCard article=a href=format!("/research/{}", a.slug) read_more=read_more/> })
                    .collect_view()}
            </section>
        </main>
    }
}

#[component]
pub fn ResearchArticlePage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let params = use_params_map();
    let back_label = Signal::derive(move || t(lang.get(), "research.back"));

    move || match params.read().get("slug").as_deref().and_then(research_article) {
        Some(article) => view! { <ArticleView article=article back_href="/research" back_label=back_label/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}
