//! News listing and post pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::ArticleCard;
use crate::components::article_view::ArticleView;
use crate::content::{NEWS, news_post};
use crate::pages::not_found::NotFound;
use crate::util::i18n::t;
use crate::util::language::Language;

#[component]
pub fn NewsPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let read_more = Signal::derive(move || t(lang.get(), "research.read_more"));

    view! {
        <main class="page page--news">
            <h1>{move || t(lang.get(), "news.title")}</h1>
            <section class="article-list">
                {NEWS
                    .iter()
                    .map(|a| view! { <ArticleCard article=a href=format!("/news/{}", a.slug) read_more=read_more/> })
                    .collect_view()}
            </section>
        </main>
    }
}

#[component]
pub fn NewsPostPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let params = use_params_map();
    let back_label = Signal::derive(move || t(lang.get(), "news.back"));

    move || match params.read().get("slug").as_deref().and_then(news_post) {
        Some(post) => view! { <ArticleView article=post back_href="/news" back_label=back_label/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}
