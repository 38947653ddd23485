//! Listing card for a research article or news post.

use leptos::prelude::*;

use crate::content::Article;
use crate::util::markdown::excerpt;

const EXCERPT_CHARS: usize = 180;

#[component]
pub fn ArticleCard(article: &'static Article, href: String, read_more: Signal<&'static str>) -> impl IntoView {
    view! {
        <article class="article-card">
            <p class="article-card__meta">
                <time datetime=article.date>{article.date}</time>
                " · "
                {article.author}
            </p>
            <h2 class="article-card__title">
                <a href=href.clone()>{article.title}</a>
            </h2>
            <p class="article-card__excerpt">{excerpt(article.body, EXCERPT_CHARS)}</p>
            <ul class="article-card__tags">
                {article.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
            </ul>
            <a href=href class="article-card__more">{move || read_more.get()}</a>
        </article>
    }
}
