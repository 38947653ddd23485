//! Full article view shared by research and news detail pages.

use leptos::prelude::*;

use crate::content::Article;
use crate::util::markdown::render_markdown;

#[component]
pub fn ArticleView(
    article: &'static Article,
    back_href: &'static str,
    back_label: Signal<&'static str>,
) -> impl IntoView {
    let rendered = render_markdown(article.body);

    view! {
        <article class="article">
            <a href=back_href class="article__back">{move || back_label.get()}</a>
            <h1 class="article__title">{article.title}</h1>
            <p class="article__meta">
                <time datetime=article.date>{article.date}</time>
                " · "
                {article.author}
            </p>
            <div class="article__body" inner_html=rendered></div>
        </article>
    }
}
