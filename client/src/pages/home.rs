//! Landing page: hero, services, chat prompt and latest research.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::chat_prompt::ChatPrompt;
use crate::content::{SERVICES, latest_research};
use crate::util::i18n::t;
use crate::util::language::Language;

const LATEST_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let read_more = Signal::derive(move || t(lang.get(), "research.read_more"));

    view! {
        <main class="page page--home">
            <section class="hero">
                <h1 class="hero__title">{move || t(lang.get(), "hero.title")}</h1>
                <p class="hero__subtitle">{move || t(lang.get(), "hero.subtitle")}</p>
                <ChatPrompt/>
            </section>
            <section class="services">
                <h2>{move || t(lang.get(), "home.services")}</h2>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="service-card">
                                    <h3>{s.title}</h3>
                                    <p>{s.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="latest">
                <h2>{move || t(lang.get(), "home.latest_research")}</h2>
                {latest_research(LATEST_COUNT)
                    .map(|a| view! { <ArticleCard article=a href=format!("/research/{}", a.slug) read_more=read_more/> })
                    .collect_view()}
            </section>
        </main>
    }
}
