//! Site header with primary navigation and the language switch.

use leptos::prelude::*;

use crate::util::i18n::t;
use crate::util::language::{Language, set_preference};

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "nav.home"),
    ("/team", "nav.team"),
    ("/research", "nav.research"),
    ("/news", "nav.news"),
    ("/contact", "nav.contact"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    let on_language = move |ev: leptos::ev::Event| {
        if let Some(next) = Language::from_tag(&event_target_value(&ev)) {
            lang.set(set_preference(next));
        }
    };

    view! {
        <header class="site-nav">
            <a href="/" class="site-nav__brand">"Meridian"</a>
            <nav class="site-nav__links">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, key)| {
                        view! {
                            <a href=href class="site-nav__link">
                                {move || t(lang.get(), key)}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <label class="site-nav__language">
                <span class="site-nav__language-label">{move || t(lang.get(), "nav.language")}</span>
                <select on:change=on_language prop:value=move || lang.get().code()>
                    {Language::ALL
                        .iter()
                        .map(|l| view! { <option value=l.code()>{l.label()}</option> })
                        .collect_view()}
                </select>
            </label>
        </header>
    }
}
