//! Team page.

use leptos::prelude::*;

use crate::content::TEAM;
use crate::util::i18n::t;
use crate::util::language::Language;

#[component]
pub fn TeamPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <main class="page page--team">
            <h1>{move || t(lang.get(), "team.title")}</h1>
            <ul class="team-grid">
                {TEAM
                    .iter()
                    .map(|m| {
                        view! {
                            <li class="team-card">
                                <h2 class="team-card__name">{m.name}</h2>
                                <p class="team-card__role">{m.role}</p>
                                <p class="team-card__bio">{m.bio}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}
