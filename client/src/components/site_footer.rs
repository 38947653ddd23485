//! Site footer with legal links.

use leptos::prelude::*;

use crate::util::i18n::t;
use crate::util::language::Language;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <footer class="site-footer">
            <a href="/legal/privacy">{move || t(lang.get(), "legal.privacy")}</a>
            <a href="/legal/terms">{move || t(lang.get(), "legal.terms")}</a>
            <span class="site-footer__rights">"© Meridian Labs. " {move || t(lang.get(), "footer.rights")}</span>
        </footer>
    }
}
