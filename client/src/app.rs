//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::scroll_memory::ScrollMemory;
use crate::components::site_footer::SiteFooter;
use crate::components::site_nav::SiteNav;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::legal::LegalPage;
use crate::pages::news::{NewsPage, NewsPostPage};
use crate::pages::not_found::NotFound;
use crate::pages::research::{ResearchArticlePage, ResearchPage};
use crate::pages::team::TeamPage;
use crate::util::language::{self, Language};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the language context and mounts scroll memory around the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Server renders English; the stored preference is applied after hydration.
    let lang = RwSignal::new(Language::default());
    provide_context(lang);
    Effect::new(move || {
        let preferred = language::read_preference();
        language::apply(preferred);
        lang.set(preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/meridian.css"/>
        <Title text="Meridian"/>

        <Router>
            <SiteNav/>
            <ScrollMemory>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=StaticSegment("research") view=ResearchPage/>
                    <Route path=(StaticSegment("research"), ParamSegment("slug")) view=ResearchArticlePage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("slug")) view=NewsPostPage/>
                    <Route path=(StaticSegment("legal"), ParamSegment("doc")) view=LegalPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </ScrollMemory>
            <SiteFooter/>
        </Router>
    }
}
