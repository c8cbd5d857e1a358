//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides every shared context once: the query context (cache + API
//! client), the service registry, toasts, UI chrome and the grading queue.
//! Browser-only work (runtime config, persisted preferences, the grading
//! worker) starts in effects so the server render stays deterministic.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::client::ApiClient;
use crate::net::services::ServiceRegistry;
use crate::pages::{
    ai_weekly::AiWeeklyPage, catalog::CatalogPage, docs::DocsPage, efficiency::EfficiencyPage, files::FilesPage,
    finance::FinancePage, grading::GradingPage, homework::HomeworkPage, overview::OverviewPage,
    person_detail::PersonDetailPage, persons::PersonsPage, skills::SkillsPage, wake::WakePage,
    wordbook::WordbookPage,
};
use crate::query::{CacheConfig, QueryCache, hooks::QueryContext};
use crate::state::grading::GradingQueue;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::state::wordbook::WordbookSession;
use crate::util::ui_persistence::BrowserStorage;

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let registry = RwSignal::new(ServiceRegistry::default());
    let grading = RwSignal::new(GradingQueue::default());
    let wordbook = RwSignal::new(WordbookSession::default());

    provide_context(toasts);
    provide_context(ui);
    provide_context(registry);
    provide_context(grading);
    provide_context(wordbook);

    let client = ApiClient::for_environment();
    let ctx = QueryContext::provide(QueryCache::new(CacheConfig::default()), client);

    // One-time browser start-up: preferences, persisted queue, service catalog.
    Effect::new(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        let dark = crate::util::dark_mode::read_preference(&BrowserStorage);
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        grading.set(GradingQueue::restore(&BrowserStorage));
        crate::pages::grading::spawn_grading_worker(grading, ctx, toasts);
        crate::query::hooks::spawn_cache_gc(ctx);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = ctx.client();
            match client.load_runtime_config().await {
                Ok(_) => registry.set(client.registry()),
                Err(e) => log::warn!("runtime config unavailable, using defaults: {e}"),
            }
        });
    });

    // Persist the grading queue after every change once it has been restored.
    Effect::new(move |restored: Option<bool>| {
        let queue = grading.get();
        if restored == Some(true) {
            queue.save(&BrowserStorage);
        }
        true
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Personal Info"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <p class="page__empty">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("persons") view=PersonsPage/>
                    <Route path=(StaticSegment("persons"), ParamSegment("id")) view=PersonDetailPage/>
                    <Route path=StaticSegment("homework") view=HomeworkPage/>
                    <Route path=(StaticSegment("homework"), StaticSegment("grading")) view=GradingPage/>
                    <Route path=StaticSegment("wordbook") view=WordbookPage/>
                    <Route path=StaticSegment("ai-weekly") view=AiWeeklyPage/>
                    <Route path=StaticSegment("catalog") view=CatalogPage/>
                    <Route path=StaticSegment("files") view=FilesPage/>
                    <Route path=StaticSegment("finance") view=FinancePage/>
                    <Route path=StaticSegment("efficiency") view=EfficiencyPage/>
                    <Route path=StaticSegment("docs") view=DocsPage/>
                    <Route path=StaticSegment("wake") view=WakePage/>
                    <Route path=StaticSegment("skills") view=SkillsPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
