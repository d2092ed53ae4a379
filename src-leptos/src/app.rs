//! Main App component with routing

use crate::components::{CarouselConfig, Header};
use crate::pages::Home;
use estate_types::models::FEED_LIMIT;
use estate_types::FetchStrategy;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// How the home feed loads and presents its listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Listings requested per section
    pub limit: u32,
    pub strategy: FetchStrategy,
    pub carousel: CarouselConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            limit: FEED_LIMIT,
            strategy: FetchStrategy::Sequential,
            carousel: CarouselConfig::default(),
        }
    }
}

/// Paths served by this app's router. Everything else (search, listing
/// detail) is a separate page and must be loaded with a full navigation.
pub const APP_ROUTES: &[&str] = &["/"];

/// `rel` for a link: `external` unless the router serves the target path.
pub fn link_rel(href: &str) -> Option<&'static str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    if APP_ROUTES.contains(&path) {
        None
    } else {
        Some("external")
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(FeedConfig::default());

    view! {
        <Title text="Best Lend" />
        <Router>
            <Header />
            <main class="main-content">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=Home />
                </Routes>
            </main>
        </Router>
    }
}
