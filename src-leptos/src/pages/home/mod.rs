//! Home page: hero, offer carousel and the three listing sections

mod hero;
mod listings_section;

use hero::HeroSection;
use listings_section::ListingsSection;

use crate::api::BrowserListingSource;
use crate::app::FeedConfig;
use crate::components::Carousel;
use crate::state::FeedState;
use estate_types::{FeedLoader, FeedSection};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Landing page listing recent offers, rentals and sales.
#[component]
pub fn Home() -> impl IntoView {
    let config = use_context::<FeedConfig>().unwrap_or_default();
    let feed = FeedState::new();

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let source = BrowserListingSource;
            let report = FeedLoader::new(&source)
                .with_limit(config.limit)
                .with_strategy(config.strategy)
                .run(|section, update| feed.apply(section, update))
                .await;
            log::info!(
                "Home feed loaded ({:?}), {} section(s) failed",
                config.strategy,
                report.failures().count()
            );
        });
    });

    view! {
        <div class="page home">
            <HeroSection />

            <Carousel listings=feed.offers config=config.carousel />

            <div class="feed">
                {FeedSection::ALL
                    .into_iter()
                    .map(|section| view! {
                        <Show when=move || feed.is_visible(section)>
                            <ListingsSection section=section listings=feed.slice(section) />
                        </Show>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
