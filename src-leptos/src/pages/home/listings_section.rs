//! One result section (offers, rentals or sales)

use crate::app::link_rel;
use crate::components::ListingItem;
use estate_types::{FeedSection, Listing};
use leptos::prelude::*;

/// Heading and "see more" label for a section.
pub(crate) fn section_copy(section: FeedSection) -> (&'static str, &'static str) {
    match section {
        FeedSection::Offers => ("Recent offers", "Show more offers"),
        FeedSection::Rentals => ("Recent places for rent", "Show more places for rent"),
        FeedSection::Sales => ("Recent places for sale", "Show more places for sale"),
    }
}

#[component]
pub(crate) fn ListingsSection(
    section: FeedSection,
    #[prop(into)] listings: Signal<Vec<Listing>>,
) -> impl IntoView {
    let (heading, see_more) = section_copy(section);

    view! {
        <section class=format!("feed-section feed-section--{}", section)>
            <div class="feed-section__header">
                <h2>{heading}</h2>
                <a href=section.search_href() rel=link_rel(section.search_href()) class="feed-section__more">
                    {see_more}
                </a>
            </div>
            <div class="feed-section__cards">
                <For
                    each=move || listings.get()
                    key=|listing| listing.id.clone()
                    children=|listing| view! { <ListingItem listing=listing /> }
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_copy() {
        for section in FeedSection::ALL {
            let (heading, see_more) = section_copy(section);
            assert!(heading.starts_with("Recent"));
            assert!(see_more.starts_with("Show more"));
        }
    }
}
