//! Listing card component

use crate::app::link_rel;
use crate::formatters::{format_price, format_rooms};
use estate_types::Listing;
use leptos::prelude::*;

const PLACEHOLDER_IMAGE: &str = "/assets/listing-placeholder.jpg";

/// Card linking to a listing's detail page. Shows the record as received.
#[component]
pub fn ListingItem(listing: Listing) -> impl IntoView {
    let href = format!("/listing/{}", listing.id);
    let rel = link_rel(&href);
    let cover = listing.cover_image().unwrap_or(PLACEHOLDER_IMAGE).to_string();
    let price = format_price(listing.display_price());
    let price_suffix = if listing.is_rental() { " / month" } else { "" };
    let bedrooms = format_rooms(listing.bedrooms, "bed");
    let bathrooms = format_rooms(listing.bathrooms, "bath");
    let Listing { name, address, description, .. } = listing;

    view! {
        <div class="listing-card">
            <a href=href rel=rel class="listing-card__link">
                <img class="listing-card__image" src=cover alt="listing cover" />
                <div class="listing-card__body">
                    <p class="listing-card__name">{name}</p>
                    <div class="listing-card__address">
                        <span class="listing-card__pin">"📍"</span>
                        <p>{address}</p>
                    </div>
                    <p class="listing-card__description">{description}</p>
                    <p class="listing-card__price">"$"{price}{price_suffix}</p>
                    <div class="listing-card__features">
                        <span>{bedrooms}</span>
                        <span>{bathrooms}</span>
                    </div>
                </div>
            </a>
        </div>
    }
}
