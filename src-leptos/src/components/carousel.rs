//! Image carousel for promoted listings

use estate_types::Listing;
use leptos::prelude::*;

/// Per-instance carousel options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Show prev/next buttons
    pub navigation: bool,
    /// Wrap from the last slide to the first and back
    pub loop_slides: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { navigation: true, loop_slides: false }
    }
}

/// One rendered slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub key: String,
    pub style: String,
}

/// One slide per listing, in order, keyed by listing id.
pub fn slides(listings: &[Listing]) -> Vec<Slide> {
    listings
        .iter()
        .map(|listing| Slide { key: listing.id.clone(), style: slide_background_style(listing) })
        .collect()
}

/// Inline style using the listing's cover image as a full-bleed background.
pub fn slide_background_style(listing: &Listing) -> String {
    match listing.cover_image() {
        Some(url) => format!(
            "background: url(\"{}\") center no-repeat; background-size: cover;",
            url.replace('"', "%22")
        ),
        None => String::new(),
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

pub fn next_index(current: usize, len: usize, wrap: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = clamp_index(current, len);
    if current + 1 < len {
        current + 1
    } else if wrap {
        0
    } else {
        current
    }
}

pub fn prev_index(current: usize, len: usize, wrap: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = clamp_index(current, len);
    if current > 0 {
        current - 1
    } else if wrap {
        len - 1
    } else {
        0
    }
}

#[component]
pub fn Carousel(
    #[prop(into)] listings: Signal<Vec<Listing>>,
    #[prop(optional)] config: CarouselConfig,
) -> impl IntoView {
    let active = RwSignal::new(0usize);
    let slide_list = Memo::new(move |_| listings.with(|l| slides(l)));
    let count = move || slide_list.with(Vec::len);
    let current = move || clamp_index(active.get(), count());

    view! {
        <Show when=move || (count() > 0)>
            <div class="carousel">
                <div
                    class="carousel__track"
                    style=move || format!("transform: translateX(-{}%);", current() * 100)
                >
                    <For
                        each=move || slide_list.get()
                        key=|slide| slide.key.clone()
                        children=|slide| view! { <div class="carousel__slide" style=slide.style></div> }
                    />
                </div>
                <Show when=move || (config.navigation && count() > 1)>
                    <button
                        class="carousel__nav carousel__nav--prev"
                        aria-label="Previous slide"
                        on:click=move |_| active.set(prev_index(current(), count(), config.loop_slides))
                    >"‹"</button>
                    <button
                        class="carousel__nav carousel__nav--next"
                        aria-label="Next slide"
                        on:click=move |_| active.set(next_index(current(), count(), config.loop_slides))
                    >"›"</button>
                </Show>
            </div>
        </Show>
    }
}
