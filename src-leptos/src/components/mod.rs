//! Reusable UI components

mod carousel;
mod header;
mod listing_item;

pub use carousel::{next_index, prev_index, slide_background_style, slides, Carousel, CarouselConfig, Slide};
pub use header::Header;
pub use listing_item::ListingItem;
