//! Hero banner at the top of the home page

use crate::app::link_rel;
use leptos::prelude::*;

#[component]
pub(crate) fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">
                "Find your next "<span class="hero__title--accent">"perfect"</span>
                <br />
                "place with ease"
            </h1>
            <div class="hero__subtitle">
                "Best Lend is the best place to find your next perfect place to live."
                <br />
                "We have a wide range of properties for you to choose from."
            </div>
            <a href="/search" rel=link_rel("/search") class="hero__cta">
                "Let's get started..."
            </a>
        </section>
    }
}
