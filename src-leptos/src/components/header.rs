//! Top navigation bar

use crate::app::link_rel;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const VERSION: &str = env!("GIT_VERSION");

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();

    let nav_items = vec![("Home", "/"), ("Search", "/search")];

    view! {
        <header class="site-header">
            <a href="/" class="logo">
                <span class="logo-text">"Best"</span>
                <span class="logo-text logo-text--accent">"Lend"</span>
            </a>

            <nav class="site-nav">
                {nav_items.into_iter().map(|(label, path)| {
                    let current_path = location.pathname;
                    let is_active = move || {
                        let curr = current_path.get();
                        if path == "/" {
                            curr == "/"
                        } else {
                            curr.starts_with(path)
                        }
                    };

                    view! {
                        <a
                            href=path
                            rel=link_rel(path)
                            class=move || format!("nav-item {}", if is_active() { "active" } else { "" })
                        >
                            {label}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <span class="version">{format!("v{}", VERSION)}</span>
        </header>
    }
}
