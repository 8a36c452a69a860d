use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod content;
mod hooks;
mod listener;
mod animation {
    pub mod dom;
    pub mod ease;
    pub mod engine;
    pub mod timeline;
    pub mod trigger;
}
mod controllers {
    pub mod highlighter;
    pub mod overlay;
    pub mod pointer;
    pub mod section;
}
mod components {
    pub mod card_row;
    pub mod heading;
    pub mod side_nav;
    pub mod text_effects;
}
mod sections {
    pub mod colophon;
    pub mod hero;
    pub mod principles;
    pub mod video;
    pub mod work;
}
mod pages {
    pub mod landing;
    pub mod lean_canvas;
}
#[cfg(test)]
mod testing;

use content::SiteContent;
use pages::{landing::Landing, lean_canvas::LeanCanvasPage};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/lean-canvas")]
    LeanCanvas,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, site: &SiteContent) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing site={site.clone()} /> }
        },
        Route::LeanCanvas => {
            info!("Rendering Lean Canvas page");
            html! { <LeanCanvasPage canvas={site.lean_canvas.clone()} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Landing page");
            html! { <Landing site={site.clone()} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let site = use_memo(
        |_| match SiteContent::load() {
            Ok(site) => site,
            Err(e) => {
                error!("{}", e);
                SiteContent::default()
            }
        },
        (),
    );

    let render = Callback::from(move |routes: Route| switch(routes, &site));

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
            <style>
                {r#"
                    :root {
                        --background: #0d0d0d;
                        --foreground: #ededed;
                        --card: #141414;
                        --border: rgba(237, 237, 237, 0.15);
                        --muted: rgba(237, 237, 237, 0.55);
                        --accent: #ff5a1f;
                        --accent-wash: rgba(255, 90, 31, 0.05);
                        --alert: #ef4444;
                        --note: rgba(234, 179, 8, 0.15);
                        --note-border: rgba(234, 179, 8, 0.35);
                        --backdrop: rgba(13, 13, 13, 0.95);
                        --font-display: 'Bebas Neue', 'Oswald', sans-serif;
                        --font-mono: 'IBM Plex Mono', ui-monospace, monospace;
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: var(--background);
                        color: var(--foreground);
                        font-family: var(--font-mono);
                        -webkit-font-smoothing: antialiased;
                    }

                    .landing {
                        position: relative;
                        min-height: 100vh;
                    }

                    .grid-bg {
                        position: fixed;
                        inset: 0;
                        opacity: 0.3;
                        pointer-events: none;
                        background-image:
                            linear-gradient(to right, var(--border) 1px, transparent 1px),
                            linear-gradient(to bottom, var(--border) 1px, transparent 1px);
                        background-size: 80px 80px;
                    }

                    .landing-sections {
                        position: relative;
                        z-index: 10;
                    }

                    .section-label {
                        font-family: var(--font-mono);
                        font-size: 10px;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: var(--accent);
                    }

                    .section-label.muted {
                        color: var(--muted);
                    }

                    .section-heading {
                        font-family: var(--font-display);
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        letter-spacing: -0.01em;
                        margin: 1rem 0 4rem;
                    }

                    .text-accent {
                        color: var(--accent);
                    }

                    .text-alert {
                        color: var(--alert);
                    }

                    .side-nav {
                        position: fixed;
                        left: 0;
                        top: 0;
                        bottom: 0;
                        width: 5rem;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        border-right: 1px solid var(--border);
                        background: var(--background);
                    }

                    .side-nav ul {
                        list-style: none;
                        margin: 0;
                        padding: 0 0 0 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .side-nav-link {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        color: var(--muted);
                    }

                    .side-nav-dot {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: currentColor;
                        transition: transform 0.3s ease;
                    }

                    .side-nav-label {
                        font-size: 10px;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                        white-space: nowrap;
                        background: var(--background);
                    }

                    .side-nav-link:hover .side-nav-label {
                        opacity: 1;
                    }

                    .side-nav-link.active {
                        color: var(--accent);
                    }

                    .side-nav-link.active .side-nav-dot {
                        transform: scale(1.6);
                    }

                    @media (max-width: 768px) {
                        .side-nav {
                            display: none;
                        }
                    }
                "#}
            </style>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
