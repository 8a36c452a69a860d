use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::ScrubOptions;
use crate::animation::trigger::{BOTTOM_TOP, TOP_TOP};
use crate::components::text_effects::{ScrambleText, SplitFlapText};
use crate::content::{Hero, HeroLink};
use crate::controllers::section::RevealPlan;
use crate::hooks::use_scroll_reveal;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: Hero,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let section_ref = use_node_ref();
    let content_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let content_ref = content_ref.clone();
        use_scroll_reveal("hero", move || {
            let away = Pose { x: 0.0, y: -100.0, opacity: 0.0 };
            RevealPlan::new().scrub(
                content_ref.cast::<HtmlElement>(),
                section_ref.cast::<HtmlElement>(),
                ScrubOptions::new(away, TOP_TOP).end(BOTTOM_TOP),
            )
        });
    }

    let hero = &props.hero;

    html! {
        <section ref={section_ref} id="hero" class="hero-section">
            <div class="hero-side">
                <span>{ hero.side_label.clone() }</span>
            </div>

            <div ref={content_ref} class="hero-content">
                <SplitFlapText text={hero.title.clone()} />
                <h2 class="hero-tagline">{ hero.tagline.clone() }</h2>
                <p class="hero-pitch">{ hero.pitch.clone() }</p>

                <div class="hero-links">
                    { for hero.links.iter().map(link_view) }
                </div>
            </div>

            <div class="hero-tag">
                <span>{ hero.tag.clone() }</span>
            </div>

            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 0 3rem 0 7rem;
                    }

                    .hero-side {
                        position: absolute;
                        left: 1.5rem;
                        top: 50%;
                    }

                    .hero-side span {
                        display: block;
                        transform: rotate(-90deg);
                        transform-origin: left;
                        font-family: var(--font-mono);
                        font-size: 10px;
                        letter-spacing: 0.3em;
                        color: var(--muted);
                        white-space: nowrap;
                    }

                    .hero-content {
                        flex: 1;
                        will-change: transform, opacity;
                    }

                    .split-flap {
                        display: flex;
                        gap: 0.1em;
                        font-family: var(--font-display);
                        font-size: clamp(4rem, 14vw, 12rem);
                        line-height: 0.9;
                        margin: 0;
                    }

                    .flap-letter {
                        display: inline-block;
                        min-width: 0.6em;
                        text-align: center;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }

                    .hero-tagline {
                        font-family: var(--font-display);
                        font-size: clamp(1rem, 3vw, 2rem);
                        color: var(--muted);
                        margin-top: 1rem;
                        letter-spacing: 0.05em;
                    }

                    .hero-pitch {
                        margin-top: 3rem;
                        max-width: 32rem;
                        font-family: var(--font-mono);
                        font-size: 0.85rem;
                        line-height: 1.7;
                        color: var(--muted);
                    }

                    .hero-links {
                        margin-top: 4rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2rem;
                    }

                    .hero-link {
                        display: inline-flex;
                        align-items: center;
                        border: 1px solid var(--border);
                        padding: 0.75rem 1.5rem;
                        font-family: var(--font-mono);
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        color: var(--foreground);
                        text-decoration: none;
                        transition: all 0.2s ease;
                    }

                    .hero-link:hover {
                        border-color: var(--accent);
                        color: var(--accent);
                    }

                    .hero-tag {
                        position: absolute;
                        right: 3rem;
                        bottom: 2rem;
                        font-family: var(--font-mono);
                        font-size: 10px;
                        letter-spacing: 0.2em;
                        color: var(--muted);
                        border: 1px solid var(--border);
                        padding: 0.5rem 1rem;
                    }

                    @media (max-width: 768px) {
                        .hero-section {
                            padding: 0 1.5rem;
                        }
                        .hero-links {
                            flex-direction: column;
                            gap: 1rem;
                        }
                        .hero-tag {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn link_view(link: &HeroLink) -> Html {
    let label = html! { <ScrambleText text={link.label.clone()} /> };

    if link.external {
        return html! {
            <a class="hero-link" href={link.href.clone()} title={link.title.clone()} target="_blank" rel="noopener noreferrer">
                { label }
            </a>
        };
    }

    match link.href.starts_with('/').then(|| Route::recognize(&link.href)).flatten() {
        Some(route) => html! {
            <Link<Route> to={route} classes="hero-link">
                { label }
            </Link<Route>>
        },
        None => html! {
            <a class="hero-link" href={link.href.clone()} title={link.title.clone()}>
                { label }
            </a>
        },
    }
}
