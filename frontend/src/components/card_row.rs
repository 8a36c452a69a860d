use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::RevealOptions;
use crate::animation::trigger;
use crate::components::heading::{spans, SectionLabel};
use crate::content::{Card, CardRow};
use crate::controllers::section::RevealPlan;
use crate::hooks::{children, use_pointer_follow, use_scroll_reveal};

#[derive(Properties, PartialEq)]
pub struct CardRowProps {
    pub row: CardRow,
}

/// A section with a header and a horizontally scrolling row of numbered
/// cards. A dot follows the pointer while it is over the section.
#[function_component(CardRowSection)]
pub fn card_row_section(props: &CardRowProps) -> Html {
    let section_ref = use_node_ref();
    let header_ref = use_node_ref();
    let cards_ref = use_node_ref();
    let pointer = use_pointer_follow(section_ref.clone());

    {
        let header_ref = header_ref.clone();
        let cards_ref = cards_ref.clone();
        use_scroll_reveal("card row", move || {
            RevealPlan::new()
                .reveal(
                    header_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_x(-60.0), trigger::top(85.0)),
                )
                .group(
                    children(&cards_ref, "article"),
                    cards_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_x(-100.0), trigger::top(90.0))
                        .duration(0.8)
                        .stagger(0.2),
                )
        });
    }

    let row = &props.row;

    html! {
        <section ref={section_ref} id={row.id.clone()} class="card-row-section">
            <div class="pointer-dot" style={pointer.style()} aria-hidden="true"></div>

            <div ref={header_ref} class="section-header">
                <SectionLabel text={row.label.clone()} />
                <h2 class="section-heading">{ spans(&row.heading) }</h2>
            </div>

            <div ref={cards_ref} class="card-row">
                { for row.cards.iter().enumerate().map(|(index, card)| card_view(index, card)) }
            </div>

            <style>
                {r#"
                    .card-row-section {
                        position: relative;
                        padding: 8rem 3rem 8rem 7rem;
                        overflow: hidden;
                    }

                    .pointer-dot {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: var(--accent);
                        pointer-events: none;
                        z-index: 5;
                        will-change: transform, opacity;
                    }

                    .card-row {
                        display: flex;
                        gap: 2rem;
                        overflow-x: auto;
                        padding-bottom: 2rem;
                        scrollbar-width: none;
                    }

                    .card-row article {
                        flex: 0 0 320px;
                        border: 1px solid var(--border);
                        padding: 2rem;
                        background: var(--card);
                        transition: border-color 0.3s ease;
                    }

                    .card-row article:hover {
                        border-color: var(--accent);
                    }

                    .card-number {
                        font-family: var(--font-mono);
                        font-size: 0.7rem;
                        letter-spacing: 0.3em;
                        color: var(--muted);
                    }

                    .card-row h3 {
                        font-family: var(--font-display);
                        font-size: 1.8rem;
                        margin: 1.5rem 0 1rem;
                    }

                    .card-row p {
                        font-family: var(--font-mono);
                        font-size: 0.8rem;
                        line-height: 1.7;
                        color: var(--muted);
                    }

                    @media (max-width: 768px) {
                        .card-row-section {
                            padding: 6rem 1.5rem;
                        }
                        .pointer-dot {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn card_view(index: usize, card: &Card) -> Html {
    html! {
        <article>
            <span class="card-number">{ format!("{:02}", index + 1) }</span>
            <h3>{ card.title.clone() }</h3>
            <p>{ card.body.clone() }</p>
            if let Some(date) = &card.date {
                <span class="card-date">{ date.clone() }</span>
            }
        </article>
    }
}
