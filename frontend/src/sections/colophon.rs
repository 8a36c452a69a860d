use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::RevealOptions;
use crate::animation::trigger;
use crate::components::heading::SectionLabel;
use crate::content::{Colophon, CreditColumn};
use crate::controllers::section::RevealPlan;
use crate::hooks::{children, use_scroll_reveal};

#[derive(Properties, PartialEq)]
pub struct ColophonProps {
    pub colophon: Colophon,
}

#[function_component(ColophonSection)]
pub fn colophon_section(props: &ColophonProps) -> Html {
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let footer_ref = use_node_ref();

    {
        let header_ref = header_ref.clone();
        let grid_ref = grid_ref.clone();
        let footer_ref = footer_ref.clone();
        use_scroll_reveal("colophon", move || {
            RevealPlan::new()
                .reveal(
                    header_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_x(-60.0), trigger::top(85.0)),
                )
                .group(
                    children(&grid_ref, ".credit-column"),
                    grid_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(40.0), trigger::top(85.0))
                        .duration(0.8)
                        .stagger(0.1),
                )
                .reveal(
                    footer_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(20.0), trigger::top(95.0)).duration(0.8),
                )
        });
    }

    let colophon = &props.colophon;

    html! {
        <section id="colophon" class="colophon-section">
            <div ref={header_ref} class="section-header">
                <SectionLabel text={colophon.label.clone()} />
                <h2 class="section-heading">{ colophon.heading.clone() }</h2>
            </div>

            <div ref={grid_ref} class="credit-grid">
                { for colophon.columns.iter().map(column_view) }
            </div>

            <div ref={footer_ref} class="colophon-footer">
                { for colophon.footer.iter().map(|line| html! { <p>{ line.clone() }</p> }) }
            </div>

            <style>
                {r#"
                    .colophon-section {
                        position: relative;
                        padding: 8rem 3rem 8rem 7rem;
                        border-top: 1px solid var(--border);
                    }

                    .credit-grid {
                        display: grid;
                        grid-template-columns: repeat(6, 1fr);
                        gap: 3rem;
                        margin-top: 4rem;
                    }

                    .credit-column h4 {
                        font-family: var(--font-mono);
                        font-size: 9px;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: var(--muted);
                        margin: 0 0 1rem;
                    }

                    .credit-column ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .credit-column li {
                        font-family: var(--font-mono);
                        font-size: 0.75rem;
                        margin-bottom: 0.5rem;
                    }

                    .credit-column li.credit-note {
                        font-size: 8px;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }

                    .colophon-footer {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 6rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        font-family: var(--font-mono);
                        font-size: 10px;
                        letter-spacing: 0.2em;
                        color: var(--muted);
                    }

                    @media (max-width: 768px) {
                        .colophon-section {
                            padding: 6rem 1.5rem;
                        }
                        .credit-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .colophon-footer {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn column_view(column: &CreditColumn) -> Html {
    html! {
        <div class="credit-column">
            <h4>{ column.title.clone() }</h4>
            <ul>
                if let Some(legend) = &column.legend {
                    <li class="credit-note">{ legend.clone() }</li>
                }
                { for column.names.iter().map(|name| html! { <li>{ name.clone() }</li> }) }
                if let Some(role) = &column.role {
                    <li class="credit-note">{ role.clone() }</li>
                }
            </ul>
        </div>
    }
}
