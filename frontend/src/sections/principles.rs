use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::RevealOptions;
use crate::animation::trigger;
use crate::components::heading::{spans, SectionLabel};
use crate::content::{Align, Mvp, Principles};
use crate::controllers::section::RevealPlan;
use crate::hooks::{children, use_scroll_reveal};

/// Entries slide in from the side they are aligned to.
fn entry_offset(align: Align) -> f64 {
    match align {
        Align::Left => -80.0,
        Align::Right => 80.0,
    }
}

#[derive(Properties, PartialEq)]
pub struct PrinciplesProps {
    pub principles: Principles,
}

#[function_component(PrinciplesSection)]
pub fn principles_section(props: &PrinciplesProps) -> Html {
    let header_ref = use_node_ref();
    let list_ref = use_node_ref();

    {
        let header_ref = header_ref.clone();
        let list_ref = list_ref.clone();
        let aligns: Vec<Align> = props.principles.mvps.iter().map(|mvp| mvp.align).collect();
        use_scroll_reveal("principles", move || {
            let plan = RevealPlan::new().reveal(
                header_ref.cast::<HtmlElement>(),
                RevealOptions::new(Pose::from_x(-60.0), trigger::top(85.0)),
            );
            children(&list_ref, "article")
                .into_iter()
                .zip(aligns)
                .fold(plan, |plan, (entry, align)| {
                    plan.reveal(
                        Some(entry),
                        RevealOptions::new(Pose::from_x(entry_offset(align)), trigger::top(85.0)),
                    )
                })
        });
    }

    let principles = &props.principles;

    html! {
        <section id="principles" class="principles-section">
            <div ref={header_ref} class="section-header">
                <SectionLabel text={principles.label.clone()} />
                <h2 class="section-heading">{ spans(&principles.heading) }</h2>
            </div>

            <div ref={list_ref} class="mvp-list">
                { for principles.mvps.iter().map(mvp_view) }
            </div>

            <style>
                {r#"
                    .principles-section {
                        position: relative;
                        padding: 8rem 3rem 8rem 7rem;
                    }

                    .mvp-list {
                        display: flex;
                        flex-direction: column;
                        gap: 8rem;
                        margin-top: 6rem;
                    }

                    .mvp {
                        display: flex;
                        flex-direction: column;
                    }

                    .mvp.left {
                        align-items: flex-start;
                        text-align: left;
                    }

                    .mvp.right {
                        align-items: flex-end;
                        text-align: right;
                    }

                    .mvp h3 {
                        font-family: var(--font-display);
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1;
                        margin: 1rem 0 0;
                    }

                    .mvp p {
                        margin-top: 1.5rem;
                        max-width: 42rem;
                        font-family: var(--font-mono);
                        font-size: 0.85rem;
                        line-height: 1.7;
                        color: var(--muted);
                    }

                    .mvp-rule {
                        margin-top: 2rem;
                        width: 12rem;
                        height: 1px;
                        background: var(--border);
                    }

                    @media (max-width: 768px) {
                        .principles-section {
                            padding: 6rem 1.5rem;
                        }
                        .mvp-list {
                            gap: 6rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn mvp_view(mvp: &Mvp) -> Html {
    let side = match mvp.align {
        Align::Left => "left",
        Align::Right => "right",
    };

    html! {
        <article class={classes!("mvp", side)}>
            <span class="section-label muted">{ mvp.annotation() }</span>
            <h3>{ spans(&mvp.title) }</h3>
            <p>{ mvp.description.clone() }</p>
            <div class="mvp-rule"></div>
        </article>
    }
}
