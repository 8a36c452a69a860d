use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::RevealOptions;
use crate::animation::trigger::{self, BOTTOM_TOP};
use crate::components::heading::{spans, SectionLabel};
use crate::config;
use crate::content::{Step, Work};
use crate::controllers::highlighter::{AutoAdvanceHighlighter, BrowserScheduler, HighlightCursor};
use crate::controllers::section::RevealPlan;
use crate::hooks::{children, use_scroll_reveal};

#[derive(Properties, PartialEq)]
pub struct WorkProps {
    pub work: Work,
}

/// Solution steps in an asymmetric grid. While the section is on screen the
/// highlight walks through the steps on its own.
#[function_component(WorkSection)]
pub fn work_section(props: &WorkProps) -> Html {
    let section_ref = use_node_ref();
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let cursor = use_state(HighlightCursor::default);

    // One cycle per mount: the watch and the unmount cleanup below hold
    // handles to this same instance.
    let highlighter = {
        let cursor = cursor.clone();
        let len = props.work.steps.len();
        use_memo(
            move |_| {
                AutoAdvanceHighlighter::new(
                    BrowserScheduler,
                    len,
                    config::HIGHLIGHT_INTERVAL_MS,
                    Callback::from(move |next| cursor.set(next)),
                )
            },
            (),
        )
    };

    {
        let highlighter = highlighter.clone();
        use_effect_with_deps(move |_| move || highlighter.stop(), ());
    }

    {
        let section_ref = section_ref.clone();
        let header_ref = header_ref.clone();
        let grid_ref = grid_ref.clone();
        let watcher = (*highlighter).clone();
        use_scroll_reveal("work", move || {
            RevealPlan::new()
                .reveal(
                    header_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_x(-60.0), trigger::top(90.0)),
                )
                .group(
                    children(&grid_ref, "article"),
                    grid_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(60.0), trigger::top(90.0))
                        .duration(0.8)
                        .stagger(0.1),
                )
                .watch(
                    section_ref.cast::<HtmlElement>(),
                    trigger::top(80.0),
                    BOTTOM_TOP,
                    Callback::from(move |event| watcher.on_trigger(event)),
                )
        });
    }

    let work = &props.work;
    let cursor = *cursor;

    html! {
        <section ref={section_ref} id="work" class="work-section">
            <div ref={header_ref} class="section-header work-header">
                <div>
                    <SectionLabel text={work.label.clone()} />
                    <h2 class="section-heading">{ spans(&work.heading) }</h2>
                </div>
                <p class="work-aside">{ work.aside.clone() }</p>
            </div>

            <div ref={grid_ref} class="work-grid">
                { for work.steps.iter().enumerate().map(|(index, step)| html! {
                    <WorkCard step={step.clone()} {index} highlighted={cursor.is_highlighted(index)} />
                }) }
            </div>

            <style>
                {r#"
                    .work-section {
                        position: relative;
                        padding: 8rem 3rem 8rem 7rem;
                    }

                    .work-header {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        margin-bottom: 4rem;
                    }

                    .work-aside {
                        max-width: 18rem;
                        font-family: var(--font-mono);
                        font-size: 0.75rem;
                        color: var(--muted);
                        text-align: right;
                    }

                    .work-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        grid-auto-rows: 200px;
                        gap: 1.5rem;
                    }

                    .work-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 1.25rem;
                        border: 1px solid var(--border);
                        overflow: hidden;
                        cursor: pointer;
                        transition: border-color 0.5s ease;
                    }

                    .work-card .work-card-bg {
                        position: absolute;
                        inset: 0;
                        background: var(--accent-wash);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }

                    .work-card h3 {
                        position: relative;
                        font-family: var(--font-display);
                        font-size: 2.2rem;
                        margin: 0.75rem 0 0;
                        transition: color 0.3s ease;
                    }

                    .work-card p {
                        position: relative;
                        max-width: 280px;
                        font-family: var(--font-mono);
                        font-size: 0.75rem;
                        line-height: 1.6;
                        color: var(--muted);
                        opacity: 0;
                        transform: translateY(0.5rem);
                        transition: all 0.5s ease;
                    }

                    .work-card .work-card-index {
                        position: absolute;
                        right: 1rem;
                        bottom: 1rem;
                        font-family: var(--font-mono);
                        font-size: 10px;
                        color: var(--muted);
                    }

                    .work-card.active {
                        border-color: var(--accent);
                    }

                    .work-card.active .work-card-bg,
                    .work-card.active p {
                        opacity: 1;
                        transform: none;
                    }

                    .work-card.active h3,
                    .work-card.active .work-card-index {
                        color: var(--accent);
                    }

                    @media (max-width: 768px) {
                        .work-section {
                            padding: 6rem 1.5rem;
                        }
                        .work-grid {
                            grid-template-columns: repeat(2, 1fr);
                            grid-auto-rows: 180px;
                        }
                        .work-aside {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkCardProps {
    pub step: Step,
    pub index: usize,
    pub highlighted: bool,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    let hovered = use_state(|| false);
    let active = *hovered || props.highlighted;
    let step = &props.step;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <article
            class={classes!("work-card", active.then_some("active"))}
            style={format!("grid-column: span {}; grid-row: span {};", step.cols, step.rows)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="work-card-bg"></div>
            <div>
                <span class="section-label muted">{ step.medium.clone() }</span>
                <h3>{ step.title.clone() }</h3>
            </div>
            <p>{ step.description.clone() }</p>
            <span class="work-card-index">{ format!("{:02}", props.index + 1) }</span>
        </article>
    }
}
