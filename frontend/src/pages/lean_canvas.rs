use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::ease::Pose;
use crate::animation::engine::RevealOptions;
use crate::animation::trigger;
use crate::content::{is_lead_point, CanvasBlock, LeanCanvas, PointGroup};
use crate::controllers::overlay::{OverlayController, WindowKeys};
use crate::controllers::section::RevealPlan;
use crate::hooks::{children, use_scroll_reveal};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LeanCanvasProps {
    pub canvas: LeanCanvas,
}

#[function_component(LeanCanvasPage)]
pub fn lean_canvas_page(props: &LeanCanvasProps) -> Html {
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let selected = use_state(|| None::<String>);

    let overlay = {
        let selected = selected.clone();
        use_memo(
            move |_| {
                OverlayController::new(WindowKeys, Callback::from(move |card| selected.set(card)))
            },
            (),
        )
    };

    {
        let overlay = overlay.clone();
        use_effect_with_deps(move |_| move || overlay.stop(), ());
    }

    {
        let header_ref = header_ref.clone();
        let grid_ref = grid_ref.clone();
        use_scroll_reveal("lean canvas", move || {
            RevealPlan::new()
                .reveal(
                    header_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(-20.0), trigger::top(80.0)),
                )
                .group(
                    children(&grid_ref, ".lean-card"),
                    grid_ref.cast::<HtmlElement>(),
                    RevealOptions::new(Pose::from_y(40.0), trigger::top(85.0))
                        .duration(0.8)
                        .stagger(0.1),
                )
        });
    }

    let canvas = &props.canvas;
    // An id the content does not know renders no overlay.
    let expanded = selected.as_deref().and_then(|id| canvas.block(id));

    let close = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.close())
    };
    let backdrop_click = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.backdrop_click())
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <section class="lean-canvas">
            if let Some(block) = expanded {
                <div class="lean-overlay" onclick={backdrop_click}>
                    <div class="lean-overlay-panel" onclick={keep_open}>
                        <button class="lean-overlay-close" aria-label="Close" onclick={close}>{"×"}</button>
                        <h2>{ block.title.clone() }</h2>
                        <div class="lean-overlay-groups">
                            { for block.groups.iter().map(|group| group_view(group, "lean-note large")) }
                        </div>
                    </div>
                </div>
            }

            <div ref={header_ref} class="lean-header">
                <Link<Route> to={Route::Home} classes="lean-back">{"← Back to Home"}</Link<Route>>
                <h1>{ canvas.title.clone() }</h1>
            </div>

            <div ref={grid_ref} class="lean-grid">
                { for canvas.blocks.iter().map(|block| {
                    let id = block.id.clone();
                    let overlay = overlay.clone();
                    let onclick = Callback::from(move |_: MouseEvent| overlay.select(&id));
                    block_view(block, onclick)
                }) }
            </div>

            <style>
                {r#"
                    .lean-canvas {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem 1.5rem 1.5rem 6.5rem;
                    }

                    .lean-header {
                        text-align: center;
                        margin-bottom: 1rem;
                    }

                    .lean-back {
                        display: inline-block;
                        margin-bottom: 0.5rem;
                        font-family: var(--font-mono);
                        font-size: 10px;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: var(--muted);
                        text-decoration: none;
                    }

                    .lean-back:hover {
                        color: var(--accent);
                    }

                    .lean-header h1 {
                        font-family: var(--font-display);
                        font-size: 2.5rem;
                        margin: 0;
                    }

                    .lean-grid {
                        flex: 1;
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 0.75rem;
                        padding: 0.75rem;
                        border: 1px solid var(--border);
                    }

                    .lean-card {
                        display: flex;
                        flex-direction: column;
                        padding: 0.75rem;
                        border: 1px solid var(--border);
                        background: var(--card);
                    }

                    .lean-card h3 {
                        font-family: var(--font-display);
                        font-size: 1.1rem;
                        margin: 0 0 0.5rem;
                    }

                    .lean-note {
                        margin-bottom: 0.5rem;
                        padding: 0.5rem;
                        background: var(--note);
                        border: 1px solid var(--note-border);
                        border-radius: 2px;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .lean-note:hover {
                        border-color: var(--accent);
                    }

                    .lean-note h4 {
                        font-family: var(--font-mono);
                        font-size: 9px;
                        margin: 0 0 0.25rem;
                    }

                    .lean-note ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .lean-note li {
                        font-family: var(--font-mono);
                        font-size: 9px;
                        line-height: 1.3;
                    }

                    .lean-note .lead {
                        display: block;
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }

                    .lean-note.large {
                        padding: 1.5rem 2rem;
                        cursor: default;
                    }

                    .lean-note.large h4 {
                        font-size: 1.1rem;
                        margin-bottom: 1rem;
                    }

                    .lean-note.large li {
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin-bottom: 0.75rem;
                    }

                    .lean-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        background: var(--backdrop);
                        backdrop-filter: blur(4px);
                    }

                    .lean-overlay-panel {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        max-height: 90vh;
                        overflow: auto;
                        padding: 3rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 6px;
                    }

                    .lean-overlay-panel h2 {
                        font-family: var(--font-display);
                        font-size: 3rem;
                        margin: 0 0 1.5rem;
                        padding-right: 3rem;
                    }

                    .lean-overlay-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 50%;
                        background: transparent;
                        color: var(--foreground);
                        font-size: 1.5rem;
                        cursor: pointer;
                    }

                    .lean-overlay-close:hover {
                        color: var(--accent);
                    }

                    @media (max-width: 768px) {
                        .lean-canvas {
                            padding: 1rem;
                        }
                        .lean-grid {
                            grid-template-columns: 1fr;
                        }
                        .lean-card {
                            grid-column: auto !important;
                        }
                        .lean-overlay-panel {
                            padding: 1.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn block_view(block: &CanvasBlock, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <div class="lean-card" style={format!("grid-column: span {};", block.span)}>
            <h3>{ block.title.clone() }</h3>
            <div {onclick}>
                { for block.groups.iter().map(|group| group_view(group, "lean-note")) }
            </div>
        </div>
    }
}

fn group_view(group: &PointGroup, class: &'static str) -> Html {
    html! {
        <div {class}>
            if let Some(title) = &group.title {
                <h4>{ title.clone() }</h4>
            }
            <ul>
                { for group.points.iter().map(|point| point_view(point)) }
            </ul>
        </div>
    }
}

fn point_view(point: &str) -> Html {
    if is_lead_point(point) {
        html! { <li><span class="lead">{ point.to_string() }</span></li> }
    } else {
        html! { <li>{ format!("• {}", point) }</li> }
    }
}
