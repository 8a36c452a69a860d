use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::animation::dom::DomTimeline;
use crate::controllers::pointer::{PointerFollow, PointerState, SectionBox};
use crate::controllers::section::{RevealPlan, SectionController};
use crate::listener::ListenerGuard;

/// Register a section's scroll timelines once, after the first render, and
/// release them when the component unmounts.
///
/// `build` runs inside the effect, so node refs are attached by then.
#[hook]
pub fn use_scroll_reveal<F>(name: &'static str, build: F)
where
    F: FnOnce() -> RevealPlan<HtmlElement> + 'static,
{
    use_effect_with_deps(
        move |_| {
            let mut controller = SectionController::new(name, DomTimeline);
            controller.start(build());
            move || controller.stop()
        },
        (),
    );
}

/// Every element under `parent` matching `selector`, in document order.
pub fn children(parent: &NodeRef, selector: &str) -> Vec<HtmlElement> {
    let Some(parent) = parent.cast::<HtmlElement>() else {
        return Vec::new();
    };
    let Ok(nodes) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Track the pointer over `section` for the follow dot.
#[hook]
pub fn use_pointer_follow(section: NodeRef) -> PointerState {
    let state = use_state(PointerState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let mut guards: Vec<ListenerGuard> = Vec::new();
                if let Some(element) = section.cast::<HtmlElement>() {
                    let follow = Rc::new(RefCell::new(PointerFollow::default()));
                    for kind in ["mouseenter", "mousemove", "mouseleave"] {
                        let follow = follow.clone();
                        let state = state.clone();
                        let bounds_of = element.clone();
                        let guard = ListenerGuard::new(element.as_ref(), kind, move |event| {
                            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let rect = bounds_of.get_bounding_client_rect();
                            let bounds = SectionBox {
                                left: rect.left(),
                                top: rect.top(),
                                width: rect.width(),
                                height: rect.height(),
                            };
                            let (x, y) = (mouse.client_x() as f64, mouse.client_y() as f64);
                            let next = {
                                let mut follow = follow.borrow_mut();
                                match kind {
                                    "mouseenter" => follow.enter(x, y, bounds),
                                    "mouseleave" => follow.leave(),
                                    _ => follow.pointer_move(x, y, bounds),
                                }
                            };
                            state.set(next);
                        });
                        guards.extend(guard);
                    }
                }
                move || drop(guards)
            },
            section,
        );
    }

    *state
}
