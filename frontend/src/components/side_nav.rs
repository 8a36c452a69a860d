use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Section ids in page order, with their menu labels.
pub static SECTIONS: [(&str, &str); 7] = [
    ("hero", "Index"),
    ("signals", "Problems"),
    ("work", "Solution"),
    ("video", "Video"),
    ("principles", "MVP"),
    ("revenue", "Revenue"),
    ("colophon", "Credits"),
];

/// The last section whose top edge is above the middle of the viewport.
pub fn active_section<'a>(
    tops: impl IntoIterator<Item = (&'a str, f64)>,
    viewport_height: f64,
) -> Option<&'a str> {
    tops.into_iter()
        .filter(|(_, top)| *top <= viewport_height * 0.5)
        .map(|(id, _)| id)
        .last()
}

fn section_tops() -> Vec<(&'static str, f64)> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            let element = document.get_element_by_id(id)?;
            Some((*id, element.get_bounding_client_rect().top()))
        })
        .collect()
}

fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(SideNav)]
pub fn side_nav() -> Html {
    // Both hooks re-render on every scroll and resize.
    let _ = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let tops = section_tops();
    let active = active_section(tops.iter().copied(), viewport_height).unwrap_or("hero");

    html! {
        <nav class="side-nav" aria-label="Sections">
            <ul>
                { for SECTIONS.iter().map(|(id, label)| {
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to(id);
                    });
                    html! {
                        <li>
                            <a
                                href={format!("#{}", id)}
                                class={classes!("side-nav-link", (*id == active).then_some("active"))}
                                {onclick}
                            >
                                <span class="side-nav-dot"></span>
                                <span class="side-nav-label">{ *label }</span>
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
