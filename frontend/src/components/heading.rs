use yew::prelude::*;

use crate::content::Span;

/// Heading text with its accent and alert runs wrapped in colored spans.
pub fn spans(parts: &[Span]) -> Html {
    html! {
        <>
            { for parts.iter().map(|part| match part.tone.class() {
                Some(class) => html! { <span {class}>{ part.text.clone() }</span> },
                None => html! { { part.text.clone() } },
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionLabelProps {
    pub text: AttrValue,
}

/// The small "01 / PROBLEM" eyebrow above a section heading.
#[function_component(SectionLabel)]
pub fn section_label(props: &SectionLabelProps) -> Html {
    html! {
        <span class="section-label">{ props.text.clone() }</span>
    }
}
