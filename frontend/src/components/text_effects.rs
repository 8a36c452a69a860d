use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

const SCRAMBLE_GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'K', 'M', 'N', 'R', 'S', 'T', 'X', 'Z', '#', '%', '&',
    '*', '+', '/', '<', '>', '=', '?', '0', '1', '7',
];

const FLAP_GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Flips a letter goes through before it can settle.
const MIN_FLIPS: usize = 3;

fn random_glyph(set: &[char]) -> char {
    let index = (Math::random() * set.len() as f64) as usize;
    set.get(index).copied().unwrap_or('#')
}

/// One frame of the hover scramble. The first `progress * len` characters
/// already show the target text; spaces are never scrambled.
pub fn scramble_frame(target: &str, progress: f64, mut glyph: impl FnMut() -> char) -> String {
    let len = target.chars().count();
    let revealed = (progress.clamp(0.0, 1.0) * len as f64).floor() as usize;
    target
        .chars()
        .enumerate()
        .map(|(i, c)| if c == ' ' || i < revealed { c } else { glyph() })
        .collect()
}

/// Letter `index` settles once `step` reaches `index + MIN_FLIPS`, so the
/// word lands left to right.
pub fn flap_frame(target: &str, step: usize, mut glyph: impl FnMut() -> char) -> String {
    target
        .chars()
        .enumerate()
        .map(|(i, c)| if c == ' ' || step >= i + MIN_FLIPS { c } else { glyph() })
        .collect()
}

pub fn flap_settled(target: &str, step: usize) -> bool {
    match target.chars().count() {
        0 => true,
        len => step >= len - 1 + MIN_FLIPS,
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
}

/// Label that scrambles and resolves again whenever the pointer enters it.
/// Leaving early does not cut the scramble short.
#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let display = use_state(|| props.text.to_string());
    let running = use_mut_ref(|| None::<Interval>);

    {
        let running = running.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    running.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onmouseenter = {
        let display = display.clone();
        let running = running.clone();
        let text = props.text.to_string();
        Callback::from(move |_: MouseEvent| {
            if running.borrow().is_some() {
                return;
            }
            let frames = (config::SCRAMBLE_DURATION_MS / config::SCRAMBLE_FRAME_MS).max(1);
            let mut frame = 0;
            let display = display.clone();
            let text = text.clone();
            let this_run = Rc::downgrade(&running);
            let interval = Interval::new(config::SCRAMBLE_FRAME_MS, move || {
                frame += 1;
                let progress = f64::from(frame) / f64::from(frames);
                display.set(scramble_frame(&text, progress, || random_glyph(SCRAMBLE_GLYPHS)));
                if frame >= frames {
                    if let Some(running) = this_run.upgrade() {
                        running.borrow_mut().take();
                    }
                }
            });
            *running.borrow_mut() = Some(interval);
        })
    };

    html! {
        <span class="scramble-text" {onmouseenter}>{ (*display).clone() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SplitFlapTextProps {
    pub text: AttrValue,
    #[prop_or(config::SPLIT_FLAP_SPEED_MS)]
    pub speed_ms: u32,
}

/// Departure-board title: every letter flips through random glyphs on mount
/// before settling.
#[function_component(SplitFlapText)]
pub fn split_flap_text(props: &SplitFlapTextProps) -> Html {
    let display = use_state(|| flap_frame(&props.text, 0, || ' '));

    {
        let display = display.clone();
        let text = props.text.to_string();
        let speed_ms = props.speed_ms;
        use_effect_with_deps(
            move |_| {
                let running = Rc::new(RefCell::new(None::<Interval>));
                let this_run = Rc::downgrade(&running);
                let mut step = 0;
                display.set(flap_frame(&text, step, || random_glyph(FLAP_GLYPHS)));
                let interval = Interval::new(speed_ms, move || {
                    step += 1;
                    display.set(flap_frame(&text, step, || random_glyph(FLAP_GLYPHS)));
                    if flap_settled(&text, step) {
                        if let Some(running) = this_run.upgrade() {
                            running.borrow_mut().take();
                        }
                    }
                });
                *running.borrow_mut() = Some(interval);
                move || drop(running)
            },
            (),
        );
    }

    html! {
        <h1 class="split-flap" aria-label={props.text.clone()}>
            { for display.chars().map(|c| html! { <span class="flap-letter" aria-hidden="true">{ c }</span> }) }
        </h1>
    }
}
