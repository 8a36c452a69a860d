//! Registrations shared by every [`TimelineEngine`]: the trigger state of a
//! reveal, scrub or watch plus the decisions that turn trigger events into
//! poses. Engines only supply positions and a place to write styles.
//!
//! [`TimelineEngine`]: super::engine::TimelineEngine

use yew::Callback;

use super::ease::{self, Ease, Pose};
use super::engine::{RevealOptions, ScrubOptions};
use super::trigger::{
    Bounds, Direction, RevealToggle, ScrollTrigger, TriggerEvent, TriggerPosition, BOTTOM_TOP,
};

/// Inline style of an animated element.
pub trait StyleSink {
    /// The whole `style` attribute, if there is one.
    fn style_attr(&self) -> Option<String>;
    /// Replace the `style` attribute, or remove it with `None`.
    fn set_style_attr(&self, value: Option<&str>);
    fn set_property(&self, name: &str, value: &str);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
}

impl Tween {
    fn css(&self) -> String {
        ease::transition(self.duration, self.ease, self.delay)
    }
}

/// A target together with the inline style it had before we touched it.
pub struct Styled<S> {
    sink: S,
    original: Option<String>,
}

impl<S: StyleSink> Styled<S> {
    pub fn capture(sink: S) -> Self {
        let original = sink.style_attr();
        Self { sink, original }
    }

    /// Tween to `pose`, or jump there when `tween` is `None`.
    pub fn pose(&self, pose: Pose, tween: Option<Tween>) {
        let transition = tween.map_or_else(|| "none".to_string(), |tween| tween.css());
        self.sink.set_property("transition", &transition);
        self.sink.set_property("transform", &pose.transform());
        self.sink.set_property("opacity", &pose.opacity.to_string());
    }

    pub fn restore(&self) {
        self.sink.set_style_attr(self.original.as_deref());
    }
}

/// What a refresh did, for the engine to log or forward.
pub enum Update {
    Played { direction: Direction, delays: Vec<f64> },
    Scrubbed(Pose),
    Crossed(Callback<TriggerEvent>, TriggerEvent),
}

pub enum Registration<S> {
    Reveal {
        targets: Vec<Styled<S>>,
        state: ScrollTrigger,
        toggle: RevealToggle,
        options: RevealOptions,
    },
    Scrub {
        target: Styled<S>,
        state: ScrollTrigger,
        options: ScrubOptions,
    },
    Watch {
        state: ScrollTrigger,
        on_event: Callback<TriggerEvent>,
    },
}

impl<S: StyleSink> Registration<S> {
    /// The targets jump to the hidden pose straight away.
    pub fn reveal(targets: impl IntoIterator<Item = S>, options: RevealOptions) -> Self {
        let targets: Vec<Styled<S>> = targets.into_iter().map(Styled::capture).collect();
        for target in &targets {
            target.pose(options.from, None);
        }
        Registration::Reveal {
            targets,
            state: ScrollTrigger::new(options.start, BOTTOM_TOP),
            toggle: RevealToggle::new(options.replay),
            options,
        }
    }

    pub fn scrub(target: S, options: ScrubOptions) -> Self {
        Registration::Scrub {
            target: Styled::capture(target),
            state: ScrollTrigger::new(options.start, options.end),
            options,
        }
    }

    pub fn watch(
        start: TriggerPosition,
        end: TriggerPosition,
        on_event: Callback<TriggerEvent>,
    ) -> Self {
        Registration::Watch { state: ScrollTrigger::new(start, end), on_event }
    }

    /// Bring the registration up to date with its trigger at `bounds`.
    /// Watch callbacks are returned rather than emitted.
    pub fn update(&mut self, bounds: Bounds, viewport_height: f64) -> Vec<Update> {
        let mut updates = Vec::new();
        match self {
            Registration::Reveal { targets, state, toggle, options } => {
                for event in state.update(bounds, viewport_height) {
                    let Some(direction) = toggle.on_event(event) else {
                        continue;
                    };
                    let forward = direction == Direction::Forward;
                    let pose = if forward { Pose::RESTING } else { options.from };
                    let count = targets.len();
                    let delays: Vec<f64> =
                        (0..count).map(|index| options.delay_for(index, count, forward)).collect();
                    for (target, delay) in targets.iter().zip(&delays) {
                        let tween = Tween {
                            duration: options.duration,
                            ease: options.ease,
                            delay: *delay,
                        };
                        target.pose(pose, Some(tween));
                    }
                    updates.push(Update::Played { direction, delays });
                }
            }
            Registration::Scrub { target, state, options } => {
                let progress = state.progress(bounds, viewport_height);
                let pose = Pose::RESTING.lerp(options.to, options.ease.apply(progress));
                let catch_up =
                    Tween { duration: options.smoothing, ease: Ease::Power3Out, delay: 0.0 };
                target.pose(pose, Some(catch_up));
                updates.push(Update::Scrubbed(pose));
            }
            Registration::Watch { state, on_event } => {
                for event in state.update(bounds, viewport_height) {
                    updates.push(Update::Crossed(on_event.clone(), event));
                }
            }
        }
        updates
    }

    /// Put every target's inline style back the way it was captured.
    pub fn release(&self) {
        match self {
            Registration::Reveal { targets, .. } => targets.iter().for_each(Styled::restore),
            Registration::Scrub { target, .. } => target.restore(),
            Registration::Watch { .. } => {}
        }
    }
}
