use yew::Callback;

use super::ease::{Ease, Pose};
use super::trigger::{Replay, TriggerEvent, TriggerPosition, BOTTOM_TOP};

/// A tween from a hidden pose to the resting pose, played when its trigger
/// is scrolled into view.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub from: Pose,
    pub duration: f64,
    pub ease: Ease,
    /// Delay between consecutive targets of one group, in seconds.
    pub stagger: f64,
    pub start: TriggerPosition,
    pub replay: Replay,
}

impl RevealOptions {
    pub fn new(from: Pose, start: TriggerPosition) -> Self {
        Self {
            from,
            duration: 1.0,
            ease: Ease::Power3Out,
            stagger: 0.0,
            start,
            replay: Replay::Reversible,
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = secs;
        self
    }

    pub fn once(mut self) -> Self {
        self.replay = Replay::Once;
        self
    }

    /// Delay of the target at `index` when playing forward. Reversing runs
    /// the group backwards, so the last target leaves first.
    pub fn delay_for(&self, index: usize, count: usize, forward: bool) -> f64 {
        let slot = if forward { index } else { count.saturating_sub(index + 1) };
        slot as f64 * self.stagger
    }
}

/// Animation progress bound to the scroll position between two trigger
/// positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubOptions {
    pub to: Pose,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    pub ease: Ease,
    /// Seconds the element takes to catch up with the scroll position.
    pub smoothing: f64,
}

impl ScrubOptions {
    pub fn new(to: Pose, start: TriggerPosition) -> Self {
        Self { to, start, end: BOTTOM_TOP, ease: Ease::Power1Out, smoothing: 1.0 }
    }

    pub fn end(mut self, end: TriggerPosition) -> Self {
        self.end = end;
        self
    }
}

/// The animation backend a section controller registers its timelines with.
///
/// Every registration lands in a `Scope` owned by the caller. Dropping the
/// scope or handing it to [`TimelineEngine::dispose_all`] releases the
/// registrations and their scroll listeners.
pub trait TimelineEngine {
    type Element: Clone;
    type Scope: Default;

    fn reveal_on_scroll(
        &self,
        scope: &mut Self::Scope,
        targets: &[Self::Element],
        trigger: &Self::Element,
        options: RevealOptions,
    );

    fn scrub_on_scroll(
        &self,
        scope: &mut Self::Scope,
        target: &Self::Element,
        trigger: &Self::Element,
        options: ScrubOptions,
    );

    /// Report trigger crossings without animating anything.
    fn watch(
        &self,
        scope: &mut Self::Scope,
        trigger: &Self::Element,
        start: TriggerPosition,
        end: TriggerPosition,
        on_event: Callback<TriggerEvent>,
    );

    /// Release every registration in `scope` and put the targets back the
    /// way they were before the first registration.
    fn dispose_all(&self, scope: &mut Self::Scope);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::trigger::{Edge, Offset, TOP_TOP};

    #[test]
    fn stagger_preserves_document_order() {
        let options = RevealOptions::new(
            Pose::from_x(-100.0),
            TriggerPosition::new(Edge::Top, Offset::Percent(90.0)),
        )
        .duration(0.8)
        .stagger(0.2);
        let delays: Vec<f64> = (0..4).map(|i| options.delay_for(i, 4, true)).collect();
        for (delay, expected) in delays.iter().zip([0.0, 0.2, 0.4, 0.6]) {
            assert!((delay - expected).abs() < 1e-9, "{} != {}", delay, expected);
        }
    }

    #[test]
    fn reverse_runs_group_backwards() {
        let options = RevealOptions::new(Pose::from_y(40.0), BOTTOM_TOP).stagger(0.1);
        assert_eq!(options.delay_for(2, 3, false), 0.0);
        assert_eq!(options.delay_for(0, 3, false), 0.2);
    }

    #[test]
    fn defaults_match_site_choreography() {
        let options = RevealOptions::new(Pose::from_x(-60.0), BOTTOM_TOP);
        assert_eq!(options.duration, 1.0);
        assert_eq!(options.ease, Ease::Power3Out);
        assert_eq!(options.replay, Replay::Reversible);
        assert_eq!(options.clone().once().replay, Replay::Once);
    }

    #[test]
    fn scrub_defaults_to_power1_out_over_the_whole_trigger() {
        let options = ScrubOptions::new(Pose::from_y(-100.0), TOP_TOP);
        assert_eq!(options.ease, Ease::Power1Out);
        assert_eq!(options.end, BOTTOM_TOP);
        assert_eq!(options.smoothing, 1.0);
    }
}
