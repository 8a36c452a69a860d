use log::debug;
use yew::Callback;

use crate::animation::engine::{RevealOptions, ScrubOptions, TimelineEngine};
use crate::animation::trigger::{TriggerEvent, TriggerPosition};

enum Step<El> {
    Reveal { targets: Vec<El>, trigger: El, options: RevealOptions },
    Scrub { target: El, trigger: El, options: ScrubOptions },
    Watch {
        trigger: El,
        start: TriggerPosition,
        end: TriggerPosition,
        on_event: Callback<TriggerEvent>,
    },
}

/// The timelines one section wants registered, in registration order.
///
/// Builders take `Option`s straight from node refs: anything that is not
/// attached yet is skipped instead of being registered half way.
pub struct RevealPlan<El> {
    steps: Vec<Step<El>>,
}

impl<El: Clone> RevealPlan<El> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Reveal one element, triggered by its own position.
    pub fn reveal(self, target: Option<El>, options: RevealOptions) -> Self {
        match target {
            Some(target) => self.group(vec![target.clone()], Some(target), options),
            None => self,
        }
    }

    /// Reveal sibling elements sharing one trigger, staggered in order.
    pub fn group(mut self, targets: Vec<El>, trigger: Option<El>, options: RevealOptions) -> Self {
        if targets.is_empty() {
            return self;
        }
        if let Some(trigger) = trigger {
            self.steps.push(Step::Reveal { targets, trigger, options });
        }
        self
    }

    pub fn scrub(mut self, target: Option<El>, trigger: Option<El>, options: ScrubOptions) -> Self {
        if let (Some(target), Some(trigger)) = (target, trigger) {
            self.steps.push(Step::Scrub { target, trigger, options });
        }
        self
    }

    pub fn watch(
        mut self,
        trigger: Option<El>,
        start: TriggerPosition,
        end: TriggerPosition,
        on_event: Callback<TriggerEvent>,
    ) -> Self {
        if let Some(trigger) = trigger {
            self.steps.push(Step::Watch { trigger, start, end, on_event });
        }
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<El: Clone> Default for RevealPlan<El> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns every timeline a section registered and releases them together.
pub struct SectionController<E: TimelineEngine> {
    name: &'static str,
    engine: E,
    scope: E::Scope,
    started: bool,
}

impl<E: TimelineEngine> SectionController<E> {
    pub fn new(name: &'static str, engine: E) -> Self {
        Self { name, engine, scope: E::Scope::default(), started: false }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Register the plan. Only the first call per lifecycle registers
    /// anything; an empty plan leaves the controller idle.
    pub fn start(&mut self, plan: RevealPlan<E::Element>) {
        if self.started || plan.is_empty() {
            return;
        }
        debug!("{}: registering {} timeline(s)", self.name, plan.len());
        for step in plan.steps {
            match step {
                Step::Reveal { targets, trigger, options } => {
                    self.engine.reveal_on_scroll(&mut self.scope, &targets, &trigger, options)
                }
                Step::Scrub { target, trigger, options } => {
                    self.engine.scrub_on_scroll(&mut self.scope, &target, &trigger, options)
                }
                Step::Watch { trigger, start, end, on_event } => {
                    self.engine.watch(&mut self.scope, &trigger, start, end, on_event)
                }
            }
        }
        self.started = true;
    }

    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        debug!("{}: releasing timelines", self.name);
        self.engine.dispose_all(&mut self.scope);
        self.started = false;
    }
}

impl<E: TimelineEngine> Drop for SectionController<E> {
    fn drop(&mut self) {
        self.stop();
    }
}
