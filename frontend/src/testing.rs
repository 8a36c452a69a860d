//! In-memory stand-ins for the browser: a timeline engine that records what
//! it was asked to do, a clock that only moves when told to, and a keyboard.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use yew::Callback;

use crate::animation::ease::Pose;
use crate::animation::engine::{RevealOptions, ScrubOptions, TimelineEngine};
use crate::animation::timeline::{Registration, StyleSink, Update};
use crate::animation::trigger::{Bounds, Direction, RevealPhase, TriggerEvent, TriggerPosition};
use crate::controllers::highlighter::Scheduler;
use crate::controllers::overlay::KeyListenerHost;

/// An element's inline style as an ordered list of declarations.
#[derive(Clone, Debug, Default)]
pub struct FakeStyle {
    declarations: Rc<RefCell<Vec<(String, String)>>>,
}

impl FakeStyle {
    pub fn with(style: &str) -> Self {
        let fake = Self::default();
        fake.set_style_attr(Some(style));
        fake
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.declarations
            .borrow()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

impl StyleSink for FakeStyle {
    fn style_attr(&self) -> Option<String> {
        let declarations = self.declarations.borrow();
        if declarations.is_empty() {
            return None;
        }
        let style: Vec<String> =
            declarations.iter().map(|(key, value)| format!("{}: {};", key, value)).collect();
        Some(style.join(" "))
    }

    fn set_style_attr(&self, value: Option<&str>) {
        let mut declarations = self.declarations.borrow_mut();
        declarations.clear();
        for declaration in value.unwrap_or_default().split(';') {
            if let Some((key, value)) = declaration.split_once(':') {
                declarations.push((key.trim().to_string(), value.trim().to_string()));
            }
        }
    }

    fn set_property(&self, name: &str, value: &str) {
        let mut declarations = self.declarations.borrow_mut();
        match declarations.iter_mut().find(|(key, _)| key == name) {
            Some(declaration) => declaration.1 = value.to_string(),
            None => declarations.push((name.to_string(), value.to_string())),
        }
    }
}

/// One registration plus what it has done so far.
struct Recorded {
    trigger: u32,
    registration: Registration<FakeStyle>,
    plays: usize,
    reverses: usize,
    last_delays: Vec<f64>,
    scrub_pose: Option<Pose>,
}

impl Recorded {
    fn new(trigger: u32, registration: Registration<FakeStyle>) -> Self {
        Self {
            trigger,
            registration,
            plays: 0,
            reverses: 0,
            last_delays: Vec::new(),
            scrub_pose: None,
        }
    }

    fn is_reveal(&self) -> bool {
        matches!(self.registration, Registration::Reveal { .. })
    }

    fn phase(&self) -> RevealPhase {
        if self.plays > self.reverses {
            RevealPhase::Revealed
        } else {
            RevealPhase::PreReveal
        }
    }
}

#[derive(Default)]
struct Page {
    viewport_height: f64,
    bounds: HashMap<u32, Bounds>,
    styles: HashMap<u32, FakeStyle>,
    registrations: Vec<Option<Recorded>>,
}

impl Page {
    fn style(&mut self, element: u32) -> FakeStyle {
        self.styles.entry(element).or_default().clone()
    }

    fn refresh(&mut self) -> Vec<(Callback<TriggerEvent>, TriggerEvent)> {
        let mut notify = Vec::new();
        let vh = self.viewport_height;
        for recorded in self.registrations.iter_mut().flatten() {
            let bounds = self
                .bounds
                .get(&recorded.trigger)
                .copied()
                .unwrap_or(Bounds { top: f64::INFINITY, height: 0.0 });
            for update in recorded.registration.update(bounds, vh) {
                match update {
                    Update::Played { direction, delays } => {
                        match direction {
                            Direction::Forward => recorded.plays += 1,
                            Direction::Reverse => recorded.reverses += 1,
                        }
                        recorded.last_delays = delays;
                    }
                    Update::Scrubbed(pose) => recorded.scrub_pose = Some(pose),
                    Update::Crossed(callback, event) => notify.push((callback, event)),
                }
            }
        }
        notify
    }
}

/// Elements are plain numbers; their positions are set with [`place`] and
/// moved with [`scroll_by`].
///
/// [`place`]: RecordingEngine::place
/// [`scroll_by`]: RecordingEngine::scroll_by
#[derive(Clone)]
pub struct RecordingEngine {
    page: Rc<RefCell<Page>>,
}

impl RecordingEngine {
    pub fn new(viewport_height: f64) -> Self {
        let page = Page { viewport_height, ..Page::default() };
        Self { page: Rc::new(RefCell::new(page)) }
    }

    pub fn place(&self, element: u32, top: f64, height: f64) {
        self.page.borrow_mut().bounds.insert(element, Bounds { top, height });
    }

    /// The inline style of `element`, shared with any registration on it.
    pub fn style(&self, element: u32) -> FakeStyle {
        self.page.borrow_mut().style(element)
    }

    pub fn scroll_by(&self, dy: f64) {
        {
            let mut page = self.page.borrow_mut();
            for bounds in page.bounds.values_mut() {
                bounds.top -= dy;
            }
        }
        self.refresh();
    }

    pub fn resize(&self, viewport_height: f64) {
        self.page.borrow_mut().viewport_height = viewport_height;
        self.refresh();
    }

    fn refresh(&self) {
        let notify = self.page.borrow_mut().refresh();
        for (callback, event) in notify {
            callback.emit(event);
        }
    }

    fn register(&self, scope: &mut Vec<usize>, recorded: Recorded) {
        let id = {
            let mut page = self.page.borrow_mut();
            page.registrations.push(Some(recorded));
            page.registrations.len() - 1
        };
        scope.push(id);
        self.refresh();
    }

    pub fn live(&self) -> usize {
        self.page.borrow().registrations.iter().flatten().count()
    }

    pub fn registered_triggers(&self) -> Vec<u32> {
        self.page.borrow().registrations.iter().flatten().map(|r| r.trigger).collect()
    }

    fn with_reveal<T>(&self, trigger: u32, read: impl Fn(&Recorded) -> T) -> Option<T> {
        self.page
            .borrow()
            .registrations
            .iter()
            .flatten()
            .find(|r| r.is_reveal() && r.trigger == trigger)
            .map(read)
    }

    pub fn phase(&self, trigger: u32) -> Option<RevealPhase> {
        self.with_reveal(trigger, Recorded::phase)
    }

    pub fn plays(&self, trigger: u32) -> usize {
        self.with_reveal(trigger, |r| r.plays).unwrap_or(0)
    }

    pub fn reverses(&self, trigger: u32) -> usize {
        self.with_reveal(trigger, |r| r.reverses).unwrap_or(0)
    }

    pub fn last_delays(&self, trigger: u32) -> Vec<f64> {
        self.with_reveal(trigger, |r| r.last_delays.clone()).unwrap_or_default()
    }

    pub fn scrub_pose(&self, trigger: u32) -> Option<Pose> {
        self.page
            .borrow()
            .registrations
            .iter()
            .flatten()
            .find(|r| r.trigger == trigger)
            .and_then(|r| r.scrub_pose)
    }
}

impl TimelineEngine for RecordingEngine {
    type Element = u32;
    type Scope = Vec<usize>;

    fn reveal_on_scroll(
        &self,
        scope: &mut Vec<usize>,
        targets: &[u32],
        trigger: &u32,
        options: RevealOptions,
    ) {
        if targets.is_empty() {
            return;
        }
        let styles: Vec<FakeStyle> = targets.iter().map(|&target| self.style(target)).collect();
        let recorded = Recorded::new(*trigger, Registration::reveal(styles, options));
        self.register(scope, recorded);
    }

    fn scrub_on_scroll(
        &self,
        scope: &mut Vec<usize>,
        target: &u32,
        trigger: &u32,
        options: ScrubOptions,
    ) {
        let registration = Registration::scrub(self.style(*target), options);
        self.register(scope, Recorded::new(*trigger, registration));
    }

    fn watch(
        &self,
        scope: &mut Vec<usize>,
        trigger: &u32,
        start: TriggerPosition,
        end: TriggerPosition,
        on_event: Callback<TriggerEvent>,
    ) {
        let recorded = Recorded::new(*trigger, Registration::watch(start, end, on_event));
        self.register(scope, recorded);
    }

    fn dispose_all(&self, scope: &mut Vec<usize>) {
        let mut page = self.page.borrow_mut();
        for id in scope.drain(..) {
            if let Some(recorded) = page.registrations.get_mut(id).and_then(Option::take) {
                recorded.registration.release();
            }
        }
    }
}

struct Task {
    id: u64,
    due: u64,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    queue: Vec<Task>,
}

/// A scheduler whose time only advances through [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its task when dropped, like a browser timeout handle.
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().queue.retain(|task| task.id != self.id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Run every task due within the next `ms`, in due order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let task = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let task = clock.queue.remove(index);
                        clock.now = task.due;
                        task
                    }
                    None => break,
                }
            };
            (task.run)();
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.queue.push(Task { id, due, run: task });
        ManualHandle { id, clock: Rc::downgrade(&self.clock) }
    }
}

type KeyListeners = Vec<(u64, Callback<String>)>;

/// Keyboard whose listeners can be counted and pressed.
#[derive(Clone, Default)]
pub struct FakeKeyboard {
    listeners: Rc<RefCell<KeyListeners>>,
    next_id: Rc<RefCell<u64>>,
}

pub struct FakeKeyGuard {
    id: u64,
    listeners: Weak<RefCell<KeyListeners>>,
}

impl Drop for FakeKeyGuard {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl FakeKeyboard {
    pub fn listeners(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn press(&self, key: &str) {
        let callbacks: Vec<Callback<String>> =
            self.listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in callbacks {
            callback.emit(key.to_string());
        }
    }
}

impl KeyListenerHost for FakeKeyboard {
    type Guard = FakeKeyGuard;

    fn listen_keydown(&self, on_key: Callback<String>) -> Option<FakeKeyGuard> {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.listeners.borrow_mut().push((id, on_key));
        Some(FakeKeyGuard { id, listeners: Rc::downgrade(&self.listeners) })
    }
}
