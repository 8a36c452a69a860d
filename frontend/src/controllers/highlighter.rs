use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::debug;
use yew::Callback;

use crate::animation::trigger::TriggerEvent;

/// Something that can run a task later. Dropping the returned handle cancels
/// the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HighlightCursor {
    #[default]
    Idle,
    Single(usize),
    All,
}

impl HighlightCursor {
    pub fn is_highlighted(self, index: usize) -> bool {
        match self {
            HighlightCursor::Idle => false,
            HighlightCursor::Single(current) => current == index,
            HighlightCursor::All => true,
        }
    }
}

struct Inner<S: Scheduler> {
    scheduler: S,
    len: usize,
    interval_ms: u32,
    cursor: HighlightCursor,
    next: usize,
    active: bool,
    pending: Option<S::Handle>,
    on_change: Callback<HighlightCursor>,
}

/// Walks the highlight through `len` items, one per interval, then
/// highlights all of them for one interval and starts over.
///
/// Cloning yields another handle to the same cycle.
pub struct AutoAdvanceHighlighter<S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler + 'static> Clone for AutoAdvanceHighlighter<S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<S: Scheduler + 'static> AutoAdvanceHighlighter<S> {
    pub fn new(
        scheduler: S,
        len: usize,
        interval_ms: u32,
        on_change: Callback<HighlightCursor>,
    ) -> Self {
        let inner = Inner {
            scheduler,
            len,
            interval_ms,
            cursor: HighlightCursor::Idle,
            next: 0,
            active: false,
            pending: None,
            on_change,
        };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    pub fn cursor(&self) -> HighlightCursor {
        self.inner.borrow().cursor
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// The owning section came into view. Starts from the first item unless a
    /// cycle is already running.
    pub fn enter(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.active || inner.len == 0 {
                return;
            }
            debug!("highlight cycle started over {} item(s)", inner.len);
            inner.active = true;
            inner.next = 0;
        }
        Self::advance(&self.inner);
    }

    /// The owning section left the view: drop the timer and clear the
    /// highlight.
    pub fn leave(&self) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            inner.pending = None;
            inner.active = false;
            inner.next = 0;
            let changed = inner.cursor != HighlightCursor::Idle;
            inner.cursor = HighlightCursor::Idle;
            changed.then(|| inner.on_change.clone())
        };
        if let Some(on_change) = changed {
            debug!("highlight cycle paused");
            on_change.emit(HighlightCursor::Idle);
        }
    }

    pub fn stop(&self) {
        self.leave();
    }

    /// Route a visibility change of the owning section.
    pub fn on_trigger(&self, event: TriggerEvent) {
        match event {
            TriggerEvent::Enter | TriggerEvent::EnterBack => self.enter(),
            TriggerEvent::Leave | TriggerEvent::LeaveBack => self.leave(),
        }
    }

    fn advance(inner: &Rc<RefCell<Inner<S>>>) {
        let (cursor, on_change) = {
            let mut state = inner.borrow_mut();
            if !state.active {
                return;
            }
            if state.next < state.len {
                state.cursor = HighlightCursor::Single(state.next);
                state.next += 1;
            } else {
                state.cursor = HighlightCursor::All;
                state.next = 0;
            }
            let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
            let handle = state.scheduler.schedule(
                state.interval_ms,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        Self::advance(&inner);
                    }
                }),
            );
            // Replacing the handle cancels whatever was still queued.
            state.pending = Some(handle);
            (state.cursor, state.on_change.clone())
        };
        on_change.emit(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::trigger::{top, BOTTOM_TOP};
    use crate::controllers::section::{RevealPlan, SectionController};
    use crate::testing::{ManualScheduler, RecordingEngine};

    const STEP: u64 = 5;
    const SECTION: u32 = 1;

    fn recorder() -> (Rc<RefCell<Vec<HighlightCursor>>>, Callback<HighlightCursor>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |cursor| seen.borrow_mut().push(cursor))
        };
        (seen, callback)
    }

    type Fixture = (
        ManualScheduler,
        AutoAdvanceHighlighter<ManualScheduler>,
        Rc<RefCell<Vec<HighlightCursor>>>,
    );

    fn highlighter(len: usize) -> Fixture {
        let scheduler = ManualScheduler::new();
        let (seen, on_change) = recorder();
        let highlighter =
            AutoAdvanceHighlighter::new(scheduler.clone(), len, STEP as u32, on_change);
        (scheduler, highlighter, seen)
    }

    #[test]
    fn visits_every_item_in_order_then_all() {
        let (clock, highlighter, seen) = highlighter(4);
        highlighter.enter();
        clock.advance(4 * STEP);
        assert_eq!(
            *seen.borrow(),
            vec![
                HighlightCursor::Single(0),
                HighlightCursor::Single(1),
                HighlightCursor::Single(2),
                HighlightCursor::Single(3),
                HighlightCursor::All,
            ]
        );
        clock.advance(STEP);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(0));
    }

    #[test]
    fn leaving_stops_changes_immediately() {
        let (clock, highlighter, seen) = highlighter(8);
        highlighter.enter();
        clock.advance(2 * STEP);
        highlighter.leave();
        assert_eq!(highlighter.cursor(), HighlightCursor::Idle);
        assert_eq!(clock.pending(), 0);
        let changes = seen.borrow().len();
        clock.advance(10 * STEP);
        assert_eq!(seen.borrow().len(), changes);
    }

    #[test]
    fn reentering_restarts_from_first_item() {
        let (clock, highlighter, _) = highlighter(8);
        highlighter.enter();
        clock.advance(3 * STEP);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(3));
        highlighter.leave();
        highlighter.enter();
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(0));
    }

    #[test]
    fn rapid_toggling_never_stacks_timers() {
        let (clock, highlighter, _) = highlighter(3);
        for _ in 0..10 {
            highlighter.enter();
            highlighter.enter();
            assert_eq!(clock.pending(), 1);
            highlighter.leave();
            assert_eq!(clock.pending(), 0);
        }
        highlighter.enter();
        clock.advance(STEP);
        assert_eq!(clock.pending(), 1);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(1));
    }

    #[test]
    fn at_most_one_timer_while_cycling() {
        let (clock, highlighter, _) = highlighter(2);
        highlighter.enter();
        for _ in 0..12 {
            clock.advance(STEP);
            assert_eq!(clock.pending(), 1);
        }
    }

    #[test]
    fn empty_list_never_cycles() {
        let (clock, highlighter, seen) = highlighter(0);
        highlighter.enter();
        assert!(!highlighter.is_active());
        assert_eq!(clock.pending(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn dropping_the_controller_cancels_the_timer() {
        let (clock, highlighter, seen) = highlighter(4);
        highlighter.enter();
        drop(highlighter);
        assert_eq!(clock.pending(), 0);
        clock.advance(10 * STEP);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn every_handle_drives_the_same_cycle() {
        let (clock, highlighter, seen) = highlighter(4);
        let watcher = highlighter.clone();
        let cleanup = highlighter.clone();
        watcher.on_trigger(TriggerEvent::Enter);
        clock.advance(STEP);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(1));

        cleanup.stop();
        assert!(!watcher.is_active());
        assert_eq!(clock.pending(), 0);
        clock.advance(10 * STEP);
        assert_eq!(seen.borrow().last(), Some(&HighlightCursor::Idle));
    }

    #[test]
    fn follows_section_visibility() {
        let engine = RecordingEngine::new(800.0);
        engine.place(SECTION, 1200.0, 1000.0);
        let (clock, highlighter, _) = highlighter(8);
        let mut section = SectionController::new("work", engine.clone());
        let watcher = highlighter.clone();
        section.start(RevealPlan::new().watch(
            Some(SECTION),
            top(80.0),
            BOTTOM_TOP,
            Callback::from(move |event| watcher.on_trigger(event)),
        ));
        assert!(!highlighter.is_active());

        engine.scroll_by(700.0);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(0));
        clock.advance(2 * STEP);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(2));

        // Scrolled past the bottom.
        engine.scroll_by(1600.0);
        assert_eq!(highlighter.cursor(), HighlightCursor::Idle);
        assert_eq!(clock.pending(), 0);

        // Back into view from below starts over.
        engine.scroll_by(-600.0);
        assert_eq!(highlighter.cursor(), HighlightCursor::Single(0));

        section.stop();
        highlighter.stop();
        assert_eq!(engine.live(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cursor_highlights_cards() {
        assert!(!HighlightCursor::Idle.is_highlighted(0));
        assert!(HighlightCursor::Single(2).is_highlighted(2));
        assert!(!HighlightCursor::Single(2).is_highlighted(1));
        assert!((0..8).all(|i| HighlightCursor::All.is_highlighted(i)));
    }
}
