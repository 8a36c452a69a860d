//! Browser backend for [`TimelineEngine`]: trigger zones are recomputed from
//! `getBoundingClientRect` on every window scroll and resize, and the tweens
//! themselves are CSS transitions on the targets' inline style.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};
use web_sys::{Element, HtmlElement};
use yew::Callback;

use super::engine::{RevealOptions, ScrubOptions, TimelineEngine};
use super::timeline::{Registration, StyleSink, Update};
use super::trigger::{Bounds, TriggerEvent, TriggerPosition};
use crate::listener::ListenerGuard;

#[derive(Clone, Copy, Debug, Default)]
pub struct DomTimeline;

#[derive(Default)]
pub struct DomScope {
    entries: Rc<RefCell<Vec<Entry>>>,
    listeners: Vec<ListenerGuard>,
}

impl DomScope {
    fn push(&mut self, entry: Entry) {
        self.entries.borrow_mut().push(entry);
        self.listen();
        refresh(&self.entries);
    }

    fn listen(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }
        for event in ["scroll", "resize"] {
            let entries: Weak<RefCell<Vec<Entry>>> = Rc::downgrade(&self.entries);
            let guard = ListenerGuard::on_window(event, move |_| {
                if let Some(entries) = entries.upgrade() {
                    refresh(&entries);
                }
            });
            self.listeners.extend(guard);
        }
    }
}

impl StyleSink for HtmlElement {
    fn style_attr(&self) -> Option<String> {
        self.get_attribute("style")
    }

    fn set_style_attr(&self, value: Option<&str>) {
        let _ = match value {
            Some(style) => self.set_attribute("style", style),
            None => self.remove_attribute("style"),
        };
    }

    fn set_property(&self, name: &str, value: &str) {
        let _ = self.style().set_property(name, value);
    }
}

struct Entry {
    trigger: Element,
    registration: Registration<HtmlElement>,
}

fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds { top: rect.top(), height: rect.height() }
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

fn refresh(entries: &Rc<RefCell<Vec<Entry>>>) {
    let Some(viewport_height) = viewport_height() else {
        return;
    };
    let mut notify = Vec::new();
    for entry in entries.borrow_mut().iter_mut() {
        for update in entry.registration.update(bounds_of(&entry.trigger), viewport_height) {
            match update {
                Update::Played { direction, delays } => {
                    trace!("reveal {:?} with delays {:?}", direction, delays)
                }
                Update::Scrubbed(pose) => trace!("scrub at {}", pose.transform()),
                Update::Crossed(callback, event) => notify.push((callback, event)),
            }
        }
    }
    // Watchers run after the borrow ends so they may touch the page freely.
    for (callback, event) in notify {
        callback.emit(event);
    }
}

impl TimelineEngine for DomTimeline {
    type Element = HtmlElement;
    type Scope = DomScope;

    fn reveal_on_scroll(
        &self,
        scope: &mut DomScope,
        targets: &[HtmlElement],
        trigger: &HtmlElement,
        options: RevealOptions,
    ) {
        if targets.is_empty() {
            return;
        }
        debug!("registering reveal of {} target(s) at {}", targets.len(), options.start);
        scope.push(Entry {
            trigger: trigger.clone().into(),
            registration: Registration::reveal(targets.iter().cloned(), options),
        });
    }

    fn scrub_on_scroll(
        &self,
        scope: &mut DomScope,
        target: &HtmlElement,
        trigger: &HtmlElement,
        options: ScrubOptions,
    ) {
        debug!("registering scrub from {} to {}", options.start, options.end);
        scope.push(Entry {
            trigger: trigger.clone().into(),
            registration: Registration::scrub(target.clone(), options),
        });
    }

    fn watch(
        &self,
        scope: &mut DomScope,
        trigger: &HtmlElement,
        start: TriggerPosition,
        end: TriggerPosition,
        on_event: Callback<TriggerEvent>,
    ) {
        debug!("watching trigger from {} to {}", start, end);
        scope.push(Entry {
            trigger: trigger.clone().into(),
            registration: Registration::watch(start, end, on_event),
        });
    }

    fn dispose_all(&self, scope: &mut DomScope) {
        scope.listeners.clear();
        let entries: Vec<Entry> = scope.entries.borrow_mut().drain(..).collect();
        debug!("disposed {} registration(s)", entries.len());
        for entry in &entries {
            entry.registration.release();
        }
    }
}
