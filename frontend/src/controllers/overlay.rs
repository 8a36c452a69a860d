use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::Callback;

use crate::listener::ListenerGuard;

/// Where the overlay listens for the escape key. Dropping the guard removes
/// the listener.
pub trait KeyListenerHost {
    type Guard;

    fn listen_keydown(&self, on_key: Callback<String>) -> Option<Self::Guard>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowKeys;

impl KeyListenerHost for WindowKeys {
    type Guard = ListenerGuard;

    fn listen_keydown(&self, on_key: Callback<String>) -> Option<ListenerGuard> {
        ListenerGuard::on_window("keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                on_key.emit(event.key());
            }
        })
    }
}

struct Inner<H: KeyListenerHost> {
    keys: H,
    selected: Option<String>,
    escape: Option<H::Guard>,
    on_change: Callback<Option<String>>,
}

/// Which card, if any, is expanded into the full screen overlay.
pub struct OverlayController<H: KeyListenerHost + 'static> {
    inner: Rc<RefCell<Inner<H>>>,
}

impl<H: KeyListenerHost + 'static> Clone for OverlayController<H> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<H: KeyListenerHost + 'static> OverlayController<H> {
    pub fn new(keys: H, on_change: Callback<Option<String>>) -> Self {
        let inner = Inner { keys, selected: None, escape: None, on_change };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    pub fn selected(&self) -> Option<String> {
        self.inner.borrow().selected.clone()
    }

    /// Expand `card`, replacing whatever was open.
    pub fn select(&self, card: &str) {
        let on_change = {
            let mut inner = self.inner.borrow_mut();
            if inner.selected.as_deref() == Some(card) {
                return;
            }
            debug!("expanding card {}", card);
            inner.selected = Some(card.to_string());
            if inner.escape.is_none() {
                let weak: Weak<RefCell<Inner<H>>> = Rc::downgrade(&self.inner);
                inner.escape = inner.keys.listen_keydown(Callback::from(move |key: String| {
                    if key == "Escape" {
                        if let Some(inner) = weak.upgrade() {
                            Self::close_inner(&inner);
                        }
                    }
                }));
            }
            inner.on_change.clone()
        };
        on_change.emit(Some(card.to_string()));
    }

    pub fn close(&self) {
        Self::close_inner(&self.inner);
    }

    /// Clicks on the backdrop close; clicks on the panel are stopped before
    /// they get here.
    pub fn backdrop_click(&self) {
        self.close();
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.escape = None;
        inner.selected = None;
    }

    fn close_inner(inner: &Rc<RefCell<Inner<H>>>) {
        let on_change = {
            let mut state = inner.borrow_mut();
            if state.selected.take().is_none() {
                return;
            }
            debug!("overlay closed");
            state.escape = None;
            state.on_change.clone()
        };
        on_change.emit(None);
    }
}
