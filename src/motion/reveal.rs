//! One-shot entrance animations: on mount after a delay, or when an element
//! first scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::{DomError, DomResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Reveal the first time the element is seen and stay revealed.
    #[default]
    Once,
    /// Follow the element in and out of the viewport.
    Repeat,
}

/// Per-instance "has this entered view" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealFlag {
    mode: RevealMode,
    visible: bool,
}

impl RevealFlag {
    pub fn new(mode: RevealMode) -> Self {
        Self { mode, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Nothing can change any more: a one-shot flag that already fired.
    pub fn is_settled(&self) -> bool {
        self.mode == RevealMode::Once && self.visible
    }

    /// Feeds one intersection report; returns whether visibility changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = match self.mode {
            RevealMode::Once => self.visible || intersecting,
            RevealMode::Repeat => intersecting,
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn observe(
    node: &NodeRef,
    flag: Rc<RefCell<RevealFlag>>,
    visible: UseStateHandle<bool>,
) -> DomResult<ObserverHandle> {
    let element = node
        .cast::<Element>()
        .ok_or(DomError::MissingElement("reveal target"))?;

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let mut flag = flag.borrow_mut();
            if flag.observe(entry.is_intersecting()) {
                visible.set(flag.is_visible());
            }
            if flag.is_settled() {
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| DomError::js("create intersection observer", e))?;
    observer.observe(&element);

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Whether the element behind `node` has entered the viewport. If the
/// browser cannot observe it the element is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef, mode: RevealMode) -> bool {
    let visible = use_state_eq(|| false);
    let flag = use_mut_ref(|| RevealFlag::new(mode));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let handle = match observe(node, flag, visible.clone()) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        warn!("reveal observer unavailable, showing element: {}", e);
                        visible.set(true);
                        None
                    }
                };
                move || {
                    if let Some(handle) = handle {
                        handle.observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrancePhase {
    #[default]
    Pending,
    Running,
    Settled,
}

impl EntrancePhase {
    pub fn has_started(self) -> bool {
        self != EntrancePhase::Pending
    }
}

/// Drives a mount-time entrance: `Pending` for `delay_ms`, then `Running`
/// for `duration_ms`, then `Settled` for good.
#[hook]
pub fn use_entrance(delay_ms: u32, duration_ms: u32) -> EntrancePhase {
    let phase = use_state_eq(EntrancePhase::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let start = {
                    let phase = phase.clone();
                    Timeout::new(delay_ms, move || phase.set(EntrancePhase::Running))
                };
                let settle = Timeout::new(delay_ms.saturating_add(duration_ms), move || {
                    debug!("entrance settled");
                    phase.set(EntrancePhase::Settled);
                });
                move || {
                    drop(start);
                    drop(settle);
                }
            },
            (),
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_mode_latches() {
        let mut flag = RevealFlag::new(RevealMode::Once);
        assert!(!flag.observe(false));
        assert!(flag.observe(true));
        assert!(flag.is_settled());
        assert!(!flag.observe(false));
        assert!(flag.is_visible());
    }

    #[test]
    fn repeat_mode_follows_viewport() {
        let mut flag = RevealFlag::new(RevealMode::Repeat);
        assert!(flag.observe(true));
        assert!(flag.observe(false));
        assert!(!flag.is_visible());
        assert!(!flag.is_settled());
    }

    #[test]
    fn entrance_starts_pending() {
        assert!(!EntrancePhase::default().has_started());
        assert!(EntrancePhase::Running.has_started());
        assert!(EntrancePhase::Settled.has_started());
    }
}
