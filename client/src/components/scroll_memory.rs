//! Always-mounted scroll position memory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the routed content once, inside the router. Browser events become
//! lifecycle signals on a `LifecycleBus`; the `scroll-memory` engine is
//! attached to that bus and reports an outcome per signal, which is logged at
//! debug level. Deferred restores and expiries run on `gloo-timers`
//! timeouts armed from the engine's task queue.
//!
//! Bridged events:
//! - hydration mount: `Mount`
//! - router location change after the first render: `RouteChangeComplete`
//! - `popstate`: `PopState`
//! - `beforeunload`: `BeforeUnload`
//! - capture-phase `click` on an anchor: `LinkClick` (built by [`link_click`])
//! - capture-phase `click` inside `[data-scroll-section]`: `SectionClick`
//! - [`ScrollMemoryHandle::before_navigate`]: `RouteChangeStart`
//! - component cleanup: `Unmount`
//!
//! Clicks are observed in the capture phase on `window` so the offset is
//! read before the router's own click handler pushes the new URL.

#[cfg(test)]
#[path = "scroll_memory_test.rs"]
mod scroll_memory_test;

use leptos::prelude::*;
use scroll_memory::{LinkClick, ScrollConfig};

/// Mouse state of a click as read from the DOM event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickModifiers {
    /// Anything but a plain primary-button click.
    #[must_use]
    pub fn is_modified(self) -> bool {
        self.button != 0 || self.ctrl || self.meta || self.shift || self.alt
    }
}

/// Build the engine's view of a clicked anchor.
#[must_use]
pub fn link_click(
    href: Option<String>,
    target: Option<String>,
    download: bool,
    modifiers: ClickModifiers,
    origin: String,
) -> LinkClick {
    LinkClick { href: href.unwrap_or_default(), target, download, modified: modifiers.is_modified(), origin }
}

/// CSS selector for content sections that capture on click.
#[must_use]
pub fn section_selector(config: &ScrollConfig) -> String {
    format!("[{}]", config.section_marker)
}

/// Context handle for code that navigates programmatically.
#[derive(Clone, Copy)]
pub struct ScrollMemoryHandle {
    #[cfg(feature = "hydrate")]
    host: StoredValue<Option<host::ScrollHost>, LocalStorage>,
}

impl ScrollMemoryHandle {
    /// Capture the current offset before calling `navigate`.
    pub fn before_navigate(&self) {
        #[cfg(feature = "hydrate")]
        self.host.with_value(|host| {
            if let Some(host) = host {
                host.publish(scroll_memory::NavigationEvent::RouteChangeStart);
            }
        });
    }
}

/// Provides [`ScrollMemoryHandle`] to `children` and keeps scroll offsets
/// across navigations.
#[component]
pub fn ScrollMemory(#[prop(optional)] config: Option<ScrollConfig>, children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let handle = {
        let host = StoredValue::new_local(None::<host::ScrollHost>);
        let config = config.unwrap_or_default();
        Effect::new(move || {
            if host.with_value(Option::is_some) {
                return;
            }
            let installed = host::ScrollHost::install(config.clone());
            if installed.is_none() {
                log::debug!("scroll memory disabled: no window");
            }
            host.set_value(installed);
        });

        let location = leptos_router::hooks::use_location();
        Effect::new(move |previous: Option<String>| {
            let current = format!("{}{}", location.pathname.get(), location.search.get());
            if previous.is_some_and(|p| p != current) {
                host.with_value(|h| {
                    if let Some(h) = h {
                        h.publish(scroll_memory::NavigationEvent::RouteChangeComplete);
                    }
                });
            }
            current
        });

        on_cleanup(move || {
            host.update_value(|slot| {
                if let Some(h) = slot.take() {
                    h.uninstall();
                }
            });
        });
        ScrollMemoryHandle { host }
    };
    #[cfg(not(feature = "hydrate"))]
    let handle = {
        let _ = config;
        ScrollMemoryHandle {}
    };

    provide_context(handle);
    children()
}

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use scroll_memory::{
        LifecycleBus, LifecycleSignal, NavigationEvent, Outcome, ScrollConfig, ScrollRestoration, SubscriptionId,
        attach,
    };

    use super::{ClickModifiers, link_click};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::util::storage::BrowserStore;
    use crate::util::viewport::{WindowViewport, current_location, current_origin, now_ms};

    type Engine = ScrollRestoration<BrowserStore, WindowViewport>;
    type Bus = Rc<RefCell<LifecycleBus>>;

    /// Event listener removed from its target on drop.
    struct DomListener {
        target: web_sys::EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DomListener {
        fn capture(
            target: &web_sys::EventTarget,
            event: &'static str,
            handler: impl FnMut(web_sys::Event) + 'static,
        ) -> Option<Self> {
            let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
            if let Err(e) =
                target.add_event_listener_with_callback_and_bool(event, callback.as_ref().unchecked_ref(), true)
            {
                log::debug!("could not listen for {event}: {e:?}");
                return None;
            }
            Some(Self { target: target.clone(), event, callback })
        }
    }

    impl Drop for DomListener {
        fn drop(&mut self) {
            if let Err(e) = self.target.remove_event_listener_with_callback_and_bool(
                self.event,
                self.callback.as_ref().unchecked_ref(),
                true,
            ) {
                log::debug!("could not detach {} listener: {e:?}", self.event);
            }
        }
    }

    pub struct ScrollHost {
        bus: Bus,
        subscription: SubscriptionId,
        // Held for their Drop.
        _listeners: Vec<DomListener>,
    }

    impl ScrollHost {
        /// Attach the engine, register DOM listeners and emit `Mount`.
        pub fn install(config: ScrollConfig) -> Option<Self> {
            let window = web_sys::window()?;
            let section_selector = super::section_selector(&config);
            let engine: Rc<RefCell<Engine>> =
                Rc::new(RefCell::new(ScrollRestoration::new(BrowserStore::session(), WindowViewport, config)));
            let armed = Rc::new(Cell::new(None));
            let bus: Bus = Rc::new(RefCell::new(LifecycleBus::new()));

            let subscription = {
                let engine_for_timer = Rc::clone(&engine);
                attach(&engine, &mut bus.borrow_mut(), move |outcome| {
                    log_outcome(outcome);
                    arm_timer(&engine_for_timer, &armed);
                })
            };

            let target: &web_sys::EventTarget = window.as_ref();
            let mut listeners = Vec::with_capacity(3);
            let unload_bus = Rc::clone(&bus);
            listeners.extend(DomListener::capture(target, "beforeunload", move |_| {
                emit(&unload_bus, NavigationEvent::BeforeUnload);
            }));
            let pop_bus = Rc::clone(&bus);
            listeners.extend(DomListener::capture(target, "popstate", move |_| {
                emit(&pop_bus, NavigationEvent::PopState);
            }));
            let click_bus = Rc::clone(&bus);
            listeners.extend(DomListener::capture(target, "click", move |event| {
                for translated in click_events(&event, &section_selector) {
                    emit(&click_bus, translated);
                }
            }));

            emit(&bus, NavigationEvent::Mount);
            Some(Self { bus, subscription, _listeners: listeners })
        }

        pub fn publish(&self, event: NavigationEvent) {
            emit(&self.bus, event);
        }

        /// Emit `Unmount`, unsubscribe the engine, then drop the listeners.
        pub fn uninstall(self) {
            emit(&self.bus, NavigationEvent::Unmount);
            if let Ok(mut bus) = self.bus.try_borrow_mut() {
                bus.unsubscribe(self.subscription);
            }
        }
    }

    fn emit(bus: &Bus, event: NavigationEvent) {
        let signal = LifecycleSignal::new(event, current_location(), now_ms());
        match bus.try_borrow_mut() {
            Ok(mut bus) => bus.emit(&signal),
            Err(_) => log::debug!("scroll memory dropped re-entrant {:?}", signal.event),
        }
    }

    /// Translate a click into link and/or section events.
    fn click_events(event: &web_sys::Event, section_selector: &str) -> Vec<NavigationEvent> {
        let Some(element) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return Vec::new();
        };
        let mut events = Vec::new();
        if let Ok(Some(anchor)) = element.closest("a[href]") {
            let modifiers = event
                .dyn_ref::<web_sys::MouseEvent>()
                .map(|m| ClickModifiers {
                    button: m.button(),
                    ctrl: m.ctrl_key(),
                    meta: m.meta_key(),
                    shift: m.shift_key(),
                    alt: m.alt_key(),
                })
                .unwrap_or_default();
            events.push(NavigationEvent::LinkClick(link_click(
                anchor.get_attribute("href"),
                anchor.get_attribute("target"),
                anchor.has_attribute("download"),
                modifiers,
                current_origin(),
            )));
        }
        if let Ok(Some(_)) = element.closest(section_selector) {
            events.push(NavigationEvent::SectionClick);
        }
        events
    }

    /// Arm a timeout for the engine's next due task unless one is already
    /// armed for an earlier or equal time. Timeouts are never cancelled; a
    /// stray tick finds nothing due.
    fn arm_timer(engine: &Rc<RefCell<Engine>>, armed: &Rc<Cell<Option<u64>>>) {
        let Some(due) = engine.borrow().next_due() else {
            return;
        };
        if armed.get().is_some_and(|at| at <= due) {
            return;
        }
        armed.set(Some(due));
        let delay = u32::try_from(due.saturating_sub(now_ms())).unwrap_or(u32::MAX);
        let engine = Rc::clone(engine);
        let armed = Rc::clone(armed);
        Timeout::new(delay, move || {
            armed.set(None);
            let outcomes = engine.borrow_mut().run_due(now_ms());
            outcomes.iter().for_each(log_outcome);
            arm_timer(&engine, &armed);
        })
        .forget();
    }

    fn log_outcome(outcome: &Outcome) {
        match outcome {
            Outcome::StoreFailed { op, key, error } => {
                log::debug!("scroll memory {op:?} failed for {key}: {error}");
            }
            other => log::debug!("scroll memory: {other:?}"),
        }
    }
}
