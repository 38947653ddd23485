//! Window-backed viewport, location and clock for the scroll host.
//!
//! SSR builds get inert stand-ins: offset 0, root location, time 0.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use scroll_memory::{Location, Viewport};

/// The browser window as a [`Viewport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_offset(&self) -> u32 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .map_or(0, scroll_memory::store::offset_from_pixels)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }

    fn jump_to(&self, offset: u32) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(f64::from(offset));
            options.set_behavior(web_sys::ScrollBehavior::Instant);
            window.scroll_to_with_scroll_to_options(&options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = offset;
        }
    }
}

/// Path and search of the current document.
pub fn current_location() -> Location {
    #[cfg(feature = "hydrate")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Location::new("/", "");
        };
        Location::new(location.pathname().unwrap_or_default(), location.search().unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Location::new("/", "")
    }
}

/// Origin of the current document (`scheme://host[:port]`).
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Wall-clock milliseconds used to schedule restore and expiry tasks.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        millis_from_f64(js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis_from_f64(ms: f64) -> u64 {
    if ms.is_finite() && ms > 0.0 { ms as u64 } else { 0 }
}
