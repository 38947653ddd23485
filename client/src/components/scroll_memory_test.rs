use scroll_memory::{LinkDecision, Location, classify_link};

use super::*;

fn plain_click() -> ClickModifiers {
    ClickModifiers::default()
}

// =============================================================================
// Handle
// =============================================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn handle_is_inert_without_browser() {
    let handle = ScrollMemoryHandle {};
    handle.before_navigate();
    let copy = handle;
    copy.before_navigate();
}

#[test]
fn default_config_targets_research_sections() {
    let config = ScrollConfig::default();
    assert_eq!(config.listing_prefix, "/research");
    assert_eq!(section_selector(&config), "[data-scroll-section]");
}

// =============================================================================
// Click translation
// =============================================================================

#[test]
fn plain_primary_click_is_not_modified() {
    assert!(!plain_click().is_modified());
}

#[test]
fn any_modifier_or_other_button_marks_click_modified() {
    let variants = [
        ClickModifiers { button: 1, ..plain_click() },
        ClickModifiers { button: 2, ..plain_click() },
        ClickModifiers { ctrl: true, ..plain_click() },
        ClickModifiers { meta: true, ..plain_click() },
        ClickModifiers { shift: true, ..plain_click() },
        ClickModifiers { alt: true, ..plain_click() },
    ];
    for modifiers in variants {
        assert!(modifiers.is_modified(), "{modifiers:?}");
    }
}

#[test]
fn link_click_copies_anchor_attributes() {
    let click = link_click(
        Some("/research/zk-rollups".to_owned()),
        Some("_self".to_owned()),
        false,
        plain_click(),
        "https://meridian.example".to_owned(),
    );
    assert_eq!(click.href, "/research/zk-rollups");
    assert_eq!(click.target.as_deref(), Some("_self"));
    assert!(!click.download && !click.modified);
    assert_eq!(click.origin, "https://meridian.example");
}

#[test]
fn missing_href_becomes_fragment() {
    let click = link_click(None, None, false, plain_click(), String::new());
    assert_eq!(classify_link(&Location::new("/research", ""), &click), LinkDecision::Fragment);
}

#[test]
fn ctrl_click_on_internal_link_does_not_capture() {
    let here = Location::new("/research", "");
    let plain = link_click(Some("/research/x".to_owned()), None, false, plain_click(), String::new());
    let ctrl = link_click(
        Some("/research/x".to_owned()),
        None,
        false,
        ClickModifiers { ctrl: true, ..plain_click() },
        String::new(),
    );
    assert_eq!(classify_link(&here, &plain), LinkDecision::Capture);
    assert_eq!(classify_link(&here, &ctrl), LinkDecision::NewTab);
}
