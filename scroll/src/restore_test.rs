use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::store::MemoryStore;

// =============================================================
// Fixtures
// =============================================================

/// Viewport over a document of fixed height; jumps clamp like a browser.
#[derive(Clone)]
struct FakeViewport {
    offset: Rc<Cell<u32>>,
    max_offset: u32,
    jumps: Rc<RefCell<Vec<u32>>>,
}

impl FakeViewport {
    fn new(max_offset: u32) -> Self {
        Self { offset: Rc::new(Cell::new(0)), max_offset, jumps: Rc::new(RefCell::new(Vec::new())) }
    }

    fn scroll_by_user(&self, offset: u32) {
        self.offset.set(offset.min(self.max_offset));
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> u32 {
        self.offset.get()
    }

    fn jump_to(&self, offset: u32) {
        self.jumps.borrow_mut().push(offset);
        self.offset.set(offset.min(self.max_offset));
    }
}

/// Store that rejects every operation.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

fn engine(config: ScrollConfig) -> (ScrollRestoration<MemoryStore, FakeViewport>, MemoryStore, FakeViewport) {
    let store = MemoryStore::new();
    let viewport = FakeViewport::new(10_000);
    (ScrollRestoration::new(store.clone(), viewport.clone(), config), store, viewport)
}

fn at(path: &str) -> Location {
    Location::new(path, "")
}

fn signal(event: NavigationEvent, location: Location, at_ms: u64) -> LifecycleSignal {
    LifecycleSignal::new(event, location, at_ms)
}

// =============================================================
// Config
// =============================================================

#[test]
fn default_config_uses_named_delays() {
    let cfg = ScrollConfig::default();
    assert_eq!(cfg.restore_ready_delay_ms, DEFAULT_RESTORE_READY_DELAY_MS);
    assert_eq!(cfg.record_expiry_ms, DEFAULT_RECORD_EXPIRY_MS);
    assert_eq!(cfg.storage_prefix, "scroll_pos:");
    assert_eq!(cfg.listing_prefix, "/research");
    assert_eq!(cfg.section_marker, "data-scroll-section");
}

#[test]
fn immediate_config_zeroes_delays_only() {
    let cfg = ScrollConfig::immediate();
    assert_eq!(cfg.restore_ready_delay_ms, 0);
    assert_eq!(cfg.record_expiry_ms, 0);
    assert_eq!(cfg.listing_prefix, DEFAULT_LISTING_PREFIX);
}

#[test]
fn config_deserializes_camel_case_with_defaults() {
    let cfg: ScrollConfig = serde_json::from_str(r#"{"restoreReadyDelayMs": 250}"#).unwrap();
    assert_eq!(cfg.restore_ready_delay_ms, 250);
    assert_eq!(cfg.record_expiry_ms, DEFAULT_RECORD_EXPIRY_MS);
}

// =============================================================
// Capture
// =============================================================

#[test]
fn capture_writes_current_offset() {
    let (mut engine, store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(420);
    let outcome = engine.capture(&Location::new("/news", "page=2"));
    assert_eq!(
        outcome,
        Outcome::Captured(ScrollRecord { key: NavigationKey::new("/news", "page=2"), offset: 420 })
    );
    assert_eq!(store.get("scroll_pos:/news?page=2").unwrap(), Some("420".to_owned()));
}

#[test]
fn link_click_to_other_path_captures() {
    let (mut engine, store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(300);
    let outcome = engine.handle(&signal(
        NavigationEvent::LinkClick(LinkClick::new("/research/zk-rollups")),
        at("/research"),
        0,
    ));
    assert!(matches!(outcome, Outcome::Captured(ref r) if r.offset == 300));
    assert_eq!(store.len(), 1);
}

#[test]
fn fragment_link_click_does_not_capture() {
    let (mut engine, store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(300);
    let outcome = engine.handle(&signal(NavigationEvent::LinkClick(LinkClick::new("#team")), at("/"), 0));
    assert_eq!(outcome, Outcome::LinkIgnored(LinkDecision::Fragment));
    assert!(store.is_empty());
}

#[test]
fn before_unload_and_route_change_start_capture() {
    let (mut engine, store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(11);
    assert!(matches!(
        engine.handle(&signal(NavigationEvent::BeforeUnload, at("/a"), 0)),
        Outcome::Captured(_)
    ));
    assert!(matches!(
        engine.handle(&signal(NavigationEvent::RouteChangeStart, at("/b"), 0)),
        Outcome::Captured(_)
    ));
    assert_eq!(store.len(), 2);
}

#[test]
fn section_click_captures_only_on_listing_routes() {
    let (mut engine, store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(90);
    assert_eq!(engine.handle(&signal(NavigationEvent::SectionClick, at("/news"), 0)), Outcome::SectionIgnored);
    assert!(store.is_empty());
    assert!(matches!(
        engine.handle(&signal(NavigationEvent::SectionClick, at("/research"), 0)),
        Outcome::Captured(_)
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn capture_with_unavailable_storage_reports_failure() {
    let viewport = FakeViewport::new(1_000);
    let mut engine = ScrollRestoration::new(BrokenStore, viewport, ScrollConfig::immediate());
    let outcome = engine.capture(&at("/"));
    assert_eq!(
        outcome,
        Outcome::StoreFailed { op: StoreOp::Save, key: NavigationKey::new("/", ""), error: StoreError::Unavailable }
    );
}

// =============================================================
// Restore
// =============================================================

#[test]
fn round_trip_restores_captured_offset() {
    let (mut engine, _store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(777);
    engine.capture(&at("/research"));
    viewport.scroll_by_user(0);

    engine.schedule_restore(&at("/research"), 0);
    let outcomes = engine.run_due(0);

    assert_eq!(viewport.scroll_offset(), 777);
    assert!(matches!(outcomes[0], Outcome::Restored(ref r) if r.offset == 777));
}

#[test]
fn last_capture_wins() {
    let (mut engine, _store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(100);
    engine.capture(&at("/news"));
    viewport.scroll_by_user(650);
    engine.capture(&at("/news"));
    viewport.scroll_by_user(0);

    engine.schedule_restore(&at("/news"), 0);
    engine.run_due(0);

    assert_eq!(viewport.scroll_offset(), 650);
}

#[test]
fn restore_without_record_is_noop() {
    let (mut engine, _store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(40);
    engine.schedule_restore(&at("/team"), 0);
    let outcomes = engine.run_due(0);

    assert_eq!(outcomes, vec![Outcome::NothingToRestore(NavigationKey::new("/team", ""))]);
    assert_eq!(viewport.scroll_offset(), 40);
    assert!(viewport.jumps.borrow().is_empty());
}

#[test]
fn restore_with_unparseable_record_is_noop() {
    let (mut engine, store, viewport) = engine(ScrollConfig::immediate());
    store.set("scroll_pos:/team", "garbage").unwrap();
    engine.schedule_restore(&at("/team"), 0);
    assert_eq!(engine.run_due(0), vec![Outcome::NothingToRestore(NavigationKey::new("/team", ""))]);
    assert!(viewport.jumps.borrow().is_empty());
}

#[test]
fn restore_waits_for_ready_delay() {
    let (mut engine, _store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(500);
    engine.capture(&at("/research"));
    viewport.scroll_by_user(0);

    let outcome = engine.handle(&signal(NavigationEvent::PopState, at("/research"), 1_000));
    assert_eq!(outcome, Outcome::RestoreScheduled { key: NavigationKey::new("/research", ""), due_ms: 1_100 });
    assert_eq!(engine.next_due(), Some(1_100));

    assert!(engine.run_due(1_099).is_empty());
    assert_eq!(viewport.scroll_offset(), 0);

    engine.run_due(1_100);
    assert_eq!(viewport.scroll_offset(), 500);
}

#[test]
fn record_expires_after_grace_period() {
    let (mut engine, store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(500);
    engine.capture(&at("/research"));

    engine.schedule_restore(&at("/research"), 0);
    engine.run_due(100);
    assert_eq!(store.len(), 1, "record survives inside the grace window");
    assert_eq!(engine.next_due(), Some(1_100));

    let outcomes = engine.run_due(1_100);
    assert_eq!(outcomes, vec![Outcome::Expired(NavigationKey::new("/research", ""))]);
    assert!(store.is_empty());
}

#[test]
fn second_restore_after_expiry_is_noop() {
    let (mut engine, _store, viewport) = engine(ScrollConfig::immediate());
    viewport.scroll_by_user(320);
    engine.capture(&at("/news"));

    engine.schedule_restore(&at("/news"), 0);
    engine.run_due(0);
    viewport.scroll_by_user(0);

    engine.schedule_restore(&at("/news"), 5);
    let outcomes = engine.run_due(5);
    assert_eq!(outcomes, vec![Outcome::NothingToRestore(NavigationKey::new("/news", ""))]);
    assert_eq!(viewport.scroll_offset(), 0);
}

#[test]
fn overlapping_triggers_collapse_and_tolerate_duplicates() {
    let (mut engine, _store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(900);
    engine.capture(&at("/research"));
    viewport.scroll_by_user(0);

    engine.handle(&signal(NavigationEvent::Mount, at("/research"), 0));
    let again = engine.handle(&signal(NavigationEvent::PopState, at("/research"), 40));
    assert_eq!(again, Outcome::RestoreScheduled { key: NavigationKey::new("/research", ""), due_ms: 100 });
    assert_eq!(engine.pending_len(), 1);

    engine.run_due(100);
    // A late duplicate inside the grace window re-applies the same offset.
    engine.handle(&signal(NavigationEvent::PopState, at("/research"), 300));
    engine.run_due(400);

    assert_eq!(*viewport.jumps.borrow(), vec![900, 900]);
    assert_eq!(engine.pending_len(), 1, "only one expiry is queued");
}

#[test]
fn capture_cancels_pending_expiry_for_same_key() {
    let (mut engine, store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(200);
    engine.capture(&at("/news"));
    engine.schedule_restore(&at("/news"), 0);
    engine.run_due(100);

    viewport.scroll_by_user(480);
    engine.capture(&at("/news"));
    assert!(engine.run_due(5_000).is_empty());
    assert_eq!(store.get("scroll_pos:/news").unwrap(), Some("480".to_owned()));
}

#[test]
fn restore_clamps_to_short_content() {
    let store = MemoryStore::new();
    store.set("scroll_pos:/news", "5000").unwrap();
    let viewport = FakeViewport::new(1_200);
    let mut engine = ScrollRestoration::new(store, viewport.clone(), ScrollConfig::immediate());

    engine.schedule_restore(&at("/news"), 0);
    engine.run_due(0);

    assert_eq!(*viewport.jumps.borrow(), vec![5000]);
    assert_eq!(viewport.scroll_offset(), 1_200);
}

#[test]
fn unmount_cancels_pending_work() {
    let (mut engine, _store, _viewport) = engine(ScrollConfig::default());
    engine.handle(&signal(NavigationEvent::Mount, at("/"), 0));
    engine.handle(&signal(NavigationEvent::PopState, at("/news"), 0));
    assert_eq!(
        engine.handle(&signal(NavigationEvent::Unmount, at("/"), 0)),
        Outcome::Cancelled { tasks: 1, expired: 0 }
    );
    assert_eq!(engine.next_due(), None);
}

#[test]
fn unmount_removes_applied_records_still_in_grace() {
    let (mut engine, store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(640);
    engine.capture(&at("/research"));
    engine.schedule_restore(&at("/research"), 0);
    engine.run_due(100);
    assert_eq!(store.len(), 1);

    let outcome = engine.handle(&signal(NavigationEvent::Unmount, at("/research"), 200));
    assert_eq!(outcome, Outcome::Cancelled { tasks: 1, expired: 1 });
    assert!(store.is_empty());
    assert_eq!(engine.next_due(), None);
}

#[test]
fn unmount_keeps_records_never_applied() {
    let (mut engine, store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(90);
    engine.capture(&at("/news"));
    engine.schedule_restore(&at("/news"), 0);

    engine.handle(&signal(NavigationEvent::Unmount, at("/news"), 10));
    assert_eq!(store.get("scroll_pos:/news").unwrap(), Some("90".to_owned()));
}

#[test]
fn restore_for_previous_page_is_dropped_on_new_route() {
    let (mut engine, store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(300);
    engine.capture(&at("/research"));
    viewport.scroll_by_user(0);

    engine.handle(&signal(NavigationEvent::PopState, at("/research"), 0));
    engine.handle(&signal(NavigationEvent::RouteChangeComplete, at("/team"), 20));
    let outcomes = engine.run_due(200);

    assert_eq!(outcomes, vec![Outcome::NothingToRestore(NavigationKey::new("/team", ""))]);
    assert!(viewport.jumps.borrow().is_empty());
    assert_eq!(store.get("scroll_pos:/research").unwrap(), Some("300".to_owned()));
}

#[test]
fn leaving_before_restore_runs_keeps_fresh_capture() {
    let (mut engine, store, viewport) = engine(ScrollConfig::default());
    viewport.scroll_by_user(300);
    engine.capture(&at("/research"));
    viewport.scroll_by_user(0);

    // Back to the listing, then away again before the deferred restore fires.
    engine.handle(&signal(NavigationEvent::PopState, at("/research"), 0));
    viewport.scroll_by_user(500);
    engine.handle(&signal(
        NavigationEvent::LinkClick(LinkClick::new("/research/x")),
        at("/research"),
        50,
    ));
    viewport.scroll_by_user(0);
    engine.handle(&signal(NavigationEvent::RouteChangeComplete, at("/research/x"), 60));

    let on_detail = engine.run_due(160);
    assert_eq!(on_detail, vec![Outcome::NothingToRestore(NavigationKey::new("/research/x", ""))]);
    assert_eq!(viewport.scroll_offset(), 0, "detail page keeps its natural position");
    assert!(engine.run_due(2_000).is_empty());
    assert_eq!(store.get("scroll_pos:/research").unwrap(), Some("500".to_owned()));

    engine.handle(&signal(NavigationEvent::PopState, at("/research"), 3_000));
    let back = engine.run_due(3_100);
    assert!(matches!(back.as_slice(), [Outcome::Restored(r)] if r.offset == 500));
    assert_eq!(viewport.scroll_offset(), 500);
}

#[test]
fn restore_with_unavailable_storage_reports_failure() {
    let mut engine = ScrollRestoration::new(BrokenStore, FakeViewport::new(100), ScrollConfig::immediate());
    engine.schedule_restore(&at("/"), 0);
    assert_eq!(
        engine.run_due(0),
        vec![Outcome::StoreFailed { op: StoreOp::Load, key: NavigationKey::new("/", ""), error: StoreError::Unavailable }]
    );
}

// =============================================================
// Bus wiring
// =============================================================

#[test]
fn listing_to_detail_and_back_returns_to_842() {
    let (engine, store, viewport) = engine(ScrollConfig::default());
    let engine = Rc::new(RefCell::new(engine));
    let mut bus = LifecycleBus::new();
    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reported);
    let id = attach(&engine, &mut bus, move |outcome| sink.borrow_mut().push(outcome.clone()));

    // Land on the listing and scroll.
    bus.emit(&signal(NavigationEvent::Mount, at("/research"), 0));
    engine.borrow_mut().run_due(100);
    viewport.scroll_by_user(842);

    // Open an article.
    bus.emit(&signal(
        NavigationEvent::LinkClick(LinkClick::new("/research/zk-rollups")),
        at("/research"),
        2_000,
    ));
    viewport.scroll_by_user(0);
    bus.emit(&signal(NavigationEvent::RouteChangeComplete, at("/research/zk-rollups"), 2_010));
    engine.borrow_mut().run_due(2_110);

    // Back button.
    viewport.scroll_by_user(0);
    bus.emit(&signal(NavigationEvent::PopState, at("/research"), 5_000));
    let restored = engine.borrow_mut().run_due(5_100);

    assert_eq!(viewport.scroll_offset(), 842);
    assert_eq!(viewport.jumps.borrow().last().copied(), Some(842));
    assert!(matches!(restored.as_slice(), [Outcome::Restored(r)] if r.offset == 842));
    assert!(reported.borrow().iter().any(|o| matches!(o, Outcome::Captured(r) if r.offset == 842)));

    engine.borrow_mut().run_due(6_100);
    assert!(store.is_empty());

    assert!(bus.unsubscribe(id));
}
