//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable without a browser.

pub mod i18n;
pub mod language;
pub mod markdown;
pub mod question_gen;
pub mod storage;
pub mod viewport;
