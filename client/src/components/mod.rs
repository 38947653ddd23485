//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components hold no routing logic of their own. `scroll_memory` is the one
//! stateful piece: it wraps the routed content and bridges browser events to
//! the `scroll-memory` engine.

pub mod article_card;
pub mod article_view;
pub mod chat_prompt;
pub mod scroll_memory;
pub mod site_footer;
pub mod site_nav;
