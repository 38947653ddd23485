//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads static content or route params and delegates rendering
//! details to `components`. Only `contact` talks to the server.

pub mod contact;
pub mod home;
pub mod legal;
pub mod news;
pub mod not_found;
pub mod research;
pub mod team;
