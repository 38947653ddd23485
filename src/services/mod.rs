//! Domain services used by route handlers.

pub mod contact;
