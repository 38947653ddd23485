//! Language preference.
//!
//! Reads the visitor's choice from `localStorage`, falling back to the
//! browser language and then English. `apply` mirrors the choice into the
//! `lang` attribute of `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR always renders
//! English and the client switches after hydration.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use super::storage::{self, Area};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "meridian_lang";

/// Languages the site copy is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    /// Value for the `lang` attribute and for storage.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
        }
    }

    /// Parse a language tag such as `de`, `de-AT` or `EN_us`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }
}

/// Read the stored preference, then the browser language, then English.
pub fn read_preference() -> Language {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(Some(stored)) = storage::get_raw(Area::Local, STORAGE_KEY) {
            if let Some(lang) = Language::from_tag(&stored) {
                return lang;
            }
        }
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|tag| Language::from_tag(&tag))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

/// Set the `lang` attribute on the `<html>` element.
pub fn apply(lang: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("lang", lang.code()) {
                log::debug!("could not set lang attribute: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}

/// Apply `lang` and persist it. Returns the language for chaining into a signal.
pub fn set_preference(lang: Language) -> Language {
    apply(lang);
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = storage::set_raw(Area::Local, STORAGE_KEY, lang.code()) {
            log::debug!("language preference not persisted: {e}");
        }
    }
    lang
}
