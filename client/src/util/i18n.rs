//! Interface copy in every supported language.
//!
//! Long-form content (articles, legal text) is English only and lives in
//! `content`; this table covers navigation, headings and form chrome.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use super::language::Language;

/// (key, English, German). An empty German entry falls back to English.
const STRINGS: &[(&str, &str, &str)] = &[
    ("nav.home", "Home", "Start"),
    ("nav.team", "Team", "Team"),
    ("nav.research", "Research", "Forschung"),
    ("nav.news", "News", "Neuigkeiten"),
    ("nav.contact", "Contact", "Kontakt"),
    ("nav.language", "Language", "Sprache"),
    ("hero.title", "Applied AI and blockchain, built to ship", "Angewandte KI und Blockchain, gebaut für den Betrieb"),
    (
        "hero.subtitle",
        "We design, audit and run production systems for teams that cannot afford a demo that stays a demo.",
        "Wir entwerfen, prüfen und betreiben Produktivsysteme für Teams, bei denen eine Demo keine Demo bleiben darf.",
    ),
    ("home.services", "What we do", "Was wir tun"),
    ("home.latest_research", "Latest research", "Aktuelle Forschung"),
    ("home.ask", "Ask us anything", "Fragen Sie uns"),
    ("chat.submit", "Ask", "Fragen"),
    ("team.title", "The people behind Meridian", "Die Menschen hinter Meridian"),
    ("research.title", "Research", "Forschung"),
    ("research.read_more", "Read article", "Artikel lesen"),
    ("research.back", "Back to research", "Zurück zur Forschung"),
    ("news.title", "News", "Neuigkeiten"),
    ("news.back", "Back to news", "Zurück zu den Neuigkeiten"),
    ("contact.title", "Talk to us", "Sprechen Sie mit uns"),
    (
        "contact.intro",
        "Tell us what you are building. We reply within two business days.",
        "Erzählen Sie uns, woran Sie arbeiten. Wir antworten innerhalb von zwei Werktagen.",
    ),
    ("contact.name", "Name", "Name"),
    ("contact.email", "Email", "E-Mail"),
    ("contact.subject", "Subject", "Betreff"),
    ("contact.message", "Message", "Nachricht"),
    ("contact.send", "Send message", "Nachricht senden"),
    ("contact.sending", "Sending...", "Wird gesendet..."),
    ("contact.success", "Thanks, your message is on its way.", "Danke, Ihre Nachricht ist unterwegs."),
    ("contact.failed", "Something went wrong. Please try again.", "Etwas ist schiefgelaufen. Bitte erneut versuchen."),
    ("legal.privacy", "Privacy policy", "Datenschutz"),
    ("legal.terms", "Terms of use", "Nutzungsbedingungen"),
    ("footer.rights", "All rights reserved.", ""),
    ("not_found.title", "Page not found", "Seite nicht gefunden"),
];

/// Look up `key` for `lang`. Unknown keys render as the key itself.
#[must_use]
pub fn t(lang: Language, key: &'static str) -> &'static str {
    let Some(&(_, en, de)) = STRINGS.iter().find(|(k, _, _)| *k == key) else {
        return key;
    };
    match lang {
        Language::En => en,
        Language::De if de.is_empty() => en,
        Language::De => de,
    }
}
