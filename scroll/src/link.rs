//! Link click classification.
//!
//! A click only counts as "leaving this page" when the anchor points at an
//! internal, different path that opens in the same tab. Fragment jumps,
//! new-tab clicks and external links keep the current record untouched.

use crate::key::Location;

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

/// Facts about a clicked anchor, gathered by the host from the DOM event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkClick {
    /// Raw `href` attribute value.
    pub href: String,
    /// `target` attribute, if present.
    pub target: Option<String>,
    /// Anchor carries a `download` attribute.
    pub download: bool,
    /// Ctrl/Meta/Shift/middle-button click.
    pub modified: bool,
    /// Document origin (`https://example.com`), used to recognise absolute
    /// internal URLs. Empty when unknown.
    pub origin: String,
}

impl LinkClick {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), ..Self::default() }
    }
}

/// What a link click means for scroll capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkDecision {
    /// Internal navigation to another path: capture first.
    Capture,
    /// `#section` or empty href.
    Fragment,
    /// Opens elsewhere (new tab/window, download, modifier click).
    NewTab,
    /// Other origin or non-http scheme.
    External,
    /// Resolves to the current path.
    SamePath,
}

/// Decide whether a click on `click` should capture the scroll offset at `current`.
#[must_use]
pub fn classify_link(current: &Location, click: &LinkClick) -> LinkDecision {
    let href = click.href.trim();
    if href.is_empty() || href.starts_with('#') {
        return LinkDecision::Fragment;
    }
    if click.modified || click.download || opens_elsewhere(click.target.as_deref()) {
        return LinkDecision::NewTab;
    }
    let Some(reference) = strip_origin(href, &click.origin) else {
        return LinkDecision::External;
    };
    let path = resolve_path(&current.path, path_part(reference));
    if path == current.path {
        LinkDecision::SamePath
    } else {
        LinkDecision::Capture
    }
}

fn opens_elsewhere(target: Option<&str>) -> bool {
    match target.map(str::trim) {
        None | Some("" | "_self") => false,
        Some(_) => true,
    }
}

/// Strip a same-origin prefix from `href`; `None` for anything external.
fn strip_origin<'a>(href: &'a str, origin: &str) -> Option<&'a str> {
    if href.starts_with("//") {
        return None;
    }
    if !has_scheme(href) {
        return Some(href);
    }
    let origin = origin.trim_end_matches('/');
    if origin.is_empty() {
        return None;
    }
    let rest = href.strip_prefix(origin)?;
    if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
        Some(rest)
    } else {
        None
    }
}

/// `scheme:` where the scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Reference with any query or fragment removed.
fn path_part(reference: &str) -> &str {
    let end = reference.find(['?', '#']).unwrap_or(reference.len());
    &reference[..end]
}

/// Resolve `reference` against `current`, removing dot segments.
fn resolve_path(current: &str, reference: &str) -> String {
    if reference.is_empty() {
        return current.to_owned();
    }
    let joined = if reference.starts_with('/') {
        reference.to_owned()
    } else {
        let dir = match current.rfind('/') {
            Some(idx) => &current[..=idx],
            None => "/",
        };
        format!("{dir}{reference}")
    };

    let trailing_slash = joined.ends_with('/') || joined.ends_with("/.") || joined.ends_with("/..");
    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let mut path = format!("/{}", segments.join("/"));
    if trailing_slash && path.len() > 1 {
        path.push('/');
    }
    path
}
