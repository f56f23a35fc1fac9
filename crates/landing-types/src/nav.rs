//! Active navigation rules
//!
//! Two pure pieces: which nav route the current location resolves to, and
//! which links an activation key marks active. The DOM layer applies the
//! result to `.nav-menu a`.
//!
//! Matching deliberately does not stop at the first hit. A key like
//! `rules.html` activates every link that contains it, so overlapping hrefs
//! can leave several links active at once.

use crate::config::NavigationConfig;

/// An activation key, classified by whether it looks like a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget<'a> {
    /// Section id such as `features`
    Section(&'a str),
    /// Page name such as `rules.html`
    Page(&'a str),
    /// Empty key; only an exact (empty) href matches
    Empty,
}

impl<'a> NavTarget<'a> {
    pub fn parse(key: &'a str) -> Self {
        if key.is_empty() {
            Self::Empty
        } else if key.contains('.') {
            Self::Page(key)
        } else {
            Self::Section(key)
        }
    }
}

/// Whether a link with `href` should be active for `key`.
///
/// A link without an `href` attribute never matches.
pub fn link_matches(href: Option<&str>, key: &str) -> bool {
    let Some(href) = href else {
        return false;
    };

    if href == key {
        return true;
    }

    match NavTarget::parse(key) {
        NavTarget::Section(id) => {
            let fragment = format!("#{}", id);
            href == fragment || href.ends_with(&fragment)
        }
        NavTarget::Page(page) => href.contains(page),
        NavTarget::Empty => false,
    }
}

/// Indices of the links that end up active. Every link is evaluated.
pub fn active_links<'h, I>(hrefs: I, key: &str) -> Vec<usize>
where
    I: IntoIterator<Item = Option<&'h str>>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| link_matches(*href, key))
        .map(|(i, _)| i)
        .collect()
}

/// Selector for a same-page anchor's target. A bare `#` names nothing.
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.starts_with('#') && h.len() > 1)
}

// =============================================================================
// ROUTE RESOLUTION
// =============================================================================

/// What `updateActiveNav` does for the current location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRoute {
    /// A page with its own fixed nav entry
    StaticPage(String),
    Index,
    /// Sectioned page: watch sections, and honor `hash` if it names one
    Sections { hash: Option<String> },
    /// Nothing to highlight
    Unrouted,
}

/// Last path segment, or the index page when the path ends in `/`.
pub fn page_name<'a>(pathname: &'a str, index_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => index_page,
    }
}

/// Location hash with its first `#` removed.
pub fn strip_hash(hash: &str) -> String {
    hash.replacen('#', "", 1)
}

/// Resolve the nav route for `pathname` + `hash`. `has_sections` reports
/// whether the document holds any watched section.
pub fn resolve_route(
    config: &NavigationConfig,
    pathname: &str,
    hash: &str,
    has_sections: bool,
) -> NavRoute {
    let page = page_name(pathname, &config.index_page);

    if let Some(static_page) = config
        .static_pages
        .iter()
        .find(|p| page == p.as_str() || page.contains(p.as_str()))
    {
        return NavRoute::StaticPage(static_page.clone());
    }

    if page == config.index_page || page.is_empty() {
        return NavRoute::Index;
    }

    if page == config.home_page || has_sections {
        let hash = strip_hash(hash);
        return NavRoute::Sections {
            hash: (!hash.is_empty()).then_some(hash),
        };
    }

    NavRoute::Unrouted
}
