//! In-page anchor click handling.

/// What to do with a click on an anchor whose href starts with `#`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Let the browser default run.
    Ignore,
    /// Prevent default and smooth-scroll to the fragment target.
    Intercept { fragment: String },
}

/// Bare `#` anchors (and hrefs without a fragment) are left alone; anything
/// else is intercepted. Whether the fragment resolves to an element is the
/// host's concern.
pub fn classify_anchor_click(href: &str) -> ClickAction {
    match href.strip_prefix('#') {
        None | Some("") => ClickAction::Ignore,
        Some(fragment) => ClickAction::Intercept {
            fragment: fragment.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(classify_anchor_click("#"), ClickAction::Ignore);
    }

    #[test]
    fn fragment_is_intercepted() {
        assert_eq!(
            classify_anchor_click("#projects"),
            ClickAction::Intercept {
                fragment: "projects".to_string()
            }
        );
    }

    #[test]
    fn non_fragment_href_is_ignored() {
        assert_eq!(classify_anchor_click("/about"), ClickAction::Ignore);
    }
}
