//! Page visibility lifecycle
//!
//! `pagehide` fires both when the page is discarded and when it is frozen
//! into the back/forward cache. A frozen page can come back through
//! `pageshow`, so only a real unload gives up the key listeners.

/// What a `pagehide` means for the running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHide {
    /// Kept in the back/forward cache and may be shown again
    Suspend,
    /// Discarded for good
    Unload,
}

impl PageHide {
    /// Classify by `PageTransitionEvent.persisted`
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Suspend
        } else {
            PageHide::Unload
        }
    }

    /// Whether window listeners should be removed
    pub fn releases_listeners(self) -> bool {
        self == PageHide::Unload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_page_keeps_listeners() {
        let hide = PageHide::from_persisted(true);
        assert_eq!(hide, PageHide::Suspend);
        assert!(!hide.releases_listeners());
    }

    #[test]
    fn test_unload_releases_listeners() {
        let hide = PageHide::from_persisted(false);
        assert_eq!(hide, PageHide::Unload);
        assert!(hide.releases_listeners());
    }
}
