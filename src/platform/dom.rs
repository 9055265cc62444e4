//! DOM side of the page: toast area and HUD

use web_sys::Document;

use crate::notify::{Notification, Notifier};
use crate::sim::GamePhase;

/// Shows notifications in the `#toast` element
pub struct DomNotifier {
    document: Document,
}

impl DomNotifier {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Notifier for DomNotifier {
    fn notify(&mut self, notification: Notification) {
        let Some(toast) = self.document.get_element_by_id("toast") else {
            log::warn!("No #toast element, dropping '{}'", notification.title);
            return;
        };

        let _ = toast.set_attribute("class", &format!("toast {}", notification.severity.as_str()));
        if let Some(el) = self.document.get_element_by_id("toast-title") {
            el.set_text_content(Some(&notification.title));
        }
        if let Some(el) = self.document.get_element_by_id("toast-description") {
            el.set_text_content(Some(&notification.description));
        }
    }
}

/// Refresh the score readout and the start/pause button label
pub fn update_hud(document: &Document, score: u32, phase: GamePhase) {
    if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
        el.set_text_content(Some(&score.to_string()));
    }

    if let Some(btn) = document.get_element_by_id("toggle-btn") {
        let label = match phase {
            GamePhase::Idle => "START",
            GamePhase::Running => "PAUSE",
        };
        btn.set_text_content(Some(label));
    }
}
