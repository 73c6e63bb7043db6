//! Small reusable widgets: copy-to-clipboard button with a transient
//! acknowledgement, and the busy-aware action button.

use std::time::{Duration, Instant};

use arboard::Clipboard;
use eframe::egui;

pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

/// Acknowledgement state of one copy button.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    /// Starts (or restarts) the acknowledgement window.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_acknowledged(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left in the acknowledgement window, if it is still open.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let copied_at = self.copied_at?;
        COPY_ACK_WINDOW
            .checked_sub(now.saturating_duration_since(copied_at))
            .filter(|left| !left.is_zero())
    }
}

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(text.to_string()).map_err(|err| err.to_string())
    }
}

/// Copies `text` and opens the acknowledgement window. The flag is left
/// alone when the clipboard rejects the write.
pub fn copy_text(
    sink: &mut impl ClipboardSink,
    feedback: &mut CopyFeedback,
    text: &str,
    now: Instant,
) -> Result<(), String> {
    sink.set_text(text)?;
    feedback.mark_copied(now);
    Ok(())
}

/// Renders a copy button for `payload`; the label flips to "Copied!" while
/// the acknowledgement window is open.
pub fn copy_button(ui: &mut egui::Ui, feedback: &mut CopyFeedback, payload: &str, status: &mut String) {
    let now = Instant::now();
    let (label, tooltip) = if feedback.is_acknowledged(now) {
        ("✔ Copied!", "Copied!")
    } else {
        ("📋 Copy", "Copy to clipboard")
    };

    if ui.small_button(label).on_hover_text(tooltip).clicked() {
        match copy_text(&mut SystemClipboard, feedback, payload, now) {
            Ok(()) => tracing::debug!(bytes = payload.len(), "copied to clipboard"),
            Err(err) => {
                tracing::warn!("clipboard write failed: {err}");
                *status = format!("Failed to copy to clipboard: {err}");
            }
        }
    }

    if let Some(left) = feedback.remaining(Instant::now()) {
        ui.ctx().request_repaint_after(left);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyLabel {
    pub idle: &'static str,
    pub busy: &'static str,
}

impl BusyLabel {
    pub fn text(self, busy: bool) -> &'static str {
        if busy {
            self.busy
        } else {
            self.idle
        }
    }
}

pub const BRIEF_BUSY_LABEL: BusyLabel = BusyLabel {
    idle: "Generate",
    busy: "Generating…",
};

pub const ARTICLE_BUSY_LABEL: BusyLabel = BusyLabel {
    idle: "Generate Full Article",
    busy: "Generating article…",
};

/// Action button that is disabled and shows a spinner while its operation is
/// in flight. Returns `true` when clicked.
pub fn busy_button(ui: &mut egui::Ui, label: BusyLabel, busy: bool, enabled: bool) -> bool {
    ui.horizontal(|ui| {
        let button = egui::Button::new(egui::RichText::new(label.text(busy)).monospace())
            .min_size(egui::vec2(0.0, 30.0));
        let clicked = ui.add_enabled(enabled && !busy, button).clicked();
        if busy {
            ui.spinner();
        }
        clicked
    })
    .inner
}

#[cfg(test)]
#[path = "tests/widgets_tests.rs"]
mod tests;
