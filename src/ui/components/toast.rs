//! Toast notification component.
//!
//! Transient, auto-dismissing messages anchored to the bottom-right corner
//! of the terminal. Each `show` call appends an independent toast; multiple
//! live toasts stack upward. Dismissal is driven by the application tick:
//! the event loop reports elapsed time and expired toasts are removed.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

use crate::constants::{TOAST_DEFAULT_TTL_SECS, TOAST_HEIGHT, TOAST_WIDTH};
use crate::ui::layout::LayoutManager;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// Style token naming the severity, used for titles and styling hooks.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Border and text color for this severity.
    pub fn color(self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Info => Color::Blue,
            Severity::Warning => Color::Yellow,
            Severity::Danger => Color::Red,
        }
    }
}

/// One live notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    remaining: Duration,
}

impl Toast {
    fn new(message: String, severity: Severity, ttl: Duration) -> Self {
        Self {
            message,
            severity,
            remaining: ttl,
        }
    }

    /// Whether the auto-dismiss deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }
}

/// Owner of all live toasts.
///
/// The manager appends on `show`, ages toasts on `tick`, and removes them
/// once expired. Callers cannot cancel or observe a pending toast.
pub struct ToastManager {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(TOAST_DEFAULT_TTL_SECS))
    }

    /// Create a manager whose toasts live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { toasts: Vec::new(), ttl }
    }

    /// Append one toast with the given severity.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push(Toast::new(message.into(), severity, self.ttl));
    }

    /// Append a success toast (the default severity).
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Warning);
    }

    pub fn danger(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Danger);
    }

    /// Advance the dismissal clock and drop expired toasts.
    pub fn tick(&mut self, elapsed: Duration) {
        for toast in &mut self.toasts {
            toast.remaining = toast.remaining.saturating_sub(elapsed);
        }
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Render all live toasts stacked above the bottom-right corner.
    ///
    /// Newest toast sits closest to the corner. Toasts that would not fit
    /// on screen are simply not drawn; they still expire on their own.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        for (slot, toast) in self.toasts.iter().rev().enumerate() {
            let Some(rect) = LayoutManager::toast_rect(area, slot as u16, TOAST_WIDTH, TOAST_HEIGHT) else {
                break;
            };

            let style = Style::default().fg(toast.severity.color());
            let paragraph = Paragraph::new(toast.message.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(toast.severity.as_str())
                        .border_style(style),
                )
                .style(style)
                .wrap(Wrap { trim: true });

            f.render_widget(Clear, rect);
            f.render_widget(paragraph, rect);
        }
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}
