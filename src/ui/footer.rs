use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SEARCH_HINTS: &str = " Enter: Search │ Tab: Suggest │ Esc: Quit";
const RETRY_HINT: &str = " │ Ctrl+R: Try again";

/// Key hints plus version, right-aligned.
pub struct Footer {
    show_retry: bool,
}

impl Footer {
    /// `show_retry` adds the fallback's retry binding to the hints.
    pub fn new(show_retry: bool) -> Self {
        Self { show_retry }
    }

    pub fn hints(&self) -> String {
        if self.show_retry {
            format!("{}{}", SEARCH_HINTS, RETRY_HINT)
        } else {
            SEARCH_HINTS.to_string()
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);
        let version = format!("v{} ", VERSION);

        let mut spans = vec![Span::styled(SEARCH_HINTS, text_style)];
        if self.show_retry {
            spans.push(Span::styled(RETRY_HINT, Style::default().fg(STATUS_ERROR)));
        }

        // Char count, not byte count: the separators are multi-byte
        let used = self.hints().chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        spans.push(Span::raw(" ".repeat(content_width.saturating_sub(used))));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
