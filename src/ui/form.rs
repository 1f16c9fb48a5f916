//! One-line input form that drives lookup-key changes.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, POKE_YELLOW};

#[derive(Debug, Clone, Default)]
pub struct InputForm {
    text: String,
    suggestions: Vec<String>,
    /// Index of the suggestion last filled in by Tab.
    suggestion_cursor: Option<usize>,
}

impl InputForm {
    pub fn new(suggestions: Vec<String>) -> Self {
        Self {
            text: String::new(),
            suggestions,
            suggestion_cursor: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.suggestion_cursor = None;
    }

    pub fn insert(&mut self, ch: char) {
        self.text.push(ch);
        self.suggestion_cursor = None;
    }

    pub fn backspace(&mut self) {
        self.text.pop();
        self.suggestion_cursor = None;
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Fill in the next suggestion, wrapping around.
    pub fn next_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let next = match self.suggestion_cursor {
            Some(index) if index + 1 < self.suggestions.len() => index + 1,
            _ => 0,
        };
        self.text = self.suggestions[next].clone();
        self.suggestion_cursor = Some(next);
    }

    /// The name to submit, trimmed.
    pub fn submission(&self) -> String {
        self.text.trim().to_string()
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(" › ", Style::default().fg(POKE_YELLOW)),
            Span::styled(self.text.clone(), Style::default().fg(BODY_TEXT)),
            Span::styled("█", Style::default().fg(BODY_TEXT).add_modifier(Modifier::SLOW_BLINK)),
        ]);

        let mut block = Block::default()
            .title(Span::styled(" Pokemon Name ", Style::default().fg(POKE_YELLOW)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        if !self.suggestions.is_empty() {
            block = block.title_bottom(Span::styled(
                format!(" Try {} ", self.suggestions.join(", ")),
                Style::default().fg(MUTED_TEXT),
            ));
        }

        Paragraph::new(line).block(block)
    }
}
