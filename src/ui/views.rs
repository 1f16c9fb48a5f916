//! Stateless views for the info panel.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::lookup::{LookupFailure, Pokemon};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, POKE_BLUE, POKE_YELLOW, STATUS_ERROR,
    STATUS_OK,
};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Placeholder shown for every stat while loading.
const PLACEHOLDER: &str = "XXX";

pub const IDLE_PROMPT: &str = "Submit a pokemon";
pub const RETRY_LABEL: &str = " Try again ";

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(POKE_YELLOW),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(BODY_TEXT)),
    ])
}

pub fn idle_view() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(IDLE_PROMPT, Style::default().fg(MUTED_TEXT))),
    ])
    .alignment(Alignment::Center)
    .block(panel("Pokemon"))
}

/// Loading placeholder for `name`.
pub fn loading_view(name: &str, animation_tick: u8) -> Paragraph<'static> {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(
                format!("Loading {}...", name),
                Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        stat_line("Number", PLACEHOLDER.to_string()),
        stat_line("Type", PLACEHOLDER.to_string()),
        stat_line("HP", PLACEHOLDER.to_string()),
        stat_line("Attack", PLACEHOLDER.to_string()),
        stat_line("Defense", PLACEHOLDER.to_string()),
    ];

    Paragraph::new(lines).block(panel(name))
}

pub fn data_view(pokemon: &Pokemon) -> Paragraph<'static> {
    let types = if pokemon.types.is_empty() {
        "unknown".to_string()
    } else {
        pokemon.types.join(" / ")
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", pokemon.name),
                Style::default().fg(POKE_YELLOW).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("#{:03}", pokemon.id), Style::default().fg(POKE_BLUE)),
        ]),
        Line::from(""),
        stat_line("Type", types),
        stat_line("HP", pokemon.hp.to_string()),
        stat_line("Attack", pokemon.attack.to_string()),
        stat_line("Defense", pokemon.defense.to_string()),
        stat_line("Height", format!("{:.1} m", pokemon.height_m())),
        stat_line("Weight", format!("{:.1} kg", pokemon.weight_kg())),
    ];

    if !pokemon.abilities.is_empty() {
        lines.push(stat_line("Abilities", pokemon.abilities.join(", ")));
    }
    if let Some(sprite) = &pokemon.sprite {
        lines.push(stat_line("Sprite", sprite.clone()));
    }
    if !pokemon.fetched_at.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  fetched at {}", pokemon.fetched_at),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(&pokemon.name))
}

/// Fallback shown by the recovery boundary. The retry control is bound to
/// Ctrl+R by the input handler.
pub fn fallback_view(error: &LookupFailure) -> Paragraph<'static> {
    let button = Style::default()
        .fg(BODY_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  There was an error:",
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", error.message()),
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(RETRY_LABEL, button),
            Span::styled("  Ctrl+R", Style::default().fg(MUTED_TEXT)),
        ]),
    ];

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(" Error ", Style::default().fg(STATUS_ERROR)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    )
}
