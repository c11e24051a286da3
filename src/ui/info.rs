//! Rendering of the pokemon info views.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::lookup::PokemonData;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR, STATUS_OK};
use crate::view::{View, FALLBACK_HEADING, IDLE_PROMPT};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render `view` into the body area.
pub fn render_view(frame: &mut Frame, area: Rect, view: &View, animation_tick: u8) {
    let block = Block::default()
        .title(" Pokemon Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view {
        View::Idle => render_idle(frame, inner),
        View::Loading { name } => render_loading(frame, inner, name, animation_tick),
        View::Data { pokemon } => render_data(frame, inner, pokemon),
        View::Fallback { message } => render_fallback(frame, inner, message),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(IDLE_PROMPT)
        .style(Style::default().fg(HINT_TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_loading(frame: &mut Frame, area: Rect, name: &str, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let placeholder = Style::default().fg(HINT_TEXT);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(
                name.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("HP: Loading...", placeholder)),
        Line::from(Span::styled("Attacks: Loading...", placeholder)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_data(frame: &mut Frame, area: Rect, pokemon: &PokemonData) {
    let title = match &pokemon.number {
        Some(number) => format!("{} ({})", pokemon.name, number),
        None => pokemon.name.clone(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("HP: ", Style::default().fg(HINT_TEXT)),
            Span::styled(pokemon.hp.to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
    ];
    if let Some(image) = &pokemon.image {
        lines.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(HINT_TEXT)),
            Span::styled(image.clone(), Style::default().fg(HEADER_TEXT)),
        ]));
    }

    let summary_height = (lines.len() as u16 + 1).min(area.height);
    let summary = Rect {
        height: summary_height,
        ..area
    };
    let attacks_area = Rect {
        y: area.y + summary_height,
        height: area.height.saturating_sub(summary_height),
        ..area
    };
    frame.render_widget(Paragraph::new(lines), summary);

    if pokemon.attacks.is_empty() || attacks_area.height == 0 {
        return;
    }

    let header = Row::new(vec![
        Cell::from("Ability"),
        Cell::from("Type"),
        Cell::from("Damage"),
    ])
    .style(Style::default().fg(HINT_TEXT).add_modifier(Modifier::BOLD));

    let rows = pokemon.attacks.iter().map(|attack| {
        Row::new(vec![
            Cell::from(attack.name.clone()),
            Cell::from(attack.kind.clone()),
            Cell::from(attack.damage.to_string()),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ],
    )
    .header(header);
    frame.render_widget(table, attacks_area);
}

fn render_fallback(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            FALLBACK_HEADING,
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Ctrl+R to try again, or submit another name",
            Style::default().fg(HINT_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
