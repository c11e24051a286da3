//! Rendering of the name form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{ACCENT, HEADER_TEXT, HINT_TEXT, POPUP_BORDER};

use super::state::{FormState, QUICK_PICKS};

/// Render the form into `area` (expects at least 4 rows).
pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .title(" Pokemon Name ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let picks = QUICK_PICKS
        .iter()
        .enumerate()
        .flat_map(|(index, name)| {
            let style = if state.quick_pick == Some(index) {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HINT_TEXT)
            };
            [Span::styled(*name, style), Span::raw(" ")]
        });

    let mut input = vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(state.input.as_str(), Style::default().fg(HEADER_TEXT)),
        Span::styled("_", Style::default().fg(HINT_TEXT)),
    ];
    if state.has_pending_edit() {
        input.push(Span::styled(
            "  (Enter to look up)",
            Style::default().fg(HINT_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }

    let lines = vec![
        Line::from(input),
        Line::from(
            std::iter::once(Span::styled("Try: ", Style::default().fg(HINT_TEXT)))
                .chain(picks)
                .collect::<Vec<_>>(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
