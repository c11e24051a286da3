use crate::fetch::RequestState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    backend: &'a str,
    state: &'a RequestState,
}

impl<'a> Header<'a> {
    pub fn new(backend: &'a str, state: &'a RequestState) -> Self {
        Self { backend, state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = match self.state {
            RequestState::Idle => ("idle", text_style),
            RequestState::Pending { .. } => ("loading", Style::default().fg(STATUS_OK)),
            RequestState::Resolved { .. } => ("ok", Style::default().fg(STATUS_OK)),
            RequestState::Rejected { .. } => ("error", Style::default().fg(STATUS_ERROR)),
        };
        let mut spans = vec![
            Span::styled("  pokeinfo", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.backend.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ];
        if let Some(key) = self.state.key() {
            spans.push(Span::styled(format!(" {}", key), text_style));
        }
        let line = Line::from(spans);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
