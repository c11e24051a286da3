//! Key hints for the current request state.

use crate::fetch::RequestState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

pub struct Footer<'a> {
    state: &'a RequestState,
    pending_edit: bool,
}

impl<'a> Footer<'a> {
    /// `pending_edit` is whether Enter would submit a different name.
    pub fn new(state: &'a RequestState, pending_edit: bool) -> Self {
        Self {
            state,
            pending_edit,
        }
    }

    /// Hints in display order. The first one is the action most worth
    /// taking right now.
    pub fn hints(&self) -> Vec<String> {
        let mut hints = Vec::new();
        if self.pending_edit || self.state.key().is_none() {
            hints.push("Enter: Submit".to_string());
        }
        if let Some(key) = self.state.key() {
            if self.state.error().is_some() {
                hints.push(format!("Ctrl+R: Retry {}", key));
            } else if let Some(data) = self.state.data() {
                hints.push(format!("Ctrl+R: Refresh {}", data.name));
            } else if self.state.is_pending() {
                hints.push(format!("Looking up {}…", key));
            }
        }
        hints.extend(["Tab: Quick pick", "Ctrl+U: Clear", "Esc: Quit"].map(String::from));
        hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let lead_style = Style::default().fg(ACCENT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (index, hint) in self.hints().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, separator_style));
                used += SEPARATOR.chars().count();
            }
            used += hint.chars().count();
            let style = if index == 0 { lead_style } else { text_style };
            spans.push(Span::styled(hint, style));
        }

        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, PokemonData};

    #[test]
    fn idle_leads_with_submit() {
        let hints = Footer::new(&RequestState::Idle, false).hints();
        assert_eq!(hints[0], "Enter: Submit");
        assert!(!hints.iter().any(|h| h.starts_with("Ctrl+R")));
    }

    #[test]
    fn rejected_offers_retry_for_the_key() {
        let state = RequestState::Rejected {
            key: "missingno".into(),
            error: LookupError::not_found(),
        };
        let hints = Footer::new(&state, false).hints();
        assert_eq!(hints[0], "Ctrl+R: Retry missingno");
    }

    #[test]
    fn resolved_offers_refresh() {
        let state = RequestState::Resolved {
            key: "pikachu".into(),
            data: PokemonData::new("Pikachu", 35),
        };
        let hints = Footer::new(&state, false).hints();
        assert_eq!(hints[0], "Ctrl+R: Refresh Pikachu");
    }

    #[test]
    fn pending_shows_progress_instead_of_retry() {
        let state = RequestState::Pending { key: "mew".into() };
        let hints = Footer::new(&state, false).hints();
        assert_eq!(hints[0], "Looking up mew…");
        assert!(!hints.iter().any(|h| h.starts_with("Ctrl+R")));
    }

    #[test]
    fn edited_name_puts_submit_first() {
        let state = RequestState::Pending { key: "mew".into() };
        let hints = Footer::new(&state, true).hints();
        assert_eq!(hints[0], "Enter: Submit");
        assert_eq!(hints[1], "Looking up mew…");
    }
}
