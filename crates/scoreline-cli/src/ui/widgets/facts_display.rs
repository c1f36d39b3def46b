use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Match statistics, followed by the revealed match details once the round is judged.
#[derive(Debug)]
pub struct FactsDisplay<'a> {
    visible: &'a [String],
    hidden: Option<&'a [String]>,
}

impl<'a> FactsDisplay<'a> {
    pub fn new(visible: &'a [String]) -> Self {
        Self {
            visible,
            hidden: None,
        }
    }

    pub fn reveal(self, hidden: &'a [String]) -> Self {
        Self {
            hidden: Some(hidden),
            ..self
        }
    }
}

impl Widget for FactsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut lines = vec![];
        if self.visible.is_empty() {
            lines.push(Line::styled("No statistics available", style::LABEL));
        }
        for fact in self.visible {
            lines.push(Line::styled(fact.as_str(), style::DEFAULT));
            lines.push(Line::default());
        }
        if let Some(hidden) = self.hidden {
            let rule = "─".repeat(usize::from(area.width.saturating_sub(2)));
            lines.push(Line::styled(rule, style::BORDER));
            for fact in hidden {
                lines.push(Line::styled(fact.as_str(), style::FOCUSED));
            }
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(Line::from("MATCH STATS").centered())
                    .border_style(style::BORDER),
            )
            .render(area, buf);
    }
}
