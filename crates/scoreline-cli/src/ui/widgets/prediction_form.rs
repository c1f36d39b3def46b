use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::{PredictionInput, Side, widgets::style};

/// Two goal fields; the focused one is highlighted and shows a cursor.
#[derive(Debug)]
pub struct PredictionForm<'a> {
    input: &'a PredictionInput,
}

impl<'a> PredictionForm<'a> {
    pub fn new(input: &'a PredictionInput) -> Self {
        Self { input }
    }

    fn field(&self, label: &'static str, value: &'a str, side: Side) -> Line<'a> {
        let focused = self.input.focus() == side;
        let (value_style, cursor) = if focused {
            (style::FOCUSED, "_")
        } else {
            (style::DEFAULT, "")
        };
        Line::from(vec![
            Span::styled(label, style::LABEL),
            Span::styled(value, value_style),
            Span::styled(cursor, value_style),
        ])
    }
}

impl Widget for PredictionForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines = vec![
            self.field("Home team goals: ", self.input.home(), Side::Home),
            Line::default(),
            self.field("Away team goals: ", self.input.away(), Side::Away),
        ];
        Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .title(Line::from("YOUR PREDICTION").centered())
                    .border_style(style::BORDER),
            )
            .render(area, buf);
    }
}
