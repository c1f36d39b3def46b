use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use scoreline_engine::{RoundScore, Scoreline};

use crate::ui::widgets::style;

/// Outcome of the judged round: prediction, actual score and points.
#[derive(Debug)]
pub struct ResultDisplay {
    prediction: Option<Scoreline>,
    actual: Option<Scoreline>,
    score: RoundScore,
}

impl ResultDisplay {
    pub fn new(
        prediction: Option<Scoreline>,
        actual: Option<Scoreline>,
        score: RoundScore,
    ) -> Self {
        Self {
            prediction,
            actual,
            score,
        }
    }
}

fn scoreline_span(scoreline: Option<Scoreline>) -> Span<'static> {
    scoreline.map_or_else(
        || Span::styled("-", style::LABEL),
        |scoreline| Span::styled(scoreline.to_string(), style::DEFAULT),
    )
}

impl Widget for ResultDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let grade = self.score.grade();
        let lines = vec![
            Line::from(vec![
                Span::styled("Predicted:    ", style::LABEL),
                scoreline_span(self.prediction),
            ]),
            Line::from(vec![
                Span::styled("Actual score: ", style::LABEL),
                scoreline_span(self.actual),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Points:       ", style::LABEL),
                Span::styled(format!("{} ({grade})", self.score), style::grade(grade)),
            ]),
        ];

        Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .title(Line::from("RESULT").centered())
                    .border_style(style::grade(grade)),
            )
            .render(area, buf);
    }
}
