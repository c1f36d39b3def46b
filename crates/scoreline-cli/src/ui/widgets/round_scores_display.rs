use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use scoreline_engine::RoundScore;

use crate::ui::widgets::style;

/// Points of every judged round in the current game.
#[derive(Debug)]
pub struct RoundScoresDisplay<'a> {
    scores: &'a [RoundScore],
}

impl<'a> RoundScoresDisplay<'a> {
    pub fn new(scores: &'a [RoundScore]) -> Self {
        Self { scores }
    }
}

impl Widget for RoundScoresDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines = if self.scores.is_empty() {
            vec![Line::styled("No rounds played yet", style::LABEL)]
        } else {
            self.scores
                .iter()
                .enumerate()
                .map(|(i, score)| {
                    Line::from(vec![
                        Span::styled(format!("Round {}: ", i + 1), style::LABEL),
                        Span::styled(score.to_string(), style::grade(score.grade())),
                    ])
                })
                .collect()
        };
        Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .title(Line::from("ROUNDS").centered())
                    .border_style(style::BORDER),
            )
            .render(area, buf);
    }
}
