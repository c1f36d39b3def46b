use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use scoreline_engine::GameSession;

use crate::ui::widgets::style;

/// Running totals bar: total points, best score and round progress.
#[derive(Debug)]
pub struct ScoresDisplay<'a, S> {
    game: &'a GameSession<S>,
}

impl<'a, S> ScoresDisplay<'a, S> {
    pub fn new(game: &'a GameSession<S>) -> Self {
        Self { game }
    }
}

impl<S> Widget for ScoresDisplay<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let separator = Span::styled("   |   ", style::LABEL);
        let line = Line::from(vec![
            Span::styled("Total points: ", style::LABEL),
            Span::styled(self.game.total_score().to_string(), style::DEFAULT),
            separator.clone(),
            Span::styled("Best score: ", style::LABEL),
            Span::styled(self.game.best_score().to_string(), style::DEFAULT),
            separator,
            Span::styled("Done: ", style::LABEL),
            Span::styled(
                format!("{}/{}", self.game.round_index(), self.game.max_rounds()),
                style::DEFAULT,
            ),
        ])
        .centered();
        Paragraph::new(line)
            .block(Block::bordered().border_style(style::BORDER))
            .render(area, buf);
    }
}
