use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Paragraph},
};
use scoreline_engine::{AnySource, GameError, GameSession, SessionState};

use crate::{
    tui::App,
    ui::{
        PredictionInput,
        widgets::{
            FactsDisplay, PredictionForm, ResultDisplay, RoundScoresDisplay, ScoresDisplay, style,
        },
    },
};

#[derive(Debug)]
pub struct QuizApp {
    game: GameSession<AnySource>,
    input: PredictionInput,
    show_rounds: bool,
    status: Option<String>,
    is_exiting: bool,
}

impl QuizApp {
    pub fn new(game: GameSession<AnySource>, show_rounds: bool) -> Self {
        Self {
            game,
            input: PredictionInput::default(),
            show_rounds,
            status: None,
            is_exiting: false,
        }
    }

    pub fn into_game(self) -> GameSession<AnySource> {
        self.game
    }

    fn report(&mut self, result: Result<(), GameError>) {
        self.status = match result {
            Ok(()) => None,
            Err(err) => Some(format!("{:#}", anyhow::Error::new(err))),
        };
    }

    fn start_game(&mut self) {
        self.input.clear();
        let result = self.game.start_game();
        self.report(result);
    }

    fn submit(&mut self) {
        let Some((home, away)) = self.input.values() else {
            self.status = Some("Enter both goal counts".to_owned());
            return;
        };
        let result = self.game.submit_prediction(home, away).map(|_score| ());
        if result.is_ok() {
            self.input.clear();
        }
        self.report(result);
    }

    fn advance(&mut self) {
        let result = self.game.advance();
        self.report(result);
    }

    fn help_text(&self) -> &'static str {
        match self.game.state() {
            SessionState::NotStarted => "Controls: Enter/S (Start) | R (Rounds) | Q (Quit)",
            SessionState::AwaitingPrediction => {
                "Controls: 0-9 (Goals) | Tab (Switch) | Enter (Submit) | S (Restart) | R (Rounds) | Q (Quit)"
            }
            SessionState::AwaitingNext => {
                "Controls: Enter/N (Next) | S (Restart) | R (Rounds) | Q (Quit)"
            }
            SessionState::Finished => "Controls: Enter/S (New game) | R (Rounds) | Q (Quit)",
        }
    }

    fn draw_round(&self, frame: &mut Frame, area: Rect) {
        let state = self.game.state();
        let revealed = state.is_awaiting_next() || state.is_finished();

        let [left, right] = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)])
            .spacing(1)
            .areas(area);
        let [input_area, rounds_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Fill(1)]).areas(left);

        let facts = FactsDisplay::new(self.game.visible_facts());
        if revealed {
            frame.render_widget(facts.reveal(self.game.hidden_facts()), right);
            frame.render_widget(
                ResultDisplay::new(
                    self.game.prediction(),
                    self.game.ground_truth(),
                    self.game.current_round_score(),
                ),
                input_area,
            );
        } else {
            frame.render_widget(facts, right);
            frame.render_widget(PredictionForm::new(&self.input), input_area);
        }

        if self.show_rounds {
            frame.render_widget(RoundScoresDisplay::new(self.game.round_scores()), rounds_area);
        }
    }

    fn draw_welcome(frame: &mut Frame, area: Rect, max_rounds: usize) {
        let text = Text::from(vec![
            Line::styled("Football Stats Quiz", style::FOCUSED).centered(),
            Line::default(),
            Line::styled(
                format!("Guess the final score of {max_rounds} matches from their statistics."),
                style::DEFAULT,
            )
            .centered(),
            Line::styled(
                "1 point for the right outcome, +1 for each exact goal count.",
                style::LABEL,
            )
            .centered(),
        ]);
        frame.render_widget(
            Paragraph::new(text).block(Block::bordered().border_style(style::BORDER)),
            area,
        );
    }
}

impl App for QuizApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        match (self.game.state(), key.code) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => self.is_exiting = true,
            (_, KeyCode::Char('r')) => self.show_rounds = !self.show_rounds,
            (SessionState::AwaitingPrediction, KeyCode::Char(c)) if c.is_ascii_digit() => {
                self.input.push_digit(c);
            }
            (SessionState::AwaitingPrediction, KeyCode::Backspace) => self.input.pop_digit(),
            (
                SessionState::AwaitingPrediction,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right,
            ) => self.input.toggle_focus(),
            (SessionState::AwaitingPrediction, KeyCode::Enter) => self.submit(),
            (SessionState::AwaitingNext, KeyCode::Char('n') | KeyCode::Enter) => self.advance(),
            (SessionState::NotStarted | SessionState::Finished, KeyCode::Enter)
            | (_, KeyCode::Char('s')) => self.start_game(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [scores_area, main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(ScoresDisplay::new(&self.game), scores_area);
        if self.game.state().is_not_started() {
            Self::draw_welcome(frame, main_area, self.game.max_rounds());
        } else {
            self.draw_round(frame, main_area);
        }
        if let Some(status) = &self.status {
            frame.render_widget(
                Text::styled(status.as_str(), style::ERROR).centered(),
                status_area,
            );
        }
        frame.render_widget(
            Text::styled(self.help_text(), style::HELP).centered(),
            help_area,
        );
    }
}
