pub use self::{
    facts_display::*, prediction_form::*, result_display::*, round_scores_display::*,
    scores_display::*,
};

mod facts_display;
mod prediction_form;
mod result_display;
mod round_scores_display;
mod scores_display;

mod color {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(0, 200, 83);
    pub const YELLOW: Color = Color::Rgb(255, 214, 0);
    pub const ORANGE: Color = Color::Rgb(255, 145, 0);
    pub const RED: Color = Color::Rgb(213, 0, 0);
    pub const CYAN: Color = Color::Rgb(0, 229, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Modifier, Style};
    use scoreline_engine::Grade;

    use crate::ui::widgets::color;

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const BORDER: Style = Style::new().fg(color::GRAY);
    pub const FOCUSED: Style = Style::new().fg(color::CYAN).add_modifier(Modifier::BOLD);
    pub const LABEL: Style = Style::new().fg(color::GRAY);
    pub const HELP: Style = Style::new().fg(color::GRAY);
    pub const ERROR: Style = Style::new().fg(color::RED);

    pub const fn grade(grade: Grade) -> Style {
        let fg = match grade {
            Grade::Miss => color::RED,
            Grade::Outcome => color::ORANGE,
            Grade::Close => color::YELLOW,
            Grade::Exact => color::GREEN,
        };
        Style::new().fg(fg).add_modifier(Modifier::BOLD)
    }
}
