use scoreline_engine::MAX_GOALS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Home,
    Away,
}

/// Goal-count form for one prediction.
///
/// Only digits are accepted and each field is capped at [`MAX_GOALS`], so any
/// value returned by [`Self::values`] is a valid prediction.
#[derive(Debug, Clone, Default)]
pub struct PredictionInput {
    home: String,
    away: String,
    focus: Side,
}

impl PredictionInput {
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn away(&self) -> &str {
        &self.away
    }

    pub fn focus(&self) -> Side {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Appends a digit to the focused field; returns `false` if it was rejected.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        let field = self.focused_mut();
        let mut candidate = if field == "0" {
            String::new()
        } else {
            field.clone()
        };
        candidate.push(c);
        match candidate.parse::<u32>() {
            Ok(goals) if goals <= MAX_GOALS => {
                *field = candidate;
                true
            }
            _ => false,
        }
    }

    pub fn pop_digit(&mut self) {
        self.focused_mut().pop();
    }

    /// Returns both goal counts once both fields are filled in.
    pub fn values(&self) -> Option<(u32, u32)> {
        let home = self.home.parse().ok()?;
        let away = self.away.parse().ok()?;
        Some((home, away))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> PredictionInput {
        let mut input = PredictionInput::default();
        for c in keys.chars() {
            if c == '\t' {
                input.toggle_focus();
            } else {
                input.push_digit(c);
            }
        }
        input
    }

    #[test]
    fn test_values_require_both_fields() {
        assert_eq!(typed("2").values(), None);
        assert_eq!(typed("\t1").values(), None);
        assert_eq!(typed("2\t1").values(), Some((2, 1)));
    }

    #[test]
    fn test_rejects_non_digits() {
        let mut input = PredictionInput::default();
        assert!(!input.push_digit('-'));
        assert!(!input.push_digit('a'));
        assert_eq!(input.home(), "");
    }

    #[test]
    fn test_caps_at_goal_limit() {
        let mut input = typed("999");
        assert!(!input.push_digit('0'));
        assert_eq!(input.home(), "999");
        assert_eq!(input.values(), None);
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let input = typed("03\t00");
        assert_eq!(input.home(), "3");
        assert_eq!(input.away(), "0");
        assert_eq!(input.values(), Some((3, 0)));
    }

    #[test]
    fn test_pop_and_clear() {
        let mut input = typed("12\t4");
        input.pop_digit();
        assert_eq!(input.away(), "");
        input.toggle_focus();
        input.pop_digit();
        assert_eq!(input.home(), "1");
        assert_eq!(input.focus(), Side::Home);
        input.clear();
        assert_eq!(input.home(), "");
        assert_eq!(input.focus(), Side::Home);
    }
}
