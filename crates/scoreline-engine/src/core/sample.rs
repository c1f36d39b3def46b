use super::Scoreline;

/// One quiz question: the real final score plus facts shown before and after the guess.
///
/// A sample is produced by a [`SampleSource`](crate::SampleSource) once per round and
/// dropped when the next one is pulled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    ground_truth: Scoreline,
    visible_facts: Vec<String>,
    hidden_facts: Vec<String>,
}

impl Sample {
    #[must_use]
    pub fn new(
        ground_truth: Scoreline,
        visible_facts: Vec<String>,
        hidden_facts: Vec<String>,
    ) -> Self {
        Self {
            ground_truth,
            visible_facts,
            hidden_facts,
        }
    }

    #[must_use]
    pub fn ground_truth(&self) -> Scoreline {
        self.ground_truth
    }

    /// Statistics shown before the prediction, in display order.
    #[must_use]
    pub fn visible_facts(&self) -> &[String] {
        &self.visible_facts
    }

    /// Identity, date and competition revealed after the prediction.
    #[must_use]
    pub fn hidden_facts(&self) -> &[String] {
        &self.hidden_facts
    }
}
