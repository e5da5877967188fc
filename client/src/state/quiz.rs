//! Risk questionnaire state: answers, in-flight flag, outcome.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use predict::{Answers, RiskReport};

/// Shown whenever scoring fails, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str = "Server error while processing your data. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizState {
    pub answers: Answers,
    pub loading: bool,
    pub report: Option<RiskReport>,
    pub error: Option<String>,
    /// Local validation problems; non-empty blocks submission.
    pub issues: Vec<String>,
}

impl QuizState {
    pub fn answer(&mut self, id: &str, value: String) {
        self.answers.set(id, value);
    }

    pub fn value(&self, id: &str) -> String {
        self.answers.get(id).unwrap_or_default().to_owned()
    }

    /// Validate and enter the in-flight state, returning the answers to send.
    pub fn begin_submit(&mut self) -> Option<Answers> {
        if self.loading {
            return None;
        }
        self.issues = self.answers.validate().iter().map(ToString::to_string).collect();
        if !self.issues.is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.report = None;
        Some(self.answers.clone())
    }

    pub fn finish_submit(&mut self, result: Result<RiskReport, String>) {
        self.loading = false;
        match result {
            Ok(report) => self.report = Some(report),
            Err(_) => self.error = Some(SUBMIT_FAILED_MESSAGE.to_owned()),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Analyzing..." } else { "Submit Questionnaire" }
    }
}
