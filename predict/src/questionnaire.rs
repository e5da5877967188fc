//! The chronic-disease risk questionnaire.
//!
//! The field list is static and ordered; answers are sent to every risk
//! model verbatim as a flat JSON object of strings. Each model reads the
//! keys it knows and defaults the rest, so unanswered questions are fine.

#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Select,
    Number,
}

/// One questionnaire field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: QuestionKind,
    /// Allowed values for [`QuestionKind::Select`]; empty for numbers.
    pub options: &'static [&'static str],
    pub optional: bool,
}

const YES_NO: &[&str] = &["Yes", "No"];

const fn select(id: &'static str, label: &'static str, options: &'static [&'static str]) -> Question {
    Question { id, label, kind: QuestionKind::Select, options, optional: false }
}

const fn number(id: &'static str, label: &'static str) -> Question {
    Question { id, label, kind: QuestionKind::Number, options: &[], optional: false }
}

const fn optional_number(id: &'static str, label: &'static str) -> Question {
    Question { id, label, kind: QuestionKind::Number, options: &[], optional: true }
}

/// Every question, in form order.
pub const QUESTIONS: &[Question] = &[
    // Basic info
    select("gender", "Gender", &["Male", "Female"]),
    number("age", "Age"),
    select(
        "Age_Category",
        "Age Group",
        &["18-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50-54", "55-59", "60-64", "65+"],
    ),
    // Body measurements
    number("height_cm", "Height (cm)"),
    number("weight_kg", "Weight (kg)"),
    optional_number("bmi", "BMI (if known, else leave blank)"),
    // Lifestyle
    select("Exercise", "Do you exercise regularly?", YES_NO),
    select("Checkup", "Have you had a routine medical checkup recently?", YES_NO),
    number("Fruit_Consumption", "Fruit consumption per day (servings)"),
    number("Green_Vegetables_Consumption", "Green vegetables per day (servings)"),
    number("FriedPotato_Consumption", "Fried / junk food consumption per week"),
    select("Alcohol_Consumption", "Alcohol consumption", &["Never", "Occasionally", "Frequently"]),
    // Smoking
    select("Smoking_History", "Smoking history", &["Never", "Former", "Current"]),
    // Heart / general health
    select(
        "General_Health",
        "How would you rate your general health?",
        &["Poor", "Fair", "Good", "Very Good", "Excellent"],
    ),
    select("Skin_Cancer", "Have you ever been diagnosed with skin cancer?", YES_NO),
    select("Other_Cancer", "Have you ever been diagnosed with any other cancer?", YES_NO),
    select("Depression", "Have you been diagnosed with depression?", YES_NO),
    select("Diabetes", "Have you been diagnosed with diabetes?", YES_NO),
    select("Arthritis", "Have you been diagnosed with arthritis?", YES_NO),
    // Diabetes model
    optional_number("hba1c_level", "HbA1c level (if known)"),
    optional_number("blood_glucose_level", "Blood glucose level (if known)"),
    // Lung cancer model
    select("yellow_fingers", "Do you have yellow fingers?", YES_NO),
    select("anxiety", "Do you experience anxiety frequently?", YES_NO),
    select("chronic_disease", "Do you have any chronic disease?", YES_NO),
    select("fatigue", "Do you experience frequent fatigue?", YES_NO),
    select("wheezing", "Do you experience wheezing?", YES_NO),
    select("shortness_of_breath", "Do you have shortness of breath?", YES_NO),
    select("chest_pain", "Do you experience chest pain?", YES_NO),
];

/// Look up a question by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// A problem with one answer that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerIssue {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    #[error("{label}: enter a non-negative number")]
    NotANumber { id: &'static str, label: &'static str },
    #[error("{label}: choose one of the listed options")]
    NotAnOption { id: &'static str, label: &'static str },
}

/// Answers keyed by question id. Serializes as a flat JSON object; blank
/// values are dropped on the way in, as with [`Answers::set`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. A blank value clears the question.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&id);
        } else {
            self.0.insert(id, value);
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check every recorded answer against its question. Missing answers are
    /// not issues.
    #[must_use]
    pub fn validate(&self) -> Vec<AnswerIssue> {
        self.0
            .iter()
            .filter_map(|(id, value)| {
                let Some(question) = find(id) else {
                    return Some(AnswerIssue::UnknownQuestion(id.clone()));
                };
                match question.kind {
                    QuestionKind::Number if !is_non_negative_number(value) => {
                        Some(AnswerIssue::NotANumber { id: question.id, label: question.label })
                    }
                    QuestionKind::Select if !question.options.contains(&value.as_str()) => {
                        Some(AnswerIssue::NotAnOption { id: question.id, label: question.label })
                    }
                    _ => None,
                }
            })
            .collect()
    }
}

impl From<BTreeMap<String, String>> for Answers {
    fn from(raw: BTreeMap<String, String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<Answers> for BTreeMap<String, String> {
    fn from(answers: Answers) -> Self {
        answers.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (k, v) in iter {
            answers.set(k, v);
        }
        answers
    }
}

fn is_non_negative_number(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|n| n.is_finite() && n >= 0.0)
}
