use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The whole static document behind the browser, one section per tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    pub roadmap: Roadmap,
    pub projects: ProjectsSection,
    pub coding: CodingSection,
    pub strategy: StrategyGuide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub intro: Intro,
    /// Question categories in display order.
    #[serde(alias = "sections")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intro {
    pub title: String,
    pub description: String,
}

/// A named group of questions, e.g. "JavaScript Fundamentals".
///
/// Identity is the position in `Roadmap::categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "category")]
    pub name: String,
    /// Proficiency label, e.g. "Must Master First".
    pub level: String,
    pub questions: Vec<Question>,
}

/// A single interview question.
///
/// Only `prompt` and `answer` are always present; the remaining fields show up
/// on some questions and not others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "q")]
    pub prompt: String,
    #[serde(alias = "a")]
    pub answer: String,
    /// Why interviewers ask this.
    #[serde(default, alias = "why", skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitation: Option<String>,
    #[serde(default, alias = "best", skip_serializing_if = "Option::is_none")]
    pub best_practice: Option<String>,
    #[serde(default, alias = "current", skip_serializing_if = "Option::is_none")]
    pub current_trend: Option<String>,
}

#[cfg(test)]
impl Question {
    /// A question with only the required fields set.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            rationale: None,
            example: None,
            tip: None,
            limitation: None,
            best_practice: None,
            current_trend: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// Composite identity of a question: its category's position in the store and
/// its own position inside that category.
///
/// Positions always refer to the unfiltered store, so a key names the same
/// question whatever search is active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct QuestionKey {
    pub category: usize,
    pub question: usize,
}

impl QuestionKey {
    pub fn new(category: usize, question: usize) -> Self {
        Self { category, question }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.question)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub title: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Tech stack summary line.
    pub tech: String,
    pub features: Vec<String>,
    pub challenges: Vec<Challenge>,
    /// One-paragraph interview pitch.
    pub pitch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub problem: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingSection {
    pub title: String,
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyGuide {
    pub title: String,
    pub sections: Vec<StrategySection>,
}

/// A block of interview-strategy material. Each optional part is rendered
/// only when present, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa: Option<Vec<QaPair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub q: String,
    pub a: String,
}
