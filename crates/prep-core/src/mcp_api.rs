use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::CategoryView;
use crate::model::{Question, QuestionKey};
use crate::tab::Tab;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectTabParams {
    /// One of "roadmap", "projects", "coding", "strategy".
    pub tab: Tab,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchQuestionsParams {
    /// Case-insensitive text matched against question, answer and rationale.
    /// An empty string clears the search.
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ToggleQuestionParams {
    /// Position of the category in the unfiltered roadmap.
    pub category_index: usize,
    /// Position of the question inside its category.
    pub question_index: usize,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CopySnippetParams {
    /// Snippet index as listed by list_snippets.
    pub snippet_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ViewResponse {
    pub tab: Tab,
    pub query: String,
    pub expanded: Option<QuestionKey>,
    /// Title of the snippet whose copy acknowledgment is showing.
    pub copied_snippet: Option<String>,
    /// How much longer the copy acknowledgment stays visible.
    pub copied_remaining_ms: Option<u64>,
    pub content_fingerprint: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSummary {
    pub key: QuestionKey,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryMatch {
    pub index: usize,
    pub name: String,
    pub level: String,
    pub questions: Vec<QuestionSummary>,
}

impl From<&CategoryView<'_>> for CategoryMatch {
    fn from(view: &CategoryView<'_>) -> Self {
        Self {
            index: view.index,
            name: view.category.name.clone(),
            level: view.category.level.clone(),
            questions: view
                .questions
                .iter()
                .map(|q| QuestionSummary {
                    key: q.key,
                    prompt: q.question.prompt.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchQuestionsResponse {
    pub query: String,
    pub match_count: usize,
    pub categories: Vec<CategoryMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuestionDetail {
    pub key: QuestionKey,
    pub prompt: String,
    pub answer: String,
    pub rationale: Option<String>,
    pub example: Option<String>,
    pub tip: Option<String>,
    pub limitation: Option<String>,
    pub best_practice: Option<String>,
    pub current_trend: Option<String>,
}

impl QuestionDetail {
    pub fn new(key: QuestionKey, question: &Question) -> Self {
        Self {
            key,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            rationale: question.rationale.clone(),
            example: question.example.clone(),
            tip: question.tip.clone(),
            limitation: question.limitation.clone(),
            best_practice: question.best_practice.clone(),
            current_trend: question.current_trend.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToggleQuestionResponse {
    /// The expanded question after the toggle, or null if collapsed.
    pub expanded: Option<QuestionKey>,
    /// Detail of the expanded question when it exists in the content.
    pub question: Option<QuestionDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnippetSummary {
    pub index: usize,
    pub title: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnippetListResponse {
    pub title: String,
    pub snippets: Vec<SnippetSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CopySnippetResponse {
    pub index: usize,
    pub title: String,
    pub code: String,
    /// Whether a clipboard write was started. The write runs in the
    /// background; false when no clipboard command is configured.
    pub clipboard_dispatched: bool,
    /// How long the copy acknowledgment stays visible.
    pub acknowledged_for_ms: u64,
}
