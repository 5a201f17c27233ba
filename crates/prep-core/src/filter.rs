/// Case-insensitive substring filtering over question categories.
///
/// A question matches when its prompt, answer, or rationale contains the query
/// (case-insensitively, no tokenization). Filtering only removes: surviving
/// categories and questions keep their store order, and categories left with
/// no questions are dropped. An empty query selects everything.
use crate::model::{Category, Question, QuestionKey};

/// A surviving category, borrowed from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView<'a> {
    /// Position of the category in the store.
    pub index: usize,
    pub category: &'a Category,
    pub questions: Vec<QuestionView<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub key: QuestionKey,
    pub question: &'a Question,
}

/// The filtered view of `categories` for `query`, with store keys attached.
pub fn filter_view<'a>(categories: &'a [Category], query: &str) -> Vec<CategoryView<'a>> {
    if query.is_empty() {
        return categories
            .iter()
            .enumerate()
            .map(|(index, category)| CategoryView {
                index,
                category,
                questions: category
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(q_index, question)| QuestionView {
                        key: QuestionKey::new(index, q_index),
                        question,
                    })
                    .collect(),
            })
            .collect();
    }

    let needle = query.to_lowercase();
    categories
        .iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let questions: Vec<QuestionView<'a>> = category
                .questions
                .iter()
                .enumerate()
                .filter(|(_, question)| question_matches(question, &needle))
                .map(|(q_index, question)| QuestionView {
                    key: QuestionKey::new(index, q_index),
                    question,
                })
                .collect();
            (!questions.is_empty()).then_some(CategoryView {
                index,
                category,
                questions,
            })
        })
        .collect()
}

/// The filtered categories as owned values, each carrying only its matching
/// questions. `filter(s, "")` returns `s` unchanged.
pub fn filter(categories: &[Category], query: &str) -> Vec<Category> {
    if query.is_empty() {
        return categories.to_vec();
    }
    filter_view(categories, query)
        .into_iter()
        .map(|view| Category {
            name: view.category.name.clone(),
            level: view.category.level.clone(),
            questions: view.questions.iter().map(|q| q.question.clone()).collect(),
        })
        .collect()
}

/// Number of questions selected by `query`.
pub fn match_count(categories: &[Category], query: &str) -> usize {
    filter_view(categories, query)
        .iter()
        .map(|view| view.questions.len())
        .sum()
}

/// Whether the question at `key` exists and is selected by `query`.
pub fn is_visible(categories: &[Category], query: &str, key: QuestionKey) -> bool {
    let Some(question) = categories
        .get(key.category)
        .and_then(|c| c.questions.get(key.question))
    else {
        return false;
    };
    query.is_empty() || question_matches(question, &query.to_lowercase())
}

/// `needle` must already be lowercase.
fn question_matches(question: &Question, needle: &str) -> bool {
    contains_lowercase(&question.prompt, needle)
        || contains_lowercase(&question.answer, needle)
        || question
            .rationale
            .as_deref()
            .is_some_and(|rationale| contains_lowercase(rationale, needle))
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
