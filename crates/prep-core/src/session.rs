use std::time::Instant;

use tracing::debug;

use crate::copy_ack::CopyAck;
use crate::disclosure;
use crate::filter::{self, CategoryView};
use crate::model::{Category, QuestionKey};
use crate::tab::Tab;

/// Browsing state owned by one client.
///
/// Holds the live search query, the single expanded question, the active tab
/// and the copy acknowledgment. The content itself is passed in by the caller.
#[derive(Debug, Clone, Default)]
pub struct Session {
    query: String,
    expanded: Option<QuestionKey>,
    tab: Tab,
    copied: CopyAck,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expanded(&self) -> Option<QuestionKey> {
        self.expanded
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Replace the search query.
    ///
    /// An expanded question that the new query hides is collapsed, so the
    /// session never keeps an open key that nothing on screen shows.
    pub fn set_query(&mut self, categories: &[Category], query: impl Into<String>) {
        self.query = query.into();
        if let Some(key) = self.expanded {
            if !filter::is_visible(categories, &self.query, key) {
                debug!(%key, query = %self.query, "collapsing question hidden by search");
                self.expanded = None;
            }
        }
    }

    pub fn toggle(&mut self, key: QuestionKey) -> Option<QuestionKey> {
        self.expanded = disclosure::toggle(self.expanded, key);
        self.expanded
    }

    pub fn select_tab(&mut self, tab: Tab) -> Tab {
        self.tab = tab;
        self.tab
    }

    pub fn record_copy(&mut self, text: impl Into<String>, now: Instant) {
        self.copied.record(text, now);
    }

    /// Text whose copy acknowledgment is showing at `now`.
    pub fn copied_text(&self, now: Instant) -> Option<&str> {
        self.copied.current(now)
    }

    pub fn copied(&self) -> &CopyAck {
        &self.copied
    }

    /// Categories visible under the current query.
    pub fn visible<'a>(&self, categories: &'a [Category]) -> Vec<CategoryView<'a>> {
        filter::filter_view(categories, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::Question;

    fn store() -> Vec<Category> {
        vec![
            Category {
                name: "A".to_string(),
                level: "L".to_string(),
                questions: vec![
                    Question::new("Explain Hoisting", "Declarations move up."),
                    Question::new("this keyword", "Binding rules."),
                ],
            },
            Category {
                name: "B".to_string(),
                level: "L".to_string(),
                questions: vec![Question::new("Embedding vs Referencing", "Modeling.")],
            },
        ]
    }

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert_eq!(session.query(), "");
        assert_eq!(session.expanded(), None);
        assert_eq!(session.tab(), Tab::Roadmap);
        assert_eq!(session.copied_text(Instant::now()), None);
    }

    #[test]
    fn click_scenario() {
        let mut session = Session::new();
        assert_eq!(session.toggle(QuestionKey::new(0, 1)), Some(QuestionKey::new(0, 1)));
        assert_eq!(session.toggle(QuestionKey::new(0, 1)), None);
        session.toggle(QuestionKey::new(0, 1));
        session.toggle(QuestionKey::new(1, 0));
        assert_eq!(session.expanded(), Some(QuestionKey::new(1, 0)));
    }

    #[test]
    fn search_hiding_expanded_question_collapses_it() {
        let store = store();
        let mut session = Session::new();
        session.toggle(QuestionKey::new(0, 1));

        session.set_query(&store, "hoisting");
        assert_eq!(session.expanded(), None);
        assert_eq!(session.visible(&store).len(), 1);
    }

    #[test]
    fn search_keeping_expanded_question_preserves_it() {
        let store = store();
        let mut session = Session::new();
        session.toggle(QuestionKey::new(1, 0));

        session.set_query(&store, "EMBEDDING");
        assert_eq!(session.expanded(), Some(QuestionKey::new(1, 0)));

        session.set_query(&store, "");
        assert_eq!(session.expanded(), Some(QuestionKey::new(1, 0)));
    }

    #[test]
    fn clicks_are_not_validated_until_search_changes() {
        let store = store();
        let mut session = Session::new();
        session.toggle(QuestionKey::new(5, 5));
        assert_eq!(session.expanded(), Some(QuestionKey::new(5, 5)));

        session.set_query(&store, "");
        assert_eq!(session.expanded(), None);
    }

    #[test]
    fn tab_selection_keeps_other_state() {
        let store = store();
        let mut session = Session::new();
        session.set_query(&store, "keyword");
        session.toggle(QuestionKey::new(0, 1));

        assert_eq!(session.select_tab(Tab::Coding), Tab::Coding);
        assert_eq!(session.tab(), Tab::Coding);
        assert_eq!(session.query(), "keyword");
        assert_eq!(session.expanded(), Some(QuestionKey::new(0, 1)));
    }

    #[test]
    fn copy_acknowledgment_follows_latest_copy() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.record_copy("X", t0);
        session.record_copy("Y", t0 + Duration::from_secs(1));

        let later = t0 + Duration::from_millis(2100);
        assert_eq!(session.copied_text(later), Some("Y"));
        assert_eq!(session.copied_text(t0 + Duration::from_secs(3)), None);
    }
}
