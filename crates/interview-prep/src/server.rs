/// MCP server for the interview-prep content browser.
///
/// Every tool is one user action against the calling client's session:
/// - `get_view`: render the active tab
/// - `select_tab`: switch between roadmap, projects, coding and strategy
/// - `search_questions`: set the live search query
/// - `toggle_question`: expand or collapse a question
/// - `list_snippets`: list copyable code snippets
/// - `copy_snippet`: copy a snippet and show the acknowledgment
use std::sync::Arc;
use std::time::Instant;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use prep_core::clipboard::Clipboard;
use prep_core::copy_ack::ACK_DURATION;
use prep_core::filter;
use prep_core::mcp_api::{
    CategoryMatch, CopySnippetParams, CopySnippetResponse, QuestionDetail, SearchQuestionsParams,
    SearchQuestionsResponse, SelectTabParams, SnippetListResponse, SnippetSummary,
    ToggleQuestionParams, ToggleQuestionResponse, ViewResponse,
};
use prep_core::model::{ContentStore, QuestionKey};
use prep_core::render;
use prep_core::session::Session;

/// One browsing session. Cloning shares the session; build a new server per
/// client to give each its own.
#[derive(Clone)]
pub struct InterviewPrepServer {
    store: Arc<ContentStore>,
    fingerprint: Arc<str>,
    session: Arc<RwLock<Session>>,
    clipboard: Clipboard,
    tool_router: ToolRouter<InterviewPrepServer>,
}

impl InterviewPrepServer {
    pub fn new(store: Arc<ContentStore>, fingerprint: Arc<str>, clipboard: Clipboard) -> Self {
        Self {
            store,
            fingerprint,
            session: Arc::new(RwLock::new(Session::new())),
            clipboard,
            tool_router: Self::tool_router(),
        }
    }

    fn view_of(&self, session: &Session) -> ViewResponse {
        let now = Instant::now();
        let copied_snippet = session.copied_text(now).and_then(|text| {
            self.store
                .coding
                .snippets
                .iter()
                .find(|s| s.code == text)
                .map(|s| s.title.clone())
        });
        let copied_remaining_ms = copied_snippet
            .as_ref()
            .and_then(|_| session.copied().remaining(now))
            .map(|left| left.as_millis() as u64);
        ViewResponse {
            tab: session.tab(),
            query: session.query().to_string(),
            expanded: session.expanded(),
            copied_snippet,
            copied_remaining_ms,
            content_fingerprint: self.fingerprint.to_string(),
            markdown: render::render(&self.store, session, now),
        }
    }
}

#[tool_router]
impl InterviewPrepServer {
    #[tool(description = "Render the active tab (roadmap, projects, coding or strategy) as Markdown, with the current search, expanded question and copy acknowledgment applied.")]
    async fn get_view(&self) -> Result<Json<ViewResponse>, String> {
        let session = self.session.read().await;
        Ok(Json(self.view_of(&session)))
    }

    #[tool(description = "Switch the active tab. Valid tabs: roadmap, projects, coding, strategy. Returns the rendered view.")]
    async fn select_tab(
        &self,
        Parameters(params): Parameters<SelectTabParams>,
    ) -> Result<Json<ViewResponse>, String> {
        let mut session = self.session.write().await;
        let tab = session.select_tab(params.tab);
        info!(%tab, "tab selected");
        Ok(Json(self.view_of(&session)))
    }

    #[tool(description = "Set the live search over roadmap questions. Matches question, answer and rationale text case-insensitively; an empty query shows everything. Returns the matching categories and question keys.")]
    async fn search_questions(
        &self,
        Parameters(params): Parameters<SearchQuestionsParams>,
    ) -> Result<Json<SearchQuestionsResponse>, String> {
        let categories = self.store.categories();
        let mut session = self.session.write().await;
        session.set_query(categories, params.query);

        let view = session.visible(categories);
        let match_count = filter::match_count(categories, session.query());
        info!(
            query = %session.query(),
            categories = view.len(),
            match_count,
            "search updated"
        );

        Ok(Json(SearchQuestionsResponse {
            query: session.query().to_string(),
            match_count,
            categories: view.iter().map(CategoryMatch::from).collect(),
        }))
    }

    #[tool(description = "Expand a roadmap question, or collapse it if it is already expanded. Only one question is expanded at a time; indexes refer to the unfiltered roadmap.")]
    async fn toggle_question(
        &self,
        Parameters(params): Parameters<ToggleQuestionParams>,
    ) -> Result<Json<ToggleQuestionResponse>, String> {
        let key = QuestionKey::new(params.category_index, params.question_index);
        let mut session = self.session.write().await;
        let expanded = session.toggle(key);
        debug!(%key, expanded = expanded.is_some(), "question toggled");

        let question = expanded
            .and_then(|k| self.store.question(k).map(|q| QuestionDetail::new(k, q)));
        Ok(Json(ToggleQuestionResponse { expanded, question }))
    }

    #[tool(description = "List the copyable code snippets with their indexes.")]
    async fn list_snippets(&self) -> Result<Json<SnippetListResponse>, String> {
        let coding = &self.store.coding;
        Ok(Json(SnippetListResponse {
            title: coding.title.clone(),
            snippets: coding
                .snippets
                .iter()
                .enumerate()
                .map(|(index, s)| SnippetSummary {
                    index,
                    title: s.title.clone(),
                    explanation: s.explanation.clone(),
                })
                .collect(),
        }))
    }

    #[tool(description = "Copy a code snippet to the clipboard (when a clipboard command is configured) and show a 'Copied!' acknowledgment on it for two seconds. Returns the snippet code.")]
    async fn copy_snippet(
        &self,
        Parameters(params): Parameters<CopySnippetParams>,
    ) -> Result<Json<CopySnippetResponse>, String> {
        let index = params.snippet_index;
        let snippet = self
            .store
            .snippet(index)
            .ok_or_else(|| format!("snippet not found: {index}"))?;

        self.session
            .write()
            .await
            .record_copy(snippet.code.clone(), Instant::now());
        let clipboard_dispatched = self.clipboard.write_in_background(snippet.code.clone());
        info!(index, title = %snippet.title, clipboard_dispatched, "snippet copied");

        Ok(Json(CopySnippetResponse {
            index,
            title: snippet.title.clone(),
            code: snippet.code.clone(),
            clipboard_dispatched,
            acknowledged_for_ms: ACK_DURATION.as_millis() as u64,
        }))
    }
}

#[tool_handler]
impl ServerHandler for InterviewPrepServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "interview-prep".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Interview preparation browser. Use get_view to read the active tab, select_tab \
                 to switch between roadmap, projects, coding and strategy, search_questions to \
                 filter roadmap questions, toggle_question to expand one question at a time, and \
                 list_snippets/copy_snippet for code patterns."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prep_core::clipboard::Clipboard;
    use prep_core::model::ContentStore;
    use prep_core::tab::Tab;
    use rmcp::handler::server::wrapper::Parameters;

    use super::*;

    fn server() -> InterviewPrepServer {
        server_with(Clipboard::default())
    }

    fn server_with(clipboard: Clipboard) -> InterviewPrepServer {
        let store = ContentStore::builtin().expect("builtin content");
        let fingerprint: Arc<str> = store.fingerprint().into();
        InterviewPrepServer::new(Arc::new(store), fingerprint, clipboard)
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = InterviewPrepServer::tool_router().list_all();
        for name in [
            "get_view",
            "select_tab",
            "search_questions",
            "toggle_question",
            "list_snippets",
            "copy_snippet",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn search_then_toggle_then_collapse_on_hide() {
        let server = server();

        let Json(found) = server
            .search_questions(Parameters(SearchQuestionsParams {
                query: "closure".to_string(),
            }))
            .await
            .expect("search");
        assert!(found.match_count >= 1);
        let key = found.categories[0].questions[0].key;

        let Json(toggled) = server
            .toggle_question(Parameters(ToggleQuestionParams {
                category_index: key.category,
                question_index: key.question,
            }))
            .await
            .expect("toggle");
        assert_eq!(toggled.expanded, Some(key));
        let detail = toggled.question.expect("detail for existing question");
        assert!(detail.prompt.contains("Closure"));

        server
            .search_questions(Parameters(SearchQuestionsParams {
                query: "zzzzz".to_string(),
            }))
            .await
            .expect("search");
        let Json(view) = server.get_view().await.expect("view");
        assert_eq!(view.expanded, None);
        assert!(view.markdown.contains("_No questions match \"zzzzz\"._"));
    }

    #[tokio::test]
    async fn toggle_unknown_key_has_no_detail() {
        let server = server();
        let Json(toggled) = server
            .toggle_question(Parameters(ToggleQuestionParams {
                category_index: 42,
                question_index: 0,
            }))
            .await
            .expect("toggle accepts any key");
        assert_eq!(toggled.expanded, Some(QuestionKey::new(42, 0)));
        assert!(toggled.question.is_none());
    }

    #[tokio::test]
    async fn copy_marks_snippet_in_coding_view() {
        let server = server();
        server
            .select_tab(Parameters(SelectTabParams { tab: Tab::Coding }))
            .await
            .expect("select tab");

        let Json(copied) = server
            .copy_snippet(Parameters(CopySnippetParams { snippet_index: 2 }))
            .await
            .expect("copy");
        assert_eq!(copied.title, "MongoDB Transaction Example");
        assert!(!copied.clipboard_dispatched);
        assert_eq!(copied.acknowledged_for_ms, 2000);

        let Json(view) = server.get_view().await.expect("view");
        assert_eq!(view.tab, Tab::Coding);
        assert_eq!(view.copied_snippet.as_deref(), Some("MongoDB Transaction Example"));
        assert!(view.copied_remaining_ms.is_some_and(|ms| ms > 0 && ms <= 2000));
        assert!(view.markdown.contains("## [2] MongoDB Transaction Example (Copied!)"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_clipboard_does_not_delay_acknowledgment() {
        let server = server_with(Clipboard::new(Some("sleep 3")));
        let started = std::time::Instant::now();

        let Json(copied) = server
            .copy_snippet(Parameters(CopySnippetParams { snippet_index: 0 }))
            .await
            .expect("copy");
        assert!(copied.clipboard_dispatched);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));

        let Json(view) = server.get_view().await.expect("view");
        assert_eq!(view.copied_snippet.as_deref(), Some("Protected Route Middleware (Express)"));
        assert!(view.copied_remaining_ms.is_some_and(|ms| ms > 1000));
    }

    #[tokio::test]
    async fn copy_unknown_snippet_fails() {
        let server = server();
        let Err(err) = server
            .copy_snippet(Parameters(CopySnippetParams { snippet_index: 99 }))
            .await
        else {
            panic!("unknown snippet should fail");
        };
        assert_eq!(err, "snippet not found: 99");
    }

    #[tokio::test]
    async fn separate_servers_have_separate_sessions() {
        let first = server();
        let second = server();
        first
            .select_tab(Parameters(SelectTabParams { tab: Tab::Strategy }))
            .await
            .expect("select tab");

        let Json(a) = first.get_view().await.expect("view");
        let Json(b) = second.get_view().await.expect("view");
        assert_eq!(a.tab, Tab::Strategy);
        assert_eq!(b.tab, Tab::Roadmap);
        assert_eq!(a.content_fingerprint, b.content_fingerprint);
    }
}
