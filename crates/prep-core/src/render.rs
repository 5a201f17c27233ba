/// Markdown rendering of the active tab.
///
/// The output mirrors the original page: an intro and question accordion on
/// the roadmap tab, project write-ups, copyable code snippets and strategy
/// sections. Optional parts are emitted only when present.
use std::time::Instant;

use crate::filter::{CategoryView, QuestionView};
use crate::model::{
    CodingSection, ContentStore, Project, ProjectsSection, Question, StrategyGuide,
    StrategySection,
};
use crate::session::Session;
use crate::tab::Tab;

const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";

pub fn render(store: &ContentStore, session: &Session, now: Instant) -> String {
    let mut lines = vec![tab_bar(session.tab()), String::new()];
    match session.tab() {
        Tab::Roadmap => render_roadmap(store, session, &mut lines),
        Tab::Projects => render_projects(&store.projects, &mut lines),
        Tab::Coding => render_coding(&store.coding, session, now, &mut lines),
        Tab::Strategy => render_strategy(&store.strategy, &mut lines),
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            if tab == active {
                format!("**[{}]**", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_roadmap(store: &ContentStore, session: &Session, lines: &mut Vec<String>) {
    let intro = &store.roadmap.intro;
    lines.push(format!("# {}", intro.title));
    lines.push(String::new());
    lines.push(intro.description.clone());
    lines.push(String::new());

    let view = session.visible(store.categories());
    if !session.query().is_empty() {
        let count: usize = view.iter().map(|c| c.questions.len()).sum();
        lines.push(format!(
            "Search: {} ({count} matching question{})",
            code_span(session.query()),
            if count == 1 { "" } else { "s" }
        ));
        lines.push(String::new());
        if view.is_empty() {
            lines.push(format!(
                "_No questions match \"{}\"._",
                escape_inline(session.query())
            ));
            return;
        }
    }

    for category in &view {
        render_category(category, session, lines);
    }
}

fn render_category(view: &CategoryView<'_>, session: &Session, lines: &mut Vec<String>) {
    lines.push(format!("## {}", view.category.name));
    lines.push(format!("_{}_", view.category.level));
    lines.push(String::new());
    for question in &view.questions {
        render_question(question, session.expanded() == Some(question.key), lines);
    }
    lines.push(String::new());
}

fn render_question(view: &QuestionView<'_>, expanded: bool, lines: &mut Vec<String>) {
    let marker = if expanded { EXPANDED_MARKER } else { COLLAPSED_MARKER };
    lines.push(format!("- {marker} [{}] {}", view.key, view.question.prompt));
    if expanded {
        lines.push(String::new());
        render_question_detail(view.question, lines);
    }
}

fn render_question_detail(question: &Question, lines: &mut Vec<String>) {
    lines.push(format!("  **Answer:** {}", question.answer));
    if let Some(rationale) = &question.rationale {
        lines.push(format!("  **Why interviewers ask this:** {rationale}"));
    }
    if let Some(example) = &question.example {
        lines.push("  **Example:**".to_string());
        lines.push(String::new());
        push_code_block(example, "  ", lines);
    }
    if let Some(tip) = &question.tip {
        lines.push(format!("  **Pro tip:** {tip}"));
    }
    if let Some(limitation) = &question.limitation {
        lines.push(format!("  **Limitation:** {limitation}"));
    }
    if let Some(best) = &question.best_practice {
        lines.push(format!("  **Best practice:** {best}"));
    }
    if let Some(current) = &question.current_trend {
        lines.push(format!("  **Current trend:** {current}"));
    }
    lines.push(String::new());
}

fn render_projects(section: &ProjectsSection, lines: &mut Vec<String>) {
    lines.push(format!("# {}", section.title));
    lines.push(String::new());
    for project in &section.projects {
        render_project(project, lines);
    }
}

fn render_project(project: &Project, lines: &mut Vec<String>) {
    lines.push(format!("## {}", project.name));
    lines.push(format!("Tech Stack: {}", project.tech));
    lines.push(String::new());

    lines.push("### Key Features".to_string());
    lines.extend(project.features.iter().map(|f| format!("- {f}")));
    lines.push(String::new());

    lines.push("### Challenges & Solutions".to_string());
    for challenge in &project.challenges {
        lines.push(format!("- **Problem:** {}", challenge.problem));
        lines.push(format!("  **Solution:** {}", challenge.solution));
    }
    lines.push(String::new());

    lines.push("### Interview Pitch".to_string());
    lines.push(format!("> {}", project.pitch));
    lines.push(String::new());
}

fn render_coding(section: &CodingSection, session: &Session, now: Instant, lines: &mut Vec<String>) {
    lines.push(format!("# {}", section.title));
    lines.push(String::new());
    for (index, snippet) in section.snippets.iter().enumerate() {
        let action = if session.copied().is_showing(&snippet.code, now) {
            "Copied!"
        } else {
            "Copy"
        };
        lines.push(format!("## [{index}] {} ({action})", snippet.title));
        lines.push(String::new());
        push_code_block(&snippet.code, "", lines);
        lines.push(String::new());
        lines.push(format!("**Why this matters:** {}", snippet.explanation));
        lines.push(String::new());
    }
}

fn render_strategy(guide: &StrategyGuide, lines: &mut Vec<String>) {
    lines.push(format!("# {}", guide.title));
    lines.push(String::new());
    for section in &guide.sections {
        render_strategy_section(section, lines);
    }
}

fn render_strategy_section(section: &StrategySection, lines: &mut Vec<String>) {
    lines.push(format!("## {}", section.name));
    lines.push(String::new());
    if let Some(content) = &section.content {
        lines.push(content.clone());
        lines.push(String::new());
    }
    if let Some(steps) = &section.steps {
        lines.extend(steps.iter().enumerate().map(|(i, s)| format!("{}. {s}", i + 1)));
        lines.push(String::new());
    }
    if let Some(qa) = &section.qa {
        for pair in qa {
            lines.push(format!("**Q: {}**", pair.q));
            lines.push(String::new());
            lines.push(format!("A: {}", pair.a));
            lines.push(String::new());
        }
    }
    if let Some(list) = &section.list {
        lines.extend(list.iter().map(|item| format!("- {item}")));
        lines.push(String::new());
    }
}

/// Inline code span whose fence is longer than any backtick run in `text`.
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let spaced = text.starts_with(' ') && text.ends_with(' ') && !text.trim().is_empty();
    if text.starts_with('`') || text.ends_with('`') || spaced {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

/// Backslash-escape characters that would change inline Markdown formatting.
fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' | '~') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn push_code_block(code: &str, indent: &str, lines: &mut Vec<String>) {
    lines.push(format!("{indent}```"));
    lines.extend(code.lines().map(|l| format!("{indent}{l}")));
    lines.push(format!("{indent}```"));
}
