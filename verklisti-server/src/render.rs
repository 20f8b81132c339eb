//! Page renderer: task list in, full HTML document out
//!
//! Deterministic and side-effect free; no network or database access
//! happens here. The template is embedded at compile time and carries the
//! page structure: add form, per-task toggle/delete forms, and the bulk
//! delete control.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::models::Todo;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Template environment, built once. The `.html` name keeps minijinja's
/// HTML auto-escaping active for task titles.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)
        .expect("page template parses");
    env
});

/// Render the todo page for the given task list.
pub fn render_page(todos: &[Todo]) -> String {
    let has_finished = todos.iter().any(|t| t.finished);

    TEMPLATES
        .get_template("page.html")
        .expect("page template registered")
        .render(context! { todos, has_finished })
        .expect("page template renders")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn todo(id: i32, title: &str, finished: bool) -> Todo {
        Todo {
            id,
            title: title.to_owned(),
            finished,
            created: Utc::now(),
        }
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_page(&[]);

        assert!(html.contains("Ég fékk 0 verkefni."));
        assert!(html.contains("Engin verkefni enn."));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn header_counts_tasks() {
        let todos = vec![todo(1, "a", false), todo(2, "b", false), todo(3, "c", true)];
        let html = render_page(&todos);

        assert!(html.contains("Ég fékk 3 verkefni."));
    }

    #[test]
    fn each_task_gets_toggle_and_delete_forms() {
        let todos = vec![todo(7, "Buy milk", false)];
        let html = render_page(&todos);

        assert!(html.contains(r#"action="/toggle""#));
        assert!(html.contains(r#"action="/delete""#));
        assert!(html.contains(r#"name="id" value="7""#));
        assert!(html.contains("Buy milk"));
    }

    #[test]
    fn finished_task_is_marked_done() {
        let html = render_page(&[todo(1, "done task", true)]);

        assert!(html.contains(r#"class="todo done""#));
        assert!(html.contains("✅"));
    }

    #[test]
    fn unfinished_task_is_not_marked_done() {
        let html = render_page(&[todo(1, "open task", false)]);

        assert!(html.contains(r#"class="todo""#));
        assert!(!html.contains("todo done"));
        assert!(html.contains("⬜️"));
    }

    #[test]
    fn bulk_delete_disabled_when_nothing_finished() {
        let html = render_page(&[todo(1, "open", false)]);
        assert!(html.contains("disabled"));
    }

    #[test]
    fn bulk_delete_enabled_when_something_finished() {
        let html = render_page(&[todo(1, "open", false), todo(2, "done", true)]);
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn titles_are_html_escaped() {
        let html = render_page(&[todo(1, "<script>alert(1)</script>", false)]);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn add_form_enforces_title_limits() {
        let html = render_page(&[]);

        assert!(html.contains(r#"action="/add""#));
        assert!(html.contains(r#"maxlength="255""#));
        assert!(html.contains("required"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let todos = vec![todo(1, "same", false)];
        assert_eq!(render_page(&todos), render_page(&todos));
    }
}
