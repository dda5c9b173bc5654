//! Server-side HTML rendering of the widget page.

use std::fmt::Write;

use answer_resolver::SessionHistory;

use crate::ui::variant::{InputPlacement, PageVariant, base_stylesheet};

pub const PAGE_TITLE: &str = "Thoughtful AI Support Agent";
pub const PAGE_SUBTITLE: &str = "Ask me anything about Thoughtful AI!";
pub const INPUT_LABEL: &str = "Enter your question here:";

/// Message shown instead of an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Soft prompt, e.g. for an empty submission.
    Info(String),
    /// The question could not be answered.
    Error(String),
}

/// Everything one page render needs.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Last submitted question, echoed back into the input.
    pub question: String,
    pub answer: Option<String>,
    pub notice: Option<Notice>,
    pub history: SessionHistory,
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(variant: PageVariant, view: &PageView) -> String {
    let mut html = String::with_capacity(4096);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{base}{css}</style>\n</head>\n\
         <body class=\"variant-{variant}\">\n",
        title = PAGE_TITLE,
        base = base_stylesheet(),
        css = variant.stylesheet(),
        variant = variant.as_str(),
    );

    match variant.placement() {
        InputPlacement::Centered => {
            html.push_str("<main>\n");
            push_header(&mut html);
            if variant.keeps_history() {
                push_history(&mut html, &view.history);
            }
            push_form(&mut html, variant, view);
            push_outcome(&mut html, view);
            html.push_str("</main>\n");
        }
        InputPlacement::Sidebar => {
            html.push_str("<div class=\"layout\">\n<aside>\n");
            push_form(&mut html, variant, view);
            html.push_str("</aside>\n<main>\n");
            push_header(&mut html);
            push_outcome(&mut html, view);
            push_history(&mut html, &view.history);
            html.push_str("</main>\n</div>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_header(html: &mut String) {
    let _ = write!(html, "<h1>{PAGE_TITLE}</h1>\n<p>{PAGE_SUBTITLE}</p>\n");
}

fn push_form(html: &mut String, variant: PageVariant, view: &PageView) {
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"question\">{INPUT_LABEL}</label>\n\
         <input type=\"text\" id=\"question\" name=\"question\" value=\"{}\" autofocus>\n",
        escape_html(&view.question)
    );
    if variant.keeps_history() {
        // Serializing a Vec of plain strings cannot fail.
        let json = serde_json::to_string(&view.history).unwrap_or_else(|_| "[]".into());
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"history\" value=\"{}\">",
            escape_html(&json)
        );
    }
    html.push_str("<button type=\"submit\">Ask</button>\n</form>\n");
}

fn push_outcome(html: &mut String, view: &PageView) {
    if let Some(answer) = &view.answer {
        let _ = writeln!(
            html,
            "<p class=\"answer\"><strong>Answer:</strong> {}</p>",
            escape_html(answer)
        );
    }
    match &view.notice {
        Some(Notice::Info(msg)) => {
            let _ = writeln!(html, "<p class=\"notice\">{}</p>", escape_html(msg));
        }
        Some(Notice::Error(msg)) => {
            let _ = writeln!(html, "<p class=\"error\" role=\"alert\">{}</p>", escape_html(msg));
        }
        None => {}
    }
}

fn push_history(html: &mut String, history: &SessionHistory) {
    if history.is_empty() {
        return;
    }
    html.push_str("<h2>Conversation history</h2>\n<ol class=\"history\">\n");
    for entry in history {
        let _ = writeln!(
            html,
            "<li><div class=\"history-question\"><strong>Q:</strong> {}</div>\
             <div class=\"history-answer\"><strong>A:</strong> {}</div></li>",
            escape_html(&entry.question),
            escape_html(&entry.answer)
        );
    }
    html.push_str("</ol>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_history() -> PageView {
        let mut history = SessionHistory::new();
        history.push("What is <b>CAM</b>?", "It's \"great\" & fast");
        PageView {
            question: "What is <b>CAM</b>?".into(),
            answer: Some("It's \"great\" & fast".into()),
            notice: None,
            history,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn classic_has_no_history_field() {
        let html = render_page(PageVariant::Classic, &view_with_history());
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("<strong>Answer:</strong> It&#39;s &quot;great&quot; &amp; fast"));
        assert!(!html.contains("name=\"history\""));
        assert!(!html.contains("Conversation history"));
        assert!(!html.contains("<b>CAM</b>"));
    }

    #[test]
    fn sidebar_puts_form_in_aside_and_lists_history() {
        let html = render_page(PageVariant::Sidebar, &view_with_history());
        let aside = html.find("<aside>").unwrap();
        let form = html.find("<form").unwrap();
        let main = html.find("<main>").unwrap();
        assert!(aside < form && form < main);
        assert!(html.contains("Conversation history"));
        assert!(html.contains("name=\"history\" value=\"[{&quot;question&quot;"));
    }

    #[test]
    fn chat_renders_notice() {
        let view = PageView {
            notice: Some(Notice::Info("Please enter a question.".into())),
            ..PageView::default()
        };
        let html = render_page(PageVariant::Chat, &view);
        assert!(html.contains("class=\"notice\">Please enter a question."));
        assert!(!html.contains("Answer:"));
        assert!(html.contains("value=\"[]\""));
    }
}
