use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{debug, error};

use crate::connector::api::Container;
use crate::domain::GenerationRequest;

pub const FIELDS_REQUIRED: &str = "All fields are required!";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SQL Query Generator</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; margin: 50px; }
        form { display: inline-block; text-align: left; width: 400px; }
        textarea { width: 100%; height: 80px; }
        input, button { width: 100%; padding: 10px; margin-top: 10px; }
        pre { background: #f4f4f4; padding: 10px; text-align: left; white-space: pre-wrap; }
        .error { color: red; }
    </style>
</head>
<body>
    <h1 style="color: red;">SQL Query Generator</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// What the result panel shows below the form.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub error: Option<&'a str>,
    pub query: Option<&'a str>,
    pub schema_optional: bool,
}

/// `GET /`
pub async fn show_form(State(container): State<Arc<Container>>) -> Html<String> {
    Html(render_page(&PageView {
        schema_optional: container.default_schema().is_some(),
        ..PageView::default()
    }))
}

/// `POST /`
pub async fn submit_form(
    State(container): State<Arc<Container>>,
    form: Result<Form<GenerationRequest>, FormRejection>,
) -> Response {
    let schema_optional = container.default_schema().is_some();
    let failure = |status: StatusCode, message: &str| {
        (
            status,
            Html(render_page(&PageView {
                error: Some(message),
                query: None,
                schema_optional,
            })),
        )
            .into_response()
    };

    let request = match form {
        Ok(Form(request)) => request,
        Err(e) => {
            debug!("Rejected form body: {e}");
            return failure(StatusCode::BAD_REQUEST, FIELDS_REQUIRED);
        }
    };

    let use_case = container.generate_use_case();
    match use_case.execute(request).await {
        Ok(record) => Html(render_page(&PageView {
            error: None,
            query: Some(record.sql_query()),
            schema_optional,
        }))
        .into_response(),
        Err(e) if e.is_invalid_input() => failure(StatusCode::BAD_REQUEST, FIELDS_REQUIRED),
        Err(e) => {
            error!("Form generation failed: {e}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

pub fn render_page(view: &PageView<'_>) -> String {
    let schema_hint = if view.schema_optional {
        "Table Schema (optional, defaults to the built-in table):"
    } else {
        "Table Schema:"
    };
    let schema_required = if view.schema_optional { "" } else { " required" };

    let mut page = String::from(PAGE_HEAD);
    page.push_str(&format!(
        r#"    <form method="POST">
        <label>Hugging Face API Key:</label>
        <input type="password" name="api_key" required>

        <label>{schema_hint}</label>
        <textarea name="schema"{schema_required}></textarea>

        <label>Condition:</label>
        <textarea name="condition" required></textarea>

        <button type="submit">Generate SQL Query</button>
    </form>
"#
    ));

    if let Some(error) = view.error {
        page.push_str(&format!(
            "    <p class=\"error\">{}</p>\n",
            escape_html(error)
        ));
    }

    if let Some(query) = view.query {
        page.push_str("    <h2>Generated SQL Query:</h2>\n");
        page.push_str(&format!("    <pre>{}</pre>\n", escape_html(query)));
    }

    page.push_str(PAGE_TAIL);
    page
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_form_and_no_panels() {
        let page = render_page(&PageView::default());
        assert!(page.contains(r#"<form method="POST">"#));
        assert!(page.contains(r#"<textarea name="schema" required>"#));
        assert!(!page.contains("class=\"error\""));
        assert!(!page.contains("Generated SQL Query:"));
    }

    #[test]
    fn schema_field_is_optional_with_default_schema() {
        let page = render_page(&PageView {
            schema_optional: true,
            ..PageView::default()
        });
        assert!(page.contains(r#"<textarea name="schema"></textarea>"#));
    }

    #[test]
    fn query_panel_is_escaped() {
        let page = render_page(&PageView {
            query: Some("SELECT * FROM t WHERE name = '<b>'"),
            ..PageView::default()
        });
        assert!(page.contains("<pre>SELECT * FROM t WHERE name = &#x27;&lt;b&gt;&#x27;</pre>"));
    }

    #[test]
    fn error_renders_inline() {
        let page = render_page(&PageView {
            error: Some(FIELDS_REQUIRED),
            ..PageView::default()
        });
        assert!(page.contains("<p class=\"error\">All fields are required!</p>"));
    }
}
