//! Pages rendered inside a shared layout.

use axum::response::Html;

const LAYOUT: &str = include_str!("views/layout.html");
const ME: &str = include_str!("views/me.html");

/// Substitute `title` and `body` into the layout.
pub fn render(title: &str, body: &str) -> String {
    LAYOUT.replace("{{title}}", title).replace("{{body}}", body)
}

pub async fn me() -> Html<String> {
    Html(render("Me", ME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_wrapped_in_layout() {
        let html = render("Me", ME);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("background: #333;"));
        assert!(html.contains("<title>Me</title>"));
        assert!(html.contains("<h1>"));
        assert!(!html.contains("{{"));
    }
}
