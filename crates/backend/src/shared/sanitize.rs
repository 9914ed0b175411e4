// ============================================================================
// HTML sanitization
// ============================================================================

/// Санитизация HTML тела кейса проекта.
///
/// Правила:
/// - Запрещены все `<script>`/`<style>` теги и их содержимое
/// - Запрещены все `on*` атрибуты и `javascript:` URI
/// - Разрешены теги форматирования текста, списки, таблицы, ссылки и картинки
/// - Ссылкам принудительно добавляется `rel="noopener noreferrer"`
pub fn sanitize_html(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "p", "h2", "h3", "h4", "ul", "ol", "li", "strong", "em", "b", "i", "u",
            "blockquote", "code", "pre", "br", "hr", "a", "img", "figure", "figcaption",
            "table", "thead", "tbody", "tr", "td", "th", "span", "div",
        ])
        .generic_attributes(maplit::hashset!["class", "title"])
        .tag_attributes(maplit::hashmap![
            "a" => maplit::hashset!["href"],
            "img" => maplit::hashset!["src", "alt", "width", "height"],
        ])
        .url_schemes(maplit::hashset!["http", "https", "mailto"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scripts_and_handlers() {
        let dirty = r#"<p onclick="steal()">Hi<script>alert(1)</script></p>"#;
        assert_eq!(sanitize_html(dirty), "<p>Hi</p>");
    }

    #[test]
    fn test_keeps_formatting_and_safe_links() {
        let html = sanitize_html(r#"<h2>Result</h2><a href="https://example.com">site</a>"#);
        assert!(html.contains("<h2>Result</h2>"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains("noopener"));
    }

    #[test]
    fn test_drops_javascript_urls() {
        let html = sanitize_html(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!html.contains("javascript"));
    }
}
