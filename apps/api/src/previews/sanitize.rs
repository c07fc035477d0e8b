//! Data hygiene for preview text fields returned to clients. Escaping here
//! is a contract on the payload, not a substitute for a security boundary.

use crate::models::preview::Preview;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns a copy with the client-rendered text fields escaped.
pub fn sanitize_preview(preview: Preview) -> Preview {
    Preview {
        title: escape_html(&preview.title),
        description: escape_html(&preview.description),
        thumbnail_url: escape_html(&preview.thumbnail_url),
        ..preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("a catchy description"), "a catchy description");
    }

    #[test]
    fn test_script_tag_escaped() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_quotes_and_ampersand_escaped() {
        assert_eq!(
            escape_html(r#"say "hi" & 'bye'"#),
            "say &quot;hi&quot; &amp; &#x27;bye&#x27;"
        );
    }

    #[test]
    fn test_sanitize_preview_escapes_text_fields() {
        let preview = Preview {
            id: 1,
            video_id: 1,
            thumbnail_url: "http://x/<img>".to_string(),
            title: "<b>bold</b>".to_string(),
            description: "fine".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let clean = sanitize_preview(preview);
        assert_eq!(clean.title, "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(clean.thumbnail_url, "http://x/&lt;img&gt;");
        assert_eq!(clean.description, "fine");
        assert!(clean.is_active);
    }
}
