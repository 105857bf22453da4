//! Neutralizing untrusted text before it is placed into markup

/// Turns untrusted text into text with no active markup, safe for raw insertion
pub trait Sanitizer: Send + Sync + std::fmt::Debug {
    fn sanitize(&self, text: &str) -> String;
}

/// Sanitizer that escapes the HTML metacharacters
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlEscaper;

impl Sanitizer for HtmlEscaper {
    fn sanitize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
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
}
