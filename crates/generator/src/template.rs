use campaign_core::config::SiteConfig;
use pulldown_cmark::{Parser, html};
use std::io::{self, Write};

/// Anything that renders to HTML: full pages and API fragments alike
pub trait Template {
    /// Render to an owned string
    fn to_html(&self) -> String;

    /// Render into a byte stream such as a file or response body
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.to_html().as_bytes())
    }
}

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Render trusted CommonMark content to HTML
pub fn markdown_to_html(src: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(src));
    out
}

/// Wrap page content in the shared document shell
///
/// `page_title` is escaped here; `main` must already be HTML.
pub fn layout(site: &SiteConfig, page_title: &str, main: &str) -> String {
    let site_title = html_escape(&site.title);
    let title = if page_title.is_empty() {
        site_title.clone()
    } else {
        format!("{} | {}", html_escape(page_title), site_title)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/style.css">
    <script src="/js/htmx.min.js"></script>
</head>
<body>
    <header class="site-header">
        <a class="site-title" href="/">{site_title}</a>
        <nav>
            <a href="/">Home</a>
            <a href="/about.html">About</a>
            <a href="/blog.html">Blog</a>
        </nav>
    </header>
    <main>
{main}
    </main>
    <footer class="site-footer">
        <p>&copy; {site_title}</p>
    </footer>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static(&'static str);

    impl Template for Static {
        fn to_html(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_html_escape_donor_names() {
        assert_eq!(html_escape("Alice"), "Alice");
        assert_eq!(html_escape("Smith & Sons"), "Smith &amp; Sons");
        assert_eq!(html_escape("O'Brien"), "O&#x27;Brien");
        assert_eq!(html_escape("Bob \"the Builder\""), "Bob &quot;the Builder&quot;");
        assert_eq!(html_escape("José Ñúñez"), "José Ñúñez");
        assert_eq!(html_escape(""), "");
    }

    #[test]
    fn test_html_escape_hostile_donor_message() {
        assert_eq!(
            html_escape("Go team! <script>fetch('/api/donations')</script>"),
            "Go team! &lt;script&gt;fetch(&#x27;/api/donations&#x27;)&lt;/script&gt;"
        );
        assert_eq!(
            html_escape("5 < 10 > 1 & counting"),
            "5 &lt; 10 &gt; 1 &amp; counting"
        );
    }

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("Hello **world**\n\n- one\n- two");
        assert!(html.contains("<p>Hello <strong>world</strong></p>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_render_writes_to_html_bytes() {
        let mut buf = Vec::new();
        Static("<p>hi</p>").render(&mut buf).unwrap();
        assert_eq!(buf, b"<p>hi</p>");
    }

    #[test]
    fn test_layout_escapes_titles() {
        let site = SiteConfig {
            title: "A & B".to_string(),
            tagline: String::new(),
        };
        let html = layout(&site, "<About>", "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>&lt;About&gt; | A &amp; B</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"<script src="/js/htmx.min.js"></script>"#));
    }

    #[test]
    fn test_layout_without_page_title() {
        let html = layout(&SiteConfig::default(), "", "");
        assert!(html.contains("<title>Campaign</title>"));
    }
}
