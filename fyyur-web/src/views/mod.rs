//! Server-rendered HTML pages
//!
//! Pages are assembled with `format!` into a shared layout. Every value
//! that came from a user or the database goes through [`escape`].

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

use chrono::{DateTime, Utc};
use fyyur_common::time::display_show_time;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Wrap page content in the site layout
pub fn layout(title: &str, notice: Option<&str>, content: &str) -> String {
    let notice = notice
        .map(|message| format!(r#"<div class="notice">{}</div>"#, escape(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/fyyur.css">
</head>
<body>
    <header>
        <a class="brand" href="/">🔥 Fyyur</a>
        <nav>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
    </header>
    <main>
        {notice}
        {content}
    </main>
    <script src="/static/fyyur.js"></script>
</body>
</html>
"#,
        title = escape(title),
        notice = notice,
        content = content,
    )
}

/// Search box posting `search_term` to `action`
pub fn search_box(action: &str, placeholder: &str, term: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
            <input type="search" name="search_term" placeholder="{placeholder}" value="{term}">
            <button type="submit">Search</button>
        </form>"#,
        action = action,
        placeholder = escape(placeholder),
        term = escape(term),
    )
}

/// `<img>` tag, or nothing for a missing link
pub fn image(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

/// External link paragraph, or nothing for a missing link
pub fn external_link(label: &str, link: Option<&str>) -> String {
    match link {
        Some(href) => format!(
            r#"<p><span class="label">{}</span> <a href="{}" target="_blank" rel="noopener">{}</a></p>"#,
            escape(label),
            escape(href),
            escape(href)
        ),
        None => String::new(),
    }
}

pub fn show_time(time: &DateTime<Utc>) -> String {
    escape(&display_show_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#x27;y&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape("Park Square"), "Park Square");
    }

    #[test]
    fn test_layout_includes_notice() {
        let page = layout("Home", Some("Venue <b> was listed"), "<p>hi</p>");
        assert!(page.contains("<title>Home | Fyyur</title>"));
        assert!(page.contains("Venue &lt;b&gt; was listed"));
        assert!(page.contains("<p>hi</p>"));
    }

    #[test]
    fn test_missing_image_renders_nothing() {
        assert!(image(None, "x").is_empty());
        assert!(image(Some("https://a/b.png"), "x").contains("src=\"https://a/b.png\""));
    }
}
