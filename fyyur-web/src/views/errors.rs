//! Generic error pages

use super::{escape, layout};

fn error_page(code: u16, title: &str, message: &str) -> String {
    layout(
        title,
        None,
        &format!(
            r#"<section class="error">
        <h1>{}</h1>
        <p>{}</p>
        <a href="/">Back to home</a>
    </section>"#,
            code,
            escape(message)
        ),
    )
}

pub fn not_found_page() -> String {
    error_page(404, "Not Found", "Sorry, the page you are looking for does not exist.")
}

pub fn bad_request_page(notice: &str) -> String {
    error_page(400, "Bad Request", notice)
}

pub fn server_error_page() -> String {
    error_page(500, "Server Error", "Something went wrong on our side.")
}
