//! Landing page

use super::layout;

pub fn home_page(notice: Option<&str>) -> String {
    layout(
        "Home",
        notice,
        r#"<section class="home">
        <h1>Fyyur</h1>
        <p>Book live shows between artists and venues.</p>
        <div class="actions">
            <a class="button" href="/venues/create">Post a venue</a>
            <a class="button" href="/artists/create">Post an artist</a>
            <a class="button" href="/shows/create">Post a show</a>
        </div>
    </section>"#,
    )
}
