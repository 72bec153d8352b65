//! HTTP handlers for fyyur-web

pub mod artists;
pub mod assets;
pub mod errors;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use assets::{serve_css, serve_js};
pub use errors::{handle_panic, not_found};
pub use health::health_routes;
pub use home::index;
