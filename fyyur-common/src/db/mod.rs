//! Database models and queries
//!
//! Reads take the pool directly. Every write runs inside its own
//! transaction: it is committed on success, and dropping it on an early
//! `?` return rolls it back and releases the connection.

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use models::*;
