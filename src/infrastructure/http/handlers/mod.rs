//! HTTP Handlers

mod ping;
mod team;

pub use ping::*;
pub use team::*;
