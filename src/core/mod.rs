//! Core domain logic for the terminal typing demo

#[cfg(feature = "ssr")]
pub mod config;
mod script;
mod timeline;
mod typewriter;

pub use script::*;
pub use timeline::*;
pub use typewriter::*;
