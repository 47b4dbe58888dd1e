pub mod icon;
pub mod pages;
pub mod terminal_demo;

pub use icon::{Icon, icons};
pub use terminal_demo::TerminalDemo;
