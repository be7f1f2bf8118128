mod core;
mod keyboard;
mod pointer;
mod replay;
#[cfg(test)]
mod tests;

pub use core::ToolController;
pub use replay::{ReplayEvent, parse_script};
