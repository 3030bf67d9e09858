#![forbid(unsafe_code)]

mod ansi;
mod plain;
mod renderer;

pub use ansi::AnsiRenderer;
pub use plain::PlainRenderer;
pub use renderer::{Renderer, ScoreReport};
