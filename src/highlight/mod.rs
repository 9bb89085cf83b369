//! Syntax highlighting capability for published code snippets.
//!
//! The pipeline only talks to the `Highlighter` trait. Implementations:
//!
//! - `SyntectHighlighter`: in-process, bundled syntaxes and themes.
//! - `CommandHighlighter`: shells out to a configurable command.
//! - `MockHighlighter`: canned output for tests.

pub mod command;
pub mod mock;
pub mod syntax;
pub mod traits;

pub use command::CommandHighlighter;
pub use mock::{HighlightCall, MockHighlighter};
pub use syntax::{DEFAULT_THEME, SyntectHighlighter};
pub use traits::Highlighter;
