//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with syntax highlighting and error markers
//! - [`output`]: Tabbed view of the compile report (diagnostics, tokens, tree,
//!   symbols, postfix, Python)
//! - [`status`]: Status bar with keybindings and the compile outcome
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! are owned by the [`App`](crate::ui::App) and passed in by reference.

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
