//! HTML and plain-text rendering of a generated résumé.

mod document;
mod text;

pub use document::{download_filename, plain_text, render_ats_tips, render_document, render_sections};
pub use text::{escape_html, format_text};
