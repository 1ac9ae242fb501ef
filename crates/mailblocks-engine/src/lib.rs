pub mod blocks;
pub mod editing;
pub mod html;
pub mod io;
pub mod link;
pub mod models;
pub mod style;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::*;
pub use editing::{Cmd, EditError, Patch};
pub use html::{render_block_to_html, render_template_to_html};
pub use io::*;
pub use link::{Href, LinkError, Route};
pub use models::{Template, TemplateFile, TemplateSettings};
pub use style::{ClassValue, combine};
