pub mod template;
pub mod template_file;

pub use template::{Template, TemplateSettings};
pub use template_file::TemplateFile;
