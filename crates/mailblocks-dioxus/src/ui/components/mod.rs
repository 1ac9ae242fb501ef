pub mod button;
pub mod canvas;
pub mod divider;
pub mod email_block;
pub mod error_screen;
pub mod fields;
pub mod heading;
pub mod image;
pub mod inspector;
pub mod spacer;
pub mod stats;
pub mod template_list;
pub mod text_block;
pub mod toolbar;
pub mod typed_link;

pub use canvas::Canvas;
pub use error_screen::ErrorScreen;
pub use inspector::Inspector;
pub use template_list::TemplateList;
pub use toolbar::Toolbar;

use mailblocks_engine::cn;

/// Classes marking a block as the current selection
pub const SELECTED_CLASSES: &str = "block-selected ring-2 ring-blue-500 ring-offset-2";

/// Class list for the element wrapping a rendered block
pub fn block_wrapper_class(is_selected: bool) -> String {
    cn!("email-block relative cursor-pointer", (SELECTED_CLASSES, is_selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_class_only_highlights_selected_blocks() {
        assert_eq!(
            block_wrapper_class(true),
            "email-block relative cursor-pointer block-selected ring-2 ring-blue-500 ring-offset-2"
        );
        assert_eq!(
            block_wrapper_class(false),
            "email-block relative cursor-pointer"
        );
    }
}
