use crate::ui::components::button::Button;
use crate::ui::components::divider::Divider;
use crate::ui::components::heading::Heading;
use crate::ui::components::image::Image;
use crate::ui::components::spacer::Spacer;
use crate::ui::components::stats::Stats;
use crate::ui::components::text_block::TextBlockView;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockContent, BlockId};

/// Picks the renderer for a block's kind
#[component]
pub fn EmailBlock(block: Block, is_selected: bool, on_select: Callback<BlockId>) -> Element {
    let on_select = Some(on_select);

    match block.content.clone() {
        BlockContent::Heading(heading) => rsx! {
            Heading { block, heading, is_selected, on_select }
        },
        BlockContent::Text(text) => rsx! {
            TextBlockView { block, text, is_selected, on_select }
        },
        BlockContent::Button(button) => rsx! {
            Button { block, button, is_selected, on_select }
        },
        BlockContent::Image(image) => rsx! {
            Image { block, image, is_selected, on_select }
        },
        BlockContent::Divider(divider) => rsx! {
            Divider { block, divider, is_selected, on_select }
        },
        BlockContent::Spacer(spacer) => rsx! {
            Spacer { block, spacer, is_selected, on_select }
        },
        BlockContent::Stats(_) => rsx! {
            Stats { block, is_selected, on_select }
        },
    }
}
