use crate::ui::components::block_wrapper_class;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, cn, render_block_to_html};

/// Stats row, previewed exactly as it will appear in the exported email.
///
/// The markup comes from `render_block_to_html`, which escapes all block text,
/// and is injected as-is.
#[component]
pub fn Stats(block: Block, is_selected: bool, on_select: Option<Callback<BlockId>>) -> Element {
    let block_id = block.id;
    let html = render_block_to_html(&block);
    let class = cn!(block_wrapper_class(is_selected), "rounded-lg overflow-hidden");

    rsx! {
        div {
            class: "{class}",
            "data-block-id": "{block_id}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if let Some(on_select) = on_select {
                    on_select.call(block_id);
                }
            },
            dangerous_inner_html: "{html}",
        }
    }
}
