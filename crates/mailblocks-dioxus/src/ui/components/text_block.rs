use crate::ui::components::block_wrapper_class;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, TextBlock};

#[component]
pub fn TextBlockView(
    block: Block,
    text: TextBlock,
    is_selected: bool,
    on_select: Option<Callback<BlockId>>,
) -> Element {
    let block_id = block.id;
    let style = format!(
        "margin: 0; padding: 8px 0; white-space: pre-wrap; font-size: {}px; color: {}; text-align: {};",
        text.font_size,
        text.color,
        text.align.as_css()
    );

    rsx! {
        div {
            class: block_wrapper_class(is_selected),
            "data-block-id": "{block_id}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if let Some(on_select) = on_select {
                    on_select.call(block_id);
                }
            },
            p { style: "{style}", "{text.text}" }
        }
    }
}
