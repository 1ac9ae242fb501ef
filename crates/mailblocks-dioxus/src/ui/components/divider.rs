use crate::ui::components::block_wrapper_class;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, DividerBlock};

/// Horizontal rule: `height` is the line thickness, `margin` the space above and below
#[component]
pub fn Divider(
    block: Block,
    divider: DividerBlock,
    is_selected: bool,
    on_select: Option<Callback<BlockId>>,
) -> Element {
    let block_id = block.id;
    let rule_style = format!(
        "border: none; border-top: {}px solid {}; margin: {}px 0;",
        divider.height, divider.color, divider.margin
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
            hr { style: "{rule_style}" }
        }
    }
}
