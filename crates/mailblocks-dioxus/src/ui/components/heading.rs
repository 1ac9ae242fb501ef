use crate::ui::components::block_wrapper_class;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, HeadingBlock};

#[component]
pub fn Heading(
    block: Block,
    heading: HeadingBlock,
    is_selected: bool,
    on_select: Option<Callback<BlockId>>,
) -> Element {
    let block_id = block.id;
    let style = format!(
        "margin: 0; padding: 8px 0; font-size: {}px; color: {}; text-align: {};",
        heading.font_size(),
        heading.color,
        heading.align.as_css()
    );
    let text = heading.text.clone();

    let content = match heading.level() {
        1 => rsx! { h1 { style: "{style}", "{text}" } },
        2 => rsx! { h2 { style: "{style}", "{text}" } },
        _ => rsx! { h3 { style: "{style}", "{text}" } },
    };

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
            {content}
        }
    }
}
