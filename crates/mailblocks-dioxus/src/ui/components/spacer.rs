use crate::ui::components::block_wrapper_class;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, SpacerBlock};

/// Empty vertical space. Drawn at least 10px tall so it can still be clicked.
#[component]
pub fn Spacer(
    block: Block,
    spacer: SpacerBlock,
    is_selected: bool,
    on_select: Option<Callback<BlockId>>,
) -> Element {
    let block_id = block.id;
    let height = spacer.display_height();
    let fill_style = format!(
        "height: {height}px; background-color: {};",
        spacer.background_color
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
            div {
                class: "spacer-fill",
                style: "{fill_style}",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use mailblocks_engine::BlockContent;

    fn render_spacer(height: u32, background_color: &str, is_selected: bool) -> String {
        let spacer = SpacerBlock {
            height,
            background_color: background_color.to_string(),
        };
        let block = Block::new(BlockContent::Spacer(spacer.clone()));
        let mut dom = VirtualDom::new_with_props(
            Spacer,
            SpacerProps {
                block,
                spacer,
                is_selected,
                on_select: None,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_small_selected_spacer_is_clamped_and_highlighted() {
        let html = render_spacer(4, "#fff", true);

        assert!(html.contains("height: 10px;"));
        assert!(html.contains("background-color: #fff;"));
        assert!(html.contains("block-selected"));
    }

    #[test]
    fn test_spacer_height_is_max_of_height_and_minimum() {
        for (height, expected) in [(0, 10), (9, 10), (10, 10), (11, 11), (64, 64)] {
            let html = render_spacer(height, "transparent", false);

            assert!(
                html.contains(&format!("height: {expected}px;")),
                "height {height} should render as {expected}px: {html}"
            );
            assert!(!html.contains("block-selected"));
        }
    }
}
