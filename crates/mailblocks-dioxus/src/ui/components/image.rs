use crate::ui::components::block_wrapper_class;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, ImageBlock};

#[component]
pub fn Image(
    block: Block,
    image: ImageBlock,
    is_selected: bool,
    on_select: Option<Callback<BlockId>>,
) -> Element {
    let block_id = block.id;
    let width = image
        .width
        .map(|width| format!("width: {width}px; max-width: 100%;"))
        .unwrap_or_else(|| "max-width: 100%;".to_string());
    let align = image.align.as_css();

    rsx! {
        div {
            class: block_wrapper_class(is_selected),
            "data-block-id": "{block_id}",
            style: "text-align: {align};",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if let Some(on_select) = on_select {
                    on_select.call(block_id);
                }
            },
            if image.src.is_empty() {
                div { class: "image-placeholder", "No image selected" }
            } else {
                img {
                    src: "{image.src}",
                    alt: "{image.alt}",
                    style: "display: inline-block; {width}",
                }
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

    fn render_image(image: ImageBlock) -> String {
        let block = Block::new(BlockContent::Image(image.clone()));
        let mut dom = VirtualDom::new_with_props(
            Image,
            ImageProps {
                block,
                image,
                is_selected: false,
                on_select: None,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_missing_source_shows_placeholder() {
        let html = render_image(ImageBlock::default());

        assert!(html.contains("No image selected"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_image_with_width() {
        let html = render_image(ImageBlock {
            src: "https://example.com/hero.png".to_string(),
            alt: "Hero".to_string(),
            width: Some(320),
            ..Default::default()
        });

        assert!(html.contains(r#"src="https://example.com/hero.png""#));
        assert!(html.contains("width: 320px;"));
    }
}
