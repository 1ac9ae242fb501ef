use crate::ui::components::block_wrapper_class;
use crate::ui::components::typed_link::TypedLink;
use dioxus::prelude::*;
use mailblocks_engine::{Block, BlockId, ButtonBlock, Href};

#[component]
pub fn Button(
    block: Block,
    button: ButtonBlock,
    is_selected: bool,
    on_select: Option<Callback<BlockId>>,
) -> Element {
    let block_id = block.id;
    let align = button.align.as_css();
    let button_style = format!(
        "display: inline-block; padding: 12px 24px; border-radius: 6px; font-weight: 600; text-decoration: none; background-color: {}; color: {};",
        button.background_color, button.text_color
    );
    let label = button.label.clone();

    let content = match Href::parse(&button.href) {
        Ok(to) => rsx! {
            TypedLink { to, class: "email-button".to_string(), style: button_style, "{label}" }
        },
        Err(e) => {
            log::debug!("button {block_id} has no usable link: {e}");
            rsx! {
                span {
                    class: "email-button email-button-unlinked",
                    title: "{e}",
                    style: "{button_style}",
                    "{label}"
                }
            }
        }
    };

    rsx! {
        div {
            class: block_wrapper_class(is_selected),
            "data-block-id": "{block_id}",
            style: "padding: 8px 0; text-align: {align};",
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

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use mailblocks_engine::BlockContent;

    fn render_button(href: &str) -> String {
        let button = ButtonBlock {
            label: "Shop now".to_string(),
            href: href.to_string(),
            ..Default::default()
        };
        let block = Block::new(BlockContent::Button(button.clone()));
        let mut dom = VirtualDom::new_with_props(
            Button,
            ButtonProps {
                block,
                button,
                is_selected: false,
                on_select: None,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_valid_link_renders_anchor() {
        let html = render_button("https://shop.example.com");

        assert!(html.contains("<a"));
        assert!(html.contains(r#"href="https://shop.example.com""#));
        assert!(html.contains("Shop now"));
    }

    #[test]
    fn test_unsupported_link_renders_plain_label() {
        let html = render_button("javascript:alert(1)");

        assert!(!html.contains("<a"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("email-button-unlinked"));
        assert!(html.contains("Shop now"));
    }
}
