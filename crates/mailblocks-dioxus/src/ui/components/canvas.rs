use crate::ui::components::email_block::EmailBlock;
use dioxus::prelude::*;
use mailblocks_engine::{BlockId, Template, cn};

/// The email as it is being built: every block in order, at the template's width
#[component]
pub fn Canvas(
    template: Template,
    selected: Option<BlockId>,
    show_outlines: bool,
    on_select: Callback<BlockId>,
) -> Element {
    let settings = template.settings().clone();
    let class = cn!("canvas", ("canvas-outlines", show_outlines));
    let blocks: Vec<_> = template
        .blocks()
        .iter()
        .map(|block| (block.clone(), selected == Some(block.id)))
        .collect();

    rsx! {
        div {
            class: "{class}",
            style: "background-color: {settings.background_color};",
            div {
                class: "email-body",
                style: "width: {settings.width}px; background-color: {settings.content_background_color}; font-family: {settings.font_family};",
                if blocks.is_empty() {
                    div {
                        class: "canvas-empty",
                        "This template has no blocks yet. Add one from the toolbar."
                    }
                }
                for (block, is_selected) in blocks {
                    EmailBlock {
                        key: "{block.id}",
                        block,
                        is_selected,
                        on_select
                    }
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

    #[component]
    fn CanvasHarness(template: Template, selected: Option<BlockId>) -> Element {
        rsx! {
            Canvas { template, selected, show_outlines: false, on_select: move |_: BlockId| {} }
        }
    }

    fn render_canvas(template: Template, selected: Option<BlockId>) -> String {
        let mut dom =
            VirtualDom::new_with_props(CanvasHarness, CanvasHarnessProps { template, selected });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_empty_template_shows_hint() {
        let html = render_canvas(Template::new("Blank"), None);

        assert!(html.contains("no blocks yet"));
        assert!(html.contains("width: 600px;"));
    }

    #[test]
    fn test_only_selected_block_is_highlighted() {
        let template = Template::starter("Weekly");
        let selected = template.blocks()[2].id;

        let html = render_canvas(template.clone(), Some(selected));

        assert_eq!(html.matches("block-selected").count(), 1);
        for block in template.blocks() {
            assert!(html.contains(&block.id.to_string()));
        }
    }
}
