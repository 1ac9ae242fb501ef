use dioxus::prelude::*;
use mailblocks_engine::{BlockId, BlockKind, Cmd, cn};

/// Where a new block goes: right after the selected one, otherwise at the end
fn insert_index(selected_index: Option<usize>, block_count: usize) -> usize {
    selected_index.map_or(block_count, |index| index + 1)
}

#[component]
pub fn Toolbar(
    selected: Option<BlockId>,
    selected_index: Option<usize>,
    block_count: usize,
    dirty: bool,
    on_command: Callback<Cmd>,
    on_save: Callback<()>,
) -> Element {
    let index = insert_index(selected_index, block_count);
    let save_class = cn!("toolbar-button save-button", ("dirty", dirty));

    rsx! {
        div {
            class: "toolbar",
            div {
                class: "toolbar-group",
                for kind in BlockKind::ALL {
                    button {
                        class: "toolbar-button insert-button",
                        title: "Insert {kind}",
                        onclick: move |_| {
                            on_command.call(Cmd::InsertBlock {
                                index,
                                content: kind.default_content(),
                            });
                        },
                        "+ {kind}"
                    }
                }
            }
            if let (Some(id), Some(position)) = (selected, selected_index) {
                div {
                    class: "toolbar-group",
                    button {
                        class: "toolbar-button",
                        disabled: position == 0,
                        onclick: move |_| {
                            let to = position.saturating_sub(1);
                            on_command.call(Cmd::MoveBlock { id, to });
                        },
                        "Move up"
                    }
                    button {
                        class: "toolbar-button",
                        disabled: position + 1 >= block_count,
                        onclick: move |_| on_command.call(Cmd::MoveBlock { id, to: position + 1 }),
                        "Move down"
                    }
                    button {
                        class: "toolbar-button",
                        onclick: move |_| on_command.call(Cmd::DuplicateBlock { id }),
                        "Duplicate"
                    }
                    button {
                        class: "toolbar-button danger",
                        onclick: move |_| on_command.call(Cmd::RemoveBlock { id }),
                        "Remove"
                    }
                }
            }
            button {
                class: "{save_class}",
                onclick: move |_| on_save.call(()),
                if dirty { "Save *" } else { "Save" }
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
    fn ToolbarHarness(
        selected: Option<BlockId>,
        selected_index: Option<usize>,
        dirty: bool,
    ) -> Element {
        rsx! {
            Toolbar {
                selected,
                selected_index,
                block_count: 3,
                dirty,
                on_command: move |_: Cmd| {},
                on_save: move |_: ()| {},
            }
        }
    }

    fn render_toolbar(
        selected: Option<BlockId>,
        selected_index: Option<usize>,
        dirty: bool,
    ) -> String {
        let mut dom = VirtualDom::new_with_props(
            ToolbarHarness,
            ToolbarHarnessProps {
                selected,
                selected_index,
                dirty,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_insert_after_selection_or_at_end() {
        assert_eq!(insert_index(None, 4), 4);
        assert_eq!(insert_index(Some(0), 4), 1);
        assert_eq!(insert_index(Some(3), 4), 4);
    }

    #[test]
    fn test_block_actions_need_a_selection() {
        let html = render_toolbar(None, None, false);

        for kind in BlockKind::ALL {
            assert!(html.contains(&format!("+ {kind}")));
        }
        assert!(!html.contains("Duplicate"));
        assert!(!html.contains("Save *"));
    }

    #[test]
    fn test_selection_enables_block_actions() {
        let html = render_toolbar(Some(BlockId::new()), Some(1), true);

        assert!(html.contains("Move up"));
        assert!(html.contains("Duplicate"));
        assert!(html.contains("Remove"));
        assert!(html.contains("Save *"));
    }
}
