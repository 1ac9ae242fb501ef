use crate::ui::components::fields::{AlignField, ColorField, NumberField, TextField};
use dioxus::prelude::*;
use mailblocks_engine::{
    Align, Block, BlockContent, ButtonBlock, Cmd, DividerBlock, HeadingBlock, ImageBlock,
    SpacerBlock, StatItem, StatsBlock, TextBlock,
};

/// Attribute editor for the selected block. Every change is sent up as `Cmd::UpdateBlock`.
#[component]
pub fn Inspector(block: Option<Block>, on_command: Callback<Cmd>) -> Element {
    let Some(block) = block else {
        return rsx! {
            aside {
                class: "inspector",
                p { class: "inspector-empty", "Select a block to edit it." }
            }
        };
    };

    let id = block.id;
    let update =
        move |content: BlockContent| on_command.call(Cmd::UpdateBlock { id, content });
    let kind = block.kind();

    let editor = match block.content {
        BlockContent::Heading(heading) => heading_editor(heading, update),
        BlockContent::Text(text) => text_editor(text, update),
        BlockContent::Button(button) => button_editor(button, update),
        BlockContent::Image(image) => image_editor(image, update),
        BlockContent::Divider(divider) => divider_editor(divider, update),
        BlockContent::Spacer(spacer) => spacer_editor(spacer, update),
        BlockContent::Stats(stats) => stats_editor(stats, update),
    };

    rsx! {
        aside {
            class: "inspector",
            h2 { "{kind}" }
            {editor}
        }
    }
}

/// Handler that applies `change` to a copy of `current` and sends the result up
fn edit<T, V, U>(
    current: &T,
    update: U,
    wrap: fn(T) -> BlockContent,
    change: impl Fn(&mut T, V) + 'static,
) -> impl FnMut(V) + 'static
where
    T: Clone + 'static,
    U: Fn(BlockContent) + Copy + 'static,
{
    let current = current.clone();
    move |value| {
        let mut next = current.clone();
        change(&mut next, value);
        update(wrap(next));
    }
}

fn divider_editor<U>(divider: DividerBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Divider;
    rsx! {
        NumberField {
            label: "Thickness",
            value: divider.height,
            on_change: edit(&divider, update, wrap, |d, height: u32| d.height = height),
        }
        ColorField {
            label: "Color",
            value: divider.color.clone(),
            on_change: edit(&divider, update, wrap, |d, color: String| d.color = color),
        }
        NumberField {
            label: "Margin",
            value: divider.margin,
            on_change: edit(&divider, update, wrap, |d, margin: u32| d.margin = margin),
        }
    }
}

fn spacer_editor<U>(spacer: SpacerBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Spacer;
    rsx! {
        NumberField {
            label: "Height",
            value: spacer.height,
            on_change: edit(&spacer, update, wrap, |s, height: u32| s.height = height),
        }
        ColorField {
            label: "Background",
            value: spacer.background_color.clone(),
            on_change: edit(&spacer, update, wrap, |s, color: String| s.background_color = color),
        }
    }
}

fn stats_editor<U>(stats: StatsBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Stats;
    let title = stats.title.clone().unwrap_or_default();
    let items: Vec<(usize, StatItem)> = stats.items.iter().cloned().enumerate().collect();

    rsx! {
        TextField {
            label: "Title",
            value: title,
            on_change: edit(&stats, update, wrap, |s, title: String| {
                s.title = (!title.trim().is_empty()).then_some(title);
            }),
        }
        for (index, item) in items {
            div {
                key: "{index}",
                class: "stat-item-editor",
                TextField {
                    label: format!("Value {}", index + 1),
                    value: item.value.clone(),
                    on_change: edit(&stats, update, wrap, move |s, value: String| {
                        s.items[index].value = value;
                    }),
                }
                TextField {
                    label: format!("Label {}", index + 1),
                    value: item.label.clone(),
                    on_change: edit(&stats, update, wrap, move |s, label: String| {
                        s.items[index].label = label;
                    }),
                }
                button {
                    class: "remove-stat",
                    onclick: edit(&stats, update, wrap, move |s, _: MouseEvent| {
                        s.items.remove(index);
                    }),
                    "Remove"
                }
            }
        }
        button {
            class: "add-stat",
            onclick: edit(&stats, update, wrap, |s, _: MouseEvent| {
                s.items.push(StatItem::new("0", "New stat"));
            }),
            "Add stat"
        }
        ColorField {
            label: "Accent",
            value: stats.accent_color.clone(),
            on_change: edit(&stats, update, wrap, |s, color: String| s.accent_color = color),
        }
        ColorField {
            label: "Background",
            value: stats.background_color.clone(),
            on_change: edit(&stats, update, wrap, |s, color: String| s.background_color = color),
        }
    }
}

fn heading_editor<U>(heading: HeadingBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Heading;
    rsx! {
        TextField {
            label: "Text",
            value: heading.text.clone(),
            on_change: edit(&heading, update, wrap, |h, text: String| h.text = text),
        }
        NumberField {
            label: "Level (1-3)",
            value: u32::from(heading.level()),
            on_change: edit(&heading, update, wrap, |h, level: u32| {
                h.level = level.clamp(1, 3) as u8;
            }),
        }
        AlignField {
            label: "Align",
            value: heading.align,
            on_change: edit(&heading, update, wrap, |h, align: Align| h.align = align),
        }
        ColorField {
            label: "Color",
            value: heading.color.clone(),
            on_change: edit(&heading, update, wrap, |h, color: String| h.color = color),
        }
    }
}

fn text_editor<U>(text: TextBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Text;
    rsx! {
        TextField {
            label: "Text",
            value: text.text.clone(),
            multiline: true,
            on_change: edit(&text, update, wrap, |t, value: String| t.text = value),
        }
        NumberField {
            label: "Font size",
            value: text.font_size,
            on_change: edit(&text, update, wrap, |t, size: u32| t.font_size = size),
        }
        AlignField {
            label: "Align",
            value: text.align,
            on_change: edit(&text, update, wrap, |t, align: Align| t.align = align),
        }
        ColorField {
            label: "Color",
            value: text.color.clone(),
            on_change: edit(&text, update, wrap, |t, color: String| t.color = color),
        }
    }
}

fn button_editor<U>(button: ButtonBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Button;
    rsx! {
        TextField {
            label: "Label",
            value: button.label.clone(),
            on_change: edit(&button, update, wrap, |b, label: String| b.label = label),
        }
        TextField {
            label: "Link",
            value: button.href.clone(),
            on_change: edit(&button, update, wrap, |b, href: String| b.href = href),
        }
        ColorField {
            label: "Background",
            value: button.background_color.clone(),
            on_change: edit(&button, update, wrap, |b, color: String| b.background_color = color),
        }
        ColorField {
            label: "Text color",
            value: button.text_color.clone(),
            on_change: edit(&button, update, wrap, |b, color: String| b.text_color = color),
        }
        AlignField {
            label: "Align",
            value: button.align,
            on_change: edit(&button, update, wrap, |b, align: Align| b.align = align),
        }
    }
}

fn image_editor<U>(image: ImageBlock, update: U) -> Element
where
    U: Fn(BlockContent) + Copy + 'static,
{
    let wrap = BlockContent::Image;
    rsx! {
        TextField {
            label: "Image URL",
            value: image.src.clone(),
            on_change: edit(&image, update, wrap, |i, src: String| i.src = src),
        }
        TextField {
            label: "Alt text",
            value: image.alt.clone(),
            on_change: edit(&image, update, wrap, |i, alt: String| i.alt = alt),
        }
        NumberField {
            label: "Width (0 = natural)",
            value: image.width.unwrap_or(0),
            on_change: edit(&image, update, wrap, |i, width: u32| {
                i.width = (width > 0).then_some(width);
            }),
        }
        TextField {
            label: "Link",
            value: image.href.clone().unwrap_or_default(),
            on_change: edit(&image, update, wrap, |i, href: String| {
                i.href = (!href.trim().is_empty()).then_some(href);
            }),
        }
        AlignField {
            label: "Align",
            value: image.align,
            on_change: edit(&image, update, wrap, |i, align: Align| i.align = align),
        }
    }
}
