//! Labelled inputs for the inspector. Each one reports a parsed value, never raw text.

use dioxus::prelude::*;
use mailblocks_engine::{Align, cn};

#[component]
pub fn NumberField(label: String, value: u32, on_change: Callback<u32>) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "number",
                min: "0",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    // Ignore partial input such as an empty box
                    if let Ok(value) = evt.value().trim().parse::<u32>() {
                        on_change.call(value);
                    }
                },
            }
        }
    }
}

#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default)] multiline: bool,
    on_change: Callback<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            if multiline {
                textarea {
                    rows: "4",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            } else {
                input {
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            }
        }
    }
}

#[component]
pub fn ColorField(label: String, value: String, on_change: Callback<String>) -> Element {
    rsx! {
        label {
            class: "field field-color",
            span { class: "field-label", "{label}" }
            span { class: "color-swatch", style: "background-color: {value};" }
            input {
                r#type: "text",
                value: "{value}",
                oninput: move |evt: FormEvent| on_change.call(evt.value().trim().to_string()),
            }
        }
    }
}

#[component]
pub fn AlignField(label: String, value: Align, on_change: Callback<Align>) -> Element {
    let options = [Align::Left, Align::Center, Align::Right];

    rsx! {
        div {
            class: "field",
            span { class: "field-label", "{label}" }
            div {
                class: "align-options",
                for (align, name) in options.map(|align| (align, align.as_css())) {
                    button {
                        class: cn!("align-option", ("active", align == value)),
                        onclick: move |_| on_change.call(align),
                        "{name}"
                    }
                }
            }
        }
    }
}
