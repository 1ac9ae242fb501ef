use dioxus::prelude::*;
use mailblocks_engine::{TemplateFile, cn};

/// Sidebar listing of the template files found in the templates folder
#[component]
pub fn TemplateList(
    files: Vec<TemplateFile>,
    selected_file: Option<TemplateFile>,
    on_file_select: EventHandler<TemplateFile>,
) -> Element {
    let entries: Vec<_> = files
        .into_iter()
        .map(|file| {
            let path = file.relative_path().to_string();
            let name = file.display_name().to_string();
            let is_selected = selected_file.as_ref() == Some(&file);
            (file, path, name, is_selected)
        })
        .collect();

    rsx! {
        nav {
            class: "template-list",
            if entries.is_empty() {
                p { class: "template-list-empty", "No templates found" }
            }
            for (file, path, name, is_selected) in entries {
                div {
                    key: "{path}",
                    class: cn!("template-item", ("selected", is_selected)),
                    title: "{path}",
                    onclick: move |_| on_file_select.call(file.clone()),
                    "{name}"
                }
            }
        }
    }
}
