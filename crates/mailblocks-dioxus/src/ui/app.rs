use crate::ui::components::{Canvas, ErrorScreen, Inspector, TemplateList, Toolbar};
use dioxus::prelude::*;
use mailblocks_config::EditorConfig;
use mailblocks_engine::{BlockId, Cmd, EditError, Template, TemplateFile, TemplateSettings, io};
use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

const EDITOR_CSS: &str = include_str!("../assets/editor.css");

/// Title, message and details shown in place of the editor
#[derive(Debug, Clone, PartialEq)]
struct AppError {
    title: String,
    message: String,
    details: Option<String>,
}

impl AppError {
    fn new(title: &str, message: String, details: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            message,
            details: Some(details.to_string()),
        }
    }
}

/// Applies `cmd` and returns the block that should be selected afterwards.
/// Commands that touch no block keep the current selection.
fn apply_command(
    template: &mut Template,
    selected: Option<BlockId>,
    cmd: Cmd,
) -> Result<Option<BlockId>, EditError> {
    let patch = template.apply(cmd)?;
    if patch.changed.is_empty() {
        Ok(selected)
    } else {
        Ok(patch.selection)
    }
}

/// First `untitled.json`, `untitled-2.json`, ... not already taken
fn next_untitled_path(files: &[TemplateFile]) -> RelativePathBuf {
    (1..)
        .map(|n| match n {
            1 => RelativePathBuf::from("untitled.json"),
            n => RelativePathBuf::from(format!("untitled-{n}.json")),
        })
        .find(|candidate| !files.iter().any(|f| f.relative_path() == candidate.as_relative_path()))
        .unwrap_or_else(|| RelativePathBuf::from("untitled.json"))
}

fn load_files(templates_path: &Path) -> Vec<TemplateFile> {
    match io::list_template_files(templates_path) {
        Ok(files) => files,
        Err(e) => {
            log::error!("Error listing templates in {}: {e}", templates_path.display());
            Vec::new()
        }
    }
}

#[component]
pub fn App(templates_path: PathBuf, editor: EditorConfig) -> Element {
    let mut files = use_signal({
        let templates_path = templates_path.clone();
        move || load_files(&templates_path)
    });
    let mut selected_file = use_signal(|| None::<TemplateFile>);
    let mut template = use_signal(|| None::<Template>);
    let mut selected_block = use_signal(|| None::<BlockId>);
    let mut dirty = use_signal(|| false);
    let mut error = use_signal(|| None::<AppError>);

    let on_command = Callback::new(move |cmd: Cmd| {
        let mut guard = template.write();
        let Some(current) = guard.as_mut() else {
            return;
        };
        let selection = *selected_block.peek();
        match apply_command(current, selection, cmd) {
            Ok(selection) => {
                selected_block.set(selection);
                dirty.set(true);
            }
            Err(e) => log::warn!("Edit rejected: {e}"),
        }
    });

    let on_save = Callback::new({
        let templates_path = templates_path.clone();
        move |_: ()| {
            let file = selected_file.peek().clone();
            let current = template.peek().clone();
            let (Some(file), Some(current)) = (file, current) else {
                return;
            };
            match io::write_template(file.relative_path(), &templates_path, &current) {
                Ok(()) => {
                    log::info!("Saved {}", file.relative_path());
                    dirty.set(false);
                }
                Err(e) => {
                    log::error!("Error saving {}: {e}", file.relative_path());
                    error.set(Some(AppError::new(
                        "Save failed",
                        format!("Could not write {}", file.relative_path()),
                        e,
                    )));
                }
            }
        }
    });

    let on_file_select = {
        let templates_path = templates_path.clone();
        move |file: TemplateFile| match io::read_template(file.relative_path(), &templates_path) {
            Ok(loaded) => {
                template.set(Some(loaded));
                selected_file.set(Some(file));
                selected_block.set(None);
                dirty.set(false);
                error.set(None);
            }
            Err(e) => {
                log::error!("Error opening {}: {e}", file.relative_path());
                error.set(Some(AppError::new(
                    "Cannot open template",
                    format!("{} could not be loaded", file.relative_path()),
                    e,
                )));
            }
        }
    };

    let on_new_template = {
        let templates_path = templates_path.clone();
        let email_width = editor.email_width;
        move |_: MouseEvent| {
            let path = next_untitled_path(&files.peek());
            let created = Template::starter("Untitled").with_settings(TemplateSettings {
                width: email_width,
                ..TemplateSettings::default()
            });
            match io::write_template(&path, &templates_path, &created) {
                Ok(()) => {
                    files.set(load_files(&templates_path));
                    template.set(Some(created));
                    selected_file.set(Some(TemplateFile::new(path)));
                    selected_block.set(None);
                    dirty.set(false);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Error creating {path}: {e}");
                    error.set(Some(AppError::new(
                        "Cannot create template",
                        format!("Could not write {path}"),
                        e,
                    )));
                }
            }
        }
    };

    let current = template.read().clone();
    let selected = selected_block();
    let selected_index = current
        .as_ref()
        .and_then(|t| t.blocks().iter().position(|b| Some(b.id) == selected));
    let block_count = current.as_ref().map_or(0, |t| t.blocks().len());
    let inspected = current
        .as_ref()
        .zip(selected)
        .and_then(|(t, id)| t.block(id).cloned());

    rsx! {
        style { {EDITOR_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Templates" }
                button {
                    class: "toolbar-button new-template",
                    onclick: on_new_template,
                    "New template"
                }
                TemplateList {
                    files: files(),
                    selected_file: selected_file(),
                    on_file_select
                }
            }
            div {
                class: "main-content",
                if let Some(app_error) = error() {
                    ErrorScreen {
                        title: app_error.title,
                        message: app_error.message,
                        details: app_error.details
                    }
                } else if let Some(current) = current {
                    Toolbar {
                        selected,
                        selected_index,
                        block_count,
                        dirty: dirty(),
                        on_command,
                        on_save
                    }
                    div {
                        class: "workspace",
                        Canvas {
                            template: current,
                            selected,
                            show_outlines: editor.show_block_outlines,
                            on_select: move |id: BlockId| selected_block.set(Some(id))
                        }
                        Inspector { block: inspected, on_command }
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "mailblocks" }
                        p { "Select a template from the sidebar, or create a new one." }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_engine::{BlockContent, BlockKind, DividerBlock};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_keeps_updated_block_selected() {
        let mut template = Template::starter("Weekly");
        let id = template.blocks()[2].id;

        let selection = apply_command(
            &mut template,
            Some(id),
            Cmd::UpdateBlock {
                id,
                content: BlockContent::Divider(DividerBlock {
                    height: 4,
                    ..Default::default()
                }),
            },
        )
        .unwrap();

        assert_eq!(selection, Some(id));
    }

    #[test]
    fn test_settings_change_keeps_selection() {
        let mut template = Template::starter("Weekly");
        let id = template.blocks()[0].id;

        let selection = apply_command(
            &mut template,
            Some(id),
            Cmd::UpdateSettings {
                settings: TemplateSettings {
                    width: 480,
                    ..Default::default()
                },
            },
        )
        .unwrap();

        assert_eq!(selection, Some(id));
        assert_eq!(template.settings().width, 480);
    }

    #[test]
    fn test_remove_moves_selection_to_neighbour() {
        let mut template = Template::starter("Weekly");
        let removed = template.blocks()[1].id;
        let next = template.blocks()[2].id;

        let selection =
            apply_command(&mut template, Some(removed), Cmd::RemoveBlock { id: removed }).unwrap();

        assert_eq!(selection, Some(next));
    }

    #[test]
    fn test_rejected_command_is_reported() {
        let mut template = Template::new("Empty");
        let version = template.version();

        let result = apply_command(
            &mut template,
            None,
            Cmd::InsertBlock {
                index: 0,
                content: BlockKind::Spacer.default_content(),
            },
        )
        .and_then(|inserted| {
            let id = inserted.unwrap();
            apply_command(
                &mut template,
                Some(id),
                Cmd::UpdateBlock {
                    id,
                    content: BlockKind::Text.default_content(),
                },
            )
        });

        assert!(matches!(result, Err(EditError::KindMismatch { .. })));
        assert_eq!(template.version(), version + 1);
    }

    #[test]
    fn test_next_untitled_path_skips_taken_names() {
        assert_eq!(next_untitled_path(&[]), RelativePathBuf::from("untitled.json"));

        let taken = vec![
            TemplateFile::new(RelativePathBuf::from("untitled.json")),
            TemplateFile::new(RelativePathBuf::from("untitled-2.json")),
            TemplateFile::new(RelativePathBuf::from("welcome.json")),
        ];
        assert_eq!(
            next_untitled_path(&taken),
            RelativePathBuf::from("untitled-3.json")
        );
    }

    #[test]
    fn test_load_files_of_missing_folder_is_empty() {
        assert!(load_files(Path::new("/this/path/does/not/exist")).is_empty());
    }
}
