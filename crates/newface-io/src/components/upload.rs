//! Background upload with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with the raw file bytes and filename after a file is read.
    on_upload: EventHandler<(Vec<u8>, String)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Only checks that a file was chosen; the format is left to the decoder
/// so its error can be shown. An empty selection is ignored. If a second
/// file is picked while the first is still being read, the first is
/// dropped.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pick = use_signal(|| 0u64);

    // Read and forward the first file from a list. Shared by the picker
    // and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        pick += 1;
        let my_pick = *pick.peek();
        let name = file.name();
        let read = file.read_bytes().await;
        if !is_latest_pick(*pick.peek(), my_pick) {
            return;
        }
        match read {
            Ok(bytes) => {
                filename.set(Some(name.clone()));
                error.set(None);
                props.on_upload.call((bytes.to_vec(), name));
            }
            Err(e) => {
                error.set(Some(format!("Failed to read file: {e}")));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let border_class = if dragging() {
        "border-(--border-accent) bg-(--surface-active)"
    } else {
        "border-(--border-muted) bg-(--surface)"
    };

    rsx! {
        div {
            class: "w-full max-w-md border-2 border-dashed rounded-lg p-6 text-center transition-colors {border_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref name) = filename() {
                p { class: "text-(--text-success) mb-2", "Loaded: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "text-(--text-error) mb-2", "{err}" }
            }

            p { class: "text-(--text-secondary) mb-3", "Drop a picture here or " }

            label {
                class: "inline-block px-4 py-2 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded cursor-pointer text-white font-medium transition-colors",
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose Image"
            }
        }
    }
}

/// Whether a read started as pick `mine` should still be reported, given
/// that `latest` picks have been made. Older reads, successful or not,
/// are dropped.
const fn is_latest_pick(latest: u64, mine: u64) -> bool {
    latest == mine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_pick_is_reported() {
        assert!(is_latest_pick(3, 3));
        assert!(!is_latest_pick(3, 2));
    }
}
