//! Image uploader.
//!
//! Files arrive through two surfaces (the file picker in the UI and window
//! drag-and-drop), both of which converge on a `SubmitFile` event and
//! therefore on the same validation and read path. Native surfaces hand over
//! a path; the web picker hands over the file name and its bytes.
//!
//! Reads run on the `IoTaskPool` and are polled once per frame. There is no
//! cancellation: every accepted read is applied when it completes, so the
//! read that finishes last wins.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future::{block_on, poll_once};
use bevy::window::FileDragAndDrop;

use crate::error::CustomizerError;
use crate::notifications::ToastEvent;
use crate::CustomizerSet;

// =============================================================================
// Content types and data URLs
// =============================================================================

const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a file, derived from its extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM;
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",
        _ => OCTET_STREAM,
    }
}

pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff", "svg", "avif",
];

pub fn encode_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", BASE64.encode(bytes))
}

/// Split a base64 data URL back into its content type and bytes.
pub fn decode_data_url(url: &str) -> Option<(&str, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let content_type = meta.strip_suffix(";base64")?;
    let bytes = BASE64.decode(payload).ok()?;
    Some((content_type, bytes))
}

/// Read a file into a data URL. Blocking; runs inside an IO task.
pub fn read_data_url(path: &Path, content_type: &str) -> Result<String, CustomizerError> {
    let bytes = std::fs::read(path)?;
    Ok(encode_data_url(content_type, &bytes))
}

// =============================================================================
// Events and resources
// =============================================================================

/// Submit a file for upload (file picker or drop).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SubmitFile {
    /// File path, or just the file name when `contents` is set. The content
    /// type is derived from its extension either way.
    pub path: PathBuf,
    /// Bytes already in memory; when `None` the file is read from `path`.
    pub contents: Option<Vec<u8>>,
}

impl SubmitFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: None,
        }
    }

    pub fn from_bytes(name: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: name.into(),
            contents: Some(bytes),
        }
    }
}

/// Clear the current upload.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RemoveImage;

/// The uploader's reported value: a data URL, or `None` after removal.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ImageReported(pub Option<String>);

#[derive(Resource, Debug, Default)]
pub struct UploadState {
    /// Local preview as a data URL.
    pub preview: Option<String>,
    /// File name of the current preview, for display.
    pub file_name: Option<String>,
    /// True while a file is being dragged over the window.
    pub drag_active: bool,
    /// Bumped whenever the file selection is reset.
    pub selection_generation: u64,
}

struct PendingRead {
    path: PathBuf,
    task: Task<Result<String, CustomizerError>>,
}

/// In-flight file reads, in submission order.
#[derive(Resource, Default)]
pub struct PendingReads {
    reads: Vec<PendingRead>,
}

impl PendingReads {
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Map window drag-and-drop events onto the uploader.
pub fn handle_file_drag_and_drop(
    mut drops: EventReader<FileDragAndDrop>,
    mut state: ResMut<UploadState>,
    mut submit: EventWriter<SubmitFile>,
) {
    for event in drops.read() {
        match event {
            FileDragAndDrop::HoveredFile { .. } => state.drag_active = true,
            FileDragAndDrop::HoveredFileCanceled { .. } => state.drag_active = false,
            FileDragAndDrop::DroppedFile { path_buf, .. } => {
                state.drag_active = false;
                submit.send(SubmitFile::from_path(path_buf.clone()));
            }
        }
    }
}

/// Validate submitted files and start reading the accepted ones.
pub fn start_file_reads(
    mut submissions: EventReader<SubmitFile>,
    mut pending: ResMut<PendingReads>,
    mut toasts: EventWriter<ToastEvent>,
) {
    let pool = IoTaskPool::get();
    for SubmitFile { path, contents } in submissions.read() {
        let content_type = content_type_for_path(path);
        if !is_image_content_type(content_type) {
            let err = CustomizerError::InvalidFileType {
                content_type: content_type.to_string(),
            };
            warn!("Rejected upload {} ({content_type})", path.display());
            toasts.send(ToastEvent::error(err.to_string()));
            continue;
        }

        let read_path = path.clone();
        let contents = contents.clone();
        let task = pool.spawn(async move {
            match contents {
                Some(bytes) => Ok(encode_data_url(content_type, &bytes)),
                None => read_data_url(&read_path, content_type),
            }
        });
        pending.reads.push(PendingRead {
            path: path.clone(),
            task,
        });
    }
}

/// Apply completed reads to the preview and report them to the form.
pub fn poll_file_reads(
    mut pending: ResMut<PendingReads>,
    mut state: ResMut<UploadState>,
    mut reports: EventWriter<ImageReported>,
    mut toasts: EventWriter<ToastEvent>,
) {
    if pending.reads.is_empty() {
        return;
    }

    let mut finished = Vec::new();
    pending.reads.retain_mut(|read| {
        match block_on(poll_once(&mut read.task)) {
            Some(result) => {
                finished.push((read.path.clone(), result));
                false
            }
            None => true,
        }
    });

    for (path, result) in finished {
        match result {
            Ok(url) => {
                info!("Loaded design image {} ({} bytes as data URL)", path.display(), url.len());
                state.preview = Some(url.clone());
                state.file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                reports.send(ImageReported(Some(url)));
            }
            Err(err) => {
                warn!("Failed to read {}: {err}", path.display());
                toasts.send(ToastEvent::error(err.to_string()));
            }
        }
    }
}

pub fn remove_image(
    mut requests: EventReader<RemoveImage>,
    mut state: ResMut<UploadState>,
    mut reports: EventWriter<ImageReported>,
) {
    for _ in requests.read() {
        state.preview = None;
        state.file_name = None;
        state.selection_generation += 1;
        reports.send(ImageReported(None));
    }
}

pub struct UploadPlugin;

impl Plugin for UploadPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FileDragAndDrop>()
            .add_event::<SubmitFile>()
            .add_event::<RemoveImage>()
            .add_event::<ImageReported>()
            .init_resource::<UploadState>()
            .init_resource::<PendingReads>()
            .add_systems(PreUpdate, handle_file_drag_and_drop)
            .add_systems(
                PostUpdate,
                (start_file_reads, poll_file_reads, remove_image)
                    .chain()
                    .in_set(CustomizerSet::Upload),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_images() {
        assert_eq!(content_type_for_path(Path::new("a.png")), "image/png");
        assert_eq!(content_type_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for_path(Path::new("dir/a.webp")), "image/webp");
    }

    #[test]
    fn test_content_type_for_non_images() {
        assert_eq!(content_type_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(content_type_for_path(Path::new("archive.zip")), OCTET_STREAM);
        assert_eq!(content_type_for_path(Path::new("no_extension")), OCTET_STREAM);
    }

    #[test]
    fn test_is_image_content_type() {
        assert!(is_image_content_type("image/png"));
        assert!(is_image_content_type("image/svg+xml"));
        assert!(!is_image_content_type("text/plain"));
        assert!(!is_image_content_type(OCTET_STREAM));
    }

    #[test]
    fn test_picker_extensions_are_all_images() {
        for ext in IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("file.{ext}"));
            assert!(
                is_image_content_type(content_type_for_path(&path)),
                "{ext} should map to an image type"
            );
        }
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(encode_data_url("image/gif", b""), "data:image/gif;base64,");
    }

    #[test]
    fn test_decode_data_url() {
        let (ct, bytes) = decode_data_url("data:image/png;base64,YWJj").unwrap();
        assert_eq!(ct, "image/png");
        assert_eq!(bytes, b"abc");
        assert!(decode_data_url("https://example.com/a.png").is_none());
        assert!(decode_data_url("data:image/png,plain").is_none());
    }

    #[test]
    fn test_read_data_url_missing_file() {
        let err = read_data_url(Path::new("/definitely/not/here.png"), "image/png").unwrap_err();
        assert!(matches!(err, CustomizerError::UploadRead(_)));
    }
}
