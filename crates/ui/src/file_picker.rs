//! Design-image picker behind the "click to upload" zone.
//!
//! Native builds open a blocking `rfd` dialog and hand the chosen path to the
//! uploader. The web build has no file paths: the async dialog runs on the
//! `IoTaskPool` and the picked file's name and bytes are forwarded once the
//! task completes.

use bevy::prelude::*;

use customizer::upload::{SubmitFile, IMAGE_EXTENSIONS};
use customizer::CustomizerSet;

const PICKER_TITLE: &str = "Choose a design";
const PICKER_FILTER: &str = "Image";

/// Ask for the file dialog (sent by the upload zone).
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct OpenFilePicker;

#[cfg(not(target_arch = "wasm32"))]
pub fn open_file_picker(
    mut requests: EventReader<OpenFilePicker>,
    mut submit: EventWriter<SubmitFile>,
) {
    for _ in requests.read() {
        let picked = rfd::FileDialog::new()
            .set_title(PICKER_TITLE)
            .add_filter(PICKER_FILTER, IMAGE_EXTENSIONS)
            .pick_file();
        match picked {
            Some(path) => {
                submit.send(SubmitFile::from_path(path));
            }
            None => debug!("File picker closed without a selection"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{open_file_picker, poll_file_pick, PendingPick};

#[cfg(target_arch = "wasm32")]
mod web {
    use bevy::prelude::*;
    use bevy::tasks::{IoTaskPool, Task};
    use futures_lite::future::{block_on, poll_once};

    use super::{OpenFilePicker, SubmitFile, IMAGE_EXTENSIONS, PICKER_FILTER, PICKER_TITLE};

    /// The dialog currently open, if any.
    #[derive(Resource, Default)]
    pub struct PendingPick {
        task: Option<Task<Option<SubmitFile>>>,
    }

    pub fn open_file_picker(
        mut requests: EventReader<OpenFilePicker>,
        mut pending: ResMut<PendingPick>,
    ) {
        for _ in requests.read() {
            if pending.task.is_some() {
                continue;
            }
            let dialog = rfd::AsyncFileDialog::new()
                .set_title(PICKER_TITLE)
                .add_filter(PICKER_FILTER, IMAGE_EXTENSIONS);
            pending.task = Some(IoTaskPool::get().spawn(async move {
                let handle = dialog.pick_file().await?;
                let name = handle.file_name();
                let bytes = handle.read().await;
                Some(SubmitFile::from_bytes(name, bytes))
            }));
        }
    }

    pub fn poll_file_pick(mut pending: ResMut<PendingPick>, mut submit: EventWriter<SubmitFile>) {
        let Some(task) = pending.task.as_mut() else {
            return;
        };
        let Some(picked) = block_on(poll_once(task)) else {
            return;
        };
        pending.task = None;
        match picked {
            Some(file) => {
                submit.send(file);
            }
            None => debug!("File picker closed without a selection"),
        }
    }
}

pub struct FilePickerPlugin;

impl Plugin for FilePickerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OpenFilePicker>();

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            PostUpdate,
            open_file_picker.before(CustomizerSet::Upload),
        );

        #[cfg(target_arch = "wasm32")]
        app.init_resource::<PendingPick>()
            .add_systems(
                PostUpdate,
                (open_file_picker, poll_file_pick)
                    .chain()
                    .before(CustomizerSet::Upload),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_registers_request_event() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<SubmitFile>()
            .add_plugins(FilePickerPlugin);
        app.update();
        assert!(app.world().contains_resource::<Events<OpenFilePicker>>());
    }
}
