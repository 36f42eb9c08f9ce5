use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod form;
pub mod notifications;
pub mod preview;
pub mod submission;
pub mod theme;
pub mod upload;

#[cfg(test)]
pub mod test_harness;

/// Ordering of the customizer's `PostUpdate` work: uploads settle first, then
/// the form consumes their reports, then toasts are collected.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizerSet {
    Upload,
    Form,
    Notify,
}

/// Everything the customizer needs except drawing: theme store, form state,
/// image uploader, submission and toasts.
pub struct CustomizerPlugin;

impl Plugin for CustomizerPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            (
                CustomizerSet::Upload,
                CustomizerSet::Form,
                CustomizerSet::Notify,
            )
                .chain(),
        );

        app.add_plugins((
            theme::ThemePlugin,
            notifications::NotificationsPlugin,
            upload::UploadPlugin,
            submission::SubmissionPlugin,
        ));
    }
}
