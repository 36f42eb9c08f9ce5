//! Form submission.
//!
//! A valid record is logged as JSON and broadcast as `FormSubmitted`. Nothing
//! is sent anywhere or stored.

use bevy::prelude::*;

use crate::error::CustomizerError;
use crate::form::{mirror_reported_image, FieldHints, FormState};
use crate::notifications::ToastEvent;
use crate::upload::UploadState;
use crate::CustomizerSet;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "T-shirt customization form submitted successfully, \
     Please check the console for the submitted data.";

/// Submit the form ("Add to Cart").
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SubmitForm;

/// A validated record handed to the submission sink.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FormSubmitted(pub FormState);

fn is_falsy(value: f32) -> bool {
    value == 0.0 || value.is_nan()
}

/// Names of the fields that are missing, in form order.
pub fn missing_fields(form: &FormState, uploaded: Option<&str>) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if is_falsy(form.height) {
        missing.push("height");
    }
    if is_falsy(form.weight) {
        missing.push("weight");
    }
    let has_image = form.image_data_url.as_deref().is_some_and(|url| !url.is_empty())
        || uploaded.is_some_and(|url| !url.is_empty());
    if !has_image {
        missing.push("image");
    }
    if form.custom_text.is_empty() {
        missing.push("customText");
    }
    missing
}

/// Validate the form and build the record to submit.
///
/// `uploaded` is the uploader's local preview; it counts as the image even if
/// it has not been mirrored into the form yet.
pub fn validate_submission(
    form: &FormState,
    uploaded: Option<&str>,
) -> Result<FormState, CustomizerError> {
    if !missing_fields(form, uploaded).is_empty() {
        return Err(CustomizerError::IncompleteSubmission);
    }
    let mut record = form.clone();
    if record.image_data_url.is_none() {
        record.image_data_url = uploaded.map(str::to_string);
    }
    Ok(record)
}

pub fn handle_submit_form(
    mut requests: EventReader<SubmitForm>,
    form: Res<FormState>,
    upload: Res<UploadState>,
    mut submitted: EventWriter<FormSubmitted>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for _ in requests.read() {
        match validate_submission(&form, upload.preview.as_deref()) {
            Ok(record) => {
                match serde_json::to_string(&record) {
                    Ok(json) => info!("Submitted customization: {json}"),
                    Err(e) => warn!("Submitted customization (not serializable: {e}): {record:?}"),
                }
                submitted.send(FormSubmitted(record));
                toasts.send(ToastEvent::success(SUBMIT_SUCCESS_MESSAGE));
            }
            Err(err) => {
                warn!(
                    "Submission rejected, missing: {}",
                    missing_fields(&form, upload.preview.as_deref()).join(", ")
                );
                toasts.send(ToastEvent::error(err.to_string()));
            }
        }
    }
}

pub struct SubmissionPlugin;

impl Plugin for SubmissionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FormState>()
            .init_resource::<FieldHints>()
            .add_event::<SubmitForm>()
            .add_event::<FormSubmitted>()
            .add_systems(
                PostUpdate,
                (mirror_reported_image, handle_submit_form)
                    .chain()
                    .in_set(CustomizerSet::Form),
            );
    }
}
