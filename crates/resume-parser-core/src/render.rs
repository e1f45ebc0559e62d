//! Pure mapping from workflow state to a render description.
//!
//! [`present`] decides which panels exist, which controls are enabled and
//! what text they show. Front ends draw the returned [`RenderModel`] and
//! never read the workflow's fields directly.

use crate::fields::ExtractedFields;
use crate::submission::SubmissionState;
use crate::workflow::Workflow;

pub const TITLE: &str = "Resume Parser";
pub const SUBTITLE: &str = "Extract key information from your resume in seconds";
pub const FOOTER: &str = "Resume Parser \u{b7} Extract resume data with precision";

pub const UPLOAD_HEADING: &str = "Upload Your Resume";
pub const DROP_PLACEHOLDER: &str = "Drag & drop your resume or click to browse";
pub const DROP_HINT: &str = "Supported format: PDF";

pub const PREVIEW_LABEL: &str = "Preview";
pub const HIDE_PREVIEW_LABEL: &str = "Hide Preview";
pub const PREVIEW_FALLBACK: &str = "Unable to display PDF. You can download it instead.";

pub const SUBMIT_LABEL: &str = "Extract Information";
pub const SUBMITTING_LABEL: &str = "Analyzing Resume...";

pub const RESULT_HEADING: &str = "Resume Information";
pub const LOADING_TEXT: &str = "Processing your resume...";
pub const EMPTY_TITLE: &str = "Upload a resume to view extracted information";
pub const EMPTY_SUBTITLE: &str = "We'll analyze your resume and display the key details here";

/// Placeholder for an absent or empty field.
pub const MISSING_VALUE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub drop_zone: DropZoneView,
    /// Present only while a document is selected.
    pub preview_toggle: Option<PreviewToggleView>,
    /// Present only when the toggle is on and a preview handle exists.
    pub preview: Option<PreviewView>,
    pub submit: SubmitView,
    pub result: ResultPanel,
    /// Present iff an error message is set.
    pub error_banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneView {
    /// File name of the selection, or the placeholder prompt.
    pub label: String,
    pub hint: &'static str,
    pub has_selection: bool,
    /// A drag is hovering over the zone.
    pub drag_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewToggleView {
    pub label: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: usize,
    /// Location of the local copy; doubles as the fallback link.
    pub url: String,
    pub fallback: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub label: &'static str,
    pub enabled: bool,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPanel {
    Loading { message: &'static str },
    Fields(Vec<FieldRow>),
    Empty { title: &'static str, subtitle: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
}

impl FieldRow {
    pub fn is_missing(&self) -> bool {
        self.value == MISSING_VALUE
    }
}

/// Map the current workflow state to what should be drawn.
pub fn present(workflow: &Workflow) -> RenderModel {
    let selection = workflow.selection();
    let in_flight = workflow.submission().is_in_flight();

    let drop_zone = DropZoneView {
        label: selection
            .map(|s| s.document.name.clone())
            .unwrap_or_else(|| DROP_PLACEHOLDER.to_string()),
        hint: DROP_HINT,
        has_selection: selection.is_some(),
        drag_active: workflow.drag_active(),
    };

    let preview_toggle = selection.map(|_| PreviewToggleView {
        label: if workflow.preview_visible() {
            HIDE_PREVIEW_LABEL
        } else {
            PREVIEW_LABEL
        },
        expanded: workflow.preview_visible(),
    });

    let preview = match (workflow.preview_visible(), workflow.preview_handle(), selection) {
        (true, Some(handle), Some(sel)) => Some(PreviewView {
            file_name: sel.document.name.clone(),
            media_type: sel.document.media_type.clone(),
            size_bytes: sel.document.len(),
            url: handle.url().to_string(),
            fallback: PREVIEW_FALLBACK,
        }),
        _ => None,
    };

    let submit = SubmitView {
        label: if in_flight { SUBMITTING_LABEL } else { SUBMIT_LABEL },
        enabled: !in_flight,
        busy: in_flight,
    };

    RenderModel {
        drop_zone,
        preview_toggle,
        preview,
        submit,
        result: result_panel(workflow.submission()),
        error_banner: workflow.error().map(str::to_string),
    }
}

fn result_panel(state: &SubmissionState) -> ResultPanel {
    match state {
        SubmissionState::InFlight(_) => ResultPanel::Loading {
            message: LOADING_TEXT,
        },
        SubmissionState::Succeeded(fields) => ResultPanel::Fields(field_rows(fields)),
        SubmissionState::Idle | SubmissionState::Failed(_) => ResultPanel::Empty {
            title: EMPTY_TITLE,
            subtitle: EMPTY_SUBTITLE,
        },
    }
}

fn field_rows(fields: &ExtractedFields) -> Vec<FieldRow> {
    fields
        .entries()
        .map(|(field, value)| FieldRow {
            label: field.label(),
            value: value
                .filter(|v| !v.is_empty())
                .unwrap_or(MISSING_VALUE)
                .to_string(),
        })
        .collect()
}
