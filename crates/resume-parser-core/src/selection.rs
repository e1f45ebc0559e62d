use thiserror::Error;

use crate::document::{Candidate, Document};

/// Identifies one accepted selection. Increases with every acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(u64);

impl SelectionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// The currently chosen document.
#[derive(Debug, Clone)]
pub struct Selection {
    pub id: SelectionId,
    pub document: Document,
}

/// Which entry point offered a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    Picker,
    Drop,
}

impl SelectionOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Picker => "picker",
            Self::Drop => "drop",
        }
    }
}

/// Why a candidate was rejected. `Display` is the text shown to the user.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Please upload a PDF file.")]
    UnsupportedType { media_type: Option<String> },
    #[error("Unable to read {name}.")]
    Unreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Validate a candidate and snapshot its content.
///
/// Both entry points go through this so the rule holds regardless of
/// whether the picker's own filter already ran.
pub(crate) fn accept(candidate: &Candidate) -> Result<Document, SelectionError> {
    if !candidate.declares_accepted_type() {
        return Err(SelectionError::UnsupportedType {
            media_type: candidate.media_type.clone(),
        });
    }
    candidate.load().map_err(|source| SelectionError::Unreadable {
        name: candidate.name.clone(),
        source,
    })
}

/// Transient "active drop zone" flag. Never touches the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    active: bool,
}

impl DragState {
    pub fn enter(&mut self) {
        self.active = true;
    }

    pub fn over(&mut self) {
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }

    /// A drop ends the drag regardless of what was dropped.
    pub fn dropped(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_rejects_wrong_type_without_reading() {
        // Path does not exist; the type check must fail first.
        let c = Candidate::from_path("/nope/notes.txt");
        let err = accept(&c).unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedType { .. }));
        assert_eq!(err.to_string(), "Please upload a PDF file.");
    }

    #[test]
    fn accept_rejects_undeclared_type() {
        let c = Candidate::from_bytes("blob", None, b"%PDF".to_vec());
        assert!(matches!(
            accept(&c),
            Err(SelectionError::UnsupportedType { media_type: None })
        ));
    }

    #[test]
    fn accept_reports_unreadable_pdf() {
        let c = Candidate::from_path("/nope/resume.pdf");
        let err = accept(&c).unwrap_err();
        assert_eq!(err.to_string(), "Unable to read resume.pdf.");
    }

    #[test]
    fn drag_state_transitions() {
        let mut drag = DragState::default();
        assert!(!drag.is_active());
        drag.enter();
        drag.over();
        assert!(drag.is_active());
        drag.leave();
        assert!(!drag.is_active());
        drag.enter();
        drag.dropped();
        assert!(!drag.is_active());
    }
}
