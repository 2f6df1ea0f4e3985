use std::collections::BTreeMap;

use crate::domain::entities::assignment::{placeholder_assignments, Assignment, Priority};
use crate::domain::entities::subject::{Subject, SubjectSelection, ToggleOutcome};
use crate::usecase::ports::decoder::ImportError;
use crate::usecase::services::subject_filter::assignment_matches;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading(String),
    Success(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub enum ScheduleMessage {
    ToggleSubject(Subject),
    UploadStarted(String),
    UploadFinished(String, Result<Vec<Assignment>, ImportError>),
    SetPriority(usize, Priority),
    ResetUpload,
}

/// Everything the deadline page shows for one session. Mutated only through `apply`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSession {
    uploaded: Option<Vec<Assignment>>,
    placeholder: Vec<Assignment>,
    selection: SubjectSelection,
    priorities: BTreeMap<usize, Priority>,
    status: UploadStatus,
    last_toggle: Option<(Subject, ToggleOutcome)>,
}

impl Default for ScheduleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleSession {
    pub fn new() -> Self {
        Self {
            uploaded: None,
            placeholder: placeholder_assignments(),
            selection: SubjectSelection::new(),
            priorities: BTreeMap::new(),
            status: UploadStatus::Idle,
            last_toggle: None,
        }
    }

    pub fn apply(&mut self, message: ScheduleMessage) {
        match message {
            ScheduleMessage::ToggleSubject(subject) => {
                let outcome = self.selection.toggle(subject);
                if outcome == ToggleOutcome::Rejected {
                    tracing::debug!(%subject, "subject selection is full");
                }
                self.last_toggle = Some((subject, outcome));
            }
            ScheduleMessage::UploadStarted(file_name) => {
                self.status = UploadStatus::Uploading(file_name);
            }
            ScheduleMessage::UploadFinished(file_name, result) => {
                self.priorities.clear();
                match result {
                    Ok(assignments) => {
                        self.uploaded = Some(assignments);
                        self.status = UploadStatus::Success(file_name);
                    }
                    Err(err) => {
                        self.uploaded = None;
                        self.status = UploadStatus::Error(err.to_string());
                    }
                }
            }
            ScheduleMessage::SetPriority(row, priority) => {
                if row < self.base_assignments().len() {
                    self.priorities.insert(row, priority);
                }
            }
            ScheduleMessage::ResetUpload => {
                self.status = UploadStatus::Idle;
            }
        }
    }

    fn base_assignments(&self) -> &[Assignment] {
        match &self.uploaded {
            Some(assignments) => assignments,
            None => &self.placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.uploaded.is_none()
    }

    /// Current rows with per-row priority changes applied.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.base_assignments()
            .iter()
            .enumerate()
            .map(|(row, assignment)| match self.priorities.get(&row) {
                Some(priority) => assignment.with_priority(*priority),
                None => assignment.clone(),
            })
            .collect()
    }

    /// Rows kept by the subject filter, paired with their position in `assignments()`.
    pub fn visible_assignments(&self) -> Vec<(usize, Assignment)> {
        self.assignments()
            .into_iter()
            .enumerate()
            .filter(|(_, assignment)| assignment_matches(assignment, &self.selection))
            .collect()
    }

    pub fn selection(&self) -> &SubjectSelection {
        &self.selection
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn last_toggle(&self) -> Option<(Subject, ToggleOutcome)> {
        self.last_toggle
    }
}
