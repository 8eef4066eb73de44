//! Assignment creation input and update builder.

use serde::Serialize;

/// Fields supplied when creating an assignment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAssignment {
    pub course: Option<String>,
    pub title: String,
    pub due: String,
    pub notes: Option<String>,
    pub estimate_minutes: Option<u32>,
}

/// Partial update. `None` leaves a field alone; `Some(None)` clears an
/// optional field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_minutes: Option<Option<u32>>,
}

impl AssignmentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.course.is_none()
            && self.title.is_none()
            && self.due.is_none()
            && self.notes.is_none()
            && self.estimate_minutes.is_none()
    }
}

#[derive(Default)]
pub struct AssignmentUpdateBuilder(AssignmentUpdate);

impl AssignmentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AssignmentUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn course(mut self, course: Option<String>) -> Self {
        self.0.course = Some(course);
        self
    }

    #[must_use]
    pub fn due(mut self, due: impl Into<String>) -> Self {
        self.0.due = Some(due.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn estimate_minutes(mut self, estimate: Option<u32>) -> Self {
        self.0.estimate_minutes = Some(estimate);
        self
    }

    #[must_use]
    pub fn build(self) -> AssignmentUpdate {
        self.0
    }
}
