//! Assignment repository: CRUD over the `assignments` document.

use chrono::Utc;
use stride_core::entities::Assignment;
use stride_core::ids::{PREFIX_ASSIGNMENT, generate_id};

use crate::ASSIGNMENTS_KEY;
use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::service::StrideStore;
use crate::updates::{AssignmentUpdate, NewAssignment};

/// Trim a free-text field; blank becomes `None`.
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<S: BlobStore> StrideStore<S> {
    /// All assignments in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored list cannot be parsed. The
    /// list is user data, so it is never silently replaced.
    pub fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        Ok(self.read_doc(ASSIGNMENTS_KEY)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns a not-found `StoreError` if no assignment has this ID.
    pub fn get_assignment(&self, id: &str) -> Result<Assignment, StoreError> {
        self.list_assignments()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("assignment", id))
    }

    /// Validate and append a new assignment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` on validation failure and `StoreError` on I/O.
    pub fn create_assignment(&self, new: NewAssignment) -> Result<Assignment, StoreError> {
        let mut assignments = self.list_assignments()?;
        let now = Utc::now();

        let mut id = generate_id(PREFIX_ASSIGNMENT)?;
        while assignments.iter().any(|a| a.id == id) {
            id = generate_id(PREFIX_ASSIGNMENT)?;
        }

        let assignment = Assignment {
            id,
            course: clean(new.course),
            title: new.title.trim().to_string(),
            due: new.due.trim().to_string(),
            notes: clean(new.notes),
            estimate_minutes: new.estimate_minutes,
            created_at: now,
            updated_at: now,
        };
        assignment.validate()?;

        assignments.push(assignment.clone());
        self.write_doc(ASSIGNMENTS_KEY, &assignments)?;
        tracing::debug!(id = %assignment.id, "created assignment");
        Ok(assignment)
    }

    /// Apply a partial update and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns not-found, validation, or I/O `StoreError`s.
    pub fn update_assignment(
        &self,
        id: &str,
        update: AssignmentUpdate,
    ) -> Result<Assignment, StoreError> {
        let mut assignments = self.list_assignments()?;
        let slot = assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("assignment", id))?;

        if update.is_empty() {
            return Ok(slot.clone());
        }

        let mut next = slot.clone();
        if let Some(title) = update.title {
            next.title = title.trim().to_string();
        }
        if let Some(due) = update.due {
            next.due = due.trim().to_string();
        }
        if let Some(course) = update.course {
            next.course = clean(course);
        }
        if let Some(notes) = update.notes {
            next.notes = clean(notes);
        }
        if let Some(estimate) = update.estimate_minutes {
            next.estimate_minutes = estimate;
        }
        next.validate()?;
        next.updated_at = Utc::now();

        *slot = next.clone();
        self.write_doc(ASSIGNMENTS_KEY, &assignments)?;
        Ok(next)
    }

    /// Remove an assignment together with its plan overrides.
    ///
    /// Returns the removed assignment and the number of overrides dropped.
    ///
    /// # Errors
    ///
    /// Returns not-found or I/O `StoreError`s.
    pub fn delete_assignment(&self, id: &str) -> Result<(Assignment, u32), StoreError> {
        let mut assignments = self.list_assignments()?;
        let position = assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("assignment", id))?;
        let removed = assignments.remove(position);
        self.write_doc(ASSIGNMENTS_KEY, &assignments)?;

        let dropped = self.modify_overrides(|map| map.remove_assignment(id))?;
        tracing::debug!(id, overrides = dropped, "deleted assignment");
        Ok((removed, u32::try_from(dropped).unwrap_or(u32::MAX)))
    }
}
