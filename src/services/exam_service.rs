//! Business logic helpers for the user's medical exam agenda.

use uuid::Uuid;

use crate::domain::ExamAppointment;
use crate::storage::OrganizerStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers over the exam agenda.
pub struct ExamService;

impl ExamService {
    /// Schedules an exam and returns its identifier. The specialty label is
    /// required; date and time are already structured by the caller.
    pub fn schedule(
        store: &dyn OrganizerStore,
        user: &str,
        exam: ExamAppointment,
    ) -> ServiceResult<Uuid> {
        validate_exam(&exam)?;
        Ok(store.add_exam(user, exam)?)
    }

    /// Updates the appointment identified by `id` via the provided mutator.
    pub fn update<F>(store: &dyn OrganizerStore, user: &str, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut ExamAppointment),
    {
        let mut exam = find_exam(store, user, id)?;
        mutator(&mut exam);
        exam.id = id;
        validate_exam(&exam)?;
        store.update_exam(user, exam)?;
        Ok(())
    }

    /// Flags the appointment as done without touching the rest of the record.
    pub fn complete(store: &dyn OrganizerStore, user: &str, id: Uuid) -> ServiceResult<()> {
        Self::update(store, user, id, |exam| exam.mark_completed())
    }

    pub fn remove(store: &dyn OrganizerStore, user: &str, id: Uuid) -> ServiceResult<()> {
        store.delete_exam(user, id)?;
        Ok(())
    }

    /// Returns the agenda ordered chronologically: earliest date first, then
    /// time of day.
    pub fn agenda(store: &dyn OrganizerStore, user: &str) -> ServiceResult<Vec<ExamAppointment>> {
        let mut exams = store.list_exams(user)?;
        exams.sort_by_key(|exam| exam.agenda_key());
        Ok(exams)
    }
}

fn find_exam(store: &dyn OrganizerStore, user: &str, id: Uuid) -> ServiceResult<ExamAppointment> {
    store
        .list_exams(user)?
        .into_iter()
        .find(|exam| exam.id == id)
        .ok_or_else(|| ServiceError::Invalid("Appointment not found".into()))
}

fn validate_exam(exam: &ExamAppointment) -> Result<(), ServiceError> {
    if exam.specialty.trim().is_empty() {
        return Err(ServiceError::Invalid("Exam specialty is required".into()));
    }
    Ok(())
}
