pub mod json_backend;

use uuid::Uuid;

use crate::domain::{ExamAppointment, ExpenseRecord, MonthlyIncome, Note, WorkoutExercise};
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends holding per-user finance documents.
///
/// The aggregation core only ever calls the two read operations; the write
/// operations back the surrounding expense and income management flows.
pub trait ExpenseStore: Send + Sync {
    fn list_expenses(&self, user: &str) -> Result<Vec<ExpenseRecord>>;
    fn get_expense(&self, user: &str, id: Uuid) -> Result<Option<ExpenseRecord>>;
    fn add_expense(&self, user: &str, record: ExpenseRecord) -> Result<Uuid>;
    fn update_expense(&self, user: &str, record: ExpenseRecord) -> Result<()>;
    fn delete_expense(&self, user: &str, id: Uuid) -> Result<()>;

    fn monthly_income(&self, user: &str) -> Result<Option<MonthlyIncome>>;
    fn set_monthly_income(&self, user: &str, income: MonthlyIncome) -> Result<()>;
    fn clear_monthly_income(&self, user: &str) -> Result<()>;
}

/// Persistence for the organizer collections: notes, workout log, exam agenda.
pub trait OrganizerStore: Send + Sync {
    fn list_notes(&self, user: &str) -> Result<Vec<Note>>;
    fn add_note(&self, user: &str, note: Note) -> Result<Uuid>;
    fn update_note(&self, user: &str, note: Note) -> Result<()>;
    fn delete_note(&self, user: &str, id: Uuid) -> Result<()>;

    fn list_workouts(&self, user: &str) -> Result<Vec<WorkoutExercise>>;
    fn add_workout(&self, user: &str, workout: WorkoutExercise) -> Result<Uuid>;
    fn update_workout(&self, user: &str, workout: WorkoutExercise) -> Result<()>;
    fn delete_workout(&self, user: &str, id: Uuid) -> Result<()>;

    fn list_exams(&self, user: &str) -> Result<Vec<ExamAppointment>>;
    fn add_exam(&self, user: &str, exam: ExamAppointment) -> Result<Uuid>;
    fn update_exam(&self, user: &str, exam: ExamAppointment) -> Result<()>;
    fn delete_exam(&self, user: &str, id: Uuid) -> Result<()>;
}

pub use json_backend::JsonStorage;
