pub mod exam_service;
pub mod expense_service;
pub mod income_service;
pub mod note_service;
pub mod report_service;
pub mod workout_service;

pub use exam_service::ExamService;
pub use expense_service::ExpenseService;
pub use income_service::IncomeService;
pub use note_service::NoteService;
pub use report_service::ReportService;
pub use workout_service::WorkoutService;

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
}
