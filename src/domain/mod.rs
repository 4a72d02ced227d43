//! Finance and organizer domain models, persistence-friendly types, and helpers.

pub mod category;
pub mod exam;
pub mod expense;
pub mod income;
pub mod month;
pub mod note;
pub mod workout;

pub use category::Category;
pub use exam::ExamAppointment;
pub use expense::{ExpenseKind, ExpenseRecord};
pub use income::MonthlyIncome;
pub use month::MonthKey;
pub use note::Note;
pub use workout::{MuscleGroup, WorkoutExercise};
