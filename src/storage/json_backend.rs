use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{ExamAppointment, ExpenseRecord, MonthlyIncome, Note, WorkoutExercise},
    errors::StoreError,
    utils::{app_data_dir, ensure_dir, users_dir_in, write_atomic},
};

use super::{ExpenseStore, OrganizerStore, Result};

const EXPENSES_FILE: &str = "expenses.json";
const INCOME_FILE: &str = "income.json";
const NOTES_FILE: &str = "notes.json";
const WORKOUTS_FILE: &str = "workouts.json";
const EXAMS_FILE: &str = "exams.json";

/// JSON-file backend keeping one document directory per user.
///
/// Layout under the storage root: `users/<user>/expenses.json` holds the
/// expense collection, `users/<user>/income.json` the single income document,
/// and `notes.json`/`workouts.json`/`exams.json` the organizer collections.
#[derive(Clone)]
pub struct JsonStorage {
    users_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let users_dir = users_dir_in(&base);
        ensure_dir(&users_dir)?;
        Ok(Self { users_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    fn user_dir(&self, user: &str) -> PathBuf {
        self.users_dir.join(canonical_user(user))
    }

    fn expenses_path(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(EXPENSES_FILE)
    }

    fn income_path(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(INCOME_FILE)
    }

    fn notes_path(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(NOTES_FILE)
    }

    fn workouts_path(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(WORKOUTS_FILE)
    }

    fn exams_path(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(EXAMS_FILE)
    }

    fn read_expenses(&self, user: &str) -> Result<Vec<ExpenseRecord>> {
        read_collection(&self.expenses_path(user), user)
    }

    fn write_expenses(&self, user: &str, records: &[ExpenseRecord]) -> Result<()> {
        write_collection(&self.expenses_path(user), records)
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path, user: &str) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&data)?;
    let mut records = Vec::with_capacity(raw.len());
    for value in raw {
        // A single corrupt record is dropped rather than failing the read.
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(err) => debug!(user, %err, "dropping undecodable record"),
        }
    }
    Ok(records)
}

fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    write_atomic(path, &json)
}

impl ExpenseStore for JsonStorage {
    fn list_expenses(&self, user: &str) -> Result<Vec<ExpenseRecord>> {
        self.read_expenses(user)
    }

    fn get_expense(&self, user: &str, id: Uuid) -> Result<Option<ExpenseRecord>> {
        Ok(self
            .read_expenses(user)?
            .into_iter()
            .find(|record| record.id == id))
    }

    fn add_expense(&self, user: &str, record: ExpenseRecord) -> Result<Uuid> {
        let id = record.id;
        let mut records = self.read_expenses(user)?;
        records.push(record);
        self.write_expenses(user, &records)?;
        debug!(user, %id, "expense added");
        Ok(id)
    }

    fn update_expense(&self, user: &str, record: ExpenseRecord) -> Result<()> {
        let mut records = self.read_expenses(user)?;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or_else(|| StoreError::Storage(format!("expense `{}` not found", record.id)))?;
        *slot = record;
        self.write_expenses(user, &records)
    }

    fn delete_expense(&self, user: &str, id: Uuid) -> Result<()> {
        let mut records = self.read_expenses(user)?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(StoreError::Storage(format!("expense `{}` not found", id)));
        }
        self.write_expenses(user, &records)?;
        debug!(user, %id, "expense deleted");
        Ok(())
    }

    fn monthly_income(&self, user: &str) -> Result<Option<MonthlyIncome>> {
        let path = self.income_path(user);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn set_monthly_income(&self, user: &str, income: MonthlyIncome) -> Result<()> {
        let path = self.income_path(user);
        let json = serde_json::to_string_pretty(&income)?;
        write_atomic(&path, &json)?;
        debug!(user, amount = %income.amount, "monthly income saved");
        Ok(())
    }

    fn clear_monthly_income(&self, user: &str) -> Result<()> {
        let path = self.income_path(user);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!(user, "monthly income cleared");
        }
        Ok(())
    }
}

impl OrganizerStore for JsonStorage {
    fn list_notes(&self, user: &str) -> Result<Vec<Note>> {
        read_collection(&self.notes_path(user), user)
    }

    fn add_note(&self, user: &str, note: Note) -> Result<Uuid> {
        let id = note.id;
        let mut notes: Vec<Note> = read_collection(&self.notes_path(user), user)?;
        notes.push(note);
        write_collection(&self.notes_path(user), &notes)?;
        debug!(user, %id, "note added");
        Ok(id)
    }

    fn update_note(&self, user: &str, note: Note) -> Result<()> {
        let mut notes: Vec<Note> = read_collection(&self.notes_path(user), user)?;
        let slot = notes
            .iter_mut()
            .find(|existing| existing.id == note.id)
            .ok_or_else(|| StoreError::Storage(format!("note `{}` not found", note.id)))?;
        *slot = note;
        write_collection(&self.notes_path(user), &notes)
    }

    fn delete_note(&self, user: &str, id: Uuid) -> Result<()> {
        let path = self.notes_path(user);
        let mut notes: Vec<Note> = read_collection(&path, user)?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Err(StoreError::Storage(format!("note `{}` not found", id)));
        }
        write_collection(&path, &notes)
    }

    fn list_workouts(&self, user: &str) -> Result<Vec<WorkoutExercise>> {
        read_collection(&self.workouts_path(user), user)
    }

    fn add_workout(&self, user: &str, workout: WorkoutExercise) -> Result<Uuid> {
        let id = workout.id;
        let path = self.workouts_path(user);
        let mut workouts: Vec<WorkoutExercise> = read_collection(&path, user)?;
        workouts.push(workout);
        write_collection(&path, &workouts)?;
        debug!(user, %id, "workout added");
        Ok(id)
    }

    fn update_workout(&self, user: &str, workout: WorkoutExercise) -> Result<()> {
        let path = self.workouts_path(user);
        let mut workouts: Vec<WorkoutExercise> = read_collection(&path, user)?;
        let slot = workouts
            .iter_mut()
            .find(|existing| existing.id == workout.id)
            .ok_or_else(|| StoreError::Storage(format!("workout `{}` not found", workout.id)))?;
        *slot = workout;
        write_collection(&path, &workouts)
    }

    fn delete_workout(&self, user: &str, id: Uuid) -> Result<()> {
        let path = self.workouts_path(user);
        let mut workouts: Vec<WorkoutExercise> = read_collection(&path, user)?;
        let before = workouts.len();
        workouts.retain(|workout| workout.id != id);
        if workouts.len() == before {
            return Err(StoreError::Storage(format!("workout `{}` not found", id)));
        }
        write_collection(&path, &workouts)
    }

    fn list_exams(&self, user: &str) -> Result<Vec<ExamAppointment>> {
        read_collection(&self.exams_path(user), user)
    }

    fn add_exam(&self, user: &str, exam: ExamAppointment) -> Result<Uuid> {
        let id = exam.id;
        let path = self.exams_path(user);
        let mut exams: Vec<ExamAppointment> = read_collection(&path, user)?;
        exams.push(exam);
        write_collection(&path, &exams)?;
        debug!(user, %id, "exam added");
        Ok(id)
    }

    fn update_exam(&self, user: &str, exam: ExamAppointment) -> Result<()> {
        let path = self.exams_path(user);
        let mut exams: Vec<ExamAppointment> = read_collection(&path, user)?;
        let slot = exams
            .iter_mut()
            .find(|existing| existing.id == exam.id)
            .ok_or_else(|| StoreError::Storage(format!("exam `{}` not found", exam.id)))?;
        *slot = exam;
        write_collection(&path, &exams)
    }

    fn delete_exam(&self, user: &str, id: Uuid) -> Result<()> {
        let path = self.exams_path(user);
        let mut exams: Vec<ExamAppointment> = read_collection(&path, user)?;
        let before = exams.len();
        exams.retain(|exam| exam.id != id);
        if exams.len() == before {
            return Err(StoreError::Storage(format!("exam `{}` not found", id)));
        }
        write_collection(&path, &exams)
    }
}

fn canonical_user(user: &str) -> String {
    let sanitized: String = user
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "user".into()
    } else {
        sanitized
    }
}
