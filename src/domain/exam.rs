use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled medical exam in the user's agenda.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamAppointment {
    pub id: Uuid,
    /// Medical specialty, an open label (the source offers a long pick list
    /// plus "other").
    pub specialty: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ExamAppointment {
    pub fn new(specialty: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            specialty: specialty.into(),
            date,
            time,
            location: String::new(),
            doctor: String::new(),
            notes: String::new(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Agenda ordering key: date first, then time of day.
    pub fn agenda_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}
