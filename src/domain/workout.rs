//! Workout routines and scheduled sessions.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for WorkoutLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkoutLevel::Beginner => "beginner",
            WorkoutLevel::Intermediate => "intermediate",
            WorkoutLevel::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

/// A reusable routine definition. Read-mostly, like catalog foods.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRoutine {
    pub id: String,
    pub name: String,
    pub exercises: u32,
    pub duration_minutes: u32,
    pub level: WorkoutLevel,
}

impl WorkoutRoutine {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        exercises: u32,
        duration_minutes: u32,
        level: WorkoutLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exercises,
            duration_minutes,
            level,
        }
    }
}

/// One scheduled (and possibly completed) instance of a routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub routine_id: String,
    pub date: NaiveDate,
    pub completed: bool,
}

impl WorkoutSession {
    pub fn new(routine_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            routine_id: routine_id.into(),
            date,
            completed: false,
        }
    }
}

/// Routines plus the sessions scheduled from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutPlanner {
    pub routines: Vec<WorkoutRoutine>,
    pub sessions: Vec<WorkoutSession>,
}

impl WorkoutPlanner {
    pub fn new(routines: Vec<WorkoutRoutine>) -> Self {
        Self {
            routines,
            sessions: Vec::new(),
        }
    }

    pub fn routine(&self, id: &str) -> Option<&WorkoutRoutine> {
        self.routines.iter().find(|routine| routine.id == id)
    }

    pub fn add_session(&mut self, session: WorkoutSession) -> Uuid {
        let id = session.id;
        self.sessions.push(session);
        id
    }

    pub fn session_mut(&mut self, id: Uuid) -> Option<&mut WorkoutSession> {
        self.sessions.iter_mut().find(|session| session.id == id)
    }

    /// Sessions falling inside the Monday-anchored week containing
    /// `reference`.
    pub fn sessions_in_week(&self, reference: NaiveDate) -> impl Iterator<Item = &WorkoutSession> {
        let week_start =
            reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
        let week_end = week_start + Duration::days(7);
        self.sessions
            .iter()
            .filter(move |session| session.date >= week_start && session.date < week_end)
    }
}
