//! Business logic helpers for the user's workout log.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::{MuscleGroup, WorkoutExercise};
use crate::storage::OrganizerStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers over the workout log.
pub struct WorkoutService;

impl WorkoutService {
    /// Records an exercise and returns its identifier. The exercise needs a
    /// name and at least one working set and rep.
    pub fn add(
        store: &dyn OrganizerStore,
        user: &str,
        exercise: WorkoutExercise,
    ) -> ServiceResult<Uuid> {
        validate_exercise(&exercise)?;
        Ok(store.add_workout(user, exercise)?)
    }

    /// Updates the exercise identified by `id` via the provided mutator.
    pub fn update<F>(store: &dyn OrganizerStore, user: &str, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut WorkoutExercise),
    {
        let mut exercise = find_exercise(store, user, id)?;
        mutator(&mut exercise);
        exercise.id = id;
        validate_exercise(&exercise)?;
        exercise.touch();
        store.update_workout(user, exercise)?;
        Ok(())
    }

    pub fn remove(store: &dyn OrganizerStore, user: &str, id: Uuid) -> ServiceResult<()> {
        store.delete_workout(user, id)?;
        Ok(())
    }

    /// Returns the workout log grouped by muscle group, most recently created
    /// first inside each group.
    pub fn by_muscle_group(
        store: &dyn OrganizerStore,
        user: &str,
    ) -> ServiceResult<BTreeMap<MuscleGroup, Vec<WorkoutExercise>>> {
        let mut grouped: BTreeMap<MuscleGroup, Vec<WorkoutExercise>> = BTreeMap::new();
        for exercise in store.list_workouts(user)? {
            grouped.entry(exercise.muscle_group).or_default().push(exercise);
        }
        for exercises in grouped.values_mut() {
            exercises.sort_by_key(|exercise| Reverse(exercise.created_at));
        }
        Ok(grouped)
    }
}

fn find_exercise(
    store: &dyn OrganizerStore,
    user: &str,
    id: Uuid,
) -> ServiceResult<WorkoutExercise> {
    store
        .list_workouts(user)?
        .into_iter()
        .find(|exercise| exercise.id == id)
        .ok_or_else(|| ServiceError::Invalid("Exercise not found".into()))
}

fn validate_exercise(exercise: &WorkoutExercise) -> Result<(), ServiceError> {
    if exercise.exercise_name.trim().is_empty() {
        return Err(ServiceError::Invalid("Exercise name is required".into()));
    }
    if exercise.sets == 0 || exercise.reps == 0 {
        return Err(ServiceError::Invalid(
            "An exercise needs at least one set and one rep".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn add_rejects_blank_name_and_zero_sets() {
        let (store, _guard) = store_with_temp_dir();
        let blank = WorkoutExercise::new("  ", MuscleGroup::Chest, 3, 10, 40.0);
        let err = WorkoutService::add(&store, "alice", blank).expect_err("blank name must fail");
        assert!(matches!(err, ServiceError::Invalid(_)), "unexpected: {err:?}");

        let no_sets = WorkoutExercise::new("Bench press", MuscleGroup::Chest, 0, 10, 40.0);
        let err = WorkoutService::add(&store, "alice", no_sets).expect_err("zero sets must fail");
        assert!(matches!(err, ServiceError::Invalid(_)), "unexpected: {err:?}");
    }

    #[test]
    fn log_is_grouped_by_muscle_group() {
        let (store, _guard) = store_with_temp_dir();
        WorkoutService::add(
            &store,
            "alice",
            WorkoutExercise::new("Bench press", MuscleGroup::Chest, 4, 8, 60.0),
        )
        .expect("add bench");
        WorkoutService::add(
            &store,
            "alice",
            WorkoutExercise::new("Squat", MuscleGroup::Legs, 5, 5, 80.0).with_warmup(2, 10, 40.0),
        )
        .expect("add squat");
        WorkoutService::add(
            &store,
            "alice",
            WorkoutExercise::new("Incline press", MuscleGroup::Chest, 3, 10, 40.0),
        )
        .expect("add incline");

        let grouped = WorkoutService::by_muscle_group(&store, "alice").expect("group");
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&MuscleGroup::Chest].len(), 2);
        assert_eq!(grouped[&MuscleGroup::Legs].len(), 1);
        assert!(grouped[&MuscleGroup::Legs][0].has_warmup());
    }

    #[test]
    fn update_rejects_mutation_to_zero_reps() {
        let (store, _guard) = store_with_temp_dir();
        let id = WorkoutService::add(
            &store,
            "alice",
            WorkoutExercise::new("Deadlift", MuscleGroup::Back, 3, 5, 100.0),
        )
        .expect("add deadlift");

        let err = WorkoutService::update(&store, "alice", id, |exercise| {
            exercise.reps = 0;
        })
        .expect_err("zero reps must fail");
        assert!(matches!(err, ServiceError::Invalid(_)), "unexpected: {err:?}");
    }

    #[test]
    fn update_changes_the_working_weight() {
        let (store, _guard) = store_with_temp_dir();
        let id = WorkoutService::add(
            &store,
            "alice",
            WorkoutExercise::new("Deadlift", MuscleGroup::Back, 3, 5, 100.0),
        )
        .expect("add deadlift");

        WorkoutService::update(&store, "alice", id, |exercise| {
            exercise.weight_kg = 110.0;
        })
        .expect("update weight");

        let grouped = WorkoutService::by_muscle_group(&store, "alice").expect("group");
        assert_eq!(grouped[&MuscleGroup::Back][0].weight_kg, 110.0);
    }
}
