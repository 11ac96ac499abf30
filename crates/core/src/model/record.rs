use serde::{Deserialize, Serialize};

use crate::model::exercise::ExerciseEntry;
use crate::model::goal::{DEFAULT_EXERCISE_GOAL, DEFAULT_SLEEP_GOAL, DEFAULT_WATER_GOAL};

/// One calendar day's tracked metrics and goal overrides.
///
/// This is both the domain object and the persisted payload shape. Field
/// names follow the stored JSON (`waterGoal` etc.); every field defaults when
/// absent, so the empty record and records written by older versions both
/// deserialize cleanly. An absent stored record is equivalent to
/// `DailyRecord::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(default)]
    water: u32,
    #[serde(default)]
    sleep: f64,
    #[serde(default)]
    exercises: Vec<ExerciseEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    water_goal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep_goal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exercise_goal: Option<u32>,
}

impl DailyRecord {
    /// Cups of water logged so far.
    #[must_use]
    pub fn water(&self) -> u32 {
        self.water
    }

    /// Hours slept, as last reported.
    #[must_use]
    pub fn sleep(&self) -> f64 {
        self.sleep
    }

    /// Logged exercises in insertion (chronological) order.
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseEntry] {
        &self.exercises
    }

    /// Sum of all logged exercise durations, in minutes.
    #[must_use]
    pub fn total_exercise_minutes(&self) -> u32 {
        self.exercises.iter().map(ExerciseEntry::duration).sum()
    }

    /// Effective water goal: the day's override or the default of 8 cups.
    #[must_use]
    pub fn water_goal(&self) -> u32 {
        self.water_goal.unwrap_or(DEFAULT_WATER_GOAL)
    }

    /// Effective sleep goal: the day's override or the default of 8 hours.
    #[must_use]
    pub fn sleep_goal(&self) -> f64 {
        self.sleep_goal.unwrap_or(DEFAULT_SLEEP_GOAL)
    }

    /// Effective exercise goal: the day's override or the default of 30 minutes.
    #[must_use]
    pub fn exercise_goal(&self) -> u32 {
        self.exercise_goal.unwrap_or(DEFAULT_EXERCISE_GOAL)
    }

    /// Raw goal overrides, `None` until the user customizes them.
    #[must_use]
    pub fn goal_overrides(&self) -> (Option<u32>, Option<f64>, Option<u32>) {
        (self.water_goal, self.sleep_goal, self.exercise_goal)
    }

    pub fn add_water(&mut self) {
        self.water = self.water.saturating_add(1);
    }

    /// Decrement the water count, flooring at zero.
    pub fn remove_water(&mut self) {
        self.water = self.water.saturating_sub(1);
    }

    pub fn reset_water(&mut self) {
        self.water = 0;
    }

    /// Overwrite (not accumulate) the reported hours slept.
    ///
    /// Callers validate the range first; see the sleep service.
    pub fn set_sleep(&mut self, hours: f64) {
        self.sleep = hours;
    }

    pub fn reset_sleep(&mut self) {
        self.sleep = 0.0;
    }

    /// Append an entry; insertion order is the day's chronological order.
    pub fn add_exercise(&mut self, entry: ExerciseEntry) {
        self.exercises.push(entry);
    }

    /// Remove the entry with the given id, replacing the whole sequence and
    /// preserving the order of the survivors. Returns false if no entry
    /// matched.
    pub fn remove_exercise(&mut self, id: &str) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|entry| entry.id() != id);
        self.exercises.len() != before
    }

    pub fn reset_exercises(&mut self) {
        self.exercises.clear();
    }

    /// Set the day's goal overrides. Range validation happens in the
    /// services; these only record the value.
    pub fn set_water_goal(&mut self, cups: u32) {
        self.water_goal = Some(cups);
    }

    pub fn set_sleep_goal(&mut self, hours: f64) {
        self.sleep_goal = Some(hours);
    }

    pub fn set_exercise_goal(&mut self, minutes: u32) {
        self.exercise_goal = Some(minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::exercise::ExerciseDraft;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn entry(name: &str, minutes: u32, offset_min: i64) -> ExerciseEntry {
        ExerciseDraft::new(name, minutes)
            .validate(fixed_now() + Duration::minutes(offset_min))
            .unwrap()
    }

    #[test]
    fn default_record_is_zeroed_with_default_goals() {
        let record = DailyRecord::default();
        assert_eq!(record.water(), 0);
        assert_eq!(record.sleep(), 0.0);
        assert!(record.exercises().is_empty());
        assert_eq!(record.water_goal(), 8);
        assert_eq!(record.sleep_goal(), 8.0);
        assert_eq!(record.exercise_goal(), 30);
        assert_eq!(record.goal_overrides(), (None, None, None));
    }

    #[test]
    fn water_floors_at_zero() {
        let mut record = DailyRecord::default();
        record.remove_water();
        assert_eq!(record.water(), 0);
        record.add_water();
        record.add_water();
        record.remove_water();
        assert_eq!(record.water(), 1);
    }

    #[test]
    fn exercise_totals_and_removal_preserve_order() {
        let mut record = DailyRecord::default();
        record.add_exercise(entry("Running", 20, 0));
        record.add_exercise(entry("Yoga", 15, 1));
        record.add_exercise(entry("Walking", 10, 2));
        assert_eq!(record.total_exercise_minutes(), 45);

        let yoga_id = record.exercises()[1].id().to_string();
        assert!(record.remove_exercise(&yoga_id));
        assert_eq!(record.total_exercise_minutes(), 30);
        assert_eq!(record.exercises().len(), 2);
        assert_eq!(record.exercises()[0].name(), "Running");
        assert_eq!(record.exercises()[1].name(), "Walking");

        assert!(!record.remove_exercise("missing"));
        assert_eq!(record.exercises().len(), 2);
    }

    #[test]
    fn payload_uses_original_field_names_and_omits_unset_goals() {
        let mut record = DailyRecord::default();
        record.add_water();
        record.set_sleep(7.5);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["water"], 1);
        assert_eq!(json["sleep"], 7.5);
        assert!(json.get("waterGoal").is_none());

        record.set_water_goal(12);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["waterGoal"], 12);
    }

    #[test]
    fn partial_payloads_fill_in_defaults() {
        let record: DailyRecord = serde_json::from_str(r#"{"water": 3}"#).unwrap();
        assert_eq!(record.water(), 3);
        assert_eq!(record.sleep(), 0.0);
        assert!(record.exercises().is_empty());
        assert_eq!(record.goal_overrides(), (None, None, None));

        let empty: DailyRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DailyRecord::default());
    }
}
