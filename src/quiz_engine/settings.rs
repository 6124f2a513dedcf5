use tracing::{debug, warn};

use crate::quiz_engine::{
    error::QuizError,
    models::{GameConfig, DEFAULT_QUESTION_TOTAL, DEFAULT_TABLE, MAX_TABLE, MIN_TABLE, QUESTION_TOTALS},
};

/// The two values chosen on the settings screen.
///
/// Setters reject out-of-domain values and leave the model untouched, so a
/// [`GameConfig`] read from it is always valid for
/// [`GameSession::new`](crate::quiz_engine::session::GameSession::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsModel {
    table: u32,
    question_total: u32,
}

impl Default for SettingsModel {
    fn default() -> Self {
        SettingsModel {
            table: DEFAULT_TABLE,
            question_total: DEFAULT_QUESTION_TOTAL,
        }
    }
}

impl SettingsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from an untrusted pair, e.g. defaults read from a file.
    pub fn from_config(config: GameConfig) -> Result<Self, QuizError> {
        let mut settings = SettingsModel::new();
        settings.set_table(i64::from(config.table))?;
        settings.set_question_total(i64::from(config.question_total))?;
        Ok(settings)
    }

    pub fn table(&self) -> u32 {
        self.table
    }

    pub fn question_total(&self) -> u32 {
        self.question_total
    }

    pub fn set_table(&mut self, value: i64) -> Result<(), QuizError> {
        let table = validate_table(value)?;
        debug!(table, "table selected");
        self.table = table;
        Ok(())
    }

    pub fn set_question_total(&mut self, value: i64) -> Result<(), QuizError> {
        let total = validate_question_total(value)?;
        debug!(question_total = total, "question total selected");
        self.question_total = total;
        Ok(())
    }

    /// Hand the current values off to a new game. Pure read.
    pub fn start_game(&self) -> GameConfig {
        GameConfig {
            table: self.table,
            question_total: self.question_total,
        }
    }
}

/// Accept `value` only if it is a table in `2..=12`.
pub fn validate_table(value: i64) -> Result<u32, QuizError> {
    match u32::try_from(value) {
        Ok(table) if (MIN_TABLE..=MAX_TABLE).contains(&table) => Ok(table),
        _ => {
            warn!(value, "rejected table");
            Err(QuizError::table(value))
        }
    }
}

/// Accept `value` only if it is one of the offered question counts.
pub fn validate_question_total(value: i64) -> Result<u32, QuizError> {
    match u32::try_from(value) {
        Ok(total) if QUESTION_TOTALS.contains(&total) => Ok(total),
        _ => {
            warn!(value, "rejected question total");
            Err(QuizError::question_total(value))
        }
    }
}

/// Check a pair without building a model.
pub fn validate(config: GameConfig) -> Result<GameConfig, QuizError> {
    validate_table(i64::from(config.table))?;
    validate_question_total(i64::from(config.question_total))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_table_three_five_questions() {
        let settings = SettingsModel::new();
        assert_eq!(settings.start_game(), GameConfig { table: 3, question_total: 5 });
    }

    #[test]
    fn every_table_in_range_is_accepted() {
        let mut settings = SettingsModel::new();
        for t in 2..=12 {
            settings.set_table(t).unwrap();
            assert_eq!(settings.table(), t as u32);
        }
    }

    #[test]
    fn out_of_range_table_is_rejected_and_value_kept() {
        let mut settings = SettingsModel::new();
        settings.set_table(7).unwrap();
        for bad in [-3, 0, 1, 13, 100, i64::MAX] {
            let err = settings.set_table(bad).unwrap_err();
            assert!(err.is_invalid_config(), "{bad} should be InvalidConfig, got {err:?}");
            assert_eq!(settings.table(), 7);
        }
    }

    #[test]
    fn only_offered_question_totals_are_accepted() {
        let mut settings = SettingsModel::new();
        for total in [5, 10, 20] {
            settings.set_question_total(total).unwrap();
            assert_eq!(settings.question_total(), total as u32);
        }
        for bad in [0, 1, 4, 6, 15, 21, -5] {
            assert!(settings.set_question_total(bad).is_err(), "{bad} accepted");
            assert_eq!(settings.question_total(), 20);
        }
    }

    #[test]
    fn start_game_has_no_side_effect() {
        let mut settings = SettingsModel::new();
        settings.set_table(11).unwrap();
        settings.set_question_total(10).unwrap();
        let before = settings.clone();
        let first = settings.start_game();
        let second = settings.start_game();
        assert_eq!(first, second);
        assert_eq!(settings, before);
    }

    #[test]
    fn from_config_validates_both_fields() {
        assert!(SettingsModel::from_config(GameConfig { table: 12, question_total: 20 }).is_ok());
        assert!(SettingsModel::from_config(GameConfig { table: 1, question_total: 5 }).is_err());
        assert!(SettingsModel::from_config(GameConfig { table: 4, question_total: 7 }).is_err());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = validate_question_total(7).unwrap_err();
        assert_eq!(err.to_string(), "invalid question total: 7 (expected one of 5, 10, 20)");
    }
}
