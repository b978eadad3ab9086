use crate::model::{ShiftKind, Team};
use chrono::NaiveDate;
use thiserror::Error;

/// Date de référence à partir de laquelle les écarts en jours sont mesurés.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(d) => d,
    None => panic!("invalid epoch"),
};

/// Longueur du motif de rotation (jours).
pub const PATTERN_LEN: usize = 24;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("unknown team: {0} (expected 52A, 52B, 52C or 52D)")]
    InvalidTeam(String),
    #[error("unknown shift kind: {0} (expected M, T, N or F)")]
    InvalidShiftKind(String),
    #[error("invalid date range: day count must be >= 1 (got {day_count})")]
    InvalidDateRange { day_count: i64 },
    #[error("invalid rotation pattern: {0}")]
    InvalidPattern(String),
    #[error("inconsistent rotation on {date}: {kind} held by {teams:?}")]
    InconsistentRotation {
        date: NaiveDate,
        kind: ShiftKind,
        teams: Vec<Team>,
    },
    #[error("team {0} is not a column of this table")]
    TeamNotInTable(Team),
    #[error("date out of range")]
    DateOutOfRange,
}
