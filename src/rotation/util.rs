use super::RotationError;
use chrono::{Duration, NaiveDate};

pub(crate) fn days_between(epoch: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Index toujours positif (modulo mathématique, pas le reste tronqué).
pub(super) fn pattern_index(offset: i64, day_diff: i64, len: usize) -> usize {
    let len = len as i64;
    (offset.rem_euclid(len) + day_diff.rem_euclid(len)).rem_euclid(len) as usize
}

pub(crate) fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, RotationError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(RotationError::DateOutOfRange)
}
