mod columns;
mod duty;
mod grid;
mod summary;

pub use columns::{filter_and_order_columns, ColumnMode};
pub use duty::DutyRoster;
pub use grid::{AnnualGrid, MonthRow};
pub use summary::{summarize, ShiftCounts};

use crate::holiday::HolidayCalendar;
use crate::model::{ScheduleRow, ScheduleTable, ShiftKind, Team};
use crate::render::weekday_label;
use crate::rotation::{util, RotationEngine, RotationError};
use chrono::NaiveDate;

/// Construit les vues dérivées (tableau, équipe de service, grille annuelle)
/// au-dessus d'un `RotationEngine`.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTableBuilder {
    engine: RotationEngine,
}

impl ScheduleTableBuilder {
    pub fn new(engine: RotationEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &RotationEngine {
        &self.engine
    }

    /// Ligne complète (toutes les équipes, ordre canonique) pour une date.
    pub fn row_for<H: HolidayCalendar + ?Sized>(
        &self,
        date: NaiveDate,
        holidays: &H,
    ) -> ScheduleRow {
        ScheduleRow {
            date,
            weekday_label: weekday_label(date).to_string(),
            is_holiday: self.engine.is_holiday(date, holidays),
            columns: Team::ALL
                .iter()
                .map(|&team| self.engine.assignment_for(team, date, holidays))
                .collect(),
        }
    }

    /// `day_count` lignes consécutives à partir de `start`.
    pub fn build_table<H: HolidayCalendar + ?Sized>(
        &self,
        start: NaiveDate,
        day_count: u32,
        holidays: &H,
    ) -> Result<ScheduleTable, RotationError> {
        if day_count < 1 {
            return Err(RotationError::InvalidDateRange { day_count: 0 });
        }

        // La date de fin doit exister avant de dimensionner le tableau.
        util::add_days(start, i64::from(day_count) - 1)?;

        let mut rows = Vec::with_capacity(day_count as usize);
        for i in 0..i64::from(day_count) {
            let date = util::add_days(start, i)?;
            rows.push(self.row_for(date, holidays));
        }

        #[cfg(feature = "logging")]
        tracing::debug!(%start, day_count, "schedule table built");

        Ok(ScheduleTable {
            teams: Team::ALL.to_vec(),
            rows,
        })
    }

    /// Intervalle fermé `[start, end]`.
    pub fn build_range<H: HolidayCalendar + ?Sized>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        holidays: &H,
    ) -> Result<ScheduleTable, RotationError> {
        let day_count = util::days_between(start, end) + 1;
        let day_count = u32::try_from(day_count)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or(RotationError::InvalidDateRange { day_count })?;
        self.build_table(start, day_count, holidays)
    }

    /// Premier jour >= `from` où `team` est de quart `kind`.
    pub fn next_occurrence(
        &self,
        team: Team,
        kind: ShiftKind,
        from: NaiveDate,
    ) -> Result<NaiveDate, RotationError> {
        for i in 0..self.engine.pattern().len() as i64 {
            let date = util::add_days(from, i)?;
            if self.engine.slot_for(team, date).kind == kind {
                return Ok(date);
            }
        }
        Err(RotationError::InvalidPattern(format!(
            "{kind} never occurs in the rotation"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{HolidaySet, NoHolidays};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn zero_days_is_rejected() {
        let b = ScheduleTableBuilder::default();
        assert_eq!(
            b.build_table(d(2025, 1, 1), 0, &NoHolidays),
            Err(RotationError::InvalidDateRange { day_count: 0 })
        );
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let b = ScheduleTableBuilder::default();
        let t = b.build_range(d(2024, 12, 30), d(2025, 1, 2), &NoHolidays).unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.first_date(), Some(d(2024, 12, 30)));
        assert_eq!(t.last_date(), Some(d(2025, 1, 2)));
        assert!(t.rows.windows(2).all(|w| w[1].date == w[0].date.succ_opt().unwrap()));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let b = ScheduleTableBuilder::default();
        let err = b.build_range(d(2025, 1, 5), d(2025, 1, 1), &NoHolidays).unwrap_err();
        assert_eq!(err, RotationError::InvalidDateRange { day_count: -3 });
    }

    #[test]
    fn rows_flag_holidays() {
        let b = ScheduleTableBuilder::default();
        let h: HolidaySet = [d(2025, 1, 2)].into_iter().collect();
        let t = b.build_table(d(2025, 1, 1), 3, &h).unwrap();
        assert_eq!(
            t.rows.iter().map(|r| r.is_holiday).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert!(t.rows[1].columns.iter().all(|a| a.is_holiday));
    }

    #[test]
    fn next_occurrence_finds_upcoming_kind() {
        let b = ScheduleTableBuilder::default();
        let from = d(2025, 1, 1);
        assert_eq!(b.next_occurrence(Team::T52C, ShiftKind::Morning, from), Ok(from));
        assert_eq!(b.next_occurrence(Team::T52C, ShiftKind::Off, from), Ok(d(2025, 1, 5)));
        assert_eq!(b.next_occurrence(Team::T52C, ShiftKind::Night, from), Ok(d(2025, 1, 6)));
    }
}
