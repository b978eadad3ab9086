mod pattern;
mod types;
pub(crate) mod util;

pub use pattern::RotationPattern;
pub use types::{RotationError, EPOCH, PATTERN_LEN};

use crate::holiday::HolidayCalendar;
use crate::model::{DayAssignment, ShiftSlot, Team};
use chrono::NaiveDate;

/// Moteur de rotation : motif partagé + offset de phase par équipe.
///
/// Toutes les opérations sont pures ; le moteur est immuable une fois construit
/// et peut être partagé entre threads sans coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEngine {
    pattern: RotationPattern,
    offsets: [i64; 4],
    epoch: NaiveDate,
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self {
            pattern: RotationPattern::default(),
            offsets: Team::ALL.map(Team::default_offset),
            epoch: EPOCH,
        }
    }
}

impl RotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: RotationPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_offset(mut self, team: Team, offset: i64) -> Self {
        self.offsets[team.index()] = offset;
        self
    }

    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn pattern(&self) -> &RotationPattern {
        &self.pattern
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn offset(&self, team: Team) -> i64 {
        self.offsets[team.index()]
    }

    /// Position de `team` dans le motif à la date donnée.
    pub fn slot_for(&self, team: Team, date: NaiveDate) -> ShiftSlot {
        let diff = util::days_between(self.epoch, date);
        let idx = util::pattern_index(self.offset(team), diff, self.pattern.len());
        self.pattern.at(idx)
    }

    /// Variante textuelle (« 52C ») pour les appelants non typés.
    pub fn slot_for_code(&self, team: &str, date: NaiveDate) -> Result<ShiftSlot, RotationError> {
        let team: Team = team.parse()?;
        Ok(self.slot_for(team, date))
    }

    pub fn is_holiday<H: HolidayCalendar + ?Sized>(&self, date: NaiveDate, holidays: &H) -> bool {
        holidays.is_holiday(date)
    }

    pub fn assignment_for<H: HolidayCalendar + ?Sized>(
        &self,
        team: Team,
        date: NaiveDate,
        holidays: &H,
    ) -> DayAssignment {
        DayAssignment {
            date,
            team,
            slot: self.slot_for(team, date),
            is_holiday: self.is_holiday(date, holidays),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{HolidaySet, NoHolidays};
    use crate::model::ShiftKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn epoch_day_slots() {
        let e = RotationEngine::new();
        assert_eq!(e.slot_for(Team::T52C, d(2025, 1, 1)), ShiftSlot::new(ShiftKind::Morning, 3));
        assert_eq!(e.slot_for(Team::T52A, d(2025, 1, 1)), ShiftSlot::new(ShiftKind::Off, 2));
        assert_eq!(e.slot_for(Team::T52B, d(2025, 1, 1)), ShiftSlot::new(ShiftKind::Afternoon, 5));
        assert_eq!(e.slot_for(Team::T52D, d(2025, 1, 1)), ShiftSlot::new(ShiftKind::Night, 2));
    }

    #[test]
    fn before_epoch_uses_positive_modulo() {
        let e = RotationEngine::new();
        assert_eq!(e.slot_for(Team::T52C, d(2024, 12, 31)), ShiftSlot::new(ShiftKind::Morning, 2));
        assert_eq!(e.slot_for(Team::T52C, d(2024, 12, 30)), ShiftSlot::new(ShiftKind::Morning, 1));
        assert_eq!(e.slot_for(Team::T52C, d(2024, 12, 29)), ShiftSlot::new(ShiftKind::Off, 2));
    }

    #[test]
    fn unknown_team_code_is_an_error() {
        let e = RotationEngine::new();
        assert_eq!(
            e.slot_for_code("52Z", d(2025, 1, 1)),
            Err(RotationError::InvalidTeam("52Z".into()))
        );
        assert_eq!(
            e.slot_for_code("52c", d(2025, 1, 1)).unwrap().to_string(),
            "M3"
        );
    }

    #[test]
    fn assignment_carries_holiday_flag() {
        let e = RotationEngine::new();
        let set: HolidaySet = [d(2025, 1, 1)].into_iter().collect();
        assert!(e.assignment_for(Team::T52A, d(2025, 1, 1), &set).is_holiday);
        assert!(!e.assignment_for(Team::T52A, d(2025, 1, 2), &set).is_holiday);
        assert!(!e.assignment_for(Team::T52A, d(2025, 1, 1), &NoHolidays).is_holiday);
    }

    #[test]
    fn builder_overrides_offsets_and_epoch() {
        let e = RotationEngine::new()
            .with_offset(Team::T52A, 0)
            .with_epoch(d(2025, 2, 1));
        assert_eq!(e.offset(Team::T52A), 0);
        assert_eq!(e.slot_for(Team::T52A, d(2025, 2, 1)), ShiftSlot::new(ShiftKind::Morning, 1));
    }
}
