use super::ScheduleTableBuilder;
use crate::holiday::HolidayCalendar;
use crate::model::{ShiftKind, Team};
use crate::rotation::RotationError;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Quelle équipe tient chaque nature de quart un jour donné.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DutyRoster {
    pub date: NaiveDate,
    pub is_holiday: bool,
    pub morning: Team,
    pub afternoon: Team,
    pub night: Team,
    pub off: Team,
}

impl DutyRoster {
    pub fn get(&self, kind: ShiftKind) -> Team {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Afternoon => self.afternoon,
            ShiftKind::Night => self.night,
            ShiftKind::Off => self.off,
        }
    }
}

impl ScheduleTableBuilder {
    /// Inverse l'affectation du jour. Chaque nature doit revenir à exactement
    /// une équipe ; sinon le motif ou les offsets sont incohérents.
    pub fn who_is_on<H: HolidayCalendar + ?Sized>(
        &self,
        date: NaiveDate,
        holidays: &H,
    ) -> Result<DutyRoster, RotationError> {
        let owner = |kind: ShiftKind| -> Result<Team, RotationError> {
            let teams: Vec<Team> = Team::ALL
                .into_iter()
                .filter(|&t| self.engine.slot_for(t, date).kind == kind)
                .collect();
            match teams.as_slice() {
                [single] => Ok(*single),
                _ => Err(RotationError::InconsistentRotation { date, kind, teams }),
            }
        };

        Ok(DutyRoster {
            date,
            is_holiday: self.engine.is_holiday(date, holidays),
            morning: owner(ShiftKind::Morning)?,
            afternoon: owner(ShiftKind::Afternoon)?,
            night: owner(ShiftKind::Night)?,
            off: owner(ShiftKind::Off)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::NoHolidays;
    use crate::rotation::RotationEngine;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn epoch_day_owners() {
        let b = ScheduleTableBuilder::default();
        let r = b.who_is_on(d(2025, 1, 1), &NoHolidays).unwrap();
        assert_eq!(r.get(ShiftKind::Morning), Team::T52C);
        assert_eq!(r.get(ShiftKind::Afternoon), Team::T52B);
        assert_eq!(r.get(ShiftKind::Night), Team::T52D);
        assert_eq!(r.get(ShiftKind::Off), Team::T52A);
    }

    #[test]
    fn defaults_never_conflict_over_a_cycle() {
        let b = ScheduleTableBuilder::default();
        for i in -30..30 {
            let date = d(2025, 1, 1) + chrono::Duration::days(i);
            assert!(b.who_is_on(date, &NoHolidays).is_ok(), "{date}");
        }
    }

    #[test]
    fn colliding_offsets_are_reported() {
        let engine = RotationEngine::new().with_offset(Team::T52A, 2);
        let b = ScheduleTableBuilder::new(engine);
        let err = b.who_is_on(d(2025, 1, 1), &NoHolidays).unwrap_err();
        assert_eq!(
            err,
            RotationError::InconsistentRotation {
                date: d(2025, 1, 1),
                kind: ShiftKind::Morning,
                teams: vec![Team::T52A, Team::T52C],
            }
        );
    }
}
