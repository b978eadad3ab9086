use super::ScheduleTableBuilder;
use crate::holiday::HolidayCalendar;
use crate::model::{DayAssignment, Team};
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Un mois de la grille annuelle : 31 cellules, `None` pour les dates inexistantes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MonthRow {
    pub month: u32,
    pub cells: Vec<Option<DayAssignment>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnnualGrid {
    pub year: i32,
    pub team: Team,
    pub months: Vec<MonthRow>,
}

impl AnnualGrid {
    pub fn get(&self, month: u32, day: u32) -> Option<&DayAssignment> {
        self.months
            .iter()
            .find(|m| m.month == month)
            .and_then(|m| m.cells.get(day.checked_sub(1)? as usize))
            .and_then(Option::as_ref)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayAssignment> + '_ {
        self.months.iter().flat_map(|m| m.cells.iter().flatten())
    }
}

impl ScheduleTableBuilder {
    pub fn annual_grid<H: HolidayCalendar + ?Sized>(
        &self,
        year: i32,
        team: Team,
        holidays: &H,
    ) -> AnnualGrid {
        let months = (1..=12)
            .map(|month| MonthRow {
                month,
                cells: (1..=31)
                    .map(|day| {
                        NaiveDate::from_ymd_opt(year, month, day)
                            .map(|date| self.engine.assignment_for(team, date, holidays))
                    })
                    .collect(),
            })
            .collect();
        AnnualGrid { year, team, months }
    }
}
