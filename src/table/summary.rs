use crate::model::{ScheduleTable, ShiftKind, Team};
use crate::rotation::RotationError;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Décompte des natures de quart d'une équipe sur un tableau.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShiftCounts {
    pub morning: usize,
    pub afternoon: usize,
    pub night: usize,
    pub off: usize,
    /// Lignes marquées fériées (indépendant des quatre natures).
    pub holidays: usize,
}

impl ShiftCounts {
    pub fn get(&self, kind: ShiftKind) -> usize {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Afternoon => self.afternoon,
            ShiftKind::Night => self.night,
            ShiftKind::Off => self.off,
        }
    }

    fn bump(&mut self, kind: ShiftKind) {
        match kind {
            ShiftKind::Morning => self.morning += 1,
            ShiftKind::Afternoon => self.afternoon += 1,
            ShiftKind::Night => self.night += 1,
            ShiftKind::Off => self.off += 1,
        }
    }

    /// Somme des quatre natures ; égale au nombre de lignes.
    pub fn total(&self) -> usize {
        self.morning + self.afternoon + self.night + self.off
    }

    pub fn working_days(&self) -> usize {
        self.total() - self.off
    }
}

pub fn summarize(table: &ScheduleTable, team: Team) -> Result<ShiftCounts, RotationError> {
    if !table.teams.contains(&team) {
        return Err(RotationError::TeamNotInTable(team));
    }
    let mut counts = ShiftCounts::default();
    for row in &table.rows {
        let a = row.get(team).ok_or(RotationError::TeamNotInTable(team))?;
        counts.bump(a.kind());
        if a.is_holiday {
            counts.holidays += 1;
        }
    }
    debug_assert_eq!(counts.total(), table.rows.len());
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{FixedHolidays, NoHolidays};
    use crate::table::{filter_and_order_columns, ColumnMode, ScheduleTableBuilder};
    use chrono::NaiveDate;

    #[test]
    fn full_cycle_is_balanced() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let t = ScheduleTableBuilder::default()
            .build_table(start, 24, &NoHolidays)
            .unwrap();
        for team in Team::ALL {
            let c = summarize(&t, team).unwrap();
            assert_eq!((c.morning, c.afternoon, c.night, c.off), (6, 6, 6, 6));
            assert_eq!(c.working_days(), 18);
            assert_eq!(c.holidays, 0);
        }
    }

    #[test]
    fn counts_holidays_and_rejects_missing_column() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        let t = ScheduleTableBuilder::default()
            .build_table(start, 10, &FixedHolidays::argentina())
            .unwrap();
        let c = summarize(&t, Team::T52D).unwrap();
        assert_eq!(c.total(), 10);
        assert_eq!(c.holidays, 1);

        let only = filter_and_order_columns(&t, Team::T52A, ColumnMode::OnlyFocus);
        assert_eq!(
            summarize(&only, Team::T52D),
            Err(RotationError::TeamNotInTable(Team::T52D))
        );
    }
}
