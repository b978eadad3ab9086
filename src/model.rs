use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rotation::RotationError;

/// Nature d'un quart : matin, après-midi, nuit ou repos (« franco »).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftKind {
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Morning,
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    Afternoon,
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Night,
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Off,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 4] = [
        ShiftKind::Morning,
        ShiftKind::Afternoon,
        ShiftKind::Night,
        ShiftKind::Off,
    ];

    /// Code une lettre (M/T/N/F) utilisé dans les tableaux compacts.
    pub fn code(self) -> char {
        match self {
            ShiftKind::Morning => 'M',
            ShiftKind::Afternoon => 'T',
            ShiftKind::Night => 'N',
            ShiftKind::Off => 'F',
        }
    }

    pub fn is_working(self) -> bool {
        self != ShiftKind::Off
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Afternoon => "afternoon",
            ShiftKind::Night => "night",
            ShiftKind::Off => "off",
        };
        f.write_str(name)
    }
}

impl FromStr for ShiftKind {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        match wanted.to_ascii_lowercase().as_str() {
            "m" | "morning" => Ok(ShiftKind::Morning),
            "t" | "a" | "afternoon" => Ok(ShiftKind::Afternoon),
            "n" | "night" => Ok(ShiftKind::Night),
            "f" | "o" | "off" => Ok(ShiftKind::Off),
            _ => Err(RotationError::InvalidShiftKind(wanted.to_string())),
        }
    }
}

/// Position dans le motif de rotation. `sub_index` (>= 1) numérote les jours
/// successifs d'une même nature et ne sert qu'à l'affichage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftSlot {
    pub kind: ShiftKind,
    pub sub_index: u8,
}

impl ShiftSlot {
    pub const fn new(kind: ShiftKind, sub_index: u8) -> Self {
        Self { kind, sub_index }
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.code(), self.sub_index)
    }
}

/// Équipe de la rotation (ensemble fermé).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    #[cfg_attr(feature = "serde", serde(rename = "52A"))]
    T52A,
    #[cfg_attr(feature = "serde", serde(rename = "52B"))]
    T52B,
    #[cfg_attr(feature = "serde", serde(rename = "52C"))]
    T52C,
    #[cfg_attr(feature = "serde", serde(rename = "52D"))]
    T52D,
}

impl Team {
    /// Ordre canonique des colonnes.
    pub const ALL: [Team; 4] = [Team::T52A, Team::T52B, Team::T52C, Team::T52D];

    pub fn as_str(self) -> &'static str {
        match self {
            Team::T52A => "52A",
            Team::T52B => "52B",
            Team::T52C => "52C",
            Team::T52D => "52D",
        }
    }

    pub fn label(self) -> String {
        format!("Equipo {}", self.as_str())
    }

    /// Offset de phase par défaut dans le motif (jours).
    pub fn default_offset(self) -> i64 {
        match self {
            Team::T52A => 14,
            Team::T52B => 20,
            Team::T52C => 2,
            Team::T52D => 8,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Team::T52A => 0,
            Team::T52B => 1,
            Team::T52C => 2,
            Team::T52D => 3,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Team::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RotationError::InvalidTeam(wanted.to_string()))
    }
}

/// Affectation calculée d'une équipe pour un jour donné (jamais stockée).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayAssignment {
    pub date: NaiveDate,
    pub team: Team,
    pub slot: ShiftSlot,
    pub is_holiday: bool,
}

impl DayAssignment {
    pub fn kind(&self) -> ShiftKind {
        self.slot.kind
    }
}

impl fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_holiday {
            write!(f, "{}*", self.slot)
        } else {
            write!(f, "{}", self.slot)
        }
    }
}

/// Ligne d'un tableau de planning : une date, une colonne par équipe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleRow {
    pub date: NaiveDate,
    pub weekday_label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_holiday: bool,
    pub columns: Vec<DayAssignment>,
}

impl ScheduleRow {
    pub fn get(&self, team: Team) -> Option<&DayAssignment> {
        self.columns.iter().find(|a| a.team == team)
    }

    pub fn teams(&self) -> impl Iterator<Item = Team> + '_ {
        self.columns.iter().map(|a| a.team)
    }
}

/// Tableau complet, lignes en ordre chronologique strict.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleTable {
    pub teams: Vec<Team>,
    pub rows: Vec<ScheduleRow>,
}

impl ScheduleTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_parsing_is_closed() {
        assert_eq!("52c".parse::<Team>().unwrap(), Team::T52C);
        assert_eq!(" 52A ".parse::<Team>().unwrap(), Team::T52A);
        let err = "52E".parse::<Team>().unwrap_err();
        assert!(matches!(err, RotationError::InvalidTeam(ref t) if t == "52E"));
    }

    #[test]
    fn slot_and_assignment_display() {
        let slot = ShiftSlot::new(ShiftKind::Morning, 3);
        assert_eq!(slot.to_string(), "M3");
        let a = DayAssignment {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            team: Team::T52C,
            slot: ShiftSlot::new(ShiftKind::Off, 2),
            is_holiday: true,
        };
        assert_eq!(a.to_string(), "F2*");
    }

    #[test]
    fn kind_parsing_accepts_codes_and_names() {
        assert_eq!("T".parse::<ShiftKind>().unwrap(), ShiftKind::Afternoon);
        assert_eq!("night".parse::<ShiftKind>().unwrap(), ShiftKind::Night);
        assert_eq!(
            " x ".parse::<ShiftKind>(),
            Err(RotationError::InvalidShiftKind("x".into()))
        );
    }
}
