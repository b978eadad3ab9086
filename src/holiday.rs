//! Jours fériés : donnée externe, consommée par le moteur via `HolidayCalendar`.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeSet, HashSet};

/// Source quelconque de jours fériés (test d'appartenance uniquement).
pub trait HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for &T {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

impl<T: HolidayCalendar> HolidayCalendar for Option<T> {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.as_ref().is_some_and(|h| h.is_holiday(date))
    }
}

/// Union de deux sources.
impl<A: HolidayCalendar, B: HolidayCalendar> HolidayCalendar for (A, B) {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.0.is_holiday(date) || self.1.is_holiday(date)
    }
}

impl HolidayCalendar for BTreeSet<NaiveDate> {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.contains(&date)
    }
}

impl HolidayCalendar for HashSet<NaiveDate> {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.contains(&date)
    }
}

/// Aucun jour férié.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Ensemble explicite de dates (chargé depuis un fichier, typiquement).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.contains(date)
    }
}

/// Table de règles à date fixe (mois, jour), répétées chaque année.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHolidays {
    rules: Vec<(u32, u32)>,
}

impl FixedHolidays {
    pub fn new(rules: Vec<(u32, u32)>) -> Self {
        Self { rules }
    }

    /// Fériés nationaux argentins inamovibles.
    pub fn argentina() -> Self {
        Self::new(vec![
            (1, 1),
            (3, 24),
            (4, 2),
            (5, 1),
            (5, 25),
            (6, 20),
            (7, 9),
            (12, 8),
            (12, 25),
        ])
    }

    /// Dates concrètes pour une année ; les règles impossibles (30/02) sont ignorées.
    pub fn for_year(&self, year: i32) -> HolidaySet {
        self.rules
            .iter()
            .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(year, m, d))
            .collect()
    }
}

impl HolidayCalendar for FixedHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.rules
            .iter()
            .any(|&(m, d)| date.month() == m && date.day() == d)
    }
}
