#![forbid(unsafe_code)]
use chrono::{Duration, NaiveDate};
use turnos::{
    HolidaySet, RotationEngine, RotationError, ScheduleTableBuilder, ShiftKind, ShiftSlot, Team,
    PATTERN_LEN,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_dates() -> Vec<NaiveDate> {
    let mut out: Vec<NaiveDate> = (-60..60).map(|i| d(2025, 1, 1) + Duration::days(i)).collect();
    out.extend([d(1970, 1, 1), d(2000, 2, 29), d(2099, 12, 31), d(1, 1, 1)]);
    out
}

#[test]
fn concrete_scenarios() {
    let e = RotationEngine::new();
    assert_eq!(e.slot_for(Team::T52C, d(2025, 1, 1)), ShiftSlot::new(ShiftKind::Morning, 3));
    assert_eq!(e.slot_for(Team::T52A, d(2025, 1, 1)), ShiftSlot::new(ShiftKind::Off, 2));
}

#[test]
fn schedule_repeats_every_cycle() {
    let e = RotationEngine::new();
    for date in sample_dates() {
        for team in Team::ALL {
            let later = date + Duration::days(PATTERN_LEN as i64);
            assert_eq!(e.slot_for(team, date), e.slot_for(team, later), "{team} {date}");
        }
    }
}

#[test]
fn teams_are_phase_shifted_copies() {
    let e = RotationEngine::new();
    for date in sample_dates() {
        for x in Team::ALL {
            for y in Team::ALL {
                let shift = e.offset(y) - e.offset(x);
                assert_eq!(e.slot_for(y, date), e.slot_for(x, date + Duration::days(shift)));
            }
        }
    }
}

#[test]
fn dates_before_epoch_are_valid() {
    let e = RotationEngine::new();
    let eve = d(2024, 12, 31);
    assert_eq!(e.slot_for(Team::T52C, eve), e.slot_for(Team::T52C, eve + Duration::days(24)));
    assert_eq!(e.slot_for(Team::T52C, eve), ShiftSlot::new(ShiftKind::Morning, 2));
}

#[test]
fn active_kinds_have_a_single_owner() {
    let b = ScheduleTableBuilder::default();
    let h = HolidaySet::new();
    for date in sample_dates() {
        let duty = b.who_is_on(date, &h).unwrap();
        let mut owners = vec![duty.morning, duty.afternoon, duty.night, duty.off];
        owners.sort();
        owners.dedup();
        assert_eq!(owners.len(), 4, "{date}");
    }
}

#[test]
fn edited_offsets_surface_inconsistency() {
    let engine = RotationEngine::new()
        .with_offset(Team::T52A, 0)
        .with_offset(Team::T52B, 0)
        .with_offset(Team::T52C, 0)
        .with_offset(Team::T52D, 0);
    let b = ScheduleTableBuilder::new(engine);
    let err = b.who_is_on(d(2025, 1, 1), &HolidaySet::new()).unwrap_err();
    assert!(matches!(
        err,
        RotationError::InconsistentRotation { kind: ShiftKind::Morning, ref teams, .. } if teams.len() == 4
    ));
}
