#![forbid(unsafe_code)]
//! Turnos — calcul de la rotation de quarts des équipes 52A à 52D (sans BD).
//!
//! - Motif cyclique de 24 jours partagé, décalé par équipe.
//! - Tableaux par plage de dates, équipe de service du jour, grille annuelle.
//! - Jours fériés injectés (`HolidayCalendar`), jamais codés en dur dans le moteur.
//! - Dates calendaires pures ; le fuseau horaire reste à la charge de l'appelant.

#[cfg(feature = "serde")]
pub mod config;
pub mod holiday;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod rotation;
pub mod table;

#[cfg(feature = "serde")]
pub use config::{export_config_json, load_config_from_file, RotationConfig};
pub use holiday::{FixedHolidays, HolidayCalendar, HolidaySet, NoHolidays};
pub use model::{DayAssignment, ScheduleRow, ScheduleTable, ShiftKind, ShiftSlot, Team};
pub use render::{CellRenderer, CodeRenderer, LabelRenderer};
pub use rotation::{RotationEngine, RotationError, RotationPattern, EPOCH, PATTERN_LEN};
pub use table::{
    filter_and_order_columns, summarize, AnnualGrid, ColumnMode, DutyRoster, ScheduleTableBuilder,
    ShiftCounts,
};
