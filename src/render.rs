//! Mise en forme des affectations (codes, libellés, tableau texte).
//! Aucune logique de planification ici.

use crate::model::{DayAssignment, ScheduleTable, ShiftKind};
use chrono::{Datelike, NaiveDate, Weekday};

/// Abréviation espagnole du jour de la semaine.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mié",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

pub fn kind_label(kind: ShiftKind) -> &'static str {
    match kind {
        ShiftKind::Morning => "Mañana (06-14)",
        ShiftKind::Afternoon => "Tarde (14-22)",
        ShiftKind::Night => "Noche (22-06)",
        ShiftKind::Off => "Franco",
    }
}

/// Permet de choisir le rendu d'une cellule (code court, libellé, ...).
pub trait CellRenderer {
    fn render(&self, assignment: &DayAssignment) -> String;
}

/// `M3`, `F2*` (férié).
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeRenderer;

impl CellRenderer for CodeRenderer {
    fn render(&self, assignment: &DayAssignment) -> String {
        assignment.to_string()
    }
}

/// `Mañana (06-14)`, suffixé de ` - Feriado` les jours fériés.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelRenderer;

impl CellRenderer for LabelRenderer {
    fn render(&self, assignment: &DayAssignment) -> String {
        let label = kind_label(assignment.kind());
        if assignment.is_holiday {
            format!("{label} - Feriado")
        } else {
            label.to_string()
        }
    }
}

/// Tableau texte aligné : `Fecha | Día | <équipes...>`.
pub fn render_table(table: &ScheduleTable, renderer: &dyn CellRenderer) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.rows.len() + 1);

    let mut header = vec!["Fecha".to_string(), "Día".to_string()];
    header.extend(table.teams.iter().map(|t| t.to_string()));
    lines.push(header);

    for row in &table.rows {
        let mut cells = vec![
            row.date.format("%d/%m").to_string(),
            row.weekday_label.clone(),
        ];
        cells.extend(row.columns.iter().map(|a| renderer.render(a)));
        lines.push(cells);
    }

    let ncols = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..ncols)
        .map(|c| {
            lines
                .iter()
                .filter_map(|l| l.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &lines {
        let last = line.len().saturating_sub(1);
        let rendered: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == last {
                    cell.clone()
                } else {
                    format!("{cell:<width$}", width = widths[i])
                }
            })
            .collect();
        out.push_str(&rendered.join(" | "));
        out.push('\n');
    }
    out
}
