use crate::holiday::HolidaySet;
use crate::model::ScheduleTable;
use crate::render::CellRenderer;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Écriture atomique (fichier temporaire dans le même dossier puis rename).
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

/// Export CSV du tableau : header `date,weekday,holiday,<équipes...>`.
pub fn export_table_csv<P: AsRef<Path>>(
    path: P,
    table: &ScheduleTable,
    renderer: &dyn CellRenderer,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    let mut header = vec!["date".to_string(), "weekday".to_string(), "holiday".to_string()];
    header.extend(table.teams.iter().map(|t| t.to_string()));
    w.write_record(&header)?;

    for row in &table.rows {
        let mut rec = vec![
            row.date.format("%Y-%m-%d").to_string(),
            row.weekday_label.clone(),
            if row.is_holiday { "1" } else { "0" }.to_string(),
        ];
        rec.extend(row.columns.iter().map(|a| renderer.render(a)));
        w.write_record(&rec)?;
    }

    let data = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv writer: {}", e.error()))?;
    write_atomic(path.as_ref(), &data)
}

/// Export JSON du tableau (jolie mise en forme).
pub fn export_table_json<P: AsRef<Path>>(path: P, table: &ScheduleTable) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(table)?;
    write_atomic(path.as_ref(), &json)
}

/// Import de jours fériés depuis CSV: header `date[,name]`,
/// date en `YYYY-MM-DD` ou `DD/MM/YYYY`.
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<HolidaySet> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = HolidaySet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing date")?.trim();
        if raw.is_empty() {
            continue;
        }
        out.insert(parse_date(raw)?);
    }
    Ok(out)
}

/// Import JSON : tableau de chaînes `YYYY-MM-DD`.
pub fn import_holidays_json<P: AsRef<Path>>(path: P) -> anyhow::Result<HolidaySet> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let dates: Vec<NaiveDate> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing holidays {}", path.display()))?;
    Ok(dates.into_iter().collect())
}

/// Choisit l'importeur selon l'extension (`.csv` ou `.json`).
pub fn load_holidays<P: AsRef<Path>>(path: P) -> anyhow::Result<HolidaySet> {
    let path = path.as_ref();
    let set = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => import_holidays_csv(path)?,
        Some(ext) if ext.eq_ignore_ascii_case("json") => import_holidays_json(path)?,
        _ => bail!("unsupported holiday file: {} (expected .csv or .json)", path.display()),
    };

    #[cfg(feature = "logging")]
    tracing::debug!(path = %path.display(), count = set.len(), "holidays loaded");

    Ok(set)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .with_context(|| format!("invalid date: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_date_formats_are_accepted() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        assert_eq!(parse_date("2025-07-09").unwrap(), expected);
        assert_eq!(parse_date("09/07/2025").unwrap(), expected);
        assert!(parse_date("July 9th").is_err());
    }
}
