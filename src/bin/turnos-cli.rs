#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{FixedOffset, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use turnos::{
    config::{export_config_json, load_config_from_file, RotationConfig},
    holiday::{FixedHolidays, HolidaySet},
    io,
    model::{ShiftKind, Team},
    render::{self, CellRenderer, CodeRenderer, LabelRenderer},
    table::{filter_and_order_columns, summarize, ColumnMode, ScheduleTableBuilder},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Plafond d'affichage ; le moteur lui-même n'en impose aucun.
const MAX_DAYS: u32 = 45;

/// Argentine : UTC-3 toute l'année.
const UTC_OFFSET_SECS: i32 = -3 * 3600;

/// CLI de consultation des quarts 52A-52D
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Configuration JSON de la rotation (défaut : motif intégré)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Fichier de jours fériés (.csv ou .json)
    #[arg(long, global = true)]
    holidays: Option<String>,

    /// Ajoute les fériés nationaux argentins à date fixe
    #[arg(long, global = true)]
    fixed_holidays: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tableau des quarts sur une plage de jours
    Table {
        /// YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        start: Option<String>,
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// Équipe mise en avant (première colonne)
        #[arg(long)]
        team: Option<String>,
        /// N'afficher que l'équipe mise en avant
        #[arg(long, requires = "team")]
        only_mine: bool,
        /// Libellés longs au lieu des codes
        #[arg(long)]
        labels: bool,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Qui est de matin / après-midi / nuit / repos
    Today {
        /// YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
    },

    /// Décompte des quarts d'une équipe
    Summary {
        #[arg(long)]
        team: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Grille annuelle d'une équipe
    Grid {
        #[arg(long)]
        team: String,
        #[arg(long)]
        year: i32,
    },

    /// Prochain jour où une équipe tient un quart donné
    Next {
        #[arg(long)]
        team: String,
        /// M, T, N ou F
        #[arg(long)]
        kind: String,
        #[arg(long)]
        from: Option<String>,
    },

    /// Écrire la configuration par défaut
    InitConfig {
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => load_config_from_file(path)?,
        None => RotationConfig::default(),
    };
    let builder = ScheduleTableBuilder::new(config.engine()?);

    let file_holidays = match &cli.holidays {
        Some(path) => io::load_holidays(path)?,
        None => HolidaySet::new(),
    };
    let holidays = (file_holidays, cli.fixed_holidays.then(FixedHolidays::argentina));

    match cli.cmd {
        Commands::Table {
            start,
            days,
            team,
            only_mine,
            labels,
            out_csv,
            out_json,
        } => {
            if days > MAX_DAYS {
                bail!("--days est limité à {MAX_DAYS}");
            }
            let start = parse_date_or_today(start.as_deref())?;
            let mut table = builder.build_table(start, days, &holidays)?;
            if let Some(team) = team {
                let team: Team = team.parse()?;
                let mode = if only_mine {
                    ColumnMode::OnlyFocus
                } else {
                    ColumnMode::FocusFirst
                };
                table = filter_and_order_columns(&table, team, mode);
            }

            let renderer: &dyn CellRenderer = if labels { &LabelRenderer } else { &CodeRenderer };
            if let Some(path) = out_csv {
                io::export_table_csv(path, &table, renderer)?;
            }
            if let Some(path) = out_json {
                io::export_table_json(path, &table)?;
            }
            print!("{}", render::render_table(&table, renderer));
        }
        Commands::Today { date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let duty = builder.who_is_on(date, &holidays)?;
            println!(
                "{} {}{}",
                render::weekday_label(date),
                date.format("%d/%m/%Y"),
                if duty.is_holiday { " (feriado)" } else { "" }
            );
            for kind in ShiftKind::ALL {
                println!("{:<15} {}", render::kind_label(kind), duty.get(kind));
            }
        }
        Commands::Summary { team, start, days } => {
            let team: Team = team.parse()?;
            let start = parse_date_or_today(start.as_deref())?;
            let table = builder.build_table(start, days, &holidays)?;
            let counts = summarize(&table, team)?;
            println!(
                "{team}: {} mañanas, {} tardes, {} noches, {} francos ({} feriados)",
                counts.morning, counts.afternoon, counts.night, counts.off, counts.holidays
            );
        }
        Commands::Grid { team, year } => {
            let team: Team = team.parse()?;
            let grid = builder.annual_grid(year, team, &holidays);
            println!("{} {}", team.label(), grid.year);
            for month in &grid.months {
                let cells: Vec<String> = month
                    .cells
                    .iter()
                    .map(|c| c.map(|a| format!("{:<3}", a.to_string())).unwrap_or_default())
                    .collect();
                println!("{:02} | {}", month.month, cells.join(" ").trim_end());
            }
        }
        Commands::Next { team, kind, from } => {
            let team: Team = team.parse()?;
            let kind: ShiftKind = kind.parse()?;
            let from = parse_date_or_today(from.as_deref())?;
            let date = builder.next_occurrence(team, kind, from)?;
            println!("{}", date.format("%Y-%m-%d"));
        }
        Commands::InitConfig { out } => {
            export_config_json(&out, &RotationConfig::default())?;
            println!("config written to {out}");
        }
    }

    Ok(())
}

fn parse_date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid date (expected YYYY-MM-DD): {s}")),
        None => {
            let tz = FixedOffset::east_opt(UTC_OFFSET_SECS).context("invalid utc offset")?;
            Ok(Utc::now().with_timezone(&tz).date_naive())
        }
    }
}
