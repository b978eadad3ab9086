use crate::model::{ScheduleTable, Team};

/// Projection des colonnes autour de l'équipe de l'utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    /// Équipe mise en avant en premier, les autres dans l'ordre canonique.
    #[default]
    FocusFirst,
    /// Uniquement l'équipe mise en avant.
    OnlyFocus,
}

/// Réordonne (ou filtre) les colonnes ; ne touche ni au nombre ni à l'ordre
/// des lignes, ni au contenu des affectations.
pub fn filter_and_order_columns(
    table: &ScheduleTable,
    focus: Team,
    mode: ColumnMode,
) -> ScheduleTable {
    let order: Vec<Team> = match mode {
        ColumnMode::OnlyFocus => vec![focus],
        ColumnMode::FocusFirst => std::iter::once(focus)
            .chain(Team::ALL.into_iter().filter(|t| *t != focus))
            .collect(),
    };
    let teams: Vec<Team> = order
        .into_iter()
        .filter(|t| table.teams.contains(t))
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut row = row.clone();
            row.columns = teams.iter().filter_map(|t| row.get(*t).copied()).collect();
            row
        })
        .collect();

    ScheduleTable { teams, rows }
}
