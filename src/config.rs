use crate::model::{ShiftKind, Team};
use crate::rotation::{RotationEngine, RotationError, RotationPattern, EPOCH, PATTERN_LEN};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Paramètres de la rotation, persistables en JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,
    pub pattern: Vec<ShiftKind>,
    pub offsets: BTreeMap<Team, i64>,
}

fn default_epoch() -> NaiveDate {
    EPOCH
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            epoch: EPOCH,
            pattern: RotationPattern::default().kinds().collect(),
            offsets: Team::ALL.into_iter().map(|t| (t, t.default_offset())).collect(),
        }
    }
}

impl RotationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pattern.len() != PATTERN_LEN {
            bail!(
                "pattern must contain exactly {PATTERN_LEN} positions (got {})",
                self.pattern.len()
            );
        }
        for kind in ShiftKind::ALL {
            if !self.pattern.contains(&kind) {
                bail!("pattern never uses kind {kind}");
            }
        }
        if let Some(missing) = Team::ALL.into_iter().find(|t| !self.offsets.contains_key(t)) {
            bail!("missing offset for team {missing}");
        }
        Ok(())
    }

    pub fn engine(&self) -> Result<RotationEngine, RotationError> {
        let pattern = RotationPattern::from_kinds(&self.pattern)?;
        let engine = self
            .offsets
            .iter()
            .fold(RotationEngine::new(), |e, (&team, &offset)| e.with_offset(team, offset));
        Ok(engine.with_pattern(pattern).with_epoch(self.epoch))
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RotationConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RotationConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;

    #[cfg(feature = "logging")]
    tracing::debug!(path = %path.display(), epoch = %config.epoch, "rotation config loaded");

    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RotationConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_vec_pretty(config)?;
    crate::io::write_atomic(path.as_ref(), &json)
}
