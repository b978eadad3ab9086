use super::{RotationError, PATTERN_LEN};
use crate::model::{ShiftKind, ShiftSlot};

use crate::model::ShiftKind::{Afternoon as T, Morning as M, Night as N, Off as F};

/// 6M - 1F - 6N - 3F - 6T - 2F
const DEFAULT_KINDS: [ShiftKind; PATTERN_LEN] = [
    M, M, M, M, M, M, F, N, N, N, N, N, N, F, F, F, T, T, T, T, T, T, F, F,
];

/// Motif cyclique partagé (lecture seule) par toutes les équipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPattern {
    slots: Vec<ShiftSlot>,
}

impl Default for RotationPattern {
    fn default() -> Self {
        Self {
            slots: build_slots(&DEFAULT_KINDS),
        }
    }
}

impl RotationPattern {
    /// Construit un motif à partir d'une suite de natures ; `sub_index` est
    /// la position (1-based) dans chaque série de natures identiques.
    pub fn from_kinds(kinds: &[ShiftKind]) -> Result<Self, RotationError> {
        if kinds.len() != PATTERN_LEN {
            return Err(RotationError::InvalidPattern(format!(
                "expected {PATTERN_LEN} positions, got {}",
                kinds.len()
            )));
        }
        Ok(Self {
            slots: build_slots(kinds),
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[ShiftSlot] {
        &self.slots
    }

    pub fn kinds(&self) -> impl Iterator<Item = ShiftKind> + '_ {
        self.slots.iter().map(|s| s.kind)
    }

    /// `index` est ramené dans le cycle.
    pub fn at(&self, index: usize) -> ShiftSlot {
        self.slots[index % self.slots.len()]
    }

    pub fn count(&self, kind: ShiftKind) -> usize {
        self.kinds().filter(|k| *k == kind).count()
    }
}

fn build_slots(kinds: &[ShiftKind]) -> Vec<ShiftSlot> {
    let mut out: Vec<ShiftSlot> = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let sub_index = match out.last() {
            Some(prev) if prev.kind == kind => prev.sub_index + 1,
            _ => 1,
        };
        out.push(ShiftSlot::new(kind, sub_index));
    }
    out
}
