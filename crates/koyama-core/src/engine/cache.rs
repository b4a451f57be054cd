use crate::core::omega::{Omega, OmegaError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::trace;

/// Caller-owned memo of structure factors, keyed on the exact bit pattern of the grid.
///
/// Two grids hit the same entry only if every value is bitwise identical, so `0.0` and `-0.0`
/// are different keys. Failed evaluations are not stored.
#[derive(Debug)]
pub struct OmegaMemo<M: Omega> {
    model: M,
    entries: HashMap<Vec<u64>, Vec<f64>>,
}

impl<M: Omega> OmegaMemo<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            entries: HashMap::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn calculate(&mut self, k: &[f64]) -> Result<&[f64], OmegaError> {
        match self.entries.entry(grid_key(k)) {
            Entry::Occupied(entry) => {
                trace!(points = k.len(), "Structure factor served from memo.");
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                let omega = self.model.calculate(k)?;
                Ok(entry.insert(omega).as_slice())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn into_model(self) -> M {
        self.model
    }
}

fn grid_key(k: &[f64]) -> Vec<u64> {
    k.iter().map(|v| v.to_bits()).collect()
}
