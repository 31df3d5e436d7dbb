//! CartesianGenerator
//!
//! Bounded, depth-first enumeration of the full Cartesian product of
//! partitions in declared parameter/partition order, skipping invalid
//! assignments and halting at a caller-supplied bound (spec §4.4).

use tracing::info;

use crate::cancellation::{CancellationToken, GeneratorOutcome};
use crate::combination::Combination;
use crate::error::{GenError, GenResult};
use crate::result_table::ResultTable;
use crate::test_input::TestInput;

/// Enumerates the bounded Cartesian product, depth-first by parameter
/// index and declared partition order.
pub struct CartesianGenerator<'a> {
    input: &'a TestInput,
    limit: u64,
}

impl<'a> CartesianGenerator<'a> {
    /// # Errors
    /// Returns [`GenError::InvalidArgument`] if `limit < 1`.
    pub fn new(input: &'a TestInput, limit: u64) -> GenResult<Self> {
        if limit < 1 {
            return Err(GenError::InvalidArgument(
                "cartesian limit must be >= 1".to_string(),
            ));
        }
        Ok(CartesianGenerator { input, limit })
    }

    pub fn generate(&self, cancel: &CancellationToken) -> GenResult<GeneratorOutcome> {
        let mut table = ResultTable::new();
        if self.input.is_empty() {
            return Ok(GeneratorOutcome::Completed(table));
        }

        let mut combo = Combination::empty(self.input.parameters().len());
        let cancelled = self.recurse(0, &mut combo, &mut table, cancel);
        info!(emitted = table.len(), limit = self.limit, "cartesian enumeration finished");
        Ok(if cancelled {
            GeneratorOutcome::Cancelled(table)
        } else {
            GeneratorOutcome::Completed(table)
        })
    }

    /// Returns `true` if cancellation was observed before completion.
    fn recurse(
        &self,
        slot: usize,
        combo: &mut Combination,
        table: &mut ResultTable,
        cancel: &CancellationToken,
    ) -> bool {
        if table.len() as u64 >= self.limit {
            return false;
        }
        if cancel.is_cancelled() {
            return true;
        }

        if slot == self.input.parameters().len() {
            if combo.is_valid(self.input) {
                table.push_unique(combo.clone());
            }
            return false;
        }

        for partition in self.input.parameters()[slot].partitions() {
            if table.len() as u64 >= self.limit {
                return false;
            }
            combo.set(slot, partition.clone());
            if self.recurse(slot + 1, combo, table, cancel) {
                return true;
            }
        }
        false
    }
}
