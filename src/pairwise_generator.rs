//! PairwiseGenerator
//!
//! The coverage-driven greedy search: a primary pass that minimizes the
//! number of emitted combinations while making maximal coverage progress
//! each iteration, followed by a secondary gap-filling pass that trades
//! optimality for the completeness guarantee in P2 (spec §4.3).

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::cancellation::{CancellationToken, GeneratorOutcome};
use crate::combination::Combination;
use crate::config::SearchConfig;
use crate::error::GenResult;
use crate::pair_universe::{self, CanonicalPair};
use crate::result_table::ResultTable;
use crate::test_input::TestInput;

/// Lifecycle of one generator invocation. `Running` is not re-entrant —
/// each [`PairwiseGenerator`] is consumed by exactly one `generate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Greedy two-phase pairwise coverage generator.
pub struct PairwiseGenerator<'a> {
    input: &'a TestInput,
    state: State,
    search_config: SearchConfig,
}

fn canonical(i: usize, a: &str, j: usize, b: &str) -> CanonicalPair {
    if i < j {
        CanonicalPair {
            i,
            a: a.to_string(),
            j,
            b: b.to_string(),
        }
    } else {
        CanonicalPair {
            i: j,
            a: b.to_string(),
            j: i,
            b: a.to_string(),
        }
    }
}

/// All pairs contributed by a filled combination (every unordered pair of
/// its slots). Per invariant I4, each of these must already be a member of
/// the pair universe.
fn pairs_of(combo: &Combination) -> Vec<CanonicalPair> {
    let slots = combo.slots();
    let mut out = Vec::new();
    for i in 0..slots.len() {
        let Some(a) = &slots[i] else { continue };
        for j in (i + 1)..slots.len() {
            let Some(b) = &slots[j] else { continue };
            out.push(canonical(i, a.name(), j, b.name()));
        }
    }
    out
}

fn score_against(combo: &Combination, covered: &HashSet<CanonicalPair>, universe: &HashSet<CanonicalPair>) -> usize {
    pairs_of(combo)
        .into_iter()
        .filter(|p| universe.contains(p) && !covered.contains(p))
        .count()
}

/// Greedy fill used by the primary pass: maximize newly-covered pairs at
/// each remaining slot, falling back to the first valid partition when no
/// option makes positive progress.
fn greedy_fill(
    input: &TestInput,
    covered: &HashSet<CanonicalPair>,
    universe: &HashSet<CanonicalPair>,
    seed: Combination,
) -> Option<Combination> {
    let mut combo = seed;
    for k in 0..input.parameters().len() {
        if combo.get(k).is_some() {
            continue;
        }
        let param = &input.parameters()[k];
        let mut best: Option<(usize, usize)> = None; // (partition_index, score)
        let mut first_valid: Option<usize> = None;

        for (idx, candidate) in param.partitions().iter().enumerate() {
            if !combo.is_compatible_with_filled(input, k, candidate) {
                continue;
            }
            if first_valid.is_none() {
                first_valid = Some(idx);
            }
            let score: usize = combo
                .slots()
                .iter()
                .enumerate()
                .filter_map(|(j, slot)| {
                    if j == k {
                        return None;
                    }
                    let other = slot.as_ref()?;
                    let pair = canonical(k, candidate.name(), j, other.name());
                    (universe.contains(&pair) && !covered.contains(&pair)).then_some(())
                })
                .count();

            let is_better = match best {
                None => true,
                Some((best_idx, best_score)) => {
                    score > best_score
                        || (score == best_score
                            && candidate.name() < param.partitions()[best_idx].name())
                }
            };
            if score > 0 && is_better {
                best = Some((idx, score));
            }
        }

        let chosen = match best {
            Some((idx, _)) => idx,
            None => first_valid?,
        };
        combo.set(k, param.partitions()[chosen].clone());
    }
    Some(combo)
}

/// Validity-only fill used by the secondary pass: the first partition (in
/// declared order) that keeps the combination valid wins.
fn validity_fill(input: &TestInput, seed: Combination) -> Option<Combination> {
    let mut combo = seed;
    for k in 0..input.parameters().len() {
        if combo.get(k).is_some() {
            continue;
        }
        let param = &input.parameters()[k];
        let chosen = param
            .partitions()
            .iter()
            .find(|candidate| combo.is_compatible_with_filled(input, k, candidate))?;
        combo.set(k, chosen.clone());
    }
    Some(combo)
}

impl<'a> PairwiseGenerator<'a> {
    pub fn new(input: &'a TestInput) -> Self {
        PairwiseGenerator {
            input,
            state: State::Fresh,
            search_config: SearchConfig::default(),
        }
    }

    /// Override the search-tuning knobs (see [`SearchConfig`]) before
    /// calling `generate`. Must be called on a `Fresh` instance.
    #[must_use]
    pub fn with_search_config(mut self, search_config: SearchConfig) -> Self {
        self.search_config = search_config;
        self
    }

    /// Run the generator to completion or until `cancel` is observed.
    ///
    /// # Errors
    /// Returns [`crate::error::GenError::InvalidArgument`] only via the
    /// caller's own input validation; this method itself never fails on a
    /// well-formed [`TestInput`] (0 and 1-parameter inputs are handled as
    /// degenerate cases per spec §4.3 rather than as errors).
    pub fn generate(mut self, cancel: &CancellationToken) -> GenResult<GeneratorOutcome> {
        assert_eq!(self.state, State::Fresh, "generator is not re-entrant");
        self.state = State::Running;

        let params = self.input.parameters();
        if params.is_empty() {
            self.state = State::Done;
            return Ok(GeneratorOutcome::Completed(ResultTable::new()));
        }
        if params.len() == 1 {
            let mut table = ResultTable::new();
            for partition in params[0].partitions() {
                let mut combo = Combination::empty(1);
                combo.set(0, partition.clone());
                table.push_unique(combo);
            }
            self.state = State::Done;
            return Ok(GeneratorOutcome::Completed(table));
        }

        let universe = pair_universe::build(self.input);
        info!(pairs = universe.len(), "pair universe built");
        if universe.is_empty() {
            // Degenerate: at least 2 parameters but no compatible pairs.
            self.state = State::Done;
            return Ok(GeneratorOutcome::Completed(ResultTable::new()));
        }

        let mut covered: HashSet<CanonicalPair> = HashSet::new();
        let mut table = ResultTable::new();

        'primary: while covered.len() < universe.len() {
            if cancel.is_cancelled() {
                self.state = State::Done;
                return Ok(GeneratorOutcome::Cancelled(table));
            }

            let mut best: Option<(Combination, usize)> = None;
            for k in 0..params.len() {
                for seed_partition in params[k].partitions() {
                    let mut seed = Combination::empty(params.len());
                    seed.set(k, seed_partition.clone());
                    let Some(candidate) = greedy_fill(self.input, &covered, &universe, seed) else {
                        continue;
                    };
                    let score = score_against(&candidate, &covered, &universe);
                    let is_better = match &best {
                        None => true,
                        Some((best_combo, best_score)) => {
                            score > *best_score
                                || (score == *best_score && candidate.key() < best_combo.key())
                        }
                    };
                    if is_better {
                        best = Some((candidate, score));
                    }
                }
            }

            match best {
                Some((candidate, score)) if score > 0 => {
                    debug!(key = %candidate.key(), score, "primary pass selected candidate");
                    for pair in pairs_of(&candidate) {
                        covered.insert(pair);
                    }
                    table.push_unique(candidate);
                }
                _ => {
                    debug!("primary pass made no further progress, stopping");
                    break 'primary;
                }
            }
        }

        // Secondary pass: gap fill remaining uncovered pairs. Disabling this
        // via `SearchConfig::enable_gap_filling` trades completeness (P2)
        // for speed and is off-spec; exposed for diagnostics only.
        if self.search_config.enable_gap_filling {
            let remaining: Vec<CanonicalPair> = universe.difference(&covered).cloned().collect();
            for pair in remaining {
                if covered.contains(&pair) {
                    continue;
                }
                if cancel.is_cancelled() {
                    self.state = State::Done;
                    return Ok(GeneratorOutcome::Cancelled(table));
                }

                let mut seed = Combination::empty(params.len());
                let a = params[pair.i]
                    .partitions()
                    .iter()
                    .find(|p| p.name() == pair.a)
                    .expect("canonical pair names a known partition");
                let b = params[pair.j]
                    .partitions()
                    .iter()
                    .find(|p| p.name() == pair.b)
                    .expect("canonical pair names a known partition");
                seed.set(pair.i, a.clone());
                seed.set(pair.j, b.clone());

                match validity_fill(self.input, seed) {
                    Some(candidate) => {
                        for p in pairs_of(&candidate) {
                            covered.insert(p);
                        }
                        table.push_unique(candidate);
                    }
                    None => {
                        warn!(pair = ?pair, "pair is uncoverable by any valid completion, skipping");
                    }
                }
            }
        } else {
            debug!("secondary gap-filling pass disabled by config, skipping");
        }

        self.state = State::Done;
        Ok(GeneratorOutcome::Completed(table))
    }

    /// Non-cancellable convenience entry point.
    pub fn generate_blocking(self) -> GenResult<ResultTable> {
        let token = CancellationToken::new();
        self.generate(&token).map(GeneratorOutcome::into_result_table)
    }
}
