use crate::{
    AnchorSlot, FailureReason, FightGraph, FighterId, GridResult, PuzzleGrid, Ranker,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fewest recorded fights for the first anchor
    pub min_degree: usize,
    /// Maximum attempts before giving up
    pub max_attempts: usize,
    /// Reject grids where any row/column pair has no connector
    pub require_solvable_cells: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GeneratorConfig {
    pub fn relaxed() -> Self {
        Self {
            min_degree: 5,
            max_attempts: 100,
            require_solvable_cells: false,
        }
    }

    pub fn standard() -> Self {
        Self {
            min_degree: 10,
            max_attempts: 50,
            require_solvable_cells: false,
        }
    }

    /// Every cell checked for a connector before the grid is accepted
    pub fn strict() -> Self {
        Self {
            min_degree: 10,
            max_attempts: 200,
            require_solvable_cells: true,
        }
    }

    pub fn with_min_degree(mut self, min_degree: usize) -> Self {
        self.min_degree = min_degree;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Puzzle generator owning its random source
pub struct Generator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(entropy_seed()),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Generate a fresh puzzle, retrying up to the configured attempt count
    pub fn generate(&mut self, graph: &FightGraph) -> GridResult<PuzzleGrid> {
        generate_puzzle(graph, &self.config, &mut self.rng)
    }
}

/// Generate a puzzle, retrying whole attempts while the failure is retryable
pub fn generate_puzzle<R: Rng>(
    graph: &FightGraph,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GridResult<PuzzleGrid> {
    let attempts = config.max_attempts.max(1);

    for attempt in 1..=attempts {
        let result = select_anchors(graph, config, rng).and_then(|grid| {
            if config.require_solvable_cells {
                let unsolvable = grid.unsolvable_cells(graph);
                if !unsolvable.is_empty() {
                    return Err(FailureReason::Unsolvable { cells: unsolvable.len() }.into());
                }
            }
            Ok(grid)
        });

        match result {
            Ok(grid) => {
                log::debug!(
                    "generated puzzle on attempt {}: columns {:?}, rows {:?}",
                    attempt,
                    grid.columns(),
                    grid.rows()
                );
                return Ok(grid);
            }
            Err(err) if err.is_retryable() => {
                log::debug!("attempt {}/{} rejected: {}", attempt, attempts, err);
            }
            Err(err) => {
                log::warn!("puzzle generation aborted: {}", err);
                return Err(err);
            }
        }
    }

    log::warn!("puzzle generation gave up after {} attempts", attempts);
    Err(FailureReason::AttemptsExhausted { attempts }.into())
}

/// One generation attempt.
///
/// Column anchors A, B, C and row anchors D, E, F are chosen greedily, each
/// from the two-hop neighborhood of anchors already placed:
/// A at random from the eligible pool, D and E from A's neighborhood ranked
/// by overlap with A, B from D∩E ranked by overlap with E, F from A∩B ranked
/// by overlap with B, and C from D∩E∩F ranked by degree. D, E, B and F must
/// share at least one opponent with the anchor they are ranked against.
pub fn select_anchors<R: Rng>(
    graph: &FightGraph,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GridResult<PuzzleGrid> {
    let pool = graph.eligible(config.min_degree);
    if pool.is_empty() {
        return Err(FailureReason::EmptyPool {
            min_degree: config.min_degree,
        }
        .into());
    }

    let ranker = Ranker::new(graph);
    let mut selection = Selection::default();

    let a = pool[rng.gen_range(0..pool.len())].clone();
    selection.take(&a);
    let around_a = graph.opponents_of_opponents(&a)?;

    // D and E come from the same ranked list
    let ranked = ranker.order_by_intersection_size(&a, &with_records(graph, &around_a));
    let d = selection.first_sharing(graph, &ranked, &a, AnchorSlot::Row(0))?;
    let e = selection.first_sharing(graph, &ranked, &a, AnchorSlot::Row(1))?;

    let around_d = graph.opponents_of_opponents(&d)?;
    let around_e = graph.opponents_of_opponents(&e)?;
    let around_de: BTreeSet<FighterId> = around_d.intersection(&around_e).cloned().collect();
    let ranked = ranker.order_by_intersection_size(&e, &with_records(graph, &around_de));
    let b = selection.first_sharing(graph, &ranked, &e, AnchorSlot::Column(1))?;

    let around_b = graph.opponents_of_opponents(&b)?;
    let around_ab: BTreeSet<FighterId> = around_a.intersection(&around_b).cloned().collect();
    let ranked = ranker.order_by_intersection_size(&b, &with_records(graph, &around_ab));
    let f = selection.first_sharing(graph, &ranked, &b, AnchorSlot::Row(2))?;

    let around_f = graph.opponents_of_opponents(&f)?;
    let around_def: BTreeSet<FighterId> = around_de.intersection(&around_f).cloned().collect();
    let ranked = ranker.order_by_degree(&with_records(graph, &around_def));
    let c = selection.first_unselected(&ranked, AnchorSlot::Column(2))?;

    log::debug!(
        "anchors: A={} B={} C={} D={} E={} F={}",
        a, b, c, d, e, f
    );
    PuzzleGrid::from_anchors([a, b, c], [d, e, f])
}

/// Candidates in id order, minus fighters with no record of their own.
/// Those cannot anchor a row or column: nothing could be judged against them.
fn with_records(graph: &FightGraph, candidates: &BTreeSet<FighterId>) -> Vec<FighterId> {
    candidates
        .iter()
        .filter(|id| graph.contains(id))
        .cloned()
        .collect()
}

/// Anchors already placed during one attempt
#[derive(Debug, Default)]
struct Selection {
    taken: HashSet<FighterId>,
}

impl Selection {
    fn take(&mut self, id: &str) {
        self.taken.insert(id.to_string());
    }

    fn first_unselected(&mut self, ranked: &[FighterId], slot: AnchorSlot) -> GridResult<FighterId> {
        self.first_matching(ranked, slot, |_| true)
    }

    /// Like `first_unselected`, but the pick must share an opponent with `target`
    fn first_sharing(
        &mut self,
        graph: &FightGraph,
        ranked: &[FighterId],
        target: &str,
        slot: AnchorSlot,
    ) -> GridResult<FighterId> {
        self.first_matching(ranked, slot, |id| graph.share_opponent(target, id))
    }

    fn first_matching(
        &mut self,
        ranked: &[FighterId],
        slot: AnchorSlot,
        accept: impl Fn(&str) -> bool,
    ) -> GridResult<FighterId> {
        let pick = ranked
            .iter()
            .find(|id| !self.taken.contains(id.as_str()) && accept(id.as_str()))
            .cloned()
            .ok_or(FailureReason::Exhausted { slot })?;
        self.taken.insert(pick.clone());
        Ok(pick)
    }
}

/// Seed from the OS (or the browser's crypto API under wasm)
fn entropy_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
        // Fallback: use a static counter if getrandom fails
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    });
    u64::from_le_bytes(seed_bytes)
}
