use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fightgrid_core::{
    submit_answer, FightGraph, FighterDirectory, Generator, GeneratorConfig, GridError, PuzzleGrid,
    Verdict,
};

uniffi::setup_scaffolding!();

/// Errors surfaced to the host platform
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FightGridError {
    #[error("Unknown fighter: {id}")]
    UnknownFighter { id: String },
    #[error("{reason}")]
    GenerationFailed { reason: String, retryable: bool },
    #[error("Cell ({row}, {col}) is outside the grid")]
    InvalidCell { row: u32, col: u32 },
    #[error("Invalid data: {details}")]
    InvalidData { details: String },
    #[error("No puzzle has been generated yet")]
    NoPuzzle,
}

impl From<GridError> for FightGridError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::UnknownFighter { id } => Self::UnknownFighter { id },
            GridError::InvalidCell { row, col } => Self::InvalidCell {
                row: row as u32,
                col: col as u32,
            },
            GridError::InvalidData(e) => Self::InvalidData {
                details: e.to_string(),
            },
            err @ (GridError::GenerationFailure(_) | GridError::DuplicateAnchor { .. }) => {
                Self::GenerationFailed {
                    retryable: err.is_retryable(),
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// State of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum CellVerdict {
    Unanswered,
    Correct,
    Incorrect,
}

impl From<Verdict> for CellVerdict {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Unanswered => CellVerdict::Unanswered,
            Verdict::Correct => CellVerdict::Correct,
            Verdict::Incorrect => CellVerdict::Incorrect,
        }
    }
}

/// Header fighters of the current grid
#[derive(Debug, Clone, uniffi::Record)]
pub struct Anchors {
    pub columns: Vec<String>,
    pub rows: Vec<String>,
}

/// Generation settings as seen from the host
#[derive(Debug, Clone, uniffi::Record)]
pub struct PuzzleOptions {
    pub min_degree: u32,
    pub max_attempts: u32,
    /// Retry until every cell has at least one valid answer
    pub require_solvable_cells: bool,
}

impl From<PuzzleOptions> for GeneratorConfig {
    fn from(o: PuzzleOptions) -> Self {
        GeneratorConfig {
            min_degree: o.min_degree as usize,
            max_attempts: o.max_attempts as usize,
            require_solvable_cells: o.require_solvable_cells,
        }
    }
}

/// One player's puzzle over a shared fight log.
///
/// Every method takes the grid lock, so submissions from different threads
/// are applied one at a time and the last write to a cell wins.
#[derive(uniffi::Object)]
pub struct FightGridSession {
    graph: FightGraph,
    directory: FighterDirectory,
    generator: Mutex<Generator>,
    grid: Mutex<Option<PuzzleGrid>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FightGridSession {
    fn build(fights_json: &str, names_json: &str, generator: Generator) -> Result<Arc<Self>, FightGridError> {
        let directory = FighterDirectory::from_json(names_json)?;
        let graph = FightGraph::from_json(fights_json)?.with_directory(&directory);
        log::info!("session over {} fighters", graph.len());
        Ok(Arc::new(Self {
            graph,
            directory,
            generator: Mutex::new(generator),
            grid: Mutex::new(None),
        }))
    }

    fn with_grid<T>(
        &self,
        f: impl FnOnce(&mut PuzzleGrid) -> Result<T, FightGridError>,
    ) -> Result<T, FightGridError> {
        let mut grid = lock(&self.grid);
        f(grid.as_mut().ok_or(FightGridError::NoPuzzle)?)
    }
}

#[uniffi::export]
impl FightGridSession {
    /// Parse the fight-record and directory JSON assets
    #[uniffi::constructor]
    pub fn new(fights_json: String, names_json: String) -> Result<Arc<Self>, FightGridError> {
        Self::build(&fights_json, &names_json, Generator::new())
    }

    /// Same as `new`, but puzzles come from a fixed seed
    #[uniffi::constructor]
    pub fn with_seed(
        fights_json: String,
        names_json: String,
        seed: u64,
    ) -> Result<Arc<Self>, FightGridError> {
        Self::build(&fights_json, &names_json, Generator::with_seed(seed))
    }

    pub fn set_options(&self, options: PuzzleOptions) {
        lock(&self.generator).set_config(options.into());
    }

    /// Generate a new grid, replacing the current one on success
    pub fn new_puzzle(&self, min_degree: u32) -> Result<Anchors, FightGridError> {
        let grid = {
            let mut generator = lock(&self.generator);
            let config = generator.config().clone().with_min_degree(min_degree as usize);
            generator.set_config(config);
            generator.generate(&self.graph)?
        };
        let anchors = Anchors {
            columns: grid.columns().to_vec(),
            rows: grid.rows().to_vec(),
        };
        *lock(&self.grid) = Some(grid);
        Ok(anchors)
    }

    pub fn anchors(&self) -> Result<Anchors, FightGridError> {
        self.with_grid(|grid| {
            Ok(Anchors {
                columns: grid.columns().to_vec(),
                rows: grid.rows().to_vec(),
            })
        })
    }

    pub fn submit(&self, row: u32, col: u32, fighter_id: String) -> Result<CellVerdict, FightGridError> {
        self.with_grid(|grid| {
            let verdict = submit_answer(&self.graph, grid, row as usize, col as usize, &fighter_id)?;
            Ok(verdict.into())
        })
    }

    pub fn verdict(&self, row: u32, col: u32) -> Result<CellVerdict, FightGridError> {
        self.with_grid(|grid| {
            grid.verdict(row as usize, col as usize)
                .map(CellVerdict::from)
                .ok_or(FightGridError::InvalidCell { row, col })
        })
    }

    pub fn answer(&self, row: u32, col: u32) -> Result<Option<String>, FightGridError> {
        self.with_grid(|grid| {
            grid.verdict(row as usize, col as usize)
                .ok_or(FightGridError::InvalidCell { row, col })?;
            Ok(grid.answer(row as usize, col as usize).cloned())
        })
    }

    pub fn is_complete(&self) -> bool {
        lock(&self.grid).as_ref().is_some_and(PuzzleGrid::is_complete)
    }

    pub fn display_name(&self, fighter_id: String) -> String {
        self.directory.label(&fighter_id).to_string()
    }

    /// Resolve a typed name to a fighter id
    pub fn find_fighter(&self, name: String) -> Option<String> {
        self.directory
            .find_by_name(&name)
            .filter(|id| self.graph.is_known(id))
            .cloned()
    }

    /// Current grid as JSON, for hosts that persist it themselves
    pub fn state_json(&self) -> Result<String, FightGridError> {
        self.with_grid(|grid| {
            serde_json::to_string(grid).map_err(|e| FightGridError::InvalidData {
                details: e.to_string(),
            })
        })
    }
}
