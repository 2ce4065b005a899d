//! Browser-side session state, kept free of wasm-bindgen types

use fightgrid_core::{
    submit_answer, FightGraph, FighterDirectory, FighterId, Generator, GeneratorConfig, GridResult,
    PortraitIndex, PuzzleGrid, Verdict, GRID_SIZE,
};
use serde::{Deserialize, Serialize};

/// Snapshot handed to the JS shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableState {
    pub columns: Vec<Anchor>,
    pub rows: Vec<Anchor>,
    pub answers: Vec<Vec<Option<FighterId>>>,
    pub verdicts: Vec<Vec<Verdict>>,
    pub correct: usize,
    pub complete: bool,
    pub min_degree: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anchor {
    pub id: FighterId,
    pub name: String,
    pub portrait: Option<String>,
}

pub struct GameState {
    graph: FightGraph,
    directory: FighterDirectory,
    portraits: PortraitIndex,
    generator: Generator,
    grid: Option<PuzzleGrid>,
}

impl GameState {
    /// Parse the fight record and directory; no puzzle exists until `new_puzzle`
    pub fn new(fights_json: &str, names_json: &str) -> GridResult<Self> {
        let directory = FighterDirectory::from_json(names_json)?;
        let graph = FightGraph::from_json(fights_json)?.with_directory(&directory);
        log::info!("loaded {} fighters, {} names", graph.len(), directory.len());
        Ok(Self {
            graph,
            directory,
            portraits: PortraitIndex::default(),
            generator: Generator::new(),
            grid: None,
        })
    }

    pub fn set_portraits(&mut self, portraits_json: &str) -> GridResult<()> {
        self.portraits = PortraitIndex::from_json(portraits_json)?;
        Ok(())
    }

    /// Replace the grid; the previous one survives a failed generation
    pub fn new_puzzle(&mut self, min_degree: usize) -> GridResult<()> {
        let config = self.generator.config().clone().with_min_degree(min_degree);
        self.generator.set_config(config);
        self.grid = Some(self.generator.generate(&self.graph)?);
        Ok(())
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.generator.set_config(config);
    }

    pub fn grid(&self) -> Option<&PuzzleGrid> {
        self.grid.as_ref()
    }

    pub fn column_ids(&self) -> Vec<FighterId> {
        self.grid.iter().flat_map(|g| g.columns().iter().cloned()).collect()
    }

    pub fn row_ids(&self) -> Vec<FighterId> {
        self.grid.iter().flat_map(|g| g.rows().iter().cloned()).collect()
    }

    pub fn display_name(&self, id: &str) -> String {
        self.directory.label(id).to_string()
    }

    pub fn portrait_url(&self, id: &str) -> Option<String> {
        self.portraits.url_for(id, &self.directory).map(str::to_string)
    }

    /// `None` until a puzzle has been generated
    pub fn submit(&mut self, row: usize, col: usize, id: &str) -> Option<GridResult<Verdict>> {
        let grid = self.grid.as_mut()?;
        Some(submit_answer(&self.graph, grid, row, col, id))
    }

    pub fn is_complete(&self) -> bool {
        self.grid.as_ref().is_some_and(PuzzleGrid::is_complete)
    }

    pub fn to_serializable(&self) -> Option<SerializableState> {
        let grid = self.grid.as_ref()?;
        let anchor = |id: &FighterId| Anchor {
            id: id.clone(),
            name: self.display_name(id),
            portrait: self.portrait_url(id),
        };
        Some(SerializableState {
            columns: grid.columns().iter().map(anchor).collect(),
            rows: grid.rows().iter().map(anchor).collect(),
            answers: (0..GRID_SIZE)
                .map(|r| (0..GRID_SIZE).map(|c| grid.answer(r, c).cloned()).collect())
                .collect(),
            verdicts: grid.verdicts().iter().map(|row| row.to_vec()).collect(),
            correct: grid.correct_count(),
            complete: grid.is_complete(),
            min_degree: self.generator.config().min_degree,
        })
    }
}
