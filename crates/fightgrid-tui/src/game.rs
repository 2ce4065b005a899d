use fightgrid_core::{
    clear_answer, connectors, submit_answer, FightGraph, FighterDirectory, FighterId, Generator,
    GeneratorConfig, GridError, GridResult, PuzzleGrid, Verdict,
};

/// One puzzle session over a loaded fight log
pub struct Game {
    graph: FightGraph,
    directory: FighterDirectory,
    config: GeneratorConfig,
    grid: PuzzleGrid,
    /// Seed the current grid was generated from
    seed: u64,
    /// Submissions on the current grid, right or wrong
    guesses: usize,
}

impl Game {
    /// Generate the first puzzle for a loaded fight log
    pub fn new(
        graph: FightGraph,
        directory: FighterDirectory,
        config: GeneratorConfig,
        seed: u64,
    ) -> GridResult<Self> {
        let graph = graph.with_directory(&directory);
        let grid = Self::generate(&graph, &config, seed)?;
        log::info!("new puzzle from seed {}", seed);
        Ok(Self {
            graph,
            directory,
            config,
            grid,
            seed,
            guesses: 0,
        })
    }

    fn generate(graph: &FightGraph, config: &GeneratorConfig, seed: u64) -> GridResult<PuzzleGrid> {
        let mut generator = Generator::with_seed(seed);
        generator.set_config(config.clone());
        generator.generate(graph)
    }

    /// Replace the grid wholesale; the old one is kept if generation fails
    pub fn new_puzzle(&mut self, seed: u64) -> GridResult<()> {
        self.grid = Self::generate(&self.graph, &self.config, seed)?;
        self.seed = seed;
        self.guesses = 0;
        log::info!("new puzzle from seed {}", seed);
        Ok(())
    }

    /// Map player input to a fighter: exact id first, then display name
    pub fn resolve(&self, input: &str) -> Option<FighterId> {
        let input = input.trim();
        if self.graph.is_known(input) {
            return Some(input.to_string());
        }
        self.directory
            .find_by_name(input)
            .filter(|id| self.graph.is_known(id))
            .cloned()
    }

    pub fn submit(&mut self, row: usize, col: usize, input: &str) -> GridResult<Verdict> {
        let id = self.resolve(input).ok_or_else(|| GridError::UnknownFighter {
            id: input.trim().to_string(),
        })?;
        let verdict = submit_answer(&self.graph, &mut self.grid, row, col, &id)?;
        self.guesses += 1;
        Ok(verdict)
    }

    pub fn clear(&mut self, row: usize, col: usize) -> GridResult<()> {
        clear_answer(&mut self.grid, row, col)
    }

    /// Display names of every valid answer for a cell
    pub fn reveal(&self, row: usize, col: usize) -> GridResult<Vec<String>> {
        Ok(connectors(&self.graph, &self.grid, row, col)?
            .iter()
            .map(|id| self.label(id).to_string())
            .collect())
    }

    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.directory.label(id)
    }

    pub fn grid(&self) -> &PuzzleGrid {
        &self.grid
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn guesses(&self) -> usize {
        self.guesses
    }

    pub fn fighter_count(&self) -> usize {
        self.graph.len()
    }

    pub fn is_completed(&self) -> bool {
        self.grid.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fightgrid_core::FightRecord;

    fn game() -> Game {
        let mut record = FightRecord::new();
        let mut directory = FighterDirectory::new();
        for i in 0..20 {
            directory.insert(format!("id{}", i), format!("Fighter {}", i));
            for step in 1..=3 {
                record.add_fight(&format!("id{}", i), &format!("id{}", (i + step) % 20));
            }
        }
        let config = GeneratorConfig::strict().with_min_degree(6);
        Game::new(FightGraph::new(&record), directory, config, 17).unwrap()
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let game = game();
        assert_eq!(game.resolve("id4").as_deref(), Some("id4"));
        assert_eq!(game.resolve(" fighter 4 ").as_deref(), Some("id4"));
        assert_eq!(game.resolve("Fighter 99"), None);
    }

    #[test]
    fn test_resolve_fighter_without_own_record() {
        let mut record = FightRecord::new();
        let mut directory = FighterDirectory::new();
        for i in 0..20 {
            for step in 1..=3 {
                record.add_fight(&format!("id{}", i), &format!("id{}", (i + step) % 20));
            }
        }
        // listed by id0 only, and named in the directory
        let mut opponents: Vec<String> = record.opponents("id0").unwrap().to_vec();
        opponents.push("guest".into());
        record.insert("id0", opponents);
        directory.insert("guest", "Guest Fighter");
        directory.insert("retired", "Retired Fighter");
        let config = GeneratorConfig::strict().with_min_degree(6);
        let game = Game::new(FightGraph::new(&record), directory, config, 5).unwrap();

        assert_eq!(game.resolve("guest").as_deref(), Some("guest"));
        assert_eq!(game.resolve("retired fighter").as_deref(), Some("retired"));
        assert_eq!(game.resolve("nobody"), None);
    }

    #[test]
    fn test_submit_by_display_name() {
        let mut game = game();
        let names = game.reveal(0, 0).unwrap();
        assert!(!names.is_empty());
        let verdict = game.submit(0, 0, &names[0]).unwrap();
        assert_eq!(verdict, Verdict::Correct);
        assert_eq!(game.guesses(), 1);
    }

    #[test]
    fn test_unknown_input_is_not_counted() {
        let mut game = game();
        assert!(matches!(
            game.submit(1, 1, "Nobody"),
            Err(GridError::UnknownFighter { id }) if id == "Nobody"
        ));
        assert_eq!(game.guesses(), 0);
    }

    #[test]
    fn test_new_puzzle_resets_progress() {
        let mut game = game();
        let names = game.reveal(0, 0).unwrap();
        game.submit(0, 0, &names[0]).unwrap();
        game.new_puzzle(18).unwrap();
        assert_eq!(game.seed(), 18);
        assert_eq!(game.guesses(), 0);
        assert_eq!(game.grid().correct_count(), 0);
    }
}
