use crate::{FightGraph, FighterId, GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rows and columns per grid
pub const GRID_SIZE: usize = 3;

/// Judgement of one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Unanswered => write!(f, "unanswered"),
            Verdict::Correct => write!(f, "correct"),
            Verdict::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// A generated puzzle and the player's answers so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleGrid {
    columns: [FighterId; GRID_SIZE],
    rows: [FighterId; GRID_SIZE],
    answers: [[Option<FighterId>; GRID_SIZE]; GRID_SIZE],
    verdicts: [[Verdict; GRID_SIZE]; GRID_SIZE],
}

impl PuzzleGrid {
    /// Build an unanswered grid; the six anchors must be distinct
    pub fn from_anchors(columns: [FighterId; GRID_SIZE], rows: [FighterId; GRID_SIZE]) -> GridResult<Self> {
        let mut seen = HashSet::new();
        for id in columns.iter().chain(rows.iter()) {
            if !seen.insert(id.as_str()) {
                return Err(GridError::DuplicateAnchor { id: id.clone() });
            }
        }
        Ok(Self {
            columns,
            rows,
            answers: Default::default(),
            verdicts: Default::default(),
        })
    }

    pub fn columns(&self) -> &[FighterId; GRID_SIZE] {
        &self.columns
    }

    pub fn rows(&self) -> &[FighterId; GRID_SIZE] {
        &self.rows
    }

    /// Columns then rows
    pub fn anchors(&self) -> impl Iterator<Item = &FighterId> {
        self.columns.iter().chain(self.rows.iter())
    }

    pub fn answer(&self, row: usize, col: usize) -> Option<&FighterId> {
        self.answers.get(row)?.get(col)?.as_ref()
    }

    pub fn verdict(&self, row: usize, col: usize) -> Option<Verdict> {
        self.verdicts.get(row)?.get(col).copied()
    }

    pub fn verdicts(&self) -> &[[Verdict; GRID_SIZE]; GRID_SIZE] {
        &self.verdicts
    }

    pub fn correct_count(&self) -> usize {
        self.verdicts
            .iter()
            .flatten()
            .filter(|v| v.is_correct())
            .count()
    }

    /// All nine cells judged correct
    pub fn is_complete(&self) -> bool {
        self.correct_count() == GRID_SIZE * GRID_SIZE
    }

    /// Cells whose row and column anchors share no opponent
    pub fn unsolvable_cells(&self, graph: &FightGraph) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, col) in self.columns.iter().enumerate() {
                if !graph.share_opponent(row, col) {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    pub(crate) fn check_cell(row: usize, col: usize) -> GridResult<()> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(())
        } else {
            Err(GridError::InvalidCell { row, col })
        }
    }

    /// Write answer and verdict of one cell together
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, answer: Option<FighterId>, verdict: Verdict) {
        self.answers[row][col] = answer;
        self.verdicts[row][col] = verdict;
    }
}
