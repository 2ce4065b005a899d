//! Per-cell answer checking

use crate::{FightGraph, FighterId, GridError, GridResult, PuzzleGrid, Verdict};

/// Judge `candidate` for cell (`row`, `col`) and record the result.
///
/// Correct when both the row anchor's and the column anchor's own records list
/// the candidate. Re-submitting overwrites whatever the cell held before,
/// including a correct answer. On error the grid is left untouched.
pub fn submit_answer(
    graph: &FightGraph,
    grid: &mut PuzzleGrid,
    row: usize,
    col: usize,
    candidate: &str,
) -> GridResult<Verdict> {
    PuzzleGrid::check_cell(row, col)?;
    if !graph.is_known(candidate) {
        return Err(GridError::unknown(candidate));
    }

    let correct = graph.fought(&grid.rows()[row], candidate)
        && graph.fought(&grid.columns()[col], candidate);
    let verdict = Verdict::from_correct(correct);

    log::debug!("cell ({}, {}): {} is {}", row, col, candidate, verdict);
    grid.set_cell(row, col, Some(candidate.to_string()), verdict);
    Ok(verdict)
}

/// Every fighter `submit_answer` would accept for the cell, in id order
pub fn connectors(graph: &FightGraph, grid: &PuzzleGrid, row: usize, col: usize) -> GridResult<Vec<FighterId>> {
    PuzzleGrid::check_cell(row, col)?;
    let row_anchor = &grid.rows()[row];
    let col_anchor = &grid.columns()[col];
    Ok(graph
        .opponents_of(row_anchor)?
        .iter()
        .filter(|id| graph.is_known(id) && graph.fought(col_anchor, id))
        .cloned()
        .collect())
}

/// Reset one cell to unanswered
pub fn clear_answer(grid: &mut PuzzleGrid, row: usize, col: usize) -> GridResult<()> {
    PuzzleGrid::check_cell(row, col)?;
    grid.set_cell(row, col, None, Verdict::Unanswered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (FightGraph, PuzzleGrid) {
        // rows d, e, f; columns a, b, c
        let graph = FightGraph::from_json(
            r#"{
                "a": ["x", "y"], "b": ["x"], "c": ["z"],
                "d": ["x", "z"], "e": ["y"], "f": [],
                "x": ["a", "b", "d"], "y": ["a"], "z": ["c", "d"]
            }"#,
        )
        .unwrap();
        let grid = PuzzleGrid::from_anchors(
            ["a", "b", "c"].map(String::from),
            ["d", "e", "f"].map(String::from),
        )
        .unwrap();
        (graph, grid)
    }

    #[test]
    fn test_correct_and_incorrect() {
        let (graph, mut grid) = setup();
        assert_eq!(submit_answer(&graph, &mut grid, 0, 0, "x").unwrap(), Verdict::Correct);
        assert_eq!(submit_answer(&graph, &mut grid, 0, 2, "z").unwrap(), Verdict::Correct);
        // e fought y, but b never did
        assert_eq!(submit_answer(&graph, &mut grid, 1, 1, "y").unwrap(), Verdict::Incorrect);
        assert_eq!(grid.answer(1, 1).map(String::as_str), Some("y"));
        assert_eq!(grid.correct_count(), 2);
    }

    #[test]
    fn test_direction_is_taken_from_anchor_records() {
        let (graph, mut grid) = setup();
        // y lists a but not e; e's record lists y, a's record lists y
        assert_eq!(submit_answer(&graph, &mut grid, 1, 0, "y").unwrap(), Verdict::Correct);
        // z lists d and c; c lists z, but f has an empty record
        assert_eq!(submit_answer(&graph, &mut grid, 2, 2, "z").unwrap(), Verdict::Incorrect);
    }

    #[test]
    fn test_unknown_candidate_leaves_grid_alone() {
        let (graph, mut grid) = setup();
        submit_answer(&graph, &mut grid, 0, 0, "x").unwrap();
        let before = grid.clone();
        let err = submit_answer(&graph, &mut grid, 0, 0, "nobody").unwrap_err();
        assert!(matches!(err, GridError::UnknownFighter { id } if id == "nobody"));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_candidate_without_own_record() {
        // x only shows up in the anchors' records
        let graph = FightGraph::from_json(r#"{"r": ["x"], "c": ["x"], "s": ["y"]}"#).unwrap();
        let mut grid = PuzzleGrid::from_anchors(
            ["c", "c2", "c3"].map(String::from),
            ["r", "s", "r3"].map(String::from),
        )
        .unwrap();
        assert_eq!(submit_answer(&graph, &mut grid, 0, 0, "x").unwrap(), Verdict::Correct);
        assert_eq!(submit_answer(&graph, &mut grid, 1, 0, "x").unwrap(), Verdict::Incorrect);
        assert_eq!(connectors(&graph, &grid, 0, 0).unwrap(), ["x"]);
        assert!(matches!(
            submit_answer(&graph, &mut grid, 0, 1, "w"),
            Err(GridError::UnknownFighter { id }) if id == "w"
        ));
    }

    #[test]
    fn test_directory_fighter_is_judged() {
        let graph = FightGraph::from_json(r#"{"r": ["x"], "c": ["x"]}"#).unwrap();
        let directory: crate::FighterDirectory = [("w", "Walter")].into_iter().collect();
        let graph = graph.with_directory(&directory);
        let mut grid = PuzzleGrid::from_anchors(
            ["c", "c2", "c3"].map(String::from),
            ["r", "r2", "r3"].map(String::from),
        )
        .unwrap();
        assert_eq!(submit_answer(&graph, &mut grid, 0, 0, "w").unwrap(), Verdict::Incorrect);
    }

    #[test]
    fn test_invalid_cell() {
        let (graph, mut grid) = setup();
        let before = grid.clone();
        assert!(matches!(
            submit_answer(&graph, &mut grid, 0, 3, "x"),
            Err(GridError::InvalidCell { row: 0, col: 3 })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_resubmission_overwrites() {
        let (graph, mut grid) = setup();
        assert_eq!(submit_answer(&graph, &mut grid, 0, 0, "x").unwrap(), Verdict::Correct);
        assert_eq!(submit_answer(&graph, &mut grid, 0, 0, "y").unwrap(), Verdict::Incorrect);
        assert_eq!(grid.verdict(0, 0), Some(Verdict::Incorrect));
        assert_eq!(grid.answer(0, 0).map(String::as_str), Some("y"));
    }

    #[test]
    fn test_only_one_cell_changes() {
        let (graph, mut grid) = setup();
        submit_answer(&graph, &mut grid, 2, 1, "x").unwrap();
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (2, 1) {
                    assert_eq!(grid.verdict(row, col), Some(Verdict::Unanswered));
                    assert_eq!(grid.answer(row, col), None);
                }
            }
        }
        assert_eq!(grid.columns(), &["a", "b", "c"].map(String::from));
    }

    #[test]
    fn test_connectors_and_clear() {
        let (graph, mut grid) = setup();
        assert_eq!(connectors(&graph, &grid, 0, 0).unwrap(), ["x"]);
        assert_eq!(connectors(&graph, &grid, 0, 2).unwrap(), ["z"]);
        assert!(connectors(&graph, &grid, 2, 0).unwrap().is_empty());

        submit_answer(&graph, &mut grid, 0, 0, "x").unwrap();
        clear_answer(&mut grid, 0, 0).unwrap();
        assert_eq!(grid.verdict(0, 0), Some(Verdict::Unanswered));
        assert_eq!(grid.answer(0, 0), None);
    }
}
