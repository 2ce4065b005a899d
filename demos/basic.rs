//! Basic example of using the fightgrid engine

use fightgrid_core::{connectors, submit_answer, FightGraph, FightRecord, FighterDirectory, Generator, GeneratorConfig};

fn main() {
    // A small ring of fighters, each having fought the three nearest on both sides
    let mut record = FightRecord::new();
    let mut directory = FighterDirectory::new();
    for i in 0..24 {
        directory.insert(format!("f{:02}", i), format!("Fighter {}", i));
        for step in 1..=3 {
            record.add_fight(&format!("f{:02}", i), &format!("f{:02}", (i + step) % 24));
        }
    }
    let graph = FightGraph::new(&record);

    // Generate a puzzle
    println!("Generating a puzzle...\n");
    let mut generator = Generator::with_config(GeneratorConfig::standard().with_min_degree(6));
    let mut grid = match generator.generate(&graph) {
        Ok(grid) => grid,
        Err(err) => {
            println!("Could not generate a puzzle: {}", err);
            return;
        }
    };

    let columns: Vec<&str> = grid.columns().iter().map(|id| directory.label(id)).collect();
    let rows: Vec<&str> = grid.rows().iter().map(|id| directory.label(id)).collect();
    println!("Columns: {}", columns.join(" | "));
    println!("Rows:    {}\n", rows.join(" | "));

    // Answer the top-left cell with a valid connector, then with a wrong one
    let valid = connectors(&graph, &grid, 0, 0).unwrap_or_default();
    if let Some(pick) = valid.first().cloned() {
        match submit_answer(&graph, &mut grid, 0, 0, &pick) {
            Ok(verdict) => println!("{} at (1, 1): {}", directory.label(&pick), verdict),
            Err(err) => println!("Submission failed: {}", err),
        }
    }

    let wrong = grid.columns()[0].clone();
    match submit_answer(&graph, &mut grid, 0, 0, &wrong) {
        Ok(verdict) => println!("{} at (1, 1): {}", directory.label(&wrong), verdict),
        Err(err) => println!("Submission failed: {}", err),
    }

    // Unknown fighters are reported, not judged
    if let Err(err) = submit_answer(&graph, &mut grid, 0, 0, "nobody") {
        println!("{}", err);
    }

    println!("\nCorrect cells: {}", grid.correct_count());
}
