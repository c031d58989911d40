//! Polycube Packing Solver
//!
//! Command-line front end for the packing library. Ships with the classic
//! Soma cube (seven pieces into a 3x3x3 cube) plus a small custom puzzle
//! showing how to define your own pieces and target.

use clap::{Parser, Subcommand};

use polypack::geometry::unique_orientations;
use polypack::pieces::{box_target, soma_pieces};
use polypack::{format_solution, solve, Coord, Piece, PuzzleError, SolveReport};

/// Solves 3D polycube packing puzzles.
#[derive(Parser)]
#[command(name = "polypack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the Soma cube: seven pieces into a 3x3x3 cube.
    Soma,
    /// Solve a custom demo: four tetrominoes into a 4x2x2 box.
    Demo,
    /// List the Soma pieces with their orientation counts.
    Pieces,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Soma) | None => run_soma(),
        Some(Command::Demo) => run_demo(),
        Some(Command::Pieces) => run_pieces(),
    }
}

/// Solves the built-in Soma cube and prints the result.
fn run_soma() {
    let pieces = soma_pieces();
    let target = box_target(3, 3, 3);
    report(solve(&pieces, &target), &target);
}

/// Solves a hand-rolled puzzle: two bars and two L pieces tile a 4x2x2 box.
fn run_demo() {
    let pieces = vec![
        Piece::new("bar-a", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]),
        Piece::new("bar-b", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]),
        Piece::new("ell-a", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)]),
        Piece::new("ell-b", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)]),
    ];
    let target = box_target(4, 2, 2);
    report(solve(&pieces, &target), &target);
}

/// Prints each Soma piece with its cell and orientation counts.
fn run_pieces() {
    for piece in soma_pieces() {
        println!(
            "{}: {} cells, {} orientations",
            piece.name,
            piece.cell_count(),
            unique_orientations(&piece.cells).len()
        );
    }
}

/// Prints the solve log and, on success, the packed grid.
fn report(result: Result<SolveReport, PuzzleError>, target: &[Coord]) {
    match result {
        Ok(report) => {
            for line in &report.log {
                println!("{line}");
            }
            if let Some(solution) = &report.solution {
                println!();
                print!("{}", format_solution(solution, target));
            }
        }
        Err(err) => eprintln!("invalid puzzle: {err}"),
    }
}
