//! Puzzle orchestration: placement enumeration and the solve entry points.
//!
//! A packing puzzle translates into exact cover as follows: one column per
//! piece, one column per target cell, one row per legal placement. A row
//! covers its piece's column plus the columns of every cell it occupies, so
//! a search that covers every column exactly once has used every piece
//! exactly once and filled every cell exactly once.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::dlx::Matrix;
use crate::error::PuzzleError;
use crate::geometry::unique_orientations;
use crate::pieces::{Coord, Piece};

/// One legal way to lay one piece onto the target.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placement {
    /// Index of the piece in the input list.
    piece: usize,
    /// Absolute target cells covered, sorted lexicographically.
    cells: Vec<Coord>,
}

/// A solved assignment: piece index to the absolute cells it occupies.
pub type Solution = BTreeMap<usize, Vec<Coord>>;

/// Outcome of a solve call.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Whether an exact packing was found.
    pub success: bool,
    /// The packing, present iff `success`.
    pub solution: Option<Solution>,
    /// Human-readable progress lines, in emission order.
    pub log: Vec<String>,
    /// Wall-clock duration of the whole call.
    pub elapsed: Duration,
}

/// Enumerates every legal placement of one piece against the target.
///
/// Each unique orientation is anchored on every target cell in turn by
/// translating the orientation's first cell onto the anchor; a placement is
/// kept only if all of its cells land inside the target. Different
/// orientation/anchor pairs can produce the same absolute footprint; the
/// first one wins and later duplicates are dropped silently.
///
/// Returns the orientation count alongside the placements for the log.
fn enumerate_placements(
    piece_index: usize,
    cells: &[Coord],
    target: &[Coord],
    target_set: &FxHashSet<Coord>,
) -> (usize, Vec<Placement>) {
    let orientations = unique_orientations(cells);
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut placements = Vec::new();

    for orientation in &orientations {
        let (rx, ry, rz) = orientation[0];
        for &(ax, ay, az) in target {
            let (dx, dy, dz) = (ax - rx, ay - ry, az - rz);

            let mut absolute = Vec::with_capacity(orientation.len());
            let mut inside = true;
            for &(x, y, z) in orientation {
                let cell = (x + dx, y + dy, z + dz);
                if !target_set.contains(&cell) {
                    inside = false;
                    break;
                }
                absolute.push(cell);
            }
            if !inside {
                continue;
            }

            absolute.sort_unstable();
            absolute.dedup();
            if seen.insert(absolute.clone()) {
                placements.push(Placement {
                    piece: piece_index,
                    cells: absolute,
                });
            }
        }
    }

    (orientations.len(), placements)
}

/// Builds the cover matrix and runs the search.
///
/// Shared by [`solve`] and [`solve_all`]; the two differ only in search mode
/// and in how the recorded covers are surfaced.
fn run(
    pieces: &[Piece],
    target_cells: &[Coord],
    find_all: bool,
) -> Result<(Vec<Solution>, Vec<String>, Duration), PuzzleError> {
    let start = Instant::now();
    let mut log = Vec::new();

    for (index, piece) in pieces.iter().enumerate() {
        if piece.cells.is_empty() {
            return Err(PuzzleError::EmptyPiece {
                index,
                name: piece.name.clone(),
            });
        }
    }

    // deduplicated target in sorted order; cell columns follow this order,
    // which keeps row construction (and therefore the search) deterministic
    let mut target: Vec<Coord> = target_cells.to_vec();
    target.sort_unstable();
    target.dedup();
    let target_set: FxHashSet<Coord> = target.iter().copied().collect();

    let num_columns = pieces.len() + target.len();
    let cell_column: FxHashMap<Coord, usize> = target
        .iter()
        .enumerate()
        .map(|(offset, &cell)| (cell, pieces.len() + offset))
        .collect();

    log.push(format!(
        "puzzle: {} pieces, {} target cells",
        pieces.len(),
        target.len()
    ));
    log.push("generating legal placements...".to_string());

    let mut matrix = Matrix::new(num_columns);
    let mut placements: Vec<Placement> = Vec::new();
    for (index, piece) in pieces.iter().enumerate() {
        let (orientation_count, piece_placements) =
            enumerate_placements(index, &piece.cells, &target, &target_set);
        log.push(format!(
            "  piece '{}': {} orientations, {} placements",
            piece.name,
            orientation_count,
            piece_placements.len()
        ));

        for placement in piece_placements {
            let row = placements.len();
            let mut columns = Vec::with_capacity(placement.cells.len() + 1);
            columns.push(placement.piece);
            columns.extend(placement.cells.iter().map(|cell| cell_column[cell]));
            matrix.add_row(row, &columns);
            placements.push(placement);
        }
    }

    log.push(format!(
        "{} placements total across {} columns, searching...",
        placements.len(),
        num_columns
    ));

    debug_assert!(matrix.links_consistent(), "cover matrix built inconsistently");

    let mut partial = Vec::new();
    let mut covers = Vec::new();
    matrix.search(find_all, &mut partial, &mut covers);

    let solutions: Vec<Solution> = covers
        .iter()
        .map(|rows| {
            rows.iter()
                .map(|&row| {
                    let placement = &placements[row];
                    (placement.piece, placement.cells.clone())
                })
                .collect()
        })
        .collect();

    let elapsed = start.elapsed();
    if solutions.is_empty() {
        log.push(format!("no solution exists ({elapsed:.2?})"));
    } else if find_all {
        log.push(format!("{} solutions found ({elapsed:.2?})", solutions.len()));
    } else {
        log.push(format!("solution found ({elapsed:.2?})"));
    }

    Ok((solutions, log, elapsed))
}

/// Solves the puzzle, stopping at the first exact packing.
///
/// This is the entry point external collaborators call: they hand over
/// pieces and target cells and consume the returned report. An unsatisfiable
/// puzzle is a normal `success = false` outcome, never an error; only
/// malformed input (a piece without cells) is rejected.
pub fn solve(pieces: &[Piece], target_cells: &[Coord]) -> Result<SolveReport, PuzzleError> {
    let (mut solutions, log, elapsed) = run(pieces, target_cells, false)?;
    let solution = solutions.pop();

    Ok(SolveReport {
        success: solution.is_some(),
        solution,
        log,
        elapsed,
    })
}

/// Finds every exact packing of the puzzle.
///
/// The search always runs to exhaustion; `max_solutions` (0 = unlimited)
/// only truncates the collected list afterwards. Distinct assignments of
/// identical shapes count as distinct solutions, so symmetric puzzles can
/// produce large result sets.
pub fn solve_all(
    pieces: &[Piece],
    target_cells: &[Coord],
    max_solutions: usize,
) -> Result<Vec<Solution>, PuzzleError> {
    let (mut solutions, _, _) = run(pieces, target_cells, true)?;
    if max_solutions > 0 {
        solutions.truncate(max_solutions);
    }
    Ok(solutions)
}

/// Formats a solution as a human-readable string.
///
/// Displays the target's z-slices side by side within its bounding box.
/// Each cell shows the 1-based piece number (hex letters from 10), or '.'
/// where no piece landed.
pub fn format_solution(solution: &Solution, target: &[Coord]) -> String {
    let Some(&first) = target.first() else {
        return String::new();
    };

    let mut min = first;
    let mut max = first;
    for &(x, y, z) in target {
        min = (min.0.min(x), min.1.min(y), min.2.min(z));
        max = (max.0.max(x), max.1.max(y), max.2.max(z));
    }
    let width = (max.0 - min.0 + 1) as usize;

    let mut owner: FxHashMap<Coord, u8> = FxHashMap::default();
    for (&piece, cells) in solution {
        for &cell in cells {
            owner.insert(cell, (piece + 1) as u8);
        }
    }

    // header: z=0, z=1, ..., one label per slice
    let mut output = String::new();
    for z in min.2..=max.2 {
        if z > min.2 {
            output.push_str("  ");
        }
        output.push_str(&format!("z={:<width$}", z));
    }
    output.push('\n');

    // rows from top (max y) to bottom (min y)
    for y in (min.1..=max.1).rev() {
        for z in min.2..=max.2 {
            if z > min.2 {
                output.push_str("  ");
            }
            for x in min.0..=max.0 {
                let display = match owner.get(&(x, y, z)) {
                    None => '.',
                    Some(&number) if number < 10 => char::from(b'0' + number),
                    Some(&number) => char::from(b'A' + number - 10),
                };
                output.push(display);
            }
        }
        output.push('\n');
    }

    output
}
