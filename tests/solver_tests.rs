//! End-to-end tests for the packing solver.

use polypack::geometry::unique_orientations;
use polypack::pieces::{box_target, soma_pieces, Coord};
use polypack::{solve, solve_all, Piece};

fn dominoes() -> Vec<Piece> {
    vec![
        Piece::new("first", vec![(0, 0, 0), (1, 0, 0)]),
        Piece::new("second", vec![(0, 0, 0), (1, 0, 0)]),
    ]
}

#[test]
fn soma_cube_has_an_exact_cover() {
    let pieces = soma_pieces();
    let target = box_target(3, 3, 3);
    let report = solve(&pieces, &target).expect("soma input is well formed");

    assert!(report.success);
    let solution = report.solution.expect("success implies a solution");

    // one placement per piece, each with the piece's own cell count
    assert_eq!(solution.len(), pieces.len());
    for (piece, cells) in &solution {
        assert_eq!(cells.len(), pieces[*piece].cell_count());
    }

    // the placements partition the target exactly: 27 cells, no overlap
    let mut covered: Vec<Coord> = solution.values().flatten().copied().collect();
    covered.sort_unstable();
    let mut expected = target.clone();
    expected.sort_unstable();
    assert_eq!(covered, expected);
}

#[test]
fn repeated_solves_find_the_same_solution() {
    let pieces = soma_pieces();
    let target = box_target(3, 3, 3);

    let first = solve(&pieces, &target).unwrap();
    let second = solve(&pieces, &target).unwrap();
    assert_eq!(first.solution, second.solution);
}

#[test]
fn first_solution_appears_in_the_full_enumeration() {
    let pieces = dominoes();
    let target = box_target(2, 2, 1);

    let first = solve(&pieces, &target).unwrap().solution.unwrap();
    let all = solve_all(&pieces, &target, 0).unwrap();
    assert!(all.contains(&first));
}

#[test]
fn two_dominoes_tile_a_square_four_ways() {
    // two horizontal rows, two vertical columns, pieces swappable: 4 covers
    let all = solve_all(&dominoes(), &box_target(2, 2, 1), 0).unwrap();
    assert_eq!(all.len(), 4);

    for solution in &all {
        let mut covered: Vec<Coord> = solution.values().flatten().copied().collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![(0, 0, 0), (0, 1, 0), (1, 0, 0), (1, 1, 0)]);
    }
}

#[test]
fn solve_all_truncates_to_the_requested_count() {
    let all = solve_all(&dominoes(), &box_target(2, 2, 1), 2).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn bars_and_ells_fill_a_flat_box() {
    let pieces = vec![
        Piece::new("bar-a", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]),
        Piece::new("bar-b", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]),
        Piece::new("ell-a", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)]),
        Piece::new("ell-b", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)]),
    ];
    let report = solve(&pieces, &box_target(4, 2, 2)).unwrap();
    assert!(report.success);
}

#[test]
fn log_reports_placement_diagnostics() {
    let pieces = vec![Piece::new("dot", vec![(0, 0, 0)])];
    let report = solve(&pieces, &[(0, 0, 0)]).unwrap();

    assert!(report
        .log
        .iter()
        .any(|line| line.contains("piece 'dot': 1 orientations, 1 placements")));
}

#[test]
fn soma_piece_orientation_counts() {
    let table = soma_pieces()
        .iter()
        .map(|piece| {
            format!(
                "{}: {} cells, {} orientations",
                piece.name,
                piece.cell_count(),
                unique_orientations(&piece.cells).len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(table, @r###"
    V: 3 cells, 12 orientations
    L: 4 cells, 24 orientations
    T: 4 cells, 12 orientations
    S: 4 cells, 12 orientations
    A: 4 cells, 8 orientations
    B: 4 cells, 8 orientations
    P: 4 cells, 12 orientations
    "###);
}
