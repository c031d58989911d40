//! 3D rotation and orientation utilities.
//!
//! A cube has 24 possible orientations in 3D space (the proper rotation
//! group of a cube). The catalog below enumerates them as signed permutation
//! matrices: permute the three axes (6 ways), choose a sign per axis
//! (8 ways), and keep the half with determinant +1: pure rotations, no
//! mirror images.

use rustc_hash::FxHashSet;

use crate::pieces::Coord;

/// A 3x3 integer matrix; catalog entries all have determinant +1.
pub type RotationMatrix = [[i32; 3]; 3];

/// The 6 orderings of the three coordinate axes.
const AXIS_PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

const fn determinant(m: &RotationMatrix) -> i32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Builds the rotation catalog at compile time.
///
/// Walks all 48 signed permutation matrices in a fixed order and keeps the
/// 24 with determinant +1. The identity lands first (permutation `[0,1,2]`,
/// all signs positive).
const fn build_rotation_catalog() -> [RotationMatrix; 24] {
    let mut catalog = [[[0i32; 3]; 3]; 24];
    let mut count = 0;

    let mut perm = 0;
    while perm < 6 {
        let mut signs = 0;
        while signs < 8 {
            let mut matrix = [[0i32; 3]; 3];
            let mut row = 0;
            while row < 3 {
                let sign = if (signs >> row) & 1 == 0 { 1 } else { -1 };
                matrix[row][AXIS_PERMUTATIONS[perm][row]] = sign;
                row += 1;
            }
            if determinant(&matrix) == 1 {
                catalog[count] = matrix;
                count += 1;
            }
            signs += 1;
        }
        perm += 1;
    }

    catalog
}

/// All 24 rotation matrices of a cube, identity first.
pub const ROTATIONS: [RotationMatrix; 24] = build_rotation_catalog();

/// Applies a rotation matrix to a single coordinate.
#[inline]
pub fn rotate(matrix: &RotationMatrix, (x, y, z): Coord) -> Coord {
    (
        matrix[0][0] * x + matrix[0][1] * y + matrix[0][2] * z,
        matrix[1][0] * x + matrix[1][1] * y + matrix[1][2] * z,
        matrix[2][0] * x + matrix[2][1] * y + matrix[2][2] * z,
    )
}

/// Generates all unique orientations of a set of cells.
///
/// Applies each catalog matrix to every cell, normalizes the result so the
/// minimum coordinates sit at the origin, and sorts it lexicographically.
/// The sorted list is the deduplication key; the first occurrence of each
/// shape wins, so the output order follows the catalog order. Symmetric
/// pieces yield fewer than 24 orientations.
pub fn unique_orientations(cells: &[Coord]) -> Vec<Vec<Coord>> {
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut orientations = Vec::new();

    for matrix in &ROTATIONS {
        let mut rotated: Vec<Coord> = cells.iter().map(|&cell| rotate(matrix, cell)).collect();
        normalize_to_origin(&mut rotated);
        rotated.sort_unstable();
        if seen.insert(rotated.clone()) {
            orientations.push(rotated);
        }
    }

    orientations
}

/// Translates coordinates in place so the minimum x, y, z values are all zero.
///
/// Two orientations that differ only by translation normalize to the same
/// coordinates, which is what makes the sorted form a congruence key.
pub fn normalize_to_origin(coords: &mut [Coord]) {
    let (mut min_x, mut min_y, mut min_z) = (i32::MAX, i32::MAX, i32::MAX);
    for &(x, y, z) in coords.iter() {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        min_z = min_z.min(z);
    }

    for (x, y, z) in coords.iter_mut() {
        *x -= min_x;
        *y -= min_y;
        *z -= min_z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: RotationMatrix = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

    #[test]
    fn test_catalog_has_24_distinct_proper_rotations() {
        let distinct: FxHashSet<RotationMatrix> = ROTATIONS.iter().copied().collect();
        assert_eq!(distinct.len(), 24);
        for matrix in &ROTATIONS {
            assert_eq!(determinant(matrix), 1, "improper matrix {matrix:?}");
        }
        assert_eq!(ROTATIONS[0], IDENTITY);
    }

    #[test]
    fn test_single_cube_has_one_orientation() {
        assert_eq!(unique_orientations(&[(0, 0, 0)]).len(), 1);
    }

    #[test]
    fn test_domino_has_three_orientations() {
        // a 2-cell bar can only point along x, y or z
        let orientations = unique_orientations(&[(0, 0, 0), (1, 0, 0)]);
        assert_eq!(orientations.len(), 3);
    }

    #[test]
    fn test_orientation_count_stays_in_range() {
        let crooked = [(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (2, 1, 1)];
        let count = unique_orientations(&crooked).len();
        assert!((1..=24).contains(&count), "got {count}");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let mut coords = vec![(0, 0, 0), (1, 0, 0), (0, 2, 1)];
        normalize_to_origin(&mut coords);
        let normalized = coords.clone();
        normalize_to_origin(&mut coords);
        assert_eq!(coords, normalized);
    }

    #[test]
    fn test_normalization_moves_minimum_to_origin() {
        let mut coords = vec![(-1, 4, 2), (0, 5, 2), (-1, 5, 3)];
        normalize_to_origin(&mut coords);
        assert_eq!(coords, vec![(0, 0, 0), (1, 1, 0), (0, 1, 1)]);
    }

    #[test]
    fn test_orientations_are_closed_under_rotation() {
        // re-rotating any generated orientation must land back in the set
        let piece = [(0, 0, 0), (1, 0, 0), (0, 1, 0)];
        let orientations = unique_orientations(&piece);
        let keys: FxHashSet<Vec<Coord>> = orientations.iter().cloned().collect();

        for orientation in &orientations {
            for matrix in &ROTATIONS {
                let mut rerotated: Vec<Coord> = orientation
                    .iter()
                    .map(|&cell| rotate(matrix, cell))
                    .collect();
                normalize_to_origin(&mut rerotated);
                rerotated.sort_unstable();
                assert!(keys.contains(&rerotated));
            }
        }
    }
}
