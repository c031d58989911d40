//! Dancing-links matrix and Algorithm X search.
//!
//! The classic pointer-based toroidal structure is laid out as an arena:
//! column headers and matrix entries live in a single `Vec`, and the
//! left/right/up/down links store arena indices instead of references.
//! Unlinking and relinking stay O(1) and exactly reversible, which is what
//! the backtracking search relies on.

/// Arena index of the root node that anchors the column header ring.
const ROOT: usize = 0;

/// One element of the arena: the root, a column header, or a matrix entry.
///
/// Headers occupy indices `1..=num_columns` and point `column` at
/// themselves; their `row` field is unused. Entries point `column` at their
/// owning header and carry the id of the row they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    column: usize,
    row: usize,
}

/// Sparse 0/1 matrix over which the exact cover search runs.
///
/// Columns are identified externally by 0-based ids in construction order,
/// rows by the caller-chosen ids passed to [`Matrix::add_row`]. The matrix
/// is mutated destructively during a search and is not reusable afterwards
/// in first-solution mode; build a fresh one per solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Matrix {
    nodes: Vec<Node>,
    /// Live row count per column, indexed by header arena index.
    sizes: Vec<usize>,
}

impl Matrix {
    /// Creates a matrix with `num_columns` empty columns linked in a ring.
    pub(crate) fn new(num_columns: usize) -> Self {
        let mut nodes = Vec::with_capacity(num_columns + 1);
        nodes.push(Node {
            left: num_columns,
            right: if num_columns == 0 { ROOT } else { 1 },
            up: ROOT,
            down: ROOT,
            column: ROOT,
            row: usize::MAX,
        });
        for header in 1..=num_columns {
            let right = if header == num_columns { ROOT } else { header + 1 };
            nodes.push(Node {
                left: header - 1,
                right,
                up: header,
                down: header,
                column: header,
                row: usize::MAX,
            });
        }

        Self {
            nodes,
            sizes: vec![0; num_columns + 1],
        }
    }

    /// Links a new row into the matrix.
    ///
    /// `columns` lists the 0-based column ids the row covers; it must be
    /// non-empty and free of duplicates. Each entry is appended at the
    /// bottom of its column's vertical list, and the entries form their own
    /// circular horizontal list in the given order.
    pub(crate) fn add_row(&mut self, row: usize, columns: &[usize]) {
        let mut first = None;
        for &column in columns {
            let header = column + 1;
            let index = self.nodes.len();
            let above = self.nodes[header].up;
            self.nodes.push(Node {
                left: index,
                right: index,
                up: above,
                down: header,
                column: header,
                row,
            });
            self.nodes[above].down = index;
            self.nodes[header].up = index;
            self.sizes[header] += 1;

            match first {
                None => first = Some(index),
                Some(first) => {
                    let last = self.nodes[first].left;
                    self.nodes[index].left = last;
                    self.nodes[index].right = first;
                    self.nodes[last].right = index;
                    self.nodes[first].left = index;
                }
            }
        }
    }

    /// Detaches a column from the header ring, then detaches every other
    /// entry of every row in that column from its own vertical list.
    fn cover(&mut self, header: usize) {
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row_node = self.nodes[header].down;
        while row_node != header {
            let mut node = self.nodes[row_node].right;
            while node != row_node {
                let (up, down) = (self.nodes[node].up, self.nodes[node].down);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[self.nodes[node].column] -= 1;
                node = self.nodes[node].right;
            }
            row_node = self.nodes[row_node].down;
        }
    }

    /// Exact inverse of [`Matrix::cover`].
    ///
    /// Walks rows bottom-up and entries leftwards, mirroring the cover
    /// iteration in reverse so every link is restored last-removed-first.
    fn uncover(&mut self, header: usize) {
        let mut row_node = self.nodes[header].up;
        while row_node != header {
            let mut node = self.nodes[row_node].left;
            while node != row_node {
                self.sizes[self.nodes[node].column] += 1;
                let (up, down) = (self.nodes[node].up, self.nodes[node].down);
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                node = self.nodes[node].left;
            }
            row_node = self.nodes[row_node].up;
        }

        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    /// Picks the linked column with the fewest live rows.
    ///
    /// Ties go to the column encountered first in the ring; the scan stops
    /// early once a column of size <= 1 turns up, since nothing can beat it.
    /// Returns `None` when no columns remain linked.
    fn choose_column(&self) -> Option<usize> {
        let mut chosen = None;
        let mut min_size = usize::MAX;

        let mut header = self.nodes[ROOT].right;
        while header != ROOT {
            if self.sizes[header] < min_size {
                min_size = self.sizes[header];
                chosen = Some(header);
                if min_size <= 1 {
                    break;
                }
            }
            header = self.nodes[header].right;
        }

        chosen
    }

    /// Algorithm X backtracking search.
    ///
    /// Every complete cover is pushed onto `solutions` as the list of chosen
    /// row ids. In first-solution mode (`find_all == false`) the function
    /// returns `true` as soon as one cover is recorded, leaving the matrix
    /// in the solved configuration; no further search happens and the
    /// caller discards the matrix. In find-all mode the search backtracks
    /// through every branch and restores the matrix to its pre-call state.
    pub(crate) fn search(
        &mut self,
        find_all: bool,
        partial: &mut Vec<usize>,
        solutions: &mut Vec<Vec<usize>>,
    ) -> bool {
        if self.nodes[ROOT].right == ROOT {
            // every column covered exactly once
            solutions.push(partial.clone());
            return !find_all;
        }

        let Some(column) = self.choose_column() else {
            return false;
        };
        if self.sizes[column] == 0 {
            // some constraint can no longer be satisfied in this branch
            return false;
        }

        self.cover(column);

        let mut row_node = self.nodes[column].down;
        while row_node != column {
            partial.push(self.nodes[row_node].row);
            let mut node = self.nodes[row_node].right;
            while node != row_node {
                self.cover(self.nodes[node].column);
                node = self.nodes[node].right;
            }

            if self.search(find_all, partial, solutions) {
                return true;
            }

            partial.pop();
            let mut node = self.nodes[row_node].left;
            while node != row_node {
                self.uncover(self.nodes[node].column);
                node = self.nodes[node].left;
            }

            row_node = self.nodes[row_node].down;
        }

        self.uncover(column);
        false
    }

    /// Verifies the structural invariants the search depends on: links are
    /// mutually consistent and every column's size counter matches the
    /// actual length of its vertical list. Backtracking corrupts silently if
    /// any of this breaks, so a violation is a fatal programming error, not
    /// a recoverable condition.
    pub(crate) fn links_consistent(&self) -> bool {
        let mut header = self.nodes[ROOT].right;
        while header != ROOT {
            let column = self.nodes[header];
            if self.nodes[column.right].left != header || self.nodes[column.left].right != header {
                return false;
            }

            let mut count = 0;
            let mut entry = column.down;
            while entry != header {
                let node = self.nodes[entry];
                if self.nodes[node.down].up != entry
                    || self.nodes[node.up].down != entry
                    || node.column != header
                {
                    return false;
                }
                count += 1;
                entry = node.down;
            }
            if count != self.sizes[header] {
                return false;
            }

            header = column.right;
        }
        true
    }
}
