//! Nested text patterns used to seed a world with explicit state.

use crate::id::{CellSet, Coord};

/// An initial state written as nested rows of characters.
///
/// The nesting depth is the dimensionality: a bare [`Pattern::Row`] is a
/// 1-D world, a list of rows is 2-D, a list of lists of rows is 3-D, and so
/// on. Within a row, `'*'` marks a live cell and any other character a dead
/// one.
///
/// Ragged input is accepted. The size of each axis is the longest extent
/// seen at that depth across all branches; shorter branches are padded with
/// dead cells. A row that appears shallower than the deepest branch lies
/// along the innermost axis at index 0 of the axes it skips.
///
/// # Examples
///
/// ```
/// use ndlife_core::Pattern;
///
/// let p = Pattern::from(["* *", " * ", "** "]);
/// let absorbed = p.absorb();
/// assert_eq!(absorbed.dims, vec![3, 3]);
/// assert_eq!(absorbed.cells.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// One line of cells along the innermost axis.
    Row(String),
    /// A sequence of sub-patterns along the next axis outward.
    Layers(Vec<Pattern>),
}

/// Live cells and inferred axis sizes of a [`Pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Absorbed {
    /// Coordinates of every `'*'`.
    pub cells: CellSet,
    /// Inferred size of each axis, outermost first.
    pub dims: Vec<u32>,
}

impl Pattern {
    /// Character marking a live cell.
    pub const ALIVE: char = '*';

    /// Number of axes this pattern describes (its maximum nesting depth).
    pub fn depth(&self) -> usize {
        match self {
            Self::Row(_) => 1,
            Self::Layers(layers) => 1 + layers.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Extract live cells and axis sizes. Never fails.
    pub fn absorb(&self) -> Absorbed {
        let ndim = self.depth();
        let mut dims = vec![0u32; ndim];
        let mut cells = CellSet::new();
        let mut prefix = Coord::with_capacity(ndim);
        self.absorb_layer(0, &mut prefix, &mut dims, &mut cells);
        Absorbed { cells, dims }
    }

    fn absorb_layer(&self, axis: usize, prefix: &mut Coord, dims: &mut [u32], cells: &mut CellSet) {
        match self {
            Self::Row(row) => {
                let inner = dims.len() - 1;
                for skipped in &mut dims[axis..inner] {
                    *skipped = (*skipped).max(1);
                    prefix.push(0);
                }
                let mut len = 0usize;
                for (i, ch) in row.chars().enumerate() {
                    len = i + 1;
                    if ch != Self::ALIVE {
                        continue;
                    }
                    let Ok(idx) = i32::try_from(i) else { break };
                    let mut coord = prefix.clone();
                    coord.push(idx);
                    cells.insert(coord);
                }
                dims[inner] = dims[inner].max(saturating_u32(len));
                prefix.truncate(axis);
            }
            Self::Layers(layers) => {
                dims[axis] = dims[axis].max(saturating_u32(layers.len()));
                for (i, layer) in layers.iter().enumerate() {
                    let Ok(idx) = i32::try_from(i) else { break };
                    prefix.push(idx);
                    layer.absorb_layer(axis + 1, prefix, dims, cells);
                    prefix.pop();
                }
            }
        }
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<&str> for Pattern {
    fn from(row: &str) -> Self {
        Self::Row(row.to_string())
    }
}

impl From<String> for Pattern {
    fn from(row: String) -> Self {
        Self::Row(row)
    }
}

impl<T: Into<Pattern>> From<Vec<T>> for Pattern {
    fn from(layers: Vec<T>) -> Self {
        Self::Layers(layers.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Pattern>, const N: usize> From<[T; N]> for Pattern {
    fn from(layers: [T; N]) -> Self {
        Self::Layers(layers.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn cells(coords: &[&[i32]]) -> CellSet {
        coords.iter().map(|c| Coord::from_slice(c)).collect()
    }

    // ── Cell extraction ─────────────────────────────────────────

    #[test]
    fn absorbs_1d_empty() {
        assert!(Pattern::from("").absorb().cells.is_empty());
    }

    #[test]
    fn absorbs_1d_dead() {
        assert!(Pattern::from(" ").absorb().cells.is_empty());
    }

    #[test]
    fn absorbs_1d_pattern() {
        assert_eq!(
            Pattern::from("* * *").absorb().cells,
            cells(&[&[0], &[2], &[4]])
        );
    }

    #[test]
    fn absorbs_1d_single() {
        assert_eq!(Pattern::from("*").absorb().cells, cells(&[&[0]]));
    }

    #[test]
    fn absorbs_2d_empty_and_dead() {
        assert!(Pattern::from([""]).absorb().cells.is_empty());
        assert!(Pattern::from([" "]).absorb().cells.is_empty());
    }

    #[test]
    fn absorbs_2d_single_and_row() {
        assert_eq!(Pattern::from(["*"]).absorb().cells, cells(&[&[0, 0]]));
        assert_eq!(
            Pattern::from(["* * *"]).absorb().cells,
            cells(&[&[0, 0], &[0, 2], &[0, 4]])
        );
    }

    #[test]
    fn absorbs_2d_grid() {
        let p = Pattern::from([" * ", "* *", "*  "]);
        assert_eq!(
            p.absorb().cells,
            cells(&[&[0, 1], &[1, 0], &[1, 2], &[2, 0]])
        );
    }

    // ── Dimension inference ─────────────────────────────────────

    #[test]
    fn dims_1d() {
        assert_eq!(Pattern::from("").absorb().dims, vec![0]);
        assert_eq!(Pattern::from(" ").absorb().dims, vec![1]);
        assert_eq!(Pattern::from("*").absorb().dims, vec![1]);
        assert_eq!(Pattern::from("* * *").absorb().dims, vec![5]);
    }

    #[test]
    fn dims_2d() {
        assert_eq!(Pattern::from([""]).absorb().dims, vec![1, 0]);
        assert_eq!(Pattern::from([" "]).absorb().dims, vec![1, 1]);
        assert_eq!(Pattern::from(["*"]).absorb().dims, vec![1, 1]);
        assert_eq!(Pattern::from(["   ", "   "]).absorb().dims, vec![2, 3]);
    }

    #[test]
    fn dims_3d() {
        let p = Pattern::from([["    ", "    ", "    "], ["    ", "    ", "    "]]);
        assert_eq!(p.depth(), 3);
        assert_eq!(p.absorb().dims, vec![2, 3, 4]);
    }

    #[test]
    fn empty_layers_is_one_dimensional() {
        let p = Pattern::Layers(vec![]);
        assert_eq!(p.absorb().dims, vec![0]);
    }

    // ── Ragged input ────────────────────────────────────────────

    #[test]
    fn ragged_rows_take_the_longest() {
        let p = Pattern::from(vec!["*", "  *  ", "**"]);
        let a = p.absorb();
        assert_eq!(a.dims, vec![3, 5]);
        assert_eq!(a.cells, cells(&[&[0, 0], &[1, 2], &[2, 0], &[2, 1]]));
    }

    #[test]
    fn ragged_layers_take_the_longest() {
        let p = Pattern::from(vec![vec!["*"], vec![" ", " ", "  *"]]);
        let a = p.absorb();
        assert_eq!(a.dims, vec![2, 3, 3]);
        assert_eq!(a.cells, cells(&[&[0, 0, 0], &[1, 2, 2]]));
    }

    #[test]
    fn shallow_row_lies_on_innermost_axis() {
        let p = Pattern::Layers(vec![
            Pattern::from("* "),
            Pattern::from(vec![" *", "* "]),
        ]);
        let a = p.absorb();
        assert_eq!(a.dims, vec![2, 2, 2]);
        let expected: CellSet = [
            smallvec![0, 0, 0],
            smallvec![1, 0, 1],
            smallvec![1, 1, 0],
        ]
        .into_iter()
        .collect();
        assert_eq!(a.cells, expected);
    }

    #[test]
    fn non_star_characters_are_dead() {
        let p = Pattern::from("*.o#*");
        assert_eq!(p.absorb().cells, cells(&[&[0], &[4]]));
    }
}
