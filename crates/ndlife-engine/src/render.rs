//! Folding an N-dimensional grid into 2-D text.
//!
//! Axes are consumed outermost first. The two innermost axes form an
//! ordinary block of rows; above that, odd levels place sub-blocks side by
//! side separated by `'|'`, and even levels stack them separated by a rule
//! of `'-'`. A 4-D world therefore renders as a grid of 2-D blocks:
//!
//! ```text
//! *  *|    |*  *
//!  ** | ** | **
//!     |*  *|
//! --------------
//!     |*  *|
//!  ** | ** | **
//! *  *|*  *|*  *
//! ```

use ndlife_core::{CellSet, CellState, Coord};

/// Render `cells` on a grid of size `dims`.
///
/// Every axis must have uniform size, which holds for any world, so all
/// sibling blocks have identical width and height.
///
/// # Examples
///
/// ```
/// use ndlife_core::Pattern;
/// use ndlife_engine::render::dump;
///
/// let absorbed = Pattern::from(["* *", " * "]).absorb();
/// assert_eq!(dump(&absorbed.cells, &absorbed.dims), "* *\n * ");
/// ```
pub fn dump(cells: &CellSet, dims: &[u32]) -> String {
    let mut prefix = Coord::with_capacity(dims.len());
    render_layer(cells, dims, &mut prefix)
}

fn render_layer(cells: &CellSet, dims_left: &[u32], prefix: &mut Coord) -> String {
    let Some((&len, inner)) = dims_left.split_first() else {
        return CellState::from(cells.contains(prefix)).glyph().to_string();
    };
    let mut blocks = Vec::with_capacity(len as usize);
    for idx in 0..len {
        prefix.push(idx as i32);
        blocks.push(render_layer(cells, inner, prefix));
        prefix.pop();
    }
    match dims_left.len() {
        1 => blocks.concat(),
        2 => blocks.join("\n"),
        k if k % 2 == 1 => side_by_side(&blocks),
        _ => stacked(&blocks),
    }
}

/// Lines of a block, without trailing empty lines.
///
/// A 2-D block whose rows are all empty is `"\n..."` and has no lines.
fn block_lines(block: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = block.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Zip the lines of every block and join each row with `'|'`.
fn side_by_side(blocks: &[String]) -> String {
    let columns: Vec<Vec<&str>> = blocks.iter().map(|b| block_lines(b)).collect();
    let Some(height) = columns.first().map(Vec::len) else {
        return String::new();
    };
    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|col| col.get(row).copied().unwrap_or_default())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join blocks with a full-width rule of `'-'` between them.
fn stacked(blocks: &[String]) -> String {
    let width = blocks
        .first()
        .and_then(|b| block_lines(b).first().copied())
        .map_or(0, |line| line.chars().count());
    let rule = format!("\n{}\n", "-".repeat(width));
    blocks.join(&rule)
}
