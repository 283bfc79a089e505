//! Canonical patterns with known renderings, neighbour counts, and
//! evolutions.
//!
//! - [`neighbour_grid_3x3`]: a 3×3 torus with the live-neighbour count of
//!   every cell, used as a fixed regression table.
//! - [`blinker`], [`block`], [`glider`]: classic 2-D life forms.
//! - [`folded_3d`] to [`folded_6d`]: higher-dimensional patterns paired with
//!   their exact text rendering.

use ndlife_core::Pattern;

/// A 3×3 pattern and the live-neighbour count of each cell, row-major.
///
/// On a 3×3 torus every other cell is a neighbour exactly once, so each
/// count is the population minus the cell itself if live.
pub fn neighbour_grid_3x3() -> (Pattern, [[usize; 3]; 3]) {
    let pattern = Pattern::from(["* *", " * ", "** "]);
    let counts = [[4, 5, 4], [5, 4, 5], [4, 4, 5]];
    (pattern, counts)
}

/// Period-2 oscillator on a 5×5 torus: vertical phase first.
pub fn blinker() -> (Pattern, Pattern) {
    let vertical = Pattern::from(["     ", "  *  ", "  *  ", "  *  ", "     "]);
    let horizontal = Pattern::from(["     ", "     ", " *** ", "     ", "     "]);
    (vertical, horizontal)
}

/// 2×2 still life on a 4×4 torus.
pub fn block() -> Pattern {
    Pattern::from(["    ", " ** ", " ** ", "    "])
}

/// Glider on a 6×6 torus. After 4 generations it reappears shifted one
/// cell down and one cell right.
pub fn glider() -> Pattern {
    Pattern::from([
        " *    ",
        "  *   ",
        "***   ",
        "      ",
        "      ",
        "      ",
    ])
}

/// A 3-D pattern (3×3×4) folded into three side-by-side blocks.
pub fn folded_3d() -> (Pattern, &'static str) {
    let pattern = Pattern::from([
        ["*  *", " ** ", "    "],
        ["    ", " ** ", "*  *"],
        ["*  *", " ** ", "    "],
    ]);
    let expected = concat!(
        "*  *|    |*  *\n",
        " ** | ** | ** \n",
        "    |*  *|    ",
    );
    (pattern, expected)
}

/// A 4-D pattern (3×3×3×4): rows of side-by-side blocks separated by rules.
pub fn folded_4d() -> (Pattern, &'static str) {
    let pattern = Pattern::from([
        [
            ["*  *", " ** ", "    "],
            ["    ", " ** ", "*  *"],
            ["*  *", " ** ", "    "],
        ],
        [
            ["    ", " ** ", "*  *"],
            ["*  *", " ** ", "*  *"],
            ["    ", " ** ", "*  *"],
        ],
        [
            ["*  *", " ** ", "    "],
            ["    ", " ** ", "*  *"],
            ["*  *", " ** ", "    "],
        ],
    ]);
    let expected = concat!(
        "*  *|    |*  *\n",
        " ** | ** | ** \n",
        "    |*  *|    \n",
        "--------------\n",
        "    |*  *|    \n",
        " ** | ** | ** \n",
        "*  *|*  *|*  *\n",
        "--------------\n",
        "*  *|    |*  *\n",
        " ** | ** | ** \n",
        "    |*  *|    ",
    );
    (pattern, expected)
}

/// A 5-D pattern (4×3×3×3×5): 4-D stacks placed side by side.
pub fn folded_5d() -> (Pattern, &'static str) {
    let pattern = Pattern::from([
        [
            [
                ["* * *", "*****", "  *  "],
                ["  *  ", " * * ", "  *  "],
                ["* * *", " * * ", "  *  "],
            ],
            [
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "* * *"],
                ["  *  ", " * * ", "* * *"],
            ],
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "* * *"],
            ],
        ],
        [
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "  *  "],
            ],
            [
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "* * *"],
                ["  *  ", " * * ", "* * *"],
            ],
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "  *  "],
            ],
        ],
        [
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "  *  "],
            ],
            [
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "* * *"],
                ["  *  ", " * * ", "* * *"],
            ],
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "  *  "],
            ],
        ],
        [
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "  *  "],
            ],
            [
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", "* * *"],
                ["  *  ", " * * ", "* * *"],
            ],
            [
                ["* * *", " * * ", "  *  "],
                ["  *  ", " * * ", "* * *"],
                ["* * *", " * * ", " *** "],
            ],
        ],
    ]);
    let expected = concat!(
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        "*****| * * | * * | * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |  *  |  *  |  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        "-----------------|-----------------|-----------------|-----------------\n",
        "  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *\n",
        "-----------------|-----------------|-----------------|-----------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |* * *|* * *|  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *| *** ",
    );
    (pattern, expected)
}

/// A 6-D pattern (4×3×3×3×3×5): 5-D layouts stacked with full-width rules.
pub fn folded_6d() -> (Pattern, &'static str) {
    let pattern = Pattern::from([
        [
            [
                [
                    ["* * *", "*****", "  *  "],
                    ["  *  ", " * * ", "  *  "],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", " *** "],
                ],
            ],
        ],
        [
            [
                [
                    ["* * *", "** **", "  *  "],
                    ["  *  ", " * * ", "  *  "],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", " *** "],
                ],
            ],
        ],
        [
            [
                [
                    ["* * *", "*****", "  *  "],
                    ["  *  ", " * * ", "  *  "],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", " *** "],
                ],
            ],
        ],
        [
            [
                [
                    ["* * *", "** **", "  *  "],
                    ["  *  ", " * * ", "  *  "],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
            ],
            [
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "  *  "],
                ],
                [
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", "* * *"],
                    ["  *  ", " * * ", "* * *"],
                ],
                [
                    ["* * *", " * * ", "  *  "],
                    ["  *  ", " * * ", "* * *"],
                    ["* * *", " * * ", " *** "],
                ],
            ],
        ],
    ]);
    let expected = concat!(
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        "*****| * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |  *  |  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        "-----------------|-----------------|-----------------\n",
        "  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *\n",
        "-----------------|-----------------|-----------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |* * *|* * *|  *  |* * *|  *  |  *  |* * *| *** \n",
        "-----------------------------------------------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        "** **| * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |  *  |  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        "-----------------|-----------------|-----------------\n",
        "  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *\n",
        "-----------------|-----------------|-----------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |* * *|* * *|  *  |* * *|  *  |  *  |* * *| *** \n",
        "-----------------------------------------------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        "*****| * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |  *  |  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        "-----------------|-----------------|-----------------\n",
        "  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *\n",
        "-----------------|-----------------|-----------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |* * *|* * *|  *  |* * *|  *  |  *  |* * *| *** \n",
        "-----------------------------------------------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        "** **| * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |  *  |  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        "-----------------|-----------------|-----------------\n",
        "  *  |* * *|  *  |  *  |* * *|  *  |  *  |* * *|  *  \n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *|* * *\n",
        "-----------------|-----------------|-----------------\n",
        "* * *|  *  |* * *|* * *|  *  |* * *|* * *|  *  |* * *\n",
        " * * | * * | * * | * * | * * | * * | * * | * * | * * \n",
        "  *  |* * *|* * *|  *  |* * *|  *  |  *  |* * *| *** ",
    );
    (pattern, expected)
}
