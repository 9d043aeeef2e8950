use pathwalk::{walk_grid, Error, Grid, Position, Trace, WalkOptions};

fn walk_rows(rows: &[&str]) -> Result<Trace, Error> {
    walk_grid(&Grid::from_rows(rows), &WalkOptions::new())
}

fn assert_walk(rows: &[&str], letters: &str, path: &str) {
    let trace = walk_rows(rows).unwrap();
    assert_eq!(trace.letters, letters, "letters");
    assert_eq!(trace.path, path, "path");
}

// ============================================================================
// Valid diagrams
// ============================================================================

#[test]
fn test_basic_example() {
    assert_walk(
        &[
            "@---A---+",
            "        |",
            "x-B-+   C",
            "    |   |",
            "    +---+",
        ],
        "ACB",
        "@---A---+|C|+---+|+-B-x",
    );
}

#[test]
fn test_straight_through_intersections() {
    assert_walk(
        &[
            "@",
            "| +-C--+",
            "A |    |",
            "+---B--+",
            "  |      x",
            "  |      |",
            "  +---D--+",
        ],
        "ABCD",
        "@|A+---B--+|+--C-+|-||+---D--+|x",
    );
}

#[test]
fn test_letters_on_turns() {
    assert_walk(
        &[
            "@---A---+",
            "        |",
            "x-B-+   |",
            "    |   |",
            "    +---C",
        ],
        "ACB",
        "@---A---+|||C---+|+-B-x",
    );
}

#[test]
fn test_no_double_collection_at_same_spot() {
    assert_walk(
        &[
            "    +-O-N-+",
            "    |     |",
            "    |   +-I-+",
            "@-G-O-+ | | |",
            "    | | +-+ E",
            "    +-+     S",
            "            |",
            "            x",
        ],
        "GOONIES",
        "@-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x",
    );
}

#[test]
fn test_keep_direction_in_compact_space() {
    assert_walk(
        &[" +-L-+", " |  +A-+", "@B+ ++ H", " ++    x"],
        "BLAH",
        "@B+++B|+-L-+A+++A-+Hx",
    );
}

#[test]
fn test_ignore_stuff_after_end() {
    assert_walk(
        &["@-A--+", "     |", "     +-B--x-C--D"],
        "AB",
        "@-A--+|+-B--x",
    );
}

#[test]
fn test_start_may_point_up() {
    assert_walk(&["x-+", "  |", "  @"], "", "@|+-x");
}

#[test]
fn test_turn_on_pipe_without_intersection() {
    // `|` runs into the middle of a `-` with blank below
    assert_walk(&["@", "|", "--x"], "", "@|--x");
}

#[test]
fn test_unknown_characters_pass_when_not_strict() {
    assert_walk(&["@-#-x"], "", "@-#-x");
}

#[test]
fn test_text_input() {
    let trace = pathwalk::walk("@-A-+\n    |\nx-B-+").unwrap();
    assert_eq!(trace.letters, "AB");
    assert_eq!(trace.path, "@-A-+|+-B-x");
}

// ============================================================================
// Invalid diagrams
// ============================================================================

#[test]
fn test_missing_start() {
    let err = walk_rows(&[
        "   -A---+",
        "        |",
        "x-B-+   C",
        "    |   |",
        "    +---+",
    ])
    .unwrap_err();
    assert_eq!(err, Error::MissingStart);
}

#[test]
fn test_missing_end() {
    let err = walk_rows(&[
        "@--A---+",
        "       |",
        "  B-+  C",
        "    |  |",
        "    +--+",
    ])
    .unwrap_err();
    assert_eq!(err, Error::MissingEnd);
}

#[test]
fn test_multiple_starts() {
    let diagrams: [&[&str]; 3] = [
        &[
            "@--A-@-+",
            "       |",
            "x-B-+  C",
            "    |  |",
            "    +--+",
        ],
        &[
            "@--A---+",
            "       |",
            "       C",
            "       x",
            "   @-B-+",
        ],
        &[" @--A--x", "", "x-B-+", "    |", "    @"],
    ];
    for rows in diagrams {
        assert!(
            matches!(walk_rows(rows), Err(Error::MultipleStarts { count: 2 })),
            "{rows:?}"
        );
    }
}

#[test]
fn test_fork_in_path() {
    let err = walk_rows(&[
        "     x-B",
        "       |",
        "@--A---+",
        "       |",
        "  x+   C",
        "   |   |",
        "   +---+",
    ])
    .unwrap_err();
    assert_eq!(
        err,
        Error::ForkInPath {
            at: Position::new(7, 2)
        }
    );
}

#[test]
fn test_broken_path() {
    let err = walk_rows(&[
        "@--A-+",
        "     |",
        "",
        "",
        "     B-x",
    ])
    .unwrap_err();
    assert!(matches!(err, Error::BrokenPath { .. }));
}

#[test]
fn test_multiple_starting_paths() {
    let err = walk_rows(&["x-B-@-A-x"]).unwrap_err();
    assert_eq!(
        err,
        Error::MultipleStartingPaths {
            at: Position::new(4, 0)
        }
    );

    let err = walk_rows(&["@-A-x", "|", "x"]).unwrap_err();
    assert!(matches!(err, Error::MultipleStartingPaths { .. }));
}

#[test]
fn test_no_path_from_start() {
    let err = walk_rows(&["@ -x"]).unwrap_err();
    assert!(matches!(err, Error::NoValidPathFromStart { .. }));
}

#[test]
fn test_fake_turn() {
    let err = walk_rows(&["@-A-+-B-x"]).unwrap_err();
    assert_eq!(
        err,
        Error::FakeTurn {
            at: Position::new(4, 0)
        }
    );
}

#[test]
fn test_dead_end_at_intersection() {
    let err = walk_rows(&["@-+", "", "  x"]).unwrap_err();
    assert!(matches!(err, Error::NoValidDirection { .. }));
}

// ============================================================================
// Loop bounding
// ============================================================================

/// Start runs across a lone `|` into `L`, around the box and back up into
/// `L`, which turns right again forever.
const LOOPING: [&str; 4] = ["@-|L-+", "   | |", "   +-+", "x"];

#[test]
fn test_infinite_loop_default_limit() {
    let err = walk_rows(&LOOPING).unwrap_err();
    // 6 columns x 4 rows
    assert_eq!(err, Error::InfiniteLoop { limit: 97 });
}

#[test]
fn test_infinite_loop_explicit_limit() {
    let options = WalkOptions::new().with_max_steps(500);
    let err = walk_grid(&Grid::from_rows(LOOPING), &options).unwrap_err();
    assert_eq!(err, Error::InfiniteLoop { limit: 500 });
}

#[test]
fn test_limit_against_path_length() {
    let grid = Grid::from_rows([
        "@---A---+",
        "        |",
        "x-B-+   C",
        "    |   |",
        "    +---+",
    ]);
    // The walk takes 22 steps
    let err = walk_grid(&grid, &WalkOptions::new().with_max_steps(21)).unwrap_err();
    assert_eq!(err, Error::InfiniteLoop { limit: 21 });

    let trace = walk_grid(&grid, &WalkOptions::new().with_max_steps(22)).unwrap();
    assert_eq!(trace.letters, "ACB");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_strict_charset_rejects_unknown() {
    let options = WalkOptions::new().with_strict_charset(true);
    let err = walk_grid(&Grid::from_rows(["@-#-x"]), &options).unwrap_err();
    assert_eq!(err, Error::InvalidCharacter { ch: '#', x: 2, y: 0 });
}

#[test]
fn test_strict_charset_accepts_alphabet() {
    let options = WalkOptions::new().with_strict_charset(true);
    let trace = pathwalk::walk_with_options("@-Z-+\n    |\n    x", &options).unwrap();
    assert_eq!(trace.letters, "Z");
    assert_eq!(trace.path, "@-Z-+|x");
}

#[test]
fn test_path_invariants() {
    let trace = walk_rows(&["@-A-+", "    B", "x-C-+"]).unwrap();
    assert!(trace.path.starts_with('@'));
    assert!(trace.path.ends_with('x'));
    assert_eq!(trace.path.matches('x').count(), 1);
    assert_eq!(trace.letters, "ABC");
}
