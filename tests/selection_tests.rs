use word_search::{
    straight_path, Grid, Orientation, Placement, SelectionEngine, SelectionState, WordLookup,
};

// C A T X
// X D O G
// X X X X
// X X X Q
fn fixture() -> (Grid, Vec<Placement>) {
    let grid = Grid::from_rows(&["CATX", "XDOG", "XXXX", "XXXQ"]).unwrap();
    let cat = grid
        .evaluate(&['C', 'A', 'T'], (0, 0), Orientation::Horizontal)
        .unwrap();
    let dog = grid
        .evaluate(&['D', 'O', 'G'], (1, 1), Orientation::Horizontal)
        .unwrap();
    let q = grid
        .evaluate(&['Q'], (3, 3), Orientation::Vertical)
        .unwrap();
    (grid, vec![cat, dog, q])
}

fn drag(engine: &mut SelectionEngine, from: (usize, usize), to: Option<(usize, usize)>) {
    engine.start(from);
    engine.move_to(to);
}

#[test]
fn test_straight_path_shapes() {
    assert_eq!(straight_path((1, 1), (1, 1)), Some(vec![(1, 1)]));
    assert_eq!(straight_path((0, 0), (0, 2)), Some(vec![(0, 0), (0, 1), (0, 2)]));
    assert_eq!(straight_path((2, 0), (0, 0)), Some(vec![(2, 0), (1, 0), (0, 0)]));
    assert_eq!(straight_path((3, 0), (1, 2)), Some(vec![(3, 0), (2, 1), (1, 2)]));
    assert_eq!(straight_path((0, 0), (1, 2)), None);
    assert_eq!(straight_path((0, 0), (2, 1)), None);
}

#[test]
fn test_lookup_holds_both_spellings() {
    let (_, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    assert_eq!(lookup.get("CAT"), &[0]);
    assert_eq!(lookup.get("TAC"), &[0]);
    assert_eq!(lookup.get("GOD"), &[1]);
    // palindromic single letter keeps one entry
    assert_eq!(lookup.get("Q"), &[2]);
    assert!(lookup.get("COW").is_empty());
    assert_eq!(lookup.len(), 5);
}

#[test]
fn test_lookup_shared_spelling_prefers_forward() {
    let grid = Grid::from_rows(&["ABX", "XXX", "BAX"]).unwrap();
    let ab = grid
        .evaluate(&['A', 'B'], (0, 0), Orientation::Horizontal)
        .unwrap();
    let ba = grid
        .evaluate(&['B', 'A'], (2, 0), Orientation::Horizontal)
        .unwrap();
    let lookup = WordLookup::build(&[ab, ba]);
    assert_eq!(lookup.get("AB"), &[0, 1]);
    assert_eq!(lookup.get("BA"), &[1, 0]);
}

#[test]
fn test_forward_drag_matches() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    drag(&mut engine, (0, 0), Some((0, 2)));
    assert_eq!(engine.path(), &[(0, 0), (0, 1), (0, 2)]);
    assert_eq!(engine.end(&grid, &lookup, |_| true), Some(0));
    assert_eq!(engine.state(), &SelectionState::Idle);
}

#[test]
fn test_reverse_drag_matches_same_placement() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    drag(&mut engine, (1, 3), Some((1, 1)));
    assert_eq!(engine.end(&grid, &lookup, |_| true), Some(1));
}

#[test]
fn test_found_word_is_not_matched_again() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    drag(&mut engine, (0, 0), Some((0, 2)));
    assert_eq!(engine.end(&grid, &lookup, |i| i != 0), None);
    assert!(!engine.is_dragging());
}

#[test]
fn test_l_shape_collapses_to_anchor() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    drag(&mut engine, (0, 0), Some((0, 2)));
    engine.move_to(Some((1, 2)));
    assert_eq!(engine.path(), &[(0, 0)]);
    // "C" is not a word
    assert_eq!(engine.end(&grid, &lookup, |_| true), None);

    // Anchor on the one-letter word: the collapsed path still matches it.
    drag(&mut engine, (3, 3), Some((1, 2)));
    assert_eq!(engine.path(), &[(3, 3)]);
    assert_eq!(engine.end(&grid, &lookup, |_| true), Some(2));
}

#[test]
fn test_single_cell_drag_matches_single_letter_word() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    engine.start((3, 3));
    assert_eq!(engine.end(&grid, &lookup, |_| true), Some(2));
}

#[test]
fn test_leaving_grid_collapses_to_anchor() {
    let (grid, _) = fixture();
    let mut engine = SelectionEngine::new(grid.size());

    drag(&mut engine, (0, 0), Some((2, 2)));
    assert_eq!(engine.path().len(), 3);
    engine.move_to(None);
    assert_eq!(engine.path(), &[(0, 0)]);
    engine.move_to(Some((0, 9)));
    assert_eq!(engine.path(), &[(0, 0)]);
}

#[test]
fn test_idle_engine_ignores_move_and_end() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    assert!(!engine.move_to(Some((0, 1))));
    assert!(engine.path().is_empty());
    assert_eq!(engine.end(&grid, &lookup, |_| true), None);
}

#[test]
fn test_start_outside_grid_is_ignored() {
    let mut engine = SelectionEngine::new(4);
    assert!(!engine.start((4, 0)));
    assert!(!engine.is_dragging());
}

#[test]
fn test_new_start_replaces_gesture_and_cancel_discards() {
    let (grid, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let mut engine = SelectionEngine::new(grid.size());

    drag(&mut engine, (0, 0), Some((0, 2)));
    drag(&mut engine, (1, 1), Some((1, 3)));
    assert_eq!(engine.path(), &[(1, 1), (1, 2), (1, 3)]);

    engine.cancel();
    assert!(!engine.is_dragging());
    assert_eq!(engine.end(&grid, &lookup, |_| true), None);
}

#[test]
fn test_found_word_does_not_credit_its_reversal() {
    // A B X
    // X X X
    // B A X
    let grid = Grid::from_rows(&["ABX", "XXX", "BAX"]).unwrap();
    let ab = grid
        .evaluate(&['A', 'B'], (0, 0), Orientation::Horizontal)
        .unwrap();
    let ba = grid
        .evaluate(&['B', 'A'], (2, 0), Orientation::Horizontal)
        .unwrap();
    let lookup = WordLookup::build(&[ab, ba]);
    let mut engine = SelectionEngine::new(grid.size());
    let mut found = [false, false];

    for _ in 0..2 {
        drag(&mut engine, (2, 0), Some((2, 1)));
        if let Some(i) = engine.end(&grid, &lookup, |i| !found[i]) {
            found[i] = true;
        }
    }
    assert_eq!(found, [false, true]);

    // Read backwards, the same cells still only select BA.
    drag(&mut engine, (2, 1), Some((2, 0)));
    assert_eq!(engine.end(&grid, &lookup, |i| !found[i]), None);

    // AB's own cells still work.
    drag(&mut engine, (0, 1), Some((0, 0)));
    assert_eq!(engine.end(&grid, &lookup, |i| !found[i]), Some(0));
}

#[test]
fn test_lookup_on_path_matches_either_direction() {
    let (_, placements) = fixture();
    let lookup = WordLookup::build(&placements);
    let forward: Vec<_> = lookup.on_path(&[(1, 1), (1, 2), (1, 3)]).collect();
    let backward: Vec<_> = lookup.on_path(&[(1, 3), (1, 2), (1, 1)]).collect();
    assert_eq!(forward, vec![1]);
    assert_eq!(backward, vec![1]);
    assert_eq!(lookup.on_path(&[(0, 0), (0, 1)]).count(), 0);
    assert_eq!(lookup.on_path(&[]).count(), 0);
}
