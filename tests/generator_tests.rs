use rand::rngs::SmallRng;
use rand::SeedableRng;
use word_search::{
    generate, place_word, prepare_fill_pool, size_bounds, Behaviour, ErrorKind, GeneratorLimits,
    Grid, Orientation, Orientations, Puzzle, PuzzleError, WordEntry,
};

fn entries(words: &[&str]) -> Vec<WordEntry> {
    words.iter().map(|w| WordEntry::new(w, None)).collect()
}

fn assert_valid(puzzle: &Puzzle, entries: &[WordEntry]) {
    assert_eq!(puzzle.placements.len(), entries.len());
    assert!(puzzle.grid.is_complete());
    for (entry, p) in entries.iter().zip(&puzzle.placements) {
        assert_eq!(p.word, entry.word);
        assert_eq!(p.path.len(), entry.len());
        assert_eq!(p.path.first(), Some(&p.start));
        assert_eq!(p.path.last(), Some(&p.end));
        assert_eq!(puzzle.grid.letters_along(&p.path), entry.word);
    }
}

#[test]
fn test_cat_dog_all_orientations_with_overlap() {
    let words = entries(&["CAT", "DOG"]);
    let mut rng = SmallRng::seed_from_u64(7);
    let puzzle = generate(&words, &Behaviour::default(), &mut rng).unwrap();
    assert!(puzzle.size() >= 3);
    assert_valid(&puzzle, &words);
}

#[test]
fn test_no_orientations_is_config_error() {
    let behaviour = Behaviour {
        orientations: Orientations::none(),
        ..Behaviour::default()
    };
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate(&entries(&["CAT"]), &behaviour, &mut rng).unwrap_err();
    assert_eq!(err, PuzzleError::NoOrientations);
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_empty_entries_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate(&[], &Behaviour::default(), &mut rng).unwrap_err();
    assert_eq!(err, PuzzleError::EmptyWordList);
}

#[test]
fn test_exhausted_trials_is_placement_error() {
    let behaviour = Behaviour {
        limits: GeneratorLimits {
            trials_per_size: 0,
            ..GeneratorLimits::default()
        },
        ..Behaviour::default()
    };
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate(&entries(&["CAT", "DOG"]), &behaviour, &mut rng).unwrap_err();
    assert_eq!(
        err,
        PuzzleError::UnableToPlaceWords {
            longest: 3,
            max_size: 12
        }
    );
    assert_eq!(err.kind(), ErrorKind::Placement);
}

#[test]
fn test_word_as_long_as_grid_fits() {
    let words = entries(&["ABCDEFGHIJKLMNOP"]);
    let mut rng = SmallRng::seed_from_u64(3);
    let puzzle = generate(&words, &Behaviour::default(), &mut rng).unwrap();
    assert_eq!(puzzle.size(), 16);
    assert_valid(&puzzle, &words);
}

#[test]
fn test_size_bounds() {
    let limits = GeneratorLimits::default();
    // 6 letters: ceil(sqrt(6)) + 1 = 4
    assert_eq!(size_bounds(&entries(&["CAT", "DOG"]), &limits), (4, 12));
    // longest word dominates
    assert_eq!(size_bounds(&entries(&["ABCDEFGHIJKLMNOP"]), &limits), (16, 20));
    // 100 letters: ceil(10) + 1 = 11
    let many: Vec<String> = (0..10)
        .map(|i| "ABCDEFGHIJ".chars().cycle().skip(i).take(10).collect())
        .collect();
    let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
    assert_eq!(size_bounds(&entries(&many_refs), &limits), (11, 14));
}

#[test]
fn test_same_seed_same_puzzle() {
    let words = entries(&["RUST", "CRATE", "BORROW", "TRAIT", "MACRO"]);
    let a = generate(&words, &Behaviour::default(), &mut SmallRng::seed_from_u64(99)).unwrap();
    let b = generate(&words, &Behaviour::default(), &mut SmallRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_only_enabled_orientations_used() {
    let behaviour = Behaviour {
        orientations: Orientations::only(&[Orientation::Vertical]),
        ..Behaviour::default()
    };
    let words = entries(&["ALPHA", "BRAVO", "DELTA", "ECHO"]);
    let puzzle = generate(&words, &behaviour, &mut SmallRng::seed_from_u64(5)).unwrap();
    assert_valid(&puzzle, &words);
    assert!(puzzle
        .placements
        .iter()
        .all(|p| p.orientation == Orientation::Vertical));
}

#[test]
fn test_fill_pool_restricts_noise_letters() {
    let behaviour = Behaviour {
        fill_pool: "z".to_string(),
        ..Behaviour::default()
    };
    let words = entries(&["CAT"]);
    let puzzle = generate(&words, &behaviour, &mut SmallRng::seed_from_u64(11)).unwrap();
    let path = &puzzle.placements[0].path;
    for r in 0..puzzle.size() {
        for c in 0..puzzle.size() {
            if !path.contains(&(r, c)) {
                assert_eq!(puzzle.grid.get((r, c)), Some('Z'));
            }
        }
    }
}

#[test]
fn test_prepare_fill_pool() {
    assert_eq!(prepare_fill_pool("ab-c 1"), vec!['A', 'B', 'C']);
    assert_eq!(prepare_fill_pool("123"), prepare_fill_pool(""));
    assert_eq!(prepare_fill_pool("").len(), 26);
}

#[test]
fn test_place_word_prefers_overlap() {
    let mut grid = Grid::new(5);
    let cat = grid
        .evaluate(&['C', 'A', 'T'], (2, 1), Orientation::Horizontal)
        .unwrap();
    grid.apply(&cat);

    let word: Vec<char> = "TACO".chars().collect();
    let mut rng = SmallRng::seed_from_u64(17);
    for _ in 0..20 {
        let p = place_word(&word, &grid, &Orientation::ALL, true, &mut rng).unwrap();
        // Only one placement reuses all of CAT: written backwards over it.
        assert_eq!(p.overlap, 3);
        assert_eq!(p.start, (2, 3));
        assert_eq!(p.end, (2, 0));
        assert_eq!(p.orientation, Orientation::HorizontalBack);
    }
}

#[test]
fn test_place_word_without_overlap_preference() {
    let mut grid = Grid::new(5);
    let cat = grid
        .evaluate(&['C', 'A', 'T'], (2, 1), Orientation::Horizontal)
        .unwrap();
    grid.apply(&cat);

    let word: Vec<char> = "TACO".chars().collect();
    let mut rng = SmallRng::seed_from_u64(17);
    let overlaps: Vec<usize> = (0..50)
        .map(|_| {
            place_word(&word, &grid, &Orientation::ALL, false, &mut rng)
                .unwrap()
                .overlap
        })
        .collect();
    assert!(overlaps.iter().any(|&o| o < 3));
}

#[test]
fn test_place_word_without_room() {
    let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
    let word: Vec<char> = "XY".chars().collect();
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(place_word(&word, &grid, &Orientation::ALL, false, &mut rng).is_none());
}
