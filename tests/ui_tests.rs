#![cfg(feature = "std")]

use rand::rngs::SmallRng;
use rand::SeedableRng;
use word_search::ui::{column_label, parse_command, parse_coord, Command};
use word_search::{
    Behaviour, GameController, GameSetup, ManualScheduler, Mode, TerminalRenderer, WordEntry,
};

#[test]
fn test_column_labels() {
    assert_eq!(column_label(0), "A");
    assert_eq!(column_label(25), "Z");
    assert_eq!(column_label(26), "AA");
    assert_eq!(column_label(27), "AB");
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1", 10), Ok((0, 0)));
    assert_eq!(parse_coord("c5", 10), Ok((4, 2)));
    assert_eq!(parse_coord(" J10 ", 10), Ok((9, 9)));
    assert_eq!(parse_coord("AA3", 30), Ok((2, 26)));
}

#[test]
fn test_parse_coord_errors() {
    assert!(parse_coord("", 10).is_err());
    assert!(parse_coord("A", 10).is_err());
    assert!(parse_coord("5", 10).is_err());
    assert!(parse_coord("K1", 10).is_err());
    assert!(parse_coord("A0", 10).is_err());
    assert!(parse_coord("A11", 10).is_err());
    assert!(parse_coord("A1x", 10).is_err());
    assert!(parse_coord("ZZZZZZZZZZZZZZZZ1", 10).is_err());
}

#[test]
fn test_parse_command() {
    assert_eq!(
        parse_command("drag A1 C3", 5),
        Ok(Command::Drag((0, 0), (2, 2)))
    );
    assert_eq!(parse_command("d b2", 5), Ok(Command::Drag((1, 1), (1, 1))));
    assert_eq!(parse_command("CHECK", 5), Ok(Command::Check));
    assert_eq!(parse_command("reveal", 5), Ok(Command::Reveal));
    assert_eq!(parse_command("retry", 5), Ok(Command::Retry));
    assert_eq!(parse_command("", 5), Ok(Command::Show));
    assert_eq!(parse_command("?", 5), Ok(Command::Help));
    assert_eq!(parse_command("q", 5), Ok(Command::Quit));
}

#[test]
fn test_parse_command_errors() {
    assert!(parse_command("drag", 5).is_err());
    assert!(parse_command("drag A1 Z9", 5).is_err());
    assert!(parse_command("check now", 5).is_err());
    assert!(parse_command("fly", 5).is_err());
}

fn play(setup: GameSetup) -> GameController<TerminalRenderer, ManualScheduler> {
    let renderer = TerminalRenderer::new(&setup);
    GameController::new(
        setup,
        SmallRng::seed_from_u64(8),
        renderer,
        ManualScheduler::new(),
    )
    .unwrap()
}

#[test]
fn test_render_marks_found_and_solved_words() {
    let entries = vec![WordEntry::new("cat", None), WordEntry::new("dog", None)];
    let mut c = play(GameSetup::new(entries, Behaviour::default()));

    let board = c.renderer().render();
    assert!(board.contains("[ ] CAT"));
    assert!(board.contains("0 of 2 found"));
    assert!(board.contains("00:00"));

    let p = c.session().placements()[0].clone();
    c.pointer_down(p.start);
    c.pointer_move(Some(p.end));
    let board = c.renderer().render();
    assert!(board.contains(&format!("<{}>", p.word.chars().next().unwrap())));

    assert_eq!(c.pointer_up(), Some(0));
    assert_eq!(c.renderer_mut().take_notices(), vec!["Found CAT!".to_string()]);
    c.tick();
    let board = c.renderer().render();
    assert!(board.contains("[x] CAT"));
    assert!(board.contains("1 of 2 found"));
    assert!(board.contains("00:01"));
    assert!(!board.contains('<'));

    assert!(c.reveal());
    let board = c.renderer().render();
    assert!(board.contains("[-] DOG"));
    assert!(board.contains("(D)") || board.contains("(O)") || board.contains("(G)"));
    let notices = c.renderer_mut().take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("You got 1 out of 2 points"));
}

#[test]
fn test_render_shows_hints_in_hint_mode() {
    let setup = GameSetup {
        mode: Mode::Hint,
        ..GameSetup::new(
            vec![WordEntry::new("gato", Some("animal that meows"))],
            Behaviour::default(),
        )
    };
    let mut c = play(setup);
    let board = c.renderer().render();
    assert!(board.contains("[ ] animal that meows"));
    assert!(!board.contains("GATO\n"));

    assert!(c.reveal());
    assert!(c.renderer().render().contains("animal that meows = GATO"));
}

#[test]
fn test_render_shows_time_limit() {
    let behaviour = Behaviour {
        time_limit_seconds: Some(90.0),
        ..Behaviour::default()
    };
    let c = play(GameSetup::new(vec![WordEntry::new("cat", None)], behaviour));
    assert!(c.renderer().status_line().ends_with("00:00 / 01:30"));
}
