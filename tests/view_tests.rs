use hangman::{Difficulty, GameStatus, Round, RoundOptions, RoundView};

fn round(word: &str) -> Round {
    Round::new(word, Difficulty::Hard, RoundOptions::default()).unwrap()
}

#[test]
fn test_view_fields_in_progress() {
    let mut r = round("GO-LEM");
    r.guess('g').unwrap();
    r.guess('x').unwrap();
    let view = RoundView::from(&r);
    assert_eq!(view.masked_word, "G_-___");
    assert_eq!(view.used_letters, vec!['g', 'x']);
    assert_eq!(view.lives_remaining, 4);
    assert!(!view.finished);
    assert_eq!(view.message, None);
    assert_eq!(view.word, None);
}

#[test]
fn test_used_letters_are_sorted() {
    let mut r = round("GOLEM");
    for c in ['z', 'a', 'm', 'b'] {
        r.guess(c).unwrap();
    }
    let view = RoundView::from(&r);
    assert_eq!(view.used_letters, vec!['a', 'b', 'm', 'z']);
}

#[test]
fn test_json_omits_word_until_terminal() {
    let mut r = round("CAT");
    r.guess('a').unwrap();
    let json = serde_json::to_string(&RoundView::from(&r)).unwrap();
    assert!(!json.contains("CAT"));
    assert!(!json.contains("\"word\""));
    assert!(!json.contains("\"message\""));
    assert!(json.contains("\"masked_word\":\"_A_\""));

    for c in ['x', 'z', 'q', 'w', 'k'] {
        r.guess(c).unwrap();
    }
    assert_eq!(r.status(), GameStatus::Lost);
    let json = serde_json::to_string(&RoundView::from(&r)).unwrap();
    assert!(json.contains("\"word\":\"CAT\""));
    assert!(json.contains("\"finished\":true"));
}

#[test]
fn test_view_roundtrips_through_json() {
    let mut r = round("GOLEM");
    r.guess('o').unwrap();
    let view = RoundView::from(&r);
    let json = serde_json::to_string(&view).unwrap();
    let back: RoundView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
}
