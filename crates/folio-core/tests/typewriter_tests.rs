// Host-side tests for the typewriter phrase cycler.

use folio_core::*;

fn cycler() -> PhraseCycler {
    PhraseCycler::new(["ab", "xyz"]).unwrap()
}

#[test]
fn empty_phrase_list_is_rejected() {
    let empty: [&str; 0] = [];
    assert_eq!(PhraseCycler::new(empty).unwrap_err(), FxError::EmptyPhrases);
}

#[test]
fn types_pauses_deletes_and_advances() {
    let mut c = cycler();
    let steps: Vec<TypeStep> = (0..5).map(|_| c.step()).collect();
    let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
    let delays: Vec<u32> = steps.iter().map(|s| s.delay_ms).collect();

    assert_eq!(texts, ["a", "ab", "a", "", "x"]);
    assert_eq!(
        delays,
        [TYPE_STEP_MS, TYPE_PAUSE_MS, DELETE_STEP_MS, TYPE_STEP_MS, TYPE_STEP_MS]
    );
    assert_eq!(c.phrase_index(), 1);
}

#[test]
fn visits_phrases_in_order_and_wraps() {
    let mut c = PhraseCycler::new(TITLE_PHRASES).unwrap();
    let mut visited = vec![c.phrase_index()];
    for _ in 0..2000 {
        c.step();
        if *visited.last().unwrap() != c.phrase_index() {
            visited.push(c.phrase_index());
        }
    }
    assert!(visited.len() > TITLE_PHRASES.len());
    for (i, idx) in visited.iter().enumerate() {
        assert_eq!(*idx, i % TITLE_PHRASES.len());
    }
}

#[test]
fn length_is_monotonic_within_each_phase() {
    let mut c = PhraseCycler::new(TITLE_PHRASES).unwrap();
    let mut prev_len = 0usize;
    for _ in 0..500 {
        let phase_before = c.phase();
        let index_before = c.phrase_index();
        c.step();
        let len = c.visible_len();
        assert!(len <= c.phrase_len());
        if c.phrase_index() != index_before {
            assert_eq!(len, 0);
        } else {
            match phase_before {
                Phase::Typing => assert_eq!(len, prev_len + 1),
                Phase::Pausing | Phase::Deleting => assert_eq!(len + 1, prev_len),
            }
        }
        prev_len = len;
    }
}

#[test]
fn never_splits_multibyte_characters() {
    let mut c = PhraseCycler::new(["héllo ✓"]).unwrap();
    for _ in 0..30 {
        let step = c.step();
        assert!("héllo ✓".starts_with(&step.text));
    }
}

#[test]
fn single_character_and_empty_phrases_cycle() {
    let mut c = PhraseCycler::new(["", "a"]).unwrap();
    for _ in 0..20 {
        let step = c.step();
        assert!(step.text.len() <= 1);
    }
}
