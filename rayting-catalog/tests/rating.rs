use rayting_catalog::rating::{ALL_GRADES, SCALE};
use rayting_catalog::{Grade, Rating, effective_label, score_for_label};

#[test]
fn scale_scores_descend() {
    assert_eq!(SCALE.len(), 18);
    assert_eq!(SCALE.first(), Some(&("A+", 20)));
    assert_eq!(SCALE.last(), Some(&("D", 3)));
    for pair in SCALE.windows(2) {
        assert!(pair[0].1 > pair[1].1, "{:?} should outrank {:?}", pair[0], pair[1]);
    }
}

#[test]
fn every_scale_label_parses() {
    for (label, score) in SCALE {
        let r = Rating::parse(label).unwrap_or_else(|| panic!("{label} should parse"));
        assert_eq!(r.to_string(), *label);
        assert_eq!(r.score(), *score);
    }
}

#[test]
fn single_grades_round_trip() {
    for g in ALL_GRADES {
        assert_eq!(Grade::from_label(g.label()), Some(*g));
    }
}

#[test]
fn combo_resolves_to_higher_grade() {
    assert_eq!(Rating::parse("A-/A").unwrap().effective(), Grade::A);
    assert_eq!(Rating::parse("B+/A-").unwrap().effective(), Grade::AMinus);
    assert_eq!(Rating::parse("B").unwrap().effective(), Grade::B);
}

#[test]
fn effective_label_decomposition() {
    assert_eq!(effective_label("A-/A"), "A");
    assert_eq!(effective_label("B+/A-"), "A-");
    assert_eq!(effective_label("C+"), "C+");
    assert_eq!(effective_label("Great/ish"), "Great/ish");
    assert_eq!(effective_label(""), "");
}

#[test]
fn parse_tolerates_whitespace() {
    assert_eq!(
        Rating::parse(" B / B+ "),
        Some(Rating::Combo(Grade::B, Grade::BPlus))
    );
    assert_eq!(score_for_label(" B / B+ "), 13);
}

#[test]
fn unknown_labels() {
    assert_eq!(Rating::parse("E"), None);
    assert_eq!(Rating::parse("A/Z"), None);
    assert_eq!(Rating::parse(""), None);
    assert_eq!(score_for_label("E"), 0);
    assert_eq!(score_for_label(""), 0);
}

#[test]
fn off_scale_combo_scores_as_effective_grade() {
    // Not adjacent, so not on the scale
    let r = Rating::parse("C/A").unwrap();
    assert_eq!(r.effective(), Grade::A);
    assert_eq!(r.score(), 18);
}
