use super::*;

#[test]
fn test_muscle_brackets() {
    assert_eq!(resolve_bracket(Discipline::Muscle, 10).unwrap().key, "10-12");
    assert_eq!(resolve_bracket(Discipline::Muscle, 25).unwrap().key, "18-30");
    assert_eq!(resolve_bracket(Discipline::Muscle, 30).unwrap().key, "18-30");
    assert_eq!(resolve_bracket(Discipline::Muscle, 31).unwrap().key, "31-40");
    assert_eq!(resolve_bracket(Discipline::Ffmi, 80).unwrap().key, "71-80");
}

#[test]
fn test_unmapped_age_is_an_error() {
    assert_eq!(
        resolve_bracket(Discipline::Muscle, 9),
        Err(ScoreError::UnmappedAge {
            discipline: Discipline::Muscle,
            age: 9,
        })
    );
    assert!(resolve_bracket(Discipline::Muscle, 81).is_err());
    assert!(resolve_bracket(Discipline::Cardio, 12).is_err());
}

#[test]
fn test_age_valid_in_one_discipline_only() {
    assert_eq!(resolve_bracket(Discipline::Muscle, 11).unwrap().key, "10-12");
    assert!(resolve_bracket(Discipline::Power, 11).is_err());
}

#[test]
fn test_cardio_twenty_belongs_to_17_20() {
    assert_eq!(resolve_bracket(Discipline::Cardio, 20).unwrap().key, "17-20");
    assert_eq!(resolve_bracket(Discipline::Cardio, 21).unwrap().key, "21-29");
    assert_eq!(resolve_bracket(Discipline::Cardio, 65).unwrap().key, "50+");
}

#[test]
fn test_open_bracket_disciplines() {
    assert_eq!(resolve_bracket(Discipline::Strength, 9).unwrap().key, "all");
    assert_eq!(resolve_bracket(Discipline::Run5k, 90).unwrap().key, "all");
}
