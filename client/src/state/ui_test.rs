use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(state.nav_expanded);
}

#[test]
fn section_paths_are_unique() {
    for (i, a) in Section::ALL.iter().enumerate() {
        for b in &Section::ALL[i + 1..] {
            assert_ne!(a.path(), b.path());
        }
    }
}

#[test]
fn for_path_prefers_longest_prefix() {
    assert_eq!(Section::for_path("/homework/grading"), Section::Grading);
    assert_eq!(Section::for_path("/homework"), Section::Homework);
    assert_eq!(Section::for_path("/persons/42"), Section::Persons);
    assert_eq!(Section::for_path("/finance?month=2024-05"), Section::Finance);
}

#[test]
fn for_path_falls_back_to_overview() {
    assert_eq!(Section::for_path("/"), Section::Overview);
    assert_eq!(Section::for_path("/nowhere"), Section::Overview);
    assert_eq!(Section::for_path("/personsx"), Section::Overview);
}

#[test]
fn only_overview_has_no_service() {
    let without: Vec<Section> = Section::ALL.into_iter().filter(|s| s.service().is_none()).collect();
    assert_eq!(without, vec![Section::Overview]);
}
