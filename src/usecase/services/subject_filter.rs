use crate::domain::entities::assignment::Assignment;
use crate::domain::entities::subject::{Subject, SubjectSelection};

pub fn class_matches_subject(class: &str, subject: Subject) -> bool {
    let class = class.to_lowercase();
    let label = subject.label().to_lowercase();

    class.contains(&label)
        || label.contains(&class)
        || subject.aliases().iter().any(|alias| class.contains(alias))
}

pub fn assignment_matches(assignment: &Assignment, selection: &SubjectSelection) -> bool {
    selection.is_empty()
        || selection
            .iter()
            .any(|subject| class_matches_subject(&assignment.class, subject))
}

/// An empty selection keeps every assignment.
#[allow(dead_code)]
pub fn filter_assignments(
    assignments: &[Assignment],
    selection: &SubjectSelection,
) -> Vec<Assignment> {
    assignments
        .iter()
        .filter(|assignment| assignment_matches(assignment, selection))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new("Physics HL", "Lab Report", "February 28, 2024"),
            Assignment::new("History", "Source Analysis", "March 4, 2024"),
            Assignment::new("Mathematics Analysis and Approaches SL", "IA Draft", "April 1, 2024"),
            Assignment::new("Economics", "Commentary", "April 9, 2024"),
        ]
    }

    #[test]
    fn empty_selection_is_identity() {
        let list = sample();
        assert_eq!(filter_assignments(&list, &SubjectSelection::new()), list);
    }

    #[test]
    fn physics_selection_keeps_only_physics() {
        let list = vec![
            Assignment::new("Physics", "Lab Report", "February 28, 2024"),
            Assignment::new("History", "Essay", "March 1, 2024"),
        ];
        let selection: SubjectSelection = [Subject::Physics].into_iter().collect();

        assert_eq!(
            filter_assignments(&list, &selection),
            vec![Assignment::new("Physics", "Lab Report", "February 28, 2024")]
        );
    }

    #[test]
    fn aliases_match_long_class_names() {
        let selection: SubjectSelection = [Subject::MathAa].into_iter().collect();
        let filtered = filter_assignments(&sample(), &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].assignment, "IA Draft");
    }

    #[test]
    fn label_containing_class_matches() {
        assert!(class_matches_subject("math", Subject::MathAa));
        assert!(class_matches_subject("PHYSICS", Subject::Physics));
        assert!(!class_matches_subject("History", Subject::Physics));
    }

    #[test]
    fn selected_subjects_are_or_combined() {
        let selection: SubjectSelection =
            [Subject::History, Subject::Economics].into_iter().collect();
        let classes: Vec<String> = filter_assignments(&sample(), &selection)
            .into_iter()
            .map(|a| a.class)
            .collect();
        assert_eq!(classes, vec!["History".to_string(), "Economics".to_string()]);
    }

    #[test]
    fn filtering_twice_gives_same_list() {
        let selection: SubjectSelection =
            [Subject::Physics, Subject::MathAa].into_iter().collect();
        let once = filter_assignments(&sample(), &selection);
        let twice = filter_assignments(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn short_alias_matching_stays_loose() {
        assert!(class_matches_subject("Smart Materials", Subject::VisualArts));
    }
}
