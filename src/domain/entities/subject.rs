use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;

pub const MAX_SELECTED_SUBJECTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    MathAa,
    MathAi,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
    BusinessManagement,
    Economics,
    History,
    Psychology,
    EnglishLanguageLiterature,
    SpanishLanguageLiterature,
    VisualArts,
    TheoryOfKnowledge,
}

impl Subject {
    pub const CATALOG: [Subject; 14] = [
        Subject::MathAa,
        Subject::MathAi,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::ComputerScience,
        Subject::BusinessManagement,
        Subject::Economics,
        Subject::History,
        Subject::Psychology,
        Subject::EnglishLanguageLiterature,
        Subject::SpanishLanguageLiterature,
        Subject::VisualArts,
        Subject::TheoryOfKnowledge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::MathAa => "Math AA",
            Subject::MathAi => "Math AI",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::ComputerScience => "Computer Science",
            Subject::BusinessManagement => "Business Management",
            Subject::Economics => "Economics",
            Subject::History => "History",
            Subject::Psychology => "Psychology",
            Subject::EnglishLanguageLiterature => "English Language & Literature",
            Subject::SpanishLanguageLiterature => "Spanish Language & Literature",
            Subject::VisualArts => "Visual Arts",
            Subject::TheoryOfKnowledge => "Theory of Knowledge",
        }
    }

    #[allow(dead_code)]
    pub fn from_label(label: &str) -> Option<Subject> {
        Subject::CATALOG
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Lowercase fragments that identify this subject inside free-text class names.
    pub fn aliases(self) -> &'static [&'static str] {
        SUBJECT_ALIASES.get(&self).copied().unwrap_or(&[])
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type AliasTable = HashMap<Subject, &'static [&'static str]>;

static SUBJECT_ALIASES: LazyLock<AliasTable> = LazyLock::new(|| {
    let entries: [(Subject, &'static [&'static str]); 14] = [
        (
            Subject::MathAa,
            &["mathematics analysis", "math aa", "analysis and approaches"],
        ),
        (
            Subject::MathAi,
            &[
                "mathematics applications",
                "math ai",
                "applications and interpretation",
                "analysis and interpretations",
            ],
        ),
        (Subject::Physics, &["physics", "phys"]),
        (Subject::Chemistry, &["chemistry", "chem"]),
        (Subject::Biology, &["biology", "bio"]),
        (
            Subject::ComputerScience,
            &["computer science", "comp sci", "compsci"],
        ),
        (
            Subject::BusinessManagement,
            &["business management", "business", "bm"],
        ),
        (Subject::Economics, &["economics", "econ"]),
        (Subject::History, &["history", "hist"]),
        (Subject::Psychology, &["psychology", "psych"]),
        (
            Subject::EnglishLanguageLiterature,
            &[
                "english",
                "language & literature",
                "language and literature",
                "lang lit",
            ],
        ),
        (
            Subject::SpanishLanguageLiterature,
            &[
                "spanish",
                "español",
                "lengua & literatura",
                "lengua y literatura",
            ],
        ),
        (Subject::VisualArts, &["visual arts", "visual art", "art"]),
        (Subject::TheoryOfKnowledge, &["theory of knowledge", "tok"]),
    ];
    HashMap::from(entries)
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Capacity reached; selection left unchanged.
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectSelection {
    selected: BTreeSet<Subject>,
}

impl SubjectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, subject: Subject) -> ToggleOutcome {
        if self.selected.remove(&subject) {
            return ToggleOutcome::Removed;
        }
        if self.selected.len() >= MAX_SELECTED_SUBJECTS {
            return ToggleOutcome::Rejected;
        }
        self.selected.insert(subject);
        ToggleOutcome::Added
    }

    pub fn contains(&self, subject: Subject) -> bool {
        self.selected.contains(&subject)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_SELECTED_SUBJECTS
    }

    pub fn iter(&self) -> impl Iterator<Item = Subject> + '_ {
        self.selected.iter().copied()
    }
}

impl FromIterator<Subject> for SubjectSelection {
    /// Collects subjects through `toggle`, so capacity applies and repeats cancel out.
    fn from_iter<I: IntoIterator<Item = Subject>>(iter: I) -> Self {
        let mut selection = SubjectSelection::new();
        for subject in iter {
            selection.toggle(subject);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_subject_has_aliases() {
        for subject in Subject::CATALOG {
            assert!(!subject.aliases().is_empty(), "{subject} should have aliases");
            assert!(
                subject
                    .aliases()
                    .iter()
                    .all(|alias| alias.to_lowercase() == *alias),
                "{subject} aliases should be lowercase"
            );
        }
    }

    #[test]
    fn from_label_round_trips_catalog() {
        for subject in Subject::CATALOG {
            assert_eq!(Subject::from_label(subject.label()), Some(subject));
        }
        assert_eq!(Subject::from_label("physics"), Some(Subject::Physics));
        assert_eq!(Subject::from_label("Astrology"), None);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SubjectSelection::new();
        assert_eq!(selection.toggle(Subject::Physics), ToggleOutcome::Added);
        assert!(selection.contains(Subject::Physics));
        assert_eq!(selection.toggle(Subject::Physics), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn seventh_subject_is_rejected_silently() {
        let mut selection: SubjectSelection = Subject::CATALOG[..6].iter().copied().collect();
        let before = selection.clone();
        assert!(selection.is_full());

        assert_eq!(selection.toggle(Subject::History), ToggleOutcome::Rejected);

        assert_eq!(selection, before);
        assert_eq!(selection.len(), 6);
        assert!(!selection.contains(Subject::History));
    }

    #[test]
    fn removal_is_allowed_at_capacity() {
        let mut selection: SubjectSelection = Subject::CATALOG[..6].iter().copied().collect();
        assert_eq!(selection.toggle(Subject::MathAa), ToggleOutcome::Removed);
        assert_eq!(selection.toggle(Subject::History), ToggleOutcome::Added);
        assert_eq!(selection.len(), 6);
    }
}
