use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown priority: {value}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub class: String,
    pub assignment: String,
    pub date: String,
    pub priority: Priority,
}

impl Assignment {
    pub fn new(
        class: impl Into<String>,
        assignment: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            assignment: assignment.into(),
            date: date.into(),
            priority: Priority::default(),
        }
    }

    pub fn with_priority(&self, priority: Priority) -> Self {
        Self {
            priority,
            ..self.clone()
        }
    }
}

/// Rows shown until a schedule has been uploaded.
pub fn placeholder_assignments() -> Vec<Assignment> {
    [
        ("Mathematics Analysis and Interpretations", "IA Exploration", "TBA"),
        ("Physics", "Internal Assessment Draft", "TBA"),
        ("Computer Science", "Internal Assessment Product", "TBA"),
        ("Business Management", "Business Research Project", "TBA"),
        ("Language & Literature", "Individual Oral", "TBA"),
    ]
    .into_iter()
    .map(|(class, assignment, date)| Assignment::new(class, assignment, date))
    .collect()
}
