use std::fmt;

/// Diabetic retinopathy grade reported by the classification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    NoRetinopathy,
    Mild,
    Moderate,
    Severe,
    Proliferative,
}

impl Severity {
    /// All grades in service class-index order.
    pub const ALL: [Severity; 5] = [
        Severity::NoRetinopathy,
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Proliferative,
    ];

    /// Label exactly as it appears on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Severity::NoRetinopathy => "No Retinopathy",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Proliferative => "Proliferative",
        }
    }

    /// Parses a wire label. Matching is exact; the service never varies case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a successful predict cycle.
///
/// The label is kept verbatim so that grades outside the known set (the
/// service answers `"Unknown"` for out-of-range classes) can still be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub label: String,
    pub severity: Option<Severity>,
}

impl Diagnosis {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let severity = Severity::from_label(&label);
        Self { label, severity }
    }

    pub fn is_known(&self) -> bool {
        self.severity.is_some()
    }
}
