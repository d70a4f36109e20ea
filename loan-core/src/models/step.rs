use std::fmt;

use super::field::FormField;

/// Ordering key for a form step.
///
/// Steps are numbered 1..=7 in the base sequence. Program-specific steps are
/// inserted *between* existing steps without renumbering them, so the key
/// carries a tenths component: `StepId::inserted(4, 5)` displays as `4.5`
/// and sorts between steps 4 and 5. The derived `Ord` compares
/// `(units, tenths)` lexicographically, which is exactly the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId {
    units: u16,
    tenths: u8,
}

impl StepId {
    /// A whole-numbered step from the base sequence.
    pub const fn new(units: u16) -> Self {
        Self { units, tenths: 0 }
    }

    /// A step inserted between `units` and `units + 1`.
    pub const fn inserted(units: u16, tenths: u8) -> Self {
        Self { units, tenths }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tenths == 0 {
            write!(f, "{}", self.units)
        } else {
            write!(f, "{}.{}", self.units, self.tenths)
        }
    }
}

/// One screen of the application flow: an ordered set of fields under a
/// title. The final step of every resolved flow is the review step, which
/// carries no fields of its own.
#[derive(Debug, Clone)]
pub struct FormStep {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

impl FormStep {
    pub fn new(id: StepId, title: &str, description: &str, fields: Vec<FormField>) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            fields,
        }
    }

    /// The review step collects nothing; it only displays accumulated data.
    pub fn is_review(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inserted_id_sorts_between_neighbors() {
        assert!(StepId::new(4) < StepId::inserted(4, 5));
        assert!(StepId::inserted(4, 5) < StepId::new(5));
    }

    #[test]
    fn display_omits_zero_tenths() {
        assert_eq!(StepId::new(4).to_string(), "4");
        assert_eq!(StepId::inserted(4, 5).to_string(), "4.5");
        assert_eq!(StepId::inserted(1, 5).to_string(), "1.5");
    }
}
