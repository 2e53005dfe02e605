//! End-of-run counters.

use std::fmt;

use transposon_genome::Representation;

/// What a simulation run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimReport {
    /// Backing store used.
    pub representation: Representation,
    /// Operations issued so far.
    pub steps: usize,
    /// Genome length at the end of the run.
    pub final_len: usize,
    /// Active elements at the end of the run.
    pub active: usize,
    /// Fresh insertions performed.
    pub inserted: usize,
    /// Copies performed.
    pub copied: usize,
    /// Copies that targeted an unknown or disabled element.
    pub copy_skipped: usize,
    /// Explicit disables issued (including no-op ones).
    pub disabled: usize,
    /// Operations the genome refused with an error.
    pub rejected: usize,
}

impl SimReport {
    /// Whether two reports agree on everything except the representation.
    pub fn same_outcome(&self, other: &SimReport) -> bool {
        SimReport {
            representation: other.representation,
            ..self.clone()
        } == *other
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "representation: {}", self.representation)?;
        writeln!(f, "steps:          {}", self.steps)?;
        writeln!(f, "final length:   {}", self.final_len)?;
        writeln!(f, "active TEs:     {}", self.active)?;
        writeln!(f, "inserted:       {}", self.inserted)?;
        writeln!(
            f,
            "copied:         {} ({} skipped)",
            self.copied, self.copy_skipped
        )?;
        writeln!(f, "disabled:       {}", self.disabled)?;
        write!(f, "rejected:       {}", self.rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_outcome_ignores_representation() {
        let a = SimReport {
            representation: Representation::Array,
            steps: 3,
            inserted: 3,
            ..SimReport::default()
        };
        let b = SimReport {
            representation: Representation::Linked,
            ..a.clone()
        };
        assert!(a.same_outcome(&b));
        let c = SimReport {
            steps: 4,
            ..b.clone()
        };
        assert!(!a.same_outcome(&c));
    }

    #[test]
    fn display_lists_every_counter() {
        let text = SimReport::default().to_string();
        for label in ["representation", "steps", "final length", "active TEs", "rejected"] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
