//! Minimum-severity gate

use super::severity::Severity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelGate {
    threshold: Severity,
}

impl LevelGate {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    #[inline]
    pub fn admit(&self, severity: Severity) -> bool {
        severity.ordinal() >= self.threshold.ordinal()
    }

    /// Overwrite the threshold and return the new effective value
    pub fn set_threshold(&mut self, threshold: Severity) -> Severity {
        self.threshold = threshold;
        self.threshold
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_admits_everything() {
        let gate = LevelGate::default();
        for severity in Severity::ALL {
            assert!(gate.admit(severity));
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let gate = LevelGate::new(Severity::Warning);
        assert!(!gate.admit(Severity::Debug));
        assert!(!gate.admit(Severity::Log));
        assert!(gate.admit(Severity::Warning));
        assert!(gate.admit(Severity::Error));
    }

    #[test]
    fn test_set_threshold_can_lower() {
        let mut gate = LevelGate::new(Severity::Error);
        assert_eq!(gate.set_threshold(Severity::Debug), Severity::Debug);
        assert!(gate.admit(Severity::Debug));
    }
}
