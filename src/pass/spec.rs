//! Constraint spec: length plus per-class enable flag and minimum count.

use super::CharacterClass;
use crate::error::SynthesisError;

/// Whether a class may appear, and how many of its characters must.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRule {
    pub enabled: bool,
    pub minimum: usize,
}

impl ClassRule {
    pub const fn new(enabled: bool, minimum: usize) -> Self {
        Self { enabled, minimum }
    }
}

impl Default for ClassRule {
    fn default() -> Self {
        Self::new(true, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSpec {
    pub length: usize,
    pub upper: ClassRule,
    pub lower: ClassRule,
    pub digit: ClassRule,
    pub symbol: ClassRule,
}

impl ConstraintSpec {
    /// All classes enabled, no minimums.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            upper: ClassRule::default(),
            lower: ClassRule::default(),
            digit: ClassRule::default(),
            symbol: ClassRule::default(),
        }
    }

    pub fn with_class(mut self, class: CharacterClass, enabled: bool, minimum: usize) -> Self {
        *self.rule_mut(class) = ClassRule::new(enabled, minimum);
        self
    }

    pub fn rule(&self, class: CharacterClass) -> ClassRule {
        match class {
            CharacterClass::Upper => self.upper,
            CharacterClass::Lower => self.lower,
            CharacterClass::Digit => self.digit,
            CharacterClass::Symbol => self.symbol,
        }
    }

    pub fn rule_mut(&mut self, class: CharacterClass) -> &mut ClassRule {
        match class {
            CharacterClass::Upper => &mut self.upper,
            CharacterClass::Lower => &mut self.lower,
            CharacterClass::Digit => &mut self.digit,
            CharacterClass::Symbol => &mut self.symbol,
        }
    }

    /// Enabled classes in canonical order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.rule(class).enabled)
    }

    /// Sum of per-class minimums.
    pub fn required(&self) -> usize {
        CharacterClass::ALL
            .into_iter()
            .fold(0usize, |acc, class| acc.saturating_add(self.rule(class).minimum))
    }

    /// Check the spec before any drawing. Checks run in a fixed order so the
    /// reported error is deterministic:
    ///
    /// 1. no class enabled
    /// 2. minimums exceed length
    /// 3. positive minimum on a disabled class (canonical class order)
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if self.enabled_classes().next().is_none() {
            return Err(SynthesisError::NoClassSelected);
        }

        let required = self.required();
        if required > self.length {
            return Err(SynthesisError::MinimumsExceedLength {
                required,
                length: self.length,
            });
        }

        for class in CharacterClass::ALL {
            let rule = self.rule(class);
            if rule.minimum > 0 && !rule.enabled {
                return Err(SynthesisError::MinimumWithoutClass {
                    class,
                    minimum: rule.minimum,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use CharacterClass::*;

    #[test]
    fn test_new_enables_every_class() {
        let spec = ConstraintSpec::new(12);
        assert_eq!(spec.enabled_classes().collect::<Vec<_>>(), CharacterClass::ALL);
        assert_eq!(spec.required(), 0);
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn test_with_class_sets_rule() {
        let spec = ConstraintSpec::new(12).with_class(Digit, false, 0);
        assert_eq!(spec.rule(Digit), ClassRule::new(false, 0));
        assert_eq!(
            spec.enabled_classes().collect::<Vec<_>>(),
            vec![Upper, Lower, Symbol]
        );
    }

    #[test]
    fn test_required_sums_minimums() {
        let spec = ConstraintSpec::new(20)
            .with_class(Upper, true, 2)
            .with_class(Lower, true, 3)
            .with_class(Symbol, true, 4);
        assert_eq!(spec.required(), 9);
    }

    #[test]
    fn test_required_saturates() {
        let spec = ConstraintSpec::new(8)
            .with_class(Upper, true, usize::MAX)
            .with_class(Lower, true, 1);
        assert_eq!(spec.required(), usize::MAX);
        assert!(matches!(
            spec.validate(),
            Err(SynthesisError::MinimumsExceedLength { .. })
        ));
    }

    #[test]
    fn test_minimums_may_fill_whole_length() {
        let spec = ConstraintSpec::new(8)
            .with_class(Upper, true, 4)
            .with_class(Digit, true, 4);
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn test_all_disabled_is_no_class_selected() {
        let spec = ConstraintSpec::new(8)
            .with_class(Upper, false, 0)
            .with_class(Lower, false, 0)
            .with_class(Digit, false, 0)
            .with_class(Symbol, false, 0);
        assert_eq!(spec.validate(), Err(SynthesisError::NoClassSelected));
    }

    #[test]
    fn test_no_class_selected_wins_over_other_failures() {
        let spec = ConstraintSpec::new(8)
            .with_class(Upper, false, 5)
            .with_class(Lower, false, 5)
            .with_class(Digit, false, 0)
            .with_class(Symbol, false, 0);
        assert_eq!(spec.validate(), Err(SynthesisError::NoClassSelected));
    }

    #[test]
    fn test_exceed_length_wins_over_minimum_without_class() {
        let spec = ConstraintSpec::new(8)
            .with_class(Upper, false, 5)
            .with_class(Lower, true, 5);
        assert_eq!(
            spec.validate(),
            Err(SynthesisError::MinimumsExceedLength {
                required: 10,
                length: 8
            })
        );
    }

    #[rstest]
    #[case(Upper)]
    #[case(Lower)]
    #[case(Digit)]
    #[case(Symbol)]
    fn test_minimum_on_disabled_class(#[case] class: CharacterClass) {
        let spec = ConstraintSpec::new(8).with_class(class, false, 1);
        assert_eq!(
            spec.validate(),
            Err(SynthesisError::MinimumWithoutClass { class, minimum: 1 })
        );
    }

    #[test]
    fn test_minimum_without_class_reports_first_in_canonical_order() {
        let spec = ConstraintSpec::new(8)
            .with_class(Symbol, false, 1)
            .with_class(Lower, false, 2);
        assert_eq!(
            spec.validate(),
            Err(SynthesisError::MinimumWithoutClass {
                class: Lower,
                minimum: 2
            })
        );
    }
}
