//! The valuation panel: one active method, its inputs and last result.

use valuescope_valuation::{
    Result, Valuation, ValuationInput, ValuationMethod, ValuationResult,
};

/// Inputs and result of the active valuation method.
///
/// Exactly one method is active. Switching methods yields a fresh panel, so
/// the previous method's inputs and result are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationPanel {
    input: ValuationInput,
    result: Option<ValuationResult>,
}

impl ValuationPanel {
    /// Panel for `method` with every input at its default.
    pub fn new(method: ValuationMethod) -> Self {
        Self {
            input: ValuationInput::with_defaults(method),
            result: None,
        }
    }

    /// Active method.
    pub fn method(&self) -> ValuationMethod {
        self.input.method()
    }

    /// Switch to `method`, discarding the current inputs and result.
    #[must_use]
    pub fn switch(self, method: ValuationMethod) -> Self {
        Self::new(method)
    }

    /// Current inputs.
    pub const fn input(&self) -> &ValuationInput {
        &self.input
    }

    /// Last computed result, cleared whenever an input changes.
    pub const fn result(&self) -> Option<&ValuationResult> {
        self.result.as_ref()
    }

    /// Set one input of the active method.
    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        self.input.set(key, value)?;
        self.result = None;
        Ok(())
    }

    /// Validate and evaluate the current inputs.
    ///
    /// On failure the previous result is cleared and nothing is computed.
    pub fn compute(&mut self) -> Result<ValuationResult> {
        self.result = None;
        let result = self.input.evaluate()?;
        self.result = Some(result);
        Ok(result)
    }
}

impl Default for ValuationPanel {
    fn default() -> Self {
        Self::new(ValuationMethod::GordonGrowth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuescope_valuation::ValuationError;

    #[test]
    fn test_compute_ggm() {
        let mut panel = ValuationPanel::default();
        panel.set("dividend", 10.0).unwrap();
        panel.set("growth_rate", 5.0).unwrap();
        panel.set("required_rate", 10.0).unwrap();

        let result = panel.compute().unwrap();
        assert!((result.value - 200.0).abs() < 1e-9);
        assert_eq!(panel.result(), Some(&result));
    }

    #[test]
    fn test_set_clears_result() {
        let mut panel = ValuationPanel::new(ValuationMethod::PegRatio);
        panel.set("pe_ratio", 15.0).unwrap();
        panel.set("growth_rate", 10.0).unwrap();
        panel.compute().unwrap();

        panel.set("growth_rate", 20.0).unwrap();
        assert!(panel.result().is_none());
    }

    #[test]
    fn test_switch_discards_inputs_and_result() {
        let mut panel = ValuationPanel::new(ValuationMethod::PegRatio);
        panel.set("pe_ratio", 15.0).unwrap();
        panel.set("growth_rate", 10.0).unwrap();
        panel.compute().unwrap();

        let panel = panel.switch(ValuationMethod::DiscountedCashFlow).switch(ValuationMethod::PegRatio);
        assert!(panel.result().is_none());
        assert_eq!(panel.input().get("pe_ratio"), Some(0.0));
    }

    #[test]
    fn test_failed_compute_clears_result() {
        let mut panel = ValuationPanel::default();
        panel.set("dividend", 10.0).unwrap();
        panel.compute().unwrap();

        panel.set("growth_rate", 10.0).unwrap();
        let err = panel.compute().unwrap_err();
        assert!(matches!(err, ValuationError::InvalidInput(_)));
        assert!(panel.result().is_none());
    }
}
