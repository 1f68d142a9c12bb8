//! Regression test parameters and operations

use colorsig_core::PackedColor;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values, report failures (default)
    #[default]
    Compare,
    /// Compare values and print each comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "ciede2000")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "ciede2000")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance configured based on the `REGTEST_MODE`
    /// environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected (reference) value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise. A NaN on
    /// either side never matches.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if self.display() {
            eprintln!(
                "{}_reg [{}]: expected = {}, actual = {}",
                self.test_name, self.index, expected, actual
            );
        }

        if !(diff <= delta) {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two value sequences element by element
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected descriptor values
    /// * `actual` - Actual descriptor values
    /// * `delta` - Maximum allowed difference per element
    ///
    /// # Returns
    ///
    /// `true` if the lengths are equal and every element is within delta,
    /// `false` otherwise.
    pub fn compare_descriptors(&mut self, expected: &[f64], actual: &[f64], delta: f64) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            self.fail(format!(
                "Failure in {}_reg: descriptor comparison for index {} - length {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            ));
            return false;
        }

        for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
            if !((e - a).abs() <= delta) {
                self.fail(format!(
                    "Failure in {}_reg: descriptor comparison for index {} - \
                     element {}: expected = {}, actual = {}, allowed delta = {}",
                    self.test_name, self.index, i, e, a, delta
                ));
                return false;
            }
        }

        true
    }

    /// Compare two packed colors for equality
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected color
    /// * `actual` - Actual color
    ///
    /// # Returns
    ///
    /// `true` if the colors are identical, `false` otherwise.
    pub fn compare_colors(&mut self, expected: PackedColor, actual: PackedColor) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "Failure in {}_reg: color comparison for index {} - expected {}, actual {}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_descriptors() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_descriptors(&[1.0, 2.0], &[1.0, 2.05], 0.1));
        assert!(!rp.compare_descriptors(&[1.0, 2.0], &[1.0], 0.1));
        assert!(!rp.compare_descriptors(&[1.0, 2.0], &[1.0, 3.0], 0.1));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_colors() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_colors(PackedColor::WHITE, PackedColor::from_rgb(255, 255, 255)));
        assert!(!rp.compare_colors(PackedColor::WHITE, PackedColor::BLACK));
        assert!(!rp.cleanup());
    }
}
