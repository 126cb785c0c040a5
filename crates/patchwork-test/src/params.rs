//! Regression test parameters and checks

use std::collections::BTreeSet;

/// Regression test parameters
///
/// Tracks the test name, the index of the last check, and every recorded
/// failure. Checks never panic; the test asserts on [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "patches")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs an `env_logger` test logger so library logs show up
    /// when `RUST_LOG` is set.
    pub fn new(test_name: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
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
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two partitions of offsets, ignoring the order of the parts
    ///
    /// # Returns
    ///
    /// `true` if both hold exactly the same sets, `false` otherwise.
    pub fn compare_partitions(
        &mut self,
        expected: &[BTreeSet<usize>],
        actual: &[BTreeSet<usize>],
    ) -> bool {
        self.index += 1;

        let mut lhs: Vec<&BTreeSet<usize>> = expected.iter().collect();
        let mut rhs: Vec<&BTreeSet<usize>> = actual.iter().collect();
        lhs.sort();
        rhs.sort();

        if lhs != rhs {
            let msg = format!(
                "Failure in {}_reg: partition comparison for index {}\n\
                 expected {} parts {:?}\n\
                 actual {} parts {:?}",
                self.test_name,
                self.index,
                lhs.len(),
                lhs,
                rhs.len(),
                rhs
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two byte buffers for exact equality
    pub fn compare_bytes(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let first_diff = data1
                .iter()
                .zip(data2)
                .position(|(a, b)| a != b)
                .unwrap_or(data1.len().min(data2.len()));
            let msg = format!(
                "Failure in {}_reg: byte comparison for index {}\n\
                 sizes: {} vs {}, first difference at {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                first_diff
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
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

    /// Check if all checks have passed so far
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
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_partitions_ignores_order() {
        let mut rp = RegParams::new("test");
        let a: BTreeSet<usize> = [0, 4].into_iter().collect();
        let b: BTreeSet<usize> = [12].into_iter().collect();
        assert!(rp.compare_partitions(&[a.clone(), b.clone()], &[b.clone(), a.clone()]));
        assert!(!rp.compare_partitions(&[a.clone(), b.clone()], &[a]));
        assert_eq!(rp.index(), 2);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_bytes() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_bytes(&[1, 2, 3], &[1, 2, 3]));
        assert!(!rp.compare_bytes(&[1, 2, 3], &[1, 9, 3]));
    }
}
