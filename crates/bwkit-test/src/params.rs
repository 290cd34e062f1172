//! Regression test parameters and operations

use bwkit_core::NdArray;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Comparisons never
/// panic; failures are recorded and reported by [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "bwlabel")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
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
    /// * `test_name` - Name of the test (e.g., "bwlabel")
    pub fn new(test_name: &str) -> Self {
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

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value (typically from a fixture)
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // Equal infinities have a NaN difference.
        if expected != actual && !(diff <= delta) {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two arrays element-wise within `delta`
    ///
    /// Shapes must match exactly; the first differing element is reported.
    pub fn compare_arrays<A, B>(
        &mut self,
        expected: &NdArray<A>,
        actual: &NdArray<B>,
        delta: f64,
    ) -> bool
    where
        A: Copy + Into<f64>,
        B: Copy + Into<f64>,
    {
        self.index += 1;

        if expected.dims() != actual.dims() {
            let msg = format!(
                "Failure in {}_reg: array comparison for index {} - shape {} vs {}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            );
            return self.fail(msg);
        }

        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(&e, &a)| {
                let (e, a): (f64, f64) = (e.into(), a.into());
                e != a && !((e - a).abs() <= delta)
            });

        match mismatch {
            Some(idx) => {
                let coords = expected.shape().coords_of(idx);
                let e: f64 = expected.data()[idx].into();
                let a: f64 = actual.data()[idx].into();
                let msg = format!(
                    "Failure in {}_reg: array comparison for index {} - \
                     element {:?}: expected {}, actual {}, allowed delta {}",
                    self.test_name, self.index, coords, e, a, delta
                );
                self.fail(msg)
            }
            None => true,
        }
    }

    /// Compare two label images for exact equality
    pub fn compare_labels(&mut self, expected: &NdArray<u32>, actual: &NdArray<u32>) -> bool {
        self.index += 1;

        if expected.dims() != actual.dims() {
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - shape {} vs {}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            );
            return self.fail(msg);
        }

        match expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(e, a)| e != a)
        {
            Some(idx) => {
                let msg = format!(
                    "Failure in {}_reg: label comparison for index {} - \
                     element {:?}: expected {}, actual {}",
                    self.test_name,
                    self.index,
                    expected.shape().coords_of(idx),
                    expected.data()[idx],
                    actual.data()[idx]
                );
                self.fail(msg)
            }
            None => true,
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
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
