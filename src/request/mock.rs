//! Scriptable in-memory control request for host tests.
//!
//! Simulates the dispatch layer's side of the seam: scripted input
//! bytes, a fixed-capacity output region, injectable buffer-acquisition
//! failures, and a record of every completion received (so tests can
//! assert the exactly-once completion contract).

use super::{Completion, ControlRequest, RequestError};
use crate::ioctl::ControlCode;

/// Mock control request backed by plain memory.
pub struct MockRequest {
    code: ControlCode,
    input: Vec<u8>,
    output: Vec<u8>,
    fail_input: bool,
    fail_output: bool,
    completions: Vec<Completion>,
}

impl MockRequest {
    /// Build a request carrying `code`, the given input bytes, and an
    /// output region of `output_len` zeroed bytes.
    pub fn new(code: ControlCode, input: &[u8], output_len: usize) -> Self {
        Self {
            code,
            input: input.to_vec(),
            output: vec![0; output_len],
            fail_input: false,
            fail_output: false,
            completions: Vec::new(),
        }
    }

    /// Make input-region acquisition fail.
    pub fn with_failing_input(mut self) -> Self {
        self.fail_input = true;
        self
    }

    /// Make output-region acquisition fail.
    pub fn with_failing_output(mut self) -> Self {
        self.fail_output = true;
        self
    }

    /// The recorded completion.
    ///
    /// Panics unless the request was completed exactly once.
    pub fn completion(&self) -> Completion {
        assert_eq!(
            self.completions.len(),
            1,
            "request was completed {} times",
            self.completions.len()
        );
        self.completions[0]
    }

    /// The output region as the dispatch layer would observe it.
    pub fn output(&self) -> &[u8] {
        &self.output
    }
}

impl ControlRequest for MockRequest {
    fn control_code(&self) -> ControlCode {
        self.code
    }

    fn input_len(&self) -> usize {
        self.input.len()
    }

    fn output_len(&self) -> usize {
        self.output.len()
    }

    fn retrieve_input(&self, min_len: usize) -> Result<&[u8], RequestError> {
        if self.fail_input || self.input.len() < min_len {
            return Err(RequestError::InputUnavailable);
        }
        Ok(&self.input)
    }

    fn retrieve_output(&mut self, min_len: usize) -> Result<&mut [u8], RequestError> {
        if self.fail_output || self.output.len() < min_len {
            return Err(RequestError::OutputUnavailable);
        }
        Ok(&mut self.output)
    }

    fn complete(&mut self, completion: Completion) {
        self.completions.push(completion);
    }
}
