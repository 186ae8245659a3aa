//! Device-Control Dispatch and Translation
//!
//! The per-request pipeline: match the control code, admit, translate,
//! complete. Every request resolves to exactly one terminal completion
//! on every reachable path; there is no retry state and no partial
//! progress.
//!
//! # Security Considerations
//! - Unknown control codes are rejected without touching either region
//! - Region sizes are validated before any data is read
//! - Collaborator faults complete as `Unsuccessful` and are never
//!   conflated with malformed caller data (`InvalidParameter`)
//! - No path panics; invalid input always becomes an error completion

use log::{debug, trace, warn};

use crate::glyph::{self, GLYPH_LEN};
use crate::ioctl::IOCTL_DIGIT_TO_GLYPH;
use crate::request::{Completion, CompletionStatus, ControlRequest};

use super::validate;

/// Run one control request through the pipeline and complete it.
///
/// # Arguments
/// * `request` - the pending operation, borrowed from the dispatch
///   layer for the duration of this call
///
/// # Returns
/// A copy of the completion issued to the request, for the caller's
/// bookkeeping.
pub fn dispatch<R: ControlRequest>(request: &mut R) -> Completion {
    let code = request.control_code();
    debug!(
        "control request: code={:#010x} input_len={} output_len={}",
        code.raw(),
        request.input_len(),
        request.output_len()
    );

    let completion = match code {
        IOCTL_DIGIT_TO_GLYPH => digit_to_glyph(request),
        _ => {
            warn!("unsupported control code {:#010x}", code.raw());
            Completion::error(CompletionStatus::UnsupportedOperation)
        }
    };

    request.complete(completion);
    completion
}

/// Translate the first input byte into its ideographic numeral glyph.
///
/// Steps:
/// 1. Admission: size validation, before any region is dereferenced
/// 2. Acquire the input region and classify its first byte
/// 3. Acquire the output region
/// 4. Copy the glyph's two little-endian bytes and report Success(2)
fn digit_to_glyph<R: ControlRequest>(request: &mut R) -> Completion {
    if !validate::admit(request.input_len(), request.output_len()) {
        warn!(
            "rejecting request: input_len={} output_len={} (need >=1 and >={})",
            request.input_len(),
            request.output_len(),
            GLYPH_LEN
        );
        return Completion::error(CompletionStatus::InvalidParameter);
    }

    let byte = match request.retrieve_input(1) {
        Ok(&[byte, ..]) => byte,
        Ok(_) => {
            warn!("input region shorter than requested");
            return Completion::error(CompletionStatus::Unsuccessful);
        }
        Err(err) => {
            warn!("{}", err);
            return Completion::error(CompletionStatus::Unsuccessful);
        }
    };

    let glyph = match glyph::for_digit(byte) {
        Some(glyph) => glyph,
        None => {
            warn!("input byte {:#04x} is not an ASCII digit", byte);
            return Completion::error(CompletionStatus::InvalidParameter);
        }
    };

    let output = match request.retrieve_output(GLYPH_LEN) {
        Ok(output) if output.len() >= GLYPH_LEN => output,
        Ok(_) => {
            warn!("output region shorter than requested");
            return Completion::error(CompletionStatus::Unsuccessful);
        }
        Err(err) => {
            warn!("{}", err);
            return Completion::error(CompletionStatus::Unsuccessful);
        }
    };

    output[..GLYPH_LEN].copy_from_slice(&glyph.to_le_bytes());
    trace!(
        "translated {:#04x} to U+{:04X}",
        byte,
        glyph.code_unit()
    );
    Completion::success(GLYPH_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GLYPHS;
    use crate::ioctl::{Access, ControlCode, TransferMethod, DEVICE_UNKNOWN};
    use crate::request::mock::MockRequest;

    fn digit_request(input: &[u8], output_len: usize) -> MockRequest {
        MockRequest::new(IOCTL_DIGIT_TO_GLYPH, input, output_len)
    }

    #[test]
    fn every_digit_translates_to_its_table_entry() {
        for digit in b'0'..=b'9' {
            let mut request = digit_request(&[digit], 2);
            let completion = dispatch(&mut request);

            assert_eq!(completion.status(), CompletionStatus::Success);
            assert_eq!(completion.bytes_written(), 2);
            let expected = GLYPHS[(digit - b'0') as usize].to_le_bytes();
            assert_eq!(request.output(), &expected);
        }
    }

    #[test]
    fn three_yields_the_fourth_table_entry() {
        let mut request = digit_request(b"3", 2);
        dispatch(&mut request);
        assert_eq!(request.output(), &GLYPHS[3].to_le_bytes());
    }

    #[test]
    fn nine_yields_the_last_table_entry() {
        let mut request = digit_request(b"9", 2);
        dispatch(&mut request);
        assert_eq!(request.output(), &GLYPHS[9].to_le_bytes());
    }

    #[test]
    fn non_digit_bytes_are_invalid_parameters() {
        for byte in [b'A', b' ', b':', b'/', 0x00, 0x80, 0xFF] {
            let mut request = digit_request(&[byte], 2);
            let completion = dispatch(&mut request);

            assert_eq!(completion.status(), CompletionStatus::InvalidParameter);
            assert_eq!(completion.bytes_written(), 0);
            assert_eq!(request.output(), &[0, 0]);
        }
    }

    #[test]
    fn only_the_first_input_byte_is_read() {
        let mut request = digit_request(b"7 trailing garbage", 2);
        let completion = dispatch(&mut request);

        assert_eq!(completion.status(), CompletionStatus::Success);
        assert_eq!(request.output(), &GLYPHS[7].to_le_bytes());
    }

    #[test]
    fn empty_input_is_rejected_before_translation() {
        let mut request = digit_request(&[], 2);
        let completion = dispatch(&mut request);

        assert_eq!(completion.status(), CompletionStatus::InvalidParameter);
        assert_eq!(completion.bytes_written(), 0);
    }

    #[test]
    fn short_output_is_rejected_before_translation() {
        for output_len in [0, 1] {
            let mut request = digit_request(b"5", output_len);
            let completion = dispatch(&mut request);

            assert_eq!(completion.status(), CompletionStatus::InvalidParameter);
            assert_eq!(completion.bytes_written(), 0);
        }
    }

    #[test]
    fn unknown_control_codes_are_unsupported() {
        let other = ControlCode::new(
            DEVICE_UNKNOWN,
            Access::empty(),
            0x801,
            TransferMethod::Buffered,
        );
        let mut request = MockRequest::new(other, b"3", 2);
        let completion = dispatch(&mut request);

        assert_eq!(completion.status(), CompletionStatus::UnsupportedOperation);
        assert_eq!(completion.bytes_written(), 0);
        assert_eq!(request.output(), &[0, 0]);
    }

    #[test]
    fn input_acquisition_failure_is_unsuccessful() {
        let mut request = digit_request(b"3", 2).with_failing_input();
        let completion = dispatch(&mut request);

        assert_eq!(completion.status(), CompletionStatus::Unsuccessful);
        assert_eq!(completion.bytes_written(), 0);
    }

    #[test]
    fn output_acquisition_failure_is_unsuccessful() {
        // Sizes and input are valid, so the failure cannot be blamed on
        // the caller's parameters
        let mut request = digit_request(b"3", 2).with_failing_output();
        let completion = dispatch(&mut request);

        assert_eq!(completion.status(), CompletionStatus::Unsuccessful);
        assert_eq!(completion.bytes_written(), 0);
    }

    #[test]
    fn every_path_completes_exactly_once() {
        let mut success = digit_request(b"0", 2);
        let mut bad_byte = digit_request(b"x", 2);
        let mut bad_sizes = digit_request(&[], 0);
        let mut bad_input = digit_request(b"0", 2).with_failing_input();
        let mut bad_output = digit_request(b"0", 2).with_failing_output();
        let mut bad_code = MockRequest::new(ControlCode::from_raw(0), b"0", 2);

        for request in [
            &mut success,
            &mut bad_byte,
            &mut bad_sizes,
            &mut bad_input,
            &mut bad_output,
            &mut bad_code,
        ] {
            let returned = dispatch(request);
            // completion() asserts the exactly-once contract and the
            // returned copy matches what the request observed
            assert_eq!(request.completion(), returned);
        }
    }

    #[test]
    fn translation_is_idempotent_across_identical_requests() {
        let mut first = digit_request(b"8", 2);
        let mut second = digit_request(b"8", 2);

        assert_eq!(dispatch(&mut first), dispatch(&mut second));
        assert_eq!(first.output(), second.output());
        assert_eq!(first.output(), &GLYPHS[8].to_le_bytes());
    }

    #[test]
    fn oversized_output_gets_exactly_two_bytes() {
        let mut request = digit_request(b"1", 8);
        let completion = dispatch(&mut request);

        assert_eq!(completion.bytes_written(), 2);
        assert_eq!(&request.output()[..2], &GLYPHS[1].to_le_bytes());
        // Bytes past the payload stay untouched
        assert_eq!(&request.output()[2..], &[0; 6]);
    }
}
