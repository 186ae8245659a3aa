//! Request Admission
//!
//! Size validation for incoming control requests. Admission runs before
//! either region is dereferenced; a rejected request never reaches the
//! translator.
//!
//! # Checks
//! 1. The input region must be non-empty (the translator reads one byte)
//! 2. The output region must hold a whole glyph (two bytes)

use crate::glyph::GLYPH_LEN;

/// Decide whether a request may proceed to translation.
///
/// # Arguments
/// * `input_len` - declared input-region size in bytes
/// * `output_len` - declared output-region size in bytes
///
/// # Returns
/// true when the request is admitted. A pure decision over the two
/// size fields; no buffer is touched and there are no side effects.
#[inline]
pub fn admit(input_len: usize, output_len: usize) -> bool {
    input_len != 0 && output_len >= GLYPH_LEN
}
