//! Symbol pools for random candidate generation
//!
//! Pool contents are part of the crate's external interface: winning
//! postfix strings are emitted verbatim from these bytes, and the parser
//! must accept anything drawn from them.

/// Symbols that push one operand. The generator draws only `'1'` and
/// `'x'`; the parser additionally accepts `'0'` and the variable letters
/// `y z a b c`.
pub const NULLARY_POOL: [u8; 2] = [b'1', b'x'];

/// Single-operand operators: reciprocal, negate, +1, -1, cos, sin,
/// square, sqrt, log, halve. `'T'` (tan) is parseable but never drawn.
pub const UNARY_POOL: [u8; 10] = [
    b'\\', b'~', b'>', b'<', b'C', b'S', b'2', b'R', b'L', b'H',
];

/// Two-operand operators.
pub const BINARY_POOL: [u8; 4] = [b'+', b'-', b'/', b'*'];
