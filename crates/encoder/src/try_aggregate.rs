//! Calldata layout for `tryAggregate(bool,(address,bytes)[])`.
//!
//! The ABI head/tail algorithm is specialized to this shape: both `0x40`
//! offsets are fixed by the shape (one static word before each dynamic
//! value), so the only bookkeeping left is the running tail offset across
//! the calls array.

use crate::EncodingError;
use alloy_primitives::{hex, Address, Bytes, Selector, U256};

/// Size of an ABI word in bytes.
pub const WORD: usize = 32;

/// Argument head words of the call: the `bool` word and the offset word
/// pointing at the calls array.
pub const ARG_HEAD_WORDS: usize = 2;

/// Byte offset from the start of the arguments region to the calls array
/// encoding. Fixed because the only argument before the array is static.
pub const CALLS_OFFSET: usize = ARG_HEAD_WORDS * WORD;

/// Head words of one `(address,bytes)` tuple: the address word and the
/// offset word pointing at the `bytes` payload.
pub const TUPLE_HEAD_WORDS: usize = 2;

/// Byte offset from the start of a tuple encoding to its `bytes` payload.
/// Fixed because the only tuple field before `bytes` is static.
pub const TUPLE_DATA_OFFSET: usize = TUPLE_HEAD_WORDS * WORD;

/// Fixed words per tuple encoding: address, payload offset, payload length.
pub const TUPLE_FIXED_WORDS: usize = 3;

/// Selector of `tryAggregate(bool,(address,bytes)[])`.
pub const TRY_AGGREGATE_SELECTOR: Selector = Selector::new([0xbc, 0xe3, 0x8b, 0xd7]);

/// A single `(target, callData)` element of the calls array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    /// Contract the multicall dispatches to.
    pub target: Address,
    /// Raw calldata forwarded to `target`.
    pub call_data: Bytes,
}

impl Call {
    /// Creates a new call.
    pub fn new(target: Address, call_data: impl Into<Bytes>) -> Self {
        Self { target, call_data: call_data.into() }
    }
}

/// Encodes a `tryAggregate` invocation, returning the raw calldata.
///
/// The output is byte-identical to a generic ABI encoder given the same
/// arguments. Whether `selector` matches the encoded shape is the caller's
/// responsibility; it is copied verbatim.
pub fn encode_raw(
    selector: Selector,
    require_success: bool,
    calls: &[Call],
) -> Result<Bytes, EncodingError> {
    let mut out = Vec::with_capacity(
        4 + (ARG_HEAD_WORDS + 1 + calls.len() * (1 + TUPLE_FIXED_WORDS)) * WORD,
    );

    out.extend_from_slice(selector.as_slice());

    // Argument heads: the bool word and the fixed offset to the array.
    out.extend_from_slice(&usize_word(require_success as usize));
    out.extend_from_slice(&usize_word(CALLS_OFFSET));

    // Array head: element count, then one tail offset per element, measured
    // from just past the count word. The accumulator starts past the offset
    // words themselves and grows by each preceding tuple's encoded size.
    out.extend_from_slice(&usize_word(calls.len()));
    // `calls` elements occupy more than WORD bytes each, so this cannot wrap.
    let mut offset = calls.len() * WORD;
    for call in calls {
        out.extend_from_slice(&usize_word(offset));
        let tuple_len = padded_len(call.call_data.len())
            .and_then(|padded| padded.checked_add(TUPLE_FIXED_WORDS * WORD))
            .ok_or(EncodingError::PayloadTooLarge { len: call.call_data.len() })?;
        offset = offset
            .checked_add(tuple_len)
            .ok_or(EncodingError::PayloadTooLarge { len: call.call_data.len() })?;
    }

    // Array tail: each tuple in element order.
    for call in calls {
        out.extend_from_slice(call.target.into_word().as_slice());
        out.extend_from_slice(&usize_word(TUPLE_DATA_OFFSET));
        out.extend_from_slice(&usize_word(call.call_data.len()));
        out.extend_from_slice(&call.call_data);
        let padding = (WORD - call.call_data.len() % WORD) % WORD;
        out.resize(out.len() + padding, 0);
    }

    trace!(calls = calls.len(), len = out.len(), "encoded tryAggregate calldata");
    Ok(out.into())
}

/// Encodes a `tryAggregate` invocation as a `0x`-prefixed lowercase hex
/// string, directly usable as a transaction `data` field.
pub fn encode(
    selector: Selector,
    require_success: bool,
    calls: &[Call],
) -> Result<String, EncodingError> {
    Ok(hex::encode_prefixed(encode_raw(selector, require_success, calls)?))
}

/// `len` rounded up to the next word boundary, or `None` on overflow.
const fn padded_len(len: usize) -> Option<usize> {
    match len.checked_add(WORD - 1) {
        Some(n) => Some(n / WORD * WORD),
        None => None,
    }
}

fn usize_word(value: usize) -> [u8; 32] {
    U256::from(value).to_be_bytes::<32>()
}
