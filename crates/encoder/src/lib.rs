//! # fastcall-encoder
//!
//! Hand-rolled ABI calldata encoder for the Multicall2
//! `tryAggregate(bool,(address,bytes)[])` call shape.
//!
//! Produces output byte-identical to a generic ABI encoder for this one call
//! shape, without generic type dispatch. The selector is a caller-supplied
//! input; [`TRY_AGGREGATE_SELECTOR`] is exported for the common case.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

mod try_aggregate;
pub use try_aggregate::{
    encode, encode_raw, Call, ARG_HEAD_WORDS, CALLS_OFFSET, TRY_AGGREGATE_SELECTOR,
    TUPLE_DATA_OFFSET, TUPLE_FIXED_WORDS, TUPLE_HEAD_WORDS, WORD,
};

/// Errors that can occur while laying out calldata.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// A `bytes` payload is so large that padding it to a word boundary, or
    /// accounting for it in the running tail offset, overflowed `usize`.
    ///
    /// Not reachable for payloads that fit in memory; defined so pathological
    /// lengths fail cleanly instead of wrapping.
    #[error("bytes payload of {len} bytes overflows the encoded layout")]
    PayloadTooLarge {
        /// Length of the offending payload.
        len: usize,
    },
}
