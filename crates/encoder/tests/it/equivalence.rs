//! Byte-for-byte equivalence with alloy's generic ABI encoder.

use crate::{batch_strategy, reference_encode, tryAggregateCall};
use alloy_primitives::{address, hex, Bytes};
use alloy_sol_types::SolCall;
use fastcall_encoder::{encode, encode_raw, Call, TRY_AGGREGATE_SELECTOR};
use proptest::prelude::*;

#[test]
fn selector_matches_signature() {
    assert_eq!(TRY_AGGREGATE_SELECTOR.0, tryAggregateCall::SELECTOR);
    assert_eq!(tryAggregateCall::SIGNATURE, "tryAggregate(bool,(address,bytes)[])");
}

#[test]
fn matches_reference_on_fixed_batches() {
    let batches: &[Vec<Call>] = &[
        vec![],
        vec![Call::new(address!("dAC17F958D2ee523a2206206994597C13D831ec7"), Bytes::new())],
        vec![
            Call::new(
                address!("dAC17F958D2ee523a2206206994597C13D831ec7"),
                // balanceOf(address)
                hex!("70a08231000000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
                    .to_vec(),
            ),
            Call::new(address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), vec![0x31; 33]),
            Call::new(address!("0000000000000000000000000000000000000000"), vec![0x12, 0x34]),
        ],
    ];
    for (require_success, calls) in
        batches.iter().flat_map(|calls| [(true, calls), (false, calls)])
    {
        let manual = encode_raw(TRY_AGGREGATE_SELECTOR, require_success, calls).unwrap();
        assert_eq!(&manual[..], &reference_encode(require_success, calls)[..]);
    }
}

#[test]
fn hex_form_matches_reference() {
    let calls =
        vec![Call::new(address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), vec![0x12, 0x34])];
    let manual = encode(TRY_AGGREGATE_SELECTOR, true, &calls).unwrap();
    assert_eq!(manual, hex::encode_prefixed(reference_encode(true, &calls)));
}

proptest! {
    #[test]
    fn matches_reference(require_success: bool, calls in batch_strategy()) {
        let manual = encode_raw(TRY_AGGREGATE_SELECTOR, require_success, &calls).unwrap();
        prop_assert_eq!(&manual[..], &reference_encode(require_success, &calls)[..]);
    }
}
