//! Pair Engine Property Tests
//!
//! Properties that must hold for every reserve configuration: quotes never
//! demand more input than was supplied, swaps never shrink the constant
//! product, and canonical ordering does not depend on argument order.

use num_bigint::BigInt;
use pair_amm::{Pair, PairAddressCache, PairAddressResolver, PoolError};
use pair_config::{EngineConfig, SwapFee};
use pair_types::{Address, AssetAmount, ChainId, Token};
use proptest::prelude::*;
use std::sync::Arc;

fn token(byte: u8) -> Token {
    let mut bytes = [0u8; 20];
    bytes[19] = byte;
    bytes[0] = byte.wrapping_mul(31);
    Token::new(ChainId::BSC_MAINNET, Address::new(bytes), 18, None, None)
}

fn pair(reserve0: u128, reserve1: u128, fee: SwapFee) -> Pair {
    Pair::from_parts(
        AssetAmount::new(token(1), reserve0).unwrap(),
        AssetAmount::new(token(2), reserve1).unwrap(),
        Address::new([0xaa; 20]),
        fee,
    )
    .unwrap()
}

fn product(pair: &Pair) -> BigInt {
    pair.reserve0().raw() * pair.reserve1().raw()
}

/// Whether the exact-input quote for `input` of token0 had no remainder
fn exact_quote(pair: &Pair, input: &AssetAmount) -> bool {
    let fee = pair.fee();
    let with_fee = input.raw() * BigInt::from(fee.numerator());
    let numerator = &with_fee * pair.reserve1().raw();
    let denominator = pair.reserve0().raw() * BigInt::from(fee.denominator()) + &with_fee;
    (numerator % denominator) == BigInt::from(0)
}

#[test]
fn exact_division_requires_one_extra_unit() {
    let pair = pair(997, 1_000, SwapFee::default());
    let input = AssetAmount::new(token(1), 1_000u64).unwrap();
    let (output, _) = pair.get_output_amount(&input).unwrap();
    assert_eq!(output.raw(), &BigInt::from(500));
    assert!(exact_quote(&pair, &input));

    let (required, _) = pair.get_input_amount(&output).unwrap();
    assert_eq!(required.raw(), &BigInt::from(1_001));
}

/// Reserves from dust up to 1e30 raw units
fn valid_reserves() -> impl Strategy<Value = u128> {
    1u128..1_000_000_000_000_000_000_000_000_000_000u128
}

fn valid_fee() -> impl Strategy<Value = SwapFee> {
    prop_oneof![
        Just(SwapFee::default()),
        Just(SwapFee::new(998, 1_000).unwrap()),
        Just(SwapFee::new(9_975, 10_000).unwrap()),
    ]
}

fn address_bytes() -> impl Strategy<Value = [u8; 20]> {
    prop::array::uniform20(any::<u8>())
}

proptest! {
    /// Property: re-quoting the output never needs more than the original input
    #[test]
    fn input_for_quoted_output_never_exceeds_input(
        reserve0 in valid_reserves(),
        reserve1 in valid_reserves(),
        amount_in in valid_reserves(),
        fee in valid_fee(),
    ) {
        let pair = pair(reserve0, reserve1, fee);
        let input = AssetAmount::new(token(1), amount_in).unwrap();

        match pair.get_output_amount(&input) {
            Ok((output, _)) => {
                let (required, _) = pair.get_input_amount(&output).unwrap();
                if exact_quote(&pair, &input) {
                    // the +1 overshoots only when the quote divided exactly
                    prop_assert_eq!(required.raw(), &(input.raw() + 1u32));
                } else {
                    prop_assert!(required.raw() <= input.raw(),
                        "required {} exceeds supplied {}", required.raw(), input.raw());
                }
                let (requoted, _) = pair.get_output_amount(&required).unwrap();
                prop_assert!(requoted.raw() >= output.raw());
            }
            Err(PoolError::InsufficientInputAmount) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Property: an exact-input swap never decreases reserve0 * reserve1
    #[test]
    fn exact_input_swap_preserves_constant_product(
        reserve0 in valid_reserves(),
        reserve1 in valid_reserves(),
        amount_in in valid_reserves(),
        zero_for_one in any::<bool>(),
        fee in valid_fee(),
    ) {
        let pair = pair(reserve0, reserve1, fee);
        let input_token = if zero_for_one { token(1) } else { token(2) };
        let input = AssetAmount::new(input_token, amount_in).unwrap();

        if let Ok((_, next)) = pair.get_output_amount(&input) {
            prop_assert!(product(&next) >= product(&pair));
        }
    }

    /// Property: an exact-output swap never decreases reserve0 * reserve1
    #[test]
    fn exact_output_swap_preserves_constant_product(
        reserve0 in valid_reserves(),
        reserve1 in valid_reserves(),
        amount_out in valid_reserves(),
        fee in valid_fee(),
    ) {
        let pair = pair(reserve0, reserve1, fee);
        let output = AssetAmount::new(token(2), amount_out).unwrap();

        match pair.get_input_amount(&output) {
            Ok((_, next)) => prop_assert!(product(&next) >= product(&pair)),
            Err(PoolError::InsufficientReserves) => prop_assert!(amount_out >= reserve1),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Property: argument order never changes the canonical pair or its address
    #[test]
    fn pair_construction_is_order_independent(
        bytes_a in address_bytes(),
        bytes_b in address_bytes(),
        reserve_a in valid_reserves(),
        reserve_b in valid_reserves(),
    ) {
        prop_assume!(bytes_a != bytes_b);
        let resolver = PairAddressResolver::with_cache(
            &EngineConfig::builtin().unwrap(),
            Arc::new(PairAddressCache::new()),
        );
        let token_a = Token::new(ChainId::BSC_MAINNET, Address::new(bytes_a), 18, None, None);
        let token_b = Token::new(ChainId::BSC_MAINNET, Address::new(bytes_b), 18, None, None);
        let amount_a = AssetAmount::new(token_a.clone(), reserve_a).unwrap();
        let amount_b = AssetAmount::new(token_b.clone(), reserve_b).unwrap();

        let forward = Pair::new(amount_a.clone(), amount_b.clone(), &resolver).unwrap();
        let backward = Pair::new(amount_b, amount_a, &resolver).unwrap();

        prop_assert_eq!(forward.token0(), backward.token0());
        prop_assert_eq!(forward.token1(), backward.token1());
        prop_assert_eq!(forward.address(), backward.address());
        prop_assert_eq!(&forward, &backward);
    }

    /// Property: sorts_before is a strict total order on same-chain tokens
    #[test]
    fn sorts_before_is_strict_total_order(
        a in address_bytes(),
        b in address_bytes(),
        c in address_bytes(),
    ) {
        let make = |bytes| Token::new(ChainId::BSC_MAINNET, Address::new(bytes), 18, None, None);
        let (ta, tb, tc) = (make(a), make(b), make(c));

        // irreflexive: a token never sorts against itself
        prop_assert!(ta.sorts_before(&ta).is_err());

        if a != b {
            let ab = ta.sorts_before(&tb).unwrap();
            let ba = tb.sorts_before(&ta).unwrap();
            prop_assert!(ab != ba, "exactly one direction must hold");
        }

        if a != b && b != c && a != c
            && ta.sorts_before(&tb).unwrap()
            && tb.sorts_before(&tc).unwrap()
        {
            prop_assert!(ta.sorts_before(&tc).unwrap());
        }
    }

    /// Property: tokens on different chains never order
    #[test]
    fn cross_chain_ordering_fails(
        a in address_bytes(),
        b in address_bytes(),
        chain in 1u64..10_000,
    ) {
        prop_assume!(chain != ChainId::BSC_MAINNET.value());
        let left = Token::new(ChainId::BSC_MAINNET, Address::new(a), 18, None, None);
        let right = Token::new(ChainId(chain), Address::new(b), 18, None, None);
        prop_assert!(
            matches!(
                left.sorts_before(&right),
                Err(pair_types::AssetError::ChainMismatch { .. })
            ),
            "cross-chain comparison must fail with ChainMismatch"
        );
    }
}
