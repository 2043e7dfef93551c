use num_bigint::BigUint;
use num_traits::Zero;

use bytedec_corelib::{check_bitwidth, compute_digit_sums, propagate_carries, OverflowEvent};

#[test]
fn eight_bit_carry_is_clean() {
    let report = check_bitwidth(8).unwrap();
    assert_eq!(report.digit_width, 3);
    assert_eq!(report.accumulated, vec![1, 12, 35]);
    assert_eq!(report.carried, vec![2, 5, 5]);
    assert!(report.feasible());
}

#[test]
fn carrying_preserves_the_total() {
    // After the carry pass the digits spell out 2^bitwidth - 1.
    for bitwidth in [2u32, 4, 8, 16, 32] {
        let mut digits = compute_digit_sums(bitwidth).unwrap();
        propagate_carries(&mut digits);
        let value = digits
            .iter()
            .fold(BigUint::zero(), |acc, &d| acc * 10u32 + d);
        let expected = (BigUint::from(1u8) << bitwidth) - BigUint::from(1u8);
        assert_eq!(value, expected, "bitwidth {bitwidth}");
    }
}

#[test]
fn sixty_four_bit_columns_overflow() {
    let report = check_bitwidth(64).unwrap();
    assert!(!report.feasible());
    assert!(report.events.contains(&OverflowEvent::BeforeCarry {
        position: 19,
        value: 315,
    }));
}

#[test]
fn carry_overflow_is_position_tagged() {
    let mut digits = vec![0u64, 2600];
    let events = propagate_carries(&mut digits);
    assert_eq!(digits, vec![260, 0]);
    assert_eq!(
        events,
        vec![
            OverflowEvent::BeforeCarry {
                position: 1,
                value: 2600,
            },
            OverflowEvent::DuringCarry {
                position: 1,
                value: 260,
            },
        ]
    );
}

#[test]
fn index_zero_never_carries_out() {
    // A huge most-significant digit stays put; nothing propagates past it.
    let mut digits = vec![9999u64, 3];
    propagate_carries(&mut digits);
    assert_eq!(digits, vec![9999, 3]);
}

#[test]
fn reports_are_deterministic() {
    assert_eq!(check_bitwidth(64).unwrap(), check_bitwidth(64).unwrap());
}
