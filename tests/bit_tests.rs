//! Tests for bitwise logic, shifts and bit queries

use uint4::U4;

// ==================== Bitwise Logic ====================

#[test]
fn test_bitwise_and() {
    assert_eq!(U4::new(0b0101) & U4::new(0b1101), 0b0101);

    let mut a = U4::new(0b1101);
    a &= U4::new(0b1001);
    assert_eq!(a, 0b1001);
}

#[test]
fn test_bitwise_or() {
    assert_eq!(U4::new(0b0101) | U4::new(0b1101), 0b1101);
    assert_eq!(U4::new(0b1111) | U4::new(0b0100), 0b1111);

    let mut c = U4::new(0b0101);
    c |= U4::new(0b1101);
    assert_eq!(c, 0b1101);
}

#[test]
fn test_bitwise_xor() {
    assert_eq!(U4::new(0b0101) ^ U4::new(0b1101), 0b1000);
    assert_eq!(U4::new(0b1111) ^ U4::new(0b0100), 0b1011);

    let mut c = U4::new(0b1111);
    c ^= U4::new(0b0100);
    assert_eq!(c, 0b1011);
}

#[test]
fn test_bitwise_with_u8() {
    assert_eq!(U4::new(0b1010) & 0xffu8, 0b1010);
    assert_eq!(0xf0u8 | U4::new(0b0011), 0xf3u8);
}

// ==================== Shifts ====================

#[test]
fn test_shift_right() {
    let a = U4::new(0b0110);
    assert_eq!(a >> 2, 0b0001);
    assert_eq!(a >> -1, 0b1100);

    let b = U4::new(0b1111);
    assert_eq!(b >> 3, 0b0001);
    assert_eq!(b >> -3, 0b1000);
}

#[test]
fn test_shift_left() {
    let a = U4::new(0b0110);
    assert_eq!(a << -2, 0b0001);
    assert_eq!(a << 1, 0b1100);

    let b = U4::new(0b1111);
    assert_eq!(b << -3, 0b0001);
    assert_eq!(b << 3, 0b1000);
}

#[test]
fn test_shift_assign() {
    let mut a = U4::new(0b0110);
    a >>= 2;
    assert_eq!(a, 0b0001);

    let mut b = U4::new(0b0110);
    b >>= -1;
    assert_eq!(b, 0b1100);

    let mut c = U4::new(0b0110);
    c <<= -2;
    assert_eq!(c, 0b0001);

    let mut d = U4::new(0b1111);
    d <<= 3u8;
    assert_eq!(d, 0b1000);
}

#[test]
fn test_shift_by_width_or_more_is_zero() {
    for v in 0u8..=15 {
        let n = U4::new(v);
        for amount in [4i32, 5, 31, 1000, -4, -5, -1000] {
            assert_eq!(n << amount, 0);
            assert_eq!(n >> amount, 0);
        }
        assert_eq!(n << u128::MAX, 0);
        assert_eq!(n >> usize::MAX, 0);
    }
}

#[test]
fn test_shift_by_most_negative_amount() {
    let n = U4::MAX;
    assert_eq!(n << i8::MIN, 0);
    assert_eq!(n >> i64::MIN, 0);
    assert_eq!(n << i128::MIN, 0);
    assert_eq!(n >> isize::MIN, 0);
}

#[test]
fn test_negative_shift_mirrors() {
    for v in 0u8..=15 {
        let a = U4::new(v);
        for n in 0i32..=6 {
            assert_eq!(a << -n, a >> n);
            assert_eq!(a >> -n, a << n);
        }
    }
}

#[test]
fn test_shift_round_trip_without_lost_bits() {
    for v in 0u8..=15 {
        let a = U4::new(v);
        for n in 0u32..=3 {
            if a.leading_zeros() >= n {
                assert_eq!((a << n) >> n, a);
            }
        }
    }
}

#[test]
fn test_shift_by_zero_is_identity() {
    let n = U4::new(0b1011);
    assert_eq!(n << 0, n);
    assert_eq!(n >> 0u64, n);
    assert_eq!(&n << 1, 0b0110);
    assert_eq!(&n >> 1, 0b0101);
}

// ==================== Bit Queries ====================

#[test]
fn test_bit_width() {
    assert_eq!(U4::BITS, 4);
    assert!(!U4::SIGNED);
}

#[test]
fn test_trailing_zeros() {
    assert_eq!(U4::new(0b1000).trailing_zeros(), 3);
    assert_eq!(U4::new(0b0000).trailing_zeros(), 4);
    assert_eq!(U4::new(0b1100).trailing_zeros(), 2);
    assert_eq!(U4::new(0b0110).trailing_zeros(), 1);
}

#[test]
fn test_leading_zeros() {
    assert_eq!(U4::new(0b0000).leading_zeros(), 4);
    assert_eq!(U4::new(0b0001).leading_zeros(), 3);
    assert_eq!(U4::new(0b0110).leading_zeros(), 1);
    assert_eq!(U4::new(0b1000).leading_zeros(), 0);
}

#[test]
fn test_count_ones_and_zeros() {
    assert_eq!(U4::new(0b0110).count_ones(), 2);
    assert_eq!(U4::new(0b1101).count_ones(), 3);
    assert_eq!(U4::new(0b0000).count_ones(), 0);
    assert_eq!(U4::new(0b1000).count_ones(), 1);
    assert_eq!(U4::new(0b0010).count_ones(), 1);
    for v in 0u8..=15 {
        let n = U4::new(v);
        assert_eq!(n.count_ones() + n.count_zeros(), U4::BITS);
    }
}

#[test]
fn test_swap_bytes_is_identity() {
    assert_eq!(U4::new(15).swap_bytes(), U4::new(15));
    assert_eq!(U4::new(0b0001).swap_bytes(), 0b0001);
}

#[test]
fn test_magnitude_and_signum() {
    assert_eq!(U4::new(10).magnitude(), 10);
    assert_eq!(U4::new(14).magnitude(), 14);
    assert_eq!(U4::new(0).signum(), 0);
    assert_eq!(U4::new(4).signum(), 1);
}

#[test]
fn test_is_power_of_two() {
    let powers: Vec<u8> = (0u8..=15)
        .filter(|v| U4::new(*v).is_power_of_two())
        .collect();
    assert_eq!(powers, [1u8, 2, 4, 8]);
}
