use super::primes::*;
use crate::core::base::*;

pub fn reverse_bits32(mut n: u32) -> u32 {
    n = (n.wrapping_shl(16)) | (n.wrapping_shr(16));
    n = ((n & 0x00ff00ff).wrapping_shl(8)) | ((n & 0xff00ff00).wrapping_shr(8));
    n = ((n & 0x0f0f0f0f).wrapping_shl(4)) | ((n & 0xf0f0f0f0).wrapping_shr(4));
    n = ((n & 0x33333333).wrapping_shl(2)) | ((n & 0xcccccccc).wrapping_shr(2));
    n = ((n & 0x55555555).wrapping_shl(1)) | ((n & 0xaaaaaaaa).wrapping_shr(1));
    return n;
}

pub fn reverse_bits64(n: u64) -> u64 {
    let n0 = reverse_bits32(n as u32) as u64;
    let n1 = reverse_bits32((n.wrapping_shr(32)) as u32) as u64;
    return (n0.wrapping_shl(32)) | n1;
}

fn radical_inverse_specialized(base: u64, mut a: u64) -> Float {
    let inv_base = 1.0 / base as Float;
    let mut reversed_digits = 0;
    let mut inv_base_n = 1.0;
    while a != 0 {
        let next = a / base;
        let digit = a - next * base;
        reversed_digits = reversed_digits * base + digit;
        inv_base_n *= inv_base;
        a = next;
    }
    return Float::min(reversed_digits as Float * inv_base_n, ONE_MINUS_EPSILON);
}

/// Mirrors the digits of `a` around the radix point in the prime base
/// `PRIMES[base_index]`. The result lies in `[0, 1)`.
pub fn radical_inverse(base_index: u32, a: u64) -> Float {
    assert!((base_index as usize) < PRIME_TABLE_SIZE);
    return match base_index {
        0 => Float::min(
            reverse_bits64(a) as Float * 5.4210108624275222e-20,
            ONE_MINUS_EPSILON,
        ),
        _ => radical_inverse_specialized(PRIMES[base_index as usize], a),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let u1 = 1;
        let u2 = reverse_bits64(u1);
        let u3 = reverse_bits64(u2);
        assert_eq!(u1, u3);
        assert_eq!(u2, 1u64 << 63);
    }

    #[test]
    fn test_002() {
        // van der Corput: 0, 1/2, 1/4, 3/4, 1/8, ...
        let expected: [Float; 8] = [0.0, 0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(radical_inverse(0, i as u64), *e);
            assert_eq!(radical_inverse_specialized(2, i as u64), *e);
        }
    }

    #[test]
    fn test_003() {
        // base 3: 0, 1/3, 2/3, 1/9, 4/9
        let expected: [Float; 5] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0 / 9.0, 4.0 / 9.0];
        for (i, e) in expected.iter().enumerate() {
            let v = radical_inverse(1, i as u64);
            assert!((v - e).abs() < 1e-6, "{} {}", v, e);
        }
    }

    #[test]
    fn test_004() {
        assert!(radical_inverse(0, u64::MAX) < 1.0);
    }
}
