//! Unary map kernel: real transcendental transforms and complex magnitude/phase.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecaux::error::{BAD_CODE, BAD_SIZE};
use vecaux::{map, map_in_place, Complex32, Complex64, MapOp};

fn map_f64(code: i32, x: &[f64]) -> Vec<f64> {
    let mut r = vec![f64::NAN; x.len()];
    map(code, x, &mut r).unwrap();
    r
}

/// Every real opcode agrees with the corresponding std function.
#[test]
fn test_real_catalogue_matches_std() {
    let mut rng = StdRng::seed_from_u64(12345);
    // Inside (-1, 1) so asin/acos are defined; abs values keep ln/sqrt finite.
    let x: Vec<f64> = (0..256).map(|_| rng.random_range(-0.99..0.99)).collect();
    let positive: Vec<f64> = x.iter().map(|v| v.abs() + 0.01).collect();
    let (x, positive) = (x.as_slice(), positive.as_slice());

    let cases: [(MapOp, fn(f64) -> f64, &[f64]); 14] = [
        (MapOp::Sin, f64::sin, x),
        (MapOp::Cos, f64::cos, x),
        (MapOp::Tan, f64::tan, x),
        (MapOp::Abs, f64::abs, x),
        (MapOp::Asin, f64::asin, x),
        (MapOp::Acos, f64::acos, x),
        (MapOp::Atan, f64::atan, x),
        (MapOp::Sinh, f64::sinh, x),
        (MapOp::Cosh, f64::cosh, x),
        (MapOp::Tanh, f64::tanh, x),
        (MapOp::Exp, f64::exp, x),
        (MapOp::Ln, f64::ln, positive),
        (MapOp::Sign, f64::signum, positive),
        (MapOp::Sqrt, f64::sqrt, positive),
    ];

    for (op, reference, input) in cases {
        let result = map_f64(op.code(), input);
        for (k, (&got, &v)) in result.iter().zip(input.iter()).enumerate() {
            let expected = reference(v);
            assert!(
                (got - expected).abs() <= 1e-15 * expected.abs().max(1.0),
                "{op:?} at index {k}: input={v}, got={got}, expected={expected}"
            );
        }
    }
}

#[test]
fn test_real_catalogue_f32() {
    let x = [0.0f32, 0.5, -0.25, 0.75];
    let mut r = [0.0f32; 4];

    map(0, &x, &mut r).unwrap();
    for (got, v) in r.iter().zip(x.iter()) {
        assert!((got - v.sin()).abs() < 1e-6);
    }

    map(13, &x, &mut r).unwrap();
    assert_eq!(r[0], 1.0);
    assert!((r[1] - 0.5f32.exp()).abs() < 1e-6);

    map(16, &[4.0f32, 9.0, 0.0, 2.25], &mut r).unwrap();
    assert_eq!(r, [2.0, 3.0, 0.0, 1.5]);
}

/// Single-precision transcendentals are evaluated in double precision and
/// rounded once, so they match `(x as f64).f() as f32` bit for bit.
#[test]
fn test_f32_catalogue_rounds_double_results() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut x: Vec<f32> = (0..4096).map(|_| rng.random_range(-0.99..0.99)).collect();
    x.push(0.216142);
    let positive: Vec<f32> = x.iter().map(|v| v.abs() + 0.01).collect();
    let (x, positive) = (x.as_slice(), positive.as_slice());

    let cases: [(MapOp, fn(f64) -> f64, &[f32]); 12] = [
        (MapOp::Sin, f64::sin, x),
        (MapOp::Cos, f64::cos, x),
        (MapOp::Tan, f64::tan, x),
        (MapOp::Asin, f64::asin, x),
        (MapOp::Acos, f64::acos, x),
        (MapOp::Atan, f64::atan, x),
        (MapOp::Sinh, f64::sinh, x),
        (MapOp::Cosh, f64::cosh, x),
        (MapOp::Tanh, f64::tanh, x),
        (MapOp::Exp, f64::exp, x),
        (MapOp::Ln, f64::ln, positive),
        (MapOp::Sqrt, f64::sqrt, positive),
    ];

    for (op, reference, input) in cases {
        let mut r = vec![f32::NAN; input.len()];
        map(op.code(), input, &mut r).unwrap();
        for (k, (&got, &v)) in r.iter().zip(input.iter()).enumerate() {
            let expected = reference(v as f64) as f32;
            assert_eq!(
                got.to_bits(),
                expected.to_bits(),
                "{op:?} at index {k}: input={v}, got={got}, expected={expected}"
            );
        }
    }

    let mut r = [0.0f32];
    map(2, &[0.216142f32], &mut r).unwrap();
    assert_eq!(r[0], (0.216142f32 as f64).tan() as f32);
}

/// `sign` yields exactly -1, 0 and +1.
#[test]
fn test_sign_is_exact() {
    assert_eq!(map_f64(15, &[-0.001, 0.0, 12345.0]), vec![-1.0, 0.0, 1.0]);

    let mut r = [9.0f32; 4];
    map(15, &[-1e-30f32, -0.0, f32::INFINITY, f32::NAN], &mut r).unwrap();
    assert_eq!(r, [-1.0, 0.0, 1.0, 0.0]);
}

/// Inverse hyperbolic opcodes are reserved.
#[test]
fn test_reserved_opcodes() {
    let x = [0.5f64];
    let mut r = [7.0f64];
    for code in 10..=12 {
        assert_eq!(map(code, &x, &mut r).unwrap_err().status(), BAD_CODE);
    }
    assert_eq!(map(17, &x, &mut r).unwrap_err().status(), BAD_CODE);
    assert_eq!(map(99, &x, &mut r).unwrap_err().status(), BAD_CODE);
    assert_eq!(r[0], 7.0);
}

#[test]
fn test_complex_magnitude() {
    let x = [Complex64::new(3.0, 4.0), Complex64::new(-5.0, 12.0)];
    let mut r = [Complex64::new(0.0, 0.0); 2];
    map(3, &x, &mut r).unwrap();
    assert_eq!(r[0].re, 5.0);
    assert_eq!(r[0].im, 0.0);
    assert_eq!(r[1], Complex64::new(13.0, 0.0));

    let x = [Complex32::new(3.0, -4.0)];
    let mut r = [Complex32::new(0.0, 0.0)];
    map(3, &x, &mut r).unwrap();
    assert_eq!(r[0], Complex32::new(5.0, 0.0));
}

/// Magnitudes of single-precision values whose squares overflow `f32` stay finite.
#[test]
fn test_complex32_magnitude_does_not_overflow() {
    let x = [Complex32::new(3e30, 4e30)];
    let mut r = [Complex32::new(0.0, 0.0)];
    map(3, &x, &mut r).unwrap();
    assert!((r[0].re - 5e30).abs() <= 5e30 * 1e-6, "got {}", r[0]);
}

#[test]
fn test_complex_signum() {
    let x = [Complex64::new(0.0, 0.0), Complex64::new(3.0, 4.0)];
    let mut r = [Complex64::new(9.0, 9.0); 2];
    map(15, &x, &mut r).unwrap();
    assert_eq!(r[0], Complex64::new(0.0, 0.0));
    assert!((r[1].re - 0.6).abs() < 1e-12);
    assert!((r[1].im - 0.8).abs() < 1e-12);

    let x = [Complex32::new(0.0, -2.0)];
    let mut r = [Complex32::new(0.0, 0.0)];
    map(15, &x, &mut r).unwrap();
    assert_eq!(r[0], Complex32::new(0.0, -1.0));
}

/// Complex kinds support only magnitude and signum.
#[test]
fn test_complex_rejects_real_only_opcodes() {
    let x = [Complex64::new(1.0, 1.0)];
    let mut r = [Complex64::new(0.0, 0.0)];
    for code in (0..=16).filter(|c| *c != 3 && *c != 15) {
        let err = map(code, &x, &mut r).unwrap_err();
        assert_eq!(err.status(), BAD_CODE, "code {code}");
    }
}

#[test]
fn test_length_mismatch() {
    let x = [1.0f64, 2.0, 3.0];
    let mut r = [0.0f64; 2];
    assert_eq!(map(0, &x, &mut r).unwrap_err().status(), BAD_SIZE);
    // Size is checked before the opcode.
    assert_eq!(map(99, &x, &mut r).unwrap_err().status(), BAD_SIZE);
    assert_eq!(r, [0.0, 0.0]);
}

#[test]
fn test_empty_vectors() {
    let x: [f64; 0] = [];
    let mut r: [f64; 0] = [];
    map(14, &x, &mut r).unwrap();
    assert_eq!(map(99, &x, &mut r).unwrap_err().status(), BAD_CODE);
}

#[test]
fn test_map_in_place() {
    let mut x = vec![1.0f64, 4.0, 16.0];
    map_in_place(16, &mut x).unwrap();
    assert_eq!(x, vec![1.0, 2.0, 4.0]);

    let mut z = vec![Complex64::new(0.0, 3.0)];
    map_in_place(3, &mut z).unwrap();
    assert_eq!(z[0], Complex64::new(3.0, 0.0));

    assert_eq!(map_in_place(0, &mut z).unwrap_err().status(), BAD_CODE);
}
