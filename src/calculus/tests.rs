use super::*;
use crate::quaternion::Quaternion;

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn vec_approx<const D: usize>(a: &[f64; D], b: &[f64; D], tol: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| approx(*x, *y, tol))
}

const T_IRREGULAR: [f64; 7] = [0.0, 0.13, 0.4, 0.55, 1.1, 1.2, 1.75];

// ======================== derivative ========================

#[test]
fn derivative_constant_rate() {
    let axis = [0.48, -0.6, 0.64];
    let rate = 1.7;
    let q: [Quaternion<f64>; 7] =
        core::array::from_fn(|i| Quaternion::from_axis_angle(axis, rate * T_IRREGULAR[i]));
    let mut w = [[0.0; 3]; 7];
    derivative_into(&q, &T_IRREGULAR, &mut w).unwrap();
    let expected = [rate * axis[0], rate * axis[1], rate * axis[2]];
    for wi in &w {
        assert!(vec_approx(wi, &expected, 1e-12), "{wi:?}");
    }
}

#[test]
fn derivative_is_body_frame() {
    // q(t) = q_c · exp(t ω / 2): constant body-frame rate ω, not aligned with
    // the world axes of q_c
    let qc = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 1.0);
    let omega = [0.3, 0.0, -0.2];
    let q: [Quaternion<f64>; 7] = core::array::from_fn(|i| {
        let s = T_IRREGULAR[i];
        qc * Quaternion::from_rotation_vector([omega[0] * s, omega[1] * s, omega[2] * s])
    });
    let mut w = [[0.0; 3]; 7];
    derivative_into(&q, &T_IRREGULAR, &mut w).unwrap();
    for wi in &w {
        assert!(vec_approx(wi, &omega, 1e-12));
    }
}

#[test]
fn derivative_ignores_sign_flips() {
    let t = [0.0, 0.5, 1.0, 1.5];
    let mut q: [Quaternion<f64>; 4] =
        core::array::from_fn(|i| Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.6 * t[i]));
    q[2] = -q[2];
    let mut w = [[0.0; 3]; 4];
    derivative_into(&q, &t, &mut w).unwrap();
    for wi in &w {
        assert!(vec_approx(wi, &[0.0, 0.0, 0.6], 1e-12));
    }
}

#[test]
fn derivative_second_order_interior() {
    // accelerating rotation about x: angle = t²
    let t = [0.0, 0.01, 0.025, 0.03, 0.045];
    let q: [Quaternion<f64>; 5] =
        core::array::from_fn(|i| Quaternion::from_axis_angle([1.0, 0.0, 0.0], t[i] * t[i]));
    let mut w = [[0.0; 3]; 5];
    derivative_into(&q, &t, &mut w).unwrap();
    for i in 1..4 {
        // three-point non-uniform difference is exact for quadratics
        assert!(approx(w[i][0], 2.0 * t[i], 1e-12));
    }
}

#[test]
fn derivative_two_points() {
    let q = [Quaternion::one(), Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.5)];
    let mut w = [[0.0; 3]; 2];
    derivative_into(&q, &[1.0, 3.0], &mut w).unwrap();
    assert!(vec_approx(&w[0], &[0.0, 0.25, 0.0], 1e-14));
    assert!(vec_approx(&w[1], &[0.0, 0.25, 0.0], 1e-14));
}

#[test]
fn derivative_errors() {
    let q = [Quaternion::<f64>::one(); 3];
    let mut w = [[0.0; 3]; 3];
    assert_eq!(
        derivative_into(&q[..1], &[0.0], &mut w[..1]),
        Err(CalculusError::TooFewPoints)
    );
    assert_eq!(
        derivative_into(&q, &[0.0, 1.0], &mut w),
        Err(CalculusError::LengthMismatch)
    );
    assert_eq!(
        derivative_into(&q, &[0.0, 1.0, 2.0], &mut w[..2]),
        Err(CalculusError::LengthMismatch)
    );
    assert_eq!(
        derivative_into(&q, &[0.0, 1.0, 0.5], &mut w),
        Err(CalculusError::NotSorted)
    );
}

// ======================== finite_difference ========================

fn quartic(x: f64) -> f64 {
    1.0 - 2.0 * x + 0.5 * x * x + 3.0 * x * x * x - x * x * x * x
}

fn quartic_prime(x: f64) -> f64 {
    -2.0 + x + 9.0 * x * x - 4.0 * x * x * x
}

#[test]
fn finite_difference_exact_for_quartic() {
    let f: [[f64; 2]; 7] = core::array::from_fn(|i| {
        let x = T_IRREGULAR[i];
        [quartic(x), 2.0 * x]
    });
    let mut d = [[0.0; 2]; 7];
    finite_difference_into(&f, &T_IRREGULAR, &mut d).unwrap();
    for (i, di) in d.iter().enumerate() {
        let x = T_IRREGULAR[i];
        assert!(approx(di[0], quartic_prime(x), 1e-9), "i = {i}");
        assert!(approx(di[1], 2.0, 1e-10));
    }
}

#[test]
fn finite_difference_short_series() {
    // three samples: exact for quadratics
    let t = [0.0, 0.5, 2.0];
    let f = [[0.0], [0.25], [4.0]];
    let mut d = [[0.0]; 3];
    finite_difference_into(&f, &t, &mut d).unwrap();
    for (i, di) in d.iter().enumerate() {
        assert!(approx(di[0], 2.0 * t[i], 1e-12));
    }

    // two samples: slope
    let mut d = [[0.0]; 2];
    finite_difference_into(&[[1.0], [4.0]], &[1.0, 2.5], &mut d).unwrap();
    assert!(approx(d[0][0], 2.0, 1e-14));
    assert!(approx(d[1][0], 2.0, 1e-14));
}

#[test]
fn finite_difference_errors() {
    let mut d = [[0.0]; 1];
    assert_eq!(
        finite_difference_into(&[[1.0]], &[0.0], &mut d),
        Err(CalculusError::TooFewPoints)
    );
    let mut d = [[0.0]; 2];
    assert_eq!(
        finite_difference_into(&[[1.0], [2.0]], &[1.0, 1.0], &mut d),
        Err(CalculusError::NotSorted)
    );
}

// ======================== integrals ========================

#[test]
fn indefinite_integral_linear_exact() {
    let f: [[f64; 3]; 7] = core::array::from_fn(|i| {
        let x = T_IRREGULAR[i];
        [1.0, x, -3.0 * x + 2.0]
    });
    let mut out = [[1.0; 3]; 7];
    indefinite_integral_into(&f, &T_IRREGULAR, &mut out).unwrap();
    assert_eq!(out[0], [0.0; 3]);
    for (i, o) in out.iter().enumerate() {
        let x = T_IRREGULAR[i];
        let expected = [x, 0.5 * x * x, -1.5 * x * x + 2.0 * x];
        assert!(vec_approx(o, &expected, 1e-14));
    }
}

#[test]
fn definite_integral_matches_indefinite_at_samples() {
    let f: [[f64; 1]; 7] = core::array::from_fn(|i| [T_IRREGULAR[i].sin()]);
    let mut cum = [[0.0]; 7];
    indefinite_integral_into(&f, &T_IRREGULAR, &mut cum).unwrap();
    let d = definite_integral(&f, &T_IRREGULAR, T_IRREGULAR[1], T_IRREGULAR[5]).unwrap();
    assert!(approx(d[0], cum[5][0] - cum[1][0], 1e-15));
    let whole = integrate(&f, &T_IRREGULAR).unwrap();
    assert!(approx(whole[0], cum[6][0], 1e-15));
}

#[test]
fn definite_integral_additive() {
    let f: [[f64; 2]; 7] = core::array::from_fn(|i| {
        let x = T_IRREGULAR[i];
        [x.cos(), x * x]
    });
    let (t0, t1) = (0.07, 1.61);
    let whole = definite_integral(&f, &T_IRREGULAR, t0, t1).unwrap();
    for &tm in &[0.07, 0.2, 0.4, 0.9, 1.2, 1.61] {
        let a = definite_integral(&f, &T_IRREGULAR, t0, tm).unwrap();
        let b = definite_integral(&f, &T_IRREGULAR, tm, t1).unwrap();
        assert!(approx(a[0] + b[0], whole[0], 1e-14));
        assert!(approx(a[1] + b[1], whole[1], 1e-14));
    }
}

#[test]
fn definite_integral_reversed_and_empty() {
    let t = [0.0, 1.0, 2.0];
    let f = [[1.0], [3.0], [2.0]];
    let fwd = definite_integral(&f, &t, 0.25, 1.75).unwrap();
    let rev = definite_integral(&f, &t, 1.75, 0.25).unwrap();
    assert_eq!(fwd[0], -rev[0]);
    assert_eq!(definite_integral(&f, &t, 0.6, 0.6).unwrap(), [0.0]);
}

#[test]
fn definite_integral_linear_between_samples() {
    // f(x) = 2x + 1 sampled on an irregular grid; linear so the trapezoid is exact
    let f: [[f64; 1]; 7] = core::array::from_fn(|i| [2.0 * T_IRREGULAR[i] + 1.0]);
    let (a, b) = (0.2, 1.15);
    let v = definite_integral(&f, &T_IRREGULAR, a, b).unwrap();
    let exact = (b * b + b) - (a * a + a);
    assert!(approx(v[0], exact, 1e-14));
}

#[test]
fn definite_integral_out_of_range() {
    let t = [0.0, 1.0, 2.0];
    let f = [[1.0], [1.0], [1.0]];
    assert_eq!(
        definite_integral(&f, &t, -0.1, 1.0),
        Err(CalculusError::OutOfRange)
    );
    assert_eq!(
        definite_integral(&f, &t, 0.0, 2.1),
        Err(CalculusError::OutOfRange)
    );
    assert_eq!(
        definite_integral(&f, &t, f64::NAN, 1.0),
        Err(CalculusError::OutOfRange)
    );
    assert!(definite_integral(&f, &t, 0.0, 2.0).is_ok());
}

#[test]
fn integral_errors() {
    let f = [[1.0], [1.0]];
    let mut out = [[0.0]; 2];
    assert_eq!(
        indefinite_integral_into(&f, &[0.0, 1.0, 2.0], &mut out),
        Err(CalculusError::LengthMismatch)
    );
    assert_eq!(
        indefinite_integral_into(&f, &[0.0, 1.0], &mut out[..1]),
        Err(CalculusError::LengthMismatch)
    );
    assert_eq!(integrate(&f[..1], &[0.0]), Err(CalculusError::TooFewPoints));
}

#[test]
fn f32_series() {
    let t = [0.0_f32, 0.5, 1.0];
    let f = [[0.0_f32], [1.0], [2.0]];
    let v = integrate(&f, &t).unwrap();
    assert!((v[0] - 1.0).abs() < 1e-6);
}

#[cfg(feature = "alloc")]
mod alloc_tests {
    use super::*;

    #[test]
    fn allocating_forms_match() {
        let q: [Quaternion<f64>; 7] = core::array::from_fn(|i| {
            Quaternion::from_axis_angle([0.0, 0.6, 0.8], T_IRREGULAR[i].sin())
        });
        let mut w = [[0.0; 3]; 7];
        derivative_into(&q, &T_IRREGULAR, &mut w).unwrap();
        assert_eq!(derivative(&q, &T_IRREGULAR).unwrap(), w.to_vec());

        let f: [[f64; 2]; 7] = core::array::from_fn(|i| [T_IRREGULAR[i], 1.0]);
        let mut d = [[0.0; 2]; 7];
        finite_difference_into(&f, &T_IRREGULAR, &mut d).unwrap();
        assert_eq!(finite_difference(&f, &T_IRREGULAR).unwrap(), d.to_vec());

        let mut c = [[0.0; 2]; 7];
        indefinite_integral_into(&f, &T_IRREGULAR, &mut c).unwrap();
        assert_eq!(indefinite_integral(&f, &T_IRREGULAR).unwrap(), c.to_vec());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            alloc::format!("{}", CalculusError::OutOfRange),
            "integration bound outside the sampled range"
        );
    }
}
