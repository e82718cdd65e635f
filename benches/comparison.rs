use criterion::{criterion_group, criterion_main, Criterion};

use nalgebra::{UnitQuaternion, Vector3};
use versor::Quaternion;

// ---------------------------------------------------------------------------
// Helpers: the same pair of rotations in both libraries
// ---------------------------------------------------------------------------

fn versor_pair() -> (Quaternion<f64>, Quaternion<f64>) {
    let s = 1.0 / 3.0_f64.sqrt();
    (
        Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.4),
        Quaternion::from_axis_angle([s, s, s], 2.1),
    )
}

fn nalgebra_pair() -> (UnitQuaternion<f64>, UnitQuaternion<f64>) {
    let s = 1.0 / 3.0_f64.sqrt();
    (
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.4),
        UnitQuaternion::from_scaled_axis(Vector3::new(s, s, s) * 2.1),
    )
}

fn rotor_series(n: usize) -> (Vec<f64>, Vec<Quaternion<f64>>) {
    let t: Vec<f64> = (0..n).map(|i| i as f64 * 0.1 + 0.02 * (i as f64).sin()).collect();
    let q = t
        .iter()
        .map(|&t| Quaternion::from_euler_angles(0.7 * t, 0.3 * (2.0 * t).sin(), -0.4 * t))
        .collect();
    (t, q)
}

// ---------------------------------------------------------------------------
// Hamilton product
// ---------------------------------------------------------------------------

fn product(c: &mut Criterion) {
    let mut g = c.benchmark_group("quaternion_product");

    g.bench_function("versor", |b| {
        let (p, q) = versor_pair();
        b.iter(|| std::hint::black_box(p) * std::hint::black_box(q))
    });

    g.bench_function("nalgebra", |b| {
        let (p, q) = nalgebra_pair();
        b.iter(|| std::hint::black_box(p) * std::hint::black_box(q))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// SLERP
// ---------------------------------------------------------------------------

fn slerp(c: &mut Criterion) {
    let mut g = c.benchmark_group("slerp");

    g.bench_function("versor", |b| {
        let (p, q) = versor_pair();
        b.iter(|| versor::slerp(std::hint::black_box(&p), std::hint::black_box(&q), 0.37))
    });

    g.bench_function("nalgebra", |b| {
        let (p, q) = nalgebra_pair();
        b.iter(|| std::hint::black_box(&p).slerp(std::hint::black_box(&q), 0.37))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Vector rotation
// ---------------------------------------------------------------------------

fn rotate(c: &mut Criterion) {
    let mut g = c.benchmark_group("rotate_vector");

    g.bench_function("versor", |b| {
        let (q, _) = versor_pair();
        let v = [0.3, -1.2, 2.0];
        b.iter(|| std::hint::black_box(&q).rotate(std::hint::black_box(&v)))
    });

    g.bench_function("nalgebra", |b| {
        let (q, _) = nalgebra_pair();
        let v = Vector3::new(0.3, -1.2, 2.0);
        b.iter(|| std::hint::black_box(&q) * std::hint::black_box(&v))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// SQUAD and calculus over a 1000-sample series
// ---------------------------------------------------------------------------

fn squad_batch(c: &mut Criterion) {
    let (t, q) = rotor_series(1000);
    let t_out: Vec<f64> = (0..5000).map(|i| t[999] * i as f64 / 4999.0).collect();

    let mut g = c.benchmark_group("squad_1000");

    g.bench_function("build", |b| {
        b.iter(|| versor::DynSquad::new(t.clone(), q.clone()))
    });

    g.bench_function("squad_5000_queries", |b| {
        b.iter(|| versor::squad(std::hint::black_box(&q), &t, &t_out))
    });

    g.bench_function("derivative", |b| {
        b.iter(|| versor::derivative(std::hint::black_box(&q), &t))
    });

    g.finish();
}

criterion_group!(benches, product, slerp, rotate, squad_batch);
criterion_main!(benches);
