// SLERP vs SQUAD through an irregular rotor series.
// Prints JSON with the knot times, 200 evaluation times, and for each method
// the rotation angle from the first knot plus the angular-velocity magnitude:
//   {"kt":[...], "t":[...], "angle_slerp":[...], "angle_squad":[...],
//    "omega_slerp":[...], "omega_squad":[...]}
// Piecewise SLERP has jumps in angular velocity at the knots; SQUAD does not.

use versor::{derivative, rotation_intrinsic_distance, slerp, squad, Quaternion};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn norm3(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn main() {
    let kt = [0.0_f64, 0.6, 1.1, 2.0, 2.4, 3.5];
    let kq: Vec<Quaternion<f64>> = kt
        .iter()
        .map(|&t| versor::from_euler_angles(0.9 * t, 0.6 * (1.3 * t).sin(), -0.5 * t))
        .collect();

    const N: usize = 200;
    let t: Vec<f64> = (0..N).map(|i| kt[5] * i as f64 / (N - 1) as f64).collect();

    let q_squad = squad(&kq, &kt, &t).expect("queries lie inside the knot range");
    let q_slerp: Vec<Quaternion<f64>> = t
        .iter()
        .map(|&ti| {
            let i = kt.iter().rposition(|&k| k <= ti).unwrap_or(0).min(kt.len() - 2);
            let tau = (ti - kt[i]) / (kt[i + 1] - kt[i]);
            slerp(&kq[i], &kq[i + 1], tau)
        })
        .collect();

    let angle = |qs: &[Quaternion<f64>]| -> Vec<f64> {
        qs.iter().map(|q| rotation_intrinsic_distance(&kq[0], q)).collect()
    };
    let omega = |qs: &[Quaternion<f64>]| -> Vec<f64> {
        derivative(qs, &t)
            .expect("evaluation times are sorted")
            .iter()
            .map(norm3)
            .collect()
    };

    println!(
        "{{\"kt\":{},\"t\":{},\"angle_slerp\":{},\"angle_squad\":{},\"omega_slerp\":{},\"omega_squad\":{}}}",
        fmt_arr(&kt),
        fmt_arr(&t),
        fmt_arr(&angle(&q_slerp)),
        fmt_arr(&angle(&q_squad)),
        fmt_arr(&omega(&q_slerp)),
        fmt_arr(&omega(&q_squad)),
    );
}
