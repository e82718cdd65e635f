use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

use super::{find_segment, slerp, validate_sorted, InterpError};

/// Evaluate one SQUAD segment.
///
/// Computes `slerp(slerp(q0, q1, τ), slerp(a, b, τ), 2τ(1−τ))`, a curve
/// through `q0` at `τ = 0` and `q1` at `τ = 1` whose end tangents are set by
/// the control quaternions `a` (outgoing at `q0`) and `b` (incoming at `q1`).
///
/// # Example
///
/// ```
/// use versor::Quaternion;
/// use versor::interp::squad_evaluate;
///
/// let q0 = Quaternion::<f64>::one();
/// let q1 = Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.5);
/// let a = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.1);
/// let b = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.3);
/// assert!((squad_evaluate(&q0, &a, &b, &q1, 0.0) - q0).norm() < 1e-14);
/// assert!((squad_evaluate(&q0, &a, &b, &q1, 1.0) - q1).norm() < 1e-14);
/// ```
pub fn squad_evaluate<T: FloatScalar>(
    q0: &Quaternion<T>,
    a: &Quaternion<T>,
    b: &Quaternion<T>,
    q1: &Quaternion<T>,
    tau: T,
) -> Quaternion<T> {
    let p = slerp(q0, q1, tau);
    let c = slerp(a, b, tau);
    slerp(&p, &c, T::two() * tau * (T::one() - tau))
}

/// Settings for SQUAD control-point construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquadSettings {
    /// Scale neighbouring tangents by the ratio of segment durations, so that
    /// angular velocity stays continuous across knots for irregular sampling
    /// (default: true). With uniform spacing both choices give the same
    /// controls.
    pub time_weighted: bool,
    /// Flip rotor signs so consecutive samples have non-negative dot product
    /// before building controls (default: true).
    pub unflip: bool,
}

impl Default for SquadSettings {
    fn default() -> Self {
        Self {
            time_weighted: true,
            unflip: true,
        }
    }
}

/// Flip signs in place so that each rotor has non-negative dot product with
/// its predecessor. Returns the number of rotors flipped.
///
/// The rotations are unchanged; only the representative of each `±q` pair
/// is chosen to make the sequence continuous.
pub fn unflip_rotors_in_place<T: FloatScalar>(qs: &mut [Quaternion<T>]) -> usize {
    let mut flips = 0;
    for i in 1..qs.len() {
        if qs[i].dot(&qs[i - 1]) < T::zero() {
            qs[i] = -qs[i];
            flips += 1;
        }
    }
    if flips > 0 {
        log::trace!("unflip_rotors: flipped {} of {} rotors", flips, qs.len());
    }
    flips
}

/// Copying form of [`unflip_rotors_in_place`].
#[cfg(feature = "alloc")]
pub fn unflip_rotors<T: FloatScalar>(qs: &[Quaternion<T>]) -> Vec<Quaternion<T>> {
    let mut out = qs.to_vec();
    unflip_rotors_in_place(&mut out);
    out
}

/// Fill `controls[i] = [a_i, b_i]` for every segment `i` in `0..n-1`.
///
/// `a_i` is the outgoing control at knot `i`, `b_i` the incoming control at
/// knot `i + 1`. The first outgoing and last incoming controls equal their
/// knots.
fn build_controls<T: FloatScalar>(
    ts: &[T],
    qs: &[Quaternion<T>],
    time_weighted: bool,
    controls: &mut [[Quaternion<T>; 2]],
) {
    let n = qs.len();
    let quarter = T::lit(0.25);
    let ratio = |num: T, den: T| if time_weighted { num / den } else { T::one() };

    for i in 0..n - 1 {
        let h = ts[i + 1] - ts[i];
        let qi = qs[i];
        let qn = qs[i + 1];
        // ln(q_i⁻¹ q_{i+1})
        let fwd = (qi.inverse() * qn).ln();

        let a = if i == 0 {
            qi
        } else {
            let back = (qs[i - 1].inverse() * qi).ln();
            let r = ratio(h, ts[i] - ts[i - 1]);
            qi * ((back * r - fwd) * quarter).exp()
        };

        let b = if i + 2 >= n {
            qn
        } else {
            let next = (qn.inverse() * qs[i + 2]).ln();
            let r = ratio(h, ts[i + 2] - ts[i + 1]);
            qn * ((fwd - next * r) * quarter).exp()
        };

        controls[i] = [a, b];
    }
}

#[inline]
fn eval_segment<T: FloatScalar>(
    ts: &[T],
    qs: &[Quaternion<T>],
    controls: &[[Quaternion<T>; 2]],
    t: T,
) -> Result<Quaternion<T>, InterpError> {
    let i = find_segment(ts, t)?;
    let tau = (t - ts[i]) / (ts[i + 1] - ts[i]);
    let [a, b] = controls[i];
    Ok(squad_evaluate(&qs[i], &a, &b, &qs[i + 1], tau))
}

/// SQUAD interpolant through a rotor time series (fixed-size, stack-allocated).
///
/// Controls are built once in O(N); each evaluation is an O(log N) segment
/// search plus three SLERPs. Requires at least 2 points. Evaluations outside
/// `[ts[0], ts[N-1]]` return [`InterpError::OutOfRange`].
///
/// # Example
///
/// ```
/// use versor::Quaternion;
/// use versor::interp::Squad;
///
/// let ts = [0.0_f64, 1.0, 2.0];
/// let qs = [
///     Quaternion::one(),
///     Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.5),
///     Quaternion::from_axis_angle([0.0, 0.0, 1.0], 1.0),
/// ];
/// let sq = Squad::new(ts, qs).unwrap();
/// let q = sq.eval(0.5).unwrap();
/// let expected = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.25);
/// assert!((q - expected).norm() < 1e-12);
/// assert!(sq.eval(2.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Squad<T, const N: usize> {
    ts: [T; N],
    qs: [Quaternion<T>; N],
    // Per-segment controls [a_i, b_i]. Only indices 0..N-1 used.
    controls: [[Quaternion<T>; 2]; N],
}

impl<T: FloatScalar, const N: usize> Squad<T, N> {
    /// Construct with default [`SquadSettings`].
    ///
    /// Returns `InterpError::TooFewPoints` if `N < 2`,
    /// `InterpError::NotSorted` if `ts` is not strictly increasing.
    pub fn new(ts: [T; N], qs: [Quaternion<T>; N]) -> Result<Self, InterpError> {
        Self::with_settings(ts, qs, &SquadSettings::default())
    }

    /// Construct with explicit settings.
    pub fn with_settings(
        ts: [T; N],
        mut qs: [Quaternion<T>; N],
        settings: &SquadSettings,
    ) -> Result<Self, InterpError> {
        if N < 2 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&ts)?;
        if settings.unflip {
            unflip_rotors_in_place(&mut qs);
        }

        let mut controls = [[Quaternion::one(); 2]; N];
        build_controls(&ts, &qs, settings.time_weighted, &mut controls[..N - 1]);
        log::debug!(
            "squad: built controls for {} segments (time_weighted = {})",
            N - 1,
            settings.time_weighted
        );

        Ok(Self { ts, qs, controls })
    }

    /// Evaluate the interpolant at `t`.
    pub fn eval(&self, t: T) -> Result<Quaternion<T>, InterpError> {
        eval_segment(&self.ts, &self.qs, &self.controls, t)
    }

    /// Evaluate at each of `ts_out`, writing into `out`.
    ///
    /// All queries are checked before anything is written.
    pub fn eval_into(&self, ts_out: &[T], out: &mut [Quaternion<T>]) -> Result<(), InterpError> {
        if ts_out.len() != out.len() {
            return Err(InterpError::LengthMismatch);
        }
        check_range(&self.ts, ts_out)?;
        for (o, &t) in out.iter_mut().zip(ts_out) {
            *o = self.eval(t)?;
        }
        Ok(())
    }

    /// The knot times.
    pub fn ts(&self) -> &[T; N] {
        &self.ts
    }

    /// The knot rotors (after sign unflipping, if enabled).
    pub fn rotors(&self) -> &[Quaternion<T>; N] {
        &self.qs
    }

    /// Per-segment control pairs `[a_i, b_i]`.
    pub fn controls(&self) -> &[[Quaternion<T>; 2]] {
        &self.controls[..N - 1]
    }
}

fn check_range<T: FloatScalar>(ts: &[T], queries: &[T]) -> Result<(), InterpError> {
    let (lo, hi) = (ts[0], ts[ts.len() - 1]);
    if queries.iter().all(|&t| t >= lo && t <= hi) {
        Ok(())
    } else {
        Err(InterpError::OutOfRange)
    }
}

// ---------- Dynamic variant ----------

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// SQUAD interpolant through a rotor time series (heap-allocated, runtime-sized).
///
/// Dynamic counterpart of [`Squad`]. Requires at least 2 points.
///
/// # Example
///
/// ```
/// use versor::Quaternion;
/// use versor::interp::DynSquad;
///
/// let ts = vec![0.0_f64, 0.5, 2.0];
/// let qs = vec![
///     Quaternion::one(),
///     Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.2),
///     Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.8),
/// ];
/// let sq = DynSquad::new(ts, qs).unwrap();
/// let q = sq.eval(0.5).unwrap();
/// let knot = Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.2);
/// assert!((q - knot).norm() < 1e-14);
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Clone)]
pub struct DynSquad<T> {
    ts: Vec<T>,
    qs: Vec<Quaternion<T>>,
    controls: Vec<[Quaternion<T>; 2]>,
}

#[cfg(feature = "alloc")]
impl<T: FloatScalar> DynSquad<T> {
    /// Construct with default [`SquadSettings`].
    pub fn new(ts: Vec<T>, qs: Vec<Quaternion<T>>) -> Result<Self, InterpError> {
        Self::with_settings(ts, qs, &SquadSettings::default())
    }

    /// Construct with explicit settings.
    pub fn with_settings(
        ts: Vec<T>,
        mut qs: Vec<Quaternion<T>>,
        settings: &SquadSettings,
    ) -> Result<Self, InterpError> {
        if ts.len() != qs.len() {
            return Err(InterpError::LengthMismatch);
        }
        if ts.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&ts)?;
        if settings.unflip {
            unflip_rotors_in_place(&mut qs);
        }

        let n = ts.len();
        let mut controls = alloc::vec![[Quaternion::one(); 2]; n - 1];
        build_controls(&ts, &qs, settings.time_weighted, &mut controls);
        log::debug!(
            "squad: built controls for {} segments (time_weighted = {})",
            n - 1,
            settings.time_weighted
        );

        Ok(Self { ts, qs, controls })
    }

    /// Evaluate the interpolant at `t`.
    pub fn eval(&self, t: T) -> Result<Quaternion<T>, InterpError> {
        eval_segment(&self.ts, &self.qs, &self.controls, t)
    }

    /// Evaluate at every query time.
    ///
    /// All queries are range-checked before any is evaluated, so an
    /// out-of-range time fails the whole batch.
    pub fn eval_many(&self, ts_out: &[T]) -> Result<Vec<Quaternion<T>>, InterpError> {
        check_range(&self.ts, ts_out)?;
        ts_out.iter().map(|&t| self.eval(t)).collect()
    }

    /// The knot times.
    pub fn ts(&self) -> &[T] {
        &self.ts
    }

    /// The knot rotors (after sign unflipping, if enabled).
    pub fn rotors(&self) -> &[Quaternion<T>] {
        &self.qs
    }

    /// Per-segment control pairs `[a_i, b_i]`.
    pub fn controls(&self) -> &[[Quaternion<T>; 2]] {
        &self.controls
    }
}

/// SQUAD-interpolate a rotor time series at new times.
///
/// `rotors[i]` is the sample at `t_in[i]`; `t_in` must be strictly
/// increasing. Every `t_out` must lie within `[t_in[0], t_in[n-1]]`.
/// Cost is O(n) for the controls plus O(log n) per query.
///
/// # Example
///
/// ```
/// use versor::{squad, Quaternion};
///
/// let t_in = [0.0_f64, 1.0, 2.0, 3.0];
/// let rotors: Vec<_> = t_in
///     .iter()
///     .map(|&t| Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.3 * t))
///     .collect();
/// let out = squad(&rotors, &t_in, &[0.5, 2.25]).unwrap();
/// let expected = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.15);
/// assert!((out[0] - expected).norm() < 1e-12);
/// assert!(squad(&rotors, &t_in, &[3.5]).is_err());
/// ```
#[cfg(feature = "alloc")]
pub fn squad<T: FloatScalar>(
    rotors: &[Quaternion<T>],
    t_in: &[T],
    t_out: &[T],
) -> Result<Vec<Quaternion<T>>, InterpError> {
    DynSquad::new(t_in.to_vec(), rotors.to_vec())?.eval_many(t_out)
}
