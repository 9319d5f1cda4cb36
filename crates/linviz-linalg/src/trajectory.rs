//! Sampled trajectories of linear systems along a complex eigenpair.
//!
//! For a complex eigenvalue `λ = a + ib` with eigenvector `v = r + iw` every
//! real solution of the system is the real part of `c · λ(t) · v` for some
//! complex coefficient `c`. Two flavours are provided:
//!
//! * continuous time, `x(t) = e^{At} x0` with `x0 = r`,
//! * discrete time, `x_t = A^t x0` interpolated through fractional powers of
//!   the eigenvalue in polar form.

use std::f64::consts::PI;

use crate::{ComplexEigenpair, LinalgError, Vector2};

/// Number of intervals a trajectory is divided into.
pub const TRAJECTORY_STEPS: usize = 100;

/// Number of points of a trajectory, both endpoints included.
pub const TRAJECTORY_SAMPLES: usize = TRAJECTORY_STEPS + 1;

/// Time span of a continuous-time trajectory.
pub const CONTINUOUS_TIME_RANGE: f64 = 1.0;

/// Below this `|det|` the eigenvector parts are treated as parallel.
pub const LINEAR_DEPENDENCE_TOLERANCE: f64 = 1e-10;

/// Initial state used for discrete-time trajectories.
pub const DEFAULT_INITIAL_VECTOR: Vector2 = Vector2::new(1.0, 0.0);

/// An ordered sequence of sampled positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    points: Vec<Vector2>,
    time_range: f64,
}

impl Trajectory {
    /// The sampled positions, ordered by time.
    #[inline]
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// The time spanned from the first to the last sample.
    #[inline]
    pub fn time_range(&self) -> f64 {
        self.time_range
    }

    /// The number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consume the trajectory and return its positions.
    pub fn into_points(self) -> Vec<Vector2> {
        self.points
    }

    fn sample(time_range: f64, f: impl Fn(f64) -> Vector2) -> Self {
        let points = (0..=TRAJECTORY_STEPS)
            .map(|i| f(i as f64 / TRAJECTORY_STEPS as f64 * time_range))
            .collect();
        Self { points, time_range }
    }
}

/// Continuous-time trajectory `e^{At} r` for `t` in `[0, 1]`.
///
/// ```text
/// x(t) = e^{at} (cos(bt) r - sin(bt) w)
/// ```
///
/// # Example
///
/// ```
/// use linviz_linalg::{continuous_trajectory, EigenDecomposition, Matrix2};
///
/// let eigen = EigenDecomposition::from_matrix(&Matrix2::new(0.0, -1.0, 1.0, 0.0)).unwrap();
/// let trajectory = continuous_trajectory(eigen.complex_pair().unwrap());
/// assert_eq!(trajectory.len(), 101);
/// ```
pub fn continuous_trajectory(pair: &ComplexEigenpair) -> Trajectory {
    let ComplexEigenpair {
        real_value,
        imag_value,
        real_vector,
        imag_vector,
    } = *pair;

    Trajectory::sample(CONTINUOUS_TIME_RANGE, |t| {
        let growth = (real_value * t).exp();
        let (sin_part, cos_part) = (imag_value * t).sin_cos();
        growth * (cos_part * real_vector - sin_part * imag_vector)
    })
}

/// Discrete-time trajectory `A^t x0` over one full turn of the eigenvalue.
///
/// The initial vector is expressed as `x0 = α r - β w`, after which
///
/// ```text
/// x(t) = |λ|^t ((α cos θt - β sin θt) r - (α sin θt + β cos θt) w),  θ = arg λ
/// ```
///
/// for `t` in `[0, 2π / θ]`. At integer `t` this equals `A^t x0`.
///
/// # Arguments
///
/// * `pair` - The complex eigenpair of `A`.
/// * `initial` - The state at `t = 0`, usually [`DEFAULT_INITIAL_VECTOR`].
///
/// # Errors
///
/// [`LinalgError::LinearlyDependentBasis`] when `r` and `w` are (nearly)
/// parallel and `x0` cannot be expressed in their basis.
pub fn discrete_trajectory(
    pair: &ComplexEigenpair,
    initial: Vector2,
) -> Result<Trajectory, LinalgError> {
    let r = pair.real_vector;
    let w = pair.imag_vector;

    let magnitude = pair.magnitude();
    let theta = pair.argument();

    let det = -r.x * w.y + r.y * w.x;
    if det.abs() < LINEAR_DEPENDENCE_TOLERANCE {
        return Err(LinalgError::LinearlyDependentBasis { determinant: det });
    }
    let alpha = (-initial.x * w.y + initial.y * w.x) / det;
    let beta = (-initial.x * r.y + initial.y * r.x) / det;

    let time_range = 2.0 * PI / theta;

    Ok(Trajectory::sample(time_range, |t| {
        let growth = magnitude.powf(t);
        let (sin_term, cos_term) = (theta * t).sin_cos();

        let coeff_u = alpha * cos_term - beta * sin_term;
        let coeff_w = -(alpha * sin_term + beta * cos_term);

        growth * (coeff_u * r + coeff_w * w)
    }))
}
