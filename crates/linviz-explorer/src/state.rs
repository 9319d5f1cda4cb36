use linviz_linalg::trajectory::DEFAULT_INITIAL_VECTOR;
use linviz_linalg::{
    calculate_from_transforms, calculate_transformation, discrete_trajectory, EigenDecomposition,
    LinalgError, Matrix2, Trajectory, Transform, Transformation, Vector2,
};
use serde::Serialize;

use crate::config::{MATRIX_MAX, MATRIX_MIN, MATRIX_STEP, SCALE_RANGE};
use crate::grid::Grid;
use crate::query::{self, InitialState};
use crate::screen::Arrow;

/// One of the two basis axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The first basis vector.
    X,
    /// The second basis vector.
    Y,
}

/// An element of a 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixElement {
    /// Row 1, column 1.
    A11,
    /// Row 1, column 2.
    A12,
    /// Row 2, column 1.
    A21,
    /// Row 2, column 2.
    A22,
}

/// Everything a renderer needs to draw the explorer, derived from the state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// The transformation matrix.
    pub matrix: Matrix2,
    /// The input vector.
    pub vector: Vector2,
    /// The transformed vector `A v`.
    pub transformed: Vector2,
    /// Basis vectors, rotations and determinant of the matrix.
    pub transformation: Transformation,
    /// Positions of the rotation and scale sliders.
    pub slider_transform: Transform,
    /// Eigenvalues and scaled eigenvectors of the matrix.
    pub eigen: EigenDecomposition,
    /// Discrete-time trajectory from `(1, 0)`, for complex eigenvalues only.
    pub trajectory: Option<Trajectory>,
    /// Grid lines along the transformed x axis.
    pub x_grid: Grid,
    /// Grid lines along the transformed y axis.
    pub y_grid: Grid,
    /// Screen geometry of `v`.
    pub vector_arrow: Arrow,
    /// Screen geometry of `A v`.
    pub transformed_arrow: Arrow,
    /// The state encoded as a query string.
    pub query: String,
}

impl Frame {
    fn compute(matrix: Matrix2, vector: Vector2, sliders: Transform) -> Result<Self, LinalgError> {
        let transformed = matrix * vector;
        let transformation = calculate_transformation(&matrix);
        let eigen = EigenDecomposition::from_matrix(&matrix)?;

        let trajectory = match eigen.complex_pair() {
            Some(pair) => match discrete_trajectory(pair, DEFAULT_INITIAL_VECTOR) {
                Ok(trajectory) => Some(trajectory),
                Err(err) => {
                    log::warn!("skipping trajectory: {err}");
                    None
                }
            },
            None => None,
        };

        let x_grid = Grid::horizontal(sliders.rotation_x, transformation.basis_y);
        let y_grid = Grid::vertical(sliders.rotation_y, transformation.basis_x);

        Ok(Self {
            matrix,
            vector,
            transformed,
            transformation,
            slider_transform: sliders,
            eigen,
            trajectory,
            x_grid,
            y_grid,
            vector_arrow: Arrow::from_vector(vector),
            transformed_arrow: Arrow::from_vector(transformed),
            query: query::to_query(&matrix, vector),
        })
    }
}

/// The explorer inputs: a matrix, a vector and the slider positions.
///
/// Editing the matrix moves the sliders to match it. Moving a slider rebuilds
/// the matrix from all four slider values. Every setter returns a freshly
/// computed [`Frame`].
///
/// # Example
///
/// ```
/// use linviz_explorer::{Axis, ExplorerState};
///
/// let mut state = ExplorerState::default();
/// let frame = state.set_rotation(Axis::X, 90.0).unwrap();
/// // tan(90°) blows up, the matrix is returned as computed
/// assert!(frame.matrix.a21.abs() > 1e6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    matrix: Matrix2,
    vector: Vector2,
    transform: Transform,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(InitialState::default())
    }
}

impl ExplorerState {
    /// Start from a matrix and a vector.
    pub fn new(initial: InitialState) -> Self {
        Self {
            matrix: initial.matrix,
            vector: initial.vector,
            transform: Self::sliders_for(&initial.matrix),
        }
    }

    /// Start from a query string, see [`query::parse_query`].
    pub fn from_query(query: &str) -> Self {
        Self::new(query::parse_query(query))
    }

    fn sliders_for(matrix: &Matrix2) -> Transform {
        calculate_transformation(matrix).slider_transform(SCALE_RANGE)
    }

    /// The current matrix.
    pub fn matrix(&self) -> Matrix2 {
        self.matrix
    }

    /// The current vector.
    pub fn vector(&self) -> Vector2 {
        self.vector
    }

    /// The current slider positions.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Derive the frame for the current inputs.
    ///
    /// # Errors
    ///
    /// Propagates eigendecomposition failures. A trajectory that cannot be
    /// computed is logged and left out instead.
    pub fn frame(&self) -> Result<Frame, LinalgError> {
        Frame::compute(self.matrix, self.vector, self.transform)
    }

    /// Replace the matrix and move the sliders to match it.
    pub fn set_matrix(&mut self, matrix: Matrix2) -> Result<Frame, LinalgError> {
        self.matrix = matrix;
        self.transform = Self::sliders_for(&matrix);
        self.frame()
    }

    /// Change a single matrix element.
    pub fn set_matrix_element(
        &mut self,
        element: MatrixElement,
        value: f64,
    ) -> Result<Frame, LinalgError> {
        let mut matrix = self.matrix;
        match element {
            MatrixElement::A11 => matrix.a11 = value,
            MatrixElement::A12 => matrix.a12 = value,
            MatrixElement::A21 => matrix.a21 = value,
            MatrixElement::A22 => matrix.a22 = value,
        }
        self.set_matrix(matrix)
    }

    /// Move a matrix element slider.
    ///
    /// The value is snapped to the slider step and clamped to the slider
    /// range, unlike [`ExplorerState::set_matrix_element`] which takes it as
    /// typed.
    pub fn set_matrix_slider(
        &mut self,
        element: MatrixElement,
        value: f64,
    ) -> Result<Frame, LinalgError> {
        self.set_matrix_element(element, snap_to_slider(value))
    }

    /// Replace the input vector.
    pub fn set_vector(&mut self, vector: Vector2) -> Result<Frame, LinalgError> {
        self.vector = vector;
        self.frame()
    }

    /// Move a rotation slider, in degrees, and rebuild the matrix.
    pub fn set_rotation(&mut self, axis: Axis, degrees: f64) -> Result<Frame, LinalgError> {
        match axis {
            Axis::X => self.transform.rotation_x = degrees,
            Axis::Y => self.transform.rotation_y = degrees,
        }
        self.matrix = calculate_from_transforms(&self.transform);
        self.frame()
    }

    /// Move a scale slider and rebuild the matrix.
    pub fn set_scale(&mut self, axis: Axis, scale: f64) -> Result<Frame, LinalgError> {
        match axis {
            Axis::X => self.transform.scale_x = scale,
            Axis::Y => self.transform.scale_y = scale,
        }
        self.matrix = calculate_from_transforms(&self.transform);
        self.frame()
    }
}

fn snap_to_slider(value: f64) -> f64 {
    let steps_per_unit = MATRIX_STEP.recip().round();
    ((value * steps_per_unit).round() / steps_per_unit).clamp(MATRIX_MIN, MATRIX_MAX)
}
