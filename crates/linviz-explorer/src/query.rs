//! Round trip of the explorer state through a URL query string.
//!
//! The format is `matrix=a11,a12,a21,a22&vector=v1,v2`, with the commas
//! optionally percent-encoded as `%2C`. Parsing never fails: a missing or
//! malformed parameter falls back to its default and logs a warning.

use linviz_linalg::{Matrix2, Vector2};

use crate::config::{DEFAULT_MATRIX, DEFAULT_VECTOR};

/// The matrix and vector to start the explorer from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialState {
    /// The transformation matrix.
    pub matrix: Matrix2,
    /// The input vector.
    pub vector: Vector2,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            matrix: DEFAULT_MATRIX,
            vector: DEFAULT_VECTOR,
        }
    }
}

/// Parse `n` comma separated finite numbers.
fn parse_numbers<const N: usize>(value: &str) -> Option<[f64; N]> {
    let decoded = value.replace("%2C", ",").replace("%2c", ",");
    let parts = decoded.split(',').collect::<Vec<_>>();
    if parts.len() != N {
        return None;
    }

    let mut out = [0.0; N];
    for (dst, part) in out.iter_mut().zip(parts) {
        let v = part.trim().parse::<f64>().ok()?;
        if !v.is_finite() {
            return None;
        }
        *dst = v;
    }
    Some(out)
}

/// Read the initial matrix and vector from a query string.
///
/// A leading `?` is ignored, as are unknown parameters.
///
/// # Example
///
/// ```
/// use linviz_explorer::query::parse_query;
///
/// let state = parse_query("?matrix=0,-1,1,0&vector=1,2");
/// assert_eq!(state.matrix.to_array(), [0.0, -1.0, 1.0, 0.0]);
/// assert_eq!(state.vector.to_array(), [1.0, 2.0]);
/// ```
pub fn parse_query(query: &str) -> InitialState {
    let mut state = InitialState::default();

    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "matrix" => match parse_numbers::<4>(value) {
                Some(m) => state.matrix = Matrix2::from_array(m),
                None => log::warn!("invalid matrix parameter {value:?}, using the default"),
            },
            "vector" => match parse_numbers::<2>(value) {
                Some(v) => state.vector = Vector2::from_array(v),
                None => log::warn!("invalid vector parameter {value:?}, using the default"),
            },
            _ => {}
        }
    }

    state
}

/// Write a matrix and a vector as a query string, without the leading `?`.
///
/// The commas are percent-encoded the way browsers encode search parameters.
pub fn to_query(matrix: &Matrix2, vector: Vector2) -> String {
    let [a11, a12, a21, a22] = matrix.to_array();
    format!(
        "matrix={a11}%2C{a12}%2C{a21}%2C{a22}&vector={}%2C{}",
        vector.x, vector.y
    )
}
