//! # linviz
//!
//! Numerical core for two interactive linear algebra visualizations:
//!
//! - an explorer of 2x2 matrices acting on the plane, with eigenvectors and
//!   the trajectories of complex eigenvalues ([`linalg`], [`explorer`]),
//! - a decomposition of synthetic RGB images into color-space directions with
//!   the SVD ([`image`], [`svd`]).

#[doc(inline)]
pub use linviz_linalg as linalg;

#[doc(inline)]
pub use linviz_image as image;

#[doc(inline)]
pub use linviz_svd as svd;

#[doc(inline)]
pub use linviz_explorer as explorer;
