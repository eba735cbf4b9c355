use thiserror::Error;

/// Every way a call into the cube model can be rejected. All of them are
/// detected before any state is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    #[error("Cube size must be positive")]
    ZeroSize,
    #[error("Cube size {size} is too large, its facelets cannot be numbered")]
    SizeTooLarge { size: usize },
    #[error("Invalid flat sequence length, expected {expected} facelets but got {actual}")]
    FlatLengthMismatch { expected: usize, actual: usize },
    #[error("Invalid face id, expected a value between 0 and 5 but got {0}")]
    InvalidFaceId(usize),
}

/// The category a `CubeError` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

impl CubeError {
    /// There is only one category of error: the caller passed something
    /// that does not describe a cube.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CubeError::ZeroSize
            | CubeError::SizeTooLarge { .. }
            | CubeError::FlatLengthMismatch { .. }
            | CubeError::InvalidFaceId(_) => ErrorKind::InvalidArgument,
        }
    }
}
