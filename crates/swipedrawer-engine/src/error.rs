//! Error types for drawer construction and configuration.

/// Errors reported by the drawer API.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerError {
    /// No content surface was supplied before `build()`.
    MissingContent,
    /// Bits outside LEFT | TOP | RIGHT | BOTTOM, or a non-cardinal value where
    /// exactly one direction is required.
    InvalidDirection(u8),
    /// Damping factor outside (0, 1].
    InvalidFactor(f32),
    /// A measured size or container extent is negative.
    InvalidGeometry(&'static str),
}

impl std::fmt::Display for DrawerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerError::MissingContent => {
                write!(f, "Drawer has no content surface to drag")
            }
            DrawerError::InvalidDirection(bits) => {
                write!(f, "Invalid swipe direction bits: {:#06b}", bits)
            }
            DrawerError::InvalidFactor(factor) => {
                write!(f, "Damping factor {} is outside (0, 1]", factor)
            }
            DrawerError::InvalidGeometry(what) => write!(f, "Invalid geometry: {}", what),
        }
    }
}

impl std::error::Error for DrawerError {}

/// Result type for drawer operations.
pub type DrawerResult<T> = Result<T, DrawerError>;
