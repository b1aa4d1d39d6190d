//! Errors reported by geometry operations
//!
//! Absence of a result (no overlap, fully-clipped segment, empty point
//! set) is never an error; those outcomes are modeled with `Option`.
//! Errors are reserved for coordinate arithmetic that cannot produce a
//! representable value.

/// Coordinate arithmetic failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Integer coordinate arithmetic left the representable range,
    /// or a finite float result exceeded `f32` range
    #[error("coordinate arithmetic overflowed the numeric domain")]
    Overflow,

    /// Floating-point coordinate arithmetic produced NaN or infinity
    #[error("coordinate arithmetic produced a non-finite value")]
    NonFinite,
}
