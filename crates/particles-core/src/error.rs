use thiserror::Error;

/// Rejected field, trail or viewport configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("`{name}` must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("disperse radius {disperse} must be smaller than influence radius {influence}")]
    RadiiOutOfOrder { disperse: f32, influence: f32 },

    #[error("`{name}` range is inverted: [{min}, {max})")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("`{name}` must lie in [0, 1], got {value}")]
    NotAFraction { name: &'static str, value: f32 },

    #[error("particle count must be non-zero")]
    NoParticles,

    #[error("trail needs at least two points, got {0}")]
    TrailTooShort(usize),

    #[error("viewport is empty ({width}x{height} px)")]
    EmptyViewport { width: f32, height: f32 },
}

pub type Result<T, E = ParamsError> = std::result::Result<T, E>;
