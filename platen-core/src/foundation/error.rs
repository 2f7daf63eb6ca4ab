/// Convenience result type used across Platen.
pub type PlatenResult<T> = Result<T, PlatenError>;

/// Top-level error taxonomy used by layout APIs.
///
/// Every variant is terminal: these are configuration and usage errors, not
/// transient failures, and they propagate to the caller unmodified.
#[derive(thiserror::Error, Debug)]
pub enum PlatenError {
    /// Malformed or incomplete layout configuration.
    #[error("layout config error: {0}")]
    Config(String),

    /// Two configured placeholders occupy intersecting regions.
    #[error("placeholder [{incoming}] overlaps with placeholder [{existing}]")]
    Overlap {
        /// Name of the placeholder being validated.
        incoming: String,
        /// Name of the previously validated placeholder it intersects.
        existing: String,
    },

    /// An operation referenced a placeholder name absent from the layout.
    #[error("unknown placeholder [{0}]")]
    UnknownPlaceholder(String),

    /// An overlay's dimensions do not match its target placeholder.
    #[error(
        "image with size ({actual_width}, {actual_height}) not compatible with \
         placeholder [{name}] size ({expected_width}, {expected_height})"
    )]
    IncompatibleImage {
        /// Target placeholder name.
        name: String,
        /// Width of the offered overlay image.
        actual_width: u32,
        /// Height of the offered overlay image.
        actual_height: u32,
        /// Width the placeholder requires.
        expected_width: u32,
        /// Height the placeholder requires.
        expected_height: u32,
    },

    /// The named placeholder already received an overlay.
    #[error("placeholder [{0}] already has a component applied")]
    DuplicateApplication(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlatenError {
    /// Build a [`PlatenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
