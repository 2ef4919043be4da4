use thiserror::Error;

/// Errors from parsing a [`TileCoord`](crate::TileCoord) out of text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// No `,` between the x and y components
    #[error("missing ',' separator in tile coordinate {0:?}")]
    MissingSeparator(String),

    /// More than two comma-separated components
    #[error("too many components in tile coordinate {0:?}")]
    TooManyComponents(String),

    /// A component is not a valid `i32`
    #[error("invalid {axis} component {value:?} in tile coordinate")]
    InvalidComponent { axis: char, value: String },
}

/// Errors from loading a [`GridConfig`](crate::GridConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}
