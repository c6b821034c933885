//! Defines [`ProjJsonError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::wkt::WktVersion;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProjJsonError {
    /// The requested WKT dialect is neither `WKT1` nor `WKT2:2019`.
    #[error("Unsupported WKT format: {0}")]
    UnsupportedFormat(String),

    /// The `type` tag of a CRS node is not a supported CRS variant.
    #[error("Unsupported object type: {0}")]
    UnsupportedObjectType(String),

    /// A construct that only exists in newer dialects was requested for an older one.
    #[error("{object} unsupported in {version}")]
    UnsupportedInDialect {
        /// The PROJJSON object type that cannot be written.
        object: String,
        /// The requested dialect.
        version: WktVersion,
    },

    /// A field needed to write the object is absent.
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Two mutually exclusive fields are both present.
    #[error("Conflicting fields: {0}")]
    ConflictingFields(String),

    /// The semi-major and semi-minor axis of an ellipsoid use different units.
    #[error("Unit or conversion factor mismatch: {semi_major} vs {semi_minor}")]
    UnitMismatch {
        /// Unit of the semi-major axis.
        semi_major: String,
        /// Unit of the semi-minor axis.
        semi_minor: String,
    },

    /// WKT1 cannot express an ellipsoid axis in anything but metres.
    #[error("Conversion factor {0} != 1 unsupported for WKT1")]
    UnsupportedUnitConversion(f64),

    /// A unit object carries a `type` that has no WKT keyword.
    #[error("Unexpected unit type: {0}")]
    UnknownUnitType(String),

    /// The input tree does not have the structure of a PROJJSON object.
    #[error("Invalid PROJJSON: {0}")]
    InvalidProjJson(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ProjJsonError>;
