use serde::Deserialize;

use crate::projjson::{Measure, ObjectUsage, Unit};

/// A coordinate system: its subtype and ordered axes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoordinateSystem {
    /// Subtype such as `ellipsoidal`, `Cartesian` or `vertical`.
    pub subtype: String,

    /// The axes, in coordinate order.
    #[serde(default)]
    pub axis: Vec<Axis>,
}

/// A coordinate system axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Axis {
    /// Axis name, e.g. `Geodetic latitude`.
    pub name: String,

    /// Axis abbreviation, e.g. `Lat`.
    pub abbreviation: String,

    /// Direction, e.g. `north`.
    pub direction: String,

    /// Unit of the coordinate.
    pub unit: Option<Unit>,

    /// Meridian along which a polar axis points.
    pub meridian: Option<Meridian>,
}

/// The meridian of an [`Axis`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meridian {
    /// Longitude, in degrees unless stated otherwise.
    pub longitude: Measure,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}
