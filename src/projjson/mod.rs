//! A typed model of [PROJJSON](https://proj.org/specifications/projjson.html) coordinate
//! reference systems.
//!
//! All types implement [`serde::Deserialize`], so a tree parsed with `serde_json` converts with
//! [`Crs::from_projjson`]. Fields irrelevant to WKT output (e.g. `$schema`) are ignored.

mod coordinate_system;
mod crs;
mod datum;
mod operation;
mod unit;
mod usage;

pub use coordinate_system::{Axis, CoordinateSystem, Meridian};
pub use crs::{
    BoundCrs, CompoundCrs, Crs, DerivedGeodeticCrs, DerivedGeodeticCrsKind, GeodeticCrs,
    GeodeticCrsKind, ProjectedCrs, VerticalCrs,
};
pub use datum::{
    DatumEnsemble, DatumOrEnsemble, Ellipsoid, EnsembleMember, GeodeticReferenceFrame,
    PrimeMeridian, VerticalReferenceFrame, DYNAMIC_GEODETIC_REFERENCE_FRAME,
    DYNAMIC_VERTICAL_REFERENCE_FRAME,
};
pub use operation::{AbridgedTransformation, Conversion, Method, Parameter, ParameterValue};
pub use unit::{Measure, Unit, UnitDefinition, UnitKind, WellKnownUnit, DEG_TO_RAD};
pub use usage::{BBox, Id, IdCode, ObjectUsage, Usage};
