use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::projjson::{
    AbridgedTransformation, Conversion, CoordinateSystem, DatumEnsemble, DatumOrEnsemble,
    GeodeticReferenceFrame, ObjectUsage, VerticalReferenceFrame,
};

/// A coordinate reference system, one variant per PROJJSON CRS `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    /// `GeographicCRS` or `GeodeticCRS`.
    Geodetic(GeodeticCrs),

    /// `DerivedGeographicCRS` or `DerivedGeodeticCRS`.
    DerivedGeodetic(DerivedGeodeticCrs),

    /// `ProjectedCRS`.
    Projected(ProjectedCrs),

    /// `VerticalCRS`.
    Vertical(VerticalCrs),

    /// `CompoundCRS`.
    Compound(CompoundCrs),

    /// `BoundCRS`.
    Bound(BoundCrs),

    /// Any other `type`, kept so that conversion can report it.
    Unsupported(String),
}

impl Crs {
    /// Construct from a parsed PROJJSON object.
    pub fn from_projjson(value: &Value) -> Result<Self> {
        Ok(Crs::deserialize(value)?)
    }

    /// The PROJJSON `type` tag of this CRS.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Geodetic(crs) => crs.kind.type_name(),
            Self::DerivedGeodetic(crs) => crs.kind.type_name(),
            Self::Projected(_) => "ProjectedCRS",
            Self::Vertical(_) => "VerticalCRS",
            Self::Compound(_) => "CompoundCRS",
            Self::Bound(_) => "BoundCRS",
            Self::Unsupported(type_name) => type_name,
        }
    }
}

impl<'de> Deserialize<'de> for Crs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let type_name = match value.get("type") {
            Some(Value::String(type_name)) => type_name.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let crs = match type_name.as_str() {
            "GeographicCRS" | "GeodeticCRS" => {
                Crs::Geodetic(GeodeticCrs::deserialize(value).map_err(D::Error::custom)?)
            }
            "DerivedGeographicCRS" | "DerivedGeodeticCRS" => Crs::DerivedGeodetic(
                DerivedGeodeticCrs::deserialize(value).map_err(D::Error::custom)?,
            ),
            "ProjectedCRS" => {
                Crs::Projected(ProjectedCrs::deserialize(value).map_err(D::Error::custom)?)
            }
            "VerticalCRS" => {
                Crs::Vertical(VerticalCrs::deserialize(value).map_err(D::Error::custom)?)
            }
            "CompoundCRS" => {
                Crs::Compound(CompoundCrs::deserialize(value).map_err(D::Error::custom)?)
            }
            "BoundCRS" => Crs::Bound(BoundCrs::deserialize(value).map_err(D::Error::custom)?),
            _ => Crs::Unsupported(type_name),
        };
        Ok(crs)
    }
}

/// Whether a geodetic CRS is geographic (ellipsoidal) or not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GeodeticCrsKind {
    /// `GeographicCRS`
    #[serde(rename = "GeographicCRS")]
    Geographic,

    /// `GeodeticCRS`
    #[default]
    #[serde(rename = "GeodeticCRS")]
    Geodetic,
}

impl GeodeticCrsKind {
    /// The PROJJSON `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Geographic => "GeographicCRS",
            Self::Geodetic => "GeodeticCRS",
        }
    }
}

/// A geographic or geodetic CRS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeodeticCrs {
    /// Geographic or geodetic; geodetic when the tag is absent, as may happen for base CRSes.
    #[serde(rename = "type", default)]
    pub kind: GeodeticCrsKind,

    /// CRS name.
    pub name: String,

    /// The datum, if not an ensemble.
    pub datum: Option<GeodeticReferenceFrame>,

    /// The datum ensemble, if not a single datum.
    pub datum_ensemble: Option<DatumEnsemble>,

    /// The coordinate system. May be absent for the base CRS of another CRS.
    pub coordinate_system: Option<CoordinateSystem>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

impl GeodeticCrs {
    /// The datum or ensemble of this CRS.
    pub fn datum_or_ensemble(&self) -> Result<DatumOrEnsemble<'_, GeodeticReferenceFrame>> {
        DatumOrEnsemble::select(
            self.datum.as_ref(),
            self.datum_ensemble.as_ref(),
            &self.name,
        )
    }
}

/// Whether a derived geodetic CRS is geographic or not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum DerivedGeodeticCrsKind {
    /// `DerivedGeographicCRS`
    #[serde(rename = "DerivedGeographicCRS")]
    Geographic,

    /// `DerivedGeodeticCRS`
    #[default]
    #[serde(rename = "DerivedGeodeticCRS")]
    Geodetic,
}

impl DerivedGeodeticCrsKind {
    /// The PROJJSON `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Geographic => "DerivedGeographicCRS",
            Self::Geodetic => "DerivedGeodeticCRS",
        }
    }
}

/// A geodetic CRS derived from another one by a conversion, e.g. a rotated pole.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DerivedGeodeticCrs {
    /// Geographic or geodetic.
    #[serde(rename = "type", default)]
    pub kind: DerivedGeodeticCrsKind,

    /// CRS name.
    pub name: String,

    /// The CRS this one is derived from.
    pub base_crs: GeodeticCrs,

    /// The conversion from the base CRS.
    pub conversion: Conversion,

    /// The coordinate system.
    pub coordinate_system: CoordinateSystem,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A projected CRS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectedCrs {
    /// CRS name.
    pub name: String,

    /// The geodetic CRS that is projected.
    pub base_crs: GeodeticCrs,

    /// The map projection.
    pub conversion: Conversion,

    /// The coordinate system.
    pub coordinate_system: CoordinateSystem,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A vertical CRS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerticalCrs {
    /// CRS name.
    pub name: String,

    /// The datum, if not an ensemble.
    pub datum: Option<VerticalReferenceFrame>,

    /// The datum ensemble, if not a single datum.
    pub datum_ensemble: Option<DatumEnsemble>,

    /// The coordinate system.
    pub coordinate_system: CoordinateSystem,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

impl VerticalCrs {
    /// The datum or ensemble of this CRS.
    pub fn datum_or_ensemble(&self) -> Result<DatumOrEnsemble<'_, VerticalReferenceFrame>> {
        DatumOrEnsemble::select(
            self.datum.as_ref(),
            self.datum_ensemble.as_ref(),
            &self.name,
        )
    }
}

/// A CRS made of several component CRSes, e.g. horizontal + vertical.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompoundCrs {
    /// CRS name.
    pub name: String,

    /// The components, in order.
    pub components: Vec<Crs>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A CRS bound to a target CRS by a transformation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoundCrs {
    /// The CRS being described.
    pub source_crs: Box<Crs>,

    /// The hub CRS the transformation leads to.
    pub target_crs: Box<Crs>,

    /// The transformation from source to target.
    pub transformation: AbridgedTransformation,
}
