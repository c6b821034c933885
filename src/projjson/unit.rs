use serde::Deserialize;

use crate::error::{ProjJsonError, Result};
use crate::projjson::ObjectUsage;

/// Factor converting degrees to radians, as written in WKT.
pub const DEG_TO_RAD: f64 = 0.0174532925199433;

/// A unit of measure: either one of the names PROJJSON allows as a bare string, or a full unit
/// object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    /// A bare unit name, e.g. `"metre"`.
    Named(String),

    /// An explicit unit object.
    Defined(UnitDefinition),
}

impl From<WellKnownUnit> for Unit {
    fn from(value: WellKnownUnit) -> Self {
        Self::Named(value.name().to_string())
    }
}

/// An explicit unit object, `{"type": "LinearUnit", "name": "US survey foot", ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnitDefinition {
    /// The unit type tag, e.g. `AngularUnit`.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Unit name.
    pub name: String,

    /// Factor converting a value in this unit to the SI unit of its kind.
    pub conversion_factor: Option<f64>,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// The semantic kind of a unit, which selects the WKT2 unit keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// `AngularUnit`
    Angular,
    /// `LinearUnit`
    Linear,
    /// `ScaleUnit`
    Scale,
    /// `TimeUnit`
    Time,
    /// `ParametricUnit`
    Parametric,
    /// `Unit`
    Generic,
}

impl UnitKind {
    /// Parse a PROJJSON unit `type` tag.
    pub fn from_tag(tag: Option<&str>) -> Result<Self> {
        let kind = match tag {
            Some("AngularUnit") => Self::Angular,
            Some("LinearUnit") => Self::Linear,
            Some("ScaleUnit") => Self::Scale,
            Some("TimeUnit") => Self::Time,
            Some("ParametricUnit") => Self::Parametric,
            Some("Unit") => Self::Generic,
            other => {
                return Err(ProjJsonError::UnknownUnitType(
                    other.unwrap_or("<missing>").to_string(),
                ))
            }
        };
        Ok(kind)
    }

    /// The PROJJSON `type` tag of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Angular => "AngularUnit",
            Self::Linear => "LinearUnit",
            Self::Scale => "ScaleUnit",
            Self::Time => "TimeUnit",
            Self::Parametric => "ParametricUnit",
            Self::Generic => "Unit",
        }
    }
}

/// The units PROJJSON allows to be referenced by bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownUnit {
    /// Angular degree.
    Degree,
    /// Metre.
    Metre,
    /// Dimensionless scale of 1.
    Unity,
}

impl WellKnownUnit {
    /// Look up a bare unit name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "degree" => Some(Self::Degree),
            "metre" => Some(Self::Metre),
            "unity" => Some(Self::Unity),
            _ => None,
        }
    }

    /// The unit name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Metre => "metre",
            Self::Unity => "unity",
        }
    }

    /// Factor converting to the SI unit of the same kind.
    pub fn conversion_factor(&self) -> f64 {
        match self {
            Self::Degree => DEG_TO_RAD,
            Self::Metre | Self::Unity => 1.0,
        }
    }

    /// The kind of the unit.
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Degree => UnitKind::Angular,
            Self::Metre => UnitKind::Linear,
            Self::Unity => UnitKind::Scale,
        }
    }
}

/// A numeric value with an optional unit.
///
/// PROJJSON writes these either as a bare number, whose unit is implied by the field, or as an
/// object `{"value": 1, "unit": ...}`. Some producers flatten the unit into the object as
/// `{"value": 1, "name": ..., "conversion_factor": ...}`; all three shapes parse to this type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "MeasureRepr")]
pub struct Measure {
    /// The value, expressed in `unit`.
    pub value: f64,

    /// The unit; `None` means the default unit of the field.
    pub unit: Option<Unit>,
}

impl Measure {
    /// A value in the default unit of its field.
    pub fn new(value: f64) -> Self {
        Self { value, unit: None }
    }

    /// A value in an explicit unit.
    pub fn with_unit(value: f64, unit: impl Into<Unit>) -> Self {
        Self {
            value,
            unit: Some(unit.into()),
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MeasureRepr {
    Number(f64),
    Object {
        value: f64,
        unit: Option<Unit>,
        name: Option<String>,
        conversion_factor: Option<f64>,
    },
}

impl From<MeasureRepr> for Measure {
    fn from(value: MeasureRepr) -> Self {
        match value {
            MeasureRepr::Number(value) => Self::new(value),
            MeasureRepr::Object {
                value,
                unit: Some(unit),
                ..
            } => Self::with_unit(value, unit),
            MeasureRepr::Object {
                value,
                unit: None,
                name: Some(name),
                conversion_factor,
            } => Self::with_unit(
                value,
                Unit::Defined(UnitDefinition {
                    kind: None,
                    name,
                    conversion_factor,
                    usage: ObjectUsage::default(),
                }),
            ),
            MeasureRepr::Object { value, .. } => Self::new(value),
        }
    }
}
