use serde::Deserialize;

use crate::projjson::{ObjectUsage, Unit};

/// A coordinate conversion, such as a map projection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversion {
    /// Conversion name.
    pub name: String,

    /// The operation method.
    pub method: Method,

    /// Method parameters, in order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// The transformation attached to a bound CRS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbridgedTransformation {
    /// Transformation name.
    pub name: String,

    /// The operation method.
    pub method: Method,

    /// Method parameters, in order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// An operation method.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Method {
    /// Method name, e.g. `Transverse Mercator`.
    pub name: String,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A named operation parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,

    /// Numeric value or file name.
    pub value: ParameterValue,

    /// Unit of a numeric value.
    pub unit: Option<Unit>,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// The value of a [`Parameter`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// A number, expressed in the parameter unit.
    Numeric(f64),

    /// The name of a grid or other parameter file.
    File(String),
}
