//! Normalization of values with units.

use crate::error::{ProjJsonError, Result};
use crate::projjson::{Measure, ObjectUsage, Unit, WellKnownUnit};

/// A value together with the name and SI conversion factor of its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quantity<'a> {
    pub value: f64,
    pub unit_name: &'a str,
    pub conversion_factor: f64,
    pub usage: Option<&'a ObjectUsage>,
}

/// A unit ready to be written as a unit node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedUnit<'a> {
    /// PROJJSON `type` tag; resolved to a keyword by the dialect.
    pub kind: Option<&'a str>,
    pub name: &'a str,
    pub conversion_factor: f64,
    pub usage: Option<&'a ObjectUsage>,
}

/// Resolve `measure` to a value, unit name and conversion factor.
///
/// Bare numbers take `default_unit`. The well-known names always map to their canonical factor;
/// explicit unit objects pass their factor through unchanged.
pub(crate) fn resolve_value_unit(
    measure: &Measure,
    default_unit: WellKnownUnit,
) -> Result<Quantity<'_>> {
    let (unit_name, conversion_factor, usage) = match &measure.unit {
        None => (default_unit.name(), default_unit.conversion_factor(), None),
        Some(unit) => {
            let unit = resolve_unit(unit)?;
            (unit.name, unit.conversion_factor, unit.usage)
        }
    };
    Ok(Quantity {
        value: measure.value,
        unit_name,
        conversion_factor,
        usage,
    })
}

/// Resolve a unit name or object.
pub(crate) fn resolve_unit(unit: &Unit) -> Result<ResolvedUnit<'_>> {
    match unit {
        Unit::Named(name) => {
            let known = WellKnownUnit::from_name(name).ok_or_else(|| {
                ProjJsonError::MissingRequiredField(format!(
                    "conversion_factor of unit '{name}'"
                ))
            })?;
            Ok(ResolvedUnit {
                kind: Some(known.kind().tag()),
                name: known.name(),
                conversion_factor: known.conversion_factor(),
                usage: None,
            })
        }
        Unit::Defined(definition) => {
            let conversion_factor = definition.conversion_factor.ok_or_else(|| {
                ProjJsonError::MissingRequiredField(format!(
                    "conversion_factor of unit '{}'",
                    definition.name
                ))
            })?;
            Ok(ResolvedUnit {
                kind: definition.kind.as_deref(),
                name: &definition.name,
                conversion_factor,
                usage: Some(&definition.usage),
            })
        }
    }
}
