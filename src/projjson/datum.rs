use serde::Deserialize;

use crate::error::{ProjJsonError, Result};
use crate::projjson::{Measure, ObjectUsage};

/// `type` tag of a geodetic frame with a frame reference epoch.
pub const DYNAMIC_GEODETIC_REFERENCE_FRAME: &str = "DynamicGeodeticReferenceFrame";

/// `type` tag of a vertical frame with a frame reference epoch.
pub const DYNAMIC_VERTICAL_REFERENCE_FRAME: &str = "DynamicVerticalReferenceFrame";

/// A geodetic datum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeodeticReferenceFrame {
    /// `GeodeticReferenceFrame` or `DynamicGeodeticReferenceFrame`.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Datum name.
    pub name: String,

    /// The reference ellipsoid.
    pub ellipsoid: Option<Ellipsoid>,

    /// The prime meridian; Greenwich when absent.
    pub prime_meridian: Option<PrimeMeridian>,

    /// Epoch of a dynamic frame, as a decimal year.
    pub frame_reference_epoch: Option<f64>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

impl GeodeticReferenceFrame {
    /// Whether this is a dynamic reference frame.
    pub fn is_dynamic(&self) -> bool {
        self.kind.as_deref() == Some(DYNAMIC_GEODETIC_REFERENCE_FRAME)
    }
}

/// A vertical datum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerticalReferenceFrame {
    /// `VerticalReferenceFrame` or `DynamicVerticalReferenceFrame`.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Datum name.
    pub name: String,

    /// Epoch of a dynamic frame, as a decimal year.
    pub frame_reference_epoch: Option<f64>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

impl VerticalReferenceFrame {
    /// Whether this is a dynamic reference frame.
    pub fn is_dynamic(&self) -> bool {
        self.kind.as_deref() == Some(DYNAMIC_VERTICAL_REFERENCE_FRAME)
    }
}

/// A collection of datum realizations treated as one datum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatumEnsemble {
    /// Ensemble name.
    pub name: String,

    /// The realizations, in order.
    #[serde(default)]
    pub members: Vec<EnsembleMember>,

    /// The ellipsoid shared by all members; only present for geodetic ensembles.
    pub ellipsoid: Option<Ellipsoid>,

    /// Positional accuracy in metres, kept as written.
    pub accuracy: Option<String>,

    /// Usage, identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A member of a [`DatumEnsemble`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnsembleMember {
    /// Member name.
    pub name: String,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A reference ellipsoid.
///
/// Exactly one of `semi_minor_axis` and `inverse_flattening` is expected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ellipsoid {
    /// Ellipsoid name.
    pub name: String,

    /// Semi-major axis, in metres unless stated otherwise.
    pub semi_major_axis: Measure,

    /// Semi-minor axis, in the unit of the semi-major axis.
    pub semi_minor_axis: Option<Measure>,

    /// Inverse flattening.
    pub inverse_flattening: Option<f64>,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

/// A prime meridian.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrimeMeridian {
    /// Meridian name.
    pub name: String,

    /// Longitude from Greenwich, in degrees unless stated otherwise.
    #[serde(default)]
    pub longitude: Measure,

    /// Identifiers and remarks.
    #[serde(flatten)]
    pub usage: ObjectUsage,
}

impl PrimeMeridian {
    /// The Greenwich meridian, implied wherever a datum does not name one.
    pub fn greenwich() -> Self {
        Self {
            name: "Greenwich".to_string(),
            longitude: Measure::new(0.0),
            usage: ObjectUsage::default(),
        }
    }
}

/// The reference of a geodetic or vertical CRS, which is either a datum or an ensemble.
#[derive(Debug)]
pub enum DatumOrEnsemble<'a, D> {
    /// A single datum.
    Datum(&'a D),
    /// A datum ensemble.
    Ensemble(&'a DatumEnsemble),
}

impl<'a, D> DatumOrEnsemble<'a, D> {
    /// Select the reference of the CRS named `crs_name`, which must hold exactly one of the two.
    pub(crate) fn select(
        datum: Option<&'a D>,
        ensemble: Option<&'a DatumEnsemble>,
        crs_name: &str,
    ) -> Result<Self> {
        match (datum, ensemble) {
            (Some(datum), None) => Ok(Self::Datum(datum)),
            (None, Some(ensemble)) => Ok(Self::Ensemble(ensemble)),
            (Some(_), Some(_)) => Err(ProjJsonError::ConflictingFields(format!(
                "datum and datum_ensemble both present in {crs_name}"
            ))),
            (None, None) => Err(ProjJsonError::MissingRequiredField(format!(
                "datum or datum_ensemble in {crs_name}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn dynamic_frames() {
        let frame: GeodeticReferenceFrame = serde_json::from_value(json!({
            "type": "DynamicGeodeticReferenceFrame",
            "name": "International Terrestrial Reference Frame 2014",
            "frame_reference_epoch": 2010,
            "ellipsoid": {
                "name": "GRS 1980",
                "semi_major_axis": 6378137,
                "inverse_flattening": 298.257222101
            }
        }))
        .unwrap();
        assert!(frame.is_dynamic());
        assert_eq!(frame.frame_reference_epoch, Some(2010.0));

        let frame: VerticalReferenceFrame =
            serde_json::from_value(json!({"name": "EGM2008 geoid"})).unwrap();
        assert!(!frame.is_dynamic());
    }

    #[test]
    fn select_datum() {
        let ensemble: DatumEnsemble = serde_json::from_value(json!({"name": "E"})).unwrap();
        let frame = VerticalReferenceFrame {
            kind: None,
            name: "V".to_string(),
            frame_reference_epoch: None,
            usage: ObjectUsage::default(),
        };
        assert!(matches!(
            DatumOrEnsemble::select(Some(&frame), None, "crs"),
            Ok(DatumOrEnsemble::Datum(_))
        ));
        assert!(matches!(
            DatumOrEnsemble::<VerticalReferenceFrame>::select(None, Some(&ensemble), "crs"),
            Ok(DatumOrEnsemble::Ensemble(_))
        ));
        assert!(matches!(
            DatumOrEnsemble::select(Some(&frame), Some(&ensemble), "crs"),
            Err(ProjJsonError::ConflictingFields(_))
        ));
        assert!(matches!(
            DatumOrEnsemble::<VerticalReferenceFrame>::select(None, None, "crs"),
            Err(ProjJsonError::MissingRequiredField(_))
        ));
    }

    #[test]
    fn prime_meridian_longitude_defaults_to_zero() {
        let pm: PrimeMeridian = serde_json::from_value(json!({"name": "Greenwich"})).unwrap();
        assert_eq!(pm, PrimeMeridian::greenwich());
    }
}
