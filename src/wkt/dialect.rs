//! Keywords and presence rules of each WKT dialect.

use crate::error::Result;
use crate::projjson::{GeodeticCrsKind, UnitKind};
use crate::wkt::WktVersion;

/// Axis directions WKT1 can express; anything else is written as `OTHER`.
const WKT1_AXIS_DIRECTIONS: &[&str] = &["EAST", "NORTH", "WEST", "SOUTH", "UP", "DOWN"];

/// How one dialect spells and orders each construct.
#[derive(Debug)]
pub(crate) struct DialectRules {
    pub geographic_crs: &'static str,
    pub geodetic_crs: &'static str,
    /// Base CRS of a projected CRS, by geographic/geodetic.
    pub base_geographic_crs: &'static str,
    pub base_geodetic_crs: &'static str,
    pub projected_crs: &'static str,
    pub vertical_crs: &'static str,
    pub vertical_datum: &'static str,
    pub compound_crs: &'static str,
    pub ellipsoid: &'static str,
    pub identifier: &'static str,

    /// Numeric identifier codes are quoted like textual ones.
    pub quote_numeric_codes: bool,
    /// `USAGE`, `REMARK`, multiple ids and dynamic frame epochs are written.
    pub metadata: bool,
    /// Derived geodetic and bound CRSes can be written.
    pub derived_crs: bool,
    /// `ENSEMBLE` nodes with members and accuracy; otherwise ensembles collapse to a datum.
    pub ensembles: bool,
    /// Token written after a vertical datum name.
    pub vertical_datum_realization: Option<&'static str>,
    /// The ellipsoid carries a unit node; otherwise its axes must be in metres.
    pub ellipsoid_unit: bool,
    /// A datum without a prime meridian is written with an explicit Greenwich one.
    pub implicit_greenwich: bool,
    /// Unit keywords depend on the unit kind; otherwise always `UNIT`.
    pub typed_units: bool,
    /// Axes are wrapped in `CS[subtype,count]` and carry their own unit and meridian.
    /// Otherwise the unit of the first axis is written once before the axes.
    pub cs_node: bool,
    /// The first letter of axis names is lower-cased.
    pub lowercase_axis_names: bool,
    /// Directions are upper-cased and restricted to this set.
    pub axis_directions: Option<&'static [&'static str]>,
    /// Conversions are `CONVERSION` nodes; otherwise `PROJECTION` followed by bare parameters.
    pub conversion_node: bool,
    /// Parameters carry a unit node and metadata.
    pub parameter_unit: bool,
    /// The base CRS of a projected CRS includes its coordinate system.
    pub base_crs_cs: bool,
}

static WKT1: DialectRules = DialectRules {
    geographic_crs: "GEOGCS",
    geodetic_crs: "GEOCCS",
    base_geographic_crs: "GEOGCS",
    base_geodetic_crs: "GEOCCS",
    projected_crs: "PROJCS",
    vertical_crs: "VERT_CS",
    vertical_datum: "VERT_DATUM",
    compound_crs: "COMPD_CS",
    ellipsoid: "SPHEROID",
    identifier: "AUTHORITY",
    quote_numeric_codes: true,
    metadata: false,
    derived_crs: false,
    ensembles: false,
    vertical_datum_realization: Some("2005"),
    ellipsoid_unit: false,
    implicit_greenwich: true,
    typed_units: false,
    cs_node: false,
    lowercase_axis_names: false,
    axis_directions: Some(WKT1_AXIS_DIRECTIONS),
    conversion_node: false,
    parameter_unit: false,
    base_crs_cs: true,
};

static WKT2_2019: DialectRules = DialectRules {
    geographic_crs: "GEOGCRS",
    geodetic_crs: "GEODCRS",
    base_geographic_crs: "BASEGEOGCRS",
    base_geodetic_crs: "BASEGEODCRS",
    projected_crs: "PROJCRS",
    vertical_crs: "VERTCRS",
    vertical_datum: "VDATUM",
    compound_crs: "COMPOUNDCRS",
    ellipsoid: "ELLIPSOID",
    identifier: "ID",
    quote_numeric_codes: false,
    metadata: true,
    derived_crs: true,
    ensembles: true,
    vertical_datum_realization: None,
    ellipsoid_unit: true,
    implicit_greenwich: false,
    typed_units: true,
    cs_node: true,
    lowercase_axis_names: true,
    axis_directions: None,
    conversion_node: true,
    parameter_unit: true,
    base_crs_cs: false,
};

impl DialectRules {
    /// The rules for `version`.
    pub(crate) fn for_version(version: WktVersion) -> &'static Self {
        match version {
            WktVersion::Wkt1 => &WKT1,
            WktVersion::Wkt2_2019 => &WKT2_2019,
        }
    }

    /// Keyword of a top-level geodetic CRS.
    pub(crate) fn geodetic_crs_keyword(&self, kind: GeodeticCrsKind) -> &'static str {
        match kind {
            GeodeticCrsKind::Geographic => self.geographic_crs,
            GeodeticCrsKind::Geodetic => self.geodetic_crs,
        }
    }

    /// Keyword of the base CRS of a projected CRS.
    pub(crate) fn base_crs_keyword(&self, geographic: bool) -> &'static str {
        if geographic {
            self.base_geographic_crs
        } else {
            self.base_geodetic_crs
        }
    }

    /// Keyword of a unit node for a unit with the given PROJJSON `type` tag.
    pub(crate) fn unit_keyword(&self, kind: Option<&str>) -> Result<&'static str> {
        if !self.typed_units {
            return Ok("UNIT");
        }
        let keyword = match UnitKind::from_tag(kind)? {
            UnitKind::Angular => "ANGLEUNIT",
            UnitKind::Linear => "LENGTHUNIT",
            UnitKind::Scale => "SCALEUNIT",
            UnitKind::Time => "TIMEUNIT",
            UnitKind::Parametric => "PARAMETRICUNIT",
            UnitKind::Generic => "UNIT",
        };
        Ok(keyword)
    }

    /// Axis name as written, e.g. `geodetic latitude (Lat)`.
    pub(crate) fn axis_name(&self, name: &str, abbreviation: &str) -> String {
        let name = if self.lowercase_axis_names {
            lowercase_first(name)
        } else {
            name.to_string()
        };
        format!("{name} ({abbreviation})")
    }

    /// Axis direction as written.
    pub(crate) fn axis_direction(&self, direction: &str) -> String {
        match self.axis_directions {
            None => direction.to_string(),
            Some(allowed) => {
                let direction = direction.to_uppercase();
                if allowed.contains(&direction.as_str()) {
                    direction
                } else {
                    "OTHER".to_string()
                }
            }
        }
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
