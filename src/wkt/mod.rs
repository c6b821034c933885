//! Conversion of PROJJSON CRS definitions to Well-Known Text.
//!
//! Two dialects are supported, see [`WktVersion`]. Output is deterministic: the same tree, version
//! and options always produce the same bytes.
//!
//! ```
//! use projjson_wkt::wkt::{projjson_to_wkt, WktOptions, WktVersion};
//! use serde_json::json;
//!
//! let projjson = json!({
//!     "type": "VerticalCRS",
//!     "name": "EGM2008 height",
//!     "datum": {"type": "VerticalReferenceFrame", "name": "EGM2008 geoid"},
//!     "coordinate_system": {
//!         "subtype": "vertical",
//!         "axis": [{
//!             "name": "Gravity-related height",
//!             "abbreviation": "H",
//!             "direction": "up",
//!             "unit": "metre"
//!         }]
//!     },
//!     "id": {"authority": "EPSG", "code": 3855}
//! });
//! let wkt = projjson_to_wkt(&projjson, WktVersion::Wkt1, &WktOptions::single_line()).unwrap();
//! let expected = [
//!     r#"VERT_CS["EGM2008 height",VERT_DATUM["EGM2008 geoid",2005],UNIT["metre",1],"#,
//!     r#"AXIS["Gravity-related height (H)",UP],AUTHORITY["EPSG","3855"]]"#,
//! ];
//! assert_eq!(wkt, expected.concat());
//! ```

mod dialect;
mod number;
mod serializer;
mod unit;
mod writer;

use std::fmt::Display;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProjJsonError, Result};
use crate::projjson::Crs;
use crate::wkt::serializer::WktSerializer;

/// The WKT dialect to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WktVersion {
    /// The legacy OGC 01-009 grammar, as read by GDAL and most older software.
    #[serde(rename = "WKT1")]
    Wkt1,

    /// [WKT2:2019](https://www.ogc.org/publications/standard/wkt-crs/), ISO 19162:2019.
    #[serde(rename = "WKT2:2019")]
    Wkt2_2019,
}

impl WktVersion {
    /// The conventional name of the dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wkt1 => "WKT1",
            Self::Wkt2_2019 => "WKT2:2019",
        }
    }
}

impl Display for WktVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WktVersion {
    type Err = ProjJsonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "WKT1" => Ok(Self::Wkt1),
            "WKT2:2019" => Ok(Self::Wkt2_2019),
            _ => Err(ProjJsonError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Options for writing WKT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WktOptions {
    /// Written between nodes. A non-empty separator also enables indentation of four spaces per
    /// level; an empty one writes everything on a single line.
    pub line_separator: String,
}

impl WktOptions {
    /// Options with a custom line separator, e.g. `"\r\n"`.
    pub fn new(line_separator: impl Into<String>) -> Self {
        Self {
            line_separator: line_separator.into(),
        }
    }

    /// Single-line, unindented output.
    pub fn single_line() -> Self {
        Self::new("")
    }

    /// Whether output is broken into indented lines.
    pub fn is_multiline(&self) -> bool {
        !self.line_separator.is_empty()
    }
}

impl Default for WktOptions {
    fn default() -> Self {
        Self::new("\n")
    }
}

/// Convert a CRS to WKT.
pub fn to_wkt(crs: &Crs, version: WktVersion, options: &WktOptions) -> Result<String> {
    debug!("Converting {} to {version}", crs.type_name());
    let mut serializer = WktSerializer::new(version, options);
    serializer.write_crs(crs)?;
    let wkt = serializer.finish();
    trace!("Wrote {} bytes of {version}", wkt.len());
    Ok(wkt)
}

/// Convert a CRS to multi-line WKT1.
pub fn to_wkt1(crs: &Crs) -> Result<String> {
    to_wkt(crs, WktVersion::Wkt1, &WktOptions::default())
}

/// Convert a CRS to multi-line WKT2:2019.
pub fn to_wkt2_2019(crs: &Crs) -> Result<String> {
    to_wkt(crs, WktVersion::Wkt2_2019, &WktOptions::default())
}

/// Convert a parsed PROJJSON object to WKT.
pub fn projjson_to_wkt(
    projjson: &Value,
    version: WktVersion,
    options: &WktOptions,
) -> Result<String> {
    let crs = Crs::from_projjson(projjson)?;
    to_wkt(&crs, version, options)
}

#[cfg(test)]
mod test;
