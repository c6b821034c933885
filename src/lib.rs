//! Conversion of [PROJJSON](https://proj.org/specifications/projjson.html) coordinate reference
//! systems to Well-Known Text, in the legacy WKT1 dialect and in
//! [WKT2:2019](https://www.ogc.org/publications/standard/wkt-crs/).
//!
//! PROJJSON is parsed into the typed [`Crs`] tree of the [`projjson`] module, which the [`wkt`]
//! module writes in the requested [`WktVersion`]:
//!
//! ```
//! use projjson_wkt::{projjson_to_wkt, WktOptions, WktVersion};
//!
//! let projjson: serde_json::Value = serde_json::from_str(r#"{
//!     "type": "GeographicCRS",
//!     "name": "WGS 84",
//!     "datum": {
//!         "type": "GeodeticReferenceFrame",
//!         "name": "World Geodetic System 1984",
//!         "ellipsoid": {
//!             "name": "WGS 84",
//!             "semi_major_axis": 6378137,
//!             "inverse_flattening": 298.257223563
//!         }
//!     },
//!     "coordinate_system": {
//!         "subtype": "ellipsoidal",
//!         "axis": [
//!             {
//!                 "name": "Geodetic latitude",
//!                 "abbreviation": "Lat",
//!                 "direction": "north",
//!                 "unit": "degree"
//!             },
//!             {
//!                 "name": "Geodetic longitude",
//!                 "abbreviation": "Lon",
//!                 "direction": "east",
//!                 "unit": "degree"
//!             }
//!         ]
//!     },
//!     "id": {"authority": "EPSG", "code": 4326}
//! }"#).unwrap();
//!
//! let options = WktOptions::single_line();
//! let wkt = projjson_to_wkt(&projjson, WktVersion::Wkt2_2019, &options).unwrap();
//! assert!(wkt.starts_with(r#"GEOGCRS["WGS 84",DATUM["World Geodetic System 1984","#));
//! assert!(wkt.ends_with(r#"ID["EPSG",4326]]"#));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod error;
pub mod projjson;
#[cfg(test)]
pub(crate) mod test;
pub mod wkt;

pub use error::{ProjJsonError, Result};
pub use projjson::Crs;
pub use wkt::{projjson_to_wkt, to_wkt, to_wkt1, to_wkt2_2019, WktOptions, WktVersion};
