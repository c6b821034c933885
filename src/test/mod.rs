#![allow(dead_code)]

use std::fs;

use serde_json::Value;

pub(crate) fn read_projjson(id: &str) -> Value {
    let text = fs::read_to_string(format!("fixtures/projjson/{id}.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Expected output for a fixture, `ext` being `wkt1` or `wkt2`.
pub(crate) fn read_wkt(id: &str, ext: &str) -> String {
    fs::read_to_string(format!("fixtures/projjson/{id}.{ext}")).unwrap()
}

/// WGS 84, with its seven-member datum ensemble.
pub(crate) fn epsg_4326() -> Value {
    read_projjson("epsg_4326")
}

pub(crate) fn wgs84_utm_31n() -> Value {
    read_projjson("epsg_32631")
}

pub(crate) fn egm2008_height() -> Value {
    read_projjson("epsg_3855")
}

/// WGS 84 + EGM2008 height, a geographic and a vertical component.
pub(crate) fn wgs84_with_egm2008_height() -> Value {
    read_projjson("epsg_9518")
}

/// ITRF2014, geocentric on a dynamic frame.
pub(crate) fn itrf2014() -> Value {
    read_projjson("epsg_7789")
}

/// NAD27, whose ellipsoid is given by its semi-minor axis.
pub(crate) fn nad27() -> Value {
    read_projjson("epsg_4267")
}

pub(crate) fn rotated_pole() -> Value {
    read_projjson("rotated_pole")
}

pub(crate) fn ed50_to_wgs84_bound() -> Value {
    read_projjson("bound_ed50")
}

/// Fixtures with expected output in both dialects.
pub(crate) const CONVERTIBLE: &[&str] = &[
    "epsg_3855",
    "epsg_4267",
    "epsg_4326",
    "epsg_7789",
    "epsg_9518",
    "epsg_32631",
];

/// Fixtures only expressible in WKT2.
pub(crate) const WKT2_ONLY: &[&str] = &["bound_ed50", "rotated_pole"];
