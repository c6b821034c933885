use serde_json::{json, Value};

use crate::error::ProjJsonError;
use crate::projjson::Crs;
use crate::test::{
    ed50_to_wgs84_bound, egm2008_height, epsg_4326, read_projjson, read_wkt, rotated_pole,
    wgs84_utm_31n, wgs84_with_egm2008_height, CONVERTIBLE, WKT2_ONLY,
};
use crate::wkt::{projjson_to_wkt, to_wkt, to_wkt1, to_wkt2_2019, WktOptions, WktVersion};

fn convert(projjson: &Value, version: WktVersion) -> crate::error::Result<String> {
    projjson_to_wkt(projjson, version, &WktOptions::default())
}

fn unindent(wkt: &str) -> String {
    wkt.lines().map(str::trim_start).collect()
}

fn single_line(projjson: &Value, version: WktVersion) -> crate::error::Result<String> {
    projjson_to_wkt(projjson, version, &WktOptions::single_line())
}

/// A geographic CRS around the given ellipsoid.
fn geographic_crs(ellipsoid: Value) -> Value {
    let axis = |name: &str, abbreviation: &str, direction: &str| {
        json!({
            "name": name,
            "abbreviation": abbreviation,
            "direction": direction,
            "unit": "degree"
        })
    };
    json!({
        "type": "GeographicCRS",
        "name": "Test",
        "datum": {
            "type": "GeodeticReferenceFrame",
            "name": "Test datum",
            "ellipsoid": ellipsoid
        },
        "coordinate_system": {
            "subtype": "ellipsoidal",
            "axis": [
                axis("Geodetic latitude", "Lat", "north"),
                axis("Geodetic longitude", "Lon", "east")
            ]
        }
    })
}

#[test]
fn fixtures_wkt1() {
    for id in CONVERTIBLE {
        let wkt = convert(&read_projjson(id), WktVersion::Wkt1).unwrap();
        assert_eq!(wkt, read_wkt(id, "wkt1"), "{id}");
    }
}

#[test]
fn fixtures_wkt2() {
    for id in CONVERTIBLE.iter().chain(WKT2_ONLY) {
        let wkt = convert(&read_projjson(id), WktVersion::Wkt2_2019).unwrap();
        assert_eq!(wkt, read_wkt(id, "wkt2"), "{id}");
    }
}

#[test]
fn epsg_4326_wkt1() {
    let crs = Crs::from_projjson(&epsg_4326()).unwrap();
    let expected = r#"GEOGCS["WGS 84",
    DATUM["World Geodetic System 1984",
        SPHEROID["WGS 84",6378137,298.257223563],
        AUTHORITY["EPSG","6326"]],
    PRIMEM["Greenwich",0],
    UNIT["degree",0.0174532925199433],
    AXIS["Geodetic latitude (Lat)",NORTH],
    AXIS["Geodetic longitude (Lon)",EAST],
    AUTHORITY["EPSG","4326"]]"#;
    assert_eq!(to_wkt1(&crs).unwrap(), expected);
}

#[test]
fn epsg_4326_wkt2() {
    let crs = Crs::from_projjson(&epsg_4326()).unwrap();
    let wkt = to_wkt2_2019(&crs).unwrap();
    let head = [
        "GEOGCRS[\"WGS 84\",",
        "    ENSEMBLE[\"World Geodetic System 1984 ensemble\",",
        "        MEMBER[\"World Geodetic System 1984 (Transit)\",",
        "            ID[\"EPSG\",1166]],",
    ];
    assert!(wkt.starts_with(&head.join("\n")));
    assert!(wkt.contains("ENSEMBLEACCURACY[2.0]"));
    assert!(wkt.ends_with("    ID[\"EPSG\",4326]]"));
    assert_eq!(wkt.matches("MEMBER[").count(), 7);
}

#[test]
fn single_line_matches_pretty() {
    for id in CONVERTIBLE {
        let projjson = read_projjson(id);
        for version in [WktVersion::Wkt1, WktVersion::Wkt2_2019] {
            let pretty = convert(&projjson, version).unwrap();
            let single = single_line(&projjson, version).unwrap();
            assert!(!single.contains('\n'));
            assert_eq!(single, unindent(&pretty), "{id} {version}");
        }
    }
}

#[test]
fn custom_line_separator() {
    let projjson = wgs84_with_egm2008_height();
    let crlf = projjson_to_wkt(&projjson, WktVersion::Wkt2_2019, &WktOptions::new("\r\n")).unwrap();
    let lf = convert(&projjson, WktVersion::Wkt2_2019).unwrap();
    assert!(crlf.contains("\r\n    GEOGCRS["));
    assert_eq!(crlf.replace("\r\n", "\n"), lf);
}

#[test]
fn deterministic() {
    let crs = Crs::from_projjson(&wgs84_with_egm2008_height()).unwrap();
    let options = WktOptions::default();
    let first = to_wkt(&crs, WktVersion::Wkt2_2019, &options).unwrap();
    let second = to_wkt(&crs, WktVersion::Wkt2_2019, &options).unwrap();
    assert_eq!(first, second);
}

fn assert_balanced(wkt: &str, id: &str) {
    let mut depth = 0i32;
    let mut in_string = false;
    for c in wkt.chars() {
        match c {
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                depth -= 1;
                assert!(depth >= 0, "{id}");
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "{id}");
}

#[test]
fn balanced_brackets() {
    for id in CONVERTIBLE {
        let wkt = convert(&read_projjson(id), WktVersion::Wkt1).unwrap();
        assert_balanced(&wkt, id);
    }
    for id in CONVERTIBLE.iter().chain(WKT2_ONLY) {
        let wkt = convert(&read_projjson(id), WktVersion::Wkt2_2019).unwrap();
        assert_balanced(&wkt, id);
    }
}

#[test]
fn wkt2_only_constructs() {
    let err = convert(&rotated_pole(), WktVersion::Wkt1).unwrap_err();
    assert!(matches!(
        &err,
        ProjJsonError::UnsupportedInDialect { object, version: WktVersion::Wkt1 }
            if object == "DerivedGeographicCRS"
    ));
    assert_eq!(err.to_string(), "DerivedGeographicCRS unsupported in WKT1");

    let err = convert(&ed50_to_wgs84_bound(), WktVersion::Wkt1).unwrap_err();
    assert_eq!(err.to_string(), "BoundCRS unsupported in WKT1");

    let wkt = convert(&ed50_to_wgs84_bound(), WktVersion::Wkt2_2019).unwrap();
    assert!(wkt.starts_with("BOUNDCRS[\n    SOURCECRS[\n        GEOGCRS[\"ED50\","));
}

#[test]
fn vertical_datum_wkt1() {
    let wkt = single_line(&egm2008_height(), WktVersion::Wkt1).unwrap();
    assert!(wkt.starts_with(r#"VERT_CS["EGM2008 height",VERT_DATUM["EGM2008 geoid",2005,"#));
}

#[test]
fn ellipsoid_without_flattening() {
    let projjson = geographic_crs(json!({"name": "Incomplete", "semi_major_axis": 6378137}));
    let err = convert(&projjson, WktVersion::Wkt2_2019).unwrap_err();
    assert!(matches!(err, ProjJsonError::MissingRequiredField(_)));
}

#[test]
fn semi_minor_axis() {
    let projjson = geographic_crs(json!({
        "name": "Clarke 1866",
        "semi_major_axis": 6378206.4,
        "semi_minor_axis": 6356583.8
    }));
    let wkt = single_line(&projjson, WktVersion::Wkt1).unwrap();
    assert!(wkt.contains(r#"SPHEROID["Clarke 1866",6378206.4,294.978698213898]"#));
}

#[test]
fn ellipsoid_unit_mismatch() {
    let projjson = geographic_crs(json!({
        "name": "Mixed",
        "semi_major_axis": {"value": 6378206.4, "unit": "metre"},
        "semi_minor_axis": {"value": 20855233, "name": "foot", "conversion_factor": 0.3048}
    }));
    let err = convert(&projjson, WktVersion::Wkt2_2019).unwrap_err();
    assert!(matches!(
        &err,
        ProjJsonError::UnitMismatch { semi_major, semi_minor }
            if semi_major == "metre" && semi_minor == "foot"
    ));
}

#[test]
fn ellipsoid_unit_conversion() {
    let projjson = geographic_crs(json!({
        "name": "Imperial",
        "semi_major_axis": {"value": 20925832.16, "name": "foot", "conversion_factor": 0.3048},
        "inverse_flattening": 294.978698213898
    }));
    let err = convert(&projjson, WktVersion::Wkt1).unwrap_err();
    assert!(matches!(err, ProjJsonError::UnsupportedUnitConversion(f) if f == 0.3048));

    let wkt = single_line(&projjson, WktVersion::Wkt2_2019).unwrap();
    let ellipsoid =
        r#"ELLIPSOID["Imperial",20925832.16,294.978698213898,LENGTHUNIT["foot",0.3048]]"#;
    assert!(wkt.contains(ellipsoid));
}

#[test]
fn unit_ids() {
    let mut projjson = geographic_crs(json!({
        "name": "WGS 84",
        "semi_major_axis": {
            "value": 6378137,
            "unit": {
                "type": "LinearUnit",
                "name": "metre",
                "conversion_factor": 1,
                "id": {"authority": "EPSG", "code": 9001}
            }
        },
        "inverse_flattening": 298.257223563
    }));
    projjson["datum"]["prime_meridian"] = json!({
        "name": "Greenwich",
        "longitude": {
            "value": 0,
            "unit": {
                "type": "AngularUnit",
                "name": "degree",
                "conversion_factor": 0.0174532925199433,
                "id": {"authority": "EPSG", "code": 9122}
            }
        }
    });
    let wkt = single_line(&projjson, WktVersion::Wkt2_2019).unwrap();
    assert!(wkt.contains(
        r#"ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1,ID["EPSG",9001]]]"#
    ));
    assert!(wkt.contains(
        r#"PRIMEM["Greenwich",0,ANGLEUNIT["degree",0.0174532925199433,ID["EPSG",9122]]]"#
    ));

    let wkt = single_line(&projjson, WktVersion::Wkt1).unwrap();
    assert!(wkt.contains(r#"SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],"#));
}

#[test]
fn parameter_file() {
    let mut projjson = wgs84_utm_31n();
    projjson["conversion"]["parameters"]
        .as_array_mut()
        .unwrap()
        .push(json!({
            "name": "Geoid (height correction) model file",
            "value": "egm08_25.gtx",
            "id": {"authority": "EPSG", "code": 8666}
        }));

    let wkt = single_line(&projjson, WktVersion::Wkt2_2019).unwrap();
    let expected = [
        r#"PARAMETER["False northing",0,LENGTHUNIT["metre",1],ID["EPSG",8807]],"#,
        r#"PARAMETERFILE["Geoid (height correction) model file","egm08_25.gtx",ID["EPSG",8666]],"#,
        r#"ID["EPSG",16031]]"#,
    ];
    assert!(wkt.contains(&expected.concat()));

    let wkt = single_line(&projjson, WktVersion::Wkt1).unwrap();
    let expected = [
        r#"PARAMETER["False northing",0],"#,
        r#"PARAMETERFILE["Geoid (height correction) model file","egm08_25.gtx","#,
        r#"AUTHORITY["EPSG","8666"]],UNIT["metre",1]"#,
    ];
    assert!(wkt.contains(&expected.concat()));
}

#[test]
fn unknown_unit_type() {
    let mut projjson = epsg_4326();
    projjson["coordinate_system"]["axis"][0]["unit"] =
        json!({"type": "BogusUnit", "name": "bogus", "conversion_factor": 1});
    let err = convert(&projjson, WktVersion::Wkt2_2019).unwrap_err();
    assert!(matches!(err, ProjJsonError::UnknownUnitType(tag) if tag == "BogusUnit"));

    // WKT1 writes every unit as UNIT.
    let wkt = convert(&projjson, WktVersion::Wkt1).unwrap();
    assert!(wkt.contains(r#"UNIT["bogus",1]"#));
}

#[test]
fn unsupported_component() {
    let mut projjson = wgs84_with_egm2008_height();
    projjson["components"][1] = json!({"type": "EngineeringCRS", "name": "Local"});
    let err = convert(&projjson, WktVersion::Wkt2_2019).unwrap_err();
    assert!(matches!(err, ProjJsonError::UnsupportedObjectType(tag) if tag == "EngineeringCRS"));
}

#[test]
fn conflicting_datum() {
    let mut projjson = geographic_crs(json!({
        "name": "WGS 84",
        "semi_major_axis": 6378137,
        "inverse_flattening": 298.257223563
    }));
    projjson["datum_ensemble"] = epsg_4326()["datum_ensemble"].clone();
    let err = convert(&projjson, WktVersion::Wkt2_2019).unwrap_err();
    assert!(matches!(err, ProjJsonError::ConflictingFields(_)));
}

#[test]
fn version_names() {
    assert_eq!("WKT1".parse::<WktVersion>().unwrap(), WktVersion::Wkt1);
    assert_eq!("WKT2:2019".parse::<WktVersion>().unwrap(), WktVersion::Wkt2_2019);
    assert_eq!(WktVersion::Wkt2_2019.to_string(), "WKT2:2019");

    let err = "WKT2:2015".parse::<WktVersion>().unwrap_err();
    assert!(matches!(err, ProjJsonError::UnsupportedFormat(name) if name == "WKT2:2015"));

    let version: WktVersion = serde_json::from_value(json!("WKT2:2019")).unwrap();
    assert_eq!(version, WktVersion::Wkt2_2019);
}

#[test]
fn default_options() {
    let options = WktOptions::default();
    assert_eq!(options.line_separator, "\n");
    assert!(options.is_multiline());
    assert!(!WktOptions::single_line().is_multiline());
}
