//! Recursive conversion of a [`Crs`] tree to WKT.

use log::debug;

use crate::error::{ProjJsonError, Result};
use crate::projjson::{
    AbridgedTransformation, Axis, BBox, BoundCrs, CompoundCrs, Conversion, CoordinateSystem, Crs,
    DatumEnsemble, DatumOrEnsemble, DerivedGeodeticCrs, Ellipsoid, EnsembleMember, GeodeticCrs,
    GeodeticCrsKind, GeodeticReferenceFrame, Id, Measure, Meridian, Method, ObjectUsage,
    Parameter, ParameterValue, PrimeMeridian, ProjectedCrs, Unit, UnitKind, Usage, VerticalCrs,
    VerticalReferenceFrame, WellKnownUnit,
};
use crate::wkt::dialect::DialectRules;
use crate::wkt::number::{format_float, format_shortest};
use crate::wkt::unit::{resolve_unit, resolve_value_unit, ResolvedUnit};
use crate::wkt::writer::WktWriter;
use crate::wkt::{WktOptions, WktVersion};

/// Suffix dropped from ensemble names when they collapse to a single WKT1 datum.
const ENSEMBLE_SUFFIX: &str = " ensemble";

/// Walks a CRS tree and writes it through a [`WktWriter`] following one dialect.
pub(crate) struct WktSerializer {
    version: WktVersion,
    rules: &'static DialectRules,
    writer: WktWriter,
}

impl WktSerializer {
    pub(crate) fn new(version: WktVersion, options: &WktOptions) -> Self {
        Self {
            version,
            rules: DialectRules::for_version(version),
            writer: WktWriter::new(&options.line_separator),
        }
    }

    /// Take the finished text.
    pub(crate) fn finish(self) -> String {
        self.writer.finish()
    }

    /// Write any CRS.
    pub(crate) fn write_crs(&mut self, crs: &Crs) -> Result<()> {
        match crs {
            Crs::Geodetic(crs) => {
                let keyword = self.rules.geodetic_crs_keyword(crs.kind);
                let cs = crs.coordinate_system.as_ref().ok_or_else(|| {
                    ProjJsonError::MissingRequiredField(format!(
                        "coordinate_system in {}",
                        crs.name
                    ))
                })?;
                self.write_geodetic_crs(crs, keyword, Some(cs))
            }
            Crs::DerivedGeodetic(crs) => self.write_derived_geodetic_crs(crs),
            Crs::Projected(crs) => self.write_projected_crs(crs),
            Crs::Vertical(crs) => self.write_vertical_crs(crs),
            Crs::Compound(crs) => self.write_compound_crs(crs),
            Crs::Bound(crs) => self.write_bound_crs(crs),
            Crs::Unsupported(type_name) => {
                Err(ProjJsonError::UnsupportedObjectType(type_name.clone()))
            }
        }
    }

    fn ensure_supported(&self, type_name: &str) -> Result<()> {
        if self.rules.derived_crs {
            Ok(())
        } else {
            Err(ProjJsonError::UnsupportedInDialect {
                object: type_name.to_string(),
                version: self.version,
            })
        }
    }

    fn write_geodetic_crs(
        &mut self,
        crs: &GeodeticCrs,
        keyword: &str,
        cs: Option<&CoordinateSystem>,
    ) -> Result<()> {
        let reference = crs.datum_or_ensemble()?;
        self.writer.start_node(keyword);
        self.writer.add_quoted_string(&crs.name);
        match reference {
            DatumOrEnsemble::Datum(datum) => {
                self.write_datum(datum)?;
                match &datum.prime_meridian {
                    Some(pm) => self.write_prime_meridian(pm)?,
                    None if self.rules.implicit_greenwich => {
                        self.write_prime_meridian(&PrimeMeridian::greenwich())?
                    }
                    None => {}
                }
            }
            DatumOrEnsemble::Ensemble(ensemble) => {
                self.write_geodetic_ensemble(ensemble)?;
                if self.rules.implicit_greenwich {
                    self.write_prime_meridian(&PrimeMeridian::greenwich())?;
                }
            }
        }
        if let Some(cs) = cs {
            self.write_coordinate_system(cs)?;
        }
        self.write_usage(&crs.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_derived_geodetic_crs(&mut self, crs: &DerivedGeodeticCrs) -> Result<()> {
        self.ensure_supported(crs.kind.type_name())?;
        self.writer.start_node(self.rules.geodetic_crs);
        self.writer.add_quoted_string(&crs.name);
        let base_keyword = self
            .rules
            .base_crs_keyword(crs.base_crs.kind == GeodeticCrsKind::Geographic);
        self.write_geodetic_crs(&crs.base_crs, base_keyword, None)?;
        self.write_conversion(&crs.conversion, "DERIVINGCONVERSION")?;
        self.write_coordinate_system(&crs.coordinate_system)?;
        self.write_usage(&crs.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_projected_crs(&mut self, crs: &ProjectedCrs) -> Result<()> {
        self.writer.start_node(self.rules.projected_crs);
        self.writer.add_quoted_string(&crs.name);
        let base = &crs.base_crs;
        let geographic = match &base.coordinate_system {
            Some(cs) => cs.subtype == "ellipsoidal",
            None => base.kind == GeodeticCrsKind::Geographic,
        };
        let base_cs = if self.rules.base_crs_cs {
            base.coordinate_system.as_ref()
        } else {
            None
        };
        self.write_geodetic_crs(base, self.rules.base_crs_keyword(geographic), base_cs)?;
        self.write_conversion(&crs.conversion, "CONVERSION")?;
        self.write_coordinate_system(&crs.coordinate_system)?;
        self.write_usage(&crs.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_vertical_crs(&mut self, crs: &VerticalCrs) -> Result<()> {
        let reference = crs.datum_or_ensemble()?;
        self.writer.start_node(self.rules.vertical_crs);
        self.writer.add_quoted_string(&crs.name);
        match reference {
            DatumOrEnsemble::Datum(datum) => self.write_vertical_datum(datum)?,
            DatumOrEnsemble::Ensemble(ensemble) => self.write_vertical_ensemble(ensemble)?,
        }
        self.write_coordinate_system(&crs.coordinate_system)?;
        self.write_usage(&crs.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_compound_crs(&mut self, crs: &CompoundCrs) -> Result<()> {
        self.writer.start_node(self.rules.compound_crs);
        self.writer.add_quoted_string(&crs.name);
        for component in &crs.components {
            self.write_crs(component)?;
        }
        self.write_usage(&crs.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_bound_crs(&mut self, crs: &BoundCrs) -> Result<()> {
        self.ensure_supported("BoundCRS")?;
        self.writer.start_node("BOUNDCRS");
        self.writer.start_node("SOURCECRS");
        self.write_crs(&crs.source_crs)?;
        self.writer.end_node();
        self.writer.start_node("TARGETCRS");
        self.write_crs(&crs.target_crs)?;
        self.writer.end_node();
        self.write_abridged_transformation(&crs.transformation)?;
        self.writer.end_node();
        Ok(())
    }

    fn write_frame_epoch(&mut self, epoch: Option<f64>, datum_name: &str) -> Result<()> {
        if !self.rules.metadata {
            debug!(
                "Dropping frame reference epoch of {datum_name}: not expressible in {}",
                self.version
            );
            return Ok(());
        }
        let epoch = epoch.ok_or_else(|| {
            ProjJsonError::MissingRequiredField(format!(
                "frame_reference_epoch in {datum_name}"
            ))
        })?;
        self.writer.start_node("DYNAMIC");
        self.writer.start_node("FRAMEEPOCH");
        self.writer.add(&format_shortest(epoch));
        self.writer.end_node();
        self.writer.end_node();
        Ok(())
    }

    fn write_datum(&mut self, datum: &GeodeticReferenceFrame) -> Result<()> {
        if datum.is_dynamic() {
            self.write_frame_epoch(datum.frame_reference_epoch, &datum.name)?;
        }
        self.writer.start_node("DATUM");
        self.writer.add_quoted_string(&datum.name);
        self.write_ellipsoid(required_ellipsoid(datum.ellipsoid.as_ref(), &datum.name)?)?;
        self.write_usage(&datum.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_vertical_datum(&mut self, datum: &VerticalReferenceFrame) -> Result<()> {
        if datum.is_dynamic() {
            self.write_frame_epoch(datum.frame_reference_epoch, &datum.name)?;
        }
        self.writer.start_node(self.rules.vertical_datum);
        self.writer.add_quoted_string(&datum.name);
        if let Some(realization) = self.rules.vertical_datum_realization {
            self.writer.add(realization);
        }
        self.write_usage(&datum.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_geodetic_ensemble(&mut self, ensemble: &DatumEnsemble) -> Result<()> {
        let ellipsoid = required_ellipsoid(ensemble.ellipsoid.as_ref(), &ensemble.name)?;
        if !self.rules.ensembles {
            debug!("Collapsing datum ensemble {} to a single datum", ensemble.name);
            self.writer.start_node("DATUM");
            self.writer
                .add_quoted_string(&ensemble.name.replacen(ENSEMBLE_SUFFIX, "", 1));
            self.write_ellipsoid(ellipsoid)?;
            self.write_usage(&ensemble.usage);
            self.writer.end_node();
            return Ok(());
        }
        self.write_ensemble(ensemble, Some(ellipsoid))
    }

    fn write_vertical_ensemble(&mut self, ensemble: &DatumEnsemble) -> Result<()> {
        if !self.rules.ensembles {
            debug!("Collapsing datum ensemble {} to a single datum", ensemble.name);
            self.writer.start_node(self.rules.vertical_datum);
            self.writer.add_quoted_string(&ensemble.name);
            if let Some(realization) = self.rules.vertical_datum_realization {
                self.writer.add(realization);
            }
            self.write_usage(&ensemble.usage);
            self.writer.end_node();
            return Ok(());
        }
        self.write_ensemble(ensemble, None)
    }

    fn write_ensemble(
        &mut self,
        ensemble: &DatumEnsemble,
        ellipsoid: Option<&Ellipsoid>,
    ) -> Result<()> {
        self.writer.start_node("ENSEMBLE");
        self.writer.add_quoted_string(&ensemble.name);
        for member in &ensemble.members {
            self.write_ensemble_member(member);
        }
        if let Some(ellipsoid) = ellipsoid {
            self.write_ellipsoid(ellipsoid)?;
        }
        if let Some(accuracy) = &ensemble.accuracy {
            self.writer.start_node("ENSEMBLEACCURACY");
            self.writer.add(accuracy);
            self.writer.end_node();
        }
        self.write_usage(&ensemble.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_ensemble_member(&mut self, member: &EnsembleMember) {
        self.writer.start_node("MEMBER");
        self.writer.add_quoted_string(&member.name);
        self.write_usage(&member.usage);
        self.writer.end_node();
    }

    fn write_ellipsoid(&mut self, ellipsoid: &Ellipsoid) -> Result<()> {
        self.writer.start_node(self.rules.ellipsoid);
        self.writer.add_quoted_string(&ellipsoid.name);
        let a = resolve_value_unit(&ellipsoid.semi_major_axis, WellKnownUnit::Metre)?;
        self.writer.add(&format_float(a.value));

        if let Some(rf) = ellipsoid.inverse_flattening {
            self.writer.add(&format_float(rf));
        } else if let Some(semi_minor_axis) = &ellipsoid.semi_minor_axis {
            let b = resolve_value_unit(semi_minor_axis, WellKnownUnit::Metre)?;
            if a.unit_name != b.unit_name || a.conversion_factor != b.conversion_factor {
                return Err(ProjJsonError::UnitMismatch {
                    semi_major: a.unit_name.to_string(),
                    semi_minor: b.unit_name.to_string(),
                });
            }
            // TODO: a sphere (a == b) yields an infinite inverse flattening here; WKT wants 0.
            let rf = a.value / (a.value - b.value);
            self.writer.add(&format_float(rf));
        } else {
            return Err(ProjJsonError::MissingRequiredField(format!(
                "semi_minor_axis or inverse_flattening in ellipsoid {}",
                ellipsoid.name
            )));
        }

        if self.rules.ellipsoid_unit {
            self.write_unit_node(&ResolvedUnit {
                kind: Some(UnitKind::Linear.tag()),
                name: a.unit_name,
                conversion_factor: a.conversion_factor,
                usage: a.usage,
            })?;
        } else if a.conversion_factor != 1.0 {
            return Err(ProjJsonError::UnsupportedUnitConversion(a.conversion_factor));
        }
        self.write_usage(&ellipsoid.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_prime_meridian(&mut self, pm: &PrimeMeridian) -> Result<()> {
        self.writer.start_node("PRIMEM");
        self.writer.add_quoted_string(&pm.name);
        self.write_longitude(&pm.longitude)?;
        self.write_usage(&pm.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_meridian(&mut self, meridian: &Meridian) -> Result<()> {
        self.writer.start_node("MERIDIAN");
        self.write_longitude(&meridian.longitude)?;
        self.write_usage(&meridian.usage);
        self.writer.end_node();
        Ok(())
    }

    /// A longitude value, followed in WKT2 by its (always angular) unit.
    fn write_longitude(&mut self, longitude: &Measure) -> Result<()> {
        let longitude = resolve_value_unit(longitude, WellKnownUnit::Degree)?;
        self.writer.add(&format_float(longitude.value));
        if self.rules.typed_units {
            self.write_unit_node(&ResolvedUnit {
                kind: Some(UnitKind::Angular.tag()),
                name: longitude.unit_name,
                conversion_factor: longitude.conversion_factor,
                usage: longitude.usage,
            })?;
        }
        Ok(())
    }

    fn write_unit(&mut self, unit: &Unit) -> Result<()> {
        let unit = resolve_unit(unit)?;
        self.write_unit_node(&unit)
    }

    fn write_unit_node(&mut self, unit: &ResolvedUnit<'_>) -> Result<()> {
        let keyword = self.rules.unit_keyword(unit.kind)?;
        self.writer.start_node(keyword);
        self.writer.add_quoted_string(unit.name);
        self.writer.add(&format_float(unit.conversion_factor));
        if let Some(usage) = unit.usage {
            self.write_usage(usage);
        }
        self.writer.end_node();
        Ok(())
    }

    fn write_coordinate_system(&mut self, cs: &CoordinateSystem) -> Result<()> {
        let first_axis = cs.axis.first().ok_or_else(|| {
            ProjJsonError::MissingRequiredField(format!("axis in {} coordinate system", cs.subtype))
        })?;
        if self.rules.cs_node {
            self.writer.start_node("CS");
            self.writer.add(&cs.subtype);
            self.writer.add(&cs.axis.len().to_string());
            self.writer.end_node();
            self.writer.start_pseudo_node();
        } else if let Some(unit) = &first_axis.unit {
            self.write_unit(unit)?;
        }
        for axis in &cs.axis {
            self.write_axis(axis)?;
        }
        if self.rules.cs_node {
            self.writer.end_pseudo_node();
        }
        Ok(())
    }

    fn write_axis(&mut self, axis: &Axis) -> Result<()> {
        self.writer.start_node("AXIS");
        self.writer
            .add_quoted_string(&self.rules.axis_name(&axis.name, &axis.abbreviation));
        self.writer.add(&self.rules.axis_direction(&axis.direction));
        if self.rules.cs_node {
            if let Some(meridian) = &axis.meridian {
                self.write_meridian(meridian)?;
            }
            if let Some(unit) = &axis.unit {
                self.write_unit(unit)?;
            }
        }
        self.writer.end_node();
        Ok(())
    }

    fn write_conversion(&mut self, conversion: &Conversion, keyword: &str) -> Result<()> {
        if !self.rules.conversion_node {
            self.writer.start_node("PROJECTION");
            self.writer.add_quoted_string(&conversion.method.name);
            self.writer.end_node();
            for parameter in &conversion.parameters {
                self.write_parameter(parameter)?;
            }
            return Ok(());
        }
        self.writer.start_node(keyword);
        self.writer.add_quoted_string(&conversion.name);
        self.write_method(&conversion.method);
        for parameter in &conversion.parameters {
            self.write_parameter(parameter)?;
        }
        self.write_usage(&conversion.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_abridged_transformation(
        &mut self,
        transformation: &AbridgedTransformation,
    ) -> Result<()> {
        self.writer.start_node("ABRIDGEDTRANSFORMATION");
        self.writer.add_quoted_string(&transformation.name);
        self.write_method(&transformation.method);
        for parameter in &transformation.parameters {
            self.write_parameter(parameter)?;
        }
        self.write_usage(&transformation.usage);
        self.writer.end_node();
        Ok(())
    }

    fn write_method(&mut self, method: &Method) {
        self.writer.start_node("METHOD");
        self.writer.add_quoted_string(&method.name);
        self.write_usage(&method.usage);
        self.writer.end_node();
    }

    fn write_parameter(&mut self, parameter: &Parameter) -> Result<()> {
        match &parameter.value {
            ParameterValue::File(file_name) => {
                self.writer.start_node("PARAMETERFILE");
                self.writer.add_quoted_string(&parameter.name);
                self.writer.add_quoted_string(file_name);
                self.write_usage(&parameter.usage);
                self.writer.end_node();
            }
            ParameterValue::Numeric(value) => {
                self.writer.start_node("PARAMETER");
                self.writer.add_quoted_string(&parameter.name);
                self.writer.add(&format_float(*value));
                if self.rules.parameter_unit {
                    if let Some(unit) = &parameter.unit {
                        self.write_unit(unit)?;
                    }
                    self.write_usage(&parameter.usage);
                }
                self.writer.end_node();
            }
        }
        Ok(())
    }

    /// Write the usage, identifiers and remarks of an object, as far as the dialect allows.
    fn write_usage(&mut self, usage: &ObjectUsage) {
        if self.rules.metadata {
            if usage.has_inline_usage() {
                self.write_usage_node(
                    usage.scope.as_deref(),
                    usage.area.as_deref(),
                    usage.bbox.as_ref(),
                );
            } else if let Some(usages) = &usage.usages {
                for Usage { scope, area, bbox } in usages {
                    self.write_usage_node(scope.as_deref(), area.as_deref(), bbox.as_ref());
                }
            }
        } else if usage.has_inline_usage() || usage.usages.is_some() || usage.remarks.is_some() {
            debug!("Dropping usage and remarks: not expressible in {}", self.version);
        }

        if let Some(id) = &usage.id {
            self.write_id(id);
        } else if let Some(ids) = &usage.ids {
            if self.rules.metadata {
                for id in ids {
                    self.write_id(id);
                }
            } else {
                debug!("Dropping {} identifiers: not expressible in {}", ids.len(), self.version);
            }
        }

        if self.rules.metadata {
            if let Some(remarks) = &usage.remarks {
                self.writer.start_node("REMARK");
                self.writer.add_quoted_string(remarks);
                self.writer.end_node();
            }
        }
    }

    fn write_usage_node(&mut self, scope: Option<&str>, area: Option<&str>, bbox: Option<&BBox>) {
        self.writer.start_node("USAGE");
        if let Some(scope) = scope {
            self.writer.start_node("SCOPE");
            self.writer.add_quoted_string(scope);
            self.writer.end_node();
        }
        if let Some(area) = area {
            self.writer.start_node("AREA");
            self.writer.add_quoted_string(area);
            self.writer.end_node();
        }
        if let Some(bbox) = bbox {
            self.writer.start_node("BBOX");
            self.writer.add(&format_float(bbox.south_latitude));
            self.writer.add(&format_float(bbox.west_longitude));
            self.writer.add(&format_float(bbox.north_latitude));
            self.writer.add(&format_float(bbox.east_longitude));
            self.writer.end_node();
        }
        self.writer.end_node();
    }

    fn write_id(&mut self, id: &Id) {
        self.writer.start_node(self.rules.identifier);
        self.writer.add_quoted_string(&id.authority);
        let code = id.code.to_string();
        if id.code.is_numeric() && !self.rules.quote_numeric_codes {
            self.writer.add(&code);
        } else {
            self.writer.add_quoted_string(&code);
        }
        self.writer.end_node();
    }
}

fn required_ellipsoid<'a>(
    ellipsoid: Option<&'a Ellipsoid>,
    datum_name: &str,
) -> Result<&'a Ellipsoid> {
    ellipsoid
        .ok_or_else(|| ProjJsonError::MissingRequiredField(format!("ellipsoid in {datum_name}")))
}
