use serde::Deserialize;

/// Metadata shared by almost every PROJJSON object: where and why it is valid, its identifiers
/// and free-form remarks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectUsage {
    /// Purpose of the object.
    pub scope: Option<String>,

    /// Textual description of the area of use.
    pub area: Option<String>,

    /// Geographic bounding box of the area of use.
    pub bbox: Option<BBox>,

    /// Several usages, used when `scope`, `area` and `bbox` are not given inline.
    pub usages: Option<Vec<Usage>>,

    /// The single identifier of the object.
    pub id: Option<Id>,

    /// Several identifiers, used when `id` is not given.
    pub ids: Option<Vec<Id>>,

    /// Free-form remarks.
    pub remarks: Option<String>,
}

impl ObjectUsage {
    /// Whether a scope, area or bounding box is given inline.
    pub fn has_inline_usage(&self) -> bool {
        self.scope.is_some() || self.area.is_some() || self.bbox.is_some()
    }
}

/// One entry of [`ObjectUsage::usages`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Usage {
    /// Purpose of the object.
    pub scope: Option<String>,

    /// Textual description of the area of use.
    pub area: Option<String>,

    /// Geographic bounding box of the area of use.
    pub bbox: Option<BBox>,
}

/// A geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BBox {
    /// Southern bound.
    pub south_latitude: f64,
    /// Western bound.
    pub west_longitude: f64,
    /// Northern bound.
    pub north_latitude: f64,
    /// Eastern bound.
    pub east_longitude: f64,
}

/// An identifier assigned by an authority, such as `EPSG:4326`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Id {
    /// The authority, e.g. `EPSG`.
    pub authority: String,

    /// The code within the authority.
    pub code: IdCode,
}

impl Id {
    /// Create an identifier with a numeric code.
    pub fn new(authority: impl Into<String>, code: i64) -> Self {
        Self {
            authority: authority.into(),
            code: IdCode::Integer(code),
        }
    }
}

/// The code of an [`Id`], which PROJJSON allows to be either a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdCode {
    /// An integer code, the usual case.
    Integer(i64),
    /// A non-integral numeric code.
    Float(f64),
    /// A textual code.
    Text(String),
}

impl IdCode {
    /// Whether the code is numeric and may be written unquoted.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl std::fmt::Display for IdCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(code) => write!(f, "{code}"),
            Self::Float(code) => write!(f, "{code}"),
            Self::Text(code) => f.write_str(code),
        }
    }
}
