//! Record normalizer
//!
//! Projects a raw upstream record onto a declared set of fields, filling
//! every missing field from its default. The output never carries fields
//! that were not declared, so renderers only ever see the shape they expect.

use serde_json::{Map, Value};

/// Predicate deciding whether a present value has a usable type
pub type Accepts = fn(&Value) -> bool;

/// One declared field and the value it falls back to
#[derive(Debug, Clone)]
struct FieldDefault {
    name: String,
    /// For container fields: the only sub-field kept (e.g. `image.medium`).
    /// The container counts as present only when this sub-field is.
    required_key: Option<String>,
    default: Value,
    accepts: Accepts,
}

/// Ordered mapping from field name to default value
///
/// Built fresh for each record kind; see [`DefaultSpec::shows`] and
/// [`DefaultSpec::episodes`] for the ones the browser uses.
///
/// # Example
/// ```
/// use serde_json::json;
/// use tvmaze_core::{DefaultSpec, normalize};
///
/// let spec = DefaultSpec::new().field("name", "Unknown").field("rank", 0);
/// let out = normalize(&spec, &json!({ "name": null, "extra": true }));
/// assert_eq!(serde_json::Value::Object(out), json!({ "name": "Unknown", "rank": 0 }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultSpec {
    fields: Vec<FieldDefault>,
}

impl DefaultSpec {
    /// Empty spec; normalizing against it yields an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a plain field accepting any non-blank value
    ///
    /// Re-declaring a name replaces its default but keeps its position.
    pub fn field(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.field_where(name, default, accept_any)
    }

    /// Declare a plain field whose value must also satisfy `accepts`
    ///
    /// Values of the wrong type fall back to the default, like missing ones.
    pub fn field_where(
        self,
        name: impl Into<String>,
        default: impl Into<Value>,
        accepts: Accepts,
    ) -> Self {
        self.declare(FieldDefault {
            name: name.into(),
            required_key: None,
            default: default.into(),
            accepts,
        })
    }

    /// Declare a container field projected down to its `required_key`
    ///
    /// When the sub-field is missing, the whole `default` is substituted,
    /// never merged. Other sub-fields upstream sends are dropped.
    pub fn nested(
        self,
        name: impl Into<String>,
        required_key: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        self.nested_where(name, required_key, default, accept_any)
    }

    /// Like [`DefaultSpec::nested`], with a type check on the sub-field
    pub fn nested_where(
        self,
        name: impl Into<String>,
        required_key: impl Into<String>,
        default: impl Into<Value>,
        accepts: Accepts,
    ) -> Self {
        self.declare(FieldDefault {
            name: name.into(),
            required_key: Some(required_key.into()),
            default: default.into(),
            accepts,
        })
    }

    fn declare(mut self, field: FieldDefault) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }
}

/// Normalize a raw record against a spec
///
/// For each declared field, in order, keeps the raw value if it is present,
/// not missing and of an accepted type, otherwise substitutes the default.
/// A non-object `raw` is treated as an empty record.
pub fn normalize(spec: &DefaultSpec, raw: &Value) -> Map<String, Value> {
    let source = raw.as_object();

    spec.fields
        .iter()
        .map(|field| {
            let value = source
                .and_then(|obj| obj.get(&field.name))
                .and_then(|value| project(field, value))
                .unwrap_or_else(|| field.default.clone());
            (field.name.clone(), value)
        })
        .collect()
}

/// Usable part of a raw value, or `None` if the default applies
fn project(field: &FieldDefault, value: &Value) -> Option<Value> {
    match &field.required_key {
        None => usable(value, field.accepts).then(|| value.clone()),
        Some(key) => {
            let inner = value.as_object()?.get(key)?;
            usable(inner, field.accepts).then(|| {
                let mut projected = Map::new();
                projected.insert(key.clone(), inner.clone());
                Value::Object(projected)
            })
        }
    }
}

fn usable(value: &Value, accepts: Accepts) -> bool {
    !is_blank(value) && accepts(value)
}

/// Absent, null and empty-string values are all treated the same
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn accept_any(_: &Value) -> bool {
    true
}
