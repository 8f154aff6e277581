//! # Raw Document Access — Violation-Collecting Field Readers
//!
//! Internal layer between `serde_json::Value` documents and the validation
//! rules. A [`Report`] accumulates violations across the whole pass; a
//! [`Fields`] wraps one raw object and offers typed accessors that record
//! a violation (missing field, wrong JSON type) and return `None` instead
//! of failing fast, so one validation call reports every problem at once.
//!
//! Invariant: every accessor that returns `None` has already pushed at
//! least one violation. [`Report::finish`] relies on this to guarantee a
//! non-empty report whenever assembly fails.

use serde_json::{Map, Value};

use ttpg_core::{ErrorReport, FieldPath, Violation, ViolationKind};

/// Accumulates violations for one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, path: FieldPath, kind: ViolationKind) {
        self.violations.push(Violation::new(path, kind));
    }

    /// Whether no violation has been recorded yet.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Close the pass: return the value if it assembled cleanly, otherwise
    /// the aggregated report.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ErrorReport> {
        match value {
            Some(value) if self.violations.is_empty() => Ok(value),
            _ => Err(ErrorReport::from_violations(self.violations)),
        }
    }
}

/// Build a single-violation report, for fail-fast classification errors.
pub(crate) fn single(path: FieldPath, kind: ViolationKind) -> ErrorReport {
    ErrorReport::from_violations(vec![Violation::new(path, kind)])
}

/// Typed accessors over one raw JSON object.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>, path: FieldPath) -> Self {
        Self { map, path }
    }

    /// The path of a field inside this object.
    pub fn at(&self, name: &'static str) -> FieldPath {
        self.path.field(name)
    }

    /// Whether the field exists, whatever its value.
    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// The keys present in this object, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    /// Require a field to be present.
    pub fn require(&self, report: &mut Report, name: &'static str) -> Option<&'a Value> {
        let value = self.map.get(name);
        if value.is_none() {
            report.push(self.at(name), ViolationKind::MissingRequiredField);
        }
        value
    }

    /// Require a string field.
    pub fn req_str(&self, report: &mut Report, name: &'static str) -> Option<&'a str> {
        match self.require(report, name)? {
            Value::String(s) => Some(s),
            _ => {
                report.push(self.at(name), ViolationKind::TypeMismatch { expected: "string" });
                None
            }
        }
    }

    /// Require a string field, owned.
    pub fn req_string(&self, report: &mut Report, name: &'static str) -> Option<String> {
        self.req_str(report, name).map(str::to_string)
    }

    /// Require a boolean field.
    pub fn req_bool(&self, report: &mut Report, name: &'static str) -> Option<bool> {
        match self.require(report, name)? {
            Value::Bool(b) => Some(*b),
            _ => {
                report.push(self.at(name), ViolationKind::TypeMismatch { expected: "boolean" });
                None
            }
        }
    }

    /// Require a finite numeric field.
    pub fn req_f64(&self, report: &mut Report, name: &'static str) -> Option<f64> {
        let value = self.require(report, name)?;
        match value.as_f64() {
            Some(number) if number.is_finite() => Some(number),
            Some(_) => {
                report.push(self.at(name), ViolationKind::NonFiniteComponent);
                None
            }
            None => {
                report.push(self.at(name), ViolationKind::TypeMismatch { expected: "number" });
                None
            }
        }
    }

    /// Require a signed integer field.
    pub fn req_i64(&self, report: &mut Report, name: &'static str) -> Option<i64> {
        let value = self.require(report, name)?;
        match value.as_i64() {
            Some(number) => Some(number),
            None => {
                report.push(self.at(name), ViolationKind::TypeMismatch { expected: "integer" });
                None
            }
        }
    }

    /// Require a non-negative integer field that fits in `u32`.
    pub fn req_u32(&self, report: &mut Report, name: &'static str) -> Option<u32> {
        let value = self.require(report, name)?;
        match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(number) => Some(number),
            None => {
                report.push(
                    self.at(name),
                    ViolationKind::TypeMismatch { expected: "non-negative integer" },
                );
                None
            }
        }
    }

    /// Require an array field.
    pub fn req_array(&self, report: &mut Report, name: &'static str) -> Option<&'a Vec<Value>> {
        match self.require(report, name)? {
            Value::Array(items) => Some(items),
            _ => {
                report.push(self.at(name), ViolationKind::TypeMismatch { expected: "array" });
                None
            }
        }
    }

    /// Require an object field.
    pub fn req_object(&self, report: &mut Report, name: &'static str) -> Option<&'a Map<String, Value>> {
        match self.require(report, name)? {
            Value::Object(map) => Some(map),
            _ => {
                report.push(self.at(name), ViolationKind::TypeMismatch { expected: "object" });
                None
            }
        }
    }

    /// Require an array of strings, owned.
    pub fn req_str_array(&self, report: &mut Report, name: &'static str) -> Option<Vec<String>> {
        let items = self.req_array(report, name)?;
        let path = self.at(name);
        let mut out = Vec::with_capacity(items.len());
        let mut clean = true;
        for (index, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(s) => out.push(s.to_string()),
                None => {
                    report.push(path.index(index), ViolationKind::TypeMismatch { expected: "string" });
                    clean = false;
                }
            }
        }
        clean.then_some(out)
    }

    /// Require an array of non-negative integers, owned.
    pub fn req_u32_array(&self, report: &mut Report, name: &'static str) -> Option<Vec<u32>> {
        let items = self.req_array(report, name)?;
        let path = self.at(name);
        let mut out = Vec::with_capacity(items.len());
        let mut clean = true;
        for (index, item) in items.iter().enumerate() {
            match item.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => out.push(n),
                None => {
                    report.push(
                        path.index(index),
                        ViolationKind::TypeMismatch { expected: "non-negative integer" },
                    );
                    clean = false;
                }
            }
        }
        clean.then_some(out)
    }

    /// Record a violation for every listed field that is present. Used to
    /// reject fields belonging to a non-selected variant or branch.
    pub fn forbid(&self, report: &mut Report, names: &[&'static str]) {
        for name in names {
            if self.map.contains_key(*name) {
                report.push(self.path.field(*name), ViolationKind::ForbiddenFieldPresent);
            }
        }
    }
}

/// View a value as an object, recording a violation otherwise.
pub(crate) fn as_object<'a>(
    value: &'a Value,
    path: &FieldPath,
    report: &mut Report,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => {
            report.push(path.clone(), ViolationKind::TypeMismatch { expected: "object" });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: &Value) -> Fields<'_> {
        Fields::new(value.as_object().expect("test doc must be an object"), FieldPath::root())
    }

    #[test]
    fn test_missing_field_recorded() {
        let doc = json!({});
        let mut report = Report::new();
        assert!(fields(&doc).req_str(&mut report, "Name").is_none());
        let report = report.finish::<()>(None).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].kind, ViolationKind::MissingRequiredField);
        assert_eq!(report.violations()[0].path.to_string(), "Name");
    }

    #[test]
    fn test_wrong_type_recorded() {
        let doc = json!({"Friction": "high"});
        let mut report = Report::new();
        assert!(fields(&doc).req_f64(&mut report, "Friction").is_none());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_accessors_pass_through() {
        let doc = json!({
            "Name": "die",
            "Flippable": true,
            "Friction": 0.4,
            "BackIndex": -1,
            "MaxCards": 32,
            "Tags": ["a", "b"],
            "Indices": [0, 1, 2]
        });
        let f = fields(&doc);
        let mut report = Report::new();
        assert_eq!(f.req_str(&mut report, "Name"), Some("die"));
        assert_eq!(f.req_bool(&mut report, "Flippable"), Some(true));
        assert_eq!(f.req_f64(&mut report, "Friction"), Some(0.4));
        assert_eq!(f.req_i64(&mut report, "BackIndex"), Some(-1));
        assert_eq!(f.req_u32(&mut report, "MaxCards"), Some(32));
        assert_eq!(f.req_str_array(&mut report, "Tags"), Some(vec!["a".into(), "b".into()]));
        assert_eq!(f.req_u32_array(&mut report, "Indices"), Some(vec![0, 1, 2]));
        assert!(report.is_clean());
    }

    #[test]
    fn test_negative_rejected_for_u32() {
        let doc = json!({"MaxCards": -3});
        let mut report = Report::new();
        assert!(fields(&doc).req_u32(&mut report, "MaxCards").is_none());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_forbid_records_only_present() {
        let doc = json!({"Radius": 1.0});
        let mut report = Report::new();
        fields(&doc).forbid(&mut report, &["Radius", "ShapeAccuracy"]);
        let report = report.finish::<()>(None).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path.to_string(), "Radius");
        assert_eq!(report.violations()[0].kind, ViolationKind::ForbiddenFieldPresent);
    }

    #[test]
    fn test_array_element_errors_keep_indices() {
        let doc = json!({"Tags": ["ok", 7, "fine", null]});
        let mut report = Report::new();
        assert!(fields(&doc).req_str_array(&mut report, "Tags").is_none());
        let report = report.finish::<()>(None).unwrap_err();
        let paths: Vec<String> = report.violations().iter().map(|v| v.path.to_string()).collect();
        assert_eq!(paths, vec!["Tags[1]", "Tags[3]"]);
    }

    #[test]
    fn test_finish_clean_value() {
        let report = Report::new();
        assert_eq!(report.finish(Some(7)).unwrap(), 7);
    }

    #[test]
    fn test_finish_rejects_value_with_violations() {
        let mut report = Report::new();
        report.push(FieldPath::root().field("Density"), ViolationKind::MissingRequiredField);
        assert!(report.finish(Some(7)).is_err());
    }
}
