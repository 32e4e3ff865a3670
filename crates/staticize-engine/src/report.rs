//! Change report
//!
//! One [`StaticChange`] per rewritten method, in source order. The report is
//! filled in dry runs too, where the unit itself is left unchanged.

use serde::Serialize;
use staticize_tree::{MethodSignature, Span};

/// A method that was (or in a dry run, would be) made static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticChange {
    /// Signature of the rewritten method.
    pub method: MethodSignature,
    /// Location of the method declaration.
    pub span: Span,
    /// Modifier list before the rewrite, as written.
    pub before: String,
    /// Modifier list after the rewrite.
    pub after: String,
}

/// Changes made to one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Path of the compilation unit, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// Whether the unit was left untouched.
    pub dry_run: bool,
    /// Rewritten methods, in source order.
    pub changes: Vec<StaticChange>,
}

impl PassReport {
    /// Empty report for one unit.
    pub fn new(source_path: Option<String>, dry_run: bool) -> Self {
        Self {
            source_path,
            dry_run,
            changes: Vec::new(),
        }
    }

    /// Whether no method was rewritten.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of rewritten methods.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staticize_tree::Position;

    #[test]
    fn test_report_json() {
        let mut report = PassReport::new(Some("src/A.java".to_string()), false);
        report.changes.push(StaticChange {
            method: MethodSignature::new("A", "f", ["int"], "int"),
            span: Span {
                start: Position { line: 3, column: 5 },
                end: Position { line: 5, column: 5 },
            },
            before: "private".to_string(),
            after: "private static".to_string(),
        });

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["source_path"], "src/A.java");
        assert_eq!(json["dry_run"], false);
        assert_eq!(json["changes"][0]["method"]["name"], "f");
        assert_eq!(json["changes"][0]["after"], "private static");
        assert_eq!(json["changes"][0]["span"]["start"]["line"], 3);
        assert_eq!(json["changes"][0]["span"]["end"]["line"], 5);
    }

    #[test]
    fn test_empty_report_omits_path() {
        let report = PassReport::default();
        assert!(report.is_empty());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(json.get("source_path").is_none());
        assert_eq!(json["changes"].as_array().map(Vec::len), Some(0));
    }
}
