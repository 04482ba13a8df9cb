use serde_json::Value;

use super::error::BuildError;
use crate::model::cv::{CollectiveVariable, CvList};
use crate::schema::{registry, validate};

/// Root path under which CV documents are reported by default.
pub const DEFAULT_PATH: &str = "#/CVs";

/// Builds a single collective variable, reporting errors under
/// [`DEFAULT_PATH`].
pub fn build_cv(doc: &Value) -> Result<CollectiveVariable, BuildError> {
    build_cv_at(doc, DEFAULT_PATH)
}

/// Builds a single collective variable from one configuration document.
///
/// Dispatch runs in three stages: resolve the discriminator (`type`,
/// defaulting to `"none"`), validate the document against the registered
/// schema for that tag, then extract fields and construct the variant.
/// Validation collects every violation before failing; extraction applies
/// the declared field defaults and performs no further structural checks.
///
/// # Errors
///
/// - [`BuildError::UnknownType`] if the tag has no registered schema.
/// - [`BuildError::SchemaViolation`] with all violations found.
/// - [`BuildError::Construction`] if a validated field cannot be mapped to
///   its internal representation.
pub fn build_cv_at(doc: &Value, path: &str) -> Result<CollectiveVariable, BuildError> {
    let tag = doc.get("type").and_then(Value::as_str).unwrap_or("none");

    let entry = registry::lookup(tag).ok_or_else(|| BuildError::unknown_type(path, tag))?;

    let errors = validate::collect(&entry.schema, doc, path);
    if !errors.is_empty() {
        return Err(BuildError::SchemaViolation(errors));
    }

    (entry.construct)(doc)
}

/// Builds every collective variable in a batch document, reporting errors
/// under [`DEFAULT_PATH`].
pub fn build_cvs(doc: &Value) -> Result<CvList, BuildError> {
    build_cvs_at(doc, DEFAULT_PATH)
}

/// Builds an ordered list of collective variables from an array document.
///
/// The document itself must be an array; each element is then built
/// independently with the path extended by its zero-based index
/// (`#/CVs/0`, `#/CVs/1`, ...). The batch is fail-fast: the first failing
/// element aborts the whole build and no partial list is returned.
pub fn build_cvs_at(doc: &Value, path: &str) -> Result<CvList, BuildError> {
    let errors = validate::collect(registry::cv_array_validator(), doc, path);
    if !errors.is_empty() {
        return Err(BuildError::SchemaViolation(errors));
    }

    // The array schema just passed, so this cannot miss.
    let Some(elements) = doc.as_array() else {
        return Err(BuildError::construction(
            "validated CV batch is not an array",
        ));
    };

    let mut cvs = CvList::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        cvs.push(build_cv_at(element, &format!("{path}/{i}"))?);
    }
    Ok(cvs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::axis::Axis;
    use serde_json::json;

    fn valid_documents() -> Vec<Value> {
        vec![
            json!({"type": "AtomCoordinate", "atom id": 2, "dimension": "z"}),
            json!({
                "type": "AtomPosition",
                "atom id": 1,
                "position": [0.5, -1.0, 2.25],
                "fixx": true,
                "fixy": false,
                "fixz": true
            }),
            json!({"type": "Torsional", "atom ids": [5, 6, 7, 8], "periodic": false}),
            json!({"type": "AtomSeparation", "atom id 1": 3, "atom id 2": 7}),
            json!({"type": "Angle", "atom ids": [1, 2, 3]}),
            json!({"type": "RadiusOfGyration", "atom ids": [1, 20], "use_range": true}),
            json!({
                "type": "CenterofMassDistance",
                "atom ids1": [1, 2, 3],
                "atom ids2": [4, 5],
                "use_range1": false,
                "use_range2": true
            }),
            json!({
                "type": "RMSD",
                "atom ids": [1, 2, 3, 4],
                "reference": "reference.xyz",
                "use_range": false
            }),
        ]
    }

    #[test]
    fn every_supported_variant_builds() {
        let expected = [
            "AtomCoordinate",
            "AtomPosition",
            "Torsional",
            "AtomSeparation",
            "Angle",
            "RadiusOfGyration",
            "CenterofMassDistance",
            "RMSD",
        ];
        for (doc, kind) in valid_documents().iter().zip(expected) {
            let cv = build_cv(doc).unwrap_or_else(|e| panic!("{kind} failed: {e}"));
            assert_eq!(cv.kind(), kind);
        }
    }

    #[test]
    fn unknown_type_names_the_offending_tag() {
        let err = build_cv_at(&json!({"type": "Bogus"}), "#/CVs/0").unwrap_err();
        match &err {
            BuildError::UnknownType { path, tag } => {
                assert_eq!(path, "#/CVs/0");
                assert_eq!(tag, "Bogus");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("Bogus"));
    }

    #[test]
    fn absent_type_defaults_to_none_and_is_unknown() {
        let err = build_cv(&json!({"atom id": 1})).unwrap_err();
        match err {
            BuildError::UnknownType { tag, .. } => assert_eq!(tag, "none"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_required_field_reports_the_document_path() {
        let err =
            build_cv_at(&json!({"type": "Torsional"}), "#/CVs/4").unwrap_err();
        match err {
            BuildError::SchemaViolation(errors) => {
                assert!(!errors.is_empty());
                assert!(errors.iter().any(|e| e.path == "#/CVs/4"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn undeclared_extra_field_is_a_schema_violation() {
        let doc = json!({
            "type": "AtomSeparation",
            "atom id 1": 3,
            "atom id 2": 7,
            "smoothing": 0.5
        });
        let err = build_cv(&doc).unwrap_err();
        assert!(matches!(err, BuildError::SchemaViolation(_)));
    }

    #[test]
    fn all_violations_are_reported_together() {
        // Wrong dimension token and a missing atom id in one document.
        let doc = json!({"type": "AtomCoordinate", "dimension": "q"});
        let err = build_cv(&doc).unwrap_err();
        match err {
            BuildError::SchemaViolation(errors) => assert!(errors.len() >= 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn dimension_tokens_map_to_coordinate_indices() {
        for (token, index) in [("x", 0), ("y", 1), ("z", 2)] {
            let doc = json!({"type": "AtomCoordinate", "atom id": 2, "dimension": token});
            match build_cv(&doc).unwrap() {
                CollectiveVariable::AtomCoordinate(c) => assert_eq!(c.axis.index(), index),
                other => panic!("unexpected variant: {:?}", other),
            }
        }
    }

    #[test]
    fn out_of_enum_dimension_is_a_schema_violation() {
        let doc = json!({"type": "AtomCoordinate", "atom id": 2, "dimension": "w"});
        let err = build_cv(&doc).unwrap_err();
        assert!(matches!(err, BuildError::SchemaViolation(_)));
    }

    #[test]
    fn building_twice_yields_equal_independent_objects() {
        let doc = json!({"type": "Torsional", "atom ids": [1, 2, 3, 4]});
        let first = build_cv(&doc).unwrap();
        let second = build_cv(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn schema_valid_float_ids_build_successfully() {
        // "integer" in the schema admits zero-fraction floats, so a build
        // must accept them end to end rather than refusing at extraction.
        let doc = json!({"type": "AtomSeparation", "atom id 1": 3.0, "atom id 2": 7});
        match build_cv(&doc).unwrap() {
            CollectiveVariable::AtomSeparation(c) => {
                assert_eq!(c.atom_id1, 3);
                assert_eq!(c.atom_id2, 7);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn atom_separation_scenario() {
        let doc = json!({"type": "AtomSeparation", "atom id 1": 3, "atom id 2": 7});
        match build_cv(&doc).unwrap() {
            CollectiveVariable::AtomSeparation(c) => {
                assert_eq!(c.atom_id1, 3);
                assert_eq!(c.atom_id2, 7);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn batch_preserves_source_order() {
        let docs = valid_documents();
        let batch = Value::Array(docs.clone());
        let cvs = build_cvs(&batch).unwrap();
        assert_eq!(cvs.len(), docs.len());
        for (cv, doc) in cvs.iter().zip(&docs) {
            assert_eq!(cv.kind(), doc["type"].as_str().unwrap());
        }
    }

    #[test]
    fn batch_with_axis_default_applies_it() {
        let batch = json!([{"type": "AtomCoordinate", "atom id": 9, "dimension": "x"}]);
        let cvs = build_cvs(&batch).unwrap();
        match &cvs[0] {
            CollectiveVariable::AtomCoordinate(c) => {
                assert_eq!(c.atom_id, 9);
                assert_eq!(c.axis, Axis::X);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn batch_fails_fast_on_last_invalid_element() {
        let batch = json!([
            {"type": "Angle", "atom ids": [1, 2, 3]},
            {"type": "AtomSeparation", "atom id 1": 1, "atom id 2": 2},
            {"type": "Torsional"}
        ]);
        let err = build_cvs(&batch).unwrap_err();
        match err {
            BuildError::SchemaViolation(errors) => {
                assert!(errors.iter().any(|e| e.path.starts_with("#/CVs/2")));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn batch_unknown_type_reports_element_path() {
        let batch = json!([
            {"type": "Angle", "atom ids": [1, 2, 3]},
            {"type": "Bogus"}
        ]);
        let err = build_cvs(&batch).unwrap_err();
        match err {
            BuildError::UnknownType { path, tag } => {
                assert_eq!(path, "#/CVs/1");
                assert_eq!(tag, "Bogus");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_array_batch_is_a_schema_violation() {
        let err = build_cvs(&json!({"type": "Angle", "atom ids": [1, 2, 3]})).unwrap_err();
        match err {
            BuildError::SchemaViolation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].path, "#/CVs");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn custom_root_path_flows_into_element_errors() {
        let batch = json!([{"type": "Bogus"}]);
        let err = build_cvs_at(&batch, "#/walkers/0/CVs").unwrap_err();
        match err {
            BuildError::UnknownType { path, .. } => assert_eq!(path, "#/walkers/0/CVs/0"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
