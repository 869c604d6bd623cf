//! Non-fatal findings raised while emitting descriptors.

use thiserror::Error;

/// A shape problem found during emission.
///
/// Under the lenient policy these are logged and collected while the tree is
/// still produced; under the strict policy the first one aborts emission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A value list had the wrong number of entries.
    #[error("{element}: missing values' list length should be {expected} but {actual}")]
    ShapeMismatch {
        /// Tag of the element whose attributes were skipped.
        element: String,
        /// Number of values the element needs.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Geometry kind outside box, cylinder and sphere.
    #[error("missing geometry type : {kind}")]
    UnrecognizedGeometry {
        /// The kind string as given.
        kind: String,
    },
}

impl Diagnostic {
    /// Create a shape mismatch diagnostic.
    pub fn shape_mismatch(element: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            element: element.into(),
            expected,
            actual,
        }
    }

    /// Create an unrecognized geometry diagnostic.
    pub fn unrecognized_geometry(kind: impl Into<String>) -> Self {
        Self::UnrecognizedGeometry { kind: kind.into() }
    }

    /// Tag of the element the diagnostic refers to.
    pub fn element(&self) -> &str {
        match self {
            Self::ShapeMismatch { element, .. } => element,
            Self::UnrecognizedGeometry { kind } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message() {
        let diag = Diagnostic::shape_mismatch("box", 3, 2);
        assert_eq!(
            diag.to_string(),
            "box: missing values' list length should be 3 but 2"
        );
        assert_eq!(diag.element(), "box");
    }

    #[test]
    fn unrecognized_geometry_message() {
        let diag = Diagnostic::unrecognized_geometry("mesh");
        assert_eq!(diag.to_string(), "missing geometry type : mesh");
        assert_eq!(diag.element(), "mesh");
    }
}
