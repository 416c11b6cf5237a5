//! Classification of how an archive's classpath gets resolved.

use crate::core::coordinate::looks_like_coordinate;

/// Which resolution path applies to an archive, decided once per call.
///
/// Variants are listed in priority order; the first that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassPathPlan<'a> {
    /// The archive is identified by a coordinate: resolve extras plus it.
    Coordinate {
        extras: &'a [String],
        coordinate: &'a str,
    },
    /// Resolve extras, then append the manifest's literal classpath.
    Embedded {
        extras: &'a [String],
        class_path: &'a str,
    },
    /// Plain archive without an embedded classpath: resolve extras only.
    ExtrasOnly { extras: &'a [String] },
    /// Nothing to resolve.
    Empty,
}

impl<'a> ClassPathPlan<'a> {
    pub fn classify(
        original_resource: Option<&'a str>,
        embedded_class_path: Option<&'a str>,
        extras: &'a [String],
    ) -> Self {
        if let Some(coordinate) = original_resource
            .map(str::trim)
            .filter(|res| looks_like_coordinate(res))
        {
            return Self::Coordinate { extras, coordinate };
        }
        if let Some(class_path) = embedded_class_path {
            return Self::Embedded { extras, class_path };
        }
        if !extras.is_empty() {
            return Self::ExtrasOnly { extras };
        }
        Self::Empty
    }

    /// Coordinates handed to the resolver, in order. Empty for [`Self::Empty`].
    pub fn coordinates(&self) -> Vec<String> {
        match self {
            Self::Coordinate { extras, coordinate } => {
                let mut coordinates = extras.to_vec();
                coordinates.push((*coordinate).to_string());
                coordinates
            }
            Self::Embedded { extras, .. } | Self::ExtrasOnly { extras } => extras.to_vec(),
            Self::Empty => Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coordinate { .. } => "coordinate",
            Self::Embedded { .. } => "embedded",
            Self::ExtrasOnly { .. } => "extras-only",
            Self::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn coordinate_wins_over_embedded_class_path() {
        let extras = deps(&["a:b:1"]);
        let plan = ClassPathPlan::classify(Some("com.example:lib:1.0"), Some("/x.jar"), &extras);
        assert!(matches!(plan, ClassPathPlan::Coordinate { .. }));
        assert_eq!(plan.coordinates(), deps(&["a:b:1", "com.example:lib:1.0"]));
    }

    #[test]
    fn coordinate_is_trimmed_before_resolution() {
        let plan = ClassPathPlan::classify(Some("  com.example:lib:1.0\n"), None, &[]);
        assert_eq!(
            plan,
            ClassPathPlan::Coordinate {
                extras: &[],
                coordinate: "com.example:lib:1.0"
            }
        );
        assert_eq!(plan.coordinates(), deps(&["com.example:lib:1.0"]));
    }

    #[test]
    fn embedded_when_resource_is_a_path() {
        let extras = deps(&["a:b:1"]);
        let plan = ClassPathPlan::classify(Some("/tmp/app.jar"), Some("/x.jar"), &extras);
        assert_eq!(
            plan,
            ClassPathPlan::Embedded {
                extras: &extras,
                class_path: "/x.jar"
            }
        );
        assert_eq!(plan.coordinates(), extras);
    }

    #[test]
    fn extras_only_without_embedded_class_path() {
        let extras = deps(&["a:b:1"]);
        let plan = ClassPathPlan::classify(None, None, &extras);
        assert_eq!(plan, ClassPathPlan::ExtrasOnly { extras: &extras });
    }

    #[test]
    fn empty_when_nothing_applies() {
        let plan = ClassPathPlan::classify(Some("app.jar"), None, &[]);
        assert_eq!(plan, ClassPathPlan::Empty);
        assert!(plan.coordinates().is_empty());
        assert_eq!(plan.name(), "empty");
    }

    #[test]
    fn embedded_with_no_extras_is_still_embedded() {
        let plan = ClassPathPlan::classify(None, Some("/x.jar"), &[]);
        assert!(matches!(plan, ClassPathPlan::Embedded { .. }));
    }
}
