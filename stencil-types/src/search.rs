use std::collections::BTreeSet;

/// Traversal direction for a filesystem search.
///
/// `Forward` descends into subdirectories; `Reverse` lists the start
/// directory and then walks up through its parents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchDirection {
    #[default]
    Forward,
    Reverse,
}

/// Filter and depth options for a filesystem search.
///
/// Empty include-sets mean "no restriction", not "match nothing". When a
/// name appears in both an include-set and the corresponding exclude-set,
/// exclusion wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Remaining traversal hops. `None` is unbounded; `Some(0)` restricts
    /// the search to the start directory's own files.
    pub depth: Option<u32>,

    pub include_file_names: BTreeSet<String>,
    pub include_directories: BTreeSet<String>,
    pub include_extensions: BTreeSet<String>,

    pub exclude_file_names: BTreeSet<String>,
    pub exclude_directories: BTreeSet<String>,
    pub exclude_extensions: BTreeSet<String>,

    pub direction: SearchDirection,
}

impl SearchOptions {
    /// Options that match every file, unbounded forward descent.
    pub fn all() -> Self {
        Self::default()
    }

    /// Forward search restricted to the given extensions.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include_extensions: extensions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Same filters, reverse direction.
    pub fn reversed(self) -> Self {
        Self {
            direction: SearchDirection::Reverse,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_unbounded_forward() {
        let opts = SearchOptions::default();
        assert_eq!(opts.depth, None);
        assert_eq!(opts.direction, SearchDirection::Forward);
    }

    #[test]
    fn reversed_flips_direction_only() {
        let opts = SearchOptions::with_extensions(["ts"]).reversed();
        assert_eq!(opts.direction, SearchDirection::Reverse);
        assert!(opts.include_extensions.contains("ts"));
    }

    #[test]
    fn with_extensions_collects_set() {
        let opts = SearchOptions::with_extensions(["ts", "js"]);
        assert!(opts.include_extensions.contains("ts"));
        assert!(opts.include_extensions.contains("js"));
        assert!(opts.include_file_names.is_empty());
    }
}
