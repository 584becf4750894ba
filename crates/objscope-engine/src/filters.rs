use serde::{Deserialize, Serialize};

/// Visibility filters applied at extraction time.
///
/// Hidden members never become tree nodes; toggling a filter rebuilds
/// the whole tree rather than pruning fetched nodes in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Include members that support invocation.
    pub show_callables: bool,
    /// Include members named with the reserved `__name__` convention.
    pub show_special: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            show_callables: true,
            show_special: true,
        }
    }
}
