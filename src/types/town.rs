//! Definition of the `Town` identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names a vertex in the road network.
///
/// A town is identified by its display name alone; the graph only
/// relies on equality and hashing. `Ord` is derived so town listings
/// can be sorted for stable display, not because names carry any
/// semantic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Town(String);

impl Town {
    /// Creates a town identifier from any string-like name.
    pub fn new(name: impl Into<String>) -> Town {
        Town(name.into())
    }

    /// The display name of the town.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Town {
        Town(name.to_string())
    }
}

impl From<String> for Town {
    fn from(name: String) -> Town {
        Town(name)
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
