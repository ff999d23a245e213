use std::{fmt, num::NonZeroUsize};

/// Identifier of an origin-destination pair, 1-based as in the external
/// tables.
///
/// Path-table rows name the OD pair they serve by this index. A valid OD
/// table numbers its rows contiguously from 1, so [`OdIndex::index`] is the
/// 0-based position of the pair's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct OdIndex(NonZeroUsize);

impl OdIndex {
    /// Creates an `OdIndex` from a 1-based table value, `None` for `0`.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    /// The 1-based index as it appears in the tables.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based position of the pair's row.
    #[must_use]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for OdIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the origin-destination table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct OdPair {
    /// Origin node.
    pub origin: u32,
    /// Destination node.
    pub destination: u32,
    /// Travel demand from origin to destination. Must be finite and
    /// non-negative.
    pub demand: f64,
}

impl OdPair {
    /// Creates an OD row.
    #[must_use]
    pub fn new(origin: u32, destination: u32, demand: f64) -> Self {
        Self {
            origin,
            destination,
            demand,
        }
    }
}
