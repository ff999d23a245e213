use std::{fmt, num::NonZeroUsize};

/// Identifier of a link, 1-based as in the external link table.
///
/// Path-table rows are padded with `0`, and a `0` entry names no link at
/// all; parsing one through [`LinkId::new`] yields `None`, so a stored
/// `LinkId` always refers to a real table row. [`LinkId::index`] converts to
/// the 0-based position used for array lookups.
///
/// # Examples
/// ```
/// use wardrop_network::LinkId;
///
/// assert!(LinkId::new(0).is_none());
///
/// let id = LinkId::new(3).unwrap();
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkId(NonZeroUsize);

impl LinkId {
    /// Creates a `LinkId` from a 1-based table value, `None` for the `0`
    /// padding sentinel.
    #[must_use]
    pub fn new(id: usize) -> Option<Self> {
        NonZeroUsize::new(id).map(Self)
    }

    /// The 1-based id as it appears in the table.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based index of the link's row.
    #[must_use]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the link table.
///
/// `from_node` and `to_node` describe topology and are carried through
/// untouched; the solver only reads `free_flow_time` and `capacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Node the link leaves from.
    pub from_node: u32,
    /// Node the link arrives at.
    pub to_node: u32,
    /// Travel time on the empty link. Must be finite and non-negative.
    pub free_flow_time: f64,
    /// Practical capacity. Must be finite and positive.
    pub capacity: f64,
}

impl Link {
    /// Creates a link row.
    #[must_use]
    pub fn new(from_node: u32, to_node: u32, free_flow_time: f64, capacity: f64) -> Self {
        Self {
            from_node,
            to_node,
            free_flow_time,
            capacity,
        }
    }
}
