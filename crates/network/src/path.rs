use crate::{LinkId, OdIndex};

/// One row of the path table: the OD pair a path serves and the links it
/// traverses, in order.
///
/// External path tables pad every row to a common width with `0`. Those
/// entries are padding, not links, and [`Path::from_padded_row`] strips them
/// while converting the rest into typed ids. Link order is preserved, but
/// only membership matters to the solver; a path listing the same link twice
/// contributes its flow to that link twice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// The OD pair this path connects.
    pub od: OdIndex,
    /// Links traversed, in order.
    pub links: Vec<LinkId>,
}

impl Path {
    /// Creates a path from already-typed ids.
    #[must_use]
    pub fn new(od: OdIndex, links: Vec<LinkId>) -> Self {
        Self { od, links }
    }

    /// Parses a padded path-table row.
    ///
    /// `od_index` is the row's 1-based OD index and `link_ids` its 1-based
    /// link ids with `0` padding. Zero entries are skipped wherever they
    /// appear in the row. Returns `None` when `od_index` itself is `0`.
    ///
    /// # Examples
    /// ```
    /// use wardrop_network::Path;
    ///
    /// let path = Path::from_padded_row(2, &[4, 7, 0, 0]).unwrap();
    /// assert_eq!(path.od.get(), 2);
    /// assert_eq!(path.links.len(), 2);
    ///
    /// assert!(Path::from_padded_row(0, &[1]).is_none());
    /// ```
    #[must_use]
    pub fn from_padded_row(od_index: usize, link_ids: &[usize]) -> Option<Self> {
        let od = OdIndex::new(od_index)?;
        let links = link_ids.iter().copied().filter_map(LinkId::new).collect();
        Some(Self { od, links })
    }
}
