use std::collections::HashMap;

use super::objects::GeomId;
use crate::analytic::{AnalyticObject, Point};

/// Per-picture bijection `GeomId ↔ AnalyticObject`.
///
/// Holds the picture's own realization of every node, including implicit
/// lines and circles that the picture itself knows nothing about.
#[derive(Clone, Debug, Default)]
pub(crate) struct AnalyticMap {
    by_geom: HashMap<GeomId, AnalyticObject>,
    by_analytic: HashMap<AnalyticObject, GeomId>,
}

impl AnalyticMap {
    /// Panics if either side is already mapped: equal analytic objects must
    /// have been merged into one node before insertion.
    pub(crate) fn insert(&mut self, geom: GeomId, analytic: AnalyticObject) {
        if let Some(owner) = self.by_analytic.get(&analytic) {
            panic!("{analytic:?} is already realized by {owner:?}");
        }
        let previous = self.by_geom.insert(geom, analytic);
        assert!(previous.is_none(), "{geom:?} is already realized");
        self.by_analytic.insert(analytic, geom);
    }

    #[inline]
    pub(crate) fn get(&self, geom: GeomId) -> &AnalyticObject {
        match self.by_geom.get(&geom) {
            Some(analytic) => analytic,
            None => panic!("{geom:?} has no realization in this picture"),
        }
    }

    #[inline]
    pub(crate) fn point(&self, geom: GeomId) -> Point {
        match self.get(geom).as_point() {
            Some(point) => point,
            None => panic!("{geom:?} is not a point"),
        }
    }

    #[inline]
    pub(crate) fn find(&self, analytic: &AnalyticObject) -> Option<GeomId> {
        self.by_analytic.get(analytic).copied()
    }
}
