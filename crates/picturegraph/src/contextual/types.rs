use std::collections::{BTreeSet, HashMap};

use super::map::AnalyticMap;
use super::objects::{
    CircleObject, DefinableByPoints, GeomId, GeometricObject, LineObject, ObjectTrace, PointObject,
};
use crate::analytic::AnalyticObject;
use crate::configuration::{Configuration, ObjectId, ObjectKind};
use crate::picture::PicturesOfConfiguration;

/// Which side of the old/new partition to enumerate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Old,
    New,
}

/// One side of the old/new partition, split by kind.
#[derive(Clone, Debug, Default)]
pub(crate) struct ObjectSets {
    pub(crate) points: BTreeSet<GeomId>,
    pub(crate) lines: BTreeSet<GeomId>,
    pub(crate) circles: BTreeSet<GeomId>,
}

impl ObjectSets {
    #[inline]
    pub(crate) fn of(&self, kind: ObjectKind) -> &BTreeSet<GeomId> {
        match kind {
            ObjectKind::Point => &self.points,
            ObjectKind::Line => &self.lines,
            ObjectKind::Circle => &self.circles,
        }
    }
    #[inline]
    pub(crate) fn of_mut(&mut self, kind: ObjectKind) -> &mut BTreeSet<GeomId> {
        match kind {
            ObjectKind::Point => &mut self.points,
            ObjectKind::Line => &mut self.lines,
            ObjectKind::Circle => &mut self.circles,
        }
    }
    #[inline]
    pub(crate) fn contains(&self, id: GeomId) -> bool {
        self.points.contains(&id) || self.lines.contains(&id) || self.circles.contains(&id)
    }
    pub(crate) fn absorb(&mut self, other: ObjectSets) {
        self.points.extend(other.points);
        self.lines.extend(other.lines);
        self.circles.extend(other.circles);
    }
}

/// Incidence graph of a configuration, derived from a bundle of pictures.
///
/// Invariants:
/// - every configuration object maps to exactly one node; implicit lines and
///   circles (through at least 2 resp. 3 points) have no configuration object;
/// - point ↔ line/circle links are symmetric and hold in every picture;
/// - each picture map is a bijection over all nodes;
/// - no two nodes are equal in any picture;
/// - every node is in exactly one of the six old/new sets.
#[derive(Debug)]
pub struct ContextualPicture {
    pub(crate) pictures: PicturesOfConfiguration,
    pub(crate) objects: Vec<GeometricObject>,
    pub(crate) maps: Vec<AnalyticMap>,
    pub(crate) by_configuration: HashMap<ObjectId, GeomId>,
    pub(crate) old: ObjectSets,
    pub(crate) new: ObjectSets,
}

impl ContextualPicture {
    pub(crate) fn empty(pictures: PicturesOfConfiguration) -> Self {
        let maps = vec![AnalyticMap::default(); pictures.len()];
        Self {
            pictures,
            objects: Vec::new(),
            maps,
            by_configuration: HashMap::new(),
            old: ObjectSets::default(),
            new: ObjectSets::default(),
        }
    }

    /// The bundle this graph was built from.
    #[inline]
    pub fn pictures(&self) -> &PicturesOfConfiguration {
        &self.pictures
    }
    #[inline]
    pub fn configuration(&self) -> &Configuration {
        self.pictures.configuration()
    }

    /// Number of nodes, implicit ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Node representing configuration object `id`. Panics if `id` is not part
    /// of the configuration.
    pub fn get_geometric_object(&self, id: ObjectId) -> GeomId {
        match self.by_configuration.get(&id) {
            Some(&geom) => geom,
            None => panic!("configuration object {id} is not in the contextual picture"),
        }
    }

    /// Non-panicking variant of [`Self::get_geometric_object`].
    #[inline]
    pub fn find_geometric_object_of(&self, id: ObjectId) -> Option<GeomId> {
        self.by_configuration.get(&id).copied()
    }

    #[inline]
    pub fn geometric_object(&self, id: GeomId) -> &GeometricObject {
        &self.objects[id.0]
    }

    pub fn point(&self, id: GeomId) -> &PointObject {
        match self.geometric_object(id).as_point() {
            Some(point) => point,
            None => panic!("{id:?} is not a point"),
        }
    }
    pub fn line(&self, id: GeomId) -> &LineObject {
        match self.geometric_object(id).as_line() {
            Some(line) => line,
            None => panic!("{id:?} is not a line"),
        }
    }
    pub fn circle(&self, id: GeomId) -> &CircleObject {
        match self.geometric_object(id).as_circle() {
            Some(circle) => circle,
            None => panic!("{id:?} is not a circle"),
        }
    }

    /// Realization of node `id` in picture `picture`.
    pub fn get_analytic_object(&self, id: GeomId, picture: usize) -> &AnalyticObject {
        self.maps[picture].get(id)
    }

    /// Whether `id` was introduced by the newest configuration object.
    #[inline]
    pub fn is_new(&self, id: GeomId) -> bool {
        self.new.contains(id)
    }

    pub fn points(&self, filter: Filter) -> impl Iterator<Item = GeomId> + '_ {
        self.select(filter, ObjectKind::Point)
    }
    pub fn lines(&self, filter: Filter) -> impl Iterator<Item = GeomId> + '_ {
        self.select(filter, ObjectKind::Line)
    }
    pub fn circles(&self, filter: Filter) -> impl Iterator<Item = GeomId> + '_ {
        self.select(filter, ObjectKind::Circle)
    }
    pub fn lines_and_circles(&self, filter: Filter) -> impl Iterator<Item = GeomId> + '_ {
        self.lines(filter).chain(self.circles(filter))
    }

    /// Old nodes first, then new, each in ascending handle order.
    fn select(&self, filter: Filter, kind: ObjectKind) -> impl Iterator<Item = GeomId> + '_ {
        let old = matches!(filter, Filter::All | Filter::Old).then(|| self.old.of(kind));
        let new = matches!(filter, Filter::All | Filter::New).then(|| self.new.of(kind));
        old.into_iter()
            .flatten()
            .chain(new.into_iter().flatten())
            .copied()
    }

    /// Configuration-level description of node `id`.
    pub fn trace(&self, id: GeomId) -> ObjectTrace {
        let object = self.geometric_object(id);
        let points = object
            .as_definable()
            .map(|definable| self.configuration_objects_of(definable.points().iter().copied()))
            .unwrap_or_default();
        ObjectTrace {
            kind: object.kind(),
            configuration_object: object.configuration_object(),
            points,
        }
    }

    /// Backing configuration objects of the given points.
    pub(crate) fn configuration_objects_of(
        &self,
        points: impl IntoIterator<Item = GeomId>,
    ) -> BTreeSet<ObjectId> {
        points
            .into_iter()
            .map(|p| self.point(p).configuration_object())
            .collect()
    }
}
