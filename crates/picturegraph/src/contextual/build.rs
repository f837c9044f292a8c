//! Construction of the incidence graph: from scratch and by cloning.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{debug, trace};

use super::error::{InconsistentPicturesError, InconstructibleContextualPicture};
use super::metrics::ConstructionMetrics;
use super::objects::{
    CircleObject, DefinableByPoints, GeomId, GeometricObject, LineObject, PointObject,
};
use super::types::{ContextualPicture, Filter, ObjectSets};
use crate::analytic::{are_collinear, lies_on, AnalyticObject, Circle, Line};
use crate::configuration::{ObjectId, ObjectKind};
use crate::picture::PicturesOfConfiguration;

type Result<T> = std::result::Result<T, InconsistentPicturesError>;

impl ContextualPicture {
    /// Build the graph of `pictures` from scratch.
    ///
    /// Only objects introduced by the last configuration object end up new.
    /// Panics if some configuration object is not drawn in the bundle.
    pub fn new(
        pictures: PicturesOfConfiguration,
    ) -> std::result::Result<Self, InconstructibleContextualPicture> {
        Self::new_with_metrics(pictures, &mut ConstructionMetrics::default())
    }

    pub fn new_with_metrics(
        pictures: PicturesOfConfiguration,
        metrics: &mut ConstructionMetrics,
    ) -> std::result::Result<Self, InconstructibleContextualPicture> {
        let configuration = pictures.configuration();
        assert_eq!(
            pictures.get(0).len(),
            configuration.len(),
            "every configuration object must be drawn before building the graph"
        );
        let last = configuration.last_object();
        let ids: Vec<ObjectId> = configuration.iter().map(|(id, _)| id).collect();

        let mut picture = Self::empty(pictures);
        for id in ids {
            if let Err(e) = picture.add(id, Some(id) == last, metrics) {
                debug!(object = %id, error = %e, "pictures are inconsistent");
                return Err(e.into());
            }
        }
        debug!(
            configuration_objects = picture.configuration().len(),
            nodes = picture.len(),
            lines = picture.lines(Filter::All).count(),
            circles = picture.circles(Filter::All).count(),
            "contextual picture built"
        );
        Ok(picture)
    }

    /// Derive the graph of `new_pictures`, whose configuration extends this
    /// one's by exactly one object, without recomputing existing incidences.
    ///
    /// The result is structurally equivalent to building `new_pictures` from
    /// scratch. `self` is left untouched.
    ///
    /// Panics if the bundles differ in size, the configuration is not a
    /// one-object extension, or the new object is not drawn.
    pub fn construct_by_cloning(&self, new_pictures: PicturesOfConfiguration) -> Result<Self> {
        self.construct_by_cloning_with_metrics(new_pictures, &mut ConstructionMetrics::default())
    }

    pub fn construct_by_cloning_with_metrics(
        &self,
        new_pictures: PicturesOfConfiguration,
        metrics: &mut ConstructionMetrics,
    ) -> Result<Self> {
        let started = Instant::now();
        assert_eq!(
            new_pictures.len(),
            self.pictures.len(),
            "cloning needs bundles of the same size"
        );
        assert!(
            new_pictures.configuration().extends_by_one(self.configuration()),
            "the new configuration must extend the old one by exactly one object"
        );
        let id = match new_pictures.configuration().last_object() {
            Some(id) => id,
            None => unreachable!("an extension is never empty"),
        };
        assert!(new_pictures.get(0).contains(id), "the new object {id} must be drawn");

        // Existing nodes keep their realizations, so picture i of the new
        // bundle must hold picture i of the old one unchanged.
        for (i, (old, new)) in self.pictures.iter().zip(new_pictures.iter()).enumerate() {
            let aligned = old
                .ids()
                .iter()
                .all(|&object| new.try_get(object) == Some(old.get(object)));
            assert!(
                aligned,
                "picture {i} of the new bundle does not extend picture {i} of the old one"
            );
        }

        let mut old = self.old.clone();
        old.absorb(self.new.clone());
        let mut picture = ContextualPicture {
            pictures: new_pictures,
            objects: self.objects.clone(),
            maps: self.maps.clone(),
            by_configuration: self.by_configuration.clone(),
            old,
            new: ObjectSets::default(),
        };
        metrics.cloning += started.elapsed();

        if let Err(e) = picture.add(id, true, metrics) {
            debug!(object = %id, error = %e, "pictures are inconsistent");
            return Err(e);
        }
        debug!(object = %id, nodes = picture.len(), "contextual picture extended");
        Ok(picture)
    }

    /// Add configuration object `id`; `is_new` puts everything it creates
    /// into the new sets.
    fn add(&mut self, id: ObjectId, is_new: bool, metrics: &mut ConstructionMetrics) -> Result<()> {
        metrics.objects_added += 1;

        if let Some(existing) = self.find_geometric_object(id)? {
            if let Some(other) = self.objects[existing.0].configuration_object() {
                panic!("{id} duplicates {other}; remove duplicates before building the graph");
            }
            self.objects[existing.0].attach(id);
            self.by_configuration.insert(id, existing);
            return Ok(());
        }

        let kind = self.configuration().get(id).kind();
        let geom = self.push(match kind {
            ObjectKind::Point => GeometricObject::Point(PointObject::new(id)),
            ObjectKind::Line => GeometricObject::Line(LineObject::explicit(id)),
            ObjectKind::Circle => GeometricObject::Circle(CircleObject::explicit(id)),
        });
        for (map, picture) in self.maps.iter_mut().zip(self.pictures.iter()) {
            map.insert(geom, *picture.get(id));
        }
        self.by_configuration.insert(id, geom);

        match kind {
            ObjectKind::Point => self.add_point(geom, is_new, metrics),
            ObjectKind::Line | ObjectKind::Circle => {
                self.add_line_or_circle(geom, kind, is_new, metrics)
            }
        }
    }

    /// Existing node equal to `id`'s realization; all pictures must agree.
    fn find_geometric_object(&self, id: ObjectId) -> Result<Option<GeomId>> {
        let mut result = None;
        for (i, (map, picture)) in self.maps.iter().zip(self.pictures.iter()).enumerate() {
            let found = map.find(picture.get(id));
            if i > 0 && found != result {
                let equal_objects = [result, found]
                    .into_iter()
                    .flatten()
                    .map(|g| self.trace(g))
                    .collect();
                return Err(InconsistentPicturesError::Equality {
                    object: id,
                    equal_objects,
                });
            }
            result = found;
        }
        Ok(result)
    }

    fn add_point(
        &mut self,
        point: GeomId,
        is_new: bool,
        metrics: &mut ConstructionMetrics,
    ) -> Result<()> {
        let started = Instant::now();
        let objects: Vec<GeomId> = self.lines_and_circles(Filter::All).collect();
        for object in objects {
            if self.is_point_on(point, object, metrics)? {
                self.link(point, object);
            }
        }
        metrics.adding_points += started.elapsed();

        // `point` is not in any set yet, so it is not paired with itself.
        let others: Vec<GeomId> = self.points(Filter::All).collect();
        for &other in &others {
            self.resolve_line(point, other, is_new, metrics)?;
        }
        for (i, &first) in others.iter().enumerate() {
            for &second in &others[i + 1..] {
                self.resolve_circle(point, first, second, is_new, metrics)?;
            }
        }

        self.sets_mut(is_new).points.insert(point);
        Ok(())
    }

    fn add_line_or_circle(
        &mut self,
        object: GeomId,
        kind: ObjectKind,
        is_new: bool,
        metrics: &mut ConstructionMetrics,
    ) -> Result<()> {
        let started = Instant::now();
        let points: Vec<GeomId> = self.points(Filter::All).collect();
        for point in points {
            if self.is_point_on(point, object, metrics)? {
                self.link(point, object);
            }
        }
        self.sets_mut(is_new).of_mut(kind).insert(object);
        metrics.adding_lines_and_circles += started.elapsed();
        Ok(())
    }

    /// Unanimous incidence verdict of all pictures.
    fn is_point_on(
        &self,
        point: GeomId,
        object: GeomId,
        metrics: &mut ConstructionMetrics,
    ) -> Result<bool> {
        metrics.incidence_checks += 1;
        let mut verdict = None;
        for map in &self.maps {
            let lies = match lies_on(map.get(object), map.point(point)) {
                Some(lies) => lies,
                None => panic!("{object:?} is a point; incidence is defined for lines and circles"),
            };
            if matches!(verdict, Some(v) if v != lies) {
                return Err(self.incidence_error(point, object));
            }
            verdict = Some(lies);
        }
        Ok(verdict.unwrap_or(false))
    }

    /// Make sure a line through `p` and `q` exists.
    fn resolve_line(
        &mut self,
        p: GeomId,
        q: GeomId,
        is_new: bool,
        metrics: &mut ConstructionMetrics,
    ) -> Result<()> {
        let started = Instant::now();
        metrics.lines_resolved += 1;

        let mut result = None;
        let mut realizations = Vec::with_capacity(self.maps.len());
        for (i, map) in self.maps.iter().enumerate() {
            // Maps never hold two equal points, so this only fails on non-finite data.
            let Some(line) = Line::through(map.point(p), map.point(q)) else {
                return Err(InconsistentPicturesError::UnconstructibleLine {
                    points: [self.config_of(p), self.config_of(q)],
                });
            };
            let found = map.find(&AnalyticObject::Line(line));
            if i > 0 && found != result {
                return Err(InconsistentPicturesError::Collinearity {
                    points: self.involved_points([p, q], [result, found]),
                });
            }
            result = found;
            realizations.push(AnalyticObject::Line(line));
        }

        if result.is_none() {
            let line = self.push(GeometricObject::Line(LineObject::implicit(p, q)));
            self.insert_implicit(line, ObjectKind::Line, &[p, q], realizations, is_new);
            metrics.lines_created += 1;
            trace!(points = ?[self.config_of(p), self.config_of(q)], "implicit line");
        }
        metrics.resolving_lines += started.elapsed();
        Ok(())
    }

    /// Make sure a circle through `p`, `q`, `r` exists unless they are collinear.
    fn resolve_circle(
        &mut self,
        p: GeomId,
        q: GeomId,
        r: GeomId,
        is_new: bool,
        metrics: &mut ConstructionMetrics,
    ) -> Result<()> {
        let started = Instant::now();
        metrics.circles_resolved += 1;

        let mut collinear = None;
        let mut result = None;
        let mut realizations = Vec::with_capacity(self.maps.len());
        for (i, map) in self.maps.iter().enumerate() {
            let (a, b, c) = (map.point(p), map.point(q), map.point(r));
            let in_line = are_collinear(&[a, b, c]);
            // Reachable only when the grid rounding of `lies_on` and of line
            // equality disagree; a plain split is caught by the incidence scan.
            if matches!(collinear, Some(v) if v != in_line) {
                return Err(InconsistentPicturesError::Collinearity {
                    points: self.configuration_objects_of([p, q, r]),
                });
            }
            collinear = Some(in_line);
            if in_line {
                continue;
            }

            // Non-collinear points always have a circumcircle unless the data
            // is not finite.
            let Some(circle) = Circle::through(a, b, c) else {
                return Err(InconsistentPicturesError::UnconstructibleCircle {
                    points: [self.config_of(p), self.config_of(q), self.config_of(r)],
                });
            };
            let found = map.find(&AnalyticObject::Circle(circle));
            if i > 0 && found != result {
                return Err(InconsistentPicturesError::Concyclity {
                    points: self.involved_points([p, q, r], [result, found]),
                });
            }
            result = found;
            realizations.push(AnalyticObject::Circle(circle));
        }

        if collinear != Some(true) && result.is_none() {
            let circle = self.push(GeometricObject::Circle(CircleObject::implicit(p, q, r)));
            let points = [p, q, r];
            self.insert_implicit(circle, ObjectKind::Circle, &points, realizations, is_new);
            metrics.circles_created += 1;
            trace!(points = ?self.configuration_objects_of([p, q, r]), "implicit circle");
        }
        metrics.resolving_circles += started.elapsed();
        Ok(())
    }

    /// Split verdict on `point` lying on `object`. An implicit line/circle is
    /// nothing but its points, so the split is about collinearity/concyclity.
    fn incidence_error(&self, point: GeomId, object: GeomId) -> InconsistentPicturesError {
        let node = self.geometric_object(object);
        match (node.kind(), node.configuration_object()) {
            (ObjectKind::Line, None) => InconsistentPicturesError::Collinearity {
                points: self.involved_points([point], [Some(object), None]),
            },
            (ObjectKind::Circle, None) => InconsistentPicturesError::Concyclity {
                points: self.involved_points([point], [Some(object), None]),
            },
            _ => InconsistentPicturesError::Incidence {
                point: self.config_of(point),
                object: self.trace(object),
            },
        }
    }

    fn push(&mut self, object: GeometricObject) -> GeomId {
        let id = GeomId(self.objects.len());
        self.objects.push(object);
        id
    }

    /// Register a freshly pushed implicit line/circle: point back-links,
    /// per-picture realizations, partition set.
    fn insert_implicit(
        &mut self,
        object: GeomId,
        kind: ObjectKind,
        points: &[GeomId],
        realizations: Vec<AnalyticObject>,
        is_new: bool,
    ) {
        for &point in points {
            self.objects[point.0].add_incident(object, kind);
        }
        for (map, analytic) in self.maps.iter_mut().zip(realizations) {
            map.insert(object, analytic);
        }
        self.sets_mut(is_new).of_mut(kind).insert(object);
    }

    fn link(&mut self, point: GeomId, object: GeomId) {
        let kind = self.objects[object.0].kind();
        self.objects[object.0].add_point(point);
        self.objects[point.0].add_incident(object, kind);
    }

    fn sets_mut(&mut self, is_new: bool) -> &mut ObjectSets {
        if is_new {
            &mut self.new
        } else {
            &mut self.old
        }
    }

    #[inline]
    fn config_of(&self, point: GeomId) -> ObjectId {
        self.point(point).configuration_object()
    }

    /// `points` plus every point on the nodes in `objects`, as configuration ids.
    fn involved_points<const N: usize>(
        &self,
        points: [GeomId; N],
        objects: [Option<GeomId>; 2],
    ) -> BTreeSet<ObjectId> {
        let on_objects = objects
            .into_iter()
            .flatten()
            .filter_map(|g| self.geometric_object(g).as_definable())
            .flat_map(|definable| definable.points().iter().copied());
        self.configuration_objects_of(points.into_iter().chain(on_objects))
    }
}
