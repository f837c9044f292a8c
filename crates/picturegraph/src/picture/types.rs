use std::collections::HashMap;

use crate::analytic::AnalyticObject;
use crate::configuration::{Configuration, ObjectId};

/// One numeric realization of a configuration.
///
/// Invariants:
/// - `objects` and `lookup` are mutually inverse: no two ids map to equal
///   analytic objects.
/// - `order` lists ids in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Picture {
    objects: HashMap<ObjectId, AnalyticObject>,
    lookup: HashMap<AnalyticObject, ObjectId>,
    order: Vec<ObjectId>,
}

impl Picture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `analytic` as the realization of `id`.
    ///
    /// Returns the stored analytic object and, if the add was refused, the id
    /// that already owns it:
    /// - `(analytic, None)`: inserted;
    /// - `(existing, Some(other))`: an equal object is already stored for `other`;
    /// - `(stored, Some(id))`: `id` itself was already present.
    ///
    /// The caller decides whether a refusal means "duplicate" or "failure".
    pub fn add(&mut self, id: ObjectId, analytic: AnalyticObject) -> (AnalyticObject, Option<ObjectId>) {
        if let Some(stored) = self.objects.get(&id) {
            return (*stored, Some(id));
        }
        if let Some(&other) = self.lookup.get(&analytic) {
            return (self.objects[&other], Some(other));
        }
        self.objects.insert(id, analytic);
        self.lookup.insert(analytic, id);
        self.order.push(id);
        (analytic, None)
    }

    /// Realization of `id`. Panics if `id` was never added (a programming error).
    #[inline]
    pub fn get(&self, id: ObjectId) -> &AnalyticObject {
        match self.objects.get(&id) {
            Some(object) => object,
            None => panic!("object {id} is not drawn in this picture"),
        }
    }

    #[inline]
    pub fn try_get(&self, id: ObjectId) -> Option<&AnalyticObject> {
        self.objects.get(&id)
    }

    /// Id owning an object equal to `analytic`, if any.
    #[inline]
    pub fn find(&self, analytic: &AnalyticObject) -> Option<ObjectId> {
        self.lookup.get(analytic).copied()
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in insertion order.
    #[inline]
    pub fn ids(&self) -> &[ObjectId] {
        &self.order
    }
}

/// Ordered, fixed-size bundle of pictures realizing the same configuration.
///
/// Invariants:
/// - at least one picture;
/// - every picture holds exactly the configuration's objects that were
///   successfully drawn, in the same order.
#[derive(Clone, Debug)]
pub struct PicturesOfConfiguration {
    configuration: Configuration,
    pictures: Vec<Picture>,
}

impl PicturesOfConfiguration {
    /// Bundle `pictures` of `configuration`.
    ///
    /// Panics on an empty bundle or on pictures whose contents are not aligned.
    pub fn new(configuration: Configuration, pictures: Vec<Picture>) -> Self {
        assert!(!pictures.is_empty(), "a bundle needs at least one picture");
        let first = pictures[0].ids();
        assert!(
            pictures.iter().all(|p| p.ids() == first),
            "pictures of one configuration must hold the same objects in the same order"
        );
        Self {
            configuration,
            pictures,
        }
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pictures.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }
    #[inline]
    pub fn get(&self, index: usize) -> &Picture {
        &self.pictures[index]
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Picture> {
        self.pictures.iter()
    }

    /// Copy of the bundle relabeled with `new_configuration`, which must be the
    /// current configuration plus one object. The new object is not drawn yet.
    ///
    /// Panics if `new_configuration` is not such an extension.
    pub fn clone_extended(&self, new_configuration: &Configuration) -> PicturesOfConfiguration {
        assert!(
            new_configuration.extends_by_one(&self.configuration),
            "a bundle can only be extended by exactly one object"
        );
        Self {
            configuration: new_configuration.clone(),
            pictures: self.pictures.clone(),
        }
    }

    /// Mutable pictures; the caller restores alignment before handing the
    /// bundle out.
    pub(crate) fn pictures_mut(&mut self) -> &mut [Picture] {
        &mut self.pictures
    }

    /// Realizations of `id` across the bundle, in picture order.
    pub fn realizations(&self, id: ObjectId) -> impl Iterator<Item = &AnalyticObject> + '_ {
        self.pictures.iter().map(move |p| p.get(id))
    }
}

impl<'a> IntoIterator for &'a PicturesOfConfiguration {
    type Item = &'a Picture;
    type IntoIter = std::slice::Iter<'a, Picture>;
    fn into_iter(self) -> Self::IntoIter {
        self.pictures.iter()
    }
}
