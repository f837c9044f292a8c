//! Drawing bundles of pictures for configurations.
//!
//! Model
//! - Every picture draws the configuration's loose objects from its own RNG
//!   (replay token `(seed, index)`, a fresh index per picture and per attempt)
//!   and replays all constructions in dependency order.
//! - For each object the per-picture outcomes (added / duplicate of an earlier
//!   object / inconstructible) must agree. An agreed duplicate or
//!   inconstructible object ends the draw and is reported in
//!   `ConstructionData`; a split verdict means the random placement is
//!   numerically unlucky and the whole bundle is redrawn.
//! - Extending a bundle (`construct_by_cloning`) never redraws: the result must
//!   stay positionally aligned with the bundle it extends.

use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::constructions::construct;
use super::types::{Picture, PicturesOfConfiguration};
use crate::analytic::rand::{
    random_circle, random_line, random_point, random_scalene_acute_triangle, Bounds2, ReplayToken,
};
use crate::analytic::{AnalyticObject, Point};
use crate::configuration::{Configuration, ConfigurationObject, ObjectId, ObjectKind};

/// Settings of the geometry constructor.
#[derive(Clone, Copy, Debug)]
pub struct PicturesCfg {
    /// Size N of every bundle.
    pub number_of_pictures: usize,
    /// Redraws of a whole bundle after the first attempt came out inconsistent.
    pub max_attempts_to_reconstruct: usize,
    /// Seed of the replay tokens.
    pub seed: u64,
    /// Box for loose objects that are not part of the triangle layout.
    pub bounds: Bounds2,
}

impl Default for PicturesCfg {
    fn default() -> Self {
        Self {
            number_of_pictures: 5,
            max_attempts_to_reconstruct: 3,
            seed: 0,
            bounds: Bounds2::default(),
        }
    }
}

/// What went wrong with the last drawn object, agreed on by all pictures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstructionData {
    /// Object that could not be constructed in any picture.
    pub inconstructible: Option<ObjectId>,
    /// `(new, existing)`: the new object coincides with an earlier one in every picture.
    pub duplicate: Option<(ObjectId, ObjectId)>,
}

impl ConstructionData {
    /// True if every object was drawn.
    #[inline]
    pub fn is_correct(&self) -> bool {
        self.inconstructible.is_none() && self.duplicate.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryConstructionError {
    #[error("pictures stayed inconsistent after {attempts} attempts")]
    Inconsistent { attempts: usize },
    #[error("object {object} is drawn inconsistently across the pictures")]
    InconsistentExtension { object: ObjectId },
    #[error("the configuration does not extend the pictured one by exactly one object")]
    NotAnExtension,
    #[error("the pictures to extend do not hold every object of their configuration")]
    IncompletePictures,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Added,
    Duplicate(ObjectId),
    Inconstructible,
}

/// Per-picture source of loose objects.
struct LooseDrawer {
    rng: StdRng,
    bounds: Bounds2,
    triangle: Option<[Point; 3]>,
    next_vertex: usize,
}

impl LooseDrawer {
    fn new(token: ReplayToken, bounds: Bounds2, triangle_layout: bool) -> Self {
        let mut rng = token.to_std_rng();
        let triangle = triangle_layout.then(|| random_scalene_acute_triangle(&mut rng));
        Self {
            rng,
            bounds,
            triangle,
            next_vertex: 0,
        }
    }

    fn draw(&mut self, kind: ObjectKind) -> AnalyticObject {
        match kind {
            ObjectKind::Point => match self.triangle {
                Some(vertices) if self.next_vertex < vertices.len() => {
                    self.next_vertex += 1;
                    vertices[self.next_vertex - 1].into()
                }
                _ => random_point(&mut self.rng, self.bounds).into(),
            },
            ObjectKind::Line => random_line(&mut self.rng, self.bounds).into(),
            ObjectKind::Circle => random_circle(&mut self.rng, self.bounds).into(),
        }
    }
}

/// Draws and extends `PicturesOfConfiguration`.
#[derive(Debug)]
pub struct GeometryConstructor {
    cfg: PicturesCfg,
    next_index: u64,
}

impl GeometryConstructor {
    pub fn new(cfg: PicturesCfg) -> Self {
        Self { cfg, next_index: 0 }
    }

    #[inline]
    pub fn cfg(&self) -> &PicturesCfg {
        &self.cfg
    }

    /// Draw a fresh bundle of `configuration`.
    ///
    /// A bundle whose pictures agree on every object is returned together with
    /// the agreed duplicate / inconstructible object, if any. Bundles with split
    /// verdicts are redrawn up to `max_attempts_to_reconstruct` times.
    pub fn construct(
        &mut self,
        configuration: &Configuration,
    ) -> Result<(PicturesOfConfiguration, ConstructionData), GeometryConstructionError> {
        let attempts = self.cfg.max_attempts_to_reconstruct + 1;
        for attempt in 0..attempts {
            match self.draw_bundle(configuration) {
                Ok(result) => return Ok(result),
                Err(object) => debug!(
                    attempt,
                    object = object.0,
                    "pictures disagree on an object, redrawing the bundle"
                ),
            }
        }
        warn!(attempts, objects = configuration.len(), "no consistent bundle could be drawn");
        Err(GeometryConstructionError::Inconsistent { attempts })
    }

    /// Extend `previous` by the last object of `configuration`, which must be
    /// `previous.configuration()` plus exactly one object.
    ///
    /// Every picture is cloned and the new object is drawn into the clone at the
    /// same position, so picture `i` of the result extends picture `i` of `previous`.
    pub fn construct_by_cloning(
        &mut self,
        previous: &PicturesOfConfiguration,
        configuration: &Configuration,
    ) -> Result<(PicturesOfConfiguration, ConstructionData), GeometryConstructionError> {
        if !configuration.extends_by_one(previous.configuration()) {
            return Err(GeometryConstructionError::NotAnExtension);
        }
        if previous.get(0).len() != previous.configuration().len() {
            return Err(GeometryConstructionError::IncompletePictures);
        }
        let id = configuration
            .last_object()
            .ok_or(GeometryConstructionError::NotAnExtension)?;
        let object = configuration.get(id);
        let mut extended = previous.clone_extended(configuration);
        let outcomes: Vec<Outcome> = extended
            .pictures_mut()
            .iter_mut()
            .map(|picture| {
                let mut drawer = LooseDrawer::new(self.next_token(), self.cfg.bounds, false);
                draw_object(picture, id, object, &mut drawer)
            })
            .collect();
        let Some(outcome) = unanimous(&outcomes) else {
            debug!(object = id.0, "pictures disagree on the new object");
            return Err(GeometryConstructionError::InconsistentExtension { object: id });
        };
        let mut data = ConstructionData::default();
        record(&mut data, id, outcome);
        Ok((extended, data))
    }

    fn next_token(&mut self) -> ReplayToken {
        let token = ReplayToken {
            seed: self.cfg.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        token
    }

    /// One attempt. `Err(object)` names the first object the pictures disagreed on.
    fn draw_bundle(
        &mut self,
        configuration: &Configuration,
    ) -> Result<(PicturesOfConfiguration, ConstructionData), ObjectId> {
        let n = self.cfg.number_of_pictures.max(1);
        let loose_points = configuration
            .iter()
            .filter(|(_, o)| o.is_loose() && o.kind() == ObjectKind::Point)
            .count();
        let triangle_layout = loose_points == 3;
        let mut drawers: Vec<LooseDrawer> = (0..n)
            .map(|_| LooseDrawer::new(self.next_token(), self.cfg.bounds, triangle_layout))
            .collect();
        let mut pictures = vec![Picture::new(); n];
        let mut data = ConstructionData::default();
        for (id, object) in configuration.iter() {
            let outcomes: Vec<Outcome> = pictures
                .iter_mut()
                .zip(drawers.iter_mut())
                .map(|(picture, drawer)| draw_object(picture, id, object, drawer))
                .collect();
            let outcome = unanimous(&outcomes).ok_or(id)?;
            if record(&mut data, id, outcome) {
                break;
            }
        }
        Ok((
            PicturesOfConfiguration::new(configuration.clone(), pictures),
            data,
        ))
    }
}

/// Draw `object` into `picture`.
fn draw_object(
    picture: &mut Picture,
    id: ObjectId,
    object: &ConfigurationObject,
    drawer: &mut LooseDrawer,
) -> Outcome {
    let analytic = match object {
        ConfigurationObject::Loose(kind) => drawer.draw(*kind),
        ConfigurationObject::Constructed {
            construction,
            arguments,
        } => {
            let inputs: Vec<AnalyticObject> = arguments.iter().map(|&a| *picture.get(a)).collect();
            match construct(*construction, &inputs) {
                Some(analytic) => analytic,
                None => return Outcome::Inconstructible,
            }
        }
    };
    match picture.add(id, analytic) {
        (_, None) => Outcome::Added,
        (_, Some(existing)) => Outcome::Duplicate(existing),
    }
}

fn unanimous(outcomes: &[Outcome]) -> Option<Outcome> {
    let first = *outcomes.first()?;
    outcomes.iter().all(|&o| o == first).then_some(first)
}

/// Store a failed outcome; true if drawing must stop.
fn record(data: &mut ConstructionData, id: ObjectId, outcome: Outcome) -> bool {
    match outcome {
        Outcome::Added => false,
        Outcome::Duplicate(existing) => {
            data.duplicate = Some((id, existing));
            true
        }
        Outcome::Inconstructible => {
            data.inconstructible = Some(id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanimity_requires_identical_outcomes() {
        use Outcome::*;
        assert_eq!(unanimous(&[Added, Added]), Some(Added));
        assert_eq!(
            unanimous(&[Duplicate(ObjectId(1)), Duplicate(ObjectId(1))]),
            Some(Duplicate(ObjectId(1)))
        );
        assert_eq!(unanimous(&[Duplicate(ObjectId(1)), Duplicate(ObjectId(2))]), None);
        assert_eq!(unanimous(&[Added, Inconstructible]), None);
        assert_eq!(unanimous(&[]), None);
    }

    #[test]
    fn triangle_layout_uses_fixed_base() {
        let token = ReplayToken { seed: 1, index: 0 };
        let mut drawer = LooseDrawer::new(token, Bounds2::default(), true);
        let a = drawer.draw(ObjectKind::Point);
        let b = drawer.draw(ObjectKind::Point);
        assert_eq!(a, Point::new(0.0, 0.0).into());
        assert_eq!(b, Point::new(1.0, 0.0).into());
    }
}
