use super::*;
use crate::analytic::{AnalyticObject, Line, Point};
use crate::configuration::{Configuration, Construction, ObjectId, ObjectKind};

fn triangle() -> (Configuration, [ObjectId; 3]) {
    let mut cfg = Configuration::new();
    let a = cfg.add_loose(ObjectKind::Point);
    let b = cfg.add_loose(ObjectKind::Point);
    let c = cfg.add_loose(ObjectKind::Point);
    (cfg, [a, b, c])
}

#[test]
fn picture_reports_equal_objects_instead_of_overwriting() {
    let mut picture = Picture::new();
    let p = AnalyticObject::from(Point::new(0.25, 0.5));
    assert_eq!(picture.add(ObjectId(0), p), (p, None));
    let same_spot = AnalyticObject::from(Point::new(0.25 + 1e-9, 0.5));
    let (stored, existing) = picture.add(ObjectId(1), same_spot);
    assert_eq!(existing, Some(ObjectId(0)));
    assert_eq!(stored, p);
    assert!(!picture.contains(ObjectId(1)));
    assert_eq!(picture.len(), 1);
}

#[test]
fn adding_the_same_object_twice_reports_the_existing_mapping() {
    let mut picture = Picture::new();
    let p = AnalyticObject::from(Point::new(1.0, 2.0));
    picture.add(ObjectId(3), p);
    let elsewhere = AnalyticObject::from(Point::new(5.0, 5.0));
    let (stored, existing) = picture.add(ObjectId(3), elsewhere);
    assert_eq!(existing, Some(ObjectId(3)));
    assert_eq!(stored, p);
    assert_eq!(*picture.get(ObjectId(3)), p);
    assert_eq!(picture.find(&elsewhere), None);
}

#[test]
#[should_panic(expected = "not drawn")]
fn getting_a_missing_object_panics() {
    let picture = Picture::new();
    let _ = picture.get(ObjectId(0));
}

#[test]
fn construct_draws_aligned_pictures() {
    let (mut cfg, [a, b, c]) = triangle();
    let m = cfg.add_constructed(Construction::Midpoint, &[a, b]).unwrap();
    let l = cfg.add_constructed(Construction::LineFromPoints, &[c, m]).unwrap();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (pictures, data) = constructor.construct(&cfg).unwrap();
    assert!(data.is_correct());
    assert_eq!(pictures.len(), 5);
    for picture in &pictures {
        assert_eq!(picture.ids(), &[a, b, c, m, l]);
        let line = picture.get(l).as_line().unwrap();
        assert!(line.contains(picture.get(c).as_point().unwrap()));
    }
    // Independent realizations: the free vertex differs between pictures.
    assert_ne!(pictures.get(0).get(c), pictures.get(1).get(c));
}

#[test]
fn construct_reports_agreed_duplicates() {
    let (mut cfg, [a, b, _]) = triangle();
    let m1 = cfg.add_constructed(Construction::Midpoint, &[a, b]).unwrap();
    let m2 = cfg.add_constructed(Construction::Midpoint, &[b, a]).unwrap();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (pictures, data) = constructor.construct(&cfg).unwrap();
    assert_eq!(data.duplicate, Some((m2, m1)));
    assert_eq!(data.inconstructible, None);
    assert!(pictures.iter().all(|p| !p.contains(m2)));
}

#[test]
fn construct_reports_agreed_inconstructible_objects() {
    let (mut cfg, [a, b, c]) = triangle();
    let ab = cfg.add_constructed(Construction::LineFromPoints, &[a, b]).unwrap();
    let par = cfg.add_constructed(Construction::ParallelLine, &[c, ab]).unwrap();
    let x = cfg
        .add_constructed(Construction::IntersectionOfLines, &[ab, par])
        .unwrap();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (_, data) = constructor.construct(&cfg).unwrap();
    assert_eq!(data.inconstructible, Some(x));
    assert!(!data.is_correct());
}

#[test]
fn construct_by_cloning_extends_every_picture_in_place() {
    let (cfg, [a, b, c]) = triangle();
    let mut constructor = GeometryConstructor::new(PicturesCfg {
        number_of_pictures: 3,
        ..PicturesCfg::default()
    });
    let (previous, _) = constructor.construct(&cfg).unwrap();
    let (next_cfg, m) = cfg.extended(Construction::Midpoint, &[b, c]).unwrap();
    let (next, data) = constructor.construct_by_cloning(&previous, &next_cfg).unwrap();
    assert!(data.is_correct());
    assert_eq!(next.len(), 3);
    for (old, new) in previous.iter().zip(next.iter()) {
        for id in [a, b, c] {
            assert_eq!(old.get(id), new.get(id));
        }
        assert_eq!(new.ids().last(), Some(&m));
    }
    assert!(matches!(
        constructor.construct_by_cloning(&previous, &cfg),
        Err(GeometryConstructionError::NotAnExtension)
    ));
}

#[test]
fn construct_by_cloning_reports_duplicates() {
    let (cfg, [a, b, _]) = triangle();
    let (cfg, m) = cfg.extended(Construction::Midpoint, &[a, b]).unwrap();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (previous, _) = constructor.construct(&cfg).unwrap();
    let (next_cfg, r) = cfg.extended(Construction::PointReflection, &[a, m]).unwrap();
    let (_, data) = constructor.construct_by_cloning(&previous, &next_cfg).unwrap();
    assert_eq!(data.duplicate, Some((r, b)));
}

#[test]
fn seeds_make_bundles_reproducible() {
    let (cfg, [_, _, c]) = triangle();
    let draw = |seed| {
        let mut constructor = GeometryConstructor::new(PicturesCfg {
            seed,
            ..PicturesCfg::default()
        });
        constructor.construct(&cfg).unwrap().0
    };
    let (p1, p2, p3) = (draw(9), draw(9), draw(10));
    assert_eq!(p1.get(2).get(c), p2.get(2).get(c));
    assert_ne!(p1.get(2).get(c), p3.get(2).get(c));
}

#[test]
fn lines_realized_by_different_pairs_are_found() {
    let (mut cfg, [a, b, _]) = triangle();
    let m = cfg.add_constructed(Construction::Midpoint, &[a, b]).unwrap();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (pictures, _) = constructor.construct(&cfg).unwrap();
    let picture = pictures.get(0);
    let am = Line::through(
        picture.get(a).as_point().unwrap(),
        picture.get(m).as_point().unwrap(),
    )
    .unwrap();
    let ab = Line::through(
        picture.get(a).as_point().unwrap(),
        picture.get(b).as_point().unwrap(),
    )
    .unwrap();
    assert_eq!(am, ab);
}

#[test]
fn clone_extended_relabels_without_drawing() {
    let (cfg, [a, b, _]) = triangle();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (pictures, _) = constructor.construct(&cfg).unwrap();
    let (next, m) = cfg.extended(Construction::Midpoint, &[a, b]).unwrap();

    let extended = pictures.clone_extended(&next);
    assert_eq!(extended.configuration(), &next);
    assert_eq!(extended.len(), pictures.len());
    for (old, new) in pictures.iter().zip(&extended) {
        assert_eq!(old.ids(), new.ids());
        assert_eq!(new.try_get(a), Some(old.get(a)));
        assert!(new.try_get(m).is_none());
    }
}

#[test]
#[should_panic(expected = "exactly one object")]
fn clone_extended_rejects_non_extensions() {
    let (cfg, _) = triangle();
    let mut constructor = GeometryConstructor::new(PicturesCfg::default());
    let (pictures, _) = constructor.construct(&cfg).unwrap();
    let _ = pictures.clone_extended(&cfg);
}
