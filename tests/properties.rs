//! Invariants that hold across inputs and configurations.

use fractum::fracture::{
    split, subdivide, AreaHash, Breaker, FractureConfig, Hexagon, SpawnStrategy,
};
use fractum::polygon::{polygon_area, polygon_is_convex, polygon_is_simple};
use fractum::primitives::{Point2, Triangle2};

fn seeds() -> Vec<Triangle2<f64>> {
    vec![
        Triangle2::new(Point2::new(-10.0, 0.0), Point2::new(0.0, 10.0), Point2::new(10.0, 0.0)),
        Triangle2::new(Point2::new(10.0, 0.0), Point2::new(0.0, -10.0), Point2::new(-10.0, 0.0)),
        Triangle2::new(Point2::new(0.0, 0.0), Point2::new(12.0, 1.0), Point2::new(4.0, 9.0)),
    ]
}

#[test]
fn fragment_count_never_exceeds_cap() {
    for strategy in SpawnStrategy::ALL {
        for cap in [1, 2, 3, 5, 8, 13, 100, 500] {
            let config = FractureConfig::new(0.25, cap, strategy).unwrap();
            let outcome = Breaker::new(config).unwrap().divide(&seeds());
            assert!(outcome.len() <= cap);
            if outcome.is_truncated() {
                assert_eq!(outcome.len(), cap);
            }
        }
    }
}

#[test]
fn every_fragment_is_a_convex_hexagon() {
    let config = FractureConfig::new(0.5, 400, SpawnStrategy::None).unwrap();
    let outcome = Breaker::new(config).unwrap().run::<Hexagon<f64>>(&seeds());
    assert!(!outcome.is_empty());

    for hexagon in &outcome.fragments {
        assert_eq!(hexagon.points.len(), 6);
        assert!(polygon_is_convex(&hexagon.points));
        assert!(polygon_is_simple(&hexagon.points));
        assert!(hexagon.area() > 0.0);
    }
}

#[test]
fn fragments_never_cover_more_than_the_input() {
    let input: f64 = seeds().iter().map(Triangle2::area).sum();
    for strategy in SpawnStrategy::ALL {
        let config = FractureConfig::new(0.5, 1000, strategy).unwrap();
        let outcome = Breaker::new(config).unwrap().divide(&seeds());
        let covered: f64 = outcome.fragments.iter().map(|f| polygon_area(f)).sum();
        assert!(covered <= input * (1.0 + 1e-9), "{strategy}: {covered} > {input}");
        assert!(covered > 0.0);
    }
}

#[test]
fn split_pieces_sum_to_at_most_the_parent() {
    for t in seeds() {
        let split = split(&t).unwrap();
        let pieces = split.hexagon.area() + split.children.iter().map(Triangle2::area).sum::<f64>();
        assert!(pieces <= t.area() * (1.0 + 1e-9));
    }
}

#[test]
fn none_strategy_depends_only_on_threshold() {
    for t in seeds() {
        let area = t.area();
        assert!(subdivide(&t, SpawnStrategy::None, area, &mut AreaHash).is_split());
        assert!(subdivide(&t, SpawnStrategy::None, area * 0.5, &mut AreaHash).is_split());
        assert!(!subdivide(&t, SpawnStrategy::None, area * 1.01, &mut AreaHash).is_split());
    }
}

#[test]
fn random_strategy_is_deterministic_per_area() {
    let scale = |t: &Triangle2<f64>, k: f64| {
        Triangle2::new(
            Point2::new(t.a.x * k, t.a.y * k),
            Point2::new(t.b.x * k, t.b.y * k),
            Point2::new(t.c.x * k, t.c.y * k),
        )
    };
    for t in seeds() {
        for i in 1..50 {
            let small = scale(&t, 0.01 * i as f64);
            let first = subdivide(&small, SpawnStrategy::Random, 1e4, &mut AreaHash);
            let again = subdivide(&small, SpawnStrategy::Random, 1e4, &mut AreaHash);
            assert_eq!(first, again);
        }
    }
}

#[test]
fn random_fade_thins_out_toward_small_areas() {
    let min_area = 1.0;
    let n = 20_000;
    let unit = Triangle2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 2.0));

    let rate = |range: std::ops::Range<usize>| {
        let total = range.len() as f64;
        let spawned = range
            .filter(|k| {
                let scale = ((*k as f64) / n as f64).sqrt();
                let t = Triangle2::new(
                    unit.a,
                    Point2::new(unit.b.x * scale, unit.b.y * scale),
                    Point2::new(unit.c.x * scale, unit.c.y * scale),
                );
                subdivide(&t, SpawnStrategy::RandomFade, min_area, &mut AreaHash).is_split()
            })
            .count();
        spawned as f64 / total
    };

    let low = rate(1..n / 5);
    let high = rate(4 * n / 5..n);
    assert!(low < high, "low {low} >= high {high}");
    assert!(low < 0.35);
    assert!(high > 0.65);
}

#[test]
fn f32_runs_match_f64_counts() {
    let seeds32: Vec<Triangle2<f32>> = seeds()
        .iter()
        .map(|t| {
            Triangle2::new(
                Point2::new(t.a.x as f32, t.a.y as f32),
                Point2::new(t.b.x as f32, t.b.y as f32),
                Point2::new(t.c.x as f32, t.c.y as f32),
            )
        })
        .collect();

    let o64 = Breaker::new(FractureConfig::new(5.0_f64, 300, SpawnStrategy::None).unwrap())
        .unwrap()
        .divide(&seeds());
    let o32 = Breaker::new(FractureConfig::new(5.0_f32, 300, SpawnStrategy::None).unwrap())
        .unwrap()
        .divide(&seeds32);
    assert_eq!(o64.len(), o32.len());
}
