use super::*;

fn seg(p: (f64, f64), q: (f64, f64)) -> Segment2 {
    Segment2::from_coords(p, q)
}

#[test]
fn from_coords_normalizes_integers() {
    let s: Segment2 = ((0, 0), (4, 4)).into();
    assert_eq!(s.p, Point2::new(0.0, 0.0));
    assert_eq!(s.q, Point2::new(4.0, 4.0));
    let t = Segment2::from_coords((1.5f32, 2.0f32), (3.0f32, 4.0f32));
    assert_eq!(t.q, Point2::new(3.0, 4.0));
    let u: Segment2 = [[1.0, 2.0], [3.0, 4.0]].into();
    assert_eq!(u.p, Point2::new(1.0, 2.0));
}

#[test]
fn degenerate_and_finite() {
    let cfg = GeomCfg::default();
    assert!(seg((2.0, 2.0), (2.0, 2.0)).is_degenerate(cfg.eps));
    assert!(seg((2.0, 2.0), (2.0 + 1e-13, 2.0)).is_degenerate(cfg.eps));
    assert!(!seg((2.0, 2.0), (2.0 + 1e-9, 2.0)).is_degenerate(cfg.eps));
    assert!(seg((0.0, 0.0), (1.0, 1.0)).is_finite());
    assert!(!seg((0.0, f64::NAN), (1.0, 1.0)).is_finite());
    assert!(!seg((0.0, 0.0), (f64::INFINITY, 1.0)).is_finite());
}

#[test]
fn left_right_orders_by_x_then_y() {
    let eps = GeomCfg::default().eps;
    let (l, r) = seg((4.0, 0.0), (0.0, 4.0)).left_right(eps);
    assert_eq!((l, r), (Point2::new(0.0, 4.0), Point2::new(4.0, 0.0)));
    let (l, r) = seg((2.0, 3.0), (2.0, -1.0)).left_right(eps);
    assert_eq!((l, r), (Point2::new(2.0, -1.0), Point2::new(2.0, 3.0)));
}

#[test]
fn y_at_interpolates_and_handles_vertical() {
    let eps = GeomCfg::default().eps;
    let s = seg((0.0, 0.0), (4.0, 2.0));
    assert!((s.y_at(2.0, eps) - 1.0).abs() < 1e-12);
    let v = seg((2.0, 3.0), (2.0, -1.0));
    assert_eq!(v.y_at(2.0, eps), -1.0);
}

#[test]
fn canonical_is_order_independent() {
    let a = seg((3.0, 1.0), (0.0, 5.0));
    let b = seg((0.0, 5.0), (3.0, 1.0));
    assert_eq!(a.canonical(), b.canonical());
    assert_eq!(a.canonical().p, Point2::new(0.0, 5.0));
}

#[test]
fn cfg_default_and_override() {
    assert_eq!(GeomCfg::default().eps, 1e-12);
    assert_eq!(GeomCfg::with_eps(1e-6).eps, 1e-6);
}
