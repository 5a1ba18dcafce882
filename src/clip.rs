// src/clip.rs

use crate::geometry::{Plane, Point3, Polygon};

/// Sutherland-Hodgman against a single plane.
///
/// Walks the vertex loop cyclically and keeps the inside part: both endpoints
/// inside emits the edge end, a crossing edge emits the plane intersection
/// (plus the end when entering). A result with fewer than 3 vertices carries
/// no visible surface and is dropped.
pub fn clip_polygon<S: Copy>(polygon: &Polygon<S>, plane: &Plane<S>) -> Option<Polygon<S>> {
    let n = polygon.vertices.len();
    let mut clipped: Vec<Point3<S>> = Vec::with_capacity(n + 1);

    for i in 0..n {
        let p1 = polygon.vertices[i];
        let p2 = polygon.vertices[(i + 1) % n];
        let p1_inside = plane.is_inside(&p1);
        let p2_inside = plane.is_inside(&p2);

        if p1_inside {
            if p2_inside {
                clipped.push(p2);
            } else {
                clipped.push(intersect(&p1, &p2, plane));
            }
        } else if p2_inside {
            clipped.push(intersect(&p1, &p2, plane));
            clipped.push(p2);
        }
    }

    if clipped.len() >= 3 {
        Some(Polygon::new(clipped, polygon.color))
    } else {
        None
    }
}

fn intersect<S: Copy>(p1: &Point3<S>, p2: &Point3<S>, plane: &Plane<S>) -> Point3<S> {
    let edge = p2.sub(p1);
    let t = -plane.signed_distance(p1) / plane.normal.dot(&edge);
    p1.add(&edge.scale(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cam;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn near_plane() -> Plane<Cam> {
        Plane::new(Point3::new(0.0, 0.0, -1.0), -0.1)
    }

    fn tri(z0: f32, z1: f32, z2: f32) -> Polygon<Cam> {
        Polygon::new(
            vec![
                Point3::new(-1.0, 0.0, z0),
                Point3::new(1.0, 0.0, z1),
                Point3::new(0.0, 1.0, z2),
            ],
            WHITE,
        )
    }

    #[test]
    fn fully_behind_is_dropped() {
        assert!(clip_polygon(&tri(0.5, 0.3, 1.0), &near_plane()).is_none());
    }

    #[test]
    fn fully_in_front_is_unchanged() {
        let poly = tri(-1.0, -2.0, -1.5);
        let clipped = clip_polygon(&poly, &near_plane()).unwrap();
        assert_eq!(clipped.vertices.len(), 3);
        // Same loop, rotated by one: the walk emits each edge's endpoint.
        for v in &clipped.vertices {
            assert!(poly.vertices.iter().any(|o| o.sub(v).length() < 1e-6));
        }
    }

    #[test]
    fn straddling_triangle_gains_a_vertex() {
        // One vertex behind the plane, two in front: two crossing edges, so
        // the triangle clips to a quad.
        let poly = tri(-1.0, -1.0, 0.5);
        let clipped = clip_polygon(&poly, &near_plane()).unwrap();
        assert_eq!(clipped.vertices.len(), 4);
        let plane = near_plane();
        for v in &clipped.vertices {
            assert!(plane.signed_distance(v) >= -1e-5);
        }
    }

    #[test]
    fn straddling_quad_with_one_corner_outside() {
        let poly: Polygon<Cam> = Polygon::new(
            vec![
                Point3::new(-1.0, -1.0, -1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(1.0, 1.0, 0.2),
                Point3::new(-1.0, 1.0, -1.0),
            ],
            WHITE,
        );
        let clipped = clip_polygon(&poly, &near_plane()).unwrap();
        // One corner cut off: 4 vertices become 5.
        assert_eq!(clipped.vertices.len(), 5);
    }

    #[test]
    fn intersection_lies_on_the_plane() {
        let plane = near_plane();
        let a: Point3<Cam> = Point3::new(0.0, 0.0, -2.0);
        let b = Point3::new(0.0, 0.0, 1.0);
        let hit = intersect(&a, &b, &plane);
        assert!(plane.signed_distance(&hit).abs() < 1e-6);
        assert!((hit.z + 0.1).abs() < 1e-6);
    }
}
