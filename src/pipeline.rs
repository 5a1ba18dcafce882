// src/pipeline.rs

use crate::camera::{Camera, Projection};
use crate::clip::clip_polygon;
use crate::geometry::{Cam, Polygon, ScreenPolygon, World};
use crate::scene::PolygonSource;

/// Run the full software pipeline for one frame: gather world polygons from
/// every source, transform to camera space, clip against the near plane,
/// depth-sort, project to pixels.
///
/// The returned list replaces the previous frame's drawables entirely and is
/// already in painter's order: farthest first, so the closest polygon (max
/// camera-space z nearest zero) is emitted last and overdraws the rest. The
/// max-vertex-z ordering is a deliberate approximation that holds up for a
/// single convex room; it is not a general visibility solution.
pub fn render_frame(
    sources: &[&dyn PolygonSource],
    camera: &Camera,
    projection: &Projection,
    width: f32,
    height: f32,
) -> Vec<ScreenPolygon> {
    let mut world: Vec<Polygon<World>> = Vec::new();
    for source in sources {
        source.emit(&mut world);
    }

    let near = projection.near_plane();
    let mut visible: Vec<Polygon<Cam>> = Vec::with_capacity(world.len());
    for poly in &world {
        let transformed = Polygon::new(
            poly.vertices.iter().map(|v| camera.to_camera_space(v)).collect(),
            poly.color,
        );
        if let Some(clipped) = clip_polygon(&transformed, &near) {
            visible.push(clipped);
        }
    }

    visible.sort_by(|a, b| {
        max_z(a).partial_cmp(&max_z(b)).unwrap_or(std::cmp::Ordering::Equal)
    });

    visible
        .iter()
        .map(|poly| ScreenPolygon {
            points: poly
                .vertices
                .iter()
                .map(|v| projection.project_point(v, width, height))
                .collect(),
            color: poly.color,
        })
        .collect()
}

fn max_z(poly: &Polygon<Cam>) -> f32 {
    poly.vertices.iter().map(|v| v.z).fold(f32::NEG_INFINITY, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use std::f32::consts::FRAC_PI_2;

    struct Fixture(Vec<Polygon<World>>);

    impl PolygonSource for Fixture {
        fn emit(&self, out: &mut Vec<Polygon<World>>) {
            out.extend(self.0.iter().cloned());
        }
    }

    fn facing_minus_z() -> Camera {
        Camera::new(Point3::new(0.0, 1.0, 0.0), -FRAC_PI_2, 0.0)
    }

    fn quad_at(z: f32, color: [f32; 4]) -> Polygon<World> {
        Polygon::new(
            vec![
                Point3::new(-0.5, 0.5, z),
                Point3::new(0.5, 0.5, z),
                Point3::new(0.5, 1.5, z),
                Point3::new(-0.5, 1.5, z),
            ],
            color,
        )
    }

    #[test]
    fn point_straight_ahead_lands_at_screen_center() {
        let camera = facing_minus_z();
        let projection = Projection::new(0.1, 60.0);
        let cam_point = camera.to_camera_space(&Point3::new(0.0, 1.0, -1.0));
        let s = projection.project_point(&cam_point, 800.0, 600.0);
        assert!((s.x - 400.0).abs() < 1e-2);
        assert!((s.y - 300.0).abs() < 1e-2);
    }

    #[test]
    fn frame_of_centered_quad_spans_the_center() {
        let camera = facing_minus_z();
        let projection = Projection::new(0.1, 60.0);
        let fixture = Fixture(vec![quad_at(-1.0, [1.0, 0.0, 0.0, 1.0])]);
        let frame = render_frame(&[&fixture], &camera, &projection, 800.0, 600.0);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].points.len(), 4);
        let mean_x: f32 =
            frame[0].points.iter().map(|p| p.x).sum::<f32>() / frame[0].points.len() as f32;
        let mean_y: f32 =
            frame[0].points.iter().map(|p| p.y).sum::<f32>() / frame[0].points.len() as f32;
        assert!((mean_x - 400.0).abs() < 1.0);
        assert!((mean_y - 300.0).abs() < 1.0);
    }

    #[test]
    fn geometry_behind_the_camera_is_dropped() {
        let camera = facing_minus_z();
        let projection = Projection::new(0.1, 60.0);
        let fixture = Fixture(vec![quad_at(2.0, [1.0, 0.0, 0.0, 1.0])]);
        let frame = render_frame(&[&fixture], &camera, &projection, 800.0, 600.0);
        assert!(frame.is_empty());
    }

    #[test]
    fn closer_polygon_is_emitted_last() {
        let camera = facing_minus_z();
        let projection = Projection::new(0.1, 60.0);
        let far = [0.0, 1.0, 0.0, 1.0];
        let close = [0.0, 0.0, 1.0, 1.0];
        // Listed near-first on purpose; the sort must reorder.
        let fixture = Fixture(vec![quad_at(-0.5, close), quad_at(-1.8, far)]);
        let frame = render_frame(&[&fixture], &camera, &projection, 800.0, 600.0);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0].color, far);
        assert_eq!(frame[1].color, close);
    }

    #[test]
    fn sources_compose() {
        let camera = facing_minus_z();
        let projection = Projection::new(0.1, 60.0);
        let a = Fixture(vec![quad_at(-1.0, [1.0, 0.0, 0.0, 1.0])]);
        let b = Fixture(vec![quad_at(-1.5, [0.0, 1.0, 0.0, 1.0])]);
        let frame = render_frame(&[&a, &b], &camera, &projection, 800.0, 600.0);
        assert_eq!(frame.len(), 2);
    }
}
