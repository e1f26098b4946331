use super::*;
use crate::foundation::core::{Point, Rgba8};

#[test]
fn frames_keep_scene_order() {
    let surface = CanvasSurface::new(16.0, 16.0, 1.0).unwrap();
    let scenes: Vec<Scene> = (0..6)
        .map(|i| {
            let mut s = Scene::new();
            if i % 2 == 1 {
                s.circle(Point::new(8.0, 8.0), 6.0, Rgba8::BLACK, 1.0);
            }
            s
        })
        .collect();
    let frames = render_sequence(&scenes, &surface, Some(2)).unwrap();
    assert_eq!(frames.len(), 6);
    for (i, f) in frames.iter().enumerate() {
        let expected = if i % 2 == 1 { [0, 0, 0, 255] } else { [255, 255, 255, 255] };
        assert_eq!(f.pixel(8, 8), Some(expected));
    }
}

#[test]
fn zero_threads_is_rejected() {
    let surface = CanvasSurface::new(4.0, 4.0, 1.0).unwrap();
    assert!(render_sequence(&[Scene::new()], &surface, Some(0)).is_err());
}

#[test]
fn errors_propagate() {
    let surface = CanvasSurface::new(0.0, 4.0, 1.0).unwrap();
    assert!(render_sequence(&[Scene::new(), Scene::new()], &surface, None).is_err());
}
