//! Shipped scene files must load through the registry and instantiate.

use hyperwire::{FormatRegistry, RotationPlane};

#[test]
fn default_scene_file_loads_and_instantiates() {
    let registry = FormatRegistry::with_builtin();
    let template = registry.load("scenes/default.ron").unwrap();

    assert_eq!(template.name, "default");
    assert_eq!(template.objects.len(), 3);

    let scene = template.to_scene().unwrap();
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.total_edges(), 32 + 10 + 24);

    let tesseract = scene.find("tesseract").unwrap();
    assert_eq!(tesseract.topology().vertex_count(), 16);
    assert!((tesseract.spin().speeds[RotationPlane::Xy.index()] - 0.4).abs() < 0.0001);

    let camera = template.camera.unwrap();
    assert_eq!(camera.distance, 5.0);
    assert_eq!(camera.eye.z, -10.0);
}
