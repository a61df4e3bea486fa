//! Integration tests for shapes.

use std::f64::consts::PI;

use wombat_object::{Circle, CircleData, Object, Rectangle};

#[test]
fn test_rectangle_area() {
    let rect = Rectangle::new(10.0, 20.0);
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 20.0);
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_rectangle_area_unvalidated_dimensions() {
    assert_eq!(Rectangle::new(-2.0, 3.0).area(), -6.0);
    assert_eq!(Rectangle::new(0.0, 5.0).area(), 0.0);
}

#[test]
fn test_circle_operations() {
    let circle = Object::new(Circle, CircleData { radius: 2.0 });
    assert_eq!(circle.diameter(), 4.0);
    assert!((circle.circumference() - 4.0 * PI).abs() < 1e-12);
    assert!((circle.area() - 4.0 * PI).abs() < 1e-12);
}

#[test]
fn test_object_fields_are_mutable_through_deref() {
    let mut circle = Object::new(Circle, CircleData { radius: 1.0 });
    circle.radius = 3.0;
    assert_eq!(circle.diameter(), 6.0);
    assert_eq!(circle.data(), &CircleData { radius: 3.0 });
}
