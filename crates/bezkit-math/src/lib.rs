pub mod aabb;

pub use glam::{dvec2, dvec3, DVec2, DVec3, DVec4};
pub use aabb::Aabb3;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
