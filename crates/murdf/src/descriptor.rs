//! Element descriptors.
//!
//! Plain value records for the parts of a URDF document. Construction never
//! validates; value-list lengths are checked when a descriptor is emitted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::{scalars, Scalar};

// =============================================================================
// Geometry
// =============================================================================

/// Geometry primitive kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeometryKind {
    /// `<box size="x, y, z"/>`
    Box,
    /// `<cylinder radius="r" length="l"/>`
    Cylinder,
    /// `<sphere radius="r"/>`
    Sphere,
    /// Any other kind, kept verbatim.
    Other(String),
}

impl GeometryKind {
    /// Element name.
    pub fn as_str(&self) -> &str {
        match self {
            GeometryKind::Box => "box",
            GeometryKind::Cylinder => "cylinder",
            GeometryKind::Sphere => "sphere",
            GeometryKind::Other(kind) => kind,
        }
    }

    /// Number of values the kind takes, `None` when unrecognized.
    pub fn arity(&self) -> Option<usize> {
        match self {
            GeometryKind::Box => Some(3),
            GeometryKind::Cylinder => Some(2),
            GeometryKind::Sphere => Some(1),
            GeometryKind::Other(_) => None,
        }
    }
}

impl From<&str> for GeometryKind {
    fn from(kind: &str) -> Self {
        match kind {
            "box" => GeometryKind::Box,
            "cylinder" => GeometryKind::Cylinder,
            "sphere" => GeometryKind::Sphere,
            other => GeometryKind::Other(other.to_string()),
        }
    }
}

impl From<String> for GeometryKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "box" | "cylinder" | "sphere" => GeometryKind::from(kind.as_str()),
            _ => GeometryKind::Other(kind),
        }
    }
}

impl From<GeometryKind> for String {
    fn from(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geometry primitive and its dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Primitive kind.
    pub kind: GeometryKind,
    /// Dimensions: size for a box, radius and length for a cylinder, radius for a sphere.
    pub values: Vec<Scalar>,
}

impl Geometry {
    /// Create a geometry from a kind and its values.
    pub fn new<K, I>(kind: K, values: I) -> Self
    where
        K: Into<GeometryKind>,
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Self {
            kind: kind.into(),
            values: scalars(values),
        }
    }

    /// Box with edge lengths along x, y and z.
    pub fn cuboid(x: impl Into<Scalar>, y: impl Into<Scalar>, z: impl Into<Scalar>) -> Self {
        Self {
            kind: GeometryKind::Box,
            values: vec![x.into(), y.into(), z.into()],
        }
    }

    /// Cylinder along z.
    pub fn cylinder(radius: impl Into<Scalar>, length: impl Into<Scalar>) -> Self {
        Self {
            kind: GeometryKind::Cylinder,
            values: vec![radius.into(), length.into()],
        }
    }

    /// Sphere.
    pub fn sphere(radius: impl Into<Scalar>) -> Self {
        Self {
            kind: GeometryKind::Sphere,
            values: vec![radius.into()],
        }
    }
}

// =============================================================================
// Appearance
// =============================================================================

/// Color of a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Attribute name, usually `"rgba"`.
    pub attribute: String,
    /// Components.
    pub values: Vec<Scalar>,
}

impl Color {
    /// Create a color under an arbitrary attribute name.
    pub fn new<I>(attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Self {
            attribute: attribute.into(),
            values: scalars(values),
        }
    }

    /// `rgba` color with components in 0..1.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new("rgba", [r, g, b, a])
    }
}

/// Named material with a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Material color.
    pub color: Color,
}

impl Material {
    /// Create a material.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

// =============================================================================
// Pose and mass properties
// =============================================================================

/// Pose: position and roll-pitch-yaw orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Position (x, y, z).
    pub xyz: Vec<Scalar>,
    /// Orientation (roll, pitch, yaw).
    pub rpy: Vec<Scalar>,
}

impl Origin {
    /// Create an origin.
    pub fn new<P, R>(xyz: P, rpy: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Scalar>,
        R: IntoIterator,
        R::Item: Into<Scalar>,
    {
        Self {
            xyz: scalars(xyz),
            rpy: scalars(rpy),
        }
    }
}

/// Mass of a link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    /// Mass value.
    pub value: Scalar,
}

impl Mass {
    /// Create a mass.
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Inertia tensor as `[ixx, ixy, ixz, iyy, iyz, izz]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inertia {
    /// Tensor entries; six are expected.
    pub values: Vec<Scalar>,
}

impl Inertia {
    /// Attribute names, in value order.
    pub const KEYS: [&'static str; 6] = ["ixx", "ixy", "ixz", "iyy", "iyz", "izz"];

    /// Create an inertia from its entries.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Self {
            values: scalars(values),
        }
    }
}

// =============================================================================
// Joint properties
// =============================================================================

/// Joint axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Attribute name, usually `"xyz"`.
    pub attribute: String,
    /// Axis components.
    pub values: Vec<Scalar>,
}

impl Axis {
    /// Create an axis under an arbitrary attribute name.
    pub fn new<I>(attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Self {
            attribute: attribute.into(),
            values: scalars(values),
        }
    }

    /// `xyz` axis.
    pub fn xyz(x: impl Into<Scalar>, y: impl Into<Scalar>, z: impl Into<Scalar>) -> Self {
        Self {
            attribute: "xyz".into(),
            values: vec![x.into(), y.into(), z.into()],
        }
    }
}

/// Joint limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    /// Lower position limit.
    pub lower: Scalar,
    /// Upper position limit.
    pub upper: Scalar,
    /// Maximum effort.
    pub effort: Scalar,
    /// Maximum velocity.
    pub velocity: Scalar,
}

impl Limit {
    /// Create joint limits.
    pub fn new(
        lower: impl Into<Scalar>,
        upper: impl Into<Scalar>,
        effort: impl Into<Scalar>,
        velocity: impl Into<Scalar>,
    ) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
            effort: effort.into(),
            velocity: velocity.into(),
        }
    }
}

// =============================================================================
// Link sub-elements
// =============================================================================

/// Visual representation of a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    /// Shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Appearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    /// Pose relative to the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl Visual {
    /// Visual with a shape.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    /// Set the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Set the origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Collision shape of a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    /// Shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Pose relative to the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl Collision {
    /// Collision with a shape.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            origin: None,
        }
    }

    /// Set the origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Mass properties of a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inertial {
    /// Mass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<Mass>,
    /// Inertia tensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertia: Option<Inertia>,
    /// Center of mass frame relative to the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl Inertial {
    /// Inertial with mass and inertia.
    pub fn new(mass: Mass, inertia: Inertia) -> Self {
        Self {
            mass: Some(mass),
            inertia: Some(inertia),
            origin: None,
        }
    }

    /// Set the origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

// =============================================================================
// Links and joints
// =============================================================================

/// A rigid body segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link name, unique within a robot by convention.
    pub name: String,
    /// Visual representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
    /// Mass properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertial: Option<Inertial>,
    /// Collision shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision: Option<Collision>,
}

impl Link {
    /// Link with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the visual.
    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    /// Set the inertial.
    pub fn with_inertial(mut self, inertial: Inertial) -> Self {
        self.inertial = Some(inertial);
        self
    }

    /// Set the collision.
    pub fn with_collision(mut self, collision: Collision) -> Self {
        self.collision = Some(collision);
        self
    }
}

/// Joint type, written verbatim as the `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JointType {
    /// Hinge with limits.
    Revolute,
    /// Hinge without limits.
    Continuous,
    /// Slider.
    Prismatic,
    /// Rigid attachment.
    Fixed,
    /// Six degrees of freedom.
    Floating,
    /// Motion in a plane.
    Planar,
    /// Any other type string.
    Other(String),
}

impl JointType {
    /// Attribute text.
    pub fn as_str(&self) -> &str {
        match self {
            JointType::Revolute => "revolute",
            JointType::Continuous => "continuous",
            JointType::Prismatic => "prismatic",
            JointType::Fixed => "fixed",
            JointType::Floating => "floating",
            JointType::Planar => "planar",
            JointType::Other(kind) => kind,
        }
    }
}

impl From<&str> for JointType {
    fn from(kind: &str) -> Self {
        match kind {
            "revolute" => JointType::Revolute,
            "continuous" => JointType::Continuous,
            "prismatic" => JointType::Prismatic,
            "fixed" => JointType::Fixed,
            "floating" => JointType::Floating,
            "planar" => JointType::Planar,
            other => JointType::Other(other.to_string()),
        }
    }
}

impl From<String> for JointType {
    fn from(kind: String) -> Self {
        match JointType::from(kind.as_str()) {
            JointType::Other(_) => JointType::Other(kind),
            known => known,
        }
    }
}

impl From<JointType> for String {
    fn from(kind: JointType) -> Self {
        match kind {
            JointType::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection between a parent and a child link.
///
/// Link names are plain strings; nothing checks that they exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Joint name.
    pub name: String,
    /// Joint type.
    #[serde(rename = "type")]
    pub kind: JointType,
    /// Parent link name. Empty means no `<parent>` element.
    #[serde(default)]
    pub parent: String,
    /// Child link name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,
    /// Motion axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    /// Motion limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Limit>,
    /// Pose of the child frame in the parent frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl Joint {
    /// Joint with a name, type and parent link.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<JointType>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            parent: parent.into(),
            child: None,
            axis: None,
            limit: None,
            origin: None,
        }
    }

    /// Set the child link name.
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.child = Some(child.into());
        self
    }

    /// Set the axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the limits.
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// A complete robot: links then joints, emitted under `<robot name="...">`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    /// Robot name.
    pub name: String,
    /// Links in document order.
    #[serde(default, rename = "link", skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Joints in document order.
    #[serde(default, rename = "joint", skip_serializing_if = "Vec::is_empty")]
    pub joints: Vec<Joint>,
}

impl Robot {
    /// Empty robot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a link.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Append a joint.
    pub fn with_joint(mut self, joint: Joint) -> Self {
        self.joints.push(joint);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_kind_from_str() {
        assert_eq!(GeometryKind::from("box"), GeometryKind::Box);
        assert_eq!(GeometryKind::from("cylinder"), GeometryKind::Cylinder);
        assert_eq!(GeometryKind::from("sphere"), GeometryKind::Sphere);
        assert_eq!(
            GeometryKind::from("mesh"),
            GeometryKind::Other("mesh".into())
        );
        assert_eq!(GeometryKind::from("Box".to_string()).as_str(), "Box");
    }

    #[test]
    fn geometry_arity() {
        assert_eq!(Geometry::cuboid(1, 2, 3).kind.arity(), Some(3));
        assert_eq!(Geometry::cylinder(0.5, 2.0).kind.arity(), Some(2));
        assert_eq!(Geometry::sphere(1.0).kind.arity(), Some(1));
        assert_eq!(Geometry::new("capsule", [1.0]).kind.arity(), None);
    }

    #[test]
    fn construction_does_not_validate() {
        let g = Geometry::new("box", [1, 2]);
        assert_eq!(g.values.len(), 2);
        let i = Inertia::new([1.0; 4]);
        assert_eq!(i.values.len(), 4);
    }

    #[test]
    fn joint_type_round_trips_strings() {
        for name in ["revolute", "continuous", "prismatic", "fixed", "floating", "planar"] {
            let kind = JointType::from(name);
            assert!(!matches!(kind, JointType::Other(_)));
            assert_eq!(String::from(kind), name);
        }
        assert_eq!(
            JointType::from("screw".to_string()),
            JointType::Other("screw".into())
        );
    }

    #[test]
    fn builders_set_optionals() {
        let joint = Joint::new("j1", "revolute", "base")
            .with_child("arm")
            .with_axis(Axis::xyz(0, 0, 1))
            .with_limit(Limit::new(-1.57, 1.57, 10, 1.0));
        assert_eq!(joint.child.as_deref(), Some("arm"));
        assert!(joint.axis.is_some());
        assert!(joint.origin.is_none());

        let link = Link::new("base").with_collision(Collision::new(Geometry::sphere(1)));
        assert!(link.visual.is_none());
        assert!(link.inertial.is_none());
        assert!(link.collision.is_some());
    }

    #[test]
    fn serde_uses_plain_strings() {
        let joint = Joint::new("elbow", "continuous", "upper_arm").with_child("forearm");
        let json = serde_json::to_string(&joint).unwrap();
        assert!(json.contains(r#""type":"continuous""#));
        assert!(!json.contains("axis"));

        let geometry: Geometry =
            serde_json::from_str(r#"{"kind":"cylinder","values":[0.1,2]}"#).unwrap();
        assert_eq!(geometry.kind, GeometryKind::Cylinder);
        assert_eq!(geometry.values, vec![Scalar::Float(0.1), Scalar::Int(2)]);
    }

    #[test]
    fn robot_deserializes_with_defaults() {
        let robot: Robot = serde_json::from_str(
            r#"{
                "name": "bot",
                "link": [{"name": "base"}, {"name": "arm"}],
                "joint": [{"name": "j", "type": "fixed", "parent": "base", "child": "arm"}]
            }"#,
        )
        .unwrap();
        assert_eq!(robot.links.len(), 2);
        assert_eq!(robot.joints[0].kind, JointType::Fixed);
        assert!(robot.links[0].visual.is_none());
    }
}
