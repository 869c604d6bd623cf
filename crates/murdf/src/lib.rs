#![warn(missing_docs)]

//! Compose URDF robot descriptions in Rust.
//!
//! Build [`Link`]s and [`Joint`]s from small value descriptors, then let an
//! [`Emitter`] append them to an [`Element`] tree that can be written as XML.
//!
//! Value-list problems (a box with two sizes, an inertia with five entries,
//! an unknown geometry kind) never stop tree construction under the default
//! lenient policy: the node is written without the offending attributes and a
//! [`Diagnostic`] is collected. The strict policy turns the first diagnostic
//! into an error instead.
//!
//! # Example
//!
//! ```
//! use murdf::{
//!     render, Axis, Collision, EmitConfig, Geometry, Inertia, Inertial, Joint, Limit, Link,
//!     Mass, Robot,
//! };
//!
//! let robot = Robot::new("arm")
//!     .with_link(
//!         Link::new("base")
//!             .with_inertial(Inertial::new(Mass::new(1.0), Inertia::new([1, 0, 0, 1, 0, 1])))
//!             .with_collision(Collision::new(Geometry::cuboid(0.2, 0.2, 0.1))),
//!     )
//!     .with_link(Link::new("upper"))
//!     .with_joint(
//!         Joint::new("shoulder", "revolute", "base")
//!             .with_child("upper")
//!             .with_axis(Axis::xyz(0, 0, 1))
//!             .with_limit(Limit::new(-1.57, 1.57, 10.0, 1.0)),
//!     );
//!
//! let rendered = render(&robot, &EmitConfig::default()).unwrap();
//! assert!(rendered.xml.contains(r#"<box size="0.2, 0.2, 0.1"/>"#));
//! assert!(rendered.diagnostics.is_empty());
//! ```

pub mod config;
pub mod descriptor;
pub mod diagnostic;
pub mod element;
pub mod emit;
pub mod error;
pub mod scalar;
pub mod xml;

pub use config::{AxisTag, EmitConfig, ValidationPolicy};
pub use descriptor::{
    Axis, Collision, Color, Geometry, GeometryKind, Inertia, Inertial, Joint, JointType, Limit,
    Link, Mass, Material, Origin, Robot, Visual,
};
pub use diagnostic::Diagnostic;
pub use element::Element;
pub use emit::{Emit, Emitter};
pub use error::{Result, UrdfError};
pub use scalar::Scalar;
pub use xml::write_xml;

/// XML text of a robot plus the diagnostics raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// The URDF document.
    pub xml: String,
    /// Lenient-mode findings, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Emit `robot` and serialize it to URDF text.
pub fn render(robot: &Robot, config: &EmitConfig) -> Result<Rendered> {
    let mut emitter = Emitter::new(config.clone());
    let root = emitter.robot(robot)?;
    let xml = root.to_xml_string(config)?;
    Ok(Rendered {
        xml,
        diagnostics: emitter.take_diagnostics(),
    })
}
