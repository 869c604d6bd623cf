//! Descriptor to element-tree emission.
//!
//! Every descriptor implements [`Emit`], which builds a detached subtree.
//! [`Emitter`] attaches finished subtrees to a parent, so a strict-mode
//! failure leaves the parent unchanged.
//!
//! # Example
//!
//! ```
//! use murdf::{Collision, Element, Emitter, Geometry, Link};
//!
//! let mut robot = Element::new("robot");
//! let mut emitter = Emitter::default();
//!
//! let link = Link::new("base").with_collision(Collision::new(Geometry::cuboid(1, 1, 1)));
//! let node = emitter.add_link(&mut robot, &link).unwrap();
//! assert_eq!(node.get("name"), Some("base"));
//! assert!(emitter.diagnostics().is_empty());
//! ```

use crate::config::{EmitConfig, ValidationPolicy};
use crate::descriptor::{
    Axis, Collision, Color, Geometry, GeometryKind, Inertia, Inertial, Joint, Limit, Link, Mass,
    Material, Origin, Robot, Visual,
};
use crate::diagnostic::Diagnostic;
use crate::element::Element;
use crate::error::Result;
use crate::scalar::join;

/// A descriptor that can be turned into an element subtree.
pub trait Emit {
    /// Build the subtree for this descriptor.
    fn emit(&self, emitter: &mut Emitter) -> Result<Element>;
}

/// Walks descriptors and appends the matching nodes to a tree.
///
/// Holds the [`EmitConfig`] and, under the lenient policy, the diagnostics
/// raised so far.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    config: EmitConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Emitter {
    /// Create an emitter with the given settings.
    pub fn new(config: EmitConfig) -> Self {
        Self {
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Emitter that fails on the first diagnostic.
    pub fn strict() -> Self {
        Self::new(EmitConfig::strict())
    }

    /// Settings in use.
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Emit `item` and append it under `parent`, returning the new node.
    pub fn append<'p, T>(&mut self, parent: &'p mut Element, item: &T) -> Result<&'p mut Element>
    where
        T: Emit + ?Sized,
    {
        let node = item.emit(self)?;
        Ok(parent.push(node))
    }

    /// Append a `<link>` under `parent`.
    pub fn add_link<'p>(
        &mut self,
        parent: &'p mut Element,
        link: &Link,
    ) -> Result<&'p mut Element> {
        tracing::debug!(link = %link.name, "emitting link");
        self.append(parent, link)
    }

    /// Append a `<joint>` under `parent`.
    pub fn add_joint<'p>(
        &mut self,
        parent: &'p mut Element,
        joint: &Joint,
    ) -> Result<&'p mut Element> {
        tracing::debug!(joint = %joint.name, kind = %joint.kind, "emitting joint");
        self.append(parent, joint)
    }

    /// Build a `<robot>` root holding every link, then every joint.
    pub fn robot(&mut self, robot: &Robot) -> Result<Element> {
        robot.emit(self)
    }

    /// Record a diagnostic according to the policy.
    fn report(&mut self, diagnostic: Diagnostic) -> Result<()> {
        match self.config.policy {
            ValidationPolicy::Strict => Err(diagnostic.into()),
            ValidationPolicy::Lenient => {
                tracing::warn!(element = diagnostic.element(), "{diagnostic}");
                self.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }

    /// Append `item` under `node` if present.
    fn nest<T: Emit>(&mut self, node: &mut Element, item: Option<&T>) -> Result<()> {
        if let Some(item) = item {
            self.append(node, item)?;
        }
        Ok(())
    }
}

impl Emit for Geometry {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new(self.kind.as_str());
        let Some(expected) = self.kind.arity() else {
            emitter.report(Diagnostic::unrecognized_geometry(self.kind.as_str()))?;
            return Ok(node);
        };
        if self.values.len() != expected {
            emitter.report(Diagnostic::shape_mismatch(
                self.kind.as_str(),
                expected,
                self.values.len(),
            ))?;
            return Ok(node);
        }

        match (&self.kind, self.values.as_slice()) {
            (GeometryKind::Box, size) => node.set("size", join(size)),
            (GeometryKind::Cylinder, [radius, length]) => {
                node.set("radius", radius.to_string());
                node.set("length", length.to_string());
            }
            (GeometryKind::Sphere, [radius]) => node.set("radius", radius.to_string()),
            // Lengths were checked against arity above.
            _ => {}
        }
        Ok(node)
    }
}

impl Emit for Color {
    fn emit(&self, _emitter: &mut Emitter) -> Result<Element> {
        Ok(Element::new("color").with_attribute(self.attribute.as_str(), join(&self.values)))
    }
}

impl Emit for Material {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("material").with_attribute("name", self.name.as_str());
        emitter.append(&mut node, &self.color)?;
        Ok(node)
    }
}

impl Emit for Origin {
    fn emit(&self, _emitter: &mut Emitter) -> Result<Element> {
        Ok(Element::new("origin")
            .with_attribute("xyz", join(&self.xyz))
            .with_attribute("rpy", join(&self.rpy)))
    }
}

impl Emit for Mass {
    fn emit(&self, _emitter: &mut Emitter) -> Result<Element> {
        Ok(Element::new("mass").with_attribute("value", self.value.to_string()))
    }
}

impl Emit for Inertia {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("inertia");
        if self.values.len() == Self::KEYS.len() {
            for (key, value) in Self::KEYS.iter().zip(&self.values) {
                node.set(*key, value.to_string());
            }
        } else {
            emitter.report(Diagnostic::shape_mismatch(
                "inertia",
                Self::KEYS.len(),
                self.values.len(),
            ))?;
        }
        Ok(node)
    }
}

impl Emit for Axis {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        Ok(Element::new(emitter.config().axis_tag.as_str())
            .with_attribute(self.attribute.as_str(), join(&self.values)))
    }
}

impl Emit for Limit {
    fn emit(&self, _emitter: &mut Emitter) -> Result<Element> {
        Ok(Element::new("limit")
            .with_attribute("lower", self.lower.to_string())
            .with_attribute("upper", self.upper.to_string())
            .with_attribute("effort", self.effort.to_string())
            .with_attribute("velocity", self.velocity.to_string()))
    }
}

impl Emit for Visual {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("visual");
        emitter.nest(&mut node, self.geometry.as_ref())?;
        emitter.nest(&mut node, self.material.as_ref())?;
        emitter.nest(&mut node, self.origin.as_ref())?;
        Ok(node)
    }
}

impl Emit for Collision {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("collision");
        emitter.nest(&mut node, self.geometry.as_ref())?;
        emitter.nest(&mut node, self.origin.as_ref())?;
        Ok(node)
    }
}

impl Emit for Inertial {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("inertial");
        emitter.nest(&mut node, self.mass.as_ref())?;
        emitter.nest(&mut node, self.inertia.as_ref())?;
        emitter.nest(&mut node, self.origin.as_ref())?;
        Ok(node)
    }
}

impl Emit for Link {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("link").with_attribute("name", self.name.as_str());
        emitter.nest(&mut node, self.visual.as_ref())?;
        emitter.nest(&mut node, self.inertial.as_ref())?;
        emitter.nest(&mut node, self.collision.as_ref())?;
        Ok(node)
    }
}

impl Emit for Joint {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("joint")
            .with_attribute("name", self.name.as_str())
            .with_attribute("type", self.kind.as_str());
        emitter.nest(&mut node, self.axis.as_ref())?;
        emitter.nest(&mut node, self.limit.as_ref())?;
        emitter.nest(&mut node, self.origin.as_ref())?;
        if !self.parent.is_empty() {
            node.sub_element("parent").set("link", self.parent.as_str());
        }
        if let Some(child) = self.child.as_deref().filter(|c| !c.is_empty()) {
            node.sub_element("child").set("link", child);
        }
        Ok(node)
    }
}

impl Emit for Robot {
    fn emit(&self, emitter: &mut Emitter) -> Result<Element> {
        let mut node = Element::new("robot").with_attribute("name", self.name.as_str());
        for link in &self.links {
            emitter.add_link(&mut node, link)?;
        }
        for joint in &self.joints {
            emitter.add_joint(&mut node, joint)?;
        }
        Ok(node)
    }
}
