//! Scene graph validation and the per-frame transform solver.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::{Mat4, Vec3};
use tracing::debug;

use crate::{BodySpec, SceneError};

/// Derived per-frame pose of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// World transform mapping local unit-sphere coordinates to the scene.
    pub world: Mat4,
    /// World transform of the body's ring, if it has one.
    pub ring: Option<Mat4>,
}

impl Default for BodyPose {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            ring: None,
        }
    }
}

/// Angle in radians swept after `time` seconds of a cyclic motion with the
/// given period. A non-positive period means no motion.
///
/// Reduced modulo one full turn before widening is discarded, so the angle
/// stays accurate even when `time / period` grows large.
pub fn period_angle(period: f32, time: f64) -> f32 {
    if period > 0.0 {
        ((time / period as f64).fract() * TAU) as f32
    } else {
        0.0
    }
}

/// A body's transform relative to its parent's frame at the given time.
///
/// Composition order is the contract: orbit rotation outermost, then the
/// radial offset, then spin, then scale. The body traces a circle of
/// `orbit_radius` around the parent origin while spinning about its own
/// axis independently of the orbit angle.
pub fn local_transform(body: &BodySpec, time: f64) -> Mat4 {
    let orbit_angle = period_angle(body.orbit_period, time);
    let rotation_angle = period_angle(body.rotation_period, time);
    Mat4::from_rotation_y(orbit_angle)
        * Mat4::from_translation(Vec3::new(body.orbit_radius, 0.0, 0.0))
        * Mat4::from_rotation_y(rotation_angle)
        * Mat4::from_scale(Vec3::splat(body.body_radius))
}

/// A validated celestial scene: bodies, resolved parent links, and their
/// current poses.
///
/// Construction resolves parent names to indices and topologically sorts the
/// graph; a cycle or dangling parent reference aborts construction. After
/// that, [`update_transforms`](Self::update_transforms) is the only mutation,
/// re-deriving every pose from a clock reading each frame.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<BodySpec>,
    parents: Vec<Option<usize>>,
    /// Evaluation order guaranteeing parent-before-child.
    order: Vec<usize>,
    poses: Vec<BodyPose>,
}

impl Scene {
    /// Validates the body set and builds the evaluation order.
    pub fn new(bodies: Vec<BodySpec>) -> Result<Self, SceneError> {
        let mut index_by_name = HashMap::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            if body.body_radius <= 0.0 {
                return Err(SceneError::NonPositiveRadius(body.name.clone()));
            }
            if body.orbit_radius < 0.0 {
                return Err(SceneError::NegativeOrbitRadius(body.name.clone()));
            }
            if index_by_name.insert(body.name.clone(), i).is_some() {
                return Err(SceneError::DuplicateName(body.name.clone()));
            }
        }

        let mut parents = Vec::with_capacity(bodies.len());
        for body in &bodies {
            match &body.parent {
                None => parents.push(None),
                Some(parent) => match index_by_name.get(parent) {
                    Some(&p) => parents.push(Some(p)),
                    None => {
                        return Err(SceneError::UnknownParent {
                            body: body.name.clone(),
                            parent: parent.clone(),
                        });
                    }
                },
            }
        }

        let order = topological_order(&bodies, &parents)?;
        debug!(bodies = bodies.len(), "scene graph validated");

        let poses = vec![BodyPose::default(); bodies.len()];
        Ok(Self {
            bodies,
            parents,
            order,
            poses,
        })
    }

    /// Recomputes every body's world pose for the given simulated time.
    ///
    /// Bodies are evaluated in parent-before-child order so a child always
    /// composes onto its parent's freshly computed transform. Idempotent for
    /// a fixed `time`; there is no hidden state between calls.
    pub fn update_transforms(&mut self, time: f64) {
        for &i in &self.order {
            let body = &self.bodies[i];
            let parent_world = match self.parents[i] {
                Some(p) => self.poses[p].world,
                None => Mat4::IDENTITY,
            };

            // The frame carries the orbital motion only; spin and scale are
            // applied after it so the ring can be anchored spin-free.
            let frame = parent_world
                * Mat4::from_rotation_y(period_angle(body.orbit_period, time))
                * Mat4::from_translation(Vec3::new(body.orbit_radius, 0.0, 0.0));

            self.poses[i] = BodyPose {
                world: frame
                    * Mat4::from_rotation_y(period_angle(body.rotation_period, time))
                    * Mat4::from_scale(Vec3::splat(body.body_radius)),
                ring: body.ring.map(|ring| frame * Mat4::from_rotation_x(ring.tilt)),
            };
        }
    }

    /// The bodies in their declared order.
    pub fn bodies(&self) -> &[BodySpec] {
        &self.bodies
    }

    /// Current poses, parallel to [`bodies`](Self::bodies).
    pub fn poses(&self) -> &[BodyPose] {
        &self.poses
    }

    /// Looks up a body and its pose by name.
    pub fn body(&self, name: &str) -> Option<(&BodySpec, &BodyPose)> {
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .map(|i| (&self.bodies[i], &self.poses[i]))
    }

    /// World position of the central (first parentless) body, used as the
    /// scene's light source.
    pub fn light_position(&self) -> Vec3 {
        self.parents
            .iter()
            .position(Option::is_none)
            .map(|i| self.poses[i].world.w_axis.truncate())
            .unwrap_or(Vec3::ZERO)
    }
}

/// Kahn-style topological sort over the parent links.
///
/// The in-degree of every node is at most one (a body has one parent), so
/// this reduces to walking down from the roots. Any body never reached sits
/// on a cycle.
fn topological_order(
    bodies: &[BodySpec],
    parents: &[Option<usize>],
) -> Result<Vec<usize>, SceneError> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); bodies.len()];
    let mut queue: Vec<usize> = Vec::new();
    for (i, parent) in parents.iter().enumerate() {
        match parent {
            Some(p) => children[*p].push(i),
            None => queue.push(i),
        }
    }

    let mut order = Vec::with_capacity(bodies.len());
    while let Some(i) = queue.pop() {
        order.push(i);
        queue.extend_from_slice(&children[i]);
    }

    if order.len() < bodies.len() {
        let stuck = (0..bodies.len()).find(|i| !order.contains(i)).unwrap_or(0);
        return Err(SceneError::ParentCycle(bodies[stuck].name.clone()));
    }
    Ok(order)
}
