//! Static orbital parameters for a single celestial body.

/// Ring geometry attached to a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParams {
    /// Inner radius of the annulus, in the parent body's orbital frame.
    pub inner_radius: f32,
    /// Outer radius of the annulus.
    pub outer_radius: f32,
    /// Tilt about the local X axis, in radians.
    pub tilt: f32,
}

/// Immutable description of one celestial body.
///
/// A body either orbits the scene origin (`parent == None`) or orbits its
/// parent, never both. Periods are simulated seconds per revolution; a
/// period of zero means no motion of that kind. Constructed once during
/// scene setup; the derived pose lives in the scene, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    /// Identity, also the key used for parent lookups.
    pub name: String,
    /// Scale applied to the unit sphere. Must be positive.
    pub body_radius: f32,
    /// Parent body name, or `None` for a body orbiting the origin.
    pub parent: Option<String>,
    /// Distance from the parent (or origin). Zero for the central body.
    pub orbit_radius: f32,
    /// Seconds per revolution around the parent. Zero = stationary.
    pub orbit_period: f32,
    /// Seconds per spin about the local up axis. Zero = no spin.
    pub rotation_period: f32,
    /// Ring geometry, present only for ringed bodies.
    pub ring: Option<RingParams>,
}

impl BodySpec {
    /// Creates a stationary body of the given radius at the origin.
    pub fn new(name: impl Into<String>, body_radius: f32) -> Self {
        Self {
            name: name.into(),
            body_radius,
            parent: None,
            orbit_radius: 0.0,
            orbit_period: 0.0,
            rotation_period: 0.0,
            ring: None,
        }
    }

    /// Sets the parent this body orbits.
    pub fn orbiting(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the orbit radius and period.
    pub fn orbit(mut self, radius: f32, period: f32) -> Self {
        self.orbit_radius = radius;
        self.orbit_period = period;
        self
    }

    /// Sets the spin period about the local up axis.
    pub fn spin(mut self, period: f32) -> Self {
        self.rotation_period = period;
        self
    }

    /// Attaches a ring.
    pub fn with_ring(mut self, inner_radius: f32, outer_radius: f32, tilt: f32) -> Self {
        self.ring = Some(RingParams {
            inner_radius,
            outer_radius,
            tilt,
        });
        self
    }
}
