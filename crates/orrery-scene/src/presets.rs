//! Built-in scene descriptions.

use crate::BodySpec;

/// Sun radius, the unit everything else is sized against.
pub const SUN_RADIUS: f32 = 1.0;
/// Earth radius relative to the sun.
pub const EARTH_RADIUS: f32 = 0.5;
/// Moon radius relative to the sun.
pub const MOON_RADIUS: f32 = 0.25;
/// Earth orbit radius around the sun.
pub const EARTH_ORBIT_RADIUS: f32 = 10.0;
/// Moon orbit radius around the earth.
pub const MOON_ORBIT_RADIUS: f32 = 2.0;
/// Earth orbital period in simulated seconds.
pub const EARTH_ORBIT_PERIOD: f32 = 4.0;
/// Moon orbital period in simulated seconds.
pub const MOON_ORBIT_PERIOD: f32 = 2.0;

/// The demo solar system: an emissive sun at the origin, an orbiting earth
/// with its moon, and a ringed saturn on a wider orbit.
///
/// The moon's spin period equals its orbit period (tidally locked), so the
/// same hemisphere keeps facing the earth.
pub fn solar_system() -> Vec<BodySpec> {
    vec![
        BodySpec::new("sun", SUN_RADIUS),
        BodySpec::new("earth", EARTH_RADIUS)
            .orbiting("sun")
            .orbit(EARTH_ORBIT_RADIUS, EARTH_ORBIT_PERIOD)
            .spin(1.0),
        BodySpec::new("moon", MOON_RADIUS)
            .orbiting("earth")
            .orbit(MOON_ORBIT_RADIUS, MOON_ORBIT_PERIOD)
            .spin(MOON_ORBIT_PERIOD),
        BodySpec::new("saturn", 0.9)
            .orbiting("sun")
            .orbit(18.0, 8.0)
            .spin(0.5)
            .with_ring(1.2, 2.0, 27_f32.to_radians()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scene;
    use glam::Vec3;

    #[test]
    fn test_solar_system_validates() {
        let scene = Scene::new(solar_system()).unwrap();
        assert_eq!(scene.bodies().len(), 4);
    }

    #[test]
    fn test_sun_is_the_light_source() {
        let mut scene = Scene::new(solar_system()).unwrap();
        scene.update_transforms(7.0);
        assert_eq!(scene.light_position(), Vec3::ZERO);
    }

    #[test]
    fn test_only_saturn_is_ringed() {
        let mut scene = Scene::new(solar_system()).unwrap();
        scene.update_transforms(0.5);
        for (spec, pose) in scene.bodies().iter().zip(scene.poses()) {
            assert_eq!(spec.name == "saturn", pose.ring.is_some());
        }
    }
}
