//! 2D vector math
//!
//! Pure functions over [`DVec2`]. Lengths go through [`approx_sqrt`], a
//! Babylonian square root whose precision contract is [`SQRT_TOLERANCE`]:
//! the returned root `r` satisfies `r² - n < SQRT_TOLERANCE`.

use glam::DVec2;

use super::state::Disc;

/// Convergence bound for [`approx_sqrt`]
pub const SQRT_TOLERANCE: f64 = 0.001;

/// Hard stop for [`approx_sqrt`] (enough to walk down from `f64::MAX`)
pub const MAX_SQRT_ITERATIONS: usize = 2048;

#[inline]
pub fn add(a: DVec2, b: DVec2) -> DVec2 {
    a + b
}

#[inline]
pub fn subtract(a: DVec2, b: DVec2) -> DVec2 {
    a - b
}

#[inline]
pub fn scale(v: DVec2, s: f64) -> DVec2 {
    v * s
}

#[inline]
pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Square root by the Babylonian sequence `x' = (x + n/x) / 2`
///
/// The sequence starts at or above the root so it decreases monotonically;
/// iteration ends once `x² - n` drops under [`SQRT_TOLERANCE`] or the
/// estimate stops shrinking.
pub fn approx_sqrt(num: f64) -> f64 {
    if num <= 0.0 {
        return 0.0;
    }

    let mut approx = num.max(1.0);
    for _ in 0..MAX_SQRT_ITERATIONS {
        if approx * approx - num < SQRT_TOLERANCE {
            break;
        }
        let next = (approx + num / approx) / 2.0;
        if next >= approx {
            break;
        }
        approx = next;
    }
    approx
}

#[inline]
pub fn length(v: DVec2) -> f64 {
    approx_sqrt(dot(v, v))
}

/// Unit vector in the direction of `v`; the zero vector is returned as is
pub fn normalize(v: DVec2) -> DVec2 {
    let len = length(v);
    if len != 0.0 { v / len } else { v }
}

/// Rescale `v` from `old_length` to `new_length` (`old_length` must be non-zero)
#[inline]
pub fn set_length(v: DVec2, new_length: f64, old_length: f64) -> DVec2 {
    v * new_length / old_length
}

/// Mirror `vel` about a surface with the given unit normal
///
/// The component along the normal is reversed, the tangential component is
/// kept. A zero normal leaves the velocity untouched.
pub fn reflect_off_normal(vel: DVec2, normal: DVec2) -> DVec2 {
    let along_normal = scale(normal, dot(vel, normal));
    let tangential = subtract(vel, along_normal);
    subtract(tangential, along_normal)
}

/// Velocity of `disc` after bouncing off a circular wall centered at `boundary_origin`
///
/// The wall is treated as flat at the disc's position, with its normal
/// pointing from `boundary_origin` through the disc center.
pub fn reflect(disc: &Disc, boundary_origin: DVec2) -> DVec2 {
    let normal = normalize(subtract(disc.pos, boundary_origin));
    reflect_off_normal(disc.vel, normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_length_3_4_5() {
        let len = length(DVec2::new(3.0, 4.0));
        assert!((len - 5.0).abs() < SQRT_TOLERANCE);
    }

    #[test]
    fn test_approx_sqrt_small_and_zero() {
        assert_eq!(approx_sqrt(0.0), 0.0);
        assert!((approx_sqrt(0.25) - 0.5).abs() < SQRT_TOLERANCE);
        assert!((approx_sqrt(1.0) - 1.0).abs() < SQRT_TOLERANCE);
    }

    #[test]
    fn test_approx_sqrt_terminates_on_huge_input() {
        let root = approx_sqrt(1e300);
        assert!((root - 1e150).abs() / 1e150 < 1e-9);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(normalize(DVec2::ZERO), DVec2::ZERO);
    }

    #[test]
    fn test_set_length() {
        let v = set_length(DVec2::new(3.0, 4.0), 10.0, 5.0);
        assert_eq!(v, DVec2::new(6.0, 8.0));
    }

    #[test]
    fn test_componentwise_ops() {
        let a = DVec2::new(1.0, -2.0);
        let b = DVec2::new(0.5, 4.0);
        assert_eq!(add(a, b), DVec2::new(1.5, 2.0));
        assert_eq!(subtract(a, b), DVec2::new(0.5, -6.0));
        assert_eq!(scale(a, -2.0), DVec2::new(-2.0, 4.0));
        assert_eq!(dot(a, b), -7.5);
    }

    #[test]
    fn test_reflect_off_vertical_wall() {
        // Moving right into a wall whose normal points right
        let reflected = reflect_off_normal(DVec2::new(3.0, 1.0), DVec2::new(1.0, 0.0));
        assert!((reflected.x + 3.0).abs() < 1e-12);
        assert!((reflected.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_disc_radially_outward() {
        let mut disc = Disc::new(DVec2::new(100.0, 50.0), 3.0, 0.25, None);
        disc.vel = DVec2::new(4.0, 0.0);
        // Wall center straight to the left: pure head-on bounce
        let v = reflect(&disc, DVec2::new(50.0, 50.0));
        assert!((v.x + 4.0).abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_sqrt_within_tolerance(n in 0.0f64..1.0e6) {
            let r = approx_sqrt(n);
            prop_assert!(r >= 0.0);
            prop_assert!(r * r - n < SQRT_TOLERANCE);
            // Converges from above
            prop_assert!(r + 1e-9 >= n.sqrt());
        }

        #[test]
        fn prop_normalize_unit_length(x in -1.0e3f64..1.0e3, y in -1.0e3f64..1.0e3) {
            // Below unit length the tolerance dominates the estimate
            prop_assume!(x * x + y * y >= 1.0);
            let n = normalize(DVec2::new(x, y));
            prop_assert!((n.length() - 1.0).abs() < 1e-3);
        }

        #[test]
        fn prop_reflection_keeps_speed_and_flips_normal(
            vx in -50.0f64..50.0,
            vy in -50.0f64..50.0,
            angle in 0.0f64..std::f64::consts::TAU,
        ) {
            let vel = DVec2::new(vx, vy);
            let normal = DVec2::new(angle.cos(), angle.sin());
            let out = reflect_off_normal(vel, normal);
            prop_assert!((out.length() - vel.length()).abs() < 1e-9);
            prop_assert!((dot(out, normal) + dot(vel, normal)).abs() < 1e-9);
        }
    }
}
