//! Geometry behind the hero parallax, the portrait tilt, and the particle fields.

/// Max parallax travel in px, end to end.
pub const PARALLAX_RANGE: f64 = 20.0;
const TILT_DEGREES: f64 = 10.0;
const TILT_SCALE: f64 = 1.02;
const TILT_BRIGHTNESS: f64 = 0.2;

/// Offset for background blobs, proportional to the pointer's distance from
/// the viewport center.
pub fn parallax_offset(pointer: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
    let (w, h) = viewport;
    if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (pointer.0 / w - 0.5) * PARALLAX_RANGE,
        (pointer.1 / h - 0.5) * PARALLAX_RANGE,
    )
}

pub fn translate(offset: (f64, f64), factor: f64) -> String {
    format!(
        "transform: translate({:.2}px, {:.2}px)",
        offset.0 * factor,
        offset.1 * factor
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// 3D tilt of the portrait card toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub brightness: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        brightness: 1.0,
    };

    pub fn from_pointer(pointer: (f64, f64), rect: Rect) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::NEUTRAL;
        }
        let x = (pointer.0 - rect.left) / rect.width - 0.5;
        let y = (pointer.1 - rect.top) / rect.height - 0.5;
        Self {
            rotate_x: -y * TILT_DEGREES,
            rotate_y: x * TILT_DEGREES,
            scale: TILT_SCALE,
            brightness: 1.0 + (x + y).abs() * TILT_BRIGHTNESS,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateY({:.2}deg) rotateX({:.2}deg) scale3d({s}, {s}, {s}); filter: brightness({:.3})",
            self.rotate_y,
            self.rotate_x,
            self.brightness,
            s = self.scale,
        )
    }
}

/// A decorative dot driven by a CSS keyframe loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

// splitmix64
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit(seed: u64, i: u64, lane: u64) -> f64 {
    (mix(seed ^ mix(i.wrapping_mul(4).wrapping_add(lane))) >> 11) as f64 / (1u64 << 53) as f64
}

/// Pseudo-random particle field. Same seed, same field, so the server render
/// and the hydrated page agree.
pub fn scatter(count: usize, seed: u64) -> Vec<Particle> {
    (0..count as u64)
        .map(|i| Particle {
            left_pct: unit(seed, i, 0) * 100.0,
            top_pct: unit(seed, i, 1) * 100.0,
            duration_s: 3.0 + unit(seed, i, 2) * 2.0,
            delay_s: unit(seed, i, 3) * 2.0,
        })
        .collect()
}

/// Diagonal trail of particles rising off the portrait.
pub fn trail(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            left_pct: 20.0 + i as f64 * 10.0,
            top_pct: 10.0 + i as f64 * 5.0,
            duration_s: 3.0,
            delay_s: i as f64 * 0.3,
        })
        .collect()
}

/// Evenly spaced burst directions around an orb, as (dx, dy) px.
pub fn orbit(count: usize, radius: f64) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            let angle = step * i as f64;
            (angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parallax_center_and_corners() {
        assert_eq!(parallax_offset((500.0, 400.0), (1000.0, 800.0)), (0.0, 0.0));
        assert_eq!(
            parallax_offset((0.0, 0.0), (1000.0, 800.0)),
            (-10.0, -10.0)
        );
        assert_eq!(
            parallax_offset((1000.0, 800.0), (1000.0, 800.0)),
            (10.0, 10.0)
        );
        assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0)), (0.0, 0.0));
        // window size before hydration
        assert_eq!(
            parallax_offset((10.0, 10.0), (f64::INFINITY, f64::INFINITY)),
            (0.0, 0.0)
        );
    }

    #[test]
    fn test_parallax_bounded_inside_viewport() {
        let viewport = (1000.0, 800.0);
        let half = PARALLAX_RANGE / 2.0;
        for x in [0.0, 250.0, 500.0, 999.0, 1000.0] {
            for y in [0.0, 1.0, 400.0, 800.0] {
                let (dx, dy) = parallax_offset((x, y), viewport);
                assert!(dx.abs() <= half, "x offset {dx} for ({x}, {y})");
                assert!(dy.abs() <= half, "y offset {dy} for ({x}, {y})");
            }
        }
        // center of a scrolled viewport is still the center in client coords
        assert_eq!(parallax_offset((500.0, 400.0), viewport), (0.0, 0.0));
    }

    #[test]
    fn test_translate_factor() {
        assert_eq!(
            translate((4.0, -2.0), -1.0),
            "transform: translate(-4.00px, 2.00px)"
        );
    }

    #[test]
    fn test_tilt() {
        let rect = Rect {
            left: 100.0,
            top: 100.0,
            width: 200.0,
            height: 200.0,
        };
        let center = Tilt::from_pointer((200.0, 200.0), rect);
        assert!(close(center.rotate_x, 0.0));
        assert!(close(center.rotate_y, 0.0));
        assert!(close(center.brightness, 1.0));
        assert_eq!(center.scale, 1.02);

        let corner = Tilt::from_pointer((300.0, 300.0), rect);
        assert!(close(corner.rotate_y, 5.0));
        assert!(close(corner.rotate_x, -5.0));
        assert!(close(corner.brightness, 1.2));

        let flat = Tilt::from_pointer((1.0, 1.0), Rect { width: 0.0, ..rect });
        assert_eq!(flat, Tilt::NEUTRAL);
        assert!(Tilt::NEUTRAL.style().contains("rotateY(0.00deg)"));
    }

    #[test]
    fn test_scatter_deterministic_and_bounded() {
        let a = scatter(25, 7);
        let b = scatter(25, 7);
        assert_eq!(a, b);
        assert_ne!(a, scatter(25, 8));
        for p in &a {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((3.0..5.0).contains(&p.duration_s));
            assert!((0.0..2.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn test_trail() {
        let t = trail(8);
        assert_eq!(t.len(), 8);
        assert_eq!(t[0].left_pct, 20.0);
        assert_eq!(t[7].top_pct, 45.0);
        assert!(close(t[3].delay_s, 0.9));
    }

    #[test]
    fn test_orbit() {
        let dirs = orbit(4, 40.0);
        assert_eq!(dirs.len(), 4);
        assert!(close(dirs[0].0, 40.0));
        assert!(close(dirs[1].1, 40.0));
        assert!(close(dirs[2].0, -40.0));
        assert!(orbit(0, 40.0).is_empty());
    }
}
