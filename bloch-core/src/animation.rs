//! Animação de portas como rotações na esfera
//!
//! Uma porta com equivalente geométrico é desenhada como N incrementos iguais
//! de uma rotação fixa (eixo, ângulo). Cada quadro é calculado a partir do
//! ponto inicial e da fração concluída, então o último quadro coincide com a
//! rotação completa aplicada de uma vez.

use serde::{Deserialize, Serialize};

use crate::sphere::{CartesianPoint, RingGeometry, SphericalAngles};

/// Rotação anti-horária de `angle` radianos em torno de `axis`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Eixo unitário
    pub axis: CartesianPoint,
    /// Ângulo total em radianos
    pub angle: f64,
}

impl Rotation {
    /// Cria rotação; o eixo é normalizado
    pub fn new(axis: CartesianPoint, angle: f64) -> Self {
        Self {
            axis: axis.normalized(),
            angle,
        }
    }

    /// Ângulo de cada um dos `steps` incrementos
    pub fn step_angle(&self, steps: usize) -> f64 {
        self.angle / steps.max(1) as f64
    }

    /// Rotaciona `point` pelo ângulo completo
    pub fn apply(&self, point: &CartesianPoint) -> CartesianPoint {
        rotate(point, &self.axis, self.angle)
    }

    /// Posição após a fração `fraction` (0.0..=1.0) da rotação
    pub fn interpolate(&self, start: &CartesianPoint, fraction: f64) -> CartesianPoint {
        rotate(start, &self.axis, self.angle * fraction.clamp(0.0, 1.0))
    }

    /// Ângulos exibidos após a fração `fraction` da rotação
    pub fn interpolate_angles(&self, start: &CartesianPoint, fraction: f64) -> SphericalAngles {
        self.interpolate(start, fraction).to_angles()
    }

    /// Quadros da animação a partir de `start`
    pub fn frames(&self, start: CartesianPoint, steps: usize, radius: f64) -> Animation {
        Animation {
            rotation: *self,
            start,
            radius,
            steps: steps.max(1),
            next: 1,
        }
    }
}

/// Fórmula de Rodrigues: v cos a + (k × v) sin a + k (k · v)(1 - cos a)
pub fn rotate(point: &CartesianPoint, axis: &CartesianPoint, angle: f64) -> CartesianPoint {
    let (sin_a, cos_a) = angle.sin_cos();
    let k_dot_v = axis.dot(point);

    point
        .scale(cos_a)
        .add(&axis.cross(point).scale(sin_a))
        .add(&axis.scale(k_dot_v * (1.0 - cos_a)))
}

/// Um quadro da animação
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Índice do quadro (1..=steps)
    pub index: usize,
    /// Fração concluída
    pub fraction: f64,
    /// Posição do marcador
    pub position: CartesianPoint,
    /// Ângulos exibidos
    pub angles: SphericalAngles,
    /// Anéis que passam pelo marcador
    pub rings: RingGeometry,
}

/// Iterador sobre os quadros de uma rotação
#[derive(Clone, Debug)]
pub struct Animation {
    rotation: Rotation,
    start: CartesianPoint,
    radius: f64,
    steps: usize,
    next: usize,
}

impl Animation {
    /// Número total de quadros
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Posição final (rotação completa aplicada ao início)
    pub fn final_position(&self) -> CartesianPoint {
        self.rotation.apply(&self.start)
    }
}

impl Iterator for Animation {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }

        let index = self.next;
        self.next += 1;

        let fraction = index as f64 / self.steps as f64;
        let position = self.rotation.interpolate(&self.start, fraction);

        tracing::trace!(index, fraction, "animation frame");

        Some(AnimationFrame {
            index,
            fraction,
            position,
            angles: position.to_angles(),
            rings: RingGeometry::through(&position, self.radius),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Animation {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    fn assert_close(a: &CartesianPoint, b: &CartesianPoint) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_rotate_z_about_x() {
        // +z girado π/2 em torno de +x vai para -y
        let p = rotate(&CartesianPoint::Z_AXIS, &CartesianPoint::X_AXIS, FRAC_PI_2);
        assert_close(&p, &CartesianPoint::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_hadamard_axis_swaps_z_and_x() {
        let rot = Rotation::new(CartesianPoint::new(1.0, 0.0, 1.0), PI);
        assert!((rot.axis.x - FRAC_1_SQRT_2).abs() < 1e-12);
        assert_close(&rot.apply(&CartesianPoint::Z_AXIS), &CartesianPoint::X_AXIS);
    }

    #[test]
    fn test_final_frame_matches_direct_rotation() {
        let rot = Rotation::new(CartesianPoint::Y_AXIS, FRAC_PI_2);
        let start = CartesianPoint::new(0.0, 0.0, 100.0);
        let anim = rot.frames(start, 128, 100.0);
        let expected = anim.final_position();

        let frames: Vec<_> = anim.collect();
        assert_eq!(frames.len(), 128);
        let last = frames.last().unwrap();
        assert_eq!(last.index, 128);
        assert!((last.fraction - 1.0).abs() < 1e-12);
        assert_close(&last.position, &expected);
        assert_close(&expected, &CartesianPoint::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_frames_advance_by_equal_steps() {
        let rot = Rotation::new(CartesianPoint::Z_AXIS, PI);
        let start = CartesianPoint::X_AXIS;
        let step = rot.step_angle(4);
        assert!((step - PI / 4.0).abs() < 1e-12);

        for frame in rot.frames(start, 4, 1.0) {
            let expected = frame.index as f64 * step;
            assert!((frame.angles.phi - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_steps_is_single_frame() {
        let rot = Rotation::new(CartesianPoint::X_AXIS, PI);
        let anim = rot.frames(CartesianPoint::Z_AXIS, 0, 1.0);
        assert_eq!(anim.len(), 1);
    }

    #[test]
    fn test_interpolate_clamps_fraction() {
        let rot = Rotation::new(CartesianPoint::X_AXIS, PI);
        let start = CartesianPoint::Z_AXIS;
        assert_close(&rot.interpolate(&start, 2.0), &rot.apply(&start));
        assert_close(&rot.interpolate(&start, -1.0), &start);

        let half = rot.interpolate_angles(&start, 0.5);
        assert!((half.theta - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_rings_follow_marker() {
        let rot = Rotation::new(CartesianPoint::X_AXIS, PI);
        let last = rot
            .frames(CartesianPoint::new(0.0, 0.0, 100.0), 8, 100.0)
            .last()
            .unwrap();
        assert!((last.rings.centers.z + 100.0).abs() < 1e-9);
        assert!(last.rings.radii.z.abs() < 1e-3);
    }
}
