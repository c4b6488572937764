//! Estado do qubit
//!
//! Guarda as amplitudes (α, β) de |0⟩ e |1⟩ e o par (θ, φ) derivado da
//! posição do marcador. Nenhuma renormalização é feita: a norma só é
//! preservada aproximadamente ao longo de muitas portas.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::gates::QuantumGate;
use crate::sphere::{self, CartesianPoint, SphericalAngles};

/// Estado de um qubit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    /// [α, β]
    amplitudes: [Complex64; 2],
    /// Posição polar exibida
    angles: SphericalAngles,
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl QubitState {
    /// |0⟩
    pub fn zero() -> Self {
        Self::from_amplitudes(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0))
    }

    /// |1⟩
    pub fn one() -> Self {
        Self::from_amplitudes(Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0))
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::from_amplitudes(h, h)
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::from_amplitudes(h, -h)
    }

    /// Cria estado com ângulos coerentes com as amplitudes
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Self {
        let mut state = Self {
            amplitudes: [alpha, beta],
            angles: SphericalAngles::default(),
        };
        state.sync_angles();
        state
    }

    /// cos(θ/2)|0⟩ + e^(iφ) sin(θ/2)|1⟩, o estado na posição (θ, φ)
    pub fn from_angles(angles: SphericalAngles) -> Self {
        let (sin_half, cos_half) = (angles.theta / 2.0).sin_cos();
        Self {
            amplitudes: [
                Complex64::new(cos_half, 0.0),
                Complex64::from_polar(sin_half, angles.phi),
            ],
            angles,
        }
    }

    /// Substitui as amplitudes por `gate · amplitudes`.
    ///
    /// A unitariedade de `gate` não é verificada.
    pub fn apply_gate<G: QuantumGate + ?Sized>(&mut self, gate: &G) {
        self.amplitudes = gate.apply(self.amplitudes);
    }

    /// Atribuição direta, sem transformação unitária
    pub fn set_amplitudes(&mut self, alpha: Complex64, beta: Complex64) {
        self.amplitudes = [alpha, beta];
    }

    /// Recalcula (θ, φ) a partir da posição do marcador.
    ///
    /// A escala do ponto é irrelevante.
    pub fn set_angles_from_cartesian(&mut self, x: f64, y: f64, z: f64) {
        self.angles = sphere::cartesian_to_angles(x, y, z);
    }

    /// Define (θ, φ) diretamente
    pub fn set_vector(&mut self, theta: f64, phi: f64) {
        self.angles = SphericalAngles::new(theta, sphere::wrap_angle(phi));
    }

    /// Ajusta (θ, φ) para a posição implicada pelas amplitudes
    pub fn sync_angles(&mut self) {
        let p = self.bloch_point();
        self.set_angles_from_cartesian(p.x, p.y, p.z);
    }

    /// [α, β]
    pub fn amplitudes(&self) -> [Complex64; 2] {
        self.amplitudes
    }

    pub fn alpha(&self) -> Complex64 {
        self.amplitudes[0]
    }

    pub fn beta(&self) -> Complex64 {
        self.amplitudes[1]
    }

    /// Ângulos exibidos
    pub fn angles(&self) -> SphericalAngles {
        self.angles
    }

    /// (|α|², |β|²)
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha().norm_sqr(), self.beta().norm_sqr())
    }

    /// |α|² + |β|²
    pub fn norm_sqr(&self) -> f64 {
        let (p0, p1) = self.probabilities();
        p0 + p1
    }

    /// Vetor de Bloch unitário implicado pelas amplitudes.
    ///
    /// x = 2 Re(α*β), y = 2 Im(α*β), z = |α|² − |β|²; a fase global não
    /// altera o resultado.
    pub fn bloch_point(&self) -> CartesianPoint {
        let [alpha, beta] = self.amplitudes;
        let cross = alpha.conj() * beta;
        CartesianPoint::new(
            2.0 * cross.re,
            2.0 * cross.im,
            alpha.norm_sqr() - beta.norm_sqr(),
        )
    }

    /// Posição do marcador numa esfera de raio `radius`
    pub fn position(&self, radius: f64) -> CartesianPoint {
        self.angles.to_cartesian(radius)
    }

    /// Igualdade elemento a elemento
    pub fn approx_eq(&self, other: &QubitState, tolerance: f64) -> bool {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .all(|(a, b)| (a - b).norm() < tolerance)
    }

    /// Igualdade a menos de fase global: |⟨self|other⟩| ≈ 1
    pub fn same_ray(&self, other: &QubitState, tolerance: f64) -> bool {
        let inner = self.alpha().conj() * other.alpha() + self.beta().conj() * other.beta();
        (inner.norm() - 1.0).abs() < tolerance
    }
}
