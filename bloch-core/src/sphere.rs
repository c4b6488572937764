//! Geometria da esfera de Bloch
//!
//! Conversões entre ângulos esféricos (θ, φ) e coordenadas cartesianas, e a
//! geometria dos anéis que acompanham o marcador.
//!
//! Convenções:
//! - θ ∈ [0, π], medido a partir do eixo +z (|0⟩ no polo norte)
//! - φ ∈ [0, 2π), medido a partir do eixo +x, anti-horário

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;

/// Ponto (ou direção) em coordenadas cartesianas
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);
    pub const X_AXIS: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z_AXIS: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Módulo
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplicação por escalar
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Vetor unitário na mesma direção (o vetor nulo é devolvido inalterado)
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n < f64::EPSILON {
            *self
        } else {
            self.scale(1.0 / n)
        }
    }

    /// Distância euclidiana
    pub fn distance(&self, other: &Self) -> f64 {
        self.add(&other.scale(-1.0)).norm()
    }

    /// Ângulos esféricos deste ponto (ver [`cartesian_to_angles`])
    pub fn to_angles(&self) -> SphericalAngles {
        cartesian_to_angles(self.x, self.y, self.z)
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z)
    }
}

/// Par (θ, φ) em radianos
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalAngles {
    /// Ângulo polar, a partir de +z
    pub theta: f64,
    /// Ângulo azimutal, a partir de +x
    pub phi: f64,
}

impl SphericalAngles {
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Cria a partir de graus (valores dos sliders)
    pub fn from_degrees(theta_deg: f64, phi_deg: f64) -> Self {
        Self::new(theta_deg.to_radians(), phi_deg.to_radians())
    }

    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    pub fn phi_degrees(&self) -> f64 {
        self.phi.to_degrees()
    }

    /// θ em unidades de π
    pub fn theta_over_pi(&self) -> f64 {
        self.theta / PI
    }

    /// φ em unidades de π
    pub fn phi_over_pi(&self) -> f64 {
        self.phi / PI
    }

    /// Ponto correspondente na esfera de raio `radius`
    pub fn to_cartesian(&self, radius: f64) -> CartesianPoint {
        angles_to_cartesian(self.theta, self.phi, radius)
    }

    /// Polo (θ = 0 ou π), onde φ é indefinido
    pub fn is_pole(&self, tolerance: f64) -> bool {
        self.theta.abs() < tolerance || (self.theta - PI).abs() < tolerance
    }
}

/// x = cos φ sin θ, y = sin φ sin θ, z = cos θ, escalados por `radius`
pub fn angles_to_cartesian(theta: f64, phi: f64, radius: f64) -> CartesianPoint {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    CartesianPoint::new(
        radius * cos_phi * sin_theta,
        radius * sin_phi * sin_theta,
        radius * cos_theta,
    )
}

/// θ = atan2(√(x² + y²), z), φ = atan2(y, x) mod 2π
///
/// Independe do raio. θ usa a projeção completa no plano xy; `atan2(x, z)`
/// só vale para pontos no plano xz.
///
/// Nos polos φ é indefinido e vale 0: uma projeção xy abaixo de
/// [`POLE_TOLERANCE`] vezes o módulo é ruído de arredondamento.
pub fn cartesian_to_angles(x: f64, y: f64, z: f64) -> SphericalAngles {
    let rho = x.hypot(y);
    let theta = rho.atan2(z);
    let magnitude = rho.hypot(z);
    let phi = if rho <= POLE_TOLERANCE * magnitude {
        0.0
    } else {
        wrap_angle(y.atan2(x))
    };
    SphericalAngles::new(theta, phi)
}

/// Projeção xy relativa abaixo da qual o ponto é tratado como polo
pub const POLE_TOLERANCE: f64 = 1e-9;

/// Normaliza um ângulo para [0, 2π)
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid pode arredondar para exatamente 2π
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Raio de um anel perpendicular a um eixo, a uma distância `offset` do centro.
///
/// `radius² - offset²` é limitado a zero: erros de ponto flutuante podem
/// colocar o marcador ligeiramente fora da esfera.
pub fn ring_radius(radius: f64, offset: f64) -> f64 {
    (radius * radius - offset * offset).max(0.0).sqrt()
}

/// Anéis perpendiculares a x, y e z que passam pelo marcador
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    /// Posição dos centros ao longo de cada eixo
    pub centers: CartesianPoint,
    /// Raio de cada anel (x, y, z)
    pub radii: CartesianPoint,
}

impl RingGeometry {
    /// Calcula os anéis para o marcador em `position` numa esfera de raio `radius`
    pub fn through(position: &CartesianPoint, radius: f64) -> Self {
        Self {
            centers: *position,
            radii: CartesianPoint::new(
                ring_radius(radius, position.x),
                ring_radius(radius, position.y),
                ring_radius(radius, position.z),
            ),
        }
    }
}
