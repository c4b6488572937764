//! # Gate Library — Portas Quânticas de um qubit
//!
//! Conjunto fixo de matrizes unitárias 2x2 usadas pelo painel de controle.
//!
//! ## Gates Implementadas
//!
//! - **Identidade**: I
//! - **Hadamard**: H
//! - **Pauli**: X, Y, Z
//! - **Fase**: S (√Z), T (π/8)
//! - **√NOT**: sN
//!
//! Cada porta também conhece sua rotação equivalente na esfera de Bloch,
//! usada pela animação.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;

use crate::animation::Rotation;
use crate::error::{BlochError, BlochResult};
use crate::labels::format_complex;
use crate::sphere::CartesianPoint;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const MINUS_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const MINUS_I: Complex64 = Complex64::new(0.0, -1.0);
const H: Complex64 = Complex64::new(FRAC_1_SQRT_2, 0.0);
const MINUS_H: Complex64 = Complex64::new(-FRAC_1_SQRT_2, 0.0);
/// e^(iπ/4)
const EIGHTH_TURN: Complex64 = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

/// Tolerância usada na verificação de unitariedade
const UNITARY_TOLERANCE: f64 = 1e-10;

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz a partir das linhas
    pub const fn new(elements: [[Complex64; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Matriz identidade
    pub const fn identity() -> Self {
        Self::new([[ONE, ZERO], [ZERO, ONE]])
    }

    /// Aplica a matriz a um estado [alpha, beta]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes (`self * other`)
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2::new([[a.conj(), c.conj()], [b.conj(), d.conj()]])
    }

    /// Verifica se U·U† = I dentro da tolerância
    pub fn is_unitary(&self) -> bool {
        let [[a, b], [c, d]] = self.mul(&self.dagger()).elements;
        (a - ONE).norm_sqr() < UNITARY_TOLERANCE
            && b.norm_sqr() < UNITARY_TOLERANCE
            && c.norm_sqr() < UNITARY_TOLERANCE
            && (d - ONE).norm_sqr() < UNITARY_TOLERANCE
    }

    /// Compara elemento a elemento
    pub fn approx_eq(&self, other: &Matrix2x2, tolerance: f64) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(x, y)| (x - y).norm() < tolerance)
    }
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:>16} {:>16}]",
                format_complex(row[0], precision),
                format_complex(row[1], precision)
            )?;
        }
        Ok(())
    }
}

/// Qualquer coisa que possa transformar a amplitude de um qubit
pub trait QuantumGate {
    /// Nome da porta
    fn name(&self) -> &str;

    /// Matriz da porta
    fn matrix(&self) -> Matrix2x2;

    /// Aplica a um estado
    fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        self.matrix().apply(state)
    }
}

impl QuantumGate for Matrix2x2 {
    fn name(&self) -> &str {
        "U"
    }

    fn matrix(&self) -> Matrix2x2 {
        *self
    }
}

// =============================================================================
// Portas do painel
// =============================================================================

/// Portas disponíveis no painel de controle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gate {
    Identity,
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    /// S (√Z)
    Phase,
    /// T (π/8)
    PiOverEight,
    /// √NOT
    SqrtNot,
}

impl Gate {
    /// Todas as portas, na ordem do painel
    pub const ALL: [Gate; 8] = [
        Gate::Identity,
        Gate::Hadamard,
        Gate::PauliX,
        Gate::PauliY,
        Gate::PauliZ,
        Gate::Phase,
        Gate::PiOverEight,
        Gate::SqrtNot,
    ];

    /// Rótulo curto (o texto do botão)
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Identity => "I",
            Self::Hadamard => "H",
            Self::PauliX => "X",
            Self::PauliY => "Y",
            Self::PauliZ => "Z",
            Self::Phase => "S",
            Self::PiOverEight => "T",
            Self::SqrtNot => "sN",
        }
    }

    /// Nome descritivo
    pub fn long_name(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Hadamard => "Hadamard",
            Self::PauliX => "Pauli-X",
            Self::PauliY => "Pauli-Y",
            Self::PauliZ => "Pauli-Z",
            Self::Phase => "Phase",
            Self::PiOverEight => "Pi/8",
            Self::SqrtNot => "Sqrt(Not)",
        }
    }

    /// Matriz constante da porta
    pub const fn unitary(&self) -> Matrix2x2 {
        match self {
            Self::Identity => Matrix2x2::identity(),
            Self::Hadamard => Matrix2x2::new([[H, H], [H, MINUS_H]]),
            Self::PauliX => Matrix2x2::new([[ZERO, ONE], [ONE, ZERO]]),
            Self::PauliY => Matrix2x2::new([[ZERO, MINUS_I], [I, ZERO]]),
            Self::PauliZ => Matrix2x2::new([[ONE, ZERO], [ZERO, MINUS_ONE]]),
            Self::Phase => Matrix2x2::new([[ONE, ZERO], [ZERO, I]]),
            Self::PiOverEight => Matrix2x2::new([[ONE, ZERO], [ZERO, EIGHTH_TURN]]),
            Self::SqrtNot => Matrix2x2::new([[H, MINUS_H], [H, H]]),
        }
    }

    /// Rotação equivalente na esfera de Bloch (anti-horária, regra da mão direita).
    ///
    /// A identidade não move o marcador e devolve `None`.
    pub fn rotation(&self) -> Option<Rotation> {
        let (axis, angle) = match self {
            Self::Identity => return None,
            Self::Hadamard => (CartesianPoint::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2), PI),
            Self::PauliX => (CartesianPoint::X_AXIS, PI),
            Self::PauliY => (CartesianPoint::Y_AXIS, PI),
            Self::PauliZ => (CartesianPoint::Z_AXIS, PI),
            Self::Phase => (CartesianPoint::Z_AXIS, FRAC_PI_2),
            Self::PiOverEight => (CartesianPoint::Z_AXIS, FRAC_PI_4),
            // √NOT = Ry(π/2)
            Self::SqrtNot => (CartesianPoint::Y_AXIS, FRAC_PI_2),
        };
        Some(Rotation::new(axis, angle))
    }
}

impl QuantumGate for Gate {
    fn name(&self) -> &str {
        self.symbol()
    }

    fn matrix(&self) -> Matrix2x2 {
        self.unitary()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Gate {
    type Err = BlochError;

    fn from_str(s: &str) -> BlochResult<Self> {
        let gate = match s.trim().to_ascii_lowercase().as_str() {
            "i" | "id" | "identity" => Self::Identity,
            "h" | "hadamard" => Self::Hadamard,
            "x" | "pauli-x" | "paulix" | "not" => Self::PauliX,
            "y" | "pauli-y" | "pauliy" => Self::PauliY,
            "z" | "pauli-z" | "pauliz" => Self::PauliZ,
            "s" | "phase" => Self::Phase,
            "t" | "pi/8" | "pi8" => Self::PiOverEight,
            "sn" | "snot" | "sqrtnot" | "sqrt-not" | "sqrt(not)" => Self::SqrtNot,
            _ => return Err(BlochError::UnknownGate(s.trim().to_string())),
        };
        Ok(gate)
    }
}

// =============================================================================
// Testes
// =============================================================================
