//! # ⚛️ bloch-core — Qubit na esfera de Bloch
//!
//! Modelo de estado de um qubit, biblioteca de portas e geometria da esfera
//! de Bloch usados pelo visualizador.
//!
//! ## Computational Complexity
//!
//! Tudo é O(1): matrizes 2x2 aplicadas a vetores de 2 amplitudes, conversões
//! trigonométricas e uma animação de N quadros (O(N), N = 128 por padrão).
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          BlochController                        │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Action → Transition (dispatch table)     │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QubitState (α, β) + (θ, φ)               │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Marker position + Rotation animation     │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use bloch_core::{BlochController, Gate, VisualizerConfig};
//!
//! let mut controller = BlochController::new(VisualizerConfig::default());
//! controller.apply_gate(Gate::Hadamard).unwrap();
//!
//! let angles = controller.state().angles();
//! assert!((angles.theta_degrees() - 90.0).abs() < 1e-6);
//! ```

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod gates;
pub mod labels;
pub mod sphere;
pub mod state;

pub use animation::{Animation, AnimationFrame, Rotation};
pub use config::VisualizerConfig;
pub use controller::{Action, BasisState, BlochController, Outcome, Snapshot};
pub use error::{BlochError, BlochResult};
pub use gates::{Gate, Matrix2x2, QuantumGate};
pub use labels::DataLabels;
pub use num_complex::Complex64;
pub use sphere::{
    angles_to_cartesian, cartesian_to_angles, ring_radius, CartesianPoint, RingGeometry,
    SphericalAngles,
};
pub use state::QubitState;
