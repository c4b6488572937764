//! Controlador do visualizador
//!
//! Dono único do [`QubitState`] e da posição do marcador. Cada ação do
//! painel (botão de porta, atalho de estado, slider) é despachada por uma
//! tabela para uma função de transição; o front-end só lê o resultado.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::animation::{Animation, Rotation};
use crate::config::VisualizerConfig;
use crate::error::{BlochError, BlochResult};
use crate::gates::Gate;
use crate::labels::DataLabels;
use crate::sphere::{CartesianPoint, RingGeometry, SphericalAngles};
use crate::state::QubitState;

/// Valor máximo do slider de θ, em graus
pub const THETA_SLIDER_MAX: i64 = 179;
/// Valor máximo do slider de φ, em graus
pub const PHI_SLIDER_MAX: i64 = 359;

/// Atalhos de estado do painel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasisState {
    /// |0⟩
    Zero,
    /// |1⟩
    One,
    /// |+⟩ = H|0⟩
    Plus,
    /// |−⟩ = H|1⟩
    Minus,
}

impl BasisState {
    pub fn ket(&self) -> &'static str {
        match self {
            Self::Zero => "|0>",
            Self::One => "|1>",
            Self::Plus => "|+>",
            Self::Minus => "|->",
        }
    }
}

/// Ação do usuário
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Botão de porta
    Gate(Gate),
    /// Atalho |0⟩, |1⟩, |+⟩, |−⟩
    Basis(BasisState),
    /// Slider de θ, em graus
    SetTheta(i64),
    /// Slider de φ, em graus
    SetPhi(i64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gate(gate) => write!(f, "{gate}"),
            Self::Basis(basis) => write!(f, "{}", basis.ket()),
            Self::SetTheta(deg) => write!(f, "theta={deg}"),
            Self::SetPhi(deg) => write!(f, "phi={deg}"),
        }
    }
}

fn parse_slider(slider: &'static str, raw: &str, max: i64) -> BlochResult<i64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| BlochError::InvalidAction(format!("{slider}={raw}")))?;
    check_slider(slider, value, max)
}

fn check_slider(slider: &'static str, value: i64, max: i64) -> BlochResult<i64> {
    if (0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(BlochError::SliderOutOfRange { slider, value, max })
    }
}

impl FromStr for Action {
    type Err = BlochError;

    fn from_str(s: &str) -> BlochResult<Self> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        if let Some((key, value)) = lower.split_once('=') {
            return match key.trim() {
                "theta" => Ok(Self::SetTheta(parse_slider("theta", value, THETA_SLIDER_MAX)?)),
                "phi" => Ok(Self::SetPhi(parse_slider("phi", value, PHI_SLIDER_MAX)?)),
                _ => Err(BlochError::InvalidAction(s.to_string())),
            };
        }

        let basis = match lower.as_str() {
            "zero" | "|0>" | "0" | "reset" => Some(BasisState::Zero),
            "one" | "|1>" | "1" => Some(BasisState::One),
            "plus" | "|+>" | "+" => Some(BasisState::Plus),
            "minus" | "|->" | "-" => Some(BasisState::Minus),
            _ => None,
        };
        if let Some(basis) = basis {
            return Ok(Self::Basis(basis));
        }

        s.parse::<Gate>()
            .map(Self::Gate)
            .map_err(|_| BlochError::InvalidAction(s.to_string()))
    }
}

/// Função de transição associada a uma ação
type Transition = fn(&mut BlochController, &Action) -> BlochResult<Option<Motion>>;

/// Rotação a animar, com o ponto de partida
#[derive(Clone, Copy, Debug, PartialEq)]
struct Motion {
    rotation: Rotation,
    start: CartesianPoint,
}

/// Tabela de despacho: ação → transição
fn transition_for(action: &Action) -> Transition {
    match action {
        Action::Gate(_) => BlochController::gate_transition,
        Action::Basis(_) => BlochController::basis_transition,
        Action::SetTheta(_) | Action::SetPhi(_) => BlochController::slider_transition,
    }
}

/// Resultado de uma ação despachada
#[derive(Clone, Debug)]
pub struct Outcome {
    pub action: Action,
    /// Quadros da rotação, quando a ação tem equivalente geométrico
    pub animation: Option<Animation>,
}

/// Estado completo para exibição ou serialização
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub alpha: Complex64,
    pub beta: Complex64,
    pub probabilities: (f64, f64),
    pub angles: SphericalAngles,
    pub theta_degrees: f64,
    pub phi_degrees: f64,
    pub position: CartesianPoint,
    pub rings: RingGeometry,
}

/// Controlador: estado do qubit + posição do marcador
#[derive(Clone, Debug)]
pub struct BlochController {
    state: QubitState,
    /// Posição do marcador, escalada pelo raio
    position: CartesianPoint,
    config: VisualizerConfig,
}

impl Default for BlochController {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl BlochController {
    /// Começa em |0⟩
    pub fn new(config: VisualizerConfig) -> Self {
        let state = QubitState::zero();
        Self {
            position: state.position(config.radius),
            state,
            config,
        }
    }

    pub fn state(&self) -> &QubitState {
        &self.state
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Posição do marcador
    pub fn position(&self) -> CartesianPoint {
        self.position
    }

    /// Anéis que passam pelo marcador
    pub fn rings(&self) -> RingGeometry {
        RingGeometry::through(&self.position, self.config.radius)
    }

    pub fn labels(&self) -> DataLabels {
        DataLabels::new(&self.state, self.config.precision)
    }

    pub fn snapshot(&self) -> Snapshot {
        let angles = self.state.angles();
        Snapshot {
            alpha: self.state.alpha(),
            beta: self.state.beta(),
            probabilities: self.state.probabilities(),
            angles,
            theta_degrees: angles.theta_degrees(),
            phi_degrees: angles.phi_degrees(),
            position: self.position,
            rings: self.rings(),
        }
    }

    /// Volta para |0⟩ sem animação
    pub fn reset(&mut self) {
        self.state = QubitState::zero();
        self.move_marker(self.state.position(self.config.radius));
    }

    /// Despacha uma ação pela tabela de transições
    pub fn dispatch(&mut self, action: Action) -> BlochResult<Outcome> {
        tracing::debug!(action = %action, "dispatch");

        let motion = transition_for(&action)(self, &action)?;
        let animation = motion.map(|m| {
            m.rotation
                .frames(m.start, self.config.animation_frames, self.config.radius)
        });

        tracing::debug!(
            theta = self.state.angles().theta,
            phi = self.state.angles().phi,
            norm = self.state.norm_sqr(),
            "state updated"
        );

        Ok(Outcome { action, animation })
    }

    /// Parse + despacho
    pub fn dispatch_str(&mut self, input: &str) -> BlochResult<Outcome> {
        self.dispatch(input.parse()?)
    }

    /// Atalho para aplicar uma porta
    pub fn apply_gate(&mut self, gate: Gate) -> BlochResult<Outcome> {
        self.dispatch(Action::Gate(gate))
    }

    fn move_marker(&mut self, position: CartesianPoint) {
        self.position = position;
        self.state
            .set_angles_from_cartesian(position.x, position.y, position.z);
    }

    /// Aplica a matriz e gira o marcador pela rotação equivalente
    fn rotate_by(&mut self, gate: Gate) -> Option<Motion> {
        self.state.apply_gate(&gate);

        let rotation = gate.rotation()?;
        let start = self.position;
        self.move_marker(rotation.apply(&start));
        Some(Motion { rotation, start })
    }

    fn gate_transition(&mut self, action: &Action) -> BlochResult<Option<Motion>> {
        match action {
            Action::Gate(gate) => Ok(self.rotate_by(*gate)),
            _ => Err(BlochError::InvalidAction(action.to_string())),
        }
    }

    fn basis_transition(&mut self, action: &Action) -> BlochResult<Option<Motion>> {
        let Action::Basis(basis) = action else {
            return Err(BlochError::InvalidAction(action.to_string()));
        };

        let base = match basis {
            BasisState::Zero | BasisState::Plus => QubitState::zero(),
            BasisState::One | BasisState::Minus => QubitState::one(),
        };
        self.state.set_amplitudes(base.alpha(), base.beta());
        self.move_marker(base.position(self.config.radius));

        match basis {
            BasisState::Plus | BasisState::Minus => Ok(self.rotate_by(Gate::Hadamard)),
            BasisState::Zero | BasisState::One => Ok(None),
        }
    }

    /// Posiciona o marcador direto nos ângulos do slider; as amplitudes
    /// passam a ser as do estado naquela posição.
    fn slider_transition(&mut self, action: &Action) -> BlochResult<Option<Motion>> {
        let current = self.state.angles();
        let angles = match *action {
            Action::SetTheta(deg) => {
                let deg = check_slider("theta", deg, THETA_SLIDER_MAX)?;
                SphericalAngles::new((deg as f64).to_radians(), current.phi)
            }
            Action::SetPhi(deg) => {
                let deg = check_slider("phi", deg, PHI_SLIDER_MAX)?;
                SphericalAngles::new(current.theta, (deg as f64).to_radians())
            }
            _ => return Err(BlochError::InvalidAction(action.to_string())),
        };

        self.state = QubitState::from_angles(angles);
        self.position = angles.to_cartesian(self.config.radius);
        Ok(None)
    }
}
