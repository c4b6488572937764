//! Texto dos rótulos de dados
//!
//! Os quatro blocos exibidos abaixo dos controles: amplitudes,
//! probabilidades, θ e φ.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sphere::wrap_angle;
use crate::state::QubitState;

/// Arredonda para `precision` casas decimais
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    let rounded = (value * factor).round() / factor;
    // sem "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Número arredondado, sem zeros à direita (`0.707`, `1`, `-0.5`)
pub fn format_number(value: f64, precision: usize) -> String {
    format!("{}", round_to(value, precision))
}

/// `a+bi` / `a-bi`
pub fn format_complex(c: Complex64, precision: usize) -> String {
    let re = round_to(c.re, precision);
    let im = round_to(c.im, precision);
    let sign = if im < 0.0 { '-' } else { '+' };
    format!("{}{}{}i", re, sign, im.abs())
}

/// Os quatro blocos de texto
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLabels {
    pub amplitudes: String,
    pub probabilities: String,
    pub theta: String,
    pub phi: String,
}

impl DataLabels {
    /// Monta os rótulos para o estado atual
    pub fn new(state: &QubitState, precision: usize) -> Self {
        let (p0, p1) = state.probabilities();
        let angles = state.angles();

        let amplitudes = format!(
            "Alpha:   ({})\nBeta: ({})",
            format_complex(state.alpha(), precision),
            format_complex(state.beta(), precision)
        );
        let probabilities = format!(
            "Alpha^2: ({})\nBeta^2: ({})",
            format_number(p0, precision),
            format_number(p1, precision)
        );
        let theta = format!(
            "Theta: {}\nTheta/Pi: {}\nTheta(Deg): {}",
            format_number(angles.theta, precision),
            format_number(angles.theta_over_pi(), precision),
            format_number(angles.theta_degrees(), 0)
        );
        let phi_deg = round_to(wrap_angle(angles.phi).to_degrees(), 0) % 360.0;
        let phi = format!(
            "Phi: {}\nPhi/Pi: {}\nPhi(Deg): {}",
            format_number(angles.phi, precision),
            format_number(angles.phi_over_pi(), precision),
            format_number(phi_deg, 0)
        );

        Self {
            amplitudes,
            probabilities,
            theta,
            phi,
        }
    }
}

impl fmt::Display for DataLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\n{}\n\n{}\n\n{}",
            self.amplitudes, self.probabilities, self.theta, self.phi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::SphericalAngles;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(FRAC_1_SQRT_2, 3), 0.707);
        assert_eq!(round_to(-1e-9, 3), 0.0);
        assert!(round_to(-1e-9, 3).is_sign_positive());
        assert_eq!(round_to(179.6, 0), 180.0);
    }

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(Complex64::new(1.0, 0.0), 3), "1+0i");
        assert_eq!(format_complex(Complex64::new(0.0, -1.0), 3), "0-1i");
        assert_eq!(
            format_complex(Complex64::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2), 3),
            "-0.707+0.707i"
        );
        assert_eq!(format_complex(Complex64::new(-1e-17, -1e-17), 3), "0+0i");
    }

    #[test]
    fn test_labels_for_zero() {
        let labels = DataLabels::new(&QubitState::zero(), 3);
        assert_eq!(labels.amplitudes, "Alpha:   (1+0i)\nBeta: (0+0i)");
        assert_eq!(labels.probabilities, "Alpha^2: (1)\nBeta^2: (0)");
        assert_eq!(labels.theta, "Theta: 0\nTheta/Pi: 0\nTheta(Deg): 0");
        assert_eq!(labels.phi, "Phi: 0\nPhi/Pi: 0\nPhi(Deg): 0");
    }

    #[test]
    fn test_labels_for_minus() {
        let labels = DataLabels::new(&QubitState::minus(), 3);
        assert!(labels.amplitudes.contains("Beta: (-0.707+0i)"));
        assert!(labels.probabilities.contains("Alpha^2: (0.5)"));
        assert!(labels.theta.contains("Theta/Pi: 0.5"));
        assert!(labels.theta.contains("Theta(Deg): 90"));
        assert!(labels.phi.contains("Phi/Pi: 1"));
        assert!(labels.phi.contains("Phi(Deg): 180"));
    }

    #[test]
    fn test_phi_degrees_wrap_to_zero() {
        let state = QubitState::from_angles(SphericalAngles::new(PI / 2.0, 2.0 * PI - 1e-4));
        let labels = DataLabels::new(&state, 3);
        assert!(labels.phi.ends_with("Phi(Deg): 0"));
    }

    #[test]
    fn test_display_has_four_blocks() {
        let text = DataLabels::new(&QubitState::plus(), 2).to_string();
        assert_eq!(text.split("\n\n").count(), 4);
    }
}
