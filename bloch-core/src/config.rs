//! Configuração do visualizador
//!
//! Valores carregados de um arquivo TOML (`bloch.toml`) e sobrescritos por
//! variáveis de ambiente, lidas de `.env` quando presente.
//!
//! ## Variáveis de ambiente
//! - `BLOCH_RADIUS`: raio da esfera (padrão: 100.0)
//! - `BLOCH_ANIMATION_FRAMES`: quadros por porta (padrão: 128)
//! - `BLOCH_FRAME_RATE`: quadros por segundo, 0 desativa a espera (padrão: 128)
//! - `BLOCH_PRECISION`: casas decimais dos rótulos (padrão: 3)

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::{BlochError, BlochResult};

// Carrega .env uma única vez
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Nome padrão do arquivo de configuração
pub const CONFIG_FILE: &str = "bloch.toml";

/// Configuração do visualizador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Raio da esfera de Bloch
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Quadros por animação de porta
    #[serde(default = "default_animation_frames")]
    pub animation_frames: usize,

    /// Quadros por segundo da animação (0 = sem espera)
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// Casas decimais nos rótulos
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            animation_frames: default_animation_frames(),
            frame_rate: default_frame_rate(),
            precision: default_precision(),
        }
    }
}

fn default_radius() -> f64 {
    100.0
}

fn default_animation_frames() -> usize {
    128
}

fn default_frame_rate() -> u32 {
    128
}

fn default_precision() -> usize {
    3
}

impl VisualizerConfig {
    /// Parse de uma string TOML
    pub fn from_toml(content: &str) -> BlochResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Carrega de um arquivo
    pub fn from_file(path: &Path) -> BlochResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Arquivo opcional + variáveis de ambiente
    pub fn load(path: Option<&Path>) -> BlochResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Sobrescreve com as variáveis `BLOCH_*`
    pub fn apply_env(&mut self) {
        ensure_loaded();
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Sobrescreve com os valores devolvidos por `lookup`.
    ///
    /// Valores que não fazem parse são ignorados.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BLOCH_RADIUS").and_then(|v| v.parse().ok()) {
            self.radius = v;
        }
        if let Some(v) = lookup("BLOCH_ANIMATION_FRAMES").and_then(|v| v.parse().ok()) {
            self.animation_frames = v;
        }
        if let Some(v) = lookup("BLOCH_FRAME_RATE").and_then(|v| v.parse().ok()) {
            self.frame_rate = v;
        }
        if let Some(v) = lookup("BLOCH_PRECISION").and_then(|v| v.parse().ok()) {
            self.precision = v;
        }
    }

    /// Rejeita raio não positivo e animação sem quadros
    pub fn validate(&self) -> BlochResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BlochError::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if self.animation_frames == 0 {
            return Err(BlochError::InvalidConfig(
                "animation_frames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Intervalo entre quadros, `None` quando a animação não espera
    pub fn frame_interval(&self) -> Option<Duration> {
        (self.frame_rate > 0).then(|| Duration::from_secs_f64(1.0 / self.frame_rate as f64))
    }

    /// Serializa para TOML
    pub fn to_toml(&self) -> BlochResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BlochError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = VisualizerConfig::default();
        assert_eq!(config.radius, 100.0);
        assert_eq!(config.animation_frames, 128);
        assert_eq!(config.frame_rate, 128);
        assert_eq!(config.precision, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = VisualizerConfig::from_toml("radius = 2.5\nframe_rate = 0\n").unwrap();
        assert_eq!(config.radius, 2.5);
        assert_eq!(config.animation_frames, 128);
        assert!(config.frame_interval().is_none());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(matches!(
            VisualizerConfig::from_toml("radius = -1.0"),
            Err(BlochError::InvalidConfig(_))
        ));
        assert!(matches!(
            VisualizerConfig::from_toml("animation_frames = 0"),
            Err(BlochError::InvalidConfig(_))
        ));
        assert!(matches!(
            VisualizerConfig::from_toml("radius = \"big\""),
            Err(BlochError::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "animation_frames = 16\nprecision = 4").unwrap();

        let config = VisualizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.animation_frames, 16);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = VisualizerConfig::from_file(Path::new("/nonexistent/bloch.toml")).unwrap_err();
        assert!(matches!(err, BlochError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BLOCH_RADIUS", "1.0"),
            ("BLOCH_FRAME_RATE", "60"),
            ("BLOCH_PRECISION", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = VisualizerConfig::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.radius, 1.0);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.precision, 3);
        let interval = config.frame_interval().unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = VisualizerConfig {
            radius: 1.0,
            animation_frames: 32,
            frame_rate: 0,
            precision: 2,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(VisualizerConfig::from_toml(&text).unwrap(), config);
    }
}
