//! Text rendering of the visualizer state

use std::io::{self, Write};
use std::thread;

use bloch_core::labels::format_number;
use bloch_core::{AnimationFrame, BlochController, DataLabels, Gate, Outcome, Snapshot};
use colored::*;
use serde::Serialize;

/// JSON document printed by `bloch run --json`
#[derive(Debug, Serialize)]
pub struct Report {
    pub actions: Vec<String>,
    pub snapshot: Snapshot,
    pub labels: DataLabels,
}

impl Report {
    pub fn new(actions: Vec<String>, controller: &BlochController) -> Self {
        Self {
            actions,
            snapshot: controller.snapshot(),
            labels: controller.labels(),
        }
    }
}

/// Print the four label blocks plus marker position
pub fn write_state<W: Write>(out: &mut W, controller: &BlochController) -> io::Result<()> {
    let precision = controller.config().precision;
    writeln!(out, "{}", controller.labels())?;
    writeln!(
        out,
        "{} {:.p$}",
        "Marker:".dimmed(),
        controller.position(),
        p = precision
    )
}

/// One animation frame, one line
pub fn write_frame<W: Write>(
    out: &mut W,
    frame: &AnimationFrame,
    steps: usize,
    precision: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "  {:>4}/{:<4} theta={:<8} phi={:<8} pos={:.p$}",
        frame.index,
        steps,
        format_number(frame.angles.theta, precision),
        format_number(frame.angles.phi, precision),
        frame.position,
        p = precision
    )
}

/// Play the outcome's animation, pacing frames at the configured rate
pub fn play<W: Write>(out: &mut W, outcome: Outcome, controller: &BlochController) -> io::Result<()> {
    let Some(animation) = outcome.animation else {
        return Ok(());
    };

    let config = controller.config();
    let steps = animation.steps();
    let interval = config.frame_interval();

    for frame in animation {
        write_frame(out, &frame, steps, config.precision)?;
        out.flush()?;
        if let Some(interval) = interval {
            thread::sleep(interval);
        }
    }
    Ok(())
}

/// Gate table for `bloch gates`
pub fn write_gates<W: Write>(out: &mut W, precision: usize) -> io::Result<()> {
    for gate in Gate::ALL {
        writeln!(
            out,
            "{} {}",
            format!("{:<3}", gate.symbol()).cyan().bold(),
            gate.long_name().bold()
        )?;
        for line in format!("{:.p$}", gate.unitary(), p = precision).lines() {
            writeln!(out, "    {line}")?;
        }
        match gate.rotation() {
            Some(rotation) => writeln!(
                out,
                "    rotation: axis={:.p$} angle={}pi",
                rotation.axis,
                format_number(rotation.angle / std::f64::consts::PI, precision),
                p = precision
            )?,
            None => writeln!(out, "    rotation: none")?,
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Help text listing the accepted actions
pub fn write_action_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Actions:".bold())?;
    writeln!(out, "  i h x y z s t sn        apply a gate (names like 'hadamard' work too)")?;
    writeln!(out, "  zero one plus minus     jump to |0>, |1>, |+>, |->")?;
    writeln!(out, "  theta=<0..179>          theta slider, in degrees")?;
    writeln!(out, "  phi=<0..359>            phi slider, in degrees")?;
    writeln!(out, "  reset                   back to |0>")?;
    writeln!(out, "  state                   print the labels")?;
    writeln!(out, "  help, quit              this text, leave")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloch_core::VisualizerConfig;

    fn controller() -> BlochController {
        BlochController::new(VisualizerConfig {
            animation_frames: 4,
            frame_rate: 0,
            ..VisualizerConfig::default()
        })
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_state() {
        let c = controller();
        let text = render(|out| write_state(out, &c));
        assert!(text.starts_with("Alpha:   (1+0i)"));
        assert!(text.contains("Marker: (0.000, 0.000, 100.000)"));
    }

    #[test]
    fn test_play_prints_every_frame() {
        let mut c = controller();
        let outcome = c.dispatch_str("x").unwrap();
        let text = render(|out| play(out, outcome, &c));
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().last().unwrap().contains("4/4"));
    }

    #[test]
    fn test_play_without_animation_is_silent() {
        let mut c = controller();
        let outcome = c.dispatch_str("theta=10").unwrap();
        assert!(render(|out| play(out, outcome, &c)).is_empty());
    }

    #[test]
    fn test_write_gates_lists_all() {
        let text = render(|out| write_gates(out, 3));
        for gate in Gate::ALL {
            assert!(text.contains(gate.long_name()));
        }
        assert!(text.contains("rotation: none"));
        assert!(text.contains("angle=0.25pi"));
    }

    #[test]
    fn test_report_json() {
        let mut c = controller();
        c.dispatch_str("h").unwrap();
        let report = Report::new(vec!["h".to_string()], &c);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["actions"][0], "h");
        assert!(json["labels"]["theta"].as_str().unwrap().contains("Theta(Deg): 90"));
    }
}
