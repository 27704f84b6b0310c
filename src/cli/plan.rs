//! `--plan`: list the planned animation set

use std::process::ExitCode;

use crate::animation::AnimationKind;
use crate::config::GeneratorConfig;

use super::EXIT_SUCCESS;

/// Format one line per category: name, label, frame count and timing.
pub fn format_plan(config: &GeneratorConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for sequence in config.animations.sequences() {
        let kind = AnimationKind::from_name(&sequence.name);
        let timing = match kind {
            Some(kind) => format!(
                "{} ms/frame, {}",
                kind.frame_duration_ms(),
                if kind.is_looping() { "looping" } else { "once" }
            ),
            None => "untimed".to_string(),
        };
        let label = kind.map_or("", AnimationKind::label);
        lines.push(format!(
            "{:<10} {:<10} {} frames ({}): {}",
            sequence.name,
            label,
            sequence.frames.len(),
            timing,
            sequence.frames.join(", ")
        ));
    }
    lines
}

/// Print the plan; never touches the filesystem.
pub fn run_plan(config: &GeneratorConfig) -> ExitCode {
    println!("{} - planned animations", config.character);
    for line in format_plan(config) {
        println!("  {}", line);
    }
    println!("Total: {} frames", config.animations.total_frames());
    ExitCode::from(EXIT_SUCCESS)
}
