//! Default command: generate the demo frame and metadata

use std::process::ExitCode;

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::palette::ColorRole;

use super::{EXIT_ERROR, EXIT_SUCCESS};

const BANNER: &str = "Merry the Siamese Cat - Pixel Art Generator";

const NEXT_STEPS: [&str; 4] = [
    "Use the detailed specification in merry_pixel_art_spec.md",
    "Generate idle_01.png with proper AI image generation tools",
    "Use idle_01.png as reference for remaining 25 animation frames",
    "Replace demo files with final pixel art",
];

/// Execute the generate sequence, printing progress to stdout.
pub fn run_generate(config: GeneratorConfig) -> ExitCode {
    println!("{}", BANNER);
    println!("{}", "=".repeat(50));

    let generator = Generator::new(config);

    println!("Generating Merry's idle_01 demo frame...");
    let report = match generator.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let (width, height) = report.sprite_size;
    println!("Demo frame saved: {}", report.sprite_path.display());
    println!("Size: ({}, {})", width, height);
    println!("This is a simplified demo - real pixel art would be hand-crafted pixel by pixel");
    println!("Metadata saved: {}", report.metadata_path.display());

    println!();
    println!("Next Steps:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }

    let palette = &generator.config().palette;
    println!();
    println!("SemoR Brand Integration:");
    println!("   Primary Eye Color: {} (Ice Blue)", palette.hex(ColorRole::EyesBlue));
    println!("   Brand Highlight: {} (Neon Blue)", palette.hex(ColorRole::EyesGlow));

    ExitCode::from(EXIT_SUCCESS)
}
