//! CLI entry-point for a one-shot console prediction.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    engine::{self, encode::SymptomReport},
};

/// Train the engine and print the top predictions for the given symptoms.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Reported symptom as NAME=SEVERITY; repeatable.
    #[arg(short = 's', long = "symptom", value_parser = parse_report, required = true)]
    pub symptoms: Vec<SymptomReport>,
    /// Number of predictions to print (defaults from settings).
    #[arg(long)]
    pub top_n: Option<usize>,
}

fn parse_report(raw: &str) -> Result<SymptomReport, String> {
    let (name, severity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=SEVERITY, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing symptom name in '{raw}'"));
    }
    let severity: f64 = severity
        .trim()
        .parse()
        .map_err(|_| format!("severity '{}' is not a number", severity.trim()))?;
    Ok(SymptomReport {
        symptom: name.to_string(),
        severity,
    })
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let engine = engine::bootstrap(&settings)?;
    let top_n = args.top_n.unwrap_or(settings.default_top_n);
    let outcome = engine.predict(&args.symptoms, top_n);

    for symptom in &outcome.unrecognised {
        println!("Warning: the symptom '{symptom}' was not recognised.");
    }
    for prediction in &outcome.predictions {
        println!("Predicted Disease: {}", prediction.disease);
        println!("Probability: {:.4}", prediction.probability);
        println!("Description: {}", prediction.description);
        println!("Precautions: {}", prediction.precautions.join(", "));
        println!();
    }
    Ok(())
}
