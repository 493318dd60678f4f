//! Re-run the scheduling brain over an existing project directory.
//!
//! Reads `clip_specs.json` (required) and `trends.json` (optional) from
//! the project directory, builds a fresh plan, and writes
//! `strategy_plan.json` next to them.

use std::path::PathBuf;

use chrono::Local;

use hookline_cli::artifacts;
use hookline_engine::decide;
use hookline_models::{ClipCandidate, Emotion, HistorySummary, TrendReport, TrendSignal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut project_dir: Option<PathBuf> = None;
    let mut days: u32 = 7;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--days" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--days needs a value"))?;
                days = value.parse()?;
                i += 2;
            }
            other => {
                project_dir = Some(PathBuf::from(other));
                i += 1;
            }
        }
    }

    let project_dir = project_dir
        .ok_or_else(|| anyhow::anyhow!("usage: plan-strategy <project_dir> [--days N]"))?;

    let clips_path = project_dir.join(artifacts::CLIP_SPECS_FILE);
    let clips: Vec<ClipCandidate> = match artifacts::read_optional(&clips_path).await? {
        Some(clips) => clips,
        None => {
            return Err(anyhow::anyhow!(
                "clips file not found: {} (run the hookline pipeline first)",
                clips_path.display()
            ));
        }
    };
    println!("Loaded {} clips.", clips.len());

    let trends_path = project_dir.join(artifacts::TRENDS_FILE);
    let trends = match artifacts::read_optional::<TrendReport>(&trends_path).await? {
        Some(report) => report.insights,
        None => {
            println!("Using default trend assumptions (no trends artifact).");
            vec![TrendSignal::content_format("akad wali reels chal rahi hain")]
        }
    };

    // Channel-average assumptions stand in for a real engagement ledger.
    let history = HistorySummary::from_avg_engagement(&[
        (Emotion::Akad, 0.08),
        (Emotion::Dard, 0.06),
        (Emotion::General, 0.04),
    ]);

    let plan = decide(&clips, &trends, &history, days, Local::now().naive_local());

    println!("\n--- STRATEGY PLAN ---");
    println!("Guidance: {}\n", plan.guidance);

    println!("Content Calendar:");
    if plan.commands.is_empty() {
        println!("No content scheduled (maybe all clips were weak?).");
    }
    for command in &plan.commands {
        println!("✅ {}", command);
    }

    if !plan.stop_list.is_empty() {
        println!("\nSkipped Content (Weak/Bad Fit):");
        for entry in &plan.stop_list {
            println!("❌ {}: {}", entry.content_id, entry.reason);
        }
    }

    let output_path = project_dir.join("strategy_plan.json");
    artifacts::write_json(&output_path, &plan).await?;
    println!("\nFull strategy saved to {}", output_path.display());

    Ok(())
}
