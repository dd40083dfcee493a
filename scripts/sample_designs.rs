//! Runs a few reference designs straight through the validator against the live
//! Gemini API and prints what comes back.
//!
//! Run with: cargo run --bin sample_designs

use std::sync::Arc;
use std::time::Instant;

use cable_validator::modules::design::crud::CannedDesignRecords;
use cable_validator::services::design_validation::{DesignValidator, ValidationOutcome};
use cable_validator::services::gemini::GeminiClient;

const SAMPLES: [(&str, &str); 3] = [
    (
        "Compliant",
        "IEC 60502-1 cable, 0.6/1 kV, 16 sqmm Cu Class 2, PVC insulation thickness 1.0 mm",
    ),
    (
        "Thin insulation",
        "IEC 60502-1 cable, 0.6/1 kV, 16 sqmm Cu Class 2, PVC insulation thickness 0.4 mm",
    ),
    ("Ambiguous", "copper cable, 10 mm, some insulation"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let gemini = GeminiClient::from_env()?;
    println!("\n🧪 Validating sample designs with {}\n", gemini.model());

    let validator = DesignValidator::new(Arc::new(gemini), Arc::new(CannedDesignRecords));

    for (name, design) in SAMPLES {
        println!("📝 {}: {}", name, design);

        let start = Instant::now();
        let outcome = validator.validate(Some(design), None).await;
        let elapsed = start.elapsed().as_millis();

        match outcome {
            Ok(ValidationOutcome::Validated(result)) => {
                println!("⏱️  Response time: {}ms", elapsed);
                for entry in &result.validation {
                    println!(
                        "   {:?} {} ({})",
                        entry.status,
                        entry.field,
                        entry.provided.as_deref().unwrap_or("—")
                    );
                }
                println!("   Confidence: {:.2}", result.confidence.overall);
                println!("   Reasoning: {}\n", result.reasoning);
            }
            Ok(ValidationOutcome::MissingInput) => println!("⚠️  No input resolved\n"),
            Err(e) => println!("❌ Error after {}ms: {}\n", elapsed, e),
        }
        println!("{:-<60}", "");
    }

    Ok(())
}
