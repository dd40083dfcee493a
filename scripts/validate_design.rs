//! Run with: cargo run --bin validate_design -- "IEC 60502-1 cable, 0.6/1 kV, 16 sqmm Cu Class 2, PVC insulation thickness 0.9 mm"
//! or pipe the design text on stdin.

use std::io::{self, IsTerminal, Read};

use cable_validator::client::{render_table, ClientError, DesignClient, FAILURE_ALERT};

fn read_input() -> anyhow::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut input = String::new();
    if !io::stdin().is_terminal() {
        io::stdin().read_to_string(&mut input)?;
    }
    Ok(input)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let input = read_input()?;
    let client = DesignClient::from_env();

    println!("\n⏳ AI is reasoning…\n");

    match client.validate(&input).await {
        Ok(view) => {
            if let Some(confidence) = view.confidence_percent() {
                println!("AI Confidence: {}\n", confidence);
            }

            print!("{}", render_table(&view.rows));

            if let Some(reasoning) = &view.reasoning {
                println!("\n🔍 AI Reasoning\n{}\n", reasoning);
            }
        }
        Err(ClientError::EmptyInput) => {
            println!("⚠️  {}", ClientError::EmptyInput);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Validation failed: {}", e);
            println!("❌ {}", FAILURE_ALERT);
            std::process::exit(1);
        }
    }

    Ok(())
}
