//! Urgency Triage — complaint urgency classification service.

use tracing::info;
use tracing_subscriber::EnvFilter;
use triage_classify::Label;
use triage_core::TriageConfig;
use triage_server::{build_router, AppState};

fn print_help() {
    println!("Urgency Triage — classify complaint messages as High, Medium or Low");
    println!();
    println!("Usage: triage [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Start the HTTP server");
    println!("  classify <text...>       Classify a message and print its urgency");
    println!("  phrases                  Show phrase counts of the active configuration");
    println!("  help                     Show this help message");
    println!();
    println!("Environment:");
    println!("  PORT                     Listen port (default 5000)");
    println!("  TRIAGE_BACKEND           vectors | onnx | none (default vectors)");
    println!("  TRIAGE_MODEL_DIR         Model directory (default models)");
    println!("  TRIAGE_PHRASES_FILE      JSON phrase lists overriding the built-in set");
    println!("  TRIAGE_PHRASE_SET        standard | keywords (default standard)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if let Some(command) = args.get(1) {
        match command.as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            "classify" | "phrases" => {}
            _ => {
                eprintln!("Unknown command: {}. Use 'triage help' for usage.", command);
                std::process::exit(1);
            }
        }
    }

    // Model and phrase index load before anything is served
    let config = TriageConfig::from_env()?;
    let state = AppState::load(config)?;

    match args.get(1).map(String::as_str) {
        Some("classify") => {
            let text = args[2..].join(" ");
            if text.is_empty() {
                eprintln!("Usage: triage classify <text...>");
                std::process::exit(1);
            }
            println!("{}", state.classifier.classify(&text)?);
            return Ok(());
        }
        Some("phrases") => {
            let index = state.classifier.index();
            for label in Label::ALL {
                println!("{:<8}{}", label, index.count(label));
            }
            println!("{:<8}{}", "total", index.phrases().len());
            return Ok(());
        }
        _ => {}
    }

    let addr = format!("0.0.0.0:{}", state.config.port);
    let app = build_router(state.shared());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Urgency triage server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
