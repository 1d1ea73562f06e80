use clap::Parser;
use memory_organizer::utils::{logger, validation::Validate};
use memory_organizer::{CliArgs, Organizer};

fn main() {
    let args = CliArgs::parse();

    let resolved = match args.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if resolved.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(resolved.verbose);
    }

    tracing::debug!("Resolved config: {:?}", resolved.organizer);

    if let Err(e) = resolved.organizer.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    println!("Organizing photos from exported memories... This may take some time.");

    let organizer = Organizer::new(resolved.organizer);
    match organizer.run() {
        Ok(report) => {
            tracing::info!(
                "✅ Organized {} memories ({} skipped)",
                report.organized,
                report.skipped.len()
            );
            println!(
                "Done! Photos organized in the folder '{}'.",
                organizer.config().output_root.display()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
