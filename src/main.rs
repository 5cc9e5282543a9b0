use clap::Parser;
use reviews_app::config::LogFormat;
use reviews_app::utils::logger;
use reviews_app::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    let outcome = match args.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Failed to run command: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", outcome.output);

    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }

    Ok(())
}
