use clap::Parser;
use numerology::utils::{logger, validation::Validate};
use numerology::{diagnosis, report, CliConfig, OutputFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numerology diagnosis");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Input validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let person = config.person()?;
    let partner = config.partner()?;

    match partner {
        Some(partner) => {
            let result = diagnosis::diagnose_pair(&person, &partner);
            match config.format {
                OutputFormat::Text => {
                    for line in report::render_pair(&result) {
                        println!("{}", line);
                    }
                }
                OutputFormat::Json => println!("{}", report::render_json(&result)?),
            }
        }
        None => {
            let result = diagnosis::diagnose(&person);
            match config.format {
                OutputFormat::Text => {
                    for line in report::render_self(&result) {
                        println!("{}", line);
                    }
                }
                OutputFormat::Json => println!("{}", report::render_json(&result)?),
            }
        }
    }

    tracing::info!("Diagnosis completed");
    Ok(())
}
