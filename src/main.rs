use clap::Parser;
use tracing::warn;

use schema_structs::{
    cli::{Cli, open_output},
    config::{EnvConfig, GeneratorConfig, defaults::DEFAULT_RUST_LOG, expand::expand_env},
    db::providers::default_registry,
    error::{EXIT_CONFIG, GenError},
    generate,
    logging::init_tracing,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(err) = run(cli).await {
        let code = err
            .downcast_ref::<GenError>()
            .and_then(GenError::exit_code)
            .unwrap_or(EXIT_CONFIG);
        tracing::error!("{err:#}");
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = GeneratorConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|cfg| cfg.logging.rust_log.clone())
        .unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string());
    init_tracing(&log_level);

    let mut cfg = loaded?;
    cli.apply(&mut cfg);
    cfg.validate()?;
    cfg.database.url = expand_env(&cfg.database.url);

    let providers = default_registry()?;
    let provider = providers.resolve(cfg.database.driver, &cfg.database.url)?;

    let mut out = open_output(cli.out.as_deref()).map_err(GenError::Output)?;
    let report = generate::run(provider.as_ref(), &cfg, &mut out).await?;

    if !report.skipped.is_empty() {
        warn!(tables = ?report.skipped, "some tables were not generated");
    }
    Ok(())
}
