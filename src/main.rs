use clap::Parser;
use find_primes::utils::{logger, validation::Validate};
use find_primes::{CliConfig, FileConfig, PrimeReport, Result, RunSettings};
use std::io::{self, BufWriter};

fn main() {
    let config = CliConfig::parse();
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "find-primes".to_string());

    if let Err(e) = run(&config, &program) {
        if e.is_broken_pipe() {
            tracing::debug!("Standard output closed early, stopping");
            return;
        }

        eprintln!("{}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig, program: &str) -> Result<()> {
    // 驗證參數
    let bound = config.bound(program)?;

    // 載入設定檔
    let file_config = config
        .config
        .as_deref()
        .map(FileConfig::from_file)
        .transpose()?;

    // 驗證配置
    if let Some(file_config) = &file_config {
        file_config.validate()?;
    }

    let settings = RunSettings::resolve(config.no_header, config.verbose, file_config.as_ref());

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );

    tracing::debug!("CLI config: {:?}", config);
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path.display());
    }

    let report = PrimeReport::new(bound).with_header(settings.header);
    let mut out = BufWriter::new(io::stdout().lock());
    let count = report.write_to(&mut out)?;

    tracing::info!("✅ Listed {} primes below {}", count, bound);
    Ok(())
}
