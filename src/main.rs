use anyhow::{Context, Result};
use std::io;
use vecbits::cli::Cli;
use vecbits::{demo, DemoConfig};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("Failed to load configuration: {:?}", path))?,
        None => DemoConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(ops) = cli.ops {
        config.ops = ops;
    }
    config.validate().context("Invalid configuration")?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    if cli.verbose > 0 {
        eprintln!(
            "{}: seed={} char_range=[{}, {}] int_range=[{}, {}] ops={:?}",
            vecbits::version(),
            config.seed,
            config.char_range.min,
            config.char_range.max,
            config.int_range.min,
            config.int_range.max,
            config.ops
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    demo::run(&config, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
        .context("Demo failed")?;

    Ok(())
}
