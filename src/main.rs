// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rule110::config::{load_and_validate_config, validate_config, Config, RuntimeBuilder};
use rule110::engine::{run_all, UpdaterRun};
use rule110::errors::ConfigError;

/// Machine-readable summary printed with `--json`
#[derive(Serialize)]
struct RunReport<'a> {
    strategy: &'static str,
    iterations: usize,
    tape_len: usize,
    sections: usize,
    runs: &'a [UpdaterRun],
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn usage(program: &str) {
    eprintln!("Usage: {} [--json] [config.yaml]", program);
    eprintln!("Example: {} configs/benchmark.yaml", program);
    eprintln!("Without a config file the MathWorld benchmark runs: 1000 dead cells then [true, false], 10000 iterations, 4 sections.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("rule110");

    let mut json = false;
    let mut config_path = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                usage(program);
                return Ok(());
            }
            path if config_path.is_none() => config_path = Some(path.to_string()),
            extra => {
                usage(program);
                anyhow::bail!("Unexpected argument: {}", extra);
            }
        }
    }

    let config = match &config_path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load {}", path))?,
        None => {
            let config = Config::default();
            validate_config(&config).map_err(ConfigError::Invalid)?;
            config
        }
    };

    let runtime = RuntimeBuilder::from_config(&config);
    let runs = run_all(&runtime.updaters, &runtime.tape, runtime.iterations).await?;

    if json {
        let report = RunReport {
            strategy: config.strategy.as_str(),
            iterations: runtime.iterations,
            tape_len: runtime.tape.len(),
            sections: config.effective_sections(),
            runs: &runs,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Rule 110: {} cells, {} iterations", runtime.tape.len(), runtime.iterations);
    for run in &runs {
        println!("{:<12} method time: {:?}", run.name, run.elapsed);
    }
    if runs.len() > 1 {
        println!("All {} methods agree.", runs.len());
    }

    if config.render.show_tape {
        if let Some(run) = runs.first() {
            println!("{}", runtime.tape.render(config.render.alive, config.render.dead));
            println!("{}", run.tape.render(config.render.alive, config.render.dead));
        }
    }

    Ok(())
}
