use anyhow::{bail, Context};
use log::error;

use backprop_mlp::{experiments, ExperimentConfig, ExperimentKind};

const USAGE: &str = "usage: mlp-experiments [xor|sine|letters|all] [CONFIG.json]";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let which = args.first().map(String::as_str).unwrap_or("all");

    if args.len() > 2 {
        bail!("too many arguments\n{USAGE}");
    }

    let configs: Vec<ExperimentConfig> = match (which, args.get(1)) {
        ("-h" | "--help", _) => {
            println!("{USAGE}");
            return Ok(());
        }
        ("all", None) => ExperimentKind::ALL.iter().map(|&k| ExperimentConfig::preset(k)).collect(),
        ("all", Some(_)) => bail!("a config file applies to a single experiment\n{USAGE}"),
        (name, config_path) => {
            let kind: ExperimentKind = name.parse().context(USAGE)?;
            let config = match config_path {
                Some(path) => ExperimentConfig::load_json(path)
                    .with_context(|| format!("loading config {path}"))?,
                None => ExperimentConfig::preset(kind),
            };
            if config.kind != kind {
                bail!("config file describes a {} experiment, not {}", config.kind, kind);
            }
            vec![config]
        }
    };

    for config in &configs {
        experiments::run_and_write(config)
            .with_context(|| format!("{} experiment failed", config.kind))?;
        println!("Results saved to {}", config.report_path.display());
    }
    Ok(())
}
