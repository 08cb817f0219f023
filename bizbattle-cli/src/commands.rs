use std::fs;

use anyhow::Context;
use bizbattle::{Battle, BattleConfig};

use crate::{Cli, Command};

/// Effective configuration: file first, then flag and environment overrides.
fn load_config(cli: &Cli) -> anyhow::Result<BattleConfig> {
    let mut cfg = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            BattleConfig::from_toml_str(&text)?
        }
        None => BattleConfig::default(),
    };
    if let Some(t) = cli.tie_break {
        cfg.tie_break = t.into();
    }
    if let Some(w) = cli.chart_width {
        cfg.chart_width = w;
    }
    tracing::debug!(?cfg, "configuration loaded");
    Ok(cfg)
}

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli)?;
    let battle = Battle::builder().config(cfg).build()?;

    match cli.command {
        Command::Compare {
            company_a,
            company_b,
            json,
        } => {
            let result = battle.compare(&company_a, &company_b)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", battle.render(&result));
            }
        }
        Command::Suggest { text } => {
            for name in battle.suggest(&text) {
                println!("{name}");
            }
        }
        Command::List => {
            for name in battle.companies() {
                println!("{name}");
            }
        }
        Command::Interactive => crate::repl::run(&battle)?,
    }
    Ok(())
}
