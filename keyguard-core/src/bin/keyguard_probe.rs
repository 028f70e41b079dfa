// keyguard-core/src/bin/keyguard_probe.rs

use anyhow::{Context, Result, bail};
use keyguard_core::{CarrierInfo, KeyguardConfig, Presenter, SimCardState, StatusLines};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: keyguard_probe <SIM_STATE> [--plmn P] [--spn S] \
                     [--operator-alpha A] [--config FILE]";

#[derive(Debug, Default)]
struct ProbeArgs {
    sim_state: Option<SimCardState>,
    carrier: CarrierInfo,
    config_path: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<ProbeArgs> {
    let mut parsed = ProbeArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--plmn" | "--spn" | "--operator-alpha" | "--config" => {
                let Some(value) = args.next() else {
                    bail!("{arg} needs a value\n{USAGE}");
                };
                match arg.as_str() {
                    "--plmn" => parsed.carrier.plmn = Some(value),
                    "--spn" => parsed.carrier.spn = Some(value),
                    "--operator-alpha" => parsed.carrier.operator_alpha = Some(value),
                    _ => parsed.config_path = Some(value),
                }
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            state => {
                if parsed.sim_state.is_some() {
                    bail!("SIM state given twice\n{USAGE}");
                }
                let Ok(sim_state) = state.parse::<SimCardState>();
                parsed.sim_state = Some(sim_state);
            }
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    // RUST_LOG=keyguard_core=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    let args = parse_args(std::env::args().skip(1))?;
    let Some(sim_state) = args.sim_state else {
        bail!("missing SIM state\n{USAGE}");
    };

    let config = match &args.config_path {
        Some(path) => KeyguardConfig::load(path).context("config load failed")?,
        None => KeyguardConfig::default(),
    };

    let status = config.resolve(sim_state);
    let view = Presenter::present(status, &args.carrier, &config, &StatusLines::default());

    let json = serde_json::to_string_pretty(&view).context("view serialization failed")?;
    println!("{json}");

    Ok(())
}
