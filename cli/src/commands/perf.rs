use anyhow::Result;
use clap::Args;
use colored::Colorize;
use panel_config::{RealtimePerformance, realtime_snapshot};

use crate::output;

#[derive(Args)]
pub struct PerfArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

pub fn run(args: PerfArgs) -> Result<()> {
    let snapshot = realtime_snapshot();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    output::header("Realtime Performance");
    println!();
    for (name, value) in rows(&snapshot) {
        println!("  {:<14} {}", format!("{name}:"), value.cyan());
    }
    Ok(())
}

fn rows(snapshot: &RealtimePerformance) -> Vec<(&'static str, String)> {
    vec![
        ("cpu", format!("{:.1}%", snapshot.cpu_usage)),
        ("memory", format!("{:.1}%", snapshot.memory_usage)),
        ("disk", format!("{:.1}%", snapshot.disk_usage)),
        ("network rx", format!("{:.2} MB/s", snapshot.network_rx / 1_000_000.0)),
        ("network tx", format!("{:.2} MB/s", snapshot.network_tx / 1_000_000.0)),
        ("temperature", format!("{:.1}°C", snapshot.temperature)),
        ("fan", format!("{:.0} RPM", snapshot.fan_speed)),
        ("power", snapshot.power_state.clone()),
        ("uptime", format!("{:.0}s", snapshot.uptime)),
    ]
}
