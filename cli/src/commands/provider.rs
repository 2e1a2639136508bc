use anyhow::Result;
use clap::Args;
use colored::Colorize;
use panel_config::{ConfigProvider, HostEnvironment, LoaderSettings, select_provider};

use crate::output;

#[derive(Args)]
pub struct ProviderArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

pub fn run(args: ProviderArgs) -> Result<()> {
    let settings = LoaderSettings::from_env()?;
    let environment = HostEnvironment::detect()?;
    let provider = select_provider(&environment, &settings);

    if args.json {
        let output = serde_json::json!({
            "provider": provider.name(),
            "location": provider.location(),
            "fetchTimeoutSeconds": settings.fetch_timeout_seconds,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    output::header("Config Provider");
    println!();
    println!("  {:<10} {}", "provider:", provider.name().cyan());
    println!("  {:<10} {}", "location:", provider.location().cyan());
    println!(
        "  {:<10} {}",
        "timeout:",
        format!("{}s", settings.fetch_timeout_seconds).dimmed()
    );

    if !environment.has_bridge() {
        println!();
        output::hint("set PANEL_HOST_BRIDGE=development to read files from the project root");
    }

    Ok(())
}
