use anyhow::{Context, Result};
use clap::Args;
use panel_config::{ConfigKind, ConfigLoader};

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Document to print: windows, android, device (or *-config), or all")]
    pub target: String,

    #[arg(long, help = "Pretty-print the JSON")]
    pub pretty: bool,
}

/// What `show` was asked for, resolved before any fetch happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTarget {
    All,
    One(ConfigKind),
}

impl ShowTarget {
    pub fn parse(target: &str) -> Result<Self> {
        if target.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let kind = target.parse::<ConfigKind>()?;
        Ok(Self::One(kind))
    }
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let target = ShowTarget::parse(&args.target)?;
    let loader = ConfigLoader::from_env().context("Failed to set up config loader")?;

    let value = match target {
        ShowTarget::All => serde_json::to_value(loader.load_all().await?)?,
        ShowTarget::One(kind) => loader.load(kind).await?.to_json()?,
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(())
}
