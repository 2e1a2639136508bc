pub mod completion;
pub mod perf;
pub mod provider;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seewo-panel",
    author,
    version,
    about = "Seewo panel - configuration documents and live metrics",
    long_about = "Reads the panel's configuration documents through the same provider the \
                  dashboard uses.\n\nSet PANEL_HOST_BRIDGE=development|packaged to read files \
                  from disk, or leave it unset to fetch from PANEL_CONFIG_BASE_URL."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print configuration documents as JSON")]
    Show(show::ShowArgs),

    #[command(about = "Show which config provider the environment selects")]
    Provider(provider::ProviderArgs),

    #[command(about = "Print one realtime performance snapshot")]
    Perf(perf::PerfArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs),
}
