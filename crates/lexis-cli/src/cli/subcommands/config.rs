use clap::Subcommand;

/// Configuration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (auth token masked).
    Show,
    /// Print the config file locations that are consulted.
    Paths,
}
