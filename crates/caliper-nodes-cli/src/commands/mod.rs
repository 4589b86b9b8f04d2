//! CLI argument definitions and dispatch.

pub mod update;

use clap::Parser;

/// Resize the node container list of a Caliper monitor configuration.
#[derive(Parser, Debug)]
#[command(
    name = caliper_nodes_common::constants::BIN_NAME,
    version,
    about,
    long_about = None
)]
pub struct Cli {
    /// Update arguments.
    #[command(flatten)]
    pub update: update::UpdateArgs,
}

/// Dispatches the parsed command line to its handler.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    update::execute(cli.update)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_file_and_count() {
        let cli = Cli::try_parse_from(["update-yaml-nodes", "caliper.yaml", "4"])
            .expect("valid arguments");
        assert_eq!(cli.update.file.to_str(), Some("caliper.yaml"));
        assert_eq!(cli.update.nodes.get(), 4);
        assert!(!cli.update.strict);
    }

    #[test]
    fn cli_requires_node_count() {
        let err = Cli::try_parse_from(["update-yaml-nodes", "caliper.yaml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["update-yaml-nodes", "a.yaml", "2", "3"]).is_err());
    }

    #[test]
    fn cli_rejects_zero_nodes() {
        let err = Cli::try_parse_from(["update-yaml-nodes", "caliper.yaml", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn cli_accepts_strict_flag() {
        let cli = Cli::try_parse_from(["update-yaml-nodes", "--strict", "caliper.yaml", "2"])
            .expect("valid arguments");
        assert!(cli.update.strict);
    }
}
