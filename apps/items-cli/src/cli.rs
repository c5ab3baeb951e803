use clap::{Parser, Subcommand};
use items_client::{DEFAULT_BASE_URL, ITEMS_API_URL_ENV, ItemId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the Items API")]
pub struct Cli {
    /// Base URL of the Items API
    #[arg(long, env = ITEMS_API_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Log requests to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check that the server is up
    Health,
    /// List all items
    List,
    /// Show one item
    Get { id: ItemId },
    /// Create an item
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace an item's name and description
    Update {
        id: ItemId,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete an item
    Delete { id: ItemId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("items-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_default_description() {
        let cli = parse(&["--url", "http://api:8080", "create", "--name", "Lamp"]);

        assert_eq!(cli.url, "http://api:8080");
        assert_eq!(
            cli.command,
            Command::Create {
                name: "Lamp".to_string(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_update() {
        let cli = parse(&["update", "3", "--name", "A", "--description", "b"]);

        assert_eq!(
            cli.command,
            Command::Update {
                id: 3,
                name: "A".to_string(),
                description: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = Cli::try_parse_from(["items-cli", "get", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_requires_name() {
        let result = Cli::try_parse_from(["items-cli", "create"]);
        assert!(result.is_err());
    }
}
