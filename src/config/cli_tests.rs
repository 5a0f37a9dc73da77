//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_list_with_defaults() {
        let cli = Cli::parse_from_iter(["wger-exercises", "list"]);

        assert_eq!(cli.command, Command::List { pages: 1 });
        assert!(cli.base_url.is_none());
        assert!(cli.pacing_delay_ms.is_none());
        assert!(cli.timeout_secs.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_list_pages() {
        let cli = Cli::parse_from_iter(["wger-exercises", "list", "--pages", "3"]);

        assert_eq!(cli.command, Command::List { pages: 3 });
    }

    #[test]
    fn parse_show_and_variations() {
        let show = Cli::parse_from_iter(["wger-exercises", "show", "345"]);
        assert_eq!(show.command, Command::Show { id: 345 });

        let variations = Cli::parse_from_iter(["wger-exercises", "variations", "9"]);
        assert_eq!(variations.command, Command::Variations { id: 9 });
    }

    #[test]
    fn global_options_before_subcommand() {
        let cli = Cli::parse_from_iter([
            "wger-exercises",
            "--base-url",
            "http://localhost:8000/api/v2",
            "--pacing-delay-ms",
            "50",
            "--timeout-secs",
            "5",
            "-v",
            "list",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000/api/v2"));
        assert_eq!(cli.pacing_delay_ms, Some(50));
        assert_eq!(cli.timeout_secs, Some(5));
        assert!(cli.verbose);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "wger-exercises",
            "variations",
            "9",
            "--pacing-delay-ms",
            "0",
            "-c",
            "custom.toml",
        ]);

        assert_eq!(cli.pacing_delay_ms, Some(0));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_default_output() {
        let cli = Cli::parse_from_iter(["wger-exercises", "init"]);

        assert!(cli.is_init());
        assert_eq!(
            cli.command,
            Command::Init {
                output: PathBuf::from("wger-exercises.toml")
            }
        );
    }

    #[test]
    fn init_custom_output() {
        let cli = Cli::parse_from_iter(["wger-exercises", "init", "-o", "out.toml"]);

        assert_eq!(
            cli.command,
            Command::Init {
                output: PathBuf::from("out.toml")
            }
        );
    }

    #[test]
    fn list_is_not_init() {
        let cli = Cli::parse_from_iter(["wger-exercises", "list"]);
        assert!(!cli.is_init());
    }
}

mod rejection {
    use super::*;

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["wger-exercises"]).is_err());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["wger-exercises", "show", "squat"]).is_err());
    }

    #[test]
    fn negative_pages_rejected() {
        assert!(Cli::try_parse_from(["wger-exercises", "list", "--pages", "-1"]).is_err());
    }
}
