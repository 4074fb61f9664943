use crate::{Cli, Commands};

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from(["gm", "list", "--pretty", "--browser", "-y"]).unwrap();

    assert!(cli.pretty);
    assert!(cli.browser);
    assert!(cli.yes);
    assert!(matches!(cli.command, Commands::List { search: None }));
}

#[test]
fn given_add_without_password_when_parsed_then_error() {
    let result = Cli::try_parse_from(["gm", "add", "--uid", "123"]);

    assert!(result.is_err());
}

#[test]
fn given_add_with_optional_fields_when_parsed_then_all_captured() {
    let cli = Cli::try_parse_from([
        "gm", "add", "--uid", "123", "--password", "pw", "--name", "Alpha", "--game-id", "42",
    ])
    .unwrap();

    match cli.command {
        Commands::Add {
            uid,
            password,
            name,
            game_id,
        } => {
            assert_eq!(uid, "123");
            assert_eq!(password, "pw");
            assert_eq!(name.as_deref(), Some("Alpha"));
            assert_eq!(game_id.as_deref(), Some("42"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_bare_download_flag_when_parsed_then_download_to_current_dir() {
    let cli = Cli::try_parse_from(["gm", "export", "abc", "--download"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Export {
            download: Some(None),
            ..
        }
    ));
}

#[test]
fn given_download_dir_when_parsed_then_captured() {
    let cli = Cli::try_parse_from(["gm", "export", "abc", "--download", "out"]).unwrap();

    match cli.command {
        Commands::Export { id, download } => {
            assert_eq!(id, "abc");
            assert_eq!(download, Some(Some(PathBuf::from("out"))));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_config_dir_when_parsed_then_captured() {
    let cli = Cli::try_parse_from(["gm", "--config-dir", "/tmp/gm", "status"]).unwrap();

    assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/gm")));
    assert!(matches!(cli.command, Commands::Status));
}
