use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments parse")
}

#[test]
fn trigger_accepts_wire_tags() {
    let cli = parse(&["gatectl", "--token", "t", "trigger", "start_p"]);
    assert!(matches!(cli.command, Command::Trigger { action: TriggerAction::StartPedestrian }));
}

#[test]
fn trigger_rejects_unknown_actions() {
    assert!(Cli::try_parse_from(["gatectl", "trigger", "open"]).is_err());
}

#[test]
fn plates_list_defaults_to_first_page() {
    let cli = parse(&["gatectl", "plates", "list"]);
    assert!(matches!(
        cli.command,
        Command::Plates(PlatesCommand { command: PlatesSubcommand::List { page: 1 } })
    ));
}

#[test]
fn history_states_takes_page() {
    let cli = parse(&["gatectl", "--json", "history", "states", "--page", "3"]);
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Command::History(HistoryCommand { command: HistorySubcommand::States { page: 3 } })
    ));
}

#[test]
fn token_scope_wins_over_link() {
    let cli = parse(&["gatectl", "--token", "t", "--link", "abc", "watch"]);
    assert_eq!(cli.scope().unwrap(), ChannelScope::Token("t".to_owned()));

    let cli = parse(&["gatectl", "--link", "abc", "watch"]);
    assert_eq!(cli.scope().unwrap(), ChannelScope::TempLink("abc".to_owned()));
}

#[test]
fn temp_access_subcommand_uses_kebab_name() {
    let cli = parse(&["gatectl", "temp-access", "show", "abc"]);
    assert!(matches!(
        cli.command,
        Command::TempAccess(TempAccessCommand { command: TempAccessSubcommand::Show { ref link } }) if link == "abc"
    ));
}
