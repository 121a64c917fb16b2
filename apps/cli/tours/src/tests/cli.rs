use crate::commands::{Cli, Command};

use models::Difficulty;

use clap::Parser;

/// **VALUE**: Listing flags lower into the backend's filter operators.
#[test]
fn given_tours_flags_when_parsed_then_filter_built() {
    // GIVEN
    let cli = Cli::try_parse_from([
        "tours",
        "tours",
        "--difficulty",
        "Easy",
        "--max-price",
        "500",
        "--min-duration",
        "5",
        "--limit",
        "3",
    ])
    .expect("parses");

    // WHEN
    let filter = cli.command.tour_filter().expect("tours command");

    // THEN
    assert_eq!(filter.difficulty, Some(Difficulty::Easy));
    assert_eq!(filter.price_lte, Some(500.0));
    assert_eq!(filter.duration_gte, Some(5));
    assert_eq!(filter.limit, Some(3));
    assert_eq!(filter.page, None);
}

#[test]
fn given_unknown_difficulty_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["tours", "tours", "--difficulty", "extreme"]);

    assert!(result.is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from(["tours", "me", "--json", "--config-dir", "/tmp/tours-test"])
        .expect("parses");

    assert!(cli.json);
    assert_eq!(cli.command, Command::Me);
    assert_eq!(
        cli.config_dir.as_deref(),
        Some(std::path::Path::new("/tmp/tours-test"))
    );
}

#[test]
fn given_review_arguments_when_parsed_then_positional_fields_filled() {
    let cli = Cli::try_parse_from(["tours", "review", "t1", "4", "Great guides"]).expect("parses");

    assert_eq!(
        cli.command,
        Command::Review {
            tour_id: "t1".to_string(),
            rating: 4,
            text: "Great guides".to_string(),
        }
    );
    assert!(cli.command.tour_filter().is_none());
}
