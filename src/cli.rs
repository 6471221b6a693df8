// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn output_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Pretty JSON output"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("One JSON object per line"),
    ]
}

fn direction_arg() -> Arg {
    Arg::new("direction")
        .long("direction")
        .short('d')
        .required(true)
        .value_parser(["income", "expense"])
}

pub fn build_cli() -> Command {
    Command::new("moneychat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Free-text transaction entry, keyword categories, and budget allocation")
        .arg(
            Arg::new("taxonomy")
                .long("taxonomy")
                .global(true)
                .value_name("PATH")
                .help("Category taxonomy JSON (defaults to the config dir, then built-ins)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse one utterance into a transaction draft")
                .arg(Arg::new("text").long("text").short('t').required(true))
                .args(output_flags()),
        )
        .subcommand(
            Command::new("batch")
                .about("Parse every row of a CSV file with a 'text' column")
                .arg(Arg::new("path").long("path").required(true))
                .arg(Arg::new("out").long("out").help("Write results as CSV"))
                .args(output_flags()),
        )
        .subcommand(
            Command::new("category")
                .about("Inspect the category taxonomy")
                .subcommand(
                    Command::new("list")
                        .arg(direction_arg())
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("match")
                        .arg(direction_arg())
                        .arg(Arg::new("text").long("text").short('t').required(true)),
                ),
        )
        .subcommand(
            Command::new("allocate")
                .about("Split monthly income across budget buckets")
                .arg(Arg::new("income").long("income").help("Monthly income (default 3000)"))
                .arg(
                    Arg::new("fixed")
                        .long("fixed")
                        .action(ArgAction::Append)
                        .value_name("NAME=AMOUNT")
                        .help("Fixed expense; replaces the default list when given"),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .action(ArgAction::Append)
                        .value_name("ID=PCT")
                        .help("Slider adjustment, applied in order"),
                )
                .arg(
                    Arg::new("normalize")
                        .long("normalize")
                        .action(ArgAction::SetTrue)
                        .help("Rescale other buckets so percentages sum to 100"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .action(ArgAction::SetTrue)
                        .help("Show buckets by descending percentage"),
                )
                .args(output_flags()),
        )
        .subcommand(
            Command::new("config")
                .about("Taxonomy configuration file")
                .subcommand(Command::new("path"))
                .subcommand(
                    Command::new("init").arg(
                        Arg::new("force")
                            .long("force")
                            .action(ArgAction::SetTrue),
                    ),
                ),
        )
}
