// Imports
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::Styles, value_parser as vparser};

#[rustfmt::skip]
pub fn build_cli() -> Command {
    let generate_subcommand = Command::new("generate")
        .about("Generate a synthetic benchmark dataset and a candidate centroid sample")
        .arg(
            Arg::new("dir")
                .help("The data directory to write the dataset and centroid files into")
                .required(true)
                .short('D')
                .long("dir")
                .visible_alias("data-dir")
                .value_parser(vparser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("samples")
                .help("The number of points to generate (i.e., `n`)")
                .required(true)
                .short('n')
                .long("samples")
                .value_parser(vparser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dimension")
                .help("The number of coordinates per point (i.e., `d`)")
                .required(true)
                .short('d')
                .long("dimension")
                .value_parser(vparser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("clusters")
                .help("The number of Gaussian blobs and candidate centroids (i.e., `k`)")
                .required(true)
                .short('k')
                .long("clusters")
                .value_parser(vparser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("seed")
                .help("The RNG seed, defaults to `default_seed` as specified in the config")
                .required(false)
                .short('s')
                .long("seed")
                .value_parser(vparser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("cluster-std")
                .help("The blob spread, defaults to `default_cluster_std` as specified in the config")
                .required(false)
                .long("cluster-std")
                .visible_alias("std")
                .value_parser(vparser!(f64))
                .action(ArgAction::Set),
        );

    let aggregate_subcommand = Command::new("aggregate")
        .about("Merge the job's shard files into one canonical centroid table")
        .arg(
            Arg::new("dir")
                .help("The data directory holding the shard files")
                .required(true)
                .short('D')
                .long("dir")
                .visible_alias("data-dir")
                .value_parser(vparser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("marker")
                .help("The substring identifying shard files, defaults to `shard_marker` as specified in the config")
                .required(false)
                .short('m')
                .long("marker")
                .action(ArgAction::Set),
        );

    let evaluate_subcommand = Command::new("evaluate")
        .about("Assign every point to its nearest centroid, compute the silhouette score, and append it to the quality log")
        .arg(
            Arg::new("dir")
                .help("The data directory holding the dataset and aggregated centroid files")
                .required(true)
                .short('D')
                .long("dir")
                .visible_alias("data-dir")
                .value_parser(vparser!(PathBuf))
                .action(ArgAction::Set),
        );

    let misc_generate_shell_completions_subcommand = Command::new("generate-shell-completions")
        .about("Generate completions for your desired shell")
        .long_about("This subcommand is used to generate shell completions for the selected shell, outputs to stdout")
        .arg(
            Arg::new("shell")
                .index(1)
                .required(true)
                .help("The shell to target")
                .action(ArgAction::Set)
                .value_parser(vparser!(clap_complete::Shell)),
        );

    let misc_subcommand = Command::new("misc")
        .subcommands([
            misc_generate_shell_completions_subcommand,
        ]);

    Command::new("centra")
        .color(clap::ColorChoice::Auto)
        .styles(Styles::styled())
        .arg(
            Arg::new("version")
                .required(false)
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("color")
                .required(false)
                .long("color")
                .value_parser(["always", "auto", "never"])
                .default_value("auto")
                .action(ArgAction::Set)
        )
        .subcommands([
            generate_subcommand,
            aggregate_subcommand,
            evaluate_subcommand,
            misc_subcommand,
        ])
}
