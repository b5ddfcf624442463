//! Command-line surface: a `generate` command that samples
//! a Bayesian network into a CSV file, and an `evaluate` command
//! that runs repeated train/induce/evaluate cycles over a dataset.
use anyhow::{anyhow, bail, Context, Result};
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use env_logger::{Builder, Env};
use log::info;
use rand::prelude::*;

use std::fs::File;
use std::io::{BufWriter, Write as _};

use bayestree::{
    accuracy,
    BayesianNetwork,
    ConfusionMatrix,
    Id3,
    SampleReader,
};


fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = Command::new("bayestree")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Samples boolean observations from a Bayesian network \
             and induces ID3 decision trees from tabular data."
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("generate")
                .about("Sample a network definition into a CSV file")
                .arg(
                    Arg::new("network")
                        .value_name("NETWORK_JSON")
                        .help("Path to the JSON network definition")
                        .required(true),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('c')
                        .value_name("NUMBER")
                        .help("Number of rows to sample")
                        .default_value("100"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output CSV path")
                        .default_value("data.csv"),
                )
                .arg(
                    Arg::new("headers")
                        .long("headers")
                        .help("Emit a header row of node names")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("NUMBER")
                        .help("Seed for the random source (optional)"),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about(
                    "Run repeated train/induce/evaluate cycles \
                     over a CSV dataset"
                )
                .arg(
                    Arg::new("data")
                        .value_name("DATA_CSV")
                        .help(
                            "Path to the dataset; \
                             column 0 is the class label"
                        )
                        .required(true),
                )
                .arg(
                    Arg::new("runs")
                        .long("runs")
                        .value_name("NUMBER")
                        .help("Number of independent cycles")
                        .default_value("20"),
                )
                .arg(
                    Arg::new("train_ratio")
                        .long("train-ratio")
                        .value_name("RATIO")
                        .help("Per-row probability of the training side")
                        .default_value("0.6"),
                )
                .arg(
                    Arg::new("positive")
                        .long("positive")
                        .value_name("LABEL")
                        .help("Class label counted as positive")
                        .required(true),
                )
                .arg(
                    Arg::new("negative")
                        .long("negative")
                        .value_name("LABEL")
                        .help("Class label counted as negative")
                        .required(true),
                )
                .arg(
                    Arg::new("headers")
                        .long("headers")
                        .help("Skip a header row in the dataset")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("NUMBER")
                        .help("Seed for the random source (optional)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("generate", sub)) => generate(sub),
        Some(("evaluate", sub)) => evaluate(sub),
        _ => unreachable!("a subcommand is required"),
    }
}


fn rng_from(matches: &ArgMatches) -> Result<StdRng> {
    let seed = matches.get_one::<String>("seed")
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed needs to be a non-negative integer")?;

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(rng)
}


fn generate(matches: &ArgMatches) -> Result<()> {
    let network = matches.get_one::<String>("network").unwrap();
    let output = matches.get_one::<String>("output").unwrap();
    let count: usize = matches.get_one::<String>("count")
        .unwrap()
        .parse()
        .context("count needs to be a non-negative integer")?;
    let headers = matches.get_flag("headers");
    let mut rng = rng_from(matches)?;

    let net = BayesianNetwork::from_json_file(network)
        .with_context(|| format!("failed to load network `{network}`"))?;
    info!(
        "loaded network with {} node(s): {}",
        net.len(),
        net.node_names().join(", "),
    );

    let rows = net.draw_many(count, &mut rng)?;

    let mut file = BufWriter::new(File::create(output)?);
    if headers {
        writeln!(file, "{}", net.node_names().join(","))?;
    }
    for row in rows {
        let line = row.iter()
            .map(|outcome| outcome.to_string())
            .collect::<Vec<String>>()
            .join(",");
        writeln!(file, "{line}")?;
    }
    file.flush()?;

    info!("wrote {count} row(s) to `{output}`");
    Ok(())
}


fn evaluate(matches: &ArgMatches) -> Result<()> {
    let data = matches.get_one::<String>("data").unwrap();
    let positive = matches.get_one::<String>("positive").unwrap();
    let negative = matches.get_one::<String>("negative").unwrap();
    let runs: usize = matches.get_one::<String>("runs")
        .unwrap()
        .parse()
        .context("runs needs to be a positive integer")?;
    let train_ratio: f64 = matches.get_one::<String>("train_ratio")
        .unwrap()
        .parse()
        .context("train-ratio needs to be a number in (0, 1)")?;
    let headers = matches.get_flag("headers");
    let mut rng = rng_from(matches)?;

    if runs == 0 {
        bail!("runs needs to be a positive integer");
    }
    if !(train_ratio > 0.0 && train_ratio < 1.0) {
        bail!("train-ratio needs to be strictly between 0 and 1");
    }

    let sample = SampleReader::default()
        .file(data)
        .has_header(headers)
        .read()
        .with_context(|| format!("failed to read dataset `{data}`"))?;
    let (n_rows, n_columns) = sample.shape();
    info!("read {n_rows} row(s) with {} feature column(s)", n_columns - 1);

    let mut total_accuracy = 0.0;
    let mut summed = ConfusionMatrix::default();

    for run in 1..=runs {
        // Each cycle draws its own fresh holdout split.
        let (train, test) = sample.holdout_split(train_ratio, &mut rng);
        if train.shape().0 == 0 || test.shape().0 == 0 {
            bail!(
                "the holdout split left one side empty \
                 (run {run}); use more rows or another ratio"
            );
        }

        let f = Id3::fit(&train);
        let acc = accuracy(&f, &test)
            .ok_or_else(|| anyhow!("accuracy undefined on an empty test set"))?;
        let counts =
            ConfusionMatrix::from_classifier(&f, &test, positive, negative);

        println!(
            "{}    {}    {}",
            format!("  [{run: >3}'th run]").bold().red(),
            format!("[ACC {acc:.4}]").bold().green(),
            format!("{counts}").bold().yellow(),
        );

        total_accuracy += acc;
        summed.true_positive += counts.true_positive;
        summed.true_negative += counts.true_negative;
        summed.false_positive += counts.false_positive;
        summed.false_negative += counts.false_negative;
    }

    let runs_f = runs as f64;
    println!();
    println!("Accuracy (mean over {runs} run(s)): {:.4}", total_accuracy / runs_f);
    println!(
        "Confusion counts (mean): TP {:.2}  TN {:.2}  FP {:.2}  FN {:.2}",
        summed.true_positive as f64 / runs_f,
        summed.true_negative as f64 / runs_f,
        summed.false_positive as f64 / runs_f,
        summed.false_negative as f64 / runs_f,
    );

    // Rates over summed counts equal rates over mean counts.
    print_rate("sensitivity", summed.sensitivity());
    print_rate("specificity", summed.specificity());
    print_rate("precision", summed.precision());
    print_rate("overall accuracy", summed.accuracy());

    Ok(())
}


fn print_rate(name: &str, rate: Option<f64>) {
    match rate {
        Some(rate) => println!("{name}: {rate:.4}"),
        None => println!("{name}: undefined (zero denominator)"),
    }
}
