//! This is the command line tool that reads four measurements and prints the
//! index of the predicted iris class.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use iristree::model::class_name;
use iristree::utils::parse_features;
use iristree::{dot, Classifier, ClassifyError, DecisionTree, NUM_FEATURES};

fn classify(args: &[String], proba: bool) -> Result<(), ClassifyError> {
    // Anything other than a full feature vector is ignored.
    if args.len() != NUM_FEATURES {
        log::debug!(
            "Expected {} features, got {}. Nothing to do.",
            NUM_FEATURES,
            args.len()
        );
        return Ok(());
    }

    let features = parse_features(args)?;
    let tree = DecisionTree::iris();

    if proba {
        let p = tree.predict_proba(&features)?;
        println!("{:.4} {:.4} {:.4}", p[0], p[1], p[2]);
        return Ok(());
    }

    let prediction = tree.predict(&features)?;
    log::info!(
        "Predicted {} for {:?}",
        class_name(prediction).unwrap_or("?"),
        features
    );
    println!("{}", prediction);
    Ok(())
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("dot")
                .long("dot")
                .help("Print the decision tree in the Graphviz dot format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("proba")
                .long("proba")
                .help("Print the probability of each class")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("DIGITS")
                .help("Number of decimals in the thresholds of --dot")
                .value_parser(value_parser!(usize))
                .default_value("2")
                .num_args(1),
        )
        .arg(
            Arg::new("FEATURES")
                .help("Sepal length, sepal width, petal length, petal width")
                .num_args(0..)
                .allow_hyphen_values(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    if matches.get_flag("dot") {
        let precision = *matches.get_one::<usize>("precision").unwrap_or(&2);
        print!("{}", dot::export(&DecisionTree::iris(), precision));
        return;
    }

    let args: Vec<String> = matches
        .get_many::<String>("FEATURES")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();

    if let Err(err) = classify(&args, matches.get_flag("proba")) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
