// Handwritten digit recognition: trains a network on numbered PNG digits with
// a text file of ground-truth labels, then reports accuracy on a test set.
//
// Run with:
//   cargo run --release -- --config digits.json
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;

use icr_nn::data::read_ground_truth;
use icr_nn::{evaluate, train_network, Dataset, ImageDirProvider, TrainConfig};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path prefix of the training images; sample i is read from `<prefix><i:04>.png`.
    #[arg(long, default_value = "data/digits/train/digit_")]
    train_images: String,

    /// Whitespace-separated training labels, one per image.
    #[arg(long, default_value = "data/digits/train_gt.txt")]
    train_labels: PathBuf,

    /// Number of training images to read.
    #[arg(long, default_value_t = 4000)]
    train_count: usize,

    /// Path prefix of the test images.
    #[arg(long, default_value = "data/digits/test/digit_")]
    test_images: String,

    /// Whitespace-separated test labels, one per image.
    #[arg(long, default_value = "data/digits/test_gt.txt")]
    test_labels: PathBuf,

    /// Number of test images to read.
    #[arg(long, default_value_t = 2000)]
    test_count: usize,

    /// JSON training configuration (topology, learning rate, seed, ...).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for weight initialization; overrides the configuration file.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .event_format(format().with_target(false))
        .init();

    let mut config = match &args.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let input_size = config.topology.input_size();
    let num_classes = config.topology.output_size();

    let train_labels = read_ground_truth(&args.train_labels)?;
    let train_set = Dataset::new(
        ImageDirProvider::new(args.train_images, args.train_count, input_size),
        train_labels,
        num_classes,
    )
    .context("building the training set")?;

    let test_labels = read_ground_truth(&args.test_labels)?;
    let test_set = Dataset::new(
        ImageDirProvider::new(args.test_images, args.test_count, input_size),
        test_labels,
        num_classes,
    )
    .context("building the test set")?;

    info!(topology = ?config.topology.sizes(), seed = ?config.seed, "Building network");
    let mut network = config.build_network();

    train_network(&mut network, &train_set, &config.optimizer(), config.log_every)
        .context("training")?;

    let eval = evaluate(&mut network, &test_set).context("testing")?;

    println!("poz: {}\nneg: {}", eval.correct, eval.incorrect);
    println!("average: {:.2}%", eval.accuracy());
    Ok(())
}
