/// MNIST digit classification demo.
///
/// Architecture: 784 → 40 → 10, all sigmoid
/// Cost:         quadratic
/// Optimizer:    SGD, eta = 3.0
/// Batch size:   20
/// Epochs:       5
///
/// Run with:
///   cargo run --example mnist --release -- <data-dir>
///
/// `<data-dir>` must contain the four standard MNIST IDX files:
/// train-images-idx3-ubyte, train-labels-idx1-ubyte,
/// t10k-images-idx3-ubyte and t10k-labels-idx1-ubyte.

use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use magnetite_nn::data::load_data_wrapper;
use magnetite_nn::{evaluate, sgd, Network, Result, Sgd, TrainConfig};

fn main() -> Result<()> {
    let data_dir = match env::args().nth(1) {
        Some(dir) => dir,
        None => {
            eprintln!("usage: cargo run --example mnist --release -- <data-dir>");
            process::exit(2);
        }
    };

    println!("Loading MNIST data from {data_dir}...");
    let (mut training, validation, test) = load_data_wrapper(&data_dir)?;
    println!("  Training set:   {} examples", training.len());
    println!("  Validation set: {} examples", validation.len());
    println!("  Test set:       {} examples", test.len());

    let mut rng = StdRng::from_entropy();
    let mut network = Network::new(vec![784, 40, 10], &mut rng)?;
    let optimizer = Sgd::new(3.0)?;
    let config = TrainConfig::new(5, 20);

    println!("\nNetwork: 784 -> 40 -> 10 (sigmoid), quadratic cost");
    println!(
        "Training: {} epochs, mini-batches of {}, eta = {}\n",
        config.epochs, config.mini_batch_size, optimizer.learning_rate
    );

    // No progress channel configured, so per-epoch stats go to stdout.
    sgd(
        &mut network,
        &mut training,
        Some(&test),
        &optimizer,
        &config,
        &mut rng,
    )?;

    let correct = evaluate(&network, &validation)?;
    println!(
        "\nValidation accuracy: {} / {} ({:.2}%)",
        correct,
        validation.len(),
        correct as f64 / validation.len() as f64 * 100.0
    );
    Ok(())
}
