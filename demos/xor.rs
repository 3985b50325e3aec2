use std::sync::mpsc;
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;

use magnetite_nn::{sgd, EpochStats, Example, Network, Result, Sgd, TrainConfig};

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::new(vec![2, 2, 1], &mut rng)?;

    let cases = [
        (vec![0.0, 0.0], 0.0),
        (vec![0.0, 1.0], 1.0),
        (vec![1.0, 0.0], 1.0),
        (vec![1.0, 1.0], 0.0),
    ];
    let mut training_data: Vec<Example> = cases
        .iter()
        .map(|(input, out)| Example::one_hot(input.clone(), vec![*out]))
        .collect();

    let optimizer = Sgd::new(3.0)?;

    let (tx, rx) = mpsc::channel::<EpochStats>();
    let printer = thread::spawn(move || {
        for stats in rx {
            if stats.epoch % 1000 == 0 {
                println!("{stats}");
            }
        }
    });

    let config = TrainConfig {
        epochs: 10_000,
        mini_batch_size: 4,
        progress_tx: Some(tx),
        stop_flag: None,
    };
    sgd(
        &mut network,
        &mut training_data,
        None,
        &optimizer,
        &config,
        &mut rng,
    )?;
    // Dropping the config drops the sender, which lets the printer finish.
    drop(config);
    printer.join().expect("printer thread panicked");

    println!();
    for (input, expected) in &cases {
        let output = network.feedforward(input)?;
        println!(
            "Input: {:?} -> Output: {:.4} (expected {})",
            input, output[0], expected
        );
    }
    Ok(())
}
