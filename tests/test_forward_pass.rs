// Tests for network construction and the plain forward pass.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use magnetite_nn::{Error, Matrix, Network};

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Builds a [2, 2, 1] network with fixed parameters, overwriting the random
/// initialization.
fn fixed_network() -> Network {
    let mut rng = StdRng::seed_from_u64(0);
    let mut network = Network::new(vec![2, 2, 1], &mut rng).unwrap();
    network.weights[0] = Matrix::from_data(vec![vec![0.5, -0.5], vec![0.25, 0.75]]);
    network.biases[0] = Matrix::column(&[0.1, -0.2]);
    network.weights[1] = Matrix::from_data(vec![vec![0.6, -0.4]]);
    network.biases[1] = Matrix::column(&[0.05]);
    network
}

#[test]
fn new_allocates_nielsen_shapes() {
    let mut rng = StdRng::seed_from_u64(42);
    let network = Network::new(vec![3, 4, 2], &mut rng).unwrap();

    assert_eq!(network.sizes(), &[3, 4, 2]);
    assert_eq!(network.num_layers(), 3);

    // One bias column per non-input layer.
    assert_eq!(network.biases.len(), 2);
    assert_eq!((network.biases[0].rows, network.biases[0].cols), (4, 1));
    assert_eq!((network.biases[1].rows, network.biases[1].cols), (2, 1));

    // weights[i] has shape (sizes[i + 1], sizes[i]).
    assert_eq!(network.weights.len(), 2);
    assert_eq!((network.weights[0].rows, network.weights[0].cols), (4, 3));
    assert_eq!((network.weights[1].rows, network.weights[1].cols), (2, 2));
}

#[test]
fn new_is_deterministic_per_seed() {
    let a = Network::new(vec![3, 4, 2], &mut StdRng::seed_from_u64(7)).unwrap();
    let b = Network::new(vec![3, 4, 2], &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.weights, b.weights);
    assert_eq!(a.biases, b.biases);
}

#[test]
fn new_rejects_degenerate_topologies() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Network::new(vec![5], &mut rng),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        Network::new(vec![], &mut rng),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        Network::new(vec![3, 0, 2], &mut rng),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn feedforward_output_length_matches_last_layer() {
    let mut rng = StdRng::seed_from_u64(3);
    let network = Network::new(vec![3, 4, 2], &mut rng).unwrap();
    let output = network.feedforward(&[0.1, 0.2, 0.3]).unwrap();
    assert_eq!(output.len(), 2);
    // Sigmoid outputs always land in (0, 1).
    assert!(output.iter().all(|&a| a > 0.0 && a < 1.0));
}

#[test]
fn feedforward_rejects_wrong_input_length() {
    let mut rng = StdRng::seed_from_u64(3);
    let network = Network::new(vec![3, 4, 2], &mut rng).unwrap();
    let err = network.feedforward(&[0.1, 0.2]).unwrap_err();
    assert!(matches!(
        err,
        Error::ShapeMismatch {
            expected: 3,
            got: 2,
            ..
        }
    ));
}

#[test]
fn feedforward_matches_hand_computation() {
    let network = fixed_network();
    let x = [1.0, 0.0];

    // Hidden layer.
    let h0 = sigmoid(0.5 * x[0] + -0.5 * x[1] + 0.1);
    let h1 = sigmoid(0.25 * x[0] + 0.75 * x[1] + -0.2);
    // Output layer.
    let expected = sigmoid(0.6 * h0 + -0.4 * h1 + 0.05);

    let output = network.feedforward(&x).unwrap();
    assert_eq!(output.len(), 1);
    assert_relative_eq!(output[0], expected, epsilon = 1e-12);
}

#[test]
fn feedforward_single_neuron_identity_check() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut network = Network::new(vec![1, 1], &mut rng).unwrap();
    network.weights[0] = Matrix::from_data(vec![vec![0.0]]);
    network.biases[0] = Matrix::column(&[0.0]);

    // With zero weight and bias the output is sigmoid(0) = 0.5 for any input.
    let output = network.feedforward(&[123.0]).unwrap();
    assert_relative_eq!(output[0], 0.5, epsilon = 1e-15);
}
