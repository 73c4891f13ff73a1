// Degenerate topology: no hidden layers, input wired straight to the output
// through a single weight transition. Learns the OR gate.
use dendrite_nn::{train_loop, Matrix, Network, TrainConfig};

fn main() {
    env_logger::init();

    let input = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]);
    let output = Matrix::from_data(vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]]);

    let mut network = Network::new(0.5, input, output, &[]).expect("valid topology");

    let error = train_loop(&mut network, &TrainConfig::new(5_000)).expect("training failed");
    println!("The error rate is {error:.5}.");

    for case in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let prediction = network.predict(&case).expect("prediction failed");
        println!("Input: {:?} -> Output: {:.4}", case, prediction[0]);
    }
}
