use std::sync::mpsc;
use std::thread;

use dendrite_nn::{train_loop, IterationStats, Matrix, Network, TrainConfig};

fn main() {
    env_logger::init();

    let input = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]);
    let output = Matrix::from_data(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]]);

    let mut network = Network::new(0.5, input, output, &[2]).expect("valid topology");

    let (tx, rx) = mpsc::channel::<IterationStats>();
    let printer = thread::spawn(move || {
        for stats in rx {
            if stats.iteration % 1000 == 0 {
                println!("iteration {}/{}", stats.iteration, stats.total_iterations);
            }
        }
    });

    let config = TrainConfig {
        iterations: 10_000,
        progress_tx: Some(tx),
    };
    let error = train_loop(&mut network, &config).expect("training failed");
    // Dropping the config drops the last sender so the printer can finish.
    drop(config);
    printer.join().expect("progress printer panicked");

    println!("The error rate is {error:.5}.");
    for case in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let prediction = network.predict(&case).expect("prediction failed");
        println!("Input: {:?} -> Output: {:.4}", case, prediction[0]);
    }
}
