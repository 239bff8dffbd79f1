//! A more fully-fledged example, showing the running median and the batch median side by side

use medians::{median_of, select_kth, RunningMedian};

/// Some sample data to calculate the median for
///
/// Note that the exact median is 44.5
const DATA: [f32; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() {
    // Pre-size the engine, since we know how much data is coming
    let mut running = RunningMedian::with_capacity(DATA.len());

    for data_point in DATA {
        running.push(data_point);

        // The median is available after every point
        match running.median() {
            Some(median) => println!(
                "After {} points the median is {median} ({} below, {} above)",
                running.count(),
                running.lower_len(),
                running.upper_len()
            ),
            None => unreachable!("a value was just pushed"),
        }
    }

    // When all the data is already collected, quickselect gets the same answer without a sort
    // Note that this reorders the array
    let mut batch = DATA;
    let median = median_of(&mut batch);
    println!("Batch median: {median:?}");

    // Any other order statistic works too
    match select_kth(&mut batch, 3) {
        Ok(fourth) => println!("Fourth smallest: {fourth}"),
        Err(e) => println!("Could not select: {e}"),
    }

    // Asking for a rank that doesn't exist is an error, not a panic
    if let Err(e) = select_kth(&mut batch, DATA.len()) {
        println!("Expected failure: {e}");
    }
}
