//! A basic example showing minimal usage
//!
//! We construct a [`RunningMedian`], fill it with data, and then read out the exact median

use medians::RunningMedian;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the exact median is 44.5
const DATA: [f32; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() {
    let mut running = RunningMedian::new();

    // Read data points from our data source, and fold them into the running median
    for data_point in DATA {
        running.push(data_point);
    }

    // Get our answer
    let median = running.median_or_default();
    println!("Calculated the median as: {median}");
}
