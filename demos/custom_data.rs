//! An example showcasing calculating the median on a dataset using a custom data type

use std::cmp::Ordering;

use medians::{RunningMedian, Sample, TotalOrd};

/// Our custom data type: a classification enum
///
/// Note that only [`TotalOrd`] and [`Sample`] are necessary here
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

impl TotalOrd for Class {
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Sample for Class {
    fn to_f64(self) -> f64 {
        self as u8 as f64
    }
}

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the exact median is [`Class::Medium`]
const DATA: [Class; 15] = [
    Class::Medium,
    Class::Low,
    Class::High,
    Class::Medium,
    Class::Low,
    Class::Medium,
    Class::VeryHigh,
    Class::Medium,
    Class::High,
    Class::Low,
    Class::Medium,
    Class::VeryHigh,
    Class::High,
    Class::High,
    Class::Low,
];

fn main() {
    // Read data points from our data source, and fold them into the running median
    // It just works!
    let running: RunningMedian<Class> = DATA.into_iter().collect();

    // The median comes out as a level: 0 for Low, 1 for Medium, and so on
    let median = running.median_or_default();
    println!("Calculated the median level as: {median}");
}
