mod common;

use common::noise;
use trichrome_core::plate::{split_channels, stack_channels};

#[test]
fn test_channel_heights_differ_by_at_most_one_and_sum_exactly() {
    for rows in [3, 4, 5, 10, 11, 31, 100] {
        let plate = noise(rows, 8, 7);
        let channels = split_channels(&plate).unwrap();

        let heights: Vec<usize> = channels.iter().map(|c| c.rows()).collect();
        let min = *heights.iter().min().unwrap();
        let max = *heights.iter().max().unwrap();
        assert!(max - min <= 1, "rows={rows}: heights {heights:?}");
        assert_eq!(heights.iter().sum::<usize>(), rows, "rows={rows}");
        assert!(channels.iter().all(|c| c.cols() == plate.cols()));
    }
}

#[test]
fn test_restacking_channels_reproduces_the_plate() {
    for rows in [3, 10, 11, 50] {
        let plate = noise(rows, 13, 42);
        let channels = split_channels(&plate).unwrap();
        let restacked = stack_channels(&channels).unwrap();
        assert_eq!(restacked, plate, "rows={rows}");
    }
}

#[test]
fn test_splitting_a_too_short_plate_fails() {
    let plate = noise(2, 8, 1);
    assert!(split_channels(&plate).is_err());
}
