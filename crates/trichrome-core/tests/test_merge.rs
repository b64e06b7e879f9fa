mod common;

use common::gray;
use trichrome_core::merge::merge_channels;
use trichrome_core::plate::Offset;

#[test]
fn test_merging_identical_channels_at_zero_offset_is_identity() {
    let channel = gray(2, 2, |r, c| (r * 2 + c + 1) as u8);
    let merged = merge_channels(
        &channel,
        &channel,
        &channel,
        Offset::default(),
        Offset::default(),
    )
    .unwrap();
    assert_eq!(merged, channel);
}

#[test]
fn test_merge_reads_each_channel_at_its_shifted_coordinate() {
    // First-channel values 1 2 / 3 4. With the blue channel at (1,1) and the
    // red one at (0,1) the three-way overlap is the single canvas pixel
    // (1,1): red reads (1,0)=3, green (1,1)=4, blue (0,0)=1.
    let channel = gray(2, 2, |r, c| (r * 2 + c + 1) as u8);
    let merged = merge_channels(
        &channel,
        &channel,
        &channel,
        Offset::new(1, 1),
        Offset::new(0, 1),
    )
    .unwrap();

    assert_eq!(merged.rows(), 1);
    assert_eq!(merged.cols(), 1);
    assert_eq!(merged.pixel(0, 0), [3, 4, 1]);
}

#[test]
fn test_merge_fails_without_three_way_overlap() {
    let channel = gray(2, 2, |r, c| (r + c) as u8);
    assert!(merge_channels(
        &channel,
        &channel,
        &channel,
        Offset::new(10, 10),
        Offset::default(),
    )
    .is_err());
}
