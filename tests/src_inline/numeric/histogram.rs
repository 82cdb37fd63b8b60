use super::*;

#[test]
fn test_histogram_counts_and_centers() {
    let h = Histogram::build(&[0.0, 0.1, 0.3, 0.74, 0.75, 1.0], 4);
    assert_eq!(h.counts, vec![2, 1, 1, 2]);
    assert_eq!(h.centers, vec![0.125, 0.375, 0.625, 0.875]);
    assert_eq!(h.bin_width(), 0.25);
    assert_eq!(h.total(), 6);
}

#[test]
fn test_histogram_last_bin_closed_and_outside_dropped() {
    let h = Histogram::build(&[1.0, 1.0, -0.1, 1.5], 3);
    assert_eq!(h.counts, vec![0, 0, 2]);
    assert_eq!(h.nbins(), 3);
}

#[test]
fn test_histogram_edge_values_land_right() {
    let h = Histogram::build(&[0.5], 2);
    assert_eq!(h.counts, vec![0, 1]);
}
