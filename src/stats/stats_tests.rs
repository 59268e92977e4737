pub(crate) use super::*;

#[test]
fn test_histogram_fixed_bins() {
    let data = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram(4).expect("valid data and bin count");
    assert_eq!(hist.bins.len(), 5);
    assert_eq!(hist.counts.len(), 4);
    // Bins: [1,2) [2,3) [3,4) [4,5]; 5.0 lands in the last.
    assert_eq!(hist.counts, vec![1, 1, 1, 2]);
}

#[test]
fn test_histogram_counts_sum_to_n() {
    let data = Vector::from_slice(&[0.5, 1.5, 1.5, 2.0, 3.5, 4.0, 4.9]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram(3).expect("valid data and bin count");
    assert_eq!(hist.counts.iter().sum::<usize>(), 7);
}

#[test]
fn test_histogram_max_value_in_last_bin() {
    let data = Vector::from_slice(&[0.0, 10.0]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram(2).expect("valid data and bin count");
    assert_eq!(hist.counts, vec![1, 1]);
}

#[test]
fn test_histogram_degenerate_constant_data() {
    let data = Vector::from_slice(&[4.0, 4.0, 4.0]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram(5).expect("constant data degenerates");
    assert_eq!(hist.bins, vec![4.0, 4.0]);
    assert_eq!(hist.counts, vec![3]);
}

#[test]
fn test_histogram_empty_error() {
    let data: Vector<f32> = Vector::from_vec(vec![]);
    let stats = DescriptiveStats::new(&data);
    assert!(stats.histogram(3).is_err());
}

#[test]
fn test_histogram_zero_bins_error() {
    let data = Vector::from_slice(&[1.0, 2.0]);
    let stats = DescriptiveStats::new(&data);
    assert!(stats.histogram(0).is_err());
}

#[test]
fn test_histogram_auto_sturges() {
    // n = 8: ceil(log2(8)) + 1 = 4 bins
    let data = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram_auto().expect("non-empty data");
    assert_eq!(hist.counts.len(), 4);
}

#[test]
fn test_histogram_auto_single_element() {
    // n = 1: ceil(log2(1)) + 1 = 1 bin, and the data is constant anyway.
    let data = Vector::from_slice(&[2.5]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram_auto().expect("non-empty data");
    assert_eq!(hist.counts, vec![1]);
}

#[test]
fn test_histogram_auto_empty_error() {
    let data: Vector<f32> = Vector::from_vec(vec![]);
    let stats = DescriptiveStats::new(&data);
    assert!(stats.histogram_auto().is_err());
}

#[test]
fn test_histogram_edges_monotonic() {
    let data = Vector::from_slice(&[3.0, 1.0, 7.0, 5.0]);
    let stats = DescriptiveStats::new(&data);

    let hist = stats.histogram(4).expect("valid data and bin count");
    for pair in hist.bins.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!((hist.bins[0] - 1.0).abs() < 1e-6);
    assert!((hist.bins[4] - 7.0).abs() < 1e-6);
}
