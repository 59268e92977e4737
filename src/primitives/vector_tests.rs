pub(crate) use super::*;

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!((v[0] - 1.0).abs() < 1e-6);
    assert!((v[2] - 3.0).abs() < 1e-6);
}

#[test]
fn test_from_vec() {
    let v = Vector::from_vec(vec![4.0_f32, 5.0]);
    assert_eq!(v.len(), 2);
    assert!((v[1] - 5.0).abs() < 1e-6);
}

#[test]
fn test_is_empty() {
    let v: Vector<f32> = Vector::from_vec(vec![]);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_sum() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0, 4.0]);
    assert!((v.sum() - 10.0).abs() < 1e-6);
}

#[test]
fn test_mean() {
    let v = Vector::from_slice(&[2.0_f32, 4.0, 6.0]);
    assert!((v.mean() - 4.0).abs() < 1e-6);
}

#[test]
fn test_mean_empty() {
    let v: Vector<f32> = Vector::from_vec(vec![]);
    assert!((v.mean() - 0.0).abs() < 1e-6);
}

#[test]
fn test_variance() {
    // Population variance of [1, 2, 3, 4, 5] is 2.0
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0, 4.0, 5.0]);
    assert!((v.variance() - 2.0).abs() < 1e-5);
}

#[test]
fn test_stddev() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0, 4.0, 5.0]);
    let expected = 2.0_f32.sqrt();
    assert!((v.stddev() - expected).abs() < 1e-5);
}

#[test]
fn test_stddev_constant() {
    let v = Vector::from_slice(&[3.0_f32, 3.0, 3.0]);
    assert!(v.stddev().abs() < 1e-6);
}

#[test]
fn test_min_max() {
    let v = Vector::from_slice(&[3.0_f32, 1.0, 4.0, 1.5]);
    assert!((v.min().expect("vector is non-empty") - 1.0).abs() < 1e-6);
    assert!((v.max().expect("vector is non-empty") - 4.0).abs() < 1e-6);
}

#[test]
fn test_min_empty_error() {
    let v: Vector<f32> = Vector::from_vec(vec![]);
    assert!(v.min().is_err());
    assert!(v.max().is_err());
}

#[test]
fn test_iter() {
    let v = Vector::from_slice(&[1.0_f32, 2.0]);
    let collected: Vec<f32> = v.iter().copied().collect();
    assert_eq!(collected, vec![1.0, 2.0]);
}

#[test]
fn test_generic_option_elements() {
    let v: Vector<Option<f32>> = Vector::from_vec(vec![Some(1.0), None, Some(3.0)]);
    assert_eq!(v.len(), 3);
    assert_eq!(v[1], None);
    assert_eq!(v[2], Some(3.0));
}
