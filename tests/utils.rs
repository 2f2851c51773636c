use iristree::utils::{check_len, find_max, normalize, parse_features};
use iristree::ClassifyError;

#[test]
fn test_find_max() {
    assert_eq!(find_max(&[0, 47, 0]), 1);
    assert_eq!(find_max(&[50, 0, 0]), 0);
    assert_eq!(find_max(&[0, 0, 43]), 2);
    assert_eq!(find_max(&[]), 0);
}

#[test]
fn test_find_max_ties() {
    assert_eq!(find_max(&[0, 0, 0]), 0);
    assert_eq!(find_max(&[1, 3, 3]), 1);
    assert_eq!(find_max(&[2, 1, 2]), 0);
    assert_eq!(find_max(&[0, 5, 0, 5, 1]), 1);
}

#[test]
fn test_normalize() {
    assert_eq!(normalize(&[0, 0, 43]), [0.0, 0.0, 1.0]);
    assert_eq!(normalize(&[50, 50, 50])[1], 1.0 / 3.0);
}

#[test]
fn test_check_len() {
    assert!(check_len(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    assert!(check_len(&[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn test_parse_features() {
    let parsed = parse_features(&["5.1", " 3.5", "1", "-0.2 "]).unwrap();
    assert_eq!(parsed, vec![5.1, 3.5, 1.0, -0.2]);
    assert_eq!(parse_features::<&str>(&[]).unwrap(), Vec::<f64>::new());

    match parse_features(&["5.1", "abc", "1.0"]) {
        Err(ClassifyError::InvalidFeature { index, value, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected result {:?}", other),
    }

    let err = parse_features(&["1.0", "x"]).unwrap_err();
    assert!(err.to_string().contains("#1 'x'"));
}
