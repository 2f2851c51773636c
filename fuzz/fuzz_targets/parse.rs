#![no_main]

use iristree::utils::parse_features;
use iristree::{predict, ClassifyError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let args: Vec<&str> = text.split(' ').collect();

    match parse_features(&args) {
        Ok(features) => {
            assert_eq!(features.len(), args.len());
            if let Ok(class) = predict(&features) {
                assert!(class < 3);
            }
        }
        Err(ClassifyError::InvalidFeature { index, .. }) => {
            assert!(index < args.len());
        }
        Err(err) => panic!("unexpected error {}", err),
    }
});
