#![no_main]

use iristree::{predict, Classifier, DecisionTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let features: Vec<f64> = data
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect();

    match predict(&features) {
        Ok(class) => {
            assert_eq!(features.len(), 4);
            assert!(class < 3);
            let votes = DecisionTree::iris().votes(&features).unwrap();
            assert!(votes[class] > 0);
        }
        Err(_) => assert_ne!(features.len(), 4),
    }
});
