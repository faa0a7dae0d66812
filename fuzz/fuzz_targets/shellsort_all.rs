#![no_main]

use libfuzzer_sys::fuzz_target;

use shellsort::GapSequence;
use shellsort_fuzz::{assert_sorted_permutation, u8_as_i64};

fuzz_target!(|data: &[u8]| {
    let input = u8_as_i64(data);

    for sequence in GapSequence::ALL {
        let mut v = input.clone();
        shellsort::sort(&mut v, sequence);
        assert_sorted_permutation(&input, &v);

        let mut bytes = data.to_vec();
        shellsort::sort(&mut bytes, sequence);
        assert!(bytes.windows(2).all(|w| w[0] <= w[1]));
    }
});
