#![no_main]

use libfuzzer_sys::fuzz_target;

use shellsort::GapSequence;
use shellsort_fuzz::{assert_sorted_permutation, u8_as_i64};

// The first byte is the length of the sequence name, followed by the name and the values.
fuzz_target!(|data: &[u8]| {
    let Some((&name_len, rest)) = data.split_first() else {
        return;
    };
    let name_len = (name_len as usize).min(rest.len());
    let (name, values) = rest.split_at(name_len);
    let name = String::from_utf8_lossy(name);

    let input = u8_as_i64(values);
    let mut v = input.clone();

    match shellsort::sort_by_name(&mut v, &name) {
        Ok(()) => {
            assert!(name.parse::<GapSequence>().is_ok());
            assert_sorted_permutation(&input, &v);
        }
        Err(shellsort::Error::InvalidArgument(_)) => assert_eq!(v, input),
        Err(err) => panic!("unexpected error: {err}"),
    }
});
