use std::mem;

/// Reinterprets `data` as little endian `i64` values, ignoring trailing bytes that do not fill a
/// whole value.
pub fn u8_as_i64(data: &[u8]) -> Vec<i64> {
    data.chunks_exact(mem::size_of::<i64>())
        .map(|chunk| {
            let mut bytes = [0u8; mem::size_of::<i64>()];
            bytes.copy_from_slice(chunk);
            i64::from_le_bytes(bytes)
        })
        .collect()
}

/// Checks that `sorted` is ordered and holds the same values as `input`.
pub fn assert_sorted_permutation(input: &[i64], sorted: &[i64]) {
    let mut expected = input.to_vec();
    expected.sort_unstable();

    assert_eq!(sorted, expected.as_slice());
}
