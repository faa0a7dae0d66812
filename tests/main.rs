use shellsort::{generate_gaps, sort, sort_by_name, Error, GapSequence};

mod shell {
    sort_test_tools::instantiate_sort_tests!(shellsort::unstable::rust_shellsort_shell::SortImpl);
}

mod knuth {
    sort_test_tools::instantiate_sort_tests!(shellsort::unstable::rust_shellsort_knuth::SortImpl);
}

mod sedgewick {
    sort_test_tools::instantiate_sort_tests!(
        shellsort::unstable::rust_shellsort_sedgewick::SortImpl
    );
}

fn gaps(len: usize, sequence: GapSequence) -> Vec<usize> {
    generate_gaps(len, sequence).collect()
}

#[test]
fn example_shell() {
    let mut v = vec![23, 12, 1, 8, 34, 54, 2, 3];
    sort(&mut v, GapSequence::Shell);
    assert_eq!(v, [1, 2, 3, 8, 12, 23, 34, 54]);
}

#[test]
fn empty_and_single() {
    for sequence in GapSequence::ALL {
        let mut empty: Vec<i64> = Vec::new();
        sort(&mut empty, sequence);
        assert!(empty.is_empty());

        let mut single = vec![5];
        sort(&mut single, sequence);
        assert_eq!(single, [5]);
    }
}

#[test]
fn duplicates_knuth() {
    let mut v = vec![2, 2, 1, 1];
    sort(&mut v, GapSequence::Knuth);
    assert_eq!(v, [1, 1, 2, 2]);
}

#[test]
fn knuth_gaps_below_ten() {
    assert_eq!(gaps(10, GapSequence::Knuth), [4, 1]);
}

#[test]
fn sedgewick_gaps_length_one() {
    assert!(gaps(1, GapSequence::Sedgewick).is_empty());
}

#[test]
fn sedgewick_gaps_small_lengths() {
    for len in 2..=4 {
        assert_eq!(gaps(len, GapSequence::Sedgewick), [1], "len={len}");
    }
}

#[test]
fn every_sequence_ends_at_one() {
    for sequence in GapSequence::ALL {
        for len in 2..5_000 {
            let gaps = gaps(len, sequence);
            assert_eq!(gaps.last(), Some(&1), "{sequence} len={len}");
            assert!(gaps.windows(2).all(|w| w[0] > w[1]));
            assert!(gaps.iter().all(|&gap| gap >= 1 && gap < len));
        }
    }
}

#[test]
fn unknown_sequence_is_invalid_argument() {
    let mut v = vec![9, 8, 7];

    let err = sort_by_name(&mut v, "bubble").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(
        err.to_string(),
        "unknown gap sequence `bubble`, use 'shell', 'knuth', or 'sedgewick'"
    );
    assert_eq!(v, [9, 8, 7]);
}

#[test]
fn sort_by_name_matches_enum() {
    let input = shellsort::patterns::random_uniform(3_000, -500..=500i64, 17);

    for sequence in GapSequence::ALL {
        let mut by_enum = input.clone();
        sort(&mut by_enum, sequence);

        let mut by_name = input.clone();
        sort_by_name(&mut by_name, sequence.name()).unwrap();

        let mut expected = input.clone();
        expected.sort_unstable();

        assert_eq!(by_enum, expected);
        assert_eq!(by_name, expected);
    }
}

#[test]
fn all_sequences_agree_on_patterns() {
    use shellsort::patterns;

    let seed = 0x5EED;
    let inputs = [
        patterns::random(2_048, seed),
        patterns::random_zipf(2_048, 1.0, seed),
        patterns::random_sorted(2_048, 95.0, seed),
        patterns::saw_mixed(2_048, 11, seed),
        patterns::pipe_organ(2_048, seed),
        patterns::descending(2_048),
        patterns::all_equal(2_048),
    ];

    for input in inputs {
        let mut expected = input.clone();
        expected.sort();

        for sequence in GapSequence::ALL {
            let mut v = input.clone();
            sort(&mut v, sequence);
            assert_eq!(v, expected, "{sequence}");
        }
    }
}
