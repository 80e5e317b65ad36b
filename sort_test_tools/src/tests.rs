use std::env;
use std::fs;
use std::io::{self, Write};
use std::sync::Mutex;

use record_sort::analysis::stability::verify_stability;
use record_sort::patterns;
use record_sort::record::{self, Record};

use crate::Sort;

#[cfg(miri)]
const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 20, 24, 33, 50, 100, 280, 400,
];

#[cfg(feature = "large_test_sizes")]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 29] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048, 5_000, 10_000, 20_000,
];

#[cfg(not(feature = "large_test_sizes"))]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048, 5_000,
];

fn get_or_init_random_seed<S: Sort>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of crashes.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {}\n\n", <S as Sort>::name()).as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

fn is_stable_sort<S: Sort>() -> bool {
    !<S as Sort>::name().contains("unstable")
}

fn sort_comp<S: Sort>(v: &mut [Record]) {
    let seed = get_or_init_random_seed::<S>();

    let is_small_test = v.len() <= 100;
    let is_stable = is_stable_sort::<S>();
    let original_clone = v.to_vec();

    // The stdlib sort is stable, for a stable sort under test the records have to match exactly,
    // for an unstable one only the keys have to.
    let mut stdlib_sorted_vec = v.to_vec();
    let stdlib_sorted = stdlib_sorted_vec.as_mut_slice();
    stdlib_sorted.sort_by(record::compare);

    let testsort_sorted = v;
    <S as Sort>::sort(testsort_sorted).unwrap();

    assert_eq!(stdlib_sorted.len(), testsort_sorted.len());

    for (a, b) in stdlib_sorted.iter().zip(testsort_sorted.iter()) {
        let is_match = if is_stable {
            a == b
        } else {
            a.key() == b.key()
        };

        if !is_match {
            if is_small_test {
                eprintln!("Orginal:  {:?}", original_clone);
                eprintln!("Expected: {:?}", stdlib_sorted);
                eprintln!("Got:      {:?}", testsort_sorted);
            } else {
                if env::var("WRITE_LARGE_FAILURE").is_ok() {
                    // Large arrays output them as files.
                    let original_name = format!("original_{}.txt", seed);
                    let std_name = format!("stdlib_sorted_{}.txt", seed);
                    let testsort_name = format!("testsort_sorted_{}.txt", seed);

                    fs::write(&original_name, format!("{:?}", original_clone)).unwrap();
                    fs::write(&std_name, format!("{:?}", stdlib_sorted)).unwrap();
                    fs::write(&testsort_name, format!("{:?}", testsort_sorted)).unwrap();

                    eprintln!(
                        "Failed comparison, see files {original_name}, {std_name}, and {testsort_name}"
                    );
                } else {
                    eprintln!(
                    "Failed comparison, re-run with WRITE_LARGE_FAILURE env var set, to get output."
                );
                }
            }

            panic!("Test assertion failed!")
        }
    }

    // Matching keys alone don't prove that no record was lost or duplicated.
    if !is_stable {
        assert_same_records(&original_clone, testsort_sorted);
    }
}

fn assert_same_records(original: &[Record], sorted: &[Record]) {
    let mut original_by_pos = original.to_vec();
    original_by_pos.sort_by_key(|r| r.position());

    let mut sorted_by_pos = sorted.to_vec();
    sorted_by_pos.sort_by_key(|r| r.position());

    assert_eq!(original_by_pos, sorted_by_pos);
}

fn test_impl<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for test_size in TEST_SIZES {
        let mut test_data = patterns::records_from_values(&pattern_fn(test_size));
        sort_comp::<S>(test_data.as_mut_slice());
    }
}

fn test_impl_custom(mut test_fn: impl FnMut(usize, fn(usize) -> Vec<i32>)) {
    let test_pattern_fns: Vec<fn(usize) -> Vec<i32>> = vec![
        patterns::random,
        |size| patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32) as i32),
        |size| patterns::random_uniform(size, 0..=1 as i32),
        patterns::ascending,
        patterns::descending,
        |size| patterns::saw_mixed(size, ((size as f64).log2().round()) as usize),
        |size| patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize),
    ];

    for test_pattern_fn in test_pattern_fns {
        for test_size in &TEST_SIZES[..TEST_SIZES.len() - 2] {
            if *test_size < 2 {
                continue;
            }

            test_fn(*test_size, test_pattern_fn);
        }
    }
}

/// Tied records are ordered by position, the order they were created in.
fn is_sorted_stable(v: &[Record]) -> bool {
    v.windows(2).all(|w| {
        (w[0].key(), w[0].position()) <= (w[1].key(), w[1].position())
    })
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    sort_comp::<S>(&mut []);
    sort_comp::<S>(&mut patterns::records_from_values(&[66]));
    sort_comp::<S>(&mut patterns::records_from_values(&[2, 3]));
    sort_comp::<S>(&mut patterns::records_from_values(&[3, 2]));
    sort_comp::<S>(&mut patterns::records_from_values(&[2, 3, 6]));
    sort_comp::<S>(&mut patterns::records_from_values(&[2, 3, 99, 6]));
    sort_comp::<S>(&mut patterns::records_from_values(&[2, 7709, 400, 90932]));
    sort_comp::<S>(&mut patterns::records_from_values(&[15, -1, 3, -1, -3, -1, 7]));
}

pub fn degenerate<S: Sort>() {
    let mut empty: Vec<Record> = Vec::new();
    <S as Sort>::sort(&mut empty).unwrap();
    assert!(empty.is_empty());

    let single = patterns::records_from_values(&[i32::MIN]);
    let mut v = single.clone();
    <S as Sort>::sort(&mut v).unwrap();
    assert_eq!(v, single);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort>() {
    test_impl::<S>(patterns::random);
}

pub fn random_d4<S: Sort>() {
    test_impl::<S>(|size| {
        if size > 3 {
            patterns::random_uniform(size, 0..4)
        } else {
            Vec::new()
        }
    });
}

pub fn random_d16<S: Sort>() {
    test_impl::<S>(|size| {
        if size > 3 {
            patterns::random_uniform(size, 0..16)
        } else {
            Vec::new()
        }
    });
}

pub fn random_d256<S: Sort>() {
    test_impl::<S>(|size| {
        if size > 3 {
            patterns::random_uniform(size, 0..256)
        } else {
            Vec::new()
        }
    });
}

pub fn random_z1<S: Sort>() {
    // Great for debugging.
    test_impl::<S>(|size| {
        if size > 3 {
            patterns::random_zipf(size, 1.0)
        } else {
            Vec::new()
        }
    });
}

pub fn random_narrow<S: Sort>() {
    test_impl::<S>(|size| {
        if size > 3 {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32) * 100)
        } else {
            Vec::new()
        }
    });
}

pub fn random_binary<S: Sort>() {
    test_impl::<S>(|size| patterns::random_uniform(size, 0..=1 as i32));
}

pub fn all_equal<S: Sort>() {
    test_impl::<S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<S>(patterns::descending);
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<S>(|test_size| {
        patterns::saw_mixed(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<S>(patterns::pipe_organ);
}

pub fn sample<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for test_size in TEST_SIZES {
        let mut test_data = patterns::sample_records(test_size);
        sort_comp::<S>(&mut test_data);
    }
}

pub fn idempotent<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
        let mut sorted = patterns::records_from_values(&pattern_fn(test_size));
        sorted.sort_by(record::compare);

        let mut v = sorted.clone();
        <S as Sort>::sort(&mut v).unwrap();

        if is_stable_sort::<S>() {
            assert_eq!(v, sorted);
        } else {
            assert!(v.iter().map(Record::key).eq(sorted.iter().map(Record::key)));
        }
    };

    test_impl_custom(test_fn);
}

pub fn idempotent_distinct_keys<S: Sort>() {
    // Without ties any sort has to reproduce an ascending input exactly.
    for test_size in TEST_SIZES {
        let mut sorted = patterns::records_from_values(&patterns::ascending(test_size));
        sorted.sort_by(record::compare);

        let mut v = sorted.clone();
        <S as Sort>::sort(&mut v).unwrap();

        assert_eq!(v, sorted);
    }
}

pub fn stability<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if !is_stable_sort::<S>() {
        // It would be great to mark the test as skipped, but that isn't possible as of now.
        return;
    }

    let large_range = if cfg!(miri) { 100..110 } else { 1000..1005 };
    let rounds = if cfg!(miri) { 1 } else { 10 };

    let rand_vals = patterns::random_uniform(5_000, 0..=9);
    let mut rand_idx = 0;

    for len in (2..55).chain(large_range) {
        for _ in 0..rounds {
            // Only 10 distinct keys, the positions of the tied records are increasing in creation
            // order, so a stable sort has to leave them increasing.
            let values: Vec<i32> = (0..len)
                .map(|_| {
                    let n = rand_vals[rand_idx];
                    rand_idx += 1;
                    if rand_idx >= rand_vals.len() {
                        rand_idx = 0;
                    }

                    n
                })
                .collect();

            let mut v = patterns::records_from_values(&values);
            <S as Sort>::sort(&mut v).unwrap();

            assert!(is_sorted_stable(&v));
        }
    }
}

pub fn stability_with_patterns<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if !is_stable_sort::<S>() {
        return;
    }

    let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
        let values: Vec<i32> = pattern_fn(test_size)
            .iter()
            .map(|val| val.saturating_abs() % 128)
            .collect();

        let mut v = patterns::records_from_values(&values);
        <S as Sort>::sort(&mut v).unwrap();

        assert!(is_sorted_stable(&v));
    };

    test_impl_custom(test_fn);
}

pub fn verify_stability_consistent<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
        let original = patterns::records_from_values(&pattern_fn(test_size));
        let mut v = original.clone();
        <S as Sort>::sort(&mut v).unwrap();

        // The verifier must always accept the output as a permutation, and must agree with a
        // direct check of tied record positions.
        let is_stable = verify_stability(&original, &v).unwrap();
        assert_eq!(is_stable, is_sorted_stable(&v));

        if is_stable_sort::<S>() {
            assert!(is_stable);
        }
    };

    test_impl_custom(test_fn);
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_impl_inner {
    ($sort_impl:ty, miri_yes, $sort_name:ident) => {
        #[test]
        fn $sort_name() {
            sort_test_tools::tests::$sort_name::<$sort_impl>();
        }
    };
    ($sort_impl:ty, miri_no, $sort_name:ident) => {
        #[test]
        #[cfg(not(miri))]
        fn $sort_name() {
            sort_test_tools::tests::$sort_name::<$sort_impl>();
        }

        #[test]
        #[cfg(miri)]
        #[ignore]
        fn $sort_name() {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_impl {
    ($sort_impl:ty, $([$miri_use:ident, $sort_name:ident]),*) => {
        $(
            sort_test_tools::instantiate_sort_test_impl_inner!($sort_impl, $miri_use, $sort_name);
        )*
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        sort_test_tools::instantiate_sort_test_impl!(
            $sort_impl,
            [miri_no, all_equal],
            [miri_yes, ascending],
            [miri_yes, basic],
            [miri_yes, degenerate],
            [miri_yes, descending],
            [miri_yes, fixed_seed],
            [miri_no, idempotent],
            [miri_yes, idempotent_distinct_keys],
            [miri_yes, pipe_organ],
            [miri_yes, random],
            [miri_no, random_binary],
            [miri_yes, random_d16],
            [miri_yes, random_d256],
            [miri_yes, random_d4],
            [miri_yes, random_narrow],
            [miri_yes, random_z1],
            [miri_yes, sample],
            [miri_no, saw_mixed],
            [miri_yes, stability],
            [miri_no, stability_with_patterns],
            [miri_no, verify_stability_consistent]
        );
    };
}
