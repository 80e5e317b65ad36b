use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use zipf::ZipfDistribution;

use once_cell::sync::OnceCell;

use crate::record::{Date, FullName, Record};

/// Provides a set of patterns useful for testing and benchmarking the record sorts.
///
/// The value patterns produce i32 values, [`records_from_values`] turns them into records so that
/// equal values become tied records.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seed();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Maps each value to a record, positions are assigned 1..=len.
///
/// The mapping from value to key is injective, equal values and only equal values produce tied
/// records. It does not preserve the value order.
pub fn records_from_values(values: &[i32]) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(i, &val)| {
            let (date, name) = key_from_value(val);
            Record::new(date, name, i + 1)
        })
        .collect()
}

/// A sample that resembles real input. Dates between 2000 and 2024, last names Zipf distributed
/// over a small pool, so tied records show up without being forced.
pub fn sample_records(len: usize) -> Vec<Record> {
    let mut rng = new_seed();
    let last_name_dist = ZipfDistribution::new(SAMPLE_LAST_NAMES.len(), 1.1)
        .expect("Zipf parameters are constant and valid");

    (1..=len)
        .map(|position| {
            let date = Date::new(
                rng.gen_range(1..=28),
                rng.gen_range(1..=12),
                rng.gen_range(2000..=2024),
            );
            let name = FullName::new(
                SAMPLE_LAST_NAMES[last_name_dist.sample(&mut rng) - 1],
                *FIRST_NAMES.choose(&mut rng).unwrap_or(&FIRST_NAMES[0]),
                *MIDDLE_NAMES.choose(&mut rng).unwrap_or(&MIDDLE_NAMES[0]),
            );

            Record::new(date, name, position)
        })
        .collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

const LAST_NAMES: [&str; 4] = ["Ivanov", "Kuznetsov", "Petrov", "Sidorov"];
const FIRST_NAMES: [&str; 4] = ["Aleksei", "Ivan", "Mikhail", "Sergei"];
const MIDDLE_NAMES: [&str; 4] = ["Aleksandrovich", "Ivanovich", "Petrovich", "Sergeevich"];

const SAMPLE_LAST_NAMES: [&str; 16] = [
    "Ivanov",
    "Smirnov",
    "Kuznetsov",
    "Popov",
    "Vasiliev",
    "Petrov",
    "Sokolov",
    "Mikhailov",
    "Novikov",
    "Fedorov",
    "Morozov",
    "Volkov",
    "Alekseev",
    "Lebedev",
    "Semenov",
    "Sidorov",
];

fn key_from_value(val: i32) -> (Date, FullName) {
    // Shift into 0..2^32, then peel off name and date components as mixed radix digits.
    let mut rest = (val as i64 - i32::MIN as i64) as u64;

    let middle = (rest % 4) as usize;
    rest /= 4;
    let first = (rest % 4) as usize;
    rest /= 4;
    let last = (rest % 4) as usize;
    rest /= 4;

    let day = (rest % 28) as u32 + 1;
    rest /= 28;
    let month = (rest % 12) as u32 + 1;
    rest /= 12;
    let year = 1900 + rest as i32;

    (
        Date::new(day, month, year),
        FullName::new(LAST_NAMES[last], FIRST_NAMES[first], MIDDLE_NAMES[middle]),
    )
}

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
