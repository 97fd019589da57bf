//! Dueling generators: two multiplicative generators race, and we count the
//! rounds where the low 16 bits of their outputs agree.

const FACTOR_A: u64 = 16807;
const FACTOR_B: u64 = 48271;
const MODULUS: u64 = 2_147_483_647;

const SEED_A: u64 = 634;
const SEED_B: u64 = 301;

fn generate(previous: u64, factor: u64) -> u64 {
    previous * factor % MODULUS
}

/// Generate until the value divides evenly by `divisor`, and hand that one
/// back. The picky generators still produce values in lockstep pairs; one
/// just burns through more internal states per round.
fn generate_multiple(previous: u64, factor: u64, divisor: u64) -> u64 {
    let mut value = generate(previous, factor);
    while value % divisor != 0 {
        value = generate(value, factor);
    }
    value
}

fn low_bits_match(a: u64, b: u64) -> bool {
    a & 0xffff == b & 0xffff
}

fn matches(seed_a: u64, seed_b: u64, rounds: usize) -> usize {
    let mut a = seed_a;
    let mut b = seed_b;
    let mut count = 0;
    for _ in 0..rounds {
        a = generate(a, FACTOR_A);
        b = generate(b, FACTOR_B);
        if low_bits_match(a, b) {
            count += 1;
        }
    }
    count
}

fn picky_matches(seed_a: u64, seed_b: u64, rounds: usize) -> usize {
    let mut a = seed_a;
    let mut b = seed_b;
    let mut count = 0;
    for _ in 0..rounds {
        a = generate_multiple(a, FACTOR_A, 4);
        b = generate_multiple(b, FACTOR_B, 8);
        if low_bits_match(a, b) {
            count += 1;
        }
    }
    count
}

fn main() {
    println!("{}", matches(SEED_A, SEED_B, 40_000_000));
    println!("{}", picky_matches(SEED_A, SEED_B, 5_000_000));
}
