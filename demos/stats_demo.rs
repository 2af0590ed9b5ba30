use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use clap::Parser;
use span_hash::HashTable;
use span_hash::hash_table::Entry;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    /// Remove and re-insert this fraction of the table after filling it, to
    /// show how churn stretches the probe span.
    #[arg(short = 'r', long = "churn_fraction", default_value_t = 0.5)]
    churn_fraction: f64,
}

fn hash_u64(value: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashTable with target capacity: {}",
        args.target_capacity
    );

    let mut table: HashTable<u64> = HashTable::with_capacity(args.target_capacity);

    println!("Actual capacity: {}", table.capacity());
    println!("Filling table with u64 values...");

    let num_values = table.capacity();
    for i in 0..num_values {
        let value = i as u64;
        let hash = hash_u64(value);

        match table.entry(hash, |&v| v == value) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(_) => {
                panic!("Value already exists in table: {}", value);
            }
        }
    }

    println!("Inserted {} values into table", table.len());
    table.probe_stats().print();

    let churn_count = (num_values as f64 * args.churn_fraction) as usize;
    println!("Churning {} values...", churn_count);

    for i in 0..churn_count {
        let old = i as u64;
        table.remove(hash_u64(old), |&v| v == old);

        let new = (num_values + i) as u64;
        match table.entry(hash_u64(new), |&v| v == new) {
            Entry::Vacant(entry) => {
                entry.insert(new);
            }
            Entry::Occupied(_) => {
                panic!("Value already exists in table: {}", new);
            }
        }
    }

    println!("Population after churn: {}", table.len());
    table.probe_stats().print();
}
