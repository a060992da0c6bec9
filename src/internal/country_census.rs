#![allow(clippy::missing_docs_in_private_items)]

use chainmap::ChainedHashMap;

// Population in crores
const COUNTRIES: [(&str, u32); 4] = [("India", 135), ("China", 140), ("USA", 40), ("UK", 20)];

fn main() {
    let mut map = ChainedHashMap::new();
    for (country, population) in COUNTRIES {
        map.put(country.to_string(), population);
    }

    println!(
        "{} entries over {} buckets, load factor {:.2}",
        map.len(),
        map.capacity(),
        map.load_factor()
    );

    for key in map.key_set() {
        if let Some(population) = map.get(key) {
            println!("{key} -> {population}");
        }
    }

    map.remove("China");
    println!("China after removal: {:?}", map.get("China"));
}
