//! Walkthrough: ArrayList-Style Operations on a Dynamic Array
//!
//! Drives one `DynamicArray<String>` through append, middle insert,
//! overwrite, removal, and linear search, printing the state after each
//! step so the shifting behavior is visible.
//!
//! Run with: cargo run --bin arraylist_walkthrough

use dynamic_array::{DynamicArray, Result};

/// Prints the logical size and every index/value pair.
fn print_list(list: &DynamicArray<String>) {
    println!("Size: {} (capacity: {})", list.len(), list.capacity());
    for (i, value) in list.iter().enumerate() {
        println!("  [{}]: {}", i, value);
    }
}

fn main() -> Result<()> {
    // 1. Build the initial list
    println!("=== 1. Initial State ===\n");

    let mut list = DynamicArray::new();
    list.push("A".to_string()); // index 0
    list.push("B".to_string()); // index 1
    list.push("C".to_string()); // index 2
    print_list(&list);

    // 2. Middle insert: everything from the index on gets pushed back
    println!("\n=== 2. insert(1, \"NEW\"): Middle Insert ===\n");
    println!("Inserting at index 1 shifts 'B' and everything after it one slot right.");
    list.insert(1, "NEW".to_string())?;
    print_list(&list);

    // 3. Overwrite: nothing moves
    println!("\n=== 3. set(2, \"MODIFIED\"): Overwrite ===\n");
    println!("Replacing index 2 (currently 'B') leaves every other element in place.");
    let replaced = list.set(2, "MODIFIED".to_string())?;
    println!("Replaced value: {}", replaced);
    print_list(&list);

    // 4. Removal: the tail gets pulled forward
    println!("\n=== 4. remove(1): Removal ===\n");
    println!("Removing index 1 ('NEW') shifts everything after it one slot left.");
    let removed = list.remove(1)?;
    println!("Removed value: {}", removed);
    print_list(&list);

    // 5. Linear search from the front
    println!("\n=== 5. index_of(\"C\"): Search ===\n");
    match list.index_of(&"C".to_string()) {
        Some(index) => println!("'C' is now at index {} (found by scanning from index 0).", index),
        None => println!("'C' is not in the list."),
    }
    match list.index_of(&"B".to_string()) {
        Some(index) => println!("'B' is at index {}.", index),
        None => println!("'B' is gone: it was overwritten in step 3."),
    }

    // 6. A bad index is an error, not a crash
    println!("\n=== 6. get(99): Out of Range ===\n");
    match list.get(99) {
        Ok(value) => println!("Unexpected value: {}", value),
        Err(err) => println!("Rejected: {}", err),
    }

    println!("\n=== Key Points ===");
    println!("1. append is O(1) amortized; capacity doubles when full");
    println!("2. insert/remove shift the tail, so they cost O(n) in the middle");
    println!("3. set touches exactly one slot and never moves neighbors");
    println!("4. index_of scans left to right and reports the lowest match");
    println!("5. Out-of-range indices come back as IndexOutOfRange errors");

    Ok(())
}
