//! Example that demonstrates the usage shown in the package documentation.
//!
//! This shows how to expand numlist strings in each output format and how invalid parts are
//! handled in strict and lenient mode.

use numlist::{Expander, Output, OutputFormat};

fn main() {
    println!("=== numlist README Example ===");

    let items = numlist::parse("1-3,5,7-9").unwrap();
    assert_eq!(items, vec![1, 2, 3, 5, 7, 8, 9]);
    println!("Items: {items:?}");
    println!("As compact numlist: {}", numlist::emit(&items));

    for format in ["list", "set", "csv"] {
        let output = numlist::expand(Some("10..1:3, 2to4"), format).unwrap();
        println!("{format}: {output:?}");
    }

    match numlist::parse("1-a,2,4-b,5") {
        Ok(items) => println!("Unexpectedly parsed: {items:?}"),
        Err(error) => println!("Strict mode rejected the input: {error}"),
    }

    let expansion = Expander::builder()
        .lenient()
        .output_format(OutputFormat::Csv)
        .build()
        .expand(Some("1-a,2,4-b,5"))
        .unwrap()
        .unwrap();

    assert_eq!(expansion.output, Output::Csv("2,5".to_string()));
    println!("Lenient mode produced: {:?}", expansion.output);

    for rejected in &expansion.rejected {
        println!("Skipped: {rejected}");
    }

    println!("README example completed successfully!");
}
