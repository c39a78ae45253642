//! Example: Filter a product catalog with composed specifications
//!
//! Run with: cargo run --package filtering --example filter_products
//!
//! This example shows how to:
//! 1. Parse a product catalog from a textual listing
//! 2. Filter by a single attribute predicate
//! 3. Combine predicates with AND / OR / NOT
//! 4. Share one predicate instance across several composites

use anyhow::Context;
use catalog::{parse_products, Color, Product, Size};
use filtering::{
    ColorSpecification, Filter, LinearFilter, NotSpecification, OrSpecification,
    SizeSpecification, Specification, SpecificationExt,
};
use std::sync::Arc;

const CATALOG: &str = "\
Apple::green::small
Tree::green::large
House::blue::large";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    println!("=== Product Filtering Example ===\n");

    // Parse the catalog listing
    let products = parse_products(CATALOG).context("Failed to parse product catalog")?;
    println!("Catalog holds {} products\n", products.len());

    let filter = LinearFilter;

    // A single leaf predicate
    let green = ColorSpecification::new(Color::Green);
    println!("Products where {}:", green.describe());
    let refs: Vec<&Product> = products.iter().collect();
    for product in filter.filter(refs, &green) {
        println!("  {} is green", product.name);
    }

    // A conjunction built with the fluent API
    let green_and_large =
        ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
    println!("\nProducts where {}:", green_and_large.describe());
    let refs: Vec<&Product> = products.iter().collect();
    for product in filter.filter(refs, &green_and_large) {
        println!("  {} is green and large", product.name);
    }

    let blue_and_large =
        ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
    println!("\nProducts where {}:", blue_and_large.describe());
    let refs: Vec<&Product> = products.iter().collect();
    for product in filter.filter(refs, &blue_and_large) {
        println!("  {} is blue and large", product.name);
    }

    // One shared predicate instance inside two different composites
    let large: Arc<dyn Specification<Product>> = Arc::new(SizeSpecification::new(Size::Large));

    let green_or_large = OrSpecification::new(
        Arc::new(ColorSpecification::new(Color::Green)),
        large.clone(),
    );
    println!("\nProducts where {}:", green_or_large.describe());
    let refs: Vec<&Product> = products.iter().collect();
    for product in filter.filter(refs, &green_or_large) {
        println!("  {} qualifies", product.name);
    }

    let not_large = NotSpecification::new(large.clone());
    println!("\nProducts where {}:", not_large.describe());
    let refs: Vec<&Product> = products.iter().collect();
    for product in filter.filter(refs, &not_large) {
        println!("  {} qualifies", product.name);
    }

    println!("\n=== Summary ===");
    println!("The filter never changed while the predicates did.");

    Ok(())
}
