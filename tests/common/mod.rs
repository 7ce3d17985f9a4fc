use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use sales_analyzer::domain::dataset::{Dataset, PRODUCT, REQUIRED_COLUMNS, Value};
use std::fs::File;
use std::io::Error;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

pub const HEADER: [&str; 4] = ["Timestamp", "Price", "Quantity", "Product"];

const PRODUCTS: [&str; 8] = [
    "Widget", "widget", "Gadget", "Gizmo", "Doohickey", "Sprocket", "Cog", "Thingamajig",
];

/// Writes a CSV with the standard sales header followed by `rows`.
pub fn write_sales_csv(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// A temporary `.csv` file holding `rows` under the standard header.
pub fn sales_csv(rows: &[[&str; 4]]) -> NamedTempFile {
    let file = Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    write_sales_csv(file.path(), rows).expect("Failed to write CSV");
    file
}

/// Builds a dataset straight from typed rows.
pub fn dataset(rows: &[(String, Decimal, Decimal, String)]) -> Dataset {
    let mut ds = Dataset::new(REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect());
    for (ts, price, quantity, product) in rows {
        ds.push_row(vec![
            Value::parse_field(ts),
            Value::Number(*price),
            Value::Number(*quantity),
            Value::parse_cell(PRODUCT, product),
        ])
        .expect("Row width matches header");
    }
    ds
}

/// Random sales rows spread over 2023 and 2024.
pub fn random_rows(seed: u64, count: usize) -> Vec<(String, Decimal, Decimal, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let ts = format!(
                "{}-{:02}-{:02} {:02}:{:02}:00",
                rng.gen_range(2023..=2024),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
                rng.gen_range(0..24),
                rng.gen_range(0..60)
            );
            let price = Decimal::new(rng.gen_range(1..100_000), 2);
            let quantity = Decimal::from(rng.gen_range(1..20i64));
            let product = PRODUCTS
                .choose(&mut rng)
                .expect("Product pool is not empty")
                .to_string();
            (ts, price, quantity, product)
        })
        .collect()
}

/// Generates a CSV of `rows` random sales rows.
pub fn generate_sales_csv(path: &Path, seed: u64, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for (ts, price, quantity, product) in random_rows(seed, rows) {
        wtr.write_record([
            ts,
            price.to_string(),
            quantity.to_string(),
            product,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
