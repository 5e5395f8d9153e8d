//! Generate FORMULAS.md from the formula catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-formulas
//! ```
//!
//! The generated file is written to `physcalc_core/FORMULAS.md`, relative to
//! the workspace root.

use std::fs;
use std::path::Path;

use physcalc_core::formulas::{list, reference_markdown};

fn main() {
    println!("Generating FORMULAS.md...");

    let markdown = reference_markdown();
    let output_path = Path::new("physcalc_core/FORMULAS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} formulas ({} bytes) to {}",
                list().len(),
                markdown.len(),
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
