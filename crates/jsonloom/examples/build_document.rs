//! Assembles the document a serialization engine would emit for a small
//! release manifest, one write call at a time, and shows how the tree can
//! be inspected while it is still open.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonloom --example build_document
//! ```

use base64::engine::general_purpose::STANDARD;
use jsonloom::{GeneratorError, TreeGenerator};

fn main() -> Result<(), GeneratorError> {
    let mut g = TreeGenerator::new();

    g.start_object()?;
    g.field_name("name")?;
    g.write_string("jsonloom")?;
    g.field_name("version")?;
    g.write_string("0.1.0")?;

    g.field_name("features")?;
    g.start_array()?;
    g.write_string("serde")?;
    g.end_array()?;

    // The document is still open; the root already shows everything
    // written so far.
    if let Some(root) = g.root() {
        println!("partial: {root:?}");
    }

    g.field_name("checksum")?;
    g.write_binary(&STANDARD, &[0xDE, 0xAD, 0xBE, 0xEF], 0, 4)?;

    g.field_name("coverage")?;
    g.write_number(0.875)?;

    // Out-of-order calls are rejected without touching the tree.
    if let Err(err) = g.write_string("stray") {
        println!("rejected: {err}");
    }

    g.end_object()?;

    println!("finished: {:?}", g.into_root());
    Ok(())
}
