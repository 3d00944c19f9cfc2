//! Benchmark for pack metadata decoding/encoding.
//!
//! Generates a synthetic corpus covering every historical shape of the
//! `pack` section and times full read/write passes over it.

use std::time::Instant;

use mcmeta::codec::{read_pack_meta, write_pack_meta};
use serde_json::{json, Value};

const CORPUS_SIZE: usize = 100_000;
const PASSES: usize = 5;

/// Builds one document per index, cycling through the historical shapes.
fn build_document(index: usize) -> Value {
    let major = 1 + (index % 70) as u32;
    match index % 5 {
        // Oldest shape: single pack_format, flat description.
        0 => json!({
            "description": format!("Pack number {index}"),
            "pack_format": major,
        }),
        // Styled flat description.
        1 => json!({
            "description": format!("§6Pack §7number {index}"),
            "pack_format": major,
        }),
        // Range via supported_formats array.
        2 => json!({
            "description": format!("Pack number {index}"),
            "pack_format": major,
            "supported_formats": [major, major + 2],
        }),
        // Range via the object form.
        3 => json!({
            "description": format!("Pack number {index}"),
            "pack_format": major,
            "supported_formats": {"min_inclusive": major, "max_inclusive": major + 2},
        }),
        // Component-tree description plus modern range fields.
        _ => json!({
            "description": {
                "extra": [
                    {"color": "#FF8DF8", "text": format!("Pack number {index}")},
                    {"color": "gray", "text": " by nobody"},
                ],
                "text": "",
            },
            "min_format": [major, 0],
            "max_format": major + 3,
        }),
    }
}

fn main() {
    println!("Building corpus of {CORPUS_SIZE} documents...");
    let start = Instant::now();
    let corpus: Vec<Value> = (0..CORPUS_SIZE).map(build_document).collect();
    println!("  built in {:?}", start.elapsed());

    println!("\n=== Decode ===");
    let mut decoded = Vec::with_capacity(corpus.len());
    for pass in 0..PASSES {
        decoded.clear();
        let start = Instant::now();
        for document in &corpus {
            decoded.push(read_pack_meta(document).expect("corpus document must decode"));
        }
        let elapsed = start.elapsed();
        let per_doc = elapsed / corpus.len() as u32;
        println!(
            "  pass {}: {:?} total, {:?}/doc, {:.0} docs/s",
            pass + 1,
            elapsed,
            per_doc,
            corpus.len() as f64 / elapsed.as_secs_f64()
        );
    }

    let single = decoded.iter().filter(|m| m.formats.is_single()).count();
    println!(
        "  decoded {} records ({} single-version, {} ranged)",
        decoded.len(),
        single,
        decoded.len() - single
    );

    println!("\n=== Encode ===");
    let mut written = Vec::with_capacity(decoded.len());
    for pass in 0..PASSES {
        written.clear();
        let start = Instant::now();
        for meta in &decoded {
            written.push(write_pack_meta(meta));
        }
        let elapsed = start.elapsed();
        println!(
            "  pass {}: {:?} total, {:.0} docs/s",
            pass + 1,
            elapsed,
            decoded.len() as f64 / elapsed.as_secs_f64()
        );
    }

    println!("\n=== Round trip check ===");
    let start = Instant::now();
    let mut mismatches = 0usize;
    for (meta, first) in decoded.iter().zip(&written) {
        let again = read_pack_meta(first).expect("own output must decode");
        if &again != meta {
            mismatches += 1;
        }
    }
    println!(
        "  {} mismatches out of {} in {:?}",
        mismatches,
        decoded.len(),
        start.elapsed()
    );

    let total_bytes: usize = written.iter().map(|v| v.to_string().len()).sum();
    println!(
        "  re-encoded size: {:.1} MiB",
        total_bytes as f64 / (1024.0 * 1024.0)
    );
}
