//! Simple decoder to inspect pack.mcmeta files.

use std::fs;

use mcmeta::codec::{read_pack_meta, write_pack_meta};
use mcmeta::{TextComponent, TextContent};

fn describe(component: &TextComponent, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = match &component.content {
        TextContent::Literal(text) => format!("text {text:?}"),
        TextContent::Translatable { key, args } => {
            format!("translate {key:?} ({} args)", args.len())
        }
        TextContent::Keybind(key) => format!("keybind {key:?}"),
        TextContent::Other(content) => {
            let keys: Vec<&str> = content.keys().map(String::as_str).collect();
            format!("other [{}]", keys.join(", "))
        }
    };
    let mut styles = Vec::new();
    if let Some(color) = component.color {
        styles.push(format!("color=#{:06X}", color.rgb()));
    }
    if let Some(font) = &component.font {
        styles.push(format!("font={font}"));
    }
    if styles.is_empty() {
        println!("{indent}- {label}");
    } else {
        println!("{indent}- {label} ({})", styles.join(", "));
    }
    for child in &component.extra {
        describe(child, depth + 1);
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pack.mcmeta".to_string());

    println!("Reading: {}", path);

    let data = fs::read_to_string(&path).expect("Failed to read file");
    let document: serde_json::Value = serde_json::from_str(&data).expect("Failed to parse JSON");

    // pack.mcmeta wraps the pack section in a top-level object.
    let section = document.get("pack").unwrap_or(&document);
    let meta = read_pack_meta(section).expect("Failed to decode");

    println!("\n=== Pack Info ===");
    let formats = meta.formats;
    if formats.is_single() {
        println!("Format: {}", formats.min());
    } else {
        println!("Formats: {} to {}", formats.min(), formats.max());
    }

    println!("\n=== Description ===");
    describe(&meta.description, 0);

    println!("\n=== Re-encoded ===");
    println!("{}", write_pack_meta(&meta));
}
