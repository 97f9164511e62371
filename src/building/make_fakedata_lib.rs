//! Synthetic catalog generation for tests and demos.
//!
//! The generator deliberately emits the whole range of tag shapes seen in
//! real catalog exports: plain string tags, `{title}` and `{name}` objects,
//! junk array elements, and the occasional malformed `tags` value that is
//! not an array at all. Loading such a file exercises the lenient decoding
//! path end to end.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

const ADJECTIVES: &[&str] = &[
    "Quiet", "Vivid", "Faded", "Golden", "Crimson", "Pale", "Restless", "Still",
];

const SUBJECTS: &[&str] = &[
    "Harbor", "Dunes", "Meadow", "Skyline", "Orchard", "River", "Coastline", "Forest",
];

const TAG_POOL: &[&str] = &[
    "abstract",
    "landscape",
    "portrait",
    "watercolor",
    "oil",
    "minimalist",
    "vintage",
    "monochrome",
];

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Build the `tags` value for one product. Cycles through the shapes the
/// loader must tolerate, including two deliberately broken ones.
fn gen_tags(rng: &mut StdRng, index: usize) -> Value {
    match index % 7 {
        // plain string tags
        0 | 1 => json!([pick(rng, TAG_POOL), pick(rng, TAG_POOL)]),
        // object tags with a title
        2 => json!([{ "title": pick(rng, TAG_POOL) }, pick(rng, TAG_POOL)]),
        // object tags with a name
        3 => json!([{ "name": pick(rng, TAG_POOL) }]),
        // junk elements mixed into an otherwise valid array
        4 => json!([pick(rng, TAG_POOL), 42, null]),
        // no tags at all
        5 => json!([]),
        // malformed: not an array
        _ => json!("not-an-array"),
    }
}

/// Generate `count` products. The same seed always yields the same
/// catalog, so fixtures referenced from multiple tests stay in sync.
pub fn generate_catalog(count: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            // Alternate id encodings; both must load.
            let id: Value = if i % 2 == 0 {
                json!(i + 1)
            } else {
                json!(format!("p{}", i + 1))
            };
            let title = format!("{} {} Print", pick(&mut rng, ADJECTIVES), pick(&mut rng, SUBJECTS));
            let mut product = json!({
                "id": id,
                "title": title,
                "description": format!(
                    "Open edition print no. {}. Archival paper, {} cm by {} cm.",
                    i + 1,
                    rng.random_range(20..80),
                    rng.random_range(20..80),
                ),
                "tags": gen_tags(&mut rng, i),
            });
            // Some products have no price, the card shows a dash for them.
            if rng.random_range(0..100) < 85 {
                let cents = rng.random_range(500u32..20000);
                product["price"] = json!(f64::from(cents) / 100.0);
            }
            product
        })
        .collect()
}

/// Write a generated catalog to `path` as pretty-printed JSON.
pub fn write_catalog(path: &Path, products: &[Value]) -> Result<()> {
    let text = serde_json::to_string_pretty(products).context("failed to serialize catalog")?;
    fs::write(path, text)
        .with_context(|| format!("failed to write catalog to {}", path.display()))?;
    Ok(())
}
