//! Build script for chart-city-indicators.
//!
//! Embeds the dashboard fixtures so the WASM binary needs no filesystem:
//! - every `../fixtures/data/*.csv` becomes an entry of `indicators.rs`, a
//!   `(file name, contents)` slice in directory listing order
//! - `kepler.gl.json`, `descriptions.json` and `layer_ids.json` are copied
//!   into `OUT_DIR` for `include_str!`; the build fails if any is missing

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out = Path::new(&out_dir);

    let data_dir = Path::new("../fixtures/data");
    let mut entries = String::from("&[\n");
    if data_dir.is_dir() {
        for dir_entry in fs::read_dir(data_dir).unwrap() {
            let path = dir_entry.unwrap().path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !path.is_file() || !file_name.ends_with(".csv") {
                continue;
            }
            let absolute = fs::canonicalize(&path).unwrap();
            entries.push_str(&format!(
                "    ({:?}, include_str!({:?})),\n",
                file_name,
                absolute.display().to_string()
            ));
            println!("cargo:rerun-if-changed={}", path.display());
        }
    } else {
        println!(
            "cargo:warning=Fixture directory {} not found, dashboard will be empty",
            data_dir.display()
        );
    }
    entries.push_str("]\n");
    fs::write(out.join("indicators.rs"), entries).unwrap();
    println!("cargo:rerun-if-changed={}", data_dir.display());

    // Static tables are required.
    let files = [
        ("../fixtures/kepler.gl.json", "kepler.gl.json"),
        ("../fixtures/descriptions.json", "descriptions.json"),
        ("../fixtures/layer_ids.json", "layer_ids.json"),
    ];
    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = out.join(dest_name);
        if !src.is_file() {
            panic!("Required static table {} not found", src_path);
        }
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
