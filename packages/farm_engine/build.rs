use std::{env, fs, path::PathBuf};

use macro_script_compiler::generate_from_path;

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let macro_path = manifest_dir.join("../../config/macro.toml");

    println!("cargo:rerun-if-changed={}", macro_path.display());

    let generated = generate_from_path(&macro_path).unwrap_or_else(|e| {
        panic!("macro compile failed for {}: {e}", macro_path.display())
    });

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_file = out_dir.join("macro_program.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", out_file.display()));
}
