//! Кладет config.toml из корня workspace рядом с бинарником
//! (target/debug или target/release), где его ищет `shared::config`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=profile directory not found, config.toml not copied");
        return;
    };

    if !source.exists() {
        println!("cargo:warning=config.toml not found, defaults will be used");
        return;
    }
    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {}", e);
    }
}
