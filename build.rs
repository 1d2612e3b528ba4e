//! Build script to embed the package version and build date at compile time.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // CI can pin the date via BUILD_DATE for reproducible builds
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let version = env::var("CARGO_PKG_VERSION").unwrap();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    fs::write(
        &dest_path,
        format!(
            r#"pub const BUILD_VERSION: &str = "{}";
pub const BUILD_DATE: &str = "{}";"#,
            version, date
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
