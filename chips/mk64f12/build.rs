use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    if env::var_os("CARGO_FEATURE_RT").is_some() {
        let out = PathBuf::from(env::var("OUT_DIR")?);
        fs::copy("device.x", out.join("device.x"))?;
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rerun-if-changed=device.x");
    }
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
