//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and records the build time as the initial
//! clock of the watch.

use std::{env, error::Error, fs, path::PathBuf};

use chrono::Local;

fn main() -> Result<(), Box<dyn Error>> {
    // Put memory layout in the output directory and ensure it's on the linker search path.
    let out = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    fs::write(out.join("memory.x"), include_bytes!("memory.x"))?;
    println!("cargo:rustc-link-search={}", out.display());

    // Create rs file with current UTC time and the local offset
    let now = Local::now();
    fs::write(
        out.join("utc.rs"),
        format!(
            "const UTC_EPOCH: i64 = {};\nconst UTC_OFFSET: i32 = {};\n",
            now.timestamp(),
            now.offset().local_minus_utc()
        ),
    )?;

    // No `rerun-if-changed`: the script runs on every build so the clock stays fresh.
    Ok(())
}
