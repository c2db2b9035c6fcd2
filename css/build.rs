use std::{env, error::Error, fs, path::Path};

use nyulh_design_tokens_core::{load_tokens, render, Theme};

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?;
    let tokens_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../tokens");

    for theme in Theme::ALL {
        let source = tokens_dir.join(theme.source_file());
        println!("cargo:rerun-if-changed={}", source.display());
        let tokens = load_tokens(&source)?;
        fs::write(
            Path::new(&out_dir).join(theme.destination_file()),
            render(&tokens, theme),
        )?;
    }
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
