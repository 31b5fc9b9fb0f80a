use std::env;

fn main() {
    let version = env::var("RETINASCAN_VERSION")
        .unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap());
    println!("cargo:rustc-env=RETINASCAN_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RETINASCAN_VERSION");
}
