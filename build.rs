fn main() {
    // Stamped into the binary for the footer copyright year
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");
    println!("cargo:rerun-if-changed=build.rs");
}
