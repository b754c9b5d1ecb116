// The installation directory is baked in at compile time.
fn main() {
    println!("cargo:rerun-if-env-changed=DST_INSTALL_DIR");
}
