// Linker setup for cortex-m-rt and defmt, as in the embassy stm32f3 examples:
// https://github.com/embassy-rs/embassy/blob/main/examples/stm32f3/build.rs
fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    // The on-target test binary needs the same scripts
    println!("cargo:rustc-link-arg-tests=--nmagic");
    println!("cargo:rustc-link-arg-tests=-Tlink.x");
    println!("cargo:rustc-link-arg-tests=-Tdefmt.x");
}
