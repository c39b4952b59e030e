fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();

    // Link the kernel image at the address the bootloader jumps to
    println!("cargo:rustc-link-arg-bins=-T{}/kernel.ld", manifest_dir);

    // Tell Cargo to rerun if the linker script changes
    println!("cargo:rerun-if-changed=kernel.ld");
}
