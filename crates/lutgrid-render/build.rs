// File: crates/lutgrid-render/build.rs
// Summary: Link the Windows system libraries Skia needs (registry access for font lookup).

fn main() {
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
