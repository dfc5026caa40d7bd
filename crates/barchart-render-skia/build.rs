// File: crates/barchart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for raster output.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
