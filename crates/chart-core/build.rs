// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's raster backend pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups inside Skia's font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
