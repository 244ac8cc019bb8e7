fn main() {
    // Stamp the build time so `labelkit --version` can report it
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M UTC")
        .to_string();
    println!("cargo:rustc-env=LABELKIT_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
