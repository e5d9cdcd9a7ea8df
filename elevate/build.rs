const PRETTY_ENV: &str = "RUST_LOG_PRETTY";

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed={PRETTY_ENV}");
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");

    let pretty = std::env::var(PRETTY_ENV).is_ok_and(|value| value == "1");
    if pretty {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
