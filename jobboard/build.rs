const PRETTY_LOGS_VAR: &str = "JOBBOARD_PRETTY_LOGS";

fn main() {
    println!("cargo::rustc-check-cfg=cfg(pretty_logs)");
    println!("cargo::rerun-if-env-changed={PRETTY_LOGS_VAR}");

    let enabled = std::env::var(PRETTY_LOGS_VAR)
        .is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes"));
    if enabled {
        println!("cargo::rustc-cfg=pretty_logs");
    }
}
