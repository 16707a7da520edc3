use std::{
    collections::BTreeMap,
    fmt::Write as _,
    path::{Path, PathBuf},
};

#[derive(Default)]
struct MigrationSource {
    up: String,
    down: String,
}

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let migrations_rs = out_dir.join("migrations.rs");
    let migrations = collect_migrations(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations"));
    std::fs::write(&migrations_rs, render_migrations(&migrations)).unwrap();
    println!("cargo::rustc-env=MIGRATIONS={}", migrations_rs.display());
}

/// Renders the migrations as a slice expression of `Migration` values, sorted
/// by name.
fn render_migrations(migrations: &BTreeMap<String, MigrationSource>) -> String {
    let mut out = String::from("&[");
    for (name, MigrationSource { up, down }) in migrations {
        write!(out, "Migration{{name:{name:?},up:{up:?},down:{down:?}}},").unwrap();
    }
    out.push(']');
    out
}

fn collect_migrations(dir: &Path) -> BTreeMap<String, MigrationSource> {
    let mut out = BTreeMap::<String, MigrationSource>::new();
    for entry in dir.read_dir().unwrap() {
        let entry = entry.unwrap();
        let file_name = entry.file_name().into_string().unwrap();
        let (name, is_up) = if let Some(name) = file_name.strip_suffix(".up.sql") {
            (name, true)
        } else if let Some(name) = file_name.strip_suffix(".down.sql") {
            (name, false)
        } else {
            continue;
        };
        let content = std::fs::read_to_string(entry.path()).unwrap();
        let source = out.entry(name.to_owned()).or_default();
        match is_up {
            true => source.up = content,
            false => source.down = content,
        }
    }
    out
}
