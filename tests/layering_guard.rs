//! Layering guardrails to keep the generator crate independent of the runtime support crate.
//!
//! Generated code depends on `persistgen_runtime`; the generator (`persistgen` crate) never does. The runtime
//! crate depends on the generator through the proc-macro host, so the reverse edge would be a cycle.
//! This test scans the root `Cargo.toml` and fails if `persistgen_runtime` appears in `[dependencies]`.

#[test]
fn generator_does_not_depend_on_runtime_in_main_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if line_no_comment.starts_with("persistgen_runtime") || line_no_comment.starts_with("persistgen_derive") {
            panic!("`{line_no_comment}` must not appear in the generator's [dependencies]");
        }
    }
}

#[test]
fn runtime_is_a_workspace_member() {
    let manifest = include_str!("../Cargo.toml");
    assert!(manifest.contains("\"crates/persistgen_runtime\""));
    assert!(manifest.contains("\"crates/persistgen_derive\""));
}
