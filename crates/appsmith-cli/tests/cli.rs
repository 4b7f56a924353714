//! End-to-end tests for the `appsmith` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn appsmith() -> Command {
    let mut cmd = Command::cargo_bin("appsmith").unwrap();
    // Keep runs hermetic: no user config file, no colour.
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ── basic surface ─────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    appsmith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("modify"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    appsmith()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    appsmith().assert().failure().code(2);
}

#[test]
fn completions_bash_emits_script() {
    appsmith()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appsmith"));
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn create_generates_application_skeleton() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "my-shop", "-e", "products", "--yes"])
        .assert()
        .success();

    let app = temp.path().join("my_shop");
    assert!(app.join("__init__.py").exists());
    assert!(app.join("app.py").exists());
    assert!(app.join(".appsmith.toml").exists());
    assert!(app.join("endpoints/products.py").exists());
}

#[test]
fn create_normalizes_awkward_names() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "My App!", "--yes"])
        .assert()
        .success();

    // "My App!" normalizes to the my_app_ package.
    assert!(temp.path().join("my_app_/__init__.py").exists());
}

#[test]
fn create_defaults_to_an_endpoint_named_after_the_app() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "--yes"])
        .assert()
        .success();

    assert!(temp.path().join("shop/endpoints/shop.py").exists());
}

#[test]
fn create_with_openapi_type_adds_spec_document() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "-t", "openapi", "--yes"])
        .assert()
        .success();

    assert!(temp.path().join("shop/openapi.yaml").exists());
}

#[test]
fn create_with_database_module_renders_module_tree() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "-m", "database", "--yes"])
        .assert()
        .success();

    let module = temp.path().join("shop/modules/database");
    assert!(module.join("__init__.py").exists());
    // The built-in database hook supplies a URL, enabling session wiring.
    assert!(module.join("session.py").exists());
}

#[test]
fn create_rejects_symbol_only_name() {
    appsmith()
        .args(["create", "!!!", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid application name"));
}

#[test]
fn create_rejects_reserved_endpoint_name() {
    appsmith()
        .args(["create", "shop", "-e", "application", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn create_inside_generated_application_is_refused() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "--yes"])
        .assert()
        .success();

    // The working directory now contains a scaffolded 'shop', so a second
    // create with the same name trips the safety rule.
    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Safety check failed"));
}

// ── modify ────────────────────────────────────────────────────────────────────

#[test]
fn modify_adds_endpoint_and_preserves_edits() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "-e", "products", "--yes"])
        .assert()
        .success();

    // Simulate a user edit to an existing endpoint.
    let products = temp.path().join("shop/endpoints/products.py");
    std::fs::write(&products, "# hand edited\n").unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["modify", "shop", "-e", "products", "-e", "orders"])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&products).unwrap(), "# hand edited\n");
    assert!(temp.path().join("shop/endpoints/orders.py").exists());
}

#[test]
fn modify_without_existing_application_fails() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["modify", "ghost", "-e", "orders"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Safety check failed"));
}

#[test]
fn modify_without_flags_defaults_to_application_endpoint() {
    let temp = TempDir::new().unwrap();

    appsmith()
        .current_dir(temp.path())
        .args(["create", "shop", "-e", "products", "--yes"])
        .assert()
        .success();

    appsmith()
        .current_dir(temp.path())
        .args(["modify", "shop"])
        .assert()
        .success();

    assert!(temp.path().join("shop/endpoints/shop.py").exists());
}

// ── environment conventions ───────────────────────────────────────────────────

#[test]
fn no_color_env_presence_value_is_accepted() {
    // no-color.org convention: NO_COLOR=1 means "on", not a bool literal.
    appsmith()
        .env("NO_COLOR", "1")
        .args(["completions", "bash"])
        .assert()
        .success();
}

#[test]
fn help_exits_zero_even_with_no_color_set() {
    appsmith()
        .env("NO_COLOR", "1")
        .arg("--help")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Usage"));
}
