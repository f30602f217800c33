use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Toast notification center"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("toastkit"));
}

#[test]
fn test_markup_prints_visible_toast() {
    cargo_bin_cmd!()
        .args(["markup", "success", "Saved", "All changes written"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"class="toast-container" role="region""#))
        .stdout(predicate::str::contains(r#"aria-live="polite""#))
        .stdout(predicate::str::contains(r#"class="toast toast-success" role="alert""#))
        .stdout(predicate::str::contains("bx-check-circle"))
        .stdout(predicate::str::contains(
            r#"<div class="toast-title">Saved</div><div class="toast-message">All changes written</div>"#,
        ))
        .stdout(predicate::str::contains("opacity: 1; transform: translateX(0)"));
}

#[test]
fn test_markup_escapes_title_and_message() {
    cargo_bin_cmd!()
        .args([
            "markup",
            "error",
            "<script>alert(1)</script>",
            "<img src=x onerror=alert(1)>",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;alert(1)&lt;/script&gt;"))
        .stdout(predicate::str::contains("&lt;img src=x onerror=alert(1)&gt;"))
        .stdout(predicate::str::contains("<script>").not())
        .stdout(predicate::str::contains("<img").not());
}

#[test]
fn test_markup_without_message_omits_block() {
    cargo_bin_cmd!()
        .args(["markup", "info", "Title only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toast-title"))
        .stdout(predicate::str::contains("toast-message").not());
}

#[test]
fn test_markup_unknown_kind_renders_without_icon() {
    cargo_bin_cmd!()
        .args(["markup", "celebration", "Party"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toast toast-celebration"))
        .stdout(predicate::str::contains(r#"<i class="bx toast-icon"></i>"#));
}

#[test]
fn test_markup_settle_removes_timed_toast() {
    cargo_bin_cmd!()
        .args(["markup", "warning", "Gone soon", "--settle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"aria-live="polite"></div></body>"#))
        .stdout(predicate::str::contains("Gone soon").not());
}

#[test]
fn test_markup_settle_keeps_persistent_toast() {
    cargo_bin_cmd!()
        .args(["markup", "info", "Pinned", "--duration-ms", "0", "--settle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pinned"))
        .stdout(predicate::str::contains("opacity: 1"));
}

#[test]
fn test_markup_requires_title() {
    cargo_bin_cmd!()
        .args(["markup", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TITLE"));
}
