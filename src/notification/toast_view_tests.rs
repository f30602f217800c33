//! Tests for toast_view

use super::*;
use insta::assert_snapshot;

const CLOSE: &str = "关闭通知";

fn build(doc: &mut Document, kind: &str, title: &str, message: &str) -> ToastNodes {
    build_toast(
        doc,
        Handle::from_parts(1700000000000, 7),
        &ToastKind::parse(kind),
        title,
        message,
        CLOSE,
        Duration::from_millis(300),
    )
}

#[test]
fn snapshot_success_toast_markup() {
    let mut doc = Document::new();
    let nodes = build(&mut doc, "success", "推荐生成成功！", "已为您找到8个最佳会面点");

    assert_snapshot!(
        doc.to_markup(nodes.root),
        @r#"<div class="toast toast-success" role="alert" data-toast-handle="1700000000000-7" style="opacity: 0; transform: translateX(100%); transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1)"><i class="bx bx-check-circle toast-icon"></i><div class="toast-content"><div class="toast-title">推荐生成成功！</div><div class="toast-message">已为您找到8个最佳会面点</div></div><button class="toast-close" type="button" aria-label="关闭通知"><i class="bx bx-x"></i></button></div>"#
    );
}

#[test]
fn test_container_is_polite_live_region() {
    let mut doc = Document::new();
    let container = build_container(&mut doc, "通知消息");
    let el = doc.element(container).unwrap();

    assert!(el.has_class(CONTAINER_CLASS));
    assert_eq!(el.attribute("role"), Some("region"));
    assert_eq!(el.attribute("aria-label"), Some("通知消息"));
    assert_eq!(el.attribute("aria-live"), Some("polite"));
    assert!(!doc.is_attached(container));
}

#[test]
fn test_empty_message_is_omitted() {
    let mut doc = Document::new();
    let nodes = build(&mut doc, "info", "Only a title", "");

    assert!(doc.find_by_class(nodes.root, "toast-message").is_empty());
    assert_eq!(doc.find_by_class(nodes.root, "toast-title").len(), 1);
}

#[test]
fn test_unknown_kind_has_no_icon_class() {
    let mut doc = Document::new();
    let nodes = build(&mut doc, "mystery", "Title", "");

    let root = doc.element(nodes.root).unwrap();
    assert!(root.has_class("toast-mystery"));
    let icons = doc.find_by_class(nodes.root, "toast-icon");
    assert_eq!(icons.len(), 1);
    let icon = doc.element(icons[0]).unwrap();
    assert_eq!(icon.classes(), &["bx".to_string(), "toast-icon".to_string()]);
}

#[test]
fn test_markup_in_title_stays_text() {
    let mut doc = Document::new();
    let nodes = build(
        &mut doc,
        "error",
        "<script>alert(1)</script>",
        "<b onclick=\"x()\">bold</b>",
    );

    assert!(doc.find_by_tag(nodes.root, "script").is_empty());
    assert!(doc.find_by_tag(nodes.root, "b").is_empty());
    let title = doc.find_by_class(nodes.root, "toast-title")[0];
    assert_eq!(doc.text_content(title), "<script>alert(1)</script>");

    let markup = doc.to_markup(nodes.root);
    assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(markup.contains("&lt;b onclick=\"x()\"&gt;bold&lt;/b&gt;"));
    assert!(!markup.contains("<script>"));
}

#[test]
fn test_close_button_is_labelled_and_inside_root() {
    let mut doc = Document::new();
    let nodes = build(&mut doc, "warning", "Careful", "");

    let button = doc.element(nodes.close_button).unwrap();
    assert_eq!(button.tag(), "button");
    assert_eq!(button.attribute("aria-label"), Some(CLOSE));
    assert!(doc.contains(nodes.root, nodes.close_button));
}

#[test]
fn test_hidden_and_shown_styles() {
    let mut el = Element::new("div");
    apply_hidden(&mut el);
    assert_eq!(el.style("opacity"), Some("0"));
    assert_eq!(el.style("transform"), Some("translateX(100%)"));

    apply_shown(&mut el);
    assert_eq!(el.style("opacity"), Some("1"));
    assert_eq!(el.style("transform"), Some("translateX(0)"));
}

#[test]
fn test_transition_follows_configured_length() {
    assert_eq!(
        transition_value(Duration::from_millis(150)),
        "all 0.15s cubic-bezier(0.4, 0, 0.2, 1)"
    );
}
