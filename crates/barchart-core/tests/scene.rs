// File: crates/barchart-core/tests/scene.rs
// Purpose: Element tree edits and SVG serialization.

use barchart_core::scene;
use barchart_core::svg;

#[test]
fn select_and_remove_by_class() {
    let root = scene::element("svg");
    let g = scene::append(&root, "g");
    scene::append(&g, "g").borrow_mut().set_attr("class", "x axis");
    scene::append(&g, "g").borrow_mut().set_attr("class", "y axis");
    let keep = scene::append(&g, "rect");
    keep.borrow_mut().set_attr("class", "bar");

    assert_eq!(scene::count(&root, scene::class("axis")), 2);
    assert_eq!(scene::remove_all(&root, scene::class("axis")), 2);
    assert_eq!(scene::count(&root, scene::class("axis")), 0);
    assert_eq!(scene::count(&root, scene::class("bar")), 1);
    assert!(!scene::class("ax")(&*g.borrow()));
}

#[test]
fn attributes_replace_in_place() {
    let node = scene::element("rect");
    node.borrow_mut().set_attr("x", 1).set_attr("y", 2).set_attr("x", 3);
    let n = node.borrow();
    assert_eq!(n.attr("x"), Some("3"));
    let names: Vec<_> = n.attrs().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn detach_by_identity() {
    let root = scene::element("g");
    let a = scene::append(&root, "rect");
    let b = scene::append(&root, "rect");
    assert!(scene::detach(&root, &a));
    assert!(!scene::detach(&root, &a));
    assert_eq!(root.borrow().child_count(), 1);
    assert!(std::rc::Rc::ptr_eq(&root.borrow().children()[0], &b));
}

#[test]
fn serializes_with_escaping() {
    let root = scene::element("svg");
    root.borrow_mut().set_attr("width", 10);
    let text = scene::append(&root, "text");
    text.borrow_mut().set_style("text-anchor", "end").set_text("R&D <\"x\">");
    assert_eq!(
        svg::to_string(&root),
        "<svg width=\"10\"><text style=\"text-anchor: end;\">R&amp;D &lt;&quot;x&quot;&gt;</text></svg>"
    );
    let doc = svg::to_document(&root);
    assert!(doc.starts_with("<?xml"));
    assert!(doc.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\">"));
}
