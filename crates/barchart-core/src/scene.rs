// File: crates/barchart-core/src/scene.rs
// Summary: Retained element tree the visuals draw into (the SVG/DOM surface).
// Notes:
// - Nodes are shared through `Rc<RefCell<_>>`: the host keeps the mounting element,
//   a visual keeps handles to the elements it appended. Everything runs on the host's
//   single thread, so no locking is involved.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an element.
pub type NodeRef = Rc<RefCell<Node>>;

#[derive(Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeRef>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        lookup(&self.attrs, name)
    }

    pub fn attrs(&self) -> &[(String, String)] { &self.attrs }

    /// Set (or replace) an attribute, keeping first-insertion order.
    pub fn set_attr(&mut self, name: &str, value: impl ToString) -> &mut Self {
        upsert(&mut self.attrs, name, value.to_string());
        self
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        lookup(&self.styles, name)
    }

    pub fn styles(&self) -> &[(String, String)] { &self.styles }

    pub fn set_style(&mut self, name: &str, value: impl ToString) -> &mut Self {
        upsert(&mut self.styles, name, value.to_string());
        self
    }

    pub fn text(&self) -> Option<&str> { self.text.as_deref() }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn children(&self) -> &[NodeRef] { &self.children }

    pub fn child_count(&self) -> usize { self.children.len() }

    /// True if the whitespace-separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some(slot) => slot.1 = value,
        None => pairs.push((name.to_string(), value)),
    }
}

/// Create a detached element.
pub fn element(tag: &str) -> NodeRef {
    Rc::new(RefCell::new(Node::new(tag)))
}

/// Append a new `tag` child to `parent` and return its handle.
pub fn append(parent: &NodeRef, tag: &str) -> NodeRef {
    let child = element(tag);
    parent.borrow_mut().children.push(Rc::clone(&child));
    child
}

/// Attach an existing element as the last child of `parent`.
pub fn append_node(parent: &NodeRef, child: NodeRef) {
    parent.borrow_mut().children.push(child);
}

/// Detach `child` (by identity) from `parent`. Returns whether it was present.
pub fn detach(parent: &NodeRef, child: &NodeRef) -> bool {
    let mut p = parent.borrow_mut();
    let before = p.children.len();
    p.children.retain(|c| !Rc::ptr_eq(c, child));
    before != p.children.len()
}

/// All descendants of `root` (excluding `root`) matching `pred`, in document order.
pub fn select_all(root: &NodeRef, pred: impl Fn(&Node) -> bool) -> Vec<NodeRef> {
    let mut out = Vec::new();
    collect(root, &pred, &mut out);
    out
}

fn collect(node: &NodeRef, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<NodeRef>) {
    for child in node.borrow().children.iter() {
        if pred(&*child.borrow()) {
            out.push(Rc::clone(child));
        }
        collect(child, pred, out);
    }
}

/// Number of descendants of `root` matching `pred`.
pub fn count(root: &NodeRef, pred: impl Fn(&Node) -> bool) -> usize {
    select_all(root, pred).len()
}

/// Remove every descendant of `root` matching `pred` (with its subtree).
/// Returns how many matching elements were removed at the top of their subtree.
pub fn remove_all(root: &NodeRef, pred: impl Fn(&Node) -> bool) -> usize {
    prune(root, &pred)
}

fn prune(node: &NodeRef, pred: &dyn Fn(&Node) -> bool) -> usize {
    let mut removed = 0;
    let kept = {
        let mut n = node.borrow_mut();
        let before = n.children.len();
        n.children.retain(|c| !pred(&*c.borrow()));
        removed += before - n.children.len();
        n.children.clone()
    };
    for child in &kept {
        removed += prune(child, pred);
    }
    removed
}

/// Predicate matching elements carrying `class`.
pub fn class(class: &str) -> impl Fn(&Node) -> bool + '_ {
    move |n: &Node| n.has_class(class)
}

/// Predicate matching elements with tag `tag`.
pub fn tag(tag: &str) -> impl Fn(&Node) -> bool + '_ {
    move |n: &Node| n.tag == tag
}
