//! In-memory collaborators.
//!
//! [`MemorySurface`] is a tiny element tree that understands the selector
//! subset the site uses (tag, `.class` and `#id` compounds, selector lists
//! and the `>` child combinator). [`MemoryStore`] keeps preferences in a map
//! and can be told to fail like disabled browser storage. [`ManualScheduler`]
//! runs intervals in virtual time so autoplay can be stepped
//! deterministically.
//!
//! All three are cheap handles over shared state: cloning one and handing
//! the clone to a component lets the caller keep inspecting what the
//! component did.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::SiteError;
use crate::store::PreferenceStore;
use crate::surface::RenderingSurface;
use crate::timer::{Scheduler, TimerHandle};

// =============================================================
// Surface
// =============================================================

/// Handle to one element in a [`MemorySurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default, Clone)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Debug)]
struct MemoryDom {
    nodes: Vec<Element>,
    root: NodeId,
    body: Option<NodeId>,
}

impl MemoryDom {
    fn push(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.get(id).and_then(|el| el.parent);
        }
        false
    }

    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.get(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.get(child).and_then(|el| el.parent) else {
            return;
        };
        if let Some(parent_el) = self.get_mut(parent) {
            parent_el.children.retain(|c| *c != child);
        }
    }

    fn copy_subtree(&mut self, node: NodeId) -> Option<NodeId> {
        let mut copy = self.get(node)?.clone();
        let children = std::mem::take(&mut copy.children);
        copy.parent = None;
        let new_id = self.push(copy);
        for child in children {
            if let Some(child_copy) = self.copy_subtree(child) {
                if let Some(el) = self.get_mut(child_copy) {
                    el.parent = Some(new_id);
                }
                if let Some(el) = self.get_mut(new_id) {
                    el.children.push(child_copy);
                }
            }
        }
        Some(new_id)
    }

    fn matches_selector_list(&self, node: NodeId, list: &str) -> bool {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|complex| self.matches_complex(node, complex))
    }

    fn matches_complex(&self, node: NodeId, complex: &str) -> bool {
        let mut current = Some(node);
        for (i, compound) in complex.rsplit('>').map(str::trim).enumerate() {
            if i > 0 {
                current = current.and_then(|id| self.get(id)).and_then(|el| el.parent);
            }
            let Some(el) = current.and_then(|id| self.get(id)) else {
                return false;
            };
            if !matches_compound(el, compound) {
                return false;
            }
        }
        true
    }
}

fn matches_compound(el: &Element, compound: &str) -> bool {
    if compound.is_empty() {
        return false;
    }
    let tag_end = compound.find(['.', '#']).unwrap_or(compound.len());
    let tag = &compound[..tag_end];
    if !tag.is_empty() && tag != "*" && !tag.eq_ignore_ascii_case(&el.tag) {
        return false;
    }

    let mut rest = &compound[tag_end..];
    while let Some(sigil) = rest.chars().next() {
        let body = &rest[sigil.len_utf8()..];
        let end = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..end];
        let matched = match sigil {
            '.' => el.classes.contains(name),
            '#' => el.id.as_deref() == Some(name),
            _ => false,
        };
        if name.is_empty() || !matched {
            return false;
        }
        rest = &body[end..];
    }
    true
}

/// In-memory page: an `<html>` root holding a `<body>`.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    dom: Rc<RefCell<MemoryDom>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Empty page with a body.
    #[must_use]
    pub fn new() -> Self {
        let surface = Self::without_body();
        let root = surface.root();
        let body = surface.add(root, "body", None, "");
        surface.dom.borrow_mut().body = Some(body);
        surface
    }

    /// Page with only the `<html>` root, for exercising missing-body paths.
    #[must_use]
    pub fn without_body() -> Self {
        let root = Element { tag: "html".to_owned(), ..Element::default() };
        let dom = MemoryDom { nodes: vec![root], root: NodeId(0), body: None };
        Self { dom: Rc::new(RefCell::new(dom)) }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.dom.borrow().root
    }

    /// Append a new element under `parent` and return it.
    pub fn add(&self, parent: NodeId, tag: &str, id: Option<&str>, classes: &str) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let element = Element {
            tag: tag.to_owned(),
            id: id.map(str::to_owned),
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            parent: Some(parent),
            ..Element::default()
        };
        let node = dom.push(element);
        if let Some(el) = dom.get_mut(parent) {
            el.children.push(node);
        }
        node
    }

    /// Append a new element under the body. Falls back to the root when the page has no body.
    pub fn add_to_body(&self, tag: &str, id: Option<&str>, classes: &str) -> NodeId {
        let parent = {
            let dom = self.dom.borrow();
            dom.body.unwrap_or(dom.root)
        };
        self.add(parent, tag, id, classes)
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.dom.borrow().get(node).map(|el| el.tag.clone())
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.dom
            .borrow()
            .get(node)
            .map_or_else(Vec::new, |el| el.classes.iter().cloned().collect())
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.dom.borrow().get(node).map_or_else(String::new, |el| el.text.clone())
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.dom.borrow().get(node).and_then(|el| el.styles.get(property).cloned())
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.dom.borrow().get(node).and_then(|el| el.attributes.get(name).cloned())
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.dom.borrow().get(node).and_then(|el| el.parent)
    }

    /// Number of elements ever created, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.dom.borrow().nodes.len()
    }
}

impl RenderingSurface for MemorySurface {
    type Node = NodeId;

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let dom = self.dom.borrow();
        dom.document_order()
            .into_iter()
            .find(|node| dom.is_attached(*node) && dom.get(*node).is_some_and(|el| el.id.as_deref() == Some(id)))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        dom.document_order()
            .into_iter()
            .filter(|node| dom.matches_selector_list(*node, selector))
            .collect()
    }

    fn body(&self) -> Option<NodeId> {
        self.dom.borrow().body
    }

    fn create(&mut self, tag: &str, classes: &str) -> Option<NodeId> {
        let element = Element {
            tag: tag.to_owned(),
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            ..Element::default()
        };
        Some(self.dom.borrow_mut().push(element))
    }

    fn append(&mut self, parent: &NodeId, child: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        if dom.get(*parent).is_none() || dom.get(*child).is_none() || parent == child {
            return;
        }
        dom.detach(*child);
        if let Some(el) = dom.get_mut(*child) {
            el.parent = Some(*parent);
        }
        if let Some(el) = dom.get_mut(*parent) {
            el.children.push(*child);
        }
    }

    fn clone_deep(&mut self, node: &NodeId) -> Option<NodeId> {
        let mut dom = self.dom.borrow_mut();
        let copy = dom.copy_subtree(*node)?;
        // Ids must stay unique within the page.
        if let Some(el) = dom.get_mut(copy) {
            el.id = None;
            el.attributes.remove("id");
        }
        Some(copy)
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.dom.borrow().get(*node).map_or_else(Vec::new, |el| el.children.clone())
    }

    fn set_marker(&mut self, node: &NodeId, marker: &str, on: bool) {
        if let Some(el) = self.dom.borrow_mut().get_mut(*node) {
            if on {
                el.classes.insert(marker.to_owned());
            } else {
                el.classes.remove(marker);
            }
        }
    }

    fn has_marker(&self, node: &NodeId, marker: &str) -> bool {
        self.dom.borrow().get(*node).is_some_and(|el| el.classes.contains(marker))
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let mut dom = self.dom.borrow_mut();
        let Some(el) = dom.get_mut(*node) else {
            return;
        };
        el.text = text.to_owned();
        let orphans = std::mem::take(&mut el.children);
        for child in orphans {
            if let Some(child_el) = dom.get_mut(child) {
                child_el.parent = None;
            }
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        if let Some(el) = self.dom.borrow_mut().get_mut(*node) {
            el.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        let Some(el) = dom.get_mut(*node) else {
            return;
        };
        match name {
            "id" => el.id = Some(value.to_owned()),
            "class" => el.classes = value.split_whitespace().map(str::to_owned).collect(),
            _ => {}
        }
        el.attributes.insert(name.to_owned(), value.to_owned());
    }
}

// =============================================================
// Store
// =============================================================

/// Session-only preference store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
    reads_fail: bool,
    writes_fail: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value, as if persisted by an earlier visit.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose reads and writes all fail, like disabled browser storage.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { reads_fail: true, writes_fail: true, ..Self::default() }
    }

    /// Store that reads fine but rejects writes, like a full quota.
    #[must_use]
    pub fn read_only(self) -> Self {
        Self { writes_fail: true, ..self }
    }

    /// Stored value, bypassing failure simulation.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        if self.reads_fail {
            return Err(SiteError::StorageUnavailable("memory store reads disabled".to_owned()));
        }
        Ok(self.value(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        if self.writes_fail {
            return Err(SiteError::StorageUnavailable("memory store writes disabled".to_owned()));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// Scheduler
// =============================================================

#[derive(Debug, Clone, Copy)]
struct VirtualInterval {
    period_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Default)]
struct VirtualClock {
    now_ms: u64,
    next_id: u64,
    started: u64,
    intervals: BTreeMap<TimerHandle, VirtualInterval>,
}

/// Virtual-time scheduler. Time only moves when the caller runs it.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Intervals currently running.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.clock.borrow().intervals.len()
    }

    /// Intervals ever started.
    #[must_use]
    pub fn started_count(&self) -> u64 {
        self.clock.borrow().started
    }

    /// Fire the earliest interval due at or before `until_ms`.
    ///
    /// Moves the clock to the firing time and reschedules the interval one
    /// period later. Returns `None` once nothing is due.
    pub fn fire_next(&self, until_ms: u64) -> Option<TimerHandle> {
        let mut clock = self.clock.borrow_mut();
        let (handle, due) = clock
            .intervals
            .iter()
            .map(|(handle, interval)| (*handle, interval.next_due_ms))
            .filter(|(_, due)| *due <= until_ms)
            .min_by_key(|(handle, due)| (*due, *handle))?;
        clock.now_ms = clock.now_ms.max(due);
        if let Some(interval) = clock.intervals.get_mut(&handle) {
            interval.next_due_ms += interval.period_ms;
        }
        Some(handle)
    }

    /// Advance the clock by `elapsed_ms`, calling `on_fire` for every firing in order.
    ///
    /// The callback may start or cancel intervals; changes take effect for
    /// the remaining span.
    pub fn run_for(&self, elapsed_ms: u64, mut on_fire: impl FnMut(TimerHandle)) {
        let until = self.now_ms() + elapsed_ms;
        while let Some(handle) = self.fire_next(until) {
            on_fire(handle);
        }
        let mut clock = self.clock.borrow_mut();
        clock.now_ms = clock.now_ms.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn start_interval(&mut self, period_ms: u32) -> TimerHandle {
        let mut clock = self.clock.borrow_mut();
        let handle = TimerHandle(clock.next_id);
        clock.next_id += 1;
        clock.started += 1;
        let period_ms = u64::from(period_ms.max(1));
        let next_due_ms = clock.now_ms + period_ms;
        clock.intervals.insert(handle, VirtualInterval { period_ms, next_due_ms });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.clock.borrow_mut().intervals.remove(&handle);
    }
}
