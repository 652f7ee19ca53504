//! [`RenderingSurface`] over the live document.
//!
//! Browser calls that can throw are logged at debug level and otherwise
//! ignored; the trait's mutators are best-effort by contract.

use effects::surface::RenderingSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

fn log_js_error(op: &str, err: &JsValue) {
    log::debug!("dom: {op} failed: {err:?}");
}

/// Handle to the page document. Cheap to clone.
#[derive(Clone, Debug)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl RenderingSurface for DomSurface {
    type Node = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("dom: bad selector `{selector}`: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create(&mut self, tag: &str, classes: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(element) => {
                element.set_class_name(classes);
                Some(element)
            }
            Err(err) => {
                log_js_error("createElement", &err);
                None
            }
        }
    }

    fn append(&mut self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            log_js_error("appendChild", &err);
        }
    }

    fn clone_deep(&mut self, node: &Element) -> Option<Element> {
        let copy = match node.clone_node_with_deep(true) {
            Ok(copy) => copy,
            Err(err) => {
                log_js_error("cloneNode", &err);
                return None;
            }
        };
        let element = copy.dyn_into::<Element>().ok()?;
        // Ids must stay unique within the page.
        if let Err(err) = element.remove_attribute("id") {
            log_js_error("removeAttribute", &err);
        }
        Some(element)
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let children = node.children();
        (0..children.length()).filter_map(|i| children.item(i)).collect()
    }

    fn set_marker(&mut self, node: &Element, marker: &str, on: bool) {
        if let Err(err) = node.class_list().toggle_with_force(marker, on) {
            log_js_error("classList.toggle", &err);
        }
    }

    fn has_marker(&self, node: &Element, marker: &str) -> bool {
        node.class_list().contains(marker)
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log_js_error("style.setProperty", &err);
        }
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            log_js_error("setAttribute", &err);
        }
    }
}
