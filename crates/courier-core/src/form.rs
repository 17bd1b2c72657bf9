//! Clearing every text entry in a (possibly nested) form.

/// A node in a form's layout tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNode {
    /// A container holding child nodes
    Layout(Vec<FormNode>),
    /// A text entry and its current text
    Entry(String),
    /// Anything else (labels, buttons); left untouched
    Other,
}

/// Empty every entry under `node`, descending into nested layouts.
pub fn clear_form(node: &mut FormNode) {
    match node {
        FormNode::Layout(children) => children.iter_mut().for_each(clear_form),
        FormNode::Entry(text) => text.clear(),
        FormNode::Other => {}
    }
}
