mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Check whether `id` names `root` or one of its descendants.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Check whether `id` is in the tree with no hidden element on the way down.
pub fn is_rendered(root: &Element, id: &str) -> bool {
    if root.hidden {
        return false;
    }
    root.id == id || root.content.children().iter().any(|c| is_rendered(c, id))
}

/// Collect the ids from `root` down to the element named `id`, inclusive.
///
/// Returns an empty path when `id` is not part of the tree.
pub fn path_to(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}
