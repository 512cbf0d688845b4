// src/ui/aria.rs
// Roles, accessible names and visibility for virtual document elements
//
// Covers the subset of HTML-AAM role mapping and accessible name
// computation that server-rendered forms, lists and landmarks need.

use super::dom::{Document, NodeData, NodeId};

/// Roles whose accessible name may come from their content
const NAME_FROM_CONTENT_ROLES: &[&str] = &[
    "button",
    "cell",
    "checkbox",
    "columnheader",
    "gridcell",
    "heading",
    "link",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "option",
    "radio",
    "row",
    "rowheader",
    "switch",
    "tab",
    "tooltip",
    "treeitem",
];

/// Elements that flow inline and so join their neighbours without a space
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "i", "kbd", "label",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Elements whose content is never rendered
const NEVER_RENDERED: &[&str] = &["head", "script", "style", "template", "noscript"];

/// Collapse whitespace runs to a single space and trim the ends
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Explicit role (first token of `role`) or the element's implicit role
pub fn role(doc: &Document, id: NodeId) -> Option<String> {
    if let Some(explicit) = doc.attr(id, "role") {
        if let Some(first) = explicit.split_whitespace().next() {
            return Some(first.to_ascii_lowercase());
        }
    }
    implicit_role(doc, id).map(str::to_string)
}

/// Role an element carries without a `role` attribute
pub fn implicit_role(doc: &Document, id: NodeId) -> Option<&'static str> {
    let tag = doc.tag(id)?;
    let role = match tag {
        "a" | "area" => {
            if doc.has_attr(id, "href") {
                "link"
            } else {
                return None;
            }
        }
        "article" => "article",
        "aside" => "complementary",
        "button" => "button",
        "dialog" => "dialog",
        "fieldset" | "details" | "optgroup" => "group",
        "footer" => {
            if within_sectioning_content(doc, id) {
                return None;
            }
            "contentinfo"
        }
        "form" => "form",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "heading",
        "header" => {
            if within_sectioning_content(doc, id) {
                return None;
            }
            "banner"
        }
        "hr" => "separator",
        "img" => match doc.attr(id, "alt") {
            Some("") => "presentation",
            _ => "img",
        },
        "input" => return input_role(doc, id),
        "li" => "listitem",
        "main" => "main",
        "nav" => "navigation",
        "ol" | "ul" | "menu" => "list",
        "option" => "option",
        "output" => "status",
        "p" => "paragraph",
        "progress" => "progressbar",
        "section" => {
            if !has_author_name(doc, id) {
                return None;
            }
            "region"
        }
        "select" => {
            let size = doc
                .attr(id, "size")
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(0);
            if doc.has_attr(id, "multiple") || size > 1 {
                "listbox"
            } else {
                "combobox"
            }
        }
        "table" => "table",
        "tbody" | "thead" | "tfoot" => "rowgroup",
        "td" => "cell",
        "textarea" => "textbox",
        "th" => "columnheader",
        "tr" => "row",
        _ => return None,
    };
    Some(role)
}

fn input_role(doc: &Document, id: NodeId) -> Option<&'static str> {
    let kind = doc
        .attr(id, "type")
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "text".to_string());
    let role = match kind.as_str() {
        "button" | "image" | "reset" | "submit" => "button",
        "checkbox" => "checkbox",
        "radio" => "radio",
        "range" => "slider",
        "number" => "spinbutton",
        "search" => {
            if doc.has_attr(id, "list") {
                "combobox"
            } else {
                "searchbox"
            }
        }
        "email" | "tel" | "text" | "url" => {
            if doc.has_attr(id, "list") {
                "combobox"
            } else {
                "textbox"
            }
        }
        _ => return None,
    };
    Some(role)
}

/// Landmarks such as `region` need a name supplied by the author
fn has_author_name(doc: &Document, id: NodeId) -> bool {
    ["aria-label", "aria-labelledby", "title"]
        .iter()
        .any(|attr| doc.attr(id, attr).is_some_and(|v| !v.trim().is_empty()))
}

fn within_sectioning_content(doc: &Document, id: NodeId) -> bool {
    doc.ancestors(id).any(|a| {
        matches!(
            doc.tag(a),
            Some("article" | "aside" | "main" | "nav" | "section")
        )
    })
}

/// Heading level from `aria-level` or the `h1`..`h6` tag
pub fn heading_level(doc: &Document, id: NodeId) -> Option<u8> {
    if let Some(level) = doc.attr(id, "aria-level").and_then(|l| l.parse().ok()) {
        return Some(level);
    }
    match doc.tag(id)? {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// True when the element or an ancestor is excluded from the accessibility tree
pub fn is_inaccessible(doc: &Document, id: NodeId) -> bool {
    std::iter::once(id)
        .chain(doc.ancestors(id))
        .any(|n| hides_subtree(doc, n))
}

fn hides_subtree(doc: &Document, id: NodeId) -> bool {
    let Some(tag) = doc.tag(id) else {
        return false;
    };
    if NEVER_RENDERED.contains(&tag) || doc.has_attr(id, "hidden") {
        return true;
    }
    if doc.attr(id, "aria-hidden") == Some("true") {
        return true;
    }
    if tag == "input" && doc.attr(id, "type") == Some("hidden") {
        return true;
    }
    match doc.attr(id, "style") {
        Some(style) => {
            let compact: String = style
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase();
            compact.contains("display:none") || compact.contains("visibility:hidden")
        }
        None => false,
    }
}

/// Accessible name of an element, whitespace-normalized
///
/// Order: `aria-labelledby`, `aria-label`, native labelling (labels,
/// `value` of button inputs, `alt`), content for roles named from
/// content, then `title` and `placeholder`.
pub fn accessible_name(doc: &Document, id: NodeId) -> String {
    normalize_whitespace(&compute_name(doc, id, true))
}

fn compute_name(doc: &Document, id: NodeId, follow_labelledby: bool) -> String {
    if !doc.is_element(id) {
        return doc.text_content(id);
    }

    if follow_labelledby {
        if let Some(ids) = doc.attr(id, "aria-labelledby") {
            let parts: Vec<String> = ids
                .split_whitespace()
                .filter_map(|ref_id| doc.element_by_id(ref_id))
                .map(|target| compute_name(doc, target, false))
                .filter(|name| !name.trim().is_empty())
                .collect();
            if !parts.is_empty() {
                return parts.join(" ");
            }
        }
    }

    if let Some(label) = doc.attr(id, "aria-label") {
        if !label.trim().is_empty() {
            return label.to_string();
        }
    }

    if let Some(native) = native_name(doc, id) {
        if !native.trim().is_empty() {
            return native;
        }
    }

    let from_content = match role(doc, id) {
        Some(r) => NAME_FROM_CONTENT_ROLES.contains(&r.as_str()),
        // Referenced or labelling elements contribute their content
        None => !follow_labelledby || doc.tag(id) == Some("label"),
    };
    if from_content {
        let content = name_from_content(doc, id);
        if !content.trim().is_empty() {
            return content;
        }
    }

    for fallback in ["title", "placeholder"] {
        if let Some(value) = doc.attr(id, fallback) {
            if !value.trim().is_empty() {
                return value.to_string();
            }
        }
    }

    String::new()
}

fn native_name(doc: &Document, id: NodeId) -> Option<String> {
    match doc.tag(id)? {
        "input" => {
            let kind = doc.attr(id, "type").unwrap_or("text").to_ascii_lowercase();
            match kind.as_str() {
                "button" => doc.attr(id, "value").map(str::to_string),
                "submit" => Some(doc.attr(id, "value").unwrap_or("Submit").to_string()),
                "reset" => Some(doc.attr(id, "value").unwrap_or("Reset").to_string()),
                "image" => doc
                    .attr(id, "alt")
                    .or_else(|| doc.attr(id, "value"))
                    .map(str::to_string),
                _ => label_text(doc, id),
            }
        }
        "textarea" | "select" | "meter" | "progress" | "output" => label_text(doc, id),
        "button" => label_text(doc, id).filter(|l| !l.trim().is_empty()),
        "img" | "area" => doc.attr(id, "alt").map(str::to_string),
        "fieldset" => first_child_named(doc, id, "legend"),
        "table" => first_child_named(doc, id, "caption"),
        _ => None,
    }
}

fn first_child_named(doc: &Document, id: NodeId, tag: &str) -> Option<String> {
    doc.children(id)
        .iter()
        .find(|c| doc.tag(**c) == Some(tag))
        .map(|c| name_from_content(doc, *c))
}

/// Text of every `<label>` associated with a labelable control
fn label_text(doc: &Document, id: NodeId) -> Option<String> {
    let mut labels: Vec<NodeId> = Vec::new();

    if let Some(dom_id) = doc.attr(id, "id") {
        labels.extend(
            doc.elements_under(doc.root())
                .filter(|n| doc.tag(*n) == Some("label") && doc.attr(*n, "for") == Some(dom_id)),
        );
    }
    if let Some(wrapping) = doc.ancestors(id).find(|a| doc.tag(*a) == Some("label")) {
        if !labels.contains(&wrapping) {
            labels.push(wrapping);
        }
    }

    if labels.is_empty() {
        return None;
    }
    let parts: Vec<String> = labels
        .into_iter()
        .map(|label| name_from_content_skipping(doc, label, Some(id)))
        .collect();
    Some(parts.join(" "))
}

fn name_from_content(doc: &Document, id: NodeId) -> String {
    name_from_content_skipping(doc, id, None)
}

/// Concatenate the text alternatives of the subtree, leaving out `skip`
fn name_from_content_skipping(doc: &Document, id: NodeId, skip: Option<NodeId>) -> String {
    let mut out = String::new();
    for child in doc.children(id) {
        let child = *child;
        if Some(child) == skip {
            continue;
        }
        match doc.data(child) {
            NodeData::Text(content) => out.push_str(content),
            NodeData::Element { tag, .. } => {
                if is_inaccessible(doc, child) {
                    continue;
                }
                let part = embedded_text(doc, child)
                    .unwrap_or_else(|| name_from_content_skipping(doc, child, skip));
                if INLINE_ELEMENTS.contains(&tag.as_str()) {
                    out.push_str(&part);
                } else {
                    out.push(' ');
                    out.push_str(&part);
                    out.push(' ');
                }
            }
        }
    }
    out
}

/// Replacement text for a child element met while collecting content
fn embedded_text(doc: &Document, id: NodeId) -> Option<String> {
    if let Some(label) = doc.attr(id, "aria-label") {
        if !label.trim().is_empty() {
            return Some(label.to_string());
        }
    }
    match doc.tag(id)? {
        "img" => Some(doc.attr(id, "alt").unwrap_or_default().to_string()),
        "input" => match input_role(doc, id) {
            Some("textbox" | "searchbox" | "spinbutton" | "combobox") => {
                Some(doc.attr(id, "value").unwrap_or_default().to_string())
            }
            Some("button") => native_name(doc, id),
            _ => Some(String::new()),
        },
        "textarea" => Some(doc.text_content(id)),
        "select" => Some(String::new()),
        _ => None,
    }
}
