// ABOUTME: Locates figcaption elements and repairs doubled caption text in place.
// ABOUTME: Serializes the document only when at least one caption changed.

use ego_tree::{NodeId, NodeRef};
use once_cell::sync::Lazy;
use scraper::node::Text;
use scraper::{Html, Node, Selector};

use crate::dedup::dedupe;
use crate::result::CaptionRepair;

static CAPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("figcaption").unwrap());

/// Captions found in one document and the repairs applied to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionScan {
    pub captions: usize,
    pub repairs: Vec<CaptionRepair>,
}

impl CaptionScan {
    /// Returns true if any caption text was rewritten.
    pub fn is_modified(&self) -> bool {
        !self.repairs.is_empty()
    }
}

/// A parsed document together with its caption scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairedDocument {
    pub scan: CaptionScan,
    /// Serialized HTML, present only when a caption was repaired.
    pub html: Option<String>,
}

/// Finds the text node holding an element's sole text content.
///
/// The node qualifies when it is the only child. A lone element child is
/// searched the same way, so `<figcaption><b>x</b></figcaption>` yields the
/// text inside `<b>`. Mixed content, comments and empty elements yield `None`.
pub fn direct_text_node(node: NodeRef<'_, Node>) -> Option<NodeRef<'_, Node>> {
    let mut current = node;
    loop {
        let mut children = current.children();
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }
        match only.value() {
            Node::Text(_) => return Some(only),
            Node::Element(_) => current = only,
            _ => return None,
        }
    }
}

/// Rewrites every doubled figcaption in `doc` and reports what changed.
///
/// Only the text node is replaced, so inline wrappers such as the `<em>` in
/// `<figcaption><em>A A</em></figcaption>` survive the repair.
pub fn repair_document(doc: &mut Html) -> CaptionScan {
    let mut scan = CaptionScan::default();
    let mut pending: Vec<NodeId> = Vec::new();

    for caption in doc.select(&CAPTION_SELECTOR) {
        scan.captions += 1;

        let Some(text_node) = direct_text_node(*caption) else {
            continue;
        };
        let Node::Text(t) = text_node.value() else {
            continue;
        };

        let text = t.text.trim();
        if let Some(part1) = dedupe(text) {
            pending.push(text_node.id());
            scan.repairs.push(CaptionRepair {
                original: text.to_string(),
                repaired: part1.to_string(),
            });
        }
    }

    for (id, repair) in pending.into_iter().zip(&scan.repairs) {
        if let Some(mut node) = doc.tree.get_mut(id) {
            *node.value() = Node::Text(Text {
                text: repair.repaired.as_str().into(),
            });
        }
    }

    scan
}

/// Parses `source`, repairs its captions and re-serializes it if needed.
pub fn repair_html(source: &str) -> RepairedDocument {
    let mut doc = Html::parse_document(source);
    let scan = repair_document(&mut doc);
    let html = if scan.is_modified() {
        Some(doc.html())
    } else {
        None
    };
    RepairedDocument { scan, html }
}
