use super::*;

/// Recursively rebuilds one level of the generic tree as catalog nodes.
///
/// Raw html nodes are dropped at every level (once the region has been
/// sliced they are markup noise, not content), headings collapse to their
/// flattened text, and paragraphs sitting directly under a list item go
/// through the entry recognizer.
pub(crate) fn normalize(
  nodes: &[GenericNode],
  parent: Option<&GenericNode>,
) -> Vec<CatalogNode> {
  nodes
    .iter()
    .filter(|node| node.kind != NodeKind::Html)
    .map(|node| normalize_node(node, parent))
    .collect()
}

fn normalize_node(
  node: &GenericNode,
  parent: Option<&GenericNode>,
) -> CatalogNode {
  let mut normalized = CatalogNode {
    kind: node.kind,
    value: node.value.clone(),
    url: node.url.clone(),
    identifier: node.identifier.clone(),
    alt: node.alt.clone(),
    depth: node.depth,
    ordered: node.ordered,
    mark: None,
    children: None,
  };

  match node.kind {
    NodeKind::Heading => {
      normalized.value = Some(heading_text(children_of(node)));
    }
    NodeKind::Paragraph
      if parent.is_some_and(|parent| parent.kind == NodeKind::ListItem) =>
    {
      let split = entry::split_badges(children_of(node));
      normalized.mark = Some(split.mark);
      normalized.children = Some(normalize(&split.children, Some(node)));
    }
    _ => {
      if let Some(children) = &node.children {
        normalized.children = Some(normalize(children, Some(node)));
      }
    }
  }

  normalized
}

/// Collapses a heading's nested inline formatting into one plain string.
pub(crate) fn heading_text(children: &[GenericNode]) -> String {
  children.iter().map(GenericNode::plain_text).collect()
}

fn children_of(node: &GenericNode) -> &[GenericNode] {
  node.children.as_deref().unwrap_or_default()
}
