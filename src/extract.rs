use super::*;

/// What the name segment of an entry contributes to its mark.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EntryName {
  pub(crate) title: String,
  pub(crate) url: Option<String>,
  pub(crate) deleted: bool,
}

/// Walks the candidate name node (a link or plain text, possibly wrapped in
/// a strikethrough) depth-first in pre-order, concatenating every text value
/// into the title, capturing the first URL encountered, and flagging the
/// entry deleted if any visited node is a strikethrough.
pub(crate) fn entry_name(node: &GenericNode) -> EntryName {
  collect(node, EntryName::default())
}

fn collect(node: &GenericNode, mut name: EntryName) -> EntryName {
  if let Some(value) = &node.value {
    name.title.push_str(value);
  }

  // The node's own URL wins over any nested sub-link.
  if name.url.is_none()
    && let Some(url) = &node.url
  {
    name.url = Some(url.clone());
  }

  if node.kind == NodeKind::Delete {
    name.deleted = true;
  }

  if let Some(children) = &node.children {
    for child in children {
      name = collect(child, name);
    }
  }

  name
}
