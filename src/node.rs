use super::*;

/// Node vocabulary shared by the parsed input tree and the normalized
/// catalog tree. Serialized names follow the mdast convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
  Blockquote,
  Break,
  Code,
  Delete,
  Emphasis,
  Heading,
  Html,
  Image,
  ImageReference,
  InlineCode,
  Link,
  List,
  ListItem,
  Paragraph,
  Root,
  Strong,
  Text,
  ThematicBreak,
}

impl NodeKind {
  pub(crate) fn is_inline(self) -> bool {
    matches!(
      self,
      Self::Break
        | Self::Delete
        | Self::Emphasis
        | Self::Image
        | Self::ImageReference
        | Self::InlineCode
        | Self::Link
        | Self::Strong
        | Self::Text
    )
  }
}

/// Byte range of a node in the source text; discarded during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
  pub(crate) start: usize,
  pub(crate) end: usize,
}

/// One node of the generic markdown tree produced by the parser.
///
/// A structurally-checked union: the `kind` tag says which of the optional
/// fields are meaningful, and code that walks the tree matches on `kind`
/// with an explicit pass-through default.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GenericNode {
  pub(crate) kind: NodeKind,
  pub(crate) value: Option<String>,
  pub(crate) url: Option<String>,
  pub(crate) identifier: Option<String>,
  pub(crate) alt: Option<String>,
  pub(crate) depth: Option<u8>,
  pub(crate) ordered: Option<bool>,
  pub(crate) checked: Option<bool>,
  pub(crate) children: Option<Vec<GenericNode>>,
  pub(crate) position: Option<Span>,
}

impl GenericNode {
  pub(crate) fn new(kind: NodeKind) -> Self {
    Self {
      kind,
      value: None,
      url: None,
      identifier: None,
      alt: None,
      depth: None,
      ordered: None,
      checked: None,
      children: None,
      position: None,
    }
  }

  pub(crate) fn text(value: &str) -> Self {
    Self {
      value: Some(value.to_string()),
      ..Self::new(NodeKind::Text)
    }
  }

  /// In-order concatenation of every `value` in this subtree.
  pub(crate) fn plain_text(&self) -> String {
    let mut text = String::new();

    if let Some(value) = &self.value {
      text.push_str(value);
    }

    if let Some(children) = &self.children {
      for child in children {
        text.push_str(&child.plain_text());
      }
    }

    text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_text_recurses_through_formatting() {
    let node = GenericNode {
      children: Some(vec![
        GenericNode::text("The "),
        GenericNode {
          children: Some(vec![GenericNode::text("best")]),
          ..GenericNode::new(NodeKind::Emphasis)
        },
        GenericNode::text(" editors"),
      ]),
      ..GenericNode::new(NodeKind::Heading)
    };

    assert_eq!(node.plain_text(), "The best editors");
  }

  #[test]
  fn plain_text_of_leaf_is_its_value() {
    assert_eq!(GenericNode::text("Atom").plain_text(), "Atom");
    assert_eq!(GenericNode::new(NodeKind::Break).plain_text(), "");
  }
}
