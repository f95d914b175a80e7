use super::*;

/// The normalized catalog produced by the extractor.
///
/// Serializes transparently as the JSON array of top-level nodes found
/// between the document's sentinel markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
  pub nodes: Vec<CatalogNode>,
}

impl Catalog {
  /// Marks of every recognized entry, in document order.
  pub fn entries(&self) -> Vec<&EntryMark> {
    fn collect<'a>(nodes: &'a [CatalogNode], marks: &mut Vec<&'a EntryMark>) {
      for node in nodes {
        if let Some(mark) = &node.mark
          && (!mark.title.is_empty() || mark.url.is_some())
        {
          marks.push(mark);
        }

        if let Some(children) = &node.children {
          collect(children, marks);
        }
      }
    }

    let mut marks = Vec::new();

    collect(&self.nodes, &mut marks);

    marks
  }
}

/// A normalized tree node. Reconstructed from the generic markdown tree:
/// source positions and list-item checkbox metadata are never copied over,
/// headings carry their flattened text in `value` instead of children, and
/// recognized entry paragraphs carry a `mark`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogNode {
  #[serde(rename = "type")]
  pub kind: NodeKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub identifier: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub alt: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub depth: Option<u8>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ordered: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mark: Option<EntryMark>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<CatalogNode>>,
}

/// Domain metadata lifted out of a recognized entry paragraph.
///
/// A paragraph that sits directly under a list item but does not match the
/// entry shape still carries a mark, with every field in its default state;
/// an empty mark is not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryMark {
  #[serde(skip_serializing_if = "String::is_empty")]
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub deleted: bool,
  pub icons: Vec<IconBadge>,
}

/// A classified badge image. `url` is the enclosing link's URL when the
/// badge is link-wrapped, otherwise the image's own resolved location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconBadge {
  #[serde(rename = "type")]
  pub kind: IconKind,
  pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
  Freeware,
  Oss,
  AppStore,
  AwesomeList,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn leaf(kind: NodeKind) -> CatalogNode {
    CatalogNode {
      kind,
      value: None,
      url: None,
      identifier: None,
      alt: None,
      depth: None,
      ordered: None,
      mark: None,
      children: None,
    }
  }

  #[test]
  fn empty_mark_serializes_to_icons_only() {
    let mark = EntryMark::default();

    assert_eq!(
      serde_json::to_value(&mark).unwrap(),
      serde_json::json!({ "icons": [] })
    );
  }

  #[test]
  fn icon_kinds_serialize_kebab_case() {
    let badge = IconBadge {
      kind: IconKind::AppStore,
      url: "https://example.com".to_string(),
    };

    assert_eq!(
      serde_json::to_value(&badge).unwrap(),
      serde_json::json!({ "type": "app-store", "url": "https://example.com" })
    );

    assert_eq!(
      serde_json::to_value(IconKind::AwesomeList).unwrap(),
      serde_json::json!("awesome-list")
    );
  }

  #[test]
  fn entries_skips_paragraphs_with_empty_marks() {
    let entry = CatalogNode {
      mark: Some(EntryMark {
        title: "Atom".to_string(),
        ..EntryMark::default()
      }),
      ..leaf(NodeKind::Paragraph)
    };

    let non_entry = CatalogNode {
      mark: Some(EntryMark::default()),
      ..leaf(NodeKind::Paragraph)
    };

    let catalog = Catalog {
      nodes: vec![CatalogNode {
        children: Some(vec![entry, non_entry]),
        ..leaf(NodeKind::ListItem)
      }],
    };

    let entries = catalog.entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Atom");
  }
}
