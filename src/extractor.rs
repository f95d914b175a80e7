use super::*;

/// Extracts the normalized software catalog from a markdown document.
///
/// The processed region is the slice of top-level nodes strictly between
/// the two sentinel html comments configured in [`ExtractorOptions`].
pub struct Extractor {
  options: ExtractorOptions,
  root: GenericNode,
}

impl Extractor {
  pub fn new(markdown: &str, options: ExtractorOptions) -> Self {
    Self {
      options,
      root: parser::parse(markdown),
    }
  }

  pub fn parse(&self) -> Result<Catalog> {
    let region = self.region()?;

    Ok(Catalog {
      nodes: normalize::normalize(region, None),
    })
  }

  fn region(&self) -> Result<&[GenericNode]> {
    let children = self.root.children.as_deref().unwrap_or_default();

    let start = Self::marker_index(children, &self.options.start_marker)
      .ok_or_else(|| Error::MissingStartMarker {
        marker: self.options.start_marker.clone(),
      })?;

    let end = Self::marker_index(children, &self.options.end_marker)
      .ok_or_else(|| Error::MissingEndMarker {
        marker: self.options.end_marker.clone(),
      })?;

    if end <= start {
      return Err(Error::MarkersOutOfOrder {
        marker: self.options.end_marker.clone(),
      });
    }

    Ok(&children[start + 1..end])
  }

  fn marker_index(children: &[GenericNode], marker: &str) -> Option<usize> {
    children.iter().position(|node| {
      node.kind == NodeKind::Html
        && node
          .value
          .as_deref()
          .is_some_and(|value| value.contains(marker))
    })
  }
}
