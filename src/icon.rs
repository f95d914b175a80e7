use super::*;

/// Category patterns in classification priority order. The "is this a badge
/// at all" check and the per-category checks iterate the same table, so an
/// identifier can never pass one and fail the other.
static ICON_TABLE: [(IconKind, &LazyLock<Regex>); 4] = [
  (IconKind::Freeware, &re::FREEWARE_ICON),
  (IconKind::Oss, &re::OSS_ICON),
  (IconKind::AppStore, &re::APP_STORE_ICON),
  (IconKind::AwesomeList, &re::AWESOME_LIST_ICON),
];

/// Classifies a badge image by the naming convention on its reference
/// identifier. `link_url` is the URL of an enclosing link, which takes
/// precedence over the image's own location since the badge is meant to be
/// clickable. Returns `None` for anything that is not a badge.
pub(crate) fn classify(
  node: &GenericNode,
  link_url: Option<&str>,
) -> Option<IconBadge> {
  if node.kind != NodeKind::ImageReference {
    return None;
  }

  let identifier = node.identifier.as_deref().unwrap_or_default();

  if identifier.is_empty() {
    return None;
  }

  let identifier = identifier.to_lowercase();

  for (kind, pattern) in &ICON_TABLE {
    if pattern.is_match(&identifier) {
      let url = link_url
        .or(node.url.as_deref())
        .unwrap_or_default()
        .to_string();

      return Some(IconBadge { kind: *kind, url });
    }
  }

  None
}
