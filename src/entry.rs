use super::*;

pub(crate) struct Split {
  pub(crate) children: Vec<GenericNode>,
  pub(crate) mark: EntryMark,
}

/// Decides whether a list-item paragraph matches the entry shape and, if it
/// does, splits its children into the descriptive remainder plus the
/// collected badge icons.
///
/// ```markdown
/// * [Atom](https://atom.io) - xxxx. [![Open-Source Software][OSS Icon]](https://xxx) ![Freeware][Freeware Icon]
/// ```
///
/// A paragraph that does not match passes through unchanged with an empty
/// mark; callers tell the two apart by the absence of a title and url.
pub(crate) fn split_badges(children: &[GenericNode]) -> Split {
  if !is_entry(children) {
    return Split {
      children: children.to_vec(),
      mark: EntryMark::default(),
    };
  }

  let EntryName {
    title,
    url,
    deleted,
  } = extract::entry_name(&children[0]);

  let mut mark = EntryMark {
    title,
    url,
    deleted,
    icons: Vec::new(),
  };

  let mut kept = Vec::new();

  for child in children {
    // Bare badge image: consume it, keep its own resolved URL.
    if let Some(badge) = icon::classify(child, None) {
      mark.icons.push(badge);
      continue;
    }

    // A link whose children are all badges: consume the whole link, the
    // badges become clickable through the link's URL.
    if child.kind == NodeKind::Link
      && let Some(grandchildren) = &child.children
      && !grandchildren.is_empty()
      && let Some(badges) = grandchildren
        .iter()
        .map(|node| icon::classify(node, child.url.as_deref()))
        .collect::<Option<Vec<IconBadge>>>()
    {
      mark.icons.extend(badges);
      continue;
    }

    // Whitespace runs separating badges carry no content.
    if child.kind == NodeKind::Text
      && child
        .value
        .as_deref()
        .is_some_and(|value| value.chars().all(char::is_whitespace))
    {
      continue;
    }

    kept.push(child.clone());
  }

  Split {
    children: kept,
    mark,
  }
}

/// The entry shape: at least two children, and the second is a text node
/// beginning with the ` - ` list separator.
fn is_entry(children: &[GenericNode]) -> bool {
  let Some(second) = children.get(1) else {
    return false;
  };

  second.kind == NodeKind::Text
    && second
      .value
      .as_deref()
      .is_some_and(|value| re::ENTRY_SEPARATOR.is_match(value))
}
