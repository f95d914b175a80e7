use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("(?i)^", $pat)).unwrap())
  };
}

pub(crate) static APP_STORE_ICON: LazyLock<Regex> = re!(r"app-store\s+icon");

pub(crate) static AWESOME_LIST_ICON: LazyLock<Regex> =
  re!(r"awesome-list\s+icon");

pub(crate) static ENTRY_SEPARATOR: LazyLock<Regex> = re!(r"\s*-\s");

pub(crate) static FREEWARE_ICON: LazyLock<Regex> = re!(r"freeware\s+icon");

pub(crate) static OSS_ICON: LazyLock<Regex> = re!(r"oss\s+icon");

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entry_separator_requires_space_after_hyphen() {
    assert!(ENTRY_SEPARATOR.is_match(" - fast text editor."));
    assert!(ENTRY_SEPARATOR.is_match("   - indented"));
    assert!(ENTRY_SEPARATOR.is_match("- no leading whitespace"));
    assert!(!ENTRY_SEPARATOR.is_match("-"));
    assert!(!ENTRY_SEPARATOR.is_match("-tight"));
    assert!(!ENTRY_SEPARATOR.is_match(" — em dash"));
  }

  #[test]
  fn icon_patterns_anchor_to_identifier_start() {
    assert!(OSS_ICON.is_match("oss icon"));
    assert!(OSS_ICON.is_match("OSS Icon"));
    assert!(OSS_ICON.is_match("oss  icon with suffix"));
    assert!(!OSS_ICON.is_match("boss icon"));
    assert!(!OSS_ICON.is_match("icon oss"));
  }

  #[test]
  fn icon_patterns_are_mutually_exclusive() {
    let patterns = [
      &*FREEWARE_ICON,
      &*OSS_ICON,
      &*APP_STORE_ICON,
      &*AWESOME_LIST_ICON,
    ];

    for identifier in
      ["freeware icon", "oss icon", "app-store icon", "awesome-list icon"]
    {
      let matches = patterns
        .iter()
        .filter(|pattern| pattern.is_match(identifier))
        .count();

      assert_eq!(matches, 1, "`{identifier}` should match exactly one pattern");
    }
  }
}
