use {
  extract::EntryName,
  node::{GenericNode, Span},
  regex::Regex,
  serde::Serialize,
  std::sync::LazyLock,
};

pub use crate::{
  catalog::{Catalog, CatalogNode, EntryMark, IconBadge, IconKind},
  error::Error,
  extractor::Extractor,
  node::NodeKind,
  options::{ExtractorOptions, ExtractorOptionsBuilder},
};

mod catalog;
mod entry;
mod error;
mod extract;
mod extractor;
mod icon;
mod node;
mod normalize;
mod options;
mod parser;
mod re;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
