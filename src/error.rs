#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("end marker `{marker}` appears before the start marker")]
  MarkersOutOfOrder { marker: String },
  #[error("document has no `{marker}` end marker")]
  MissingEndMarker { marker: String },
  #[error("document has no `{marker}` start marker")]
  MissingStartMarker { marker: String },
}
