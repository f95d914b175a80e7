/// Sentinel tokens bounding the processed region of the document.
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
  pub end_marker: String,
  pub start_marker: String,
}

impl Default for ExtractorOptions {
  fn default() -> Self {
    Self {
      end_marker: "<!--end-->".to_string(),
      start_marker: "<!--start-->".to_string(),
    }
  }
}

impl ExtractorOptions {
  #[must_use]
  pub fn builder() -> ExtractorOptionsBuilder {
    ExtractorOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ExtractorOptionsBuilder {
  inner: ExtractorOptions,
}

impl ExtractorOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ExtractorOptions {
    self.inner
  }

  #[must_use]
  pub fn end_marker(self, end_marker: impl Into<String>) -> Self {
    Self {
      inner: ExtractorOptions {
        end_marker: end_marker.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn start_marker(self, start_marker: impl Into<String>) -> Self {
    Self {
      inner: ExtractorOptions {
        start_marker: start_marker.into(),
        ..self.inner
      },
    }
  }
}
