use {
  anyhow::Context,
  clap::Parser,
  mdcatalog::{Extractor, ExtractorOptions},
  std::{fs, path::PathBuf, process},
};

#[derive(Parser)]
#[command(name = "mdcatalog")]
#[command(about = "Extract a structured software catalog from a markdown list", long_about = None)]
struct Arguments {
  /// Path to the markdown file to process
  #[arg(value_name = "FILE")]
  input: PathBuf,
  /// Write the catalog JSON to this path instead of stdout
  #[arg(short, long, value_name = "PATH")]
  output: Option<PathBuf>,
  /// Pretty-print the JSON output
  #[arg(long)]
  pretty: bool,
}

impl Arguments {
  fn run(self) -> Result {
    let markdown = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let catalog = Extractor::new(&markdown, ExtractorOptions::default())
      .parse()
      .context("failed to extract catalog")?;

    let json = if self.pretty {
      serde_json::to_string_pretty(&catalog)?
    } else {
      serde_json::to_string(&catalog)?
    };

    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent()
          && !parent.as_os_str().is_empty()
        {
          fs::create_dir_all(parent).with_context(|| {
            format!("failed to create directory `{}`", parent.display())
          })?;
        }

        fs::write(path, json).with_context(|| {
          format!("failed to write file to `{}`", path.display())
        })?;

        println!("create file: {}", path.display());
      }
      None => println!("{json}"),
    }

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
