use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use anyhow::Result;

use crate::core::Engine;

#[derive(Parser)]
#[command(name = "codescribe")]
#[command(about = "Convert source files into Markdown documentation and flowcharts")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output artifact selection for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown document only
    Markdown,
    /// Word-style document only (currently a Markdown pass-through)
    Docx,
    /// Both artifacts
    Both,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Target directory (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Convert a single source file into documentation
    Convert {
        /// Source file to document
        input: PathBuf,

        /// Output path (defaults to <input stem>_documentation.md next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        /// Skip the companion flowchart document
        #[arg(long)]
        no_flowchart: bool,
    },

    /// Convert every recognized source file under a folder into one document
    ConvertDir {
        /// Folder to scan
        input: PathBuf,

        /// Output path (defaults to documentation.md inside the folder)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
}

impl Cli {
    pub async fn execute(self, engine: Engine) -> Result<()> {
        match self.command {
            Commands::Init { path } => {
                let written = engine.init(path.as_deref()).await?;
                println!("Wrote {}", written.display());
                Ok(())
            }
            Commands::Convert { input, output, format, no_flowchart } => {
                let outputs = engine
                    .convert_file(&input, output.as_deref(), format, !no_flowchart)
                    .await?;
                for path in outputs {
                    println!("Generated: {}", path.display());
                }
                Ok(())
            }
            Commands::ConvertDir { input, output, format } => {
                let outputs = engine
                    .convert_folder(&input, output.as_deref(), format)
                    .await?;
                for path in outputs {
                    println!("Generated: {}", path.display());
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_parses() {
        let cli = Cli::try_parse_from(["codescribe", "-v", "convert", "app.js"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["codescribe", "convert", "app.js"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_format_values() {
        let cli = Cli::try_parse_from([
            "codescribe", "convert", "app.js", "--format", "both", "--no-flowchart",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert { format, no_flowchart, .. } => {
                assert_eq!(format, OutputFormat::Both);
                assert!(no_flowchart);
            }
            _ => panic!("expected convert command"),
        }
    }
}
