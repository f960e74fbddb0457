pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::SortMode;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "A terminal content gallery browser", long_about = None)]
pub struct Cli {
    /// Listing to load: an http(s) URL or a JSON file path
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Config file (default: ~/.config/vitrine/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default)
    Tui,
    /// Print one page of entries
    List {
        /// Category code to show (lab, event, research, ...)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search term
        #[arg(long)]
        search: Option<String>,

        /// date-desc, date-asc, title-asc or title-desc
        #[arg(long, default_value_t = SortMode::DateDesc)]
        sort: SortMode,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a single entry
    Show {
        /// Entry id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["vitrine"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.source.is_none());
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "list",
            "--category",
            "event",
            "--sort",
            "title-asc",
            "--page",
            "2",
            "--source",
            "https://example.com/gallery.json",
        ])
        .unwrap();

        assert_eq!(cli.source.as_deref(), Some("https://example.com/gallery.json"));
        match cli.command {
            Some(Commands::List {
                category,
                search,
                sort,
                page,
                json,
            }) => {
                assert_eq!(category.as_deref(), Some("event"));
                assert!(search.is_none());
                assert_eq!(sort, SortMode::TitleAsc);
                assert_eq!(page, 2);
                assert!(!json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_bad_sort_is_rejected() {
        assert!(Cli::try_parse_from(["vitrine", "list", "--sort", "newest"]).is_err());
    }
}
