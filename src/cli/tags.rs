//! List project tags.

use clap::Args;

use crate::cli::common::{print_json, CliResult};
use crate::services::all_tags;

/// List every tag used by at least one project
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl TagsArgs {
    /// Execute the tags command
    pub fn execute(&self) -> CliResult<()> {
        let portfolio = super::load_portfolio()?;
        let tags = all_tags(&portfolio.projects);

        if self.json {
            print_json(&tags)?;
        } else {
            for tag in &tags {
                println!("{tag}");
            }
        }
        Ok(())
    }
}
