//! List projects, optionally filtered by tag.

use clap::Args;

use crate::cli::common::{print_json, CliResult};
use crate::models::Project;
use crate::services::{all_tags, filter_projects};

/// List projects, optionally filtered by tag
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Only show projects with this tag (exact, case-sensitive; no match lists nothing)
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ProjectsArgs {
    /// Execute the projects command
    pub fn execute(&self) -> CliResult<()> {
        let portfolio = super::load_portfolio()?;
        let projects = filter_projects(&portfolio.projects, self.tag.as_deref());

        if let Some(tag) = &self.tag {
            let tags = all_tags(&portfolio.projects);
            if !tags.contains(tag) {
                eprintln!(
                    "Note: no project is tagged '{tag}'. Available tags: {}",
                    tags.join(", ")
                );
            }
        }
        tracing::debug!(tag = self.tag.as_deref(), count = projects.len(), "projects listed");

        if self.json {
            print_json(&projects)
        } else {
            output_human_readable(&projects);
            Ok(())
        }
    }
}

fn output_human_readable(projects: &[&Project]) {
    if projects.is_empty() {
        println!("No projects match this tag.");
        return;
    }
    for (i, project) in projects.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", project.title);
        println!("{}", "-".repeat(project.title.chars().count()));
        println!("{}", project.description);
        println!("Tags: {}", project.tags.join(", "));
        if let Some(live) = &project.live_url {
            println!("Live Demo: {live}");
        }
        println!("View Code: {}", project.source_url);
    }
}
