//! `menu` command: print the sidebar.

use std::fs;

use backoffice::{Sidebar, default_sidebar};

use crate::cli::MenuArgs;
use crate::error::CliError;

pub fn run(args: &MenuArgs) -> Result<String, CliError> {
    let sidebar = match &args.file {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            Sidebar::from_json(&json).map_err(|e| CliError::json(path, e))?
        }
        None => default_sidebar(),
    };

    match &args.active {
        Some(path) => Ok(match sidebar.breadcrumbs(path) {
            Some(trail) => format!("{}\n", trail.join(" > ")),
            None => format!("{}: not in the menu\n", path),
        }),
        None => Ok(format_tree(&sidebar)),
    }
}

/// One line per node, indented by depth, under its section title.
fn format_tree(sidebar: &Sidebar) -> String {
    let mut out = String::new();
    let mut section = None;
    for flat in sidebar.walk() {
        if section != Some(flat.section) {
            if section.is_some() {
                out.push('\n');
            }
            out.push_str(flat.section);
            out.push('\n');
            section = Some(flat.section);
        }
        let icon = flat.node.icon().map(|i| format!(" [{}]", i.name())).unwrap_or_default();
        out.push_str(&format!(
            "{}{}{}  {}\n",
            "  ".repeat(flat.depth + 1),
            flat.node.title(),
            icon,
            flat.node.path()
        ));
    }
    out
}
