use std::io;

use anyhow::{anyhow, Result};
use clap::CommandFactory;
use clap_complete::generate;
use tracing::instrument;

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::hierarchy::HierarchyTree;
use crate::intake::{IntakeQueue, Patient};

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Hierarchy) => _hierarchy(),
        Some(Commands::Intake) => _intake(),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Builds the sample reporting tree and prints all three traversal orders.
#[instrument]
fn _hierarchy() -> Result<()> {
    let mut tree = HierarchyTree::new();
    tree.set_root("Dr. Croft");

    for (parent, staff, side) in [
        ("Dr. Croft", "Dr. Goldsmith", "right"),
        ("Dr. Croft", "Dr. Phan", "left"),
        ("Dr. Phan", "Dr. Carson", "right"),
        ("Dr. Phan", "Dr. Morgan", "left"),
    ] {
        if !tree.insert(parent, staff, side) {
            return Err(anyhow!("could not attach {} under {}", staff, parent));
        }
    }

    output::header("Staff hierarchy");
    if let Some(rendered) = tree.render() {
        output::info(&rendered);
    }

    let root = tree.root();
    output::action("Preorder", &tree.preorder(root).join(", "));
    output::action("Inorder", &tree.inorder(root).join(", "));
    output::action("Postorder", &tree.postorder(root).join(", "));
    Ok(())
}

/// Runs the sample intake scenario: admit three patients, serve the most
/// urgent, and dump the queue after each step.
#[instrument]
fn _intake() -> Result<()> {
    let mut queue = IntakeQueue::new();
    for (name, urgency) in [("Jordan", 3), ("Taylor", 1), ("Avery", 5)] {
        queue.insert(Patient::new(name, urgency))?;
    }
    print_queue(&queue);

    if let Some(next_up) = queue.peek() {
        output::action("Next up", next_up);
    }
    if let Some(served) = queue.remove_min() {
        output::action("Served", &served);
    }
    print_queue(&queue);
    Ok(())
}

fn print_queue(queue: &IntakeQueue) {
    output::header("Current queue");
    for patient in queue.entries() {
        output::detail(patient);
    }
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
