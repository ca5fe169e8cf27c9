//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::error::Result;
use crate::output::Formatter;
use halakha_corpus::CorpusTree;

/// Execute the clean command.
pub fn execute_clean(args: CleanArgs, formatter: &Formatter) -> Result<()> {
    let tree = CorpusTree::new(&args.set_path);

    if !tree.root().exists() {
        println!(
            "{}",
            formatter.info(&format!("Nothing to clean at {}", args.set_path.display()))
        );
        return Ok(());
    }

    tree.reset()?;
    println!(
        "{}",
        formatter.success(&format!("Removed {}", args.set_path.display()))
    );

    Ok(())
}
