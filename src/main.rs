use std::io;

use anyhow::Result;

use techstore::core::persist::INVENTORY_FILE;
use techstore::shell::Shell;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), INVENTORY_FILE);
    shell.run()?;
    Ok(())
}
