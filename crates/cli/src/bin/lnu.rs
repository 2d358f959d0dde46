use anyhow::Result;

fn main() -> Result<()> {
    lnu_cli::main_entry()
}
