use anyhow::Result;

fn main() -> Result<()> {
    aqua_shell::run()
}
