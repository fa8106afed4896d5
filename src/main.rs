use anyhow::{Context, Result};

/// No CLI surface: the pipeline takes no arguments and writes its outputs
/// into the working directory. A failure in any stage propagates here and
/// exits non-zero with a message naming the stage.
fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::current_dir().context("resolving working directory")?;
    iris_report::run(&out_dir)
}
