use anyhow::Result;
use ooc::{cli, runner};
use ooc_runtime::Runtime;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse_command_line_args();
    let mut rt = Runtime::new();
    runner::run(&mut rt, &args.selections)
}
