use clap::Parser;

#[derive(clap::Parser, Debug)]
#[clap(name = "ooc", author, version, about)]
pub struct Arguments {
    /// Objects to try, one per argument: `p` for a point, `c` for a circle.
    /// Arguments starting with other letters are skipped
    pub selections: Vec<String>,
}

pub fn parse_command_line_args() -> Arguments {
    Arguments::parse()
}
