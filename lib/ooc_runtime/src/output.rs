use std::io::{self, Write};

/// Where rendering methods write to
#[derive(Debug)]
pub enum Output {
    Stdout(io::Stdout),
    /// Keep the output in memory (used by tests)
    Buffer(Vec<u8>),
}

impl Output {
    pub fn stdout() -> Output {
        Output::Stdout(io::stdout())
    }

    pub fn buffer() -> Output {
        Output::Buffer(vec![])
    }

    /// Take the buffered output. Always empty for `Stdout`
    pub fn take(&mut self) -> String {
        match self {
            Output::Stdout(_) => String::new(),
            Output::Buffer(buf) => String::from_utf8_lossy(&std::mem::take(buf)).to_string(),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::Buffer(v) => v.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::Buffer(_) => Ok(()),
        }
    }
}
