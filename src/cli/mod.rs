mod handlers;
pub mod parse;

pub use parse::Cli;

use std::io::{self, IsTerminal};

use crate::{core::error::GraphError, render::Renderer};

use handlers::Sink;

/// Dispatch an already parsed command line; output goes to stdout.
pub fn run(cli: Cli) -> Result<(), GraphError> {
    let stdout = io::stdout();
    let renderer = Renderer::for_output(stdout.is_terminal());
    let mut out = stdout.lock();
    let mut sink = Sink {
        out: &mut out,
        renderer,
    };

    match cli.cmd {
        parse::Command::Raw(a) => handlers::raw(&a, sink.out),
        parse::Command::Continuous(a) => handlers::continuous(&a, &mut sink),
        parse::Command::Discrete(a) => handlers::discrete(&a, &mut sink),
        parse::Command::Categorical(a) => handlers::categorical(&a, &mut sink),
        parse::Command::Demo(a) => handlers::demo(&a, sink.out),
        parse::Command::Examples => Ok(handlers::examples(sink.out)?),
    }
}
