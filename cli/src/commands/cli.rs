use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "strbool", version, about = "Convert string tokens into booleans")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log unrecognized literals and treat them as unset instead of failing.
    /// Overrides `policy` from the config file.
    #[arg(long, global = true)]
    pub lenient: bool,
}

impl Args {
    /// True when the selected command asked for exit-code-only reporting.
    pub fn is_quiet(&self) -> bool {
        matches!(&self.command, Some(Commands::Parse(p)) if p.quiet)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in example conversions (default).
    Demo,
    /// Convert each VALUE and print the result.
    Parse(ParseArgs),
    /// Print the recognized literal tables.
    Literals,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ParseArgs {
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Print nothing; report only through the exit code.
    #[arg(long, short)]
    pub quiet: bool,
}
