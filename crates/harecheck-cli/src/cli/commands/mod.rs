pub mod run;
pub mod statements;

use super::args::{Cli, Command};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::execute(args).await,
        Command::Statements => statements::execute(),
        Command::Version => {
            println!("harecheck {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
    }
}
