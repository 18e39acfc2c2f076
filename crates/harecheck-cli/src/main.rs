use clap::Parser;
use std::io::Write;

mod cli;

use cli::args::Cli;
use cli::commands::dispatch;

pub const APP_NAME: &str = "harecheck";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            1
        }
    };
    std::process::exit(code);
}

/// Process-wide log sink, configured once at startup. Info lines carry the
/// app tag and timestamp only; warnings get a WARNING marker; error and
/// debug records also carry module path and line.
fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let ts = chrono::Local::now().format("%d-%m-%Y %H:%M:%S%.3f");
            match record.level() {
                log::Level::Info => writeln!(buf, "[{}] [{}] {}", ts, APP_NAME, record.args()),
                log::Level::Warn => {
                    writeln!(buf, "[{}] [{}] WARNING - {}", ts, APP_NAME, record.args())
                }
                level => writeln!(
                    buf,
                    "[{}] [{}] {} in {}:{} - {}",
                    ts,
                    APP_NAME,
                    level,
                    record.module_path().unwrap_or("?"),
                    record.line().unwrap_or(0),
                    record.args()
                ),
            }
        })
        .init();
}
