use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use getopts::Options;
use scheduler_core::DEFAULT_LOAD_DELAY;

const ADDRESS_VAR: &str = "SCHEDULER_ADDR";

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub address: SocketAddr,
    pub delay: Duration,
    pub template: Option<PathBuf>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: $SCHEDULER_ADDR or 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "d",
        "delay",
        "Artificial delay before the initial schedule is available [Default: 800]",
        "MILLISECONDS",
    );
    opts.optopt(
        "t",
        "template",
        "JSON file with template events to relocate onto today [Default: built-in sample]",
        "PATH",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    match try_parse(&opts, args, env::var(ADDRESS_VAR).ok()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

/// `Ok(None)` means help was requested.
fn try_parse(
    opts: &Options,
    args: Vec<String>,
    env_address: Option<String>,
) -> Result<Option<Args>, String> {
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(None);
    }

    let address = match matches.opt_str("address").or(env_address) {
        Some(raw) => raw
            .parse::<SocketAddr>()
            .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?,
        None => SocketAddr::from(([127, 0, 0, 1], 8080)),
    };

    let delay = match matches.opt_get::<u64>("delay") {
        Ok(Some(millis)) => Duration::from_millis(millis),
        Ok(None) => DEFAULT_LOAD_DELAY,
        Err(err) => return Err(format!("Provided value for option 'delay' is invalid: {err}")),
    };

    let template = matches.opt_str("template").map(PathBuf::from);

    Ok(Some(Args {
        address,
        delay,
        template,
    }))
}
