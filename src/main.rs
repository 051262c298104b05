use std::error::Error;
use std::io;
use subnet_info::config::{CommandLine, Config};
use subnet_info::logging::init_logging;
use subnet_info::output::print_banner;
use subnet_info::{generate_output, get_network_info};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();
    init_logging()?;
    log::info!("#Start main()");

    let cfg = Config::from(&commands);
    log::debug!("{cfg:?}");

    if commands.ip.is_none() || commands.mask.is_none() {
        print_banner();
    }

    let stdin = io::stdin();
    let info = get_network_info(&commands, &mut stdin.lock(), &mut io::stdout())?;
    generate_output(&info, &cfg)?;

    Ok(())
}
