use pubheaders::cli::{handle_extract, CliArgs};
use pubheaders::util::{init_logging, json_from_env, parse_level, LoggingConfig};
use pubheaders::{ExtractorConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();

    let mut config = ExtractorConfig::default();
    args.apply_to(&mut config);

    init_logging(LoggingConfig {
        level: parse_level(&config.log_level),
        use_json: json_from_env(),
    });

    debug!("pubheaders v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_extract(&args, config));
}
