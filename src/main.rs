use clap::Parser;
use env_logger::Env;
use latticedisk::{
    console::{Args, PartialArgs},
    error::LdResult,
    get_version, write_output,
};
use log::info;

fn main() -> LdResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    info!("latticedisk version {}", get_version());

    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    //generate the points and render them
    write_output(&args.config, args.output.as_deref())
}
