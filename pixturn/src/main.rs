use pixturn::{Config, run};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "pixturn".to_string());

    let config = match (args.next(), args.next()) {
        (None, _) => Config::default(),
        (Some(flag), None) if flag == "-h" || flag == "--help" => {
            println!("Usage: {program} [CONFIG.json]");
            return Ok(());
        }
        (Some(path), None) => Config::load(Path::new(&path)).map_err(|e| e.to_string())?,
        (Some(_), Some(_)) => return Err(format!("Usage: {program} [CONFIG.json]")),
    };

    run(&config).map_err(|e| e.to_string())?;
    Ok(())
}
