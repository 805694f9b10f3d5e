#![forbid(unsafe_code)]
mod cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = cli::Entry::main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
