use win_bash::Config;

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let config = Config::load()?;
    let tokens = win_bash::tokens_from(std::env::args_os().skip(1));
    log::debug!("parsing {} token(s)", tokens.len());

    let result = win_bash::run(&config, &tokens)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
