// src/main.rs
use console_locale::core::constants::APP_TITLE;
use console_locale::core::version::get_version_info;
use console_locale::i18n::Locale;
use console_locale::{load_config, provider_from_config, server, use_translation, Config, Result};

const USAGE: &str = "\
Usage: console-locale <command>

Commands:
  serve                 Start the health/version/translation API
  lang [code]           Show the current language or switch to <code>
  t <key> [params...]   Print a translation in the current language
  version               Print version information
  help                  Show this message";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    if matches!(command, "help" | "-h" | "--help") {
        println!("{}\n\n{}", APP_TITLE, USAGE);
        return Ok(());
    }

    init_logger();
    let config = load_config().await?;
    apply_log_level(&config);
    config.log_startup();

    match command {
        "serve" => server::run(&config.server).await,
        "lang" | "language" => run_lang(&config, rest.first().copied()),
        "t" | "translate" => {
            run_translate(&config, &rest);
            Ok(())
        }
        "version" | "ver" => {
            println!("{}", get_version_info().full_display_name);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
    }
}

/// Installed before config loading so its warnings are not lost. Without
/// `RUST_LOG` the filter is open and `log::max_level` does the gating.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_secs()
        .init();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

fn apply_log_level(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    match config.log_filter() {
        Some(filter) => log::set_max_level(filter),
        None => log::warn!("Unknown log level '{}', keeping info", config.log_level),
    }
}

fn run_lang(config: &Config, requested: Option<&str>) -> Result<()> {
    let provider = provider_from_config(config);
    let _scope = provider.enter();
    let mut observer = use_translation()?;
    observer.initialize();

    match requested {
        None => {
            let current = observer.locale();
            let available = Locale::ALL
                .iter()
                .map(|l| format!("{} ({})", l.flag(), l.display_name()))
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{}",
                observer.translate("language.current", &[current.flag()])
            );
            println!("{}", observer.translate("language.available", &[available.as_str()]));
        }
        Some(code) => match observer.set_locale_code(code) {
            Ok(locale) => println!(
                "{}",
                observer.translate("language.changed", &[locale.display_name()])
            ),
            Err(e) => {
                log::debug!("Rejected language '{}': {}", code, e);
                eprintln!("{}", observer.translate("language.invalid", &[code]));
                return Err(e);
            }
        },
    }
    Ok(())
}

fn run_translate(config: &Config, args: &[&str]) {
    let Some((key, params)) = args.split_first() else {
        eprintln!("{}", USAGE);
        return;
    };

    let provider = provider_from_config(config);
    let mut observer = provider.observe();
    observer.initialize();
    println!("{}", observer.translate(key, params));
}
