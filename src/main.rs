use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand, parser::ValueSource};
use console::{Color, style};
use hello_gettext::{
    Culture, DEFAULT_DOMAIN, DEFAULT_LOCALE_DIR,
    commands::{Command as CommandTrait, CommandContext, HelloArgs, HelloCommand},
    i18n::{detected_culture, setup_i18n},
    logging::init_logging,
};
use rust_i18n::t;
use std::path::PathBuf;
use std::process;

rust_i18n::i18n!("locales", fallback = "en");

fn build_cli() -> ClapCommand {
    ClapCommand::new("hello-gettext")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("app_about"))
        .long_about(t!("app_long_about"))
        .arg(
            Arg::new("locale_dir")
                .long("locale-dir")
                .value_name("DIR")
                .env("HELLO_LOCALEDIR")
                .default_value(DEFAULT_LOCALE_DIR)
                .value_parser(clap::value_parser!(PathBuf))
                .help(t!("locale_dir_help")),
        )
        .arg(
            Arg::new("domain")
                .long("domain")
                .value_name("NAME")
                .default_value(DEFAULT_DOMAIN)
                .help(t!("domain_help")),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .value_name("TAG")
                .help(t!("locale_help"))
                .long_help(t!("locale_long_help")),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help(t!("verbose_help")),
        )
}

/// 命令行给出的区域优先，否则使用环境变量中的区域
fn resolve_culture(matches: &ArgMatches) -> Option<Culture> {
    match matches.get_one::<String>("locale") {
        Some(raw) => {
            let culture = Culture::parse(raw);
            if culture.is_none() {
                tracing::warn!(locale = %raw, "ignoring unusable --locale value");
            }
            culture
        }
        None => detected_culture().cloned(),
    }
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"))?;

    let culture = resolve_culture(&matches);
    setup_i18n(culture.as_ref());

    let locale_dir = matches
        .get_one::<PathBuf>("locale_dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALE_DIR));
    let domain = matches
        .get_one::<String>("domain")
        .map(String::as_str)
        .unwrap_or(DEFAULT_DOMAIN);

    // 只有显式指定的目录不存在才算错误，默认目录缺失时直接输出原文
    let is_default_dir = matches.value_source("locale_dir") == Some(ValueSource::DefaultValue);
    let context = if is_default_dir && !locale_dir.is_dir() {
        tracing::info!(
            locale_dir = %locale_dir.display(),
            "default locale directory missing, using untranslated messages"
        );
        CommandContext::untranslated(domain)
    } else {
        CommandContext::new(domain, &locale_dir, culture.as_ref())
            .with_context(|| t!("catalog_open_failed", domain = domain))?
    };

    let cmd = HelloCommand::new(context);
    let args = HelloArgs::current_process();
    for line in CommandTrait::execute(&cmd, args)? {
        println!("{line}");
    }

    Ok(())
}

fn main() {
    setup_i18n(detected_culture()); // 初始化 i18n

    if let Err(error) = run() {
        eprintln!("{}: {error}", style(t!("error_prefix")).fg(Color::Red).bold());

        let mut source = error.source();
        let mut level = 1;
        while let Some(err) = source {
            eprintln!(
                "   {} {}: {}",
                "  ".repeat(level),
                t!("error_cause_prefix"),
                err
            );
            source = err.source();
            level += 1;
        }

        eprintln!();
        eprintln!("{}", style(t!("error_tip")).fg(Color::Yellow));
        process::exit(1);
    }
}
