use anyhow::Result;
use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn commands_text() -> String {
    let text = r#"
CHAT COMMANDS:
- init - Starts chatbot initialization when the service requires an OpenAI API key.
- clear, reset - Clears the chat context locally and on the service.
- help - Prints what the bot can do.

Anything else is sent to the chatbot as a message.
    "#;

    return text.trim().to_string();
}

fn arg_chatbot_url() -> Arg {
    return Arg::new(ConfigKey::ChatbotUrl.to_string())
        .short('u')
        .long(ConfigKey::ChatbotUrl.to_string())
        .env("GEARCHAT_CHATBOT_URL")
        .num_args(1)
        .help(format!(
            "Base URL of the chat service. [default: {}]",
            Config::default(ConfigKey::ChatbotUrl)
        ));
}

fn arg_access_token() -> Arg {
    return Arg::new(ConfigKey::AccessToken.to_string())
        .short('t')
        .long(ConfigKey::AccessToken.to_string())
        .env("GEARCHAT_ACCESS_TOKEN")
        .num_args(1)
        .help("Bearer token used to authenticate with the chat service.");
}

fn arg_role() -> Arg {
    return Arg::new(ConfigKey::Role.to_string())
        .long(ConfigKey::Role.to_string())
        .env("GEARCHAT_ROLE")
        .num_args(1)
        .help(format!(
            "Role reported by the authentication provider. [default: {}]",
            Config::default(ConfigKey::Role)
        ));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .long(ConfigKey::Username.to_string())
        .env("GEARCHAT_USERNAME")
        .num_args(1)
        .help("Name shown on the input prompt.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("GEARCHAT_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file. [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout."),
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file."),
        );
}

pub fn build() -> Command {
    return Command::new("gearchat")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text())
        .arg_required_else_help(false)
        .subcommand(subcommand_config())
        .arg(arg_chatbot_url())
        .arg(arg_access_token())
        .arg(arg_role())
        .arg(arg_username())
        .arg(arg_config_file());
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default());
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }

            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
