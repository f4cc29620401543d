use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hangeulbot")]
#[command(author, version, about = "Telegram bot teaching Hangeul and 서울대 한국어 grammar", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },

    /// Load and validate the embedded lesson content, then exit
    CheckContent,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_webhook() {
        let cli = Cli::try_parse_from(["hangeulbot", "run", "--webhook"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run { webhook: true })));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["hangeulbot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_content() {
        let cli = Cli::try_parse_from(["hangeulbot", "check-content"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CheckContent)));
    }
}
