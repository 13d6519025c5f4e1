use clap::{Parser, Subcommand};
use strext_core::{
    html_encode_with, normalize_page_name, split_csv, strip_special_characters_with,
    to_delimited_string_with_delimiter, to_secure_string, HtmlEncodeMode, StrextError,
    DEFAULT_DELIMITER,
};

#[derive(Parser)]
#[command(name = "strext")]
#[command(about = "String helper toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join values with a delimiter
    Join {
        items: Vec<String>,

        #[arg(short, long, default_value = DEFAULT_DELIMITER)]
        delimiter: String,

        #[arg(long)]
        json: bool,
    },
    /// Split a comma-separated value, dropping empty fields
    SplitCsv {
        value: String,

        #[arg(long)]
        json: bool,
    },
    /// Remove or replace runs of non-word characters
    Strip {
        value: String,

        #[arg(short, long, default_value = "")]
        replacement: String,
    },
    /// Remove page-name special characters
    PageName { value: String },
    /// HTML-encode a value
    Html {
        value: String,

        /// Escape every HTML-significant character, not just < and >
        #[arg(long)]
        full: bool,
    },
    /// Convert a value to a secure string and report its length
    Secure { value: String },
}

fn run(command: Commands) -> Result<String, StrextError> {
    let output = match command {
        Commands::Join {
            items,
            delimiter,
            json,
        } => {
            let joined = to_delimited_string_with_delimiter(&items, &delimiter);
            if json {
                serde_json::Value::String(joined).to_string()
            } else {
                joined
            }
        }
        Commands::SplitCsv { value, json } => {
            let fields = split_csv(&value);
            if json {
                serde_json::json!(fields).to_string()
            } else {
                fields.join("\n")
            }
        }
        Commands::Strip { value, replacement } => {
            strip_special_characters_with(&value, &replacement)
        }
        Commands::PageName { value } => normalize_page_name(&value),
        Commands::Html { value, full } => {
            let mode = if full {
                HtmlEncodeMode::Full
            } else {
                HtmlEncodeMode::TagCharactersOnly
            };
            html_encode_with(&value, mode)
        }
        Commands::Secure { value } => {
            let secure = to_secure_string(&value)?;
            format!("secure string holds {} characters", secure.len())
        }
    };
    Ok(output)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_command_uses_delimiter() {
        let out = run(Commands::Join {
            items: vec!["a".into(), "b".into()],
            delimiter: "+".into(),
            json: false,
        })
        .unwrap();
        assert_eq!(out, "a+b");
    }

    #[test]
    fn split_csv_command_json() {
        let out = run(Commands::SplitCsv {
            value: ",x,,y".into(),
            json: true,
        })
        .unwrap();
        assert_eq!(out, r#"["x","y"]"#);
    }

    #[test]
    fn secure_command_rejects_empty() {
        assert!(run(Commands::Secure { value: String::new() }).is_err());
    }

    #[test]
    fn cli_parses_html_flags() {
        let cli = Cli::try_parse_from(["strext", "html", "<b>&", "--full"]).unwrap();
        assert_eq!(run(cli.command).unwrap(), "&lt;b&gt;&amp;");
    }
}
