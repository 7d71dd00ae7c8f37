use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use videocfg::{
    CandidateFinder, DocsConfig, EditorConfig, EditorSession, Error, SettingValue,
    SteamUserdataFinder, generate_docs,
};

#[derive(Parser)]
#[command(
    name = "videocfg",
    version,
    about = "Inspect and edit Counter-Strike 2 video settings",
    long_about = "Reads and writes cs2_video.txt without touching keys it does not manage.\n\n\
        Quick start:\n  \
        videocfg discover\n  \
        videocfg show path/to/cs2_video.txt\n  \
        videocfg set path/to/cs2_video.txt setting.max_fps 240"
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Do not read or write the remembered-file state
    #[arg(long, global = true)]
    no_state: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every managed setting with its decoded value
    ///
    /// Keys the schema does not know are listed separately.
    ///
    /// Example: videocfg show cs2_video.txt --json
    Show {
        /// Config file (default: the last opened file)
        file: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print one decoded setting
    Get {
        file: PathBuf,
        key: String,
    },
    /// Change one setting and save
    ///
    /// The value is read according to the key's kind: true/false/1/0 for
    /// toggles, an integer for numbers, an option value or label for choices.
    ///
    /// Examples:
    ///   videocfg set cs2_video.txt setting.max_fps 240
    ///   videocfg set cs2_video.txt setting.cpu_level High --output copy.txt
    Set {
        file: PathBuf,
        key: String,
        value: String,

        /// Write to this file instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rewrite every managed setting in canonical form and save
    Normalize {
        file: PathBuf,
    },
    /// Print a Markdown reference of the built-in schema
    Schema {
        /// Leave out read-only metadata keys
        #[arg(long)]
        hide_metadata: bool,

        /// One section per setting kind
        #[arg(long)]
        group: bool,
    },
    /// List config files found under Steam userdata directories
    Discover {
        /// Steam install root to scan (repeatable, default: platform locations)
        #[arg(long = "steam-root")]
        steam_roots: Vec<PathBuf>,
    },
    /// Print the remembered last-opened file
    Last,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> videocfg::Result<()> {
    let mut builder = EditorConfig::builder("videocfg");
    if cli.no_state {
        builder = builder.without_state();
    }
    let mut session = EditorSession::new(builder.build());

    match cli.command {
        Commands::Show { file, json } => {
            match file {
                Some(file) => session.open(file)?,
                None => {
                    if !session.open_last()? {
                        return Err(Error::NoFileLoaded);
                    }
                }
            }
            print!("{}", show(&session, json)?);
        }
        Commands::Get { file, key } => {
            session.open(file)?;
            println!("{}", session.get(&key)?.display());
        }
        Commands::Set {
            file,
            key,
            value,
            output,
        } => {
            session.open(&file)?;
            let stored = session.set_input(&key, &value)?;
            match output {
                Some(output) => session.save_as(output)?,
                None => session.save()?,
            }
            println!("{key} = {}", stored.display());
        }
        Commands::Normalize { file } => {
            session.open(file)?;
            let changed = session.normalize();
            session.save()?;
            println!("{} setting(s) rewritten", changed.len());
        }
        Commands::Schema {
            hide_metadata,
            group,
        } => {
            let mut config = DocsConfig::new();
            if hide_metadata {
                config = config.hide_metadata();
            }
            if group {
                config = config.group_by_kind();
            }
            print!("{}", generate_docs(session.schema(), config));
        }
        Commands::Discover { steam_roots } => {
            let finder = if steam_roots.is_empty() {
                SteamUserdataFinder::default()
            } else {
                SteamUserdataFinder::new(steam_roots)
            };
            debug!("Scanning {} Steam root(s)", finder.roots().len());

            let candidates = finder.find_candidate_config_paths();
            if candidates.is_empty() {
                println!("No config files found");
            }
            for candidate in candidates {
                let name = candidate.display_name.as_deref().unwrap_or("-");
                println!(
                    "{}\t{}\t{}",
                    candidate.identifier,
                    name,
                    candidate.path.display()
                );
            }
        }
        Commands::Last => match session.host_state().last_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No file remembered"),
        },
    }

    session.close();
    Ok(())
}

/// Render decoded managed settings, then unmanaged keys in file order
fn show(session: &EditorSession, json: bool) -> videocfg::Result<String> {
    let mut managed: Vec<(&str, &str, SettingValue)> = Vec::new();
    for (key, entry) in session.schema().iter() {
        managed.push((key, entry.label.as_str(), session.get(key)?));
    }

    let unmanaged: Vec<(&str, &str)> = session
        .unmanaged_keys()
        .filter_map(|key| Some((key, session.store().get(key)?)))
        .collect();

    if json {
        let settings: serde_json::Map<String, serde_json::Value> = managed
            .iter()
            .map(|(key, _, value)| Ok((key.to_string(), serde_json::to_value(value)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        let unmanaged: Vec<serde_json::Value> = unmanaged
            .iter()
            .map(|(key, raw)| serde_json::json!({ "key": key, "value": raw }))
            .collect();
        let doc = serde_json::json!({
            "path": session.path(),
            "settings": settings,
            "unmanaged": unmanaged,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?));
    }

    let width = managed
        .iter()
        .map(|(_, label, _)| label.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (key, label, value) in &managed {
        let _ = writeln!(out, "{label:<width$}  {:<12}  {key}", value.display());
    }

    if !unmanaged.is_empty() {
        out.push_str("\nUnmanaged keys:\n");
        for (key, raw) in unmanaged {
            let _ = writeln!(out, "  {key} = {raw}");
        }
    }
    Ok(out)
}
