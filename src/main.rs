use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_toolkit::boundary::BoundaryWarning;
use release_toolkit::capability::{Confirm, Interaction, Prompt, ScriptedAnswers, SystemClock};
use release_toolkit::config::{self, Config};
use release_toolkit::domain::{parser, scan_refs, BuildCode, PreReleaseMarker, TagPattern, Version};
use release_toolkit::encoding::BuildCodeEncoding;
use release_toolkit::format;
use release_toolkit::scheme::{VersionBump, VersioningScheme};
use release_toolkit::ui::{self, TerminalPrompt};

#[derive(clap::Parser)]
#[command(
    name = "release-toolkit",
    version,
    about = "Parse, compare, bump and format release versions and build codes"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the fields of a version string
    Parse { version: String },

    /// Print the version after a bump
    Bump {
        version: String,
        #[arg(short, long, default_value = "release", help = "major, minor, patch, pre-release, release or hotfix")]
        part: VersionBump,
        #[arg(short, long, help = "Versioning scheme (defaults to the configured one)")]
        scheme: Option<VersioningScheme>,
        #[command(flatten)]
        answers: AnswerArgs,
    },

    /// Print the version before a bump
    Previous {
        version: String,
        #[arg(short, long, default_value = "release", help = "major, minor, patch, pre-release or release")]
        part: VersionBump,
        #[arg(short, long, help = "Versioning scheme (defaults to the configured one)")]
        scheme: Option<VersioningScheme>,
        #[command(flatten)]
        answers: AnswerArgs,
    },

    /// Render a version in a platform notation
    Format {
        version: String,
        #[arg(long, value_enum, default_value = "release")]
        style: FormatStyle,
        #[arg(short, long, help = "Pre-release marker token (defaults to the configured one)")]
        marker: Option<PreReleaseMarker>,
    },

    /// Derive a build code
    BuildCode {
        version: String,
        #[arg(long, help = "Current build code")]
        current: Option<String>,
        #[arg(short, long, help = "Build code encoding (defaults to the configured one)")]
        encoding: Option<BuildCodeEncoding>,
    },

    /// Compare two versions
    Compare { first: String, second: String },

    /// Print the greatest version among refs (read from stdin when none are given)
    Latest {
        refs: Vec<String>,
        #[arg(long, help = "Ref naming pattern, e.g. 'release/{version}'")]
        pattern: Option<String>,
        #[arg(long, help = "Consider pre-release versions")]
        include_pre_releases: bool,
    },
}

#[derive(clap::Args)]
struct AnswerArgs {
    #[arg(long, conflicts_with = "not_new_year", help = "Answer yes when asked whether a December release opens a new year")]
    new_year: bool,

    #[arg(long, help = "Answer no when asked whether a December release opens a new year")]
    not_new_year: bool,

    #[arg(long, help = "Last release number of the previous year, used when stepping back across a year")]
    previous_year_minor: Option<u32>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatStyle {
    Release,
    PreRelease,
    FourPart,
    AndroidName,
    AndroidCode,
    Ios,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("loading configuration")?;

    match args.command {
        Command::Parse { version } => {
            let (parsed, marker) = parser::parse_marked(&version)?;
            ui::display_version_fields(&version, &parsed, marker.as_ref().map(|m| m.token()));
        }
        Command::Bump {
            version,
            part,
            scheme,
            answers,
        } => {
            let scheme = scheme.unwrap_or(config.versioning.scheme);
            let current = Version::parse(&version)?;
            let next = with_interaction(&answers, |interaction| {
                scheme.bump(&current, part, interaction)
            })?;
            ui::display_result(&render(&scheme, &next, &config)?);
        }
        Command::Previous {
            version,
            part,
            scheme,
            answers,
        } => {
            let scheme = scheme.unwrap_or(config.versioning.scheme);
            let current = Version::parse(&version)?;
            let previous = with_interaction(&answers, |interaction| {
                scheme.revert(&current, part, interaction)
            })?;
            ui::display_result(&render(&scheme, &previous, &config)?);
        }
        Command::Format {
            version,
            style,
            marker,
        } => {
            let version = Version::parse(&version)?;
            let marker = marker.unwrap_or_else(|| config.versioning.prerelease_marker.clone());
            let rendered = match style {
                FormatStyle::Release => format::release_string(&version),
                FormatStyle::PreRelease => format::pre_release_string(&version, &marker)?,
                FormatStyle::FourPart => format::four_part_string(&version),
                FormatStyle::AndroidName => format::android_version_name(&version),
                FormatStyle::AndroidCode => config.android.version_code(&version)?,
                FormatStyle::Ios => format::ios_version_number(&version),
            };
            ui::display_result(&rendered);
        }
        Command::BuildCode {
            version,
            current,
            encoding,
        } => {
            let encoding = encoding.unwrap_or(config.build_code.encoding);
            let version = Version::parse(&version)?;
            let current = current.map(BuildCode::new);
            let code = encoding.derive(&version, current.as_ref(), &SystemClock)?;
            ui::display_result(&BuildCode::render(Some(&code)));
        }
        Command::Compare { first, second } => {
            let a = Version::parse(&first)?;
            let b = Version::parse(&second)?;
            ui::display_result(&format!("{} {} {}", a, ui::ordering_symbol(a.cmp(&b)), b));
            for note in ui::relationship_notes(&a, &b) {
                ui::display_status(&note);
            }
        }
        Command::Latest {
            refs,
            pattern,
            include_pre_releases,
        } => {
            let pattern = match pattern {
                Some(p) => TagPattern::new(&p)?,
                None => config.tags.tag_pattern()?,
            };
            let refs = if refs.is_empty() { read_refs()? } else { refs };

            let scan = scan_refs(&refs, &pattern);
            for warning in &scan.warnings {
                ui::display_boundary_warning(warning);
            }
            let latest = match scan.latest(include_pre_releases) {
                Some((name, version)) => {
                    ui::display_success(&format!("Latest ref: {}", name));
                    *version
                }
                None => {
                    let fallback = config.versioning.initial_version;
                    ui::display_boundary_warning(&BoundaryWarning::NoVersionedRefs {
                        fallback: fallback.to_string(),
                    });
                    fallback
                }
            };
            ui::display_result(&render(&config.versioning.scheme, &latest, &config)?);
        }
    }

    Ok(())
}

/// Render a version the way its scheme writes it.
///
/// A build slot of 0 has no pre-release notation, so it keeps the four-part form.
fn render(scheme: &VersioningScheme, version: &Version, config: &Config) -> Result<String> {
    let rendered = match (scheme, version.pre_release) {
        (VersioningScheme::FourPart, _) | (_, Some(0)) => format::four_part_string(version),
        (_, Some(_)) => format::pre_release_string(version, &config.versioning.prerelease_marker)?,
        (_, None) => format::release_string(version),
    };
    Ok(rendered)
}

/// Run `f` with answers taken from flags where given, from the terminal otherwise.
fn with_interaction<T>(
    answers: &AnswerArgs,
    f: impl FnOnce(&Interaction<'_>) -> release_toolkit::Result<T>,
) -> release_toolkit::Result<T> {
    let terminal = TerminalPrompt::new();

    let mut scripted = ScriptedAnswers::new();
    if answers.new_year || answers.not_new_year {
        scripted = scripted.confirm(answers.new_year);
    }
    if let Some(minor) = answers.previous_year_minor {
        scripted = scripted.number(minor);
    }

    let confirm: &dyn Confirm = if answers.new_year || answers.not_new_year {
        &scripted
    } else {
        &terminal
    };
    let prompt: &dyn Prompt = if answers.previous_year_minor.is_some() {
        &scripted
    } else {
        &terminal
    };

    f(&Interaction::new(&SystemClock, confirm, prompt))
}

fn read_refs() -> Result<Vec<String>> {
    let mut refs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading refs from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            refs.push(line.to_string());
        }
    }
    Ok(refs)
}
