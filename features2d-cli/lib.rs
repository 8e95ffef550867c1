//! `features2d` command line front end.
//!
//! ```text
//! features2d <akaze|kaze|orb|brisk> [--opts <json-object>] [--config <file>] [--worker] [value ...]
//! ```
//!
//! Values are JSON scalars in constructor order (`null` skips a position).
//! Anything that does not parse as JSON is passed on as a string and rejected
//! by the binding like any other wrong-typed value.

use std::path::PathBuf;
use std::str::FromStr;

use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use features2d_binding::{
    spawn_construct, AkazeDetector, BindingError, BriskDetector, DetectorBinding,
    FeatureDetector, KazeDetector, OrbDetector,
};
use features2d_engine::{ConfigError, DetectorConfig};

pub const USAGE: &str = "usage: features2d <akaze|kaze|orb|brisk> [--opts <json-object>] \
[--config <file.json|file.toml>] [--worker] [value ...]";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}\n{USAGE}")]
    Usage(String),

    #[error("config file describes a {found} detector, not {requested}")]
    DetectorMismatch {
        requested: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    Akaze,
    Kaze,
    Orb,
    Brisk,
}

impl DetectorKind {
    /// Lowercase name, as used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            DetectorKind::Akaze => "akaze",
            DetectorKind::Kaze => "kaze",
            DetectorKind::Orb => "orb",
            DetectorKind::Brisk => "brisk",
        }
    }
}

impl FromStr for DetectorKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "akaze" => Ok(DetectorKind::Akaze),
            "kaze" => Ok(DetectorKind::Kaze),
            "orb" => Ok(DetectorKind::Orb),
            "brisk" => Ok(DetectorKind::Brisk),
            other => Err(CliError::Usage(format!("unknown detector '{other}'"))),
        }
    }
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub kind: DetectorKind,
    pub opts: Option<Map<String, Value>>,
    pub config: Option<PathBuf>,
    pub worker: bool,
    pub values: Vec<Value>,
}

impl Invocation {
    pub fn parse<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let kind = match args.next() {
            Some(first) if first == "-h" || first == "--help" => {
                return Err(CliError::Usage("help requested".to_string()))
            }
            Some(first) => first.parse()?,
            None => return Err(CliError::Usage("missing detector".to_string())),
        };

        let mut invocation = Invocation {
            kind,
            opts: None,
            config: None,
            worker: false,
            values: Vec::new(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--opts" => {
                    let raw = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--opts needs a value".to_string()))?;
                    match serde_json::from_str(&raw) {
                        Ok(Value::Object(map)) => invocation.opts = Some(map),
                        _ => {
                            return Err(CliError::Usage(format!(
                                "--opts expects a JSON object, got '{raw}'"
                            )))
                        }
                    }
                }
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                    invocation.config = Some(PathBuf::from(path));
                }
                "--worker" => invocation.worker = true,
                _ => invocation.values.push(parse_value(&arg)),
            }
        }

        if invocation.config.is_some() && (invocation.opts.is_some() || !invocation.values.is_empty())
        {
            return Err(CliError::Usage(
                "--config cannot be combined with --opts or values".to_string(),
            ));
        }

        Ok(invocation)
    }

    /// Constructor arguments: the options object first, then any values.
    pub fn constructor_args(&self) -> Vec<Value> {
        self.opts
            .iter()
            .map(|opts| Value::Object(opts.clone()))
            .chain(self.values.iter().cloned())
            .collect()
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse, build and describe. Returns the pretty-printed JSON document.
pub fn run<I>(args: I) -> CliResult<String>
where
    I: IntoIterator<Item = String>,
{
    let invocation = Invocation::parse(args)?;
    let config = invocation
        .config
        .as_deref()
        .map(DetectorConfig::load)
        .transpose()?;

    let report = match (invocation.kind, config) {
        (DetectorKind::Akaze, None) => execute::<AkazeDetector>(&invocation, None)?,
        (DetectorKind::Akaze, Some(DetectorConfig::Akaze(options))) => {
            execute::<AkazeDetector>(&invocation, Some(options))?
        }
        (DetectorKind::Kaze, None) => execute::<KazeDetector>(&invocation, None)?,
        (DetectorKind::Kaze, Some(DetectorConfig::Kaze(options))) => {
            execute::<KazeDetector>(&invocation, Some(options))?
        }
        (DetectorKind::Orb, None) => execute::<OrbDetector>(&invocation, None)?,
        (DetectorKind::Orb, Some(DetectorConfig::Orb(options))) => {
            execute::<OrbDetector>(&invocation, Some(options))?
        }
        (DetectorKind::Brisk, None) => execute::<BriskDetector>(&invocation, None)?,
        (DetectorKind::Brisk, Some(DetectorConfig::Brisk(options))) => {
            execute::<BriskDetector>(&invocation, Some(options))?
        }
        (kind, Some(other)) => {
            return Err(CliError::DetectorMismatch {
                requested: kind.name(),
                found: other.detector(),
            })
        }
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn execute<D: DetectorBinding>(
    invocation: &Invocation,
    preset: Option<D::Options>,
) -> CliResult<Value> {
    let detector = match preset {
        Some(options) => D::from_options(options)?,
        None if invocation.worker => {
            spawn_construct::<D>(&invocation.constructor_args())?.wait()?
        }
        None => D::construct(&invocation.constructor_args())?,
    };
    debug!(class = D::CLASS, worker = invocation.worker, "detector built");
    describe(&detector)
}

/// JSON summary of a live detector
pub fn describe(detector: &impl FeatureDetector) -> CliResult<Value> {
    let native = detector.native()?;
    Ok(json!({
        "class": detector.class_name(),
        "properties": detector.properties()?,
        "descriptor": {
            "length": native.descriptor_len(),
            "element": native.descriptor_element(),
            "norm": native.default_norm(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn run_json(args: &[&str]) -> Value {
        serde_json::from_str(&run(argv(args)).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_flags_and_values() {
        let inv = Invocation::parse(argv(&["AKAZE", "--worker", "5", "null", "x"])).unwrap();
        assert_eq!(inv.kind, DetectorKind::Akaze);
        assert!(inv.worker);
        assert_eq!(inv.values, vec![json!(5), Value::Null, json!("x")]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Invocation::parse(argv(&[])), Err(CliError::Usage(_))));
        assert!(matches!(Invocation::parse(argv(&["sift"])), Err(CliError::Usage(_))));
        assert!(matches!(
            Invocation::parse(argv(&["orb", "--opts", "[1]"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Invocation::parse(argv(&["orb", "--config", "a.json", "3"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_default_akaze_report() {
        let report = run_json(&["akaze"]);
        assert_eq!(report["class"], "AKAZEDetector");
        assert_eq!(report["properties"]["descriptorType"], 5);
        assert_eq!(report["properties"]["threshold"], 0.001);
        assert_eq!(report["descriptor"]["length"], 61);
        assert_eq!(report["descriptor"]["element"], "u8");
        assert_eq!(report["descriptor"]["norm"], "hamming");
    }

    #[test]
    fn test_positional_and_opts_agree() {
        let positional = run_json(&["akaze", "5", "null", "null", "0.5"]);
        let named = run_json(&["akaze", "--opts", r#"{"threshold": 0.5}"#]);
        assert_eq!(positional, named);
        assert_eq!(named["properties"]["threshold"], 0.5);
    }

    #[test]
    fn test_worker_matches_sync() {
        let sync = run_json(&["orb", "1000", "1.5"]);
        let worker = run_json(&["orb", "--worker", "1000", "1.5"]);
        assert_eq!(sync, worker);
    }

    #[test]
    fn test_binding_errors_surface() {
        let err = run(argv(&["akaze", "--opts", "{}", "4"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AKAZEDetector::New - argument 1: an options object must be the only argument"
        );

        let err = run(argv(&["akaze", "--opts", r#"{"descriptorChannels": 7}"#])).unwrap_err();
        assert!(matches!(
            err,
            CliError::Binding(BindingError::NativeConstruction { .. })
        ));

        let err = run(argv(&["brisk", "many"])).unwrap_err();
        assert!(matches!(
            err,
            CliError::Binding(BindingError::TypeConversion { .. })
        ));
    }

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join(format!("features2d-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "detector = \"kaze\"\nextended = true\nnOctaves = 2\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let report = run_json(&["kaze", "--config", &path_str]);
        assert_eq!(report["properties"]["extended"], true);
        assert_eq!(report["properties"]["nOctaves"], 2);
        assert_eq!(report["descriptor"]["length"], 128);

        let err = run(argv(&["orb", "--config", &path_str])).unwrap_err();
        assert!(matches!(
            err,
            CliError::DetectorMismatch { requested: "orb", found: "kaze" }
        ));

        std::fs::remove_file(&path).ok();
    }
}
