use std::path::{Path, PathBuf};
use eyre::{bail, ContextCompat, WrapErr};
use regex::{Regex, RegexBuilder};
use xdg::BaseDirectories;

const CONFIG_FILE: &str = "config.lst";

#[derive(Debug, Default)]
pub struct Config {
    pub lowercase: bool,
    pub excludes: Vec<Exclude>,
}

impl Config {
    pub fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> eyre::Result<Config> {
        let mut config = Config::default();

        for line in lines {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = split_setting(line)?;
            match key {
                "lowercase" => {
                    config.lowercase = value
                        .parse::<bool>()
                        .wrap_err_with(|| format!("Invalid boolean in config line '{line}'"))?;
                }
                "exclude" => {
                    let exclude = parse_exclude(value)
                        .wrap_err_with(|| format!("Invalid exclusion in config line '{line}'"))?;
                    config.excludes.push(exclude);
                }
                _ => bail!("Unknown config key '{key}'"),
            }
        }

        Ok(config)
    }

    pub fn try_from_file(file_path: &Path) -> eyre::Result<Config> {
        let file = std::fs::read_to_string(file_path)
            .wrap_err_with(|| format!("Failed to read config file {}", file_path.display()))?;

        Self::from_lines(file.lines())
    }

    /// Loads `path` when given, otherwise `usernamer/config.lst` under the XDG
    /// config directory. A missing XDG file means the default config.
    pub fn load(path: Option<&Path>) -> eyre::Result<Config> {
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Loading config");
            return Self::try_from_file(path);
        }

        let config_path = default_path()?;
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "Loading config");
            Self::try_from_file(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.excludes.iter().any(|exclude| exclude.matches(candidate))
    }
}

fn default_path() -> eyre::Result<PathBuf> {
    let base_dirs =
        BaseDirectories::with_prefix("usernamer").wrap_err("Failed to get base directories")?;

    Ok(base_dirs.get_config_file(CONFIG_FILE))
}

#[derive(Debug)]
pub enum Exclude {
    Lowercase(String),
    Regex(Regex),
}

impl Exclude {
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Exclude::Lowercase(literal) => candidate.to_lowercase() == *literal,
            Exclude::Regex(re) => re.is_match(candidate),
        }
    }
}

fn split_setting(line: &str) -> eyre::Result<(&str, &str)> {
    let eq_pos = line
        .find('=')
        .with_context(|| format!("Invalid config line '{line}', no '=' found"))?;
    let (key, value) = line.split_at(eq_pos);

    Ok((key.trim(), value[1..].trim()))
}

fn parse_exclude(matcher: &str) -> eyre::Result<Exclude> {
    if matcher.is_empty() {
        bail!("Empty matcher");
    }

    let Some(regex_matcher) = matcher.strip_prefix('/') else {
        return Ok(Exclude::Lowercase(matcher.to_lowercase()));
    };

    let Some(closing_pos) = regex_matcher.rfind('/') else {
        bail!("Invalid regex, no closing '/' found");
    };
    let flags = &regex_matcher[closing_pos + 1..];
    let re = RegexBuilder::new(&regex_matcher[..closing_pos])
        .case_insensitive(flags.contains('i'))
        .build()?;

    Ok(Exclude::Regex(re))
}
