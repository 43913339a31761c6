//! Configuration resolution: session cookie and puzzle year/day

use crate::error::CliError;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use zeroize::Zeroizing;

/// Environment variable checked first for the session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// File name searched for in the working directory and its ancestors
pub const ENV_FILE: &str = ".env";

static YEAR_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^aoc(\d{4})$").expect("year pattern is valid"));
static DAY_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^day(\d+)$").expect("day pattern is valid"));

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

/// Infer `(year, day)` from a `.../aoc<YYYY>/day<NN>` directory
pub fn year_day_from_dir(dir: &Path) -> Result<(u16, u8), CliError> {
    let name_of = |p: Option<&Path>| -> Option<String> {
        p.and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .map(str::to_string)
    };
    let day_name = name_of(Some(dir));
    let year_name = name_of(dir.parent());

    let parsed = day_name.zip(year_name).and_then(|(day_name, year_name)| {
        let day: u8 = DAY_DIR.captures(&day_name)?[1].parse().ok()?;
        let year: u16 = YEAR_DIR.captures(&year_name)?[1].parse().ok()?;
        Some((year, day))
    });
    parsed.ok_or_else(|| CliError::WorkDir(dir.to_path_buf()))
}

/// Absolute form of `dir`, which does not have to exist yet.
///
/// The nearest existing ancestor is canonicalized and the missing tail is
/// appended unchanged.
pub fn resolve_dir(dir: &Path) -> Result<PathBuf, CliError> {
    let absolute = std::path::absolute(dir)?;
    let Some(existing) = absolute.ancestors().find(|p| p.exists()) else {
        return Ok(absolute);
    };
    let mut resolved = existing.canonicalize()?;
    if let Ok(rest) = absolute.strip_prefix(existing)
        && !rest.as_os_str().is_empty()
    {
        resolved.push(rest);
    }
    Ok(resolved)
}

/// Resolve year and day from explicit flags, falling back to `dir`.
///
/// When `dir` is not a `.../aoc<YYYY>/day<NN>` directory but the day was
/// given, the year defaults to `fallback_year`.
pub fn resolve_year_day(
    year: Option<u16>,
    day: Option<u8>,
    dir: &Path,
    fallback_year: u16,
) -> Result<(u16, u8), CliError> {
    if let (Some(year), Some(day)) = (year, day) {
        return Ok((year, day));
    }
    match (year_day_from_dir(dir), day) {
        (Ok((dir_year, dir_day)), _) => Ok((year.unwrap_or(dir_year), day.unwrap_or(dir_day))),
        (Err(_), Some(day)) => {
            let year = year.unwrap_or(fallback_year);
            tracing::debug!(year, "no aoc<YYYY>/day<NN> directory, using default year");
            Ok((year, day))
        }
        (Err(e), None) => Err(e),
    }
}

/// Session cookie from the contents of a credentials file.
///
/// Accepts either the bare token or `session=<token>`; whitespace around it
/// is ignored.
pub fn parse_session_file(contents: &str) -> Option<Zeroizing<String>> {
    let trimmed = contents.trim();
    let token = trimmed.strip_prefix("session=").unwrap_or(trimmed).trim();
    if token.is_empty() {
        None
    } else {
        Some(Zeroizing::new(token.to_string()))
    }
}

/// Nearest `.env` in `start` or one of its ancestors
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE))
        .find(|candidate| candidate.is_file())
}

fn read_session_file(path: &Path) -> Result<Option<Zeroizing<String>>, CliError> {
    let contents = Zeroizing::new(std::fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?);
    Ok(parse_session_file(&contents))
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    println!("{}", reason);
    let s = Zeroizing::new(
        rpassword::prompt_password("Enter AOC session key: ")
            .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?,
    );
    parse_session_file(&s)
        .ok_or_else(|| CliError::Config("Session token is required.".to_string()))
}

/// Resolve the session cookie.
///
/// Order: the `AOC_SESSION` variable, then `env_file` if given, then the
/// nearest `.env` above `search_from`, then an interactive prompt.
pub fn resolve_session(
    env_file: Option<&Path>,
    search_from: &Path,
) -> Result<Zeroizing<String>, CliError> {
    if let Some(session) = std::env::var(SESSION_ENV)
        .ok()
        .and_then(|s| parse_session_file(&Zeroizing::new(s)))
    {
        tracing::debug!("using session from {}", SESSION_ENV);
        return Ok(session);
    }

    if let Some(path) = env_file {
        let path = expand_tilde(path);
        return read_session_file(&path)?.ok_or_else(|| {
            CliError::Config(format!("No session token in {}", path.display()))
        });
    }

    if let Some(path) = find_env_file(search_from) {
        tracing::debug!(path = %path.display(), "using session file");
        if let Some(session) = read_session_file(&path)? {
            return Ok(session);
        }
    }

    prompt_session("Session token required to download puzzle input from adventofcode.com")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_year_day_from_dir() {
        let dir = Path::new("/home/me/advent/aoc2022/day08");
        assert_eq!(year_day_from_dir(dir).unwrap(), (2022, 8));
    }

    #[test]
    fn test_year_day_rejects_other_layouts() {
        for dir in ["/home/me/aoc2022", "/home/me/2022/day08", "/day08", "/"] {
            let err = year_day_from_dir(Path::new(dir)).unwrap_err();
            assert!(matches!(err, CliError::WorkDir(_)), "{dir}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_year_day_roundtrip(year in 2015u16..2100, day in 1u8..=25) {
            let dir = PathBuf::from(format!("/x/aoc{}/day{:02}", year, day));
            prop_assert_eq!(year_day_from_dir(&dir).unwrap(), (year, day));
        }
    }

    #[test]
    fn test_explicit_year_day_skip_directory() {
        let dir = Path::new("/definitely/not/there");
        assert_eq!(resolve_year_day(Some(2021), Some(3), dir, 2022).unwrap(), (2021, 3));
    }

    #[test]
    fn test_year_falls_back_when_only_day_given() {
        let dir = Path::new("/home/me/puzzles");
        assert_eq!(resolve_year_day(None, Some(8), dir, 2022).unwrap(), (2022, 8));
        assert!(matches!(
            resolve_year_day(Some(2021), None, dir, 2022),
            Err(CliError::WorkDir(_))
        ));

        let dir = Path::new("/home/me/aoc2020/day04");
        assert_eq!(resolve_year_day(None, Some(8), dir, 2022).unwrap(), (2020, 8));
        assert_eq!(resolve_year_day(None, None, dir, 2022).unwrap(), (2020, 4));
    }

    #[test]
    fn test_resolve_dir_that_does_not_exist_yet() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().canonicalize().unwrap();
        let missing = temp.path().join("aoc2022").join("day08");

        let resolved = resolve_dir(&missing).unwrap();
        assert_eq!(resolved, base.join("aoc2022").join("day08"));
        assert!(!resolved.exists());
        assert_eq!(year_day_from_dir(&resolved).unwrap(), (2022, 8));
        assert_eq!(resolve_dir(temp.path()).unwrap(), base);
    }

    #[test]
    fn test_parse_session_file() {
        assert_eq!(
            parse_session_file("abc123\n").as_deref().map(String::as_str),
            Some("abc123")
        );
        assert_eq!(
            parse_session_file("session=abc123").as_deref().map(String::as_str),
            Some("abc123")
        );
        assert!(parse_session_file("  \n").is_none());
        assert!(parse_session_file("session=").is_none());
    }

    #[test]
    fn test_find_env_file_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("aoc2022").join("day01");
        std::fs::create_dir_all(&nested).unwrap();
        assert!(find_env_file(&nested).is_none_or(|p| !p.starts_with(temp.path())));

        std::fs::write(temp.path().join(ENV_FILE), "session=abc").unwrap();
        assert_eq!(find_env_file(&nested), Some(temp.path().join(ENV_FILE)));
    }

    #[test]
    fn test_explicit_env_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cookie");
        std::fs::write(&path, "session=from-file\n").unwrap();
        let session = read_session_file(&path).unwrap().unwrap();
        assert_eq!(session.as_str(), "from-file");
    }

    #[test]
    fn test_expand_tilde() {
        let plain = Path::new("relative/.env");
        assert_eq!(expand_tilde(plain), plain);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/.env")), home.join(".env"));
        }
    }
}
