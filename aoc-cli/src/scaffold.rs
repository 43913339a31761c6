//! Creating the next day directory from a template

use crate::error::ScaffoldError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Marker that keeps the template's sample test from running
pub const TEMPLATE_MARKER: &str = r#"#[ignore = "template"]"#;

/// What the marker becomes in a fresh day, ready to uncomment once solved
pub const SOLVED_MARKER: &str = r#"// #[ignore = "solved"]"#;

static DAY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("day number pattern is valid"));

/// Where the day folders live and what to rewrite in a new one
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub root: PathBuf,
    pub template: String,
    pub entry_file: PathBuf,
    pub run_configs: PathBuf,
}

/// Outcome of [`Scaffold::create_next`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDay {
    /// Directory name of the previous last day
    pub last_day: String,
    /// Directory name of the day just created
    pub name: String,
    /// Full path of the day just created
    pub path: PathBuf,
    /// Run configuration files that were rewritten
    pub edited_run_configs: Vec<PathBuf>,
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Recursively copy `src` into a new directory `dst`
fn copy_dir_all(src: &Path, dst: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(dst).map_err(io_err(dst))?;
    for entry in fs::read_dir(src).map_err(io_err(src))? {
        let entry = entry.map_err(io_err(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type().map_err(io_err(&from))?.is_dir() {
            copy_dir_all(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(io_err(&from))?;
        }
    }
    Ok(())
}

/// Replace every occurrence of `from` with `to` in a text file.
///
/// Returns whether the file changed.
fn rewrite_file(path: &Path, from: &str, to: &str) -> Result<bool, ScaffoldError> {
    let contents = fs::read_to_string(path).map_err(io_err(path))?;
    if !contents.contains(from) {
        return Ok(false);
    }
    fs::write(path, contents.replace(from, to)).map_err(io_err(path))?;
    Ok(true)
}

impl Scaffold {
    /// Name of the lexicographically last `day*` directory under the root
    pub fn last_day(&self) -> Result<String, ScaffoldError> {
        let mut last: Option<String> = None;
        for entry in fs::read_dir(&self.root).map_err(io_err(&self.root))? {
            let entry = entry.map_err(io_err(&self.root))?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.starts_with("day") && entry.path().is_dir() {
                last = last.max(Some(name));
            }
        }
        last.ok_or_else(|| ScaffoldError::NoDays(self.root.clone()))
    }

    /// Name of the day after `last_day`, e.g. `day07` -> `day08`
    pub fn next_day_name(last_day: &str) -> Result<String, ScaffoldError> {
        let number: u32 = DAY_NUMBER
            .find(last_day)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| ScaffoldError::NoDayNumber(last_day.to_string()))?;
        Ok(format!("day{:02}", number + 1))
    }

    /// Copy the template into the next day and point run configurations at it.
    ///
    /// A day directory that fails halfway is removed again, so a retry
    /// targets the same day.
    pub fn create_next(&self) -> Result<NewDay, ScaffoldError> {
        let template = self.root.join(&self.template);
        if !template.is_dir() {
            return Err(ScaffoldError::MissingTemplate(template));
        }
        let template_entry = template.join(&self.entry_file);
        if !template_entry.is_file() {
            return Err(ScaffoldError::MissingEntryFile(template_entry));
        }

        let last_day = self.last_day()?;
        let name = Self::next_day_name(&last_day)?;
        let path = self.root.join(&name);
        if path.exists() {
            return Err(ScaffoldError::AlreadyExists(path));
        }
        tracing::debug!(%last_day, new_day = %name, "creating day from template");

        let edited_run_configs = match self.fill_day(&template, &path, &last_day, &name) {
            Ok(edited) => edited,
            Err(e) => {
                if let Err(cleanup) = fs::remove_dir_all(&path) {
                    tracing::warn!(path = %path.display(), %cleanup, "could not remove partial day");
                }
                return Err(e);
            }
        };

        Ok(NewDay {
            last_day,
            name,
            path,
            edited_run_configs,
        })
    }

    /// Copy and rewrite everything for a new day at `path`
    fn fill_day(
        &self,
        template: &Path,
        path: &Path,
        last_day: &str,
        name: &str,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        copy_dir_all(template, path)?;
        rewrite_file(&path.join(&self.entry_file), TEMPLATE_MARKER, SOLVED_MARKER)?;

        let mut edited_run_configs = Vec::new();
        let run_dir = self.root.join(&self.run_configs);
        if !run_dir.is_dir() {
            tracing::debug!(dir = %run_dir.display(), "no run configurations to edit");
            return Ok(edited_run_configs);
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&run_dir)
            .map_err(io_err(&run_dir))?
            .map(|entry| entry.map(|e| e.path()).map_err(io_err(&run_dir)))
            .collect::<Result<_, _>>()?;
        files.sort();
        for file in files.into_iter().filter(|f| f.is_file()) {
            if rewrite_file(&file, last_day, name)? {
                edited_run_configs.push(file);
            }
        }
        Ok(edited_run_configs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE_PART1: &str = r#"pub fn part1(input: &str) -> usize {
    input.len()
}

#[test]
#[ignore = "template"]
fn test_part1() {
    assert_eq!(part1(""), 1);
}
"#;

    fn scaffold(root: &Path) -> Scaffold {
        Scaffold {
            root: root.to_path_buf(),
            template: "day00".to_string(),
            entry_file: PathBuf::from("src/part1.rs"),
            run_configs: PathBuf::from(".run"),
        }
    }

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("day00").join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("part1.rs"), TEMPLATE_PART1).unwrap();
        fs::write(temp.path().join("day00").join("Cargo.toml"), "[package]\n").unwrap();
        temp
    }

    #[test]
    fn test_next_day_name() {
        assert_eq!(Scaffold::next_day_name("day00").unwrap(), "day01");
        assert_eq!(Scaffold::next_day_name("day09").unwrap(), "day10");
        assert_eq!(Scaffold::next_day_name("day24").unwrap(), "day25");
        assert!(matches!(
            Scaffold::next_day_name("days"),
            Err(ScaffoldError::NoDayNumber(_))
        ));
    }

    #[test]
    fn test_first_day_from_template() {
        let temp = setup();
        let created = scaffold(temp.path()).create_next().unwrap();

        assert_eq!(created.last_day, "day00");
        assert_eq!(created.name, "day01");
        assert!(created.path.join("Cargo.toml").is_file());

        let part1 = fs::read_to_string(created.path.join("src/part1.rs")).unwrap();
        assert!(part1.contains(SOLVED_MARKER));
        assert!(!part1.contains(&format!("\n{}", TEMPLATE_MARKER)));

        // The template itself is untouched
        let template = fs::read_to_string(temp.path().join("day00/src/part1.rs")).unwrap();
        assert_eq!(template, TEMPLATE_PART1);
    }

    #[test]
    fn test_continues_after_last_day_and_edits_run_configs() {
        let temp = setup();
        fs::create_dir(temp.path().join("day07")).unwrap();
        fs::create_dir(temp.path().join("notes")).unwrap();
        fs::write(temp.path().join("day99.txt"), "not a directory").unwrap();

        let run = temp.path().join(".run");
        fs::create_dir(&run).unwrap();
        fs::write(run.join("part1.xml"), "<option value=\"day07/src/part1.rs\"/>").unwrap();
        fs::write(run.join("other.xml"), "<option value=\"unrelated\"/>").unwrap();

        let created = scaffold(temp.path()).create_next().unwrap();
        assert_eq!(created.last_day, "day07");
        assert_eq!(created.name, "day08");
        assert_eq!(created.edited_run_configs, vec![run.join("part1.xml")]);
        assert_eq!(
            fs::read_to_string(run.join("part1.xml")).unwrap(),
            "<option value=\"day08/src/part1.rs\"/>"
        );
    }

    #[test]
    fn test_template_without_entry_file_leaves_no_day() {
        let temp = setup();
        fs::remove_file(temp.path().join("day00/src/part1.rs")).unwrap();
        let s = scaffold(temp.path());

        for _ in 0..2 {
            let err = s.create_next().unwrap_err();
            assert!(matches!(err, ScaffoldError::MissingEntryFile(_)));
            assert!(!temp.path().join("day01").exists());
        }
        assert!(!temp.path().join("day02").exists());
        assert_eq!(s.last_day().unwrap(), "day00");
    }

    #[test]
    fn test_failed_run_config_rewrite_removes_partial_day() {
        let temp = setup();
        let run = temp.path().join(".run");
        fs::create_dir(&run).unwrap();
        // Not UTF-8, so reading it as text fails after the day was copied
        fs::write(run.join("broken.xml"), [0xff, 0xfe, 0x00]).unwrap();

        let err = scaffold(temp.path()).create_next().unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert!(!temp.path().join("day01").exists());
    }

    #[test]
    fn test_missing_template() {
        let temp = TempDir::new().unwrap();
        let err = scaffold(temp.path()).create_next().unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTemplate(_)));
    }

    #[test]
    fn test_repeated_runs_keep_counting() {
        let temp = setup();
        let s = scaffold(temp.path());
        s.create_next().unwrap();
        assert_eq!(s.create_next().unwrap().name, "day02");
        assert_eq!(s.last_day().unwrap(), "day02");
    }

    #[test]
    fn test_existing_target_is_not_overwritten() {
        let temp = setup();
        fs::write(temp.path().join("day01"), "in the way").unwrap();
        let err = scaffold(temp.path()).create_next().unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("day01")).unwrap(),
            "in the way"
        );
    }
}
