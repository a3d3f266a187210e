use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

use super::{CorpusLine, Matcher, SearchError};
use crate::state::rows::RowRef;

/// Delegates to `rg --smart-case --fixed-strings` over the corpus piped on stdin.
///
/// Line numbers reported by rg map back to corpus entries, so the matched text
/// never carries an index tag that the query could accidentally hit.
#[derive(Debug, Clone)]
pub struct RipgrepMatcher {
    program: PathBuf,
    timeout: Duration,
}

impl RipgrepMatcher {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self { program: program.into(), timeout }
    }

    fn run(&self, corpus: &[CorpusLine], query: &str) -> Result<Vec<RowRef>, SearchError> {
        let mut child = Command::new(&self.program)
            .args(["--smart-case", "--fixed-strings", "--line-number", "--color=never", "--no-heading"])
            .arg("--regexp")
            .arg(query)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SearchError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let mut input = String::new();
        for line in corpus {
            input.push_str(&line.text);
            input.push('\n');
        }

        // Feed and drain on helper threads so a large corpus cannot deadlock
        // on full pipes, and so the wait below can time out.
        let mut stdin = child.stdin.take().ok_or_else(|| {
            SearchError::Io(std::io::Error::other("rg stdin unavailable"))
        })?;
        let writer = std::thread::spawn(move || {
            let _ = stdin.write_all(input.as_bytes());
        });

        let mut stdout = child.stdout.take().ok_or_else(|| {
            SearchError::Io(std::io::Error::other("rg stdout unavailable"))
        })?;
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let mut out = String::new();
            let res = stdout.read_to_string(&mut out).map(|_| out);
            let _ = tx.send(res);
        });

        let output = match rx.recv_timeout(self.timeout) {
            Ok(res) => res?,
            Err(_) => {
                // Only the direct child is killed. A grandchild still holding
                // stdout keeps the detached reader blocked until it exits; the
                // reader's send then fails harmlessly on the dropped receiver.
                drop(rx);
                kill(&mut child);
                return Err(SearchError::Timeout(self.timeout));
            }
        };
        let _ = writer.join();

        let status = child.wait()?;
        match status.code() {
            Some(0) => Ok(parse_output(&output, corpus)),
            // rg exits 1 when nothing matched
            Some(1) => Ok(Vec::new()),
            code => Err(SearchError::Exit(code.unwrap_or(-1))),
        }
    }
}

impl Matcher for RipgrepMatcher {
    fn matches(&self, corpus: &[CorpusLine], query: &str) -> Vec<RowRef> {
        match self.run(corpus, query) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(error = %err, "external search failed, showing no results");
                Vec::new()
            }
        }
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Parses `N:text` lines (1-based line numbers) back into corpus rows.
/// Malformed or out-of-range lines are skipped.
fn parse_output(output: &str, corpus: &[CorpusLine]) -> Vec<RowRef> {
    output
        .lines()
        .filter_map(|line| {
            let (num, _) = line.split_once(':')?;
            let n: usize = num.parse().ok()?;
            corpus.get(n.checked_sub(1)?).map(|l| l.row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<CorpusLine> {
        vec![
            CorpusLine { row: RowRef::Folder(0), text: "GitHub".into() },
            CorpusLine { row: RowRef::Request(0, 0), text: "List Repos GET".into() },
            CorpusLine { row: RowRef::Folder(1), text: "Stripe".into() },
        ]
    }

    #[test]
    fn test_parse_output_maps_line_numbers() {
        let rows = parse_output("3:Stripe\n1:GitHub\n", &corpus());
        assert_eq!(rows, vec![RowRef::Folder(1), RowRef::Folder(0)]);
    }

    #[test]
    fn test_parse_output_skips_garbage() {
        let rows = parse_output("junk\n0:zero\n9:past end\nx:y\n2:List Repos GET", &corpus());
        assert_eq!(rows, vec![RowRef::Request(0, 0)]);
    }

    #[test]
    fn test_missing_binary_yields_no_results() {
        let matcher = RipgrepMatcher::new(
            "/nonexistent/definitely-not-rg",
            Duration::from_millis(200),
        );
        assert!(matcher.matches(&corpus(), "git").is_empty());
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let matcher = RipgrepMatcher::new("/nonexistent/definitely-not-rg", Duration::from_millis(200));
        let err = matcher.run(&corpus(), "git").unwrap_err();
        assert!(matches!(err, SearchError::Spawn { .. }));
    }

    #[cfg(unix)]
    fn script(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_keeps_rg_output_order() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(&dir, "ok.sh", "cat >/dev/null; printf '3:a\\n1:b\\n'; exit 0");
        let matcher = RipgrepMatcher::new(program, Duration::from_secs(5));
        let rows = matcher.run(&corpus(), "x").unwrap();
        assert_eq!(rows, vec![RowRef::Folder(1), RowRef::Folder(0)]);
        assert_eq!(matcher.matches(&corpus(), "x"), rows);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_one_is_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(&dir, "none.sh", "cat >/dev/null; exit 1");
        let matcher = RipgrepMatcher::new(program, Duration::from_secs(5));
        assert_eq!(matcher.run(&corpus(), "x").unwrap(), Vec::new());
    }

    #[cfg(unix)]
    #[test]
    fn test_other_exit_code_yields_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(&dir, "fail.sh", "cat >/dev/null; echo 1:x; exit 2");
        let matcher = RipgrepMatcher::new(program, Duration::from_secs(5));
        let err = matcher.run(&corpus(), "x").unwrap_err();
        assert!(matches!(err, SearchError::Exit(2)));
        assert!(matcher.matches(&corpus(), "x").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_yields_no_results_promptly() {
        let dir = tempfile::tempdir().unwrap();
        // `sleep` runs as a grandchild that outlives the killed shell.
        let program = script(&dir, "hang.sh", "sleep 5");
        let matcher = RipgrepMatcher::new(program, Duration::from_millis(200));

        let started = std::time::Instant::now();
        let err = matcher.run(&corpus(), "x").unwrap_err();
        assert!(matches!(err, SearchError::Timeout(_)));
        assert!(matcher.matches(&corpus(), "x").is_empty());
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
