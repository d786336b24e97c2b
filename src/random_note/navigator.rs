//! Random note and heading navigation

use crate::core::editor::{EditorPosition, EditorRange};
use crate::error::HostError;
use crate::plugin::host::{Editor, Host, VaultFile};

use super::picker::{choose, IndexPicker};

/// Notice shown when the folder holds no notes
pub const NO_NOTES_MESSAGE: &str = "No daily notes found.";

/// Marker that starts a heading line
///
/// Matched as a literal prefix, so `### ` lines are not headings here.
const HEADING_MARKER: &str = "## ";

/// A heading line found in a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Zero-indexed line number
    pub line: usize,
    /// Heading text without the marker, trimmed
    pub text: String,
}

/// Result of one navigation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The folder held no notes; a notice was shown
    NoNotes,
    /// A note was opened, and a heading chosen if it had any
    Opened {
        path: String,
        heading: Option<Heading>,
    },
}

/// Files whose path lies under `folder`
///
/// Plain string prefix test against `"<folder>/"`; no normalisation.
pub fn collect_candidates(files: &[VaultFile], folder: &str) -> Vec<VaultFile> {
    let prefix = format!("{folder}/");
    files
        .iter()
        .filter(|f| f.path.starts_with(&prefix))
        .cloned()
        .collect()
}

/// Scan text for heading lines, in document order
pub fn extract_headings(text: &str) -> Vec<Heading> {
    text.split('\n')
        .enumerate()
        .filter_map(|(line, content)| {
            content.strip_prefix(HEADING_MARKER).map(|rest| Heading {
                line,
                text: rest.trim().to_string(),
            })
        })
        .collect()
}

/// Put the cursor at the start of the heading line and center it
pub fn navigate_to_heading(editor: &mut dyn Editor, heading: &Heading) {
    let pos = EditorPosition::new(heading.line, 0);
    editor.set_cursor(pos);
    editor.scroll_into_view(EditorRange::at(pos), true);
}

/// Open a random note under `folder` and jump to a random heading in it
///
/// Failures to list or open files propagate unchanged.
pub async fn open_random_daily_note(
    host: &mut dyn Host,
    folder: &str,
    picker: &mut dyn IndexPicker,
) -> Result<Outcome, HostError> {
    let candidates = collect_candidates(&host.list_files()?, folder);
    let Some(note) = choose(picker, &candidates) else {
        tracing::info!("No notes under {:?}", folder);
        host.notify(NO_NOTES_MESSAGE);
        return Ok(Outcome::NoNotes);
    };

    tracing::info!("Opening {} ({} candidates)", note.path, candidates.len());
    host.open_file(&note.path).await?;

    let heading = match host.active_editor() {
        Some(editor) => {
            let headings = extract_headings(&editor.value());
            let heading = choose(picker, &headings).cloned();
            if let Some(ref heading) = heading {
                tracing::debug!("Jumping to line {}: {}", heading.line, heading.text);
                navigate_to_heading(editor, heading);
            }
            heading
        }
        None => None,
    };

    Ok(Outcome::Opened {
        path: note.path.clone(),
        heading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::testing::MockHost;
    use crate::random_note::picker::SeededPicker;
    use std::collections::HashMap;

    /// Picker returning a fixed script of indices
    struct ScriptedPicker(Vec<usize>);

    impl IndexPicker for ScriptedPicker {
        fn pick(&mut self, len: usize) -> usize {
            let idx = self.0.remove(0);
            assert!(idx < len);
            idx
        }
    }

    fn files(paths: &[&str]) -> Vec<VaultFile> {
        paths.iter().map(|p| VaultFile::new(*p)).collect()
    }

    #[test]
    fn test_collect_candidates_by_prefix() {
        let all = files(&["Daily/2024-01-01.md", "Notes/Idea.md"]);
        assert_eq!(collect_candidates(&all, "Daily"), files(&["Daily/2024-01-01.md"]));
    }

    #[test]
    fn test_collect_candidates_is_strict_prefix() {
        let all = files(&[
            "Daily/a.md",
            "Daily/2024/b.md",
            "DailyExtra/c.md",
            "daily/d.md",
            "Daily",
            "Notes/Daily/e.md",
        ]);
        assert_eq!(
            collect_candidates(&all, "Daily"),
            files(&["Daily/a.md", "Daily/2024/b.md"])
        );
        // trailing slash is not normalised away
        assert!(collect_candidates(&all, "Daily/").is_empty());
        assert!(collect_candidates(&[], "Daily").is_empty());
    }

    #[test]
    fn test_extract_headings() {
        let headings = extract_headings("Intro\n## Morning\nBody\n## Evening\n");
        assert_eq!(
            headings,
            vec![
                Heading { line: 1, text: "Morning".into() },
                Heading { line: 3, text: "Evening".into() },
            ]
        );
    }

    #[test]
    fn test_extract_headings_none() {
        assert!(extract_headings("# Title\nplain text\n### Deeper\n#### deep").is_empty());
        assert!(extract_headings("").is_empty());
    }

    #[test]
    fn test_extract_headings_prefix_rules() {
        let text = "##NoSpace\n ## indented\n##   padded  \n## \n## a ## b";
        let headings = extract_headings(text);
        assert_eq!(
            headings,
            vec![
                Heading { line: 2, text: "padded".into() },
                Heading { line: 3, text: "".into() },
                Heading { line: 4, text: "a ## b".into() },
            ]
        );
    }

    #[test]
    fn test_extract_headings_crlf_trimmed() {
        let headings = extract_headings("## One\r\ntext\r\n");
        assert_eq!(headings, vec![Heading { line: 0, text: "One".into() }]);
    }

    #[tokio::test]
    async fn test_no_candidates_notifies_once() -> anyhow::Result<()> {
        let mut host = MockHost::with_files(&[("Notes/Idea.md", "## A")]);
        let mut picker = SeededPicker::new(1);

        let outcome = open_random_daily_note(&mut host, "Daily", &mut picker).await?;
        assert_eq!(outcome, Outcome::NoNotes);
        assert_eq!(host.notices, vec![NO_NOTES_MESSAGE]);
        assert!(host.opened.is_empty());
        assert!(host.editor.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_vault_notifies() -> anyhow::Result<()> {
        let mut host = MockHost::default();
        let outcome = open_random_daily_note(&mut host, "Daily", &mut SeededPicker::new(1)).await?;
        assert_eq!(outcome, Outcome::NoNotes);
        assert_eq!(host.notices.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_opens_note_and_moves_cursor() -> anyhow::Result<()> {
        let mut host = MockHost::with_files(&[
            ("Daily/a.md", "Intro\n## Morning\nBody\n## Evening\n"),
            ("Daily/b.md", "nothing"),
            ("Notes/c.md", "## Other"),
        ]);
        let mut picker = ScriptedPicker(vec![0, 1]);

        let outcome = open_random_daily_note(&mut host, "Daily", &mut picker).await?;
        assert_eq!(
            outcome,
            Outcome::Opened {
                path: "Daily/a.md".into(),
                heading: Some(Heading { line: 3, text: "Evening".into() }),
            }
        );
        assert_eq!(host.opened, vec!["Daily/a.md"]);
        assert!(host.notices.is_empty());

        let editor = host.editor.as_ref().unwrap();
        assert_eq!(editor.cursor_calls, vec![EditorPosition::new(3, 0)]);
        assert_eq!(
            editor.scroll_calls,
            vec![(EditorRange::at(EditorPosition::new(3, 0)), true)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_note_without_headings_leaves_cursor() -> anyhow::Result<()> {
        let mut host = MockHost::with_files(&[("Daily/b.md", "just text\n# Title\n")]);
        let outcome = open_random_daily_note(&mut host, "Daily", &mut SeededPicker::new(3)).await?;

        assert_eq!(
            outcome,
            Outcome::Opened { path: "Daily/b.md".into(), heading: None }
        );
        assert!(host.cursor_calls().is_empty());
        assert!(host.editor.as_ref().unwrap().scroll_calls.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_no_active_editor_skips_navigation() -> anyhow::Result<()> {
        let mut host = MockHost::with_files(&[("Daily/a.md", "## A")]);
        host.no_editor = true;
        let outcome = open_random_daily_note(&mut host, "Daily", &mut SeededPicker::new(3)).await?;
        assert_eq!(
            outcome,
            Outcome::Opened { path: "Daily/a.md".into(), heading: None }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_open_failure_propagates() {
        let mut host = MockHost::with_files(&[("Daily/a.md", "## A")]);
        host.fail_open = true;
        let result = open_random_daily_note(&mut host, "Daily", &mut SeededPicker::new(3)).await;
        assert!(matches!(result, Err(HostError::FileNotFound(_))));
        assert!(host.notices.is_empty());
    }

    #[tokio::test]
    async fn test_cursor_targets_an_extracted_heading() -> anyhow::Result<()> {
        let text = "## A\nx\n## B\ny\n## C\n";
        let lines: Vec<usize> = extract_headings(text).iter().map(|h| h.line).collect();
        let mut picker = SeededPicker::new(11);

        for _ in 0..50 {
            let mut host = MockHost::with_files(&[("Daily/a.md", text)]);
            open_random_daily_note(&mut host, "Daily", &mut picker).await?;
            let calls = host.cursor_calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].ch, 0);
            assert!(lines.contains(&calls[0].line));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_note_selection_is_uniform() -> anyhow::Result<()> {
        let notes = ["Daily/1.md", "Daily/2.md", "Daily/3.md", "Daily/4.md"];
        let entries: Vec<(&str, &str)> = notes
            .iter()
            .map(|p| (*p, ""))
            .chain([("Other/x.md", "")])
            .collect();
        let mut host = MockHost::with_files(&entries);
        let mut picker = SeededPicker::new(2024);

        let trials = 20_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            if let Outcome::Opened { path, .. } =
                open_random_daily_note(&mut host, "Daily", &mut picker).await?
            {
                *counts.entry(path).or_default() += 1;
            }
        }

        assert_eq!(counts.len(), notes.len());
        assert!(!counts.contains_key("Other/x.md"));
        let expected = trials as f64 / notes.len() as f64;
        for note in notes {
            let observed = counts[note] as f64;
            assert!(
                (observed - expected).abs() < expected * 0.05,
                "{note}: {observed} vs {expected}"
            );
        }
        Ok(())
    }
}
