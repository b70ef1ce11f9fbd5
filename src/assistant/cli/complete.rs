//! Tab completion for the interactive session.
//!
//! Only the command word is completed. Candidates come from the same catalog
//! that backs `assistant __complete` and the "did you mean" hints.

use assistant::commands::input::{command_names, complete};
use rustyline::completion::{Completer, Pair};
use rustyline::{Context, Helper, Highlighter, Hinter, Validator};

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CommandHelper;

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = command_candidates(line, pos);
        let pairs = names
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Command names that can replace `line[start..pos]`, with `start`.
///
/// Leading spaces are skipped. Once the cursor is past the first word there is
/// nothing to offer.
pub fn command_candidates(line: &str, pos: usize) -> (usize, Vec<&'static str>) {
    let before = line.get(..pos).unwrap_or(line);
    let start = before.len() - before.trim_start().len();
    let word = &before[start..];

    if word.is_empty() {
        // Tab at an empty prompt lists everything.
        let rest_is_blank = line[start..].trim().is_empty();
        if !rest_is_blank {
            return (start, Vec::new());
        }
        return (start, command_names().collect());
    }
    (start, complete(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_command_prefix() {
        let (start, names) = command_candidates("add-", 4);
        assert_eq!(start, 0);
        assert_eq!(names, vec!["add-birthday", "add-email", "add-note", "add-tag"]);
    }

    #[test]
    fn skips_leading_spaces() {
        let (start, names) = command_candidates("  sho", 5);
        assert_eq!(start, 2);
        assert!(names.contains(&"show-birthday"));
        assert!(names.iter().all(|n| n.starts_with("sho")));
    }

    #[test]
    fn nothing_after_first_word() {
        assert!(command_candidates("add Iv", 6).1.is_empty());
        assert!(command_candidates("add ", 4).1.is_empty());
    }

    #[test]
    fn uses_text_before_cursor() {
        let (_, names) = command_candidates("phone Ivan", 2);
        assert!(names.contains(&"phone"));
    }

    #[test]
    fn empty_prompt_lists_catalog() {
        let (start, names) = command_candidates("", 0);
        assert_eq!(start, 0);
        assert_eq!(names, command_names().collect::<Vec<_>>());
    }

    #[test]
    fn unknown_prefix_has_no_candidates() {
        assert!(command_candidates("zzz", 3).1.is_empty());
    }
}
