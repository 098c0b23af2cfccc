//! Plain-text rendering of the notes page

use crate::feedback::Feedback;
use crate::notes::SessionSnapshot;
use std::fmt::Write;

const RULE: &str = "----------------------------------------";

/// Render the page: heading, status lines, form, then the collection.
pub fn render(snapshot: &SessionSnapshot, feedback: &Feedback) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Notes");
    let _ = writeln!(out, "{}", RULE);

    if snapshot.busy {
        let _ = writeln!(out, "Loading...");
    }
    if let Some(message) = &feedback.success {
        let _ = writeln!(out, "[ok] {}", message);
    }
    if let Some(error) = &feedback.error {
        let _ = writeln!(out, "[error] {}", error);
    }

    let _ = writeln!(out, "title:       {}", snapshot.draft.title);
    let _ = writeln!(out, "description: {}", snapshot.draft.description);
    match &snapshot.edit_target {
        Some(id) => {
            let _ = writeln!(out, "[Save Changes] [Cancel]  (editing {})", id);
        }
        None => {
            let _ = writeln!(out, "[Create Note]");
        }
    }

    let _ = writeln!(out, "{}", RULE);
    for note in &snapshot.notes {
        let _ = writeln!(out, "#{} {}", note.id, note.title);
        if !note.description.is_empty() {
            for line in note.description.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }

    out
}
