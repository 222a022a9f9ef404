//! Formatting toolbar.
//!
//! Toolbar buttons name an action; the action is applied to whatever
//! implements [`RichTextCommands`]. The page uses [`ExecCommandScript`], which
//! turns each action into the browser's native editing command, so undo and
//! redo ride on the browser's own editing history.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Bold,
    Italic,
    Underline,
    Undo,
    Redo,
    Copy,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 6] = [
        ToolbarAction::Bold,
        ToolbarAction::Italic,
        ToolbarAction::Underline,
        ToolbarAction::Undo,
        ToolbarAction::Redo,
        ToolbarAction::Copy,
    ];

    /// Value of the button's `data-action` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolbarAction::Bold => "bold",
            ToolbarAction::Italic => "italic",
            ToolbarAction::Underline => "underline",
            ToolbarAction::Undo => "undo",
            ToolbarAction::Redo => "redo",
            ToolbarAction::Copy => "copy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::Bold => "B",
            ToolbarAction::Italic => "I",
            ToolbarAction::Underline => "U",
            ToolbarAction::Undo => "Undo",
            ToolbarAction::Redo => "Redo",
            ToolbarAction::Copy => "Copy",
        }
    }
}

/// Editing operations a rich-text surface must provide.
pub trait RichTextCommands {
    fn bold(&mut self);
    fn italic(&mut self);
    fn underline(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);
    /// Put the region's plain-text rendering on the clipboard.
    fn copy_plain_text(&mut self);
}

pub fn apply<T: RichTextCommands + ?Sized>(action: ToolbarAction, target: &mut T) {
    match action {
        ToolbarAction::Bold => target.bold(),
        ToolbarAction::Italic => target.italic(),
        ToolbarAction::Underline => target.underline(),
        ToolbarAction::Undo => target.undo(),
        ToolbarAction::Redo => target.redo(),
        ToolbarAction::Copy => target.copy_plain_text(),
    }
}

// ============================================================================
// Browser Implementation
// ============================================================================

/// Collects script statements that drive a `contenteditable` region.
pub struct ExecCommandScript {
    region_id: String,
    statements: Vec<String>,
}

impl ExecCommandScript {
    pub fn new(region_id: &str) -> Self {
        Self {
            region_id: region_id.to_string(),
            statements: Vec::new(),
        }
    }

    fn exec(&mut self, command: &str) {
        self.statements
            .push(format!("document.execCommand('{}');", command));
    }

    /// Drains the statements collected so far.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.statements).join(" ")
    }
}

impl RichTextCommands for ExecCommandScript {
    fn bold(&mut self) {
        self.exec("bold");
    }

    fn italic(&mut self) {
        self.exec("italic");
    }

    fn underline(&mut self) {
        self.exec("underline");
    }

    fn undo(&mut self) {
        self.exec("undo");
    }

    fn redo(&mut self) {
        self.exec("redo");
    }

    fn copy_plain_text(&mut self) {
        self.statements.push(format!(
            "navigator.clipboard.writeText(document.getElementById('{}').innerText);",
            self.region_id
        ));
    }
}

/// A `switch (action)` block running the native command for every toolbar
/// action against the region `region_id`.
pub fn dispatch_script(region_id: &str) -> String {
    let mut script = ExecCommandScript::new(region_id);
    let cases: Vec<String> = ToolbarAction::ALL
        .into_iter()
        .map(|action| {
            apply(action, &mut script);
            format!("case '{}': {} break;", action.as_str(), script.take())
        })
        .collect();
    format!("switch (action) {{ {} }}", cases.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl RichTextCommands for Recorder {
        fn bold(&mut self) {
            self.calls.push("bold");
        }
        fn italic(&mut self) {
            self.calls.push("italic");
        }
        fn underline(&mut self) {
            self.calls.push("underline");
        }
        fn undo(&mut self) {
            self.calls.push("undo");
        }
        fn redo(&mut self) {
            self.calls.push("redo");
        }
        fn copy_plain_text(&mut self) {
            self.calls.push("copy");
        }
    }

    #[test]
    fn test_apply_routes_each_action() {
        let mut recorder = Recorder::default();
        for action in ToolbarAction::ALL {
            apply(action, &mut recorder);
        }
        assert_eq!(
            recorder.calls,
            vec!["bold", "italic", "underline", "undo", "redo", "copy"]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(ToolbarAction::parse("underline"), Some(ToolbarAction::Underline));
        assert_eq!(ToolbarAction::parse("strike"), None);
        for action in ToolbarAction::ALL {
            assert_eq!(ToolbarAction::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_exec_command_script() {
        let mut script = ExecCommandScript::new("editor-area");
        apply(ToolbarAction::Italic, &mut script);
        assert_eq!(script.take(), "document.execCommand('italic');");
        assert_eq!(script.take(), "");

        apply(ToolbarAction::Copy, &mut script);
        assert_eq!(
            script.take(),
            "navigator.clipboard.writeText(document.getElementById('editor-area').innerText);"
        );
    }

    #[test]
    fn test_dispatch_script_covers_all_actions() {
        let js = dispatch_script("editor-area");
        assert!(js.starts_with("switch (action) {"));
        assert!(js.contains("case 'bold': document.execCommand('bold'); break;"));
        assert!(js.contains("case 'redo': document.execCommand('redo'); break;"));
        assert!(js.contains("case 'copy': navigator.clipboard.writeText("));
        assert_eq!(js.matches("case '").count(), ToolbarAction::ALL.len());
    }
}
