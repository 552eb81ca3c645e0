/// Help rows as (key, description); an empty key marks a category header
/// and an empty pair a blank spacer line
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
    ("F2 / Alt+1", "Go to ChatGPT"),
    ("F3 / Alt+2", "Go to Internal Data"),
    ("Ctrl+G", "Go home"),
    ("Alt+Left", "Go back"),
    ("Tab", "Switch focus (Query / Suggestions)"),
    ("", ""),
    ("", "QUERY"),
    ("Enter", "Submit question"),
    ("Ctrl+L", "Clear chat"),
    ("PgUp/PgDn", "Scroll transcript"),
    ("", ""),
    ("", "SUGGESTIONS"),
    ("↑/↓ or k/j", "Move highlight"),
    ("Enter/Space", "Ask highlighted suggestion"),
    ("1-9", "Ask suggestion by number"),
    ("Esc", "Back to query"),
];

pub const HELP_FOOTER: &str = "Press F1 or Esc to close";
