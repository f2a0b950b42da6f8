//! Text rendering for the header, home screen, and profile screen.

use crate::profile::{EditSession, Mode, ProfileField};
use crate::shell::auth::AuthState;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Presentation switches shared by all screens
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "MyApp".to_string(),
            color: true,
        }
    }
}

impl RenderOptions {
    fn heading(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.bold())
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.red())
        } else {
            text.to_string()
        }
    }

    fn passed(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.green())
        } else {
            text.to_string()
        }
    }

    fn pending(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.dimmed())
        } else {
            text.to_string()
        }
    }
}

pub fn render_header(auth: &AuthState, opts: &RenderOptions) -> String {
    let actions = match auth.user() {
        Some(user) => format!("Hello, {}  [Log Out]", user.username),
        None => "[Log In] [Register]".to_string(),
    };
    format!("{}    {}", opts.heading(&opts.title), actions)
}

pub fn render_home(opts: &RenderOptions) -> String {
    [
        opts.heading("Welcome Home!"),
        "This is the home screen of your app.".to_string(),
        "[Get Started]".to_string(),
    ]
    .join("\n")
}

pub fn render_profile(session: &EditSession, opts: &RenderOptions) -> String {
    let mut out = opts.heading("User Profile");
    out.push('\n');
    match session.mode() {
        Mode::Viewing => out.push_str(&render_profile_view(session)),
        Mode::Editing => out.push_str(&render_profile_form(session, opts)),
    }
    out
}

fn render_profile_view(session: &EditSession) -> String {
    let record = session.committed();
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec!["Name:", record.name.as_str()]);
    table.add_row(vec!["Email:", record.email.as_str()]);
    table.add_row(vec!["Password:".to_string(), record.masked_password()]);
    table.add_row(vec!["Bio:", record.bio.as_str()]);
    format!("{}\n[Edit Profile]", table)
}

fn render_profile_form(session: &EditSession, opts: &RenderOptions) -> String {
    let draft = session.current();
    let errors = session.visible_errors();
    let mut lines = Vec::new();

    for field in ProfileField::ALL {
        let value = match field {
            ProfileField::Password => draft.masked_password(),
            _ => draft.get(field).to_string(),
        };
        lines.push(format!("{}: {}", field.label(), value));
        if let Some(err) = errors.get(field) {
            lines.push(format!("  {}", opts.error(&err.message)));
        }
        if field == ProfileField::Password {
            for (req, passed) in session.checklist() {
                let line = if passed {
                    opts.passed(&format!("[x] {}", req.label))
                } else {
                    opts.pending(&format!("[ ] {}", req.label))
                };
                lines.push(format!("  {}", line));
            }
        }
    }

    lines.push("[Save] [Cancel]".to_string());
    lines.join("\n")
}
