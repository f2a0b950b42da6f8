//! Application shell: owns header auth, the current route, and the profile
//! view's edit session while `/user` is mounted.

use crate::error::ShellError;
use crate::profile::{EditSession, ProfileRecord, SubmitOutcome};
use crate::shell::auth::AuthState;
use crate::shell::event::Event;
use crate::shell::route::{resolve, Route, Screen};
use crate::shell::screens::{render_header, render_home, render_profile, RenderOptions};
use tracing::{debug, info};

pub struct App {
    auth: AuthState,
    route: &'static Route,
    /// Present exactly while the profile view is mounted
    profile_view: Option<EditSession>,
    /// Last committed profile; seeds the next profile view
    saved_profile: ProfileRecord,
    render: RenderOptions,
}

impl App {
    pub fn new(
        start_path: &str,
        profile: ProfileRecord,
        render: RenderOptions,
    ) -> Result<Self, ShellError> {
        let mut app = Self {
            auth: AuthState::new(),
            route: resolve("/")?,
            profile_view: None,
            saved_profile: profile,
            render,
        };
        app.navigate(start_path)?;
        Ok(app)
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn route(&self) -> &'static Route {
        self.route
    }

    /// Mounted profile view, if the current route is `/user`
    pub fn profile_view(&self) -> Option<&EditSession> {
        self.profile_view.as_ref()
    }

    /// Most recently committed profile
    pub fn saved_profile(&self) -> &ProfileRecord {
        match &self.profile_view {
            Some(session) => session.committed(),
            None => &self.saved_profile,
        }
    }

    /// Apply one event. Returns the submit outcome for submit events.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<SubmitOutcome>, ShellError> {
        debug!(event = event.name(), route = self.route.path, "Dispatching event");
        match event {
            Event::Navigate(path) => self.navigate(&path)?,
            Event::Login => self.auth.login(),
            Event::Register => self.auth.register(),
            Event::Logout => self.auth.logout(),
            Event::Show => {}
            Event::Edit => self.mounted_profile()?.begin_edit()?,
            Event::FieldChange(field, value) => {
                self.mounted_profile()?.update_field(field, value)?
            }
            Event::Submit => return Ok(Some(self.mounted_profile()?.submit()?)),
            Event::Cancel => self.mounted_profile()?.cancel()?,
        }
        Ok(None)
    }

    /// Header plus the current screen
    pub fn render(&self) -> String {
        let body = match (self.route.screen, &self.profile_view) {
            (Screen::User, Some(session)) => render_profile(session, &self.render),
            _ => render_home(&self.render),
        };
        format!("{}\n\n{}", render_header(&self.auth, &self.render), body)
    }

    fn navigate(&mut self, path: &str) -> Result<(), ShellError> {
        let next = resolve(path)?;
        if next.screen != Screen::User {
            // unmount: the draft goes away with the view
            if let Some(session) = self.profile_view.take() {
                self.saved_profile = session.committed().clone();
                debug!("Profile view unmounted");
            }
        } else if self.profile_view.is_none() {
            self.profile_view = Some(EditSession::new(self.saved_profile.clone()));
            debug!("Profile view mounted");
        }
        if next.path != self.route.path {
            info!(from = self.route.path, to = next.path, "Navigated");
        }
        self.route = next;
        Ok(())
    }

    fn mounted_profile(&mut self) -> Result<&mut EditSession, ShellError> {
        let path = self.route.path;
        self.profile_view
            .as_mut()
            .ok_or_else(|| ShellError::NoProfileView(path.to_string()))
    }
}
