//! Page gates and redirects
//!
//! A gated page either receives a capability token or an unconditional
//! redirect to the landing page. Editors require the token at construction,
//! so code holding an editor has passed the gate.

use super::Session;

/// Notice shown before leaving the content-management page
pub const NO_PERMISSION_NOTICE: &str = "Keine Berechtigung für diese Seite!";

/// Where the current page lives, which decides the landing-page path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Page at the site root
    #[default]
    Root,
    /// Page inside the `components/` directory
    Components,
}

impl Location {
    pub fn landing_page(self) -> &'static str {
        match self {
            Location::Root => "index.html",
            Location::Components => "../index.html",
        }
    }
}

/// Navigation away from the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: &'static str,
    /// Message shown before navigating, if any
    pub notice: Option<&'static str>,
}

impl Redirect {
    pub fn to_landing(location: Location, notice: Option<&'static str>) -> Self {
        Self {
            target: location.landing_page(),
            notice,
        }
    }
}

/// Proof that the holder passed the content-management gate
#[derive(Debug, Clone)]
pub struct ContentAccess {
    session: Session,
}

impl ContentAccess {
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Proof that the holder passed the user-registry gate
#[derive(Debug, Clone)]
pub struct AdminAccess {
    session: Session,
}

impl AdminAccess {
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Content-management gate: level Leader or better
pub fn require_content_access(
    session: Option<&Session>,
    location: Location,
) -> Result<ContentAccess, Redirect> {
    match session {
        Some(session) if session.can_manage_content() => Ok(ContentAccess {
            session: session.clone(),
        }),
        _ => Err(Redirect::to_landing(location, Some(NO_PERMISSION_NOTICE))),
    }
}

/// User-registry gate: role label `ADMIN`
///
/// Keys off the role label, not the level.
pub fn require_admin_access(
    session: Option<&Session>,
    location: Location,
) -> Result<AdminAccess, Redirect> {
    match session {
        Some(session) if session.user().has_admin_role() => Ok(AdminAccess {
            session: session.clone(),
        }),
        _ => Err(Redirect::to_landing(location, None)),
    }
}
