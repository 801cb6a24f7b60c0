//! UI visibility flags read by the presentation layer

use super::Session;
use serde::Serialize;

/// Which affordances the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Visibility {
    pub login_button: bool,
    pub logout_button: bool,
    pub manage_link: bool,
    pub manage_icon: bool,
    pub user_management: bool,
}

impl Visibility {
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            None => Self {
                login_button: true,
                ..Self::default()
            },
            Some(session) => {
                let manage = session.can_manage_content();
                Self {
                    login_button: false,
                    logout_button: true,
                    manage_link: manage,
                    manage_icon: manage,
                    user_management: session.user().has_admin_role(),
                }
            }
        }
    }
}
