pub mod delivery;
pub mod geometry;
mod roster;

pub use delivery::ImageDelivery;
pub use roster::{Roster, RosterError};

/// What a role card needs to render: the display name and, optionally,
/// where to fetch the profile picture from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CardInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    President,
    VicePresident,
}

impl Default for Role {
    fn default() -> Self {
        Role::VicePresident
    }
}

impl Role {
    /// Card background. The stars are baked into the graphic.
    pub fn background(&self) -> &'static str {
        match self {
            Role::President => "/images/president.svg",
            Role::VicePresident => "/images/vicepresident.svg",
        }
    }

    pub fn background_alt(&self) -> String {
        format!("{} Card Background", self)
    }

    pub fn profile_alt(&self) -> String {
        format!("{} Profile", self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::President => write!(f, "President"),
            Role::VicePresident => write!(f, "Vice-President"),
        }
    }
}

/// One entry of the roster: who holds which role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Lead {
    pub role: Role,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

impl Lead {
    /// Splits the entry into the card's role and what it displays.
    pub fn into_card(self) -> (Role, CardInput) {
        let Lead {
            role,
            name,
            image_src,
        } = self;
        (role, CardInput { name, image_src })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_assets() {
        assert_eq!(Role::VicePresident.background(), "/images/vicepresident.svg");
        assert_eq!(Role::President.background(), "/images/president.svg");
        assert_eq!(
            Role::VicePresident.background_alt(),
            "Vice-President Card Background"
        );
        assert_eq!(Role::VicePresident.profile_alt(), "Vice-President Profile");
        assert_eq!(Role::President.profile_alt(), "President Profile");
    }

    #[test]
    fn default_role_is_vice_president() {
        assert_eq!(Role::default(), Role::VicePresident);
    }

    #[test]
    fn lead_into_card() {
        let lead = Lead {
            role: Role::President,
            name: String::from("Ada"),
            image_src: Some(String::from("/people/ada.png")),
        };
        let (role, input) = lead.into_card();
        assert_eq!(role, Role::President);
        assert_eq!(
            input,
            CardInput {
                name: String::from("Ada"),
                image_src: Some(String::from("/people/ada.png")),
            }
        );
    }
}
