use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownSection(value.to_owned()))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub section: SectionId,
    pub name: &'static str,
}

/// Sections reachable from the navigation bar. The hero has no link.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        section: SectionId::About,
        name: "About",
    },
    NavLink {
        section: SectionId::Skills,
        name: "Skills",
    },
    NavLink {
        section: SectionId::Projects,
        name: "Projects",
    },
    NavLink {
        section: SectionId::Contact,
        name: "Contact",
    },
];

pub fn has_nav_link(section: SectionId) -> bool {
    NAV_LINKS.iter().any(|link| link.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_with_or_without_hash() {
        assert_eq!("skills".parse::<SectionId>(), Ok(SectionId::Skills));
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!(" About ".parse::<SectionId>(), Ok(SectionId::About));
        assert!("footer".parse::<SectionId>().is_err());
    }

    #[test]
    fn hero_is_the_only_section_without_a_link() {
        let unlinked: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|section| !has_nav_link(*section))
            .collect();
        assert_eq!(unlinked, vec![SectionId::Hero]);
    }
}
