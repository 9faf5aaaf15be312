//! Settings sections listed in the tab strip.

/// Icon drawn next to a section label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionIcon {
    /// Single user silhouette.
    User,
    /// Group of users.
    Users,
    /// Stacked layers.
    Layers,
    /// Shield.
    Shield,
    /// Gear.
    Gear,
}

/// A tab of the settings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    /// Signed-in user's profile.
    #[default]
    Profile,
    /// Collaborator roster.
    Collaborators,
    /// Teams collaborators are assigned to.
    Teams,
    /// Manager access and permissions.
    Access,
    /// Dashboard-wide preferences.
    General,
}

impl SettingsSection {
    /// All sections in tab order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Profile,
            Self::Collaborators,
            Self::Teams,
            Self::Access,
            Self::General,
        ]
    }

    /// Stable identifier used for element ids and keys.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Collaborators => "collaborators",
            Self::Teams => "teams",
            Self::Access => "access",
            Self::General => "general",
        }
    }

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Perfil",
            Self::Collaborators => "Colaboradores",
            Self::Teams => "Equipes",
            Self::Access => "Acesso",
            Self::General => "Geral",
        }
    }

    /// One-line summary shown in the section panel.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Profile => "Dados da sua conta e preferências pessoais.",
            Self::Collaborators => "Cadastre, edite e remova colaboradores.",
            Self::Teams => "Organize colaboradores em equipes.",
            Self::Access => "Controle o modo gestor e as permissões de acesso.",
            Self::General => "Preferências gerais do painel.",
        }
    }

    /// Icon drawn before the caption.
    #[must_use]
    pub const fn icon(self) -> SectionIcon {
        match self {
            Self::Profile => SectionIcon::User,
            Self::Collaborators => SectionIcon::Users,
            Self::Teams => SectionIcon::Layers,
            Self::Access => SectionIcon::Shield,
            Self::General => SectionIcon::Gear,
        }
    }
}

/// One rendered tab of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabEntry {
    /// Section the tab stands for.
    pub section: SettingsSection,
    /// Whether this is the selected tab.
    pub active: bool,
}

impl TabEntry {
    /// Section reported when the tab is clicked, whether or not it is already active.
    #[must_use]
    pub const fn click(self) -> SettingsSection {
        self.section
    }
}

/// Tabs in catalogue order with exactly one marked active.
#[must_use]
pub fn tab_entries(active: SettingsSection) -> [TabEntry; 5] {
    SettingsSection::all().map(|section| TabEntry {
        section,
        active: section == active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn profile_is_first_and_default() {
        assert_eq!(SettingsSection::all()[0], SettingsSection::default());
    }

    #[test]
    fn labels_and_ids_are_unique() {
        let labels: HashSet<_> = SettingsSection::all()
            .iter()
            .map(|section| section.label())
            .collect();
        let ids: HashSet<_> = SettingsSection::all()
            .iter()
            .map(|section| section.id())
            .collect();
        assert_eq!(labels.len(), SettingsSection::all().len());
        assert_eq!(ids.len(), SettingsSection::all().len());
    }

    #[test]
    fn every_section_has_copy() {
        for section in SettingsSection::all() {
            assert!(!section.label().is_empty());
            assert!(section.description().ends_with('.'));
        }
    }

    #[test]
    fn exactly_one_entry_is_active() {
        for active in SettingsSection::all() {
            let entries = tab_entries(active);
            let marked: Vec<_> = entries.iter().filter(|entry| entry.active).collect();
            assert_eq!(marked.len(), 1);
            assert_eq!(marked[0].section, active);
        }
    }

    #[test]
    fn clicking_reports_section_even_when_active() {
        let entries = tab_entries(SettingsSection::Teams);
        for entry in entries {
            assert_eq!(entry.click(), entry.section);
        }
        let current = entries
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.click());
        assert_eq!(current, Some(SettingsSection::Teams));
    }

    #[test]
    fn icons_follow_sections() {
        assert_eq!(SettingsSection::Collaborators.icon(), SectionIcon::Users);
        assert_eq!(SettingsSection::Access.icon(), SectionIcon::Shield);
        assert_eq!(SettingsSection::General.icon(), SectionIcon::Gear);
    }
}
