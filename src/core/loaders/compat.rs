use serde::Serialize;

/// Static data handed to the mod-management side: which Modrinth categories
/// and which CurseForge category a loader accepts, and which mods must be
/// swapped for an ecosystem-specific equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityDescriptor {
    /// `(source, target)` pairs, keyed by Modrinth slug-id or CurseForge numeric id.
    pub override_mods: &'static [(&'static str, &'static str)],
    pub modrinth_categories: &'static [&'static str],
    pub curseforge_category: u32,
}

impl CompatibilityDescriptor {
    pub fn override_for(&self, mod_id: &str) -> Option<&'static str> {
        self.override_mods
            .iter()
            .find(|(source, _)| *source == mod_id)
            .map(|(_, target)| *target)
    }

    pub fn accepts_category(&self, category: &str) -> bool {
        self.modrinth_categories.contains(&category)
    }
}

pub const FABRIC: CompatibilityDescriptor = CompatibilityDescriptor {
    override_mods: &[],
    modrinth_categories: &["fabric"],
    curseforge_category: 4,
};

pub const QUILT: CompatibilityDescriptor = CompatibilityDescriptor {
    override_mods: &[
        // Fabric API -> QFAPI
        ("P7dR8mSH", "qvIfYCYJ"),
        ("308769", "634179"),
        // Fabric Language Kotlin -> QKL
        ("Ha28R6CL", "lwVhp9o5"),
        ("306612", "720410"),
    ],
    modrinth_categories: &["quilt", "fabric"],
    curseforge_category: 5,
};

pub const FORGE: CompatibilityDescriptor = CompatibilityDescriptor {
    override_mods: &[],
    modrinth_categories: &["forge"],
    curseforge_category: 1,
};

pub const NEOFORGE: CompatibilityDescriptor = CompatibilityDescriptor {
    override_mods: &[],
    modrinth_categories: &["neoforge"],
    curseforge_category: 6,
};
