//! Project slug derivation.

/// Derive a project's URL slug from its display name by stripping all
/// whitespace. "Skyline Towers" becomes "SkylineTowers"; case is preserved
/// because existing storefront links depend on it. Uniqueness is enforced by
/// the `uq_projects_slug` constraint, not here.
pub fn project_slug(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}
