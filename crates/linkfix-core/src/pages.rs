//! Page table: slug -> site path lookup for known documentation pages.
//!
//! The docs are rendered in an embedded context where the relative path of a
//! page is not always complete, so a link like `./install.md` cannot be
//! resolved positionally. The table maps each known page slug to its full
//! path under the docs root; each value supplies its own leading `/`.

use std::collections::BTreeMap;

use crate::config::LinkfixConfig;

/// Docs root in the upstream repository. Corrected URLs are formed by
/// appending a site path to this base.
pub const BASE_URL: &str = "https://github.com/HCL-TECH-SOFTWARE/hclds-keycloak/tree/main/docs";

/// Built-in slug -> path entries. Values without a filename (e.g. `helm`)
/// point at a directory page.
const DEFAULT_PAGES: &[(&str, &str)] = &[
    ("best-practices", "/administration/best-practices"),
    ("resources", "/administration/best-practices/resources.md"),
    ("rotating-keys", "/administration/best-practices/rotating-keys.md"),
    ("scaling", "/administration/best-practices/scaling.md"),
    ("custom-themes", "/customization/custom-themes.md"),
    ("custom-user-attributes", "/customization/custom-user-attributes.md"),
    ("deploy-custom-theme", "/customization/deploy-custom-theme.md"),
    (
        "oidc-customization-considerations",
        "/customization/oidc-customization-considerations.md",
    ),
    ("helm", "/deployment/helm"),
    (
        "additional-configuration-details",
        "/deployment/additional-configuration-details.md",
    ),
    (
        "configuration-properties",
        "/deployment/configuration-properties.md",
    ),
    ("install", "/deployment/install.md"),
    ("troubleshooting", "/deployment/troubleshooting.md"),
    ("uninstall", "/deployment/uninstall.md"),
    ("using-postgres-ha", "/deployment/using-postgres-ha.md"),
    ("configuration", "/deployment/configuration.md"),
    ("docker-compose", "/deployment/docker-compose.md"),
    ("docker", "/deployment/docker.md"),
    ("oidc", "/getting-started/oidc"),
    ("jwt-tokens", "/getting-started/oidc/jwt-tokens.md"),
    ("service-overview", "/getting-started/service-overview"),
    ("system-requirments", "/getting-started/system-requirments"),
    (
        "terms-abbreviations",
        "/getting-started/terms-abbreviations.md",
    ),
    ("ds-integration", "/integration/ds-integration"),
    ("cnx", "/integration/ds-integration/cnx"),
    (
        "cnx-integration",
        "/integration/ds-integration/cnx/cnx-integration.md",
    ),
    (
        "cnx-keycloak-configuration",
        "/integration/ds-integration/cnx/cnx-keycloak-configuration.md",
    ),
    ("dx", "/integration/ds-integration/dx"),
    ("automation", "/integration/ds-integration/dx/automation"),
    (
        "dx-oidc-automation",
        "/integration/ds-integration/dx/automation/dx-oidc-automation.md",
    ),
    (
        "transient-users",
        "/integration/ds-integration/dx/transient-users",
    ),
    (
        "dx-update-webshpere-for-oidc-transient-users",
        "/integration/ds-integration/dx/transient-users/dx-update-webshpere-for-oidc-transient-users.md",
    ),
    (
        "transient-users-building-jaas-modules",
        "/integration/ds-integration/dx/transient-users/transient-users-building-jaas-modules.md",
    ),
    (
        "transient-users-softgroups-configuration",
        "/integration/ds-integration/dx/transient-users/transient-users-softgroups-configuration.md",
    ),
    (
        "dx-integration",
        "/integration/ds-integration/dx/dx-integration.md",
    ),
    (
        "dx-keycloak-configuration",
        "/integration/ds-integration/dx/dx-keycloak-configuration.md",
    ),
    (
        "dx-oidc-customization-considerations",
        "/integration/ds-integration/dx/dx-oidc-customization-considerations.md",
    ),
    (
        "dx-update-webshpere-for-oidc",
        "/integration/ds-integration/dx/dx-update-webshpere-for-oidc.md",
    ),
    (
        "oidc-troubleshooting",
        "/integration/ds-integration/dx/oidc-troubleshooting.md",
    ),
    ("idp-integration", "/integration/idp-integration"),
    (
        "azure-oidc-integration",
        "/integration/idp-integration/azure-oidc-integration.md",
    ),
    (
        "azure-saml-integration",
        "/integration/idp-integration/azure-saml-integration.md",
    ),
];

/// Immutable slug -> site path table. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: BTreeMap<String, String>,
}

impl PageTable {
    /// Table with only the compiled-in entries.
    pub fn builtin() -> Self {
        let entries = DEFAULT_PAGES
            .iter()
            .map(|(slug, path)| (slug.to_string(), path.to_string()))
            .collect();
        PageTable { entries }
    }

    /// Built-in entries overlaid with the `[pages]` section of the config.
    /// Config entries win on slug collision so a wrong path can be patched
    /// without a rebuild.
    pub fn from_config(cfg: &LinkfixConfig) -> Self {
        let mut table = Self::builtin();
        for (slug, path) in &cfg.pages {
            table.entries.insert(slug.clone(), path.clone());
        }
        table
    }

    /// Exact-match lookup of a cleaned slug.
    pub fn lookup(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
