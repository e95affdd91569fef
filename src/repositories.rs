//! Maven repositories used by mod projects
//!
//! Order matters: Gradle queries repositories in declaration order.

use serde::Serialize;

/// Where a repository is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryKind {
    /// `gradlePluginPortal()`
    GradlePluginPortal,
    /// `mavenCentral()`
    MavenCentral,
    /// `maven { url = ... }`
    Maven,
}

/// A repository declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub kind: RepositoryKind,
    pub url: &'static str,
}

impl Repository {
    const fn maven(url: &'static str) -> Self {
        Self {
            kind: RepositoryKind::Maven,
            url,
        }
    }

    /// Gradle Kotlin DSL declaration
    pub fn to_kotlin_dsl(&self) -> String {
        match self.kind {
            RepositoryKind::GradlePluginPortal => "gradlePluginPortal()".to_string(),
            RepositoryKind::MavenCentral => "mavenCentral()".to_string(),
            RepositoryKind::Maven => format!("maven {{ url = uri(\"{}\") }}", self.url),
        }
    }
}

/// Repositories for `pluginManagement`
pub const PLUGIN_REPOSITORIES: &[Repository] = &[
    Repository {
        kind: RepositoryKind::GradlePluginPortal,
        url: "https://plugins.gradle.org/m2/",
    },
    Repository::maven("https://maven.fabricmc.net/"),
    Repository::maven("https://maven.neoforged.net/releases"),
    Repository::maven("https://maven.100media.dev/"),
];

/// Repositories for dependency resolution in every project
pub const DEPENDENCY_REPOSITORIES: &[Repository] = &[
    Repository {
        kind: RepositoryKind::MavenCentral,
        url: "https://repo.maven.apache.org/maven2/",
    },
    Repository::maven("https://maven.100media.dev/"),
    Repository::maven("https://maven.neoforged.net/releases"),
    Repository::maven("https://maven.fabricmc.net/"),
    Repository::maven("https://maven.parchmentmc.org/"),
    Repository::maven("https://maven.shedaniel.me/"),
    Repository::maven("https://maven.terraformersmc.com/"),
    Repository::maven("https://maven.ladysnake.org/releases"),
    Repository::maven("https://dl.cloudsmith.io/public/geckolib3/geckolib/maven/"),
    Repository::maven("https://dl.cloudsmith.io/public/tslat/sbl/maven/"),
    Repository::maven("https://maven.kosmx.dev/"),
    Repository::maven("https://maven.blamejared.com/"),
    Repository::maven("https://api.modrinth.com/maven"),
    Repository::maven("https://cursemaven.com"),
];

/// Render a `repositories { }` block
pub fn kotlin_block(repositories: &[Repository]) -> String {
    let mut out = String::from("repositories {\n");
    for repo in repositories {
        out.push_str("    ");
        out.push_str(&repo.to_kotlin_dsl());
        out.push('\n');
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_repositories_start_with_central() {
        assert_eq!(DEPENDENCY_REPOSITORIES[0].kind, RepositoryKind::MavenCentral);
        assert_eq!(DEPENDENCY_REPOSITORIES.len(), 14);
        assert_eq!(
            DEPENDENCY_REPOSITORIES.last().unwrap().url,
            "https://cursemaven.com"
        );
    }

    #[test]
    fn plugin_repositories_order() {
        let urls: Vec<&str> = PLUGIN_REPOSITORIES.iter().map(|r| r.url).collect();
        assert_eq!(urls[1], "https://maven.fabricmc.net/");
        assert_eq!(PLUGIN_REPOSITORIES[0].kind, RepositoryKind::GradlePluginPortal);
    }

    #[test]
    fn kotlin_dsl() {
        let block = kotlin_block(&PLUGIN_REPOSITORIES[..2]);
        assert_eq!(
            block,
            "repositories {\n    gradlePluginPortal()\n    maven { url = uri(\"https://maven.fabricmc.net/\") }\n}"
        );
    }
}
