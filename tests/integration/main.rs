//! Integration tests for modding-tools

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::io::{Read, Write};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::{ZipArchive, ZipWriter};

    /// Command isolated from the user's global config
    fn modtools(temp: &TempDir) -> Command {
        modtools_in(temp, temp.path())
    }

    fn modtools_in(temp: &TempDir, project_dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("modding-tools");
        cmd.env("MODTOOLS_CONFIG", temp.path().join("config.toml"))
            .env_remove("ORG_GRADLE_PROJECT_minecraft_version")
            .env_remove("ORG_GRADLE_PROJECT_minecraftVersion")
            .env_remove("ORG_GRADLE_PROJECT_mod_id")
            .env_remove("ORG_GRADLE_PROJECT_modId")
            .arg("-C")
            .arg(project_dir);
        cmd
    }

    fn write_jar(path: &Path, entries: &[(&str, &str)]) {
        let file = std::fs::File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    fn read_entry(path: &Path, name: &str) -> String {
        let mut archive = ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut out = String::new();
        entry.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("version catalogs"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("modding-tools"));
    }

    #[test]
    fn catalog_for_known_version() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["catalog", "1.21.1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[versions]"))
            .stdout(predicate::str::contains("Minecraft 1.21.1"))
            .stdout(predicate::str::contains("[libraries]"));
    }

    #[test]
    fn catalog_version_from_gradle_properties() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("gradle.properties"),
            "minecraft_version=1.20.4\n",
        )
        .unwrap();

        modtools(&temp)
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("Minecraft 1.20.4"));
    }

    #[test]
    fn catalog_to_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("gradle").join("nyfs.versions.toml");

        modtools(&temp)
            .args(["catalog", "1.20.1", "--output"])
            .arg(&output)
            .assert()
            .success();

        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("[versions]"));
    }

    #[test]
    fn catalog_from_directory_source() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("versions");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(
            data.join("_base.json"),
            r#"{"versions": {"minecraft": "1.20.1", "fabric_loader": "0.15.0"}}"#,
        )
        .unwrap();
        std::fs::write(data.join("1.21.json"), r#"{"versions": {"minecraft": "1.21"}}"#).unwrap();
        std::fs::write(data.join("index.txt"), "_base\n1.21\n").unwrap();

        modtools(&temp)
            .args(["catalog", "1.21.4", "--source"])
            .arg(&data)
            .assert()
            .success()
            .stdout(predicate::str::contains("minecraft = \"1.21\""))
            .stdout(predicate::str::contains("fabric-loader = \"0.15.0\""));
    }

    #[test]
    fn catalog_malformed_source_fails() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("versions");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("_base.json"), "{ not json").unwrap();

        modtools(&temp)
            .args(["catalog", "1.20.1", "--source"])
            .arg(&data)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Malformed version data"));
    }

    #[test]
    fn versions_lists_builtin() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .arg("versions")
            .assert()
            .success()
            .stdout(predicate::str::contains("1.20.1"))
            .stdout(predicate::str::contains("_base").not());
    }

    #[test]
    fn repos_lists_dependency_repositories() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .arg("repos")
            .assert()
            .success()
            .stdout(predicate::str::contains("https://cursemaven.com"));
    }

    #[test]
    fn repos_plugins_kotlin() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["repos", "--plugins", "--format", "kotlin"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gradlePluginPortal()"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[catalog]"));
    }

    #[test]
    fn config_set_unknown_key() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn completions_bash() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("modding-tools"));
    }

    #[test]
    fn inject_missing_jar_is_skipped() {
        let temp = TempDir::new().unwrap();
        modtools(&temp)
            .args(["inject", "missing.jar", "--platform", "fabric", "--require", "a:b:1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("does not exist"));
    }

    #[test]
    fn inject_without_platform_fails() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("common");
        std::fs::create_dir_all(&project).unwrap();

        modtools_in(&temp, &project)
            .args(["inject", "x.jar", "--require", "a:b:1.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--platform"));
    }

    #[test]
    fn inject_fabric_jar() {
        let temp = TempDir::new().unwrap();
        let jar: PathBuf = temp.path().join("example-1.0.jar");
        write_jar(
            &jar,
            &[
                ("fabric.mod.json", r#"{"schemaVersion": 1, "id": "example"}"#),
                ("assets/example/lang/en_us.json", "{}"),
            ],
        );

        modtools(&temp)
            .args(["inject", "example-1.0.jar", "--platform", "fabric", "--mod-id", "example"])
            .args(["--require", "software.bernie.geckolib:geckolib-fabric:4.7"])
            .args(["--optional", "dev.emi:emi-fabric:1.1.7+1.21"])
            .assert()
            .success()
            .stdout(predicate::str::contains("fabric.mod.json"));

        let metadata: serde_json::Value =
            serde_json::from_str(&read_entry(&jar, "fabric.mod.json")).unwrap();
        assert_eq!(metadata["depends"]["geckolib"], ">=4.7");
        assert_eq!(metadata["recommends"]["emi"], ">=1.1.7");
        assert_eq!(read_entry(&jar, "assets/example/lang/en_us.json"), "{}");
        assert!(!temp.path().join("example-1.0-temp.jar").exists());
    }

    #[test]
    fn inject_uses_project_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("modtools.toml"),
            r#"
[project]
name = "example"
mod_id = "example"
platform = "neoforge"

[[dependencies]]
notation = "mezz.jei:jei-1.21.1-neoforge:19.21.0.247"
kind = "optional"
mod_id = "jei"
"#,
        )
        .unwrap();
        let jar = temp.path().join("example.jar");
        write_jar(
            &jar,
            &[("META-INF/neoforge.mods.toml", "[[mods]]\nmodId=\"example\"\n")],
        );

        modtools(&temp)
            .args(["inject", "example.jar"])
            .assert()
            .success();

        let toml = read_entry(&jar, "META-INF/neoforge.mods.toml");
        assert!(toml.contains("[[dependencies.example]]"));
        assert!(toml.contains("modId=\"jei\""));
        assert!(toml.contains("type=\"optional\""));
        assert!(toml.contains("versionRange=\"[19.21.0,)\""));
    }

    #[test]
    fn deps_lists_buckets() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("modtools.toml"),
            r#"
[project]
name = "fabric"

[[dependencies]]
notation = "software.bernie.geckolib:geckolib-fabric-1.21.1:4.7"
kind = "embedded"
"#,
        )
        .unwrap();

        modtools(&temp)
            .args(["deps", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "implementation(\"software.bernie.geckolib:geckolib-fabric-1.21.1:4.7\")",
            ))
            .stdout(predicate::str::contains(
                "include(\"software.bernie.geckolib:geckolib-fabric-1.21.1:4.7\")",
            ));
    }
}
