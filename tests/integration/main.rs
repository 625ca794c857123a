//! Integration tests for the apt install step

#[cfg(unix)]
mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Scratch root with stub `apt-get` and `envman` that log their argv
    struct Sandbox {
        dir: TempDir,
    }

    impl Sandbox {
        fn new() -> Self {
            let sandbox = Self {
                dir: TempDir::new().unwrap(),
            };
            fs::create_dir_all(sandbox.root().join("etc/apt/apt.conf.d")).unwrap();
            fs::create_dir_all(sandbox.root().join("var/cache/apt/archives/partial")).unwrap();
            fs::create_dir_all(sandbox.bin()).unwrap();
            sandbox.stub("apt-get", "apt.log", 0);
            sandbox.stub("envman", "envman.log", 0);
            sandbox
        }

        fn root(&self) -> PathBuf {
            self.dir.path().join("root")
        }

        fn bin(&self) -> PathBuf {
            self.dir.path().join("bin")
        }

        /// Write a stub that records one `[arg]...` line per call and its
        /// stdin under `<log>.stdin`, then exits with `code`
        fn stub(&self, name: &str, log: &str, code: i32) {
            let path = self.bin().join(name);
            let script = format!(
                "#!/bin/sh\nprintf '[%s]' \"$@\" >> '{log}'\necho >> '{log}'\ncat >> '{log}.stdin'\nexit {code}\n",
                log = self.dir.path().join(log).display(),
            );
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        /// Make `apt-get` fail when its first argument is `verb`
        fn fail_apt_on(&self, verb: &str) {
            let path = self.bin().join("apt-get");
            let log = self.dir.path().join("apt.log");
            let script = format!(
                "#!/bin/sh\nprintf '[%s]' \"$@\" >> '{log}'\necho >> '{log}'\n[ \"$1\" = \"{verb}\" ] && exit 100\nexit 0\n",
                log = log.display(),
            );
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        fn calls(&self, log: &str) -> Vec<String> {
            fs::read_to_string(self.dir.path().join(log))
                .map(|s| s.lines().map(str::to_string).collect())
                .unwrap_or_default()
        }

        fn stdin(&self, log: &str) -> String {
            fs::read_to_string(self.dir.path().join(format!("{log}.stdin"))).unwrap_or_default()
        }

        fn step(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("apt-install-step");
            cmd.env_clear()
                .env("APT_STEP_ROOT", self.root())
                .env("APT_STEP_APT_GET", self.bin().join("apt-get"))
                .env("APT_STEP_ENVMAN", self.bin().join("envman"));
            cmd
        }
    }

    fn exists(path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("apt-install-step")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("apt packages"));
    }

    #[test]
    fn upgrade_with_cache_disabled() {
        let sandbox = Sandbox::new();
        let root = sandbox.root();
        fs::write(root.join("var/cache/apt/archives/curl.deb"), b"deb").unwrap();
        fs::write(root.join("var/cache/apt/pkgcache.bin"), b"cache").unwrap();

        sandbox
            .step()
            .env("packages", "curl git")
            .env("upgrade", "yes")
            .env("options", "--no-install-recommends")
            .env("cache_level", "none")
            .assert()
            .success()
            .stdout(predicate::str::contains("- Packages: curl git"))
            .stdout(predicate::str::contains("- Cache Level: none"))
            .stdout(predicate::str::contains(
                "apt-get upgrade -y --no-install-recommends curl git",
            ));

        assert_eq!(
            sandbox.calls("apt.log"),
            vec![
                "[update]",
                "[upgrade][-y][--no-install-recommends][curl][git]"
            ]
        );

        let conf = fs::read_to_string(root.join("etc/apt/apt.conf.d/00_disable-cache")).unwrap();
        assert!(conf.contains("Dir::Cache::archives \"\";"));
        assert_eq!(conf.lines().count(), 4);
        assert!(!exists(&root.join("var/cache/apt/archives")));
        assert!(!exists(&root.join("var/cache/apt/pkgcache.bin")));
        assert!(sandbox.calls("envman.log").is_empty());
    }

    #[test]
    fn install_with_cache_all() {
        let sandbox = Sandbox::new();
        let root = sandbox.root();
        fs::write(root.join("etc/apt/apt.conf.d/docker-clean"), b"hook").unwrap();

        sandbox
            .step()
            .env("packages", "curl")
            .env("cache_level", "all")
            .env("BITRISE_CACHE_INCLUDE_PATHS", "/root/.gradle")
            .assert()
            .success();

        assert!(!exists(&root.join("etc/apt/apt.conf.d/docker-clean")));
        assert!(exists(&root.join("var/cache/apt/archives")));
        assert_eq!(
            sandbox.calls("envman.log"),
            vec!["[add][--key][BITRISE_CACHE_INCLUDE_PATHS]"]
        );
        assert_eq!(
            sandbox.stdin("envman.log"),
            format!("/root/.gradle\n{}", root.join("var/cache/apt/archives").display())
        );
        assert_eq!(sandbox.calls("apt.log"), vec!["[update]", "[install][-y][curl]"]);
    }

    #[test]
    fn no_cache_level_leaves_cache_alone() {
        let sandbox = Sandbox::new();
        let root = sandbox.root();
        fs::write(root.join("etc/apt/apt.conf.d/docker-clean"), b"hook").unwrap();

        sandbox.step().env("packages", "curl").assert().success();

        assert!(exists(&root.join("etc/apt/apt.conf.d/docker-clean")));
        assert!(!exists(&root.join("etc/apt/apt.conf.d/00_disable-cache")));
        assert!(sandbox.calls("envman.log").is_empty());
    }

    #[test]
    fn missing_packages_fails_without_running_apt() {
        let sandbox = Sandbox::new();

        sandbox
            .step()
            .env("packages", "")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Configs:"))
            .stderr(predicate::str::contains("no packages parameter specified"));

        assert!(sandbox.calls("apt.log").is_empty());
    }

    #[test]
    fn invalid_upgrade_names_field() {
        let sandbox = Sandbox::new();

        sandbox
            .step()
            .env("packages", "curl")
            .env("upgrade", "maybe")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid 'upgrade' specified (maybe)"));

        assert!(sandbox.calls("apt.log").is_empty());
    }

    #[test]
    fn rejected_log_format_exits_one() {
        let sandbox = Sandbox::new();

        sandbox
            .step()
            .env("packages", "curl")
            .env("APT_STEP_LOG_FORMAT", "JSON")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid value 'JSON'"));

        assert!(sandbox.calls("apt.log").is_empty());
    }

    #[test]
    fn non_utf8_packages_exits_one() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let sandbox = Sandbox::new();

        sandbox
            .step()
            .env("packages", OsStr::from_bytes(b"curl\xff"))
            .assert()
            .code(1);

        assert!(sandbox.calls("apt.log").is_empty());
    }

    #[test]
    fn version_exits_zero() {
        cargo_bin_cmd!("apt-install-step")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn malformed_options_fail_before_any_side_effect() {
        let sandbox = Sandbox::new();
        let root = sandbox.root();

        sandbox
            .step()
            .env("packages", "curl")
            .env("options", "'foo")
            .env("cache_level", "none")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Can't split options"));

        assert!(sandbox.calls("apt.log").is_empty());
        assert!(exists(&root.join("var/cache/apt/archives")));
        assert!(!exists(&root.join("etc/apt/apt.conf.d/00_disable-cache")));
    }

    #[test]
    fn failed_update_stops_the_run() {
        let sandbox = Sandbox::new();
        sandbox.fail_apt_on("update");

        sandbox
            .step()
            .env("packages", "curl")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Can't update"));

        assert_eq!(sandbox.calls("apt.log"), vec!["[update]"]);
    }

    #[test]
    fn failed_install_is_reported() {
        let sandbox = Sandbox::new();
        sandbox.fail_apt_on("install");

        sandbox
            .step()
            .env("packages", "no-such-package")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Can't install packages"));
    }

    #[test]
    fn failed_cache_commit_is_reported() {
        let sandbox = Sandbox::new();
        sandbox.stub("envman", "envman.log", 1);

        sandbox
            .step()
            .env("packages", "curl")
            .env("cache_level", "all")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("could not add packages to cache"));

        assert!(sandbox.calls("apt.log").is_empty());
    }
}
