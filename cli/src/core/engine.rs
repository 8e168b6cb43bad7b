//! # modassets Extraction Engine
//!
//! File: cli/src/core/engine.rs
//!
//! ## Overview
//!
//! The engine pulls the `assets/` tree out of one mod JAR and then descends into every JAR
//! bundled inside it, depth first, writing everything into a single flat output root:
//!
//! ```text
//! <output_root>/<stem>/...          depth 0
//! <output_root>/nested_<stem>/...   depth > 0, at any nesting level
//! ```
//!
//! Nested stems that collide overwrite each other (last write wins).
//!
//! ## Architecture
//!
//! `Extractor::process` is the whole algorithm:
//! 1. Dedup: the canonical path is recorded in the `ProcessedSet`; a path seen before is a
//!    logged no-op. Nested archives are always materialized to fresh scratch paths, so at
//!    depth > 0 a BLAKE3 digest of the bytes is also checked. This is what terminates an
//!    archive that bundles a copy of itself.
//! 2. Open the container. Corrupt or unreadable archives fail here, locally.
//! 3. Select `assets/` members, validate each destination with
//!    `common::fs::paths::resolve_within`, and write the survivors byte for byte.
//! 4. Discover nested JARs (`META-INF/jars/` allowed, the rest of `META-INF/` ignored),
//!    copy each to its own scratch directory, recurse, and drop the scratch directory
//!    before the next sibling.
//!
//! Every error inside one archive is logged and turned into `false` for that archive.
//! Nothing propagates to sibling archives or aborts the run.
//!
use crate::common::archive::jar::{ArchiveRef, JarArchive};
use crate::common::archive::members::{self, MemberPolicy};
use crate::common::fs::{io, paths};
use crate::core::config::ExtractConfig;
use crate::core::error::Result;
use anyhow::Context;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Engine settings derived from the `[extract]` configuration section.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub policy: MemberPolicy,
    pub nested_prefix: String,
    pub keep_asset_prefix: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::from(&ExtractConfig::default())
    }
}

impl From<&ExtractConfig> for EngineOptions {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            policy: MemberPolicy::from(config),
            nested_prefix: config.nested_prefix.clone(),
            keep_asset_prefix: config.keep_asset_prefix,
        }
    }
}

/// Archives already visited in this run. Append-only.
#[derive(Debug, Default)]
pub struct ProcessedSet {
    paths: HashSet<PathBuf>,
    digests: HashSet<blake3::Hash>,
}

impl ProcessedSet {
    /// Records a canonical archive path. Returns `false` if it was already present.
    pub fn insert_path(&mut self, canonical: PathBuf) -> bool {
        self.paths.insert(canonical)
    }

    /// Records a content digest. Returns `false` if it was already present.
    pub fn insert_digest(&mut self, digest: blake3::Hash) -> bool {
        self.digests.insert(digest)
    }
}

/// Per-run outcome counts of top-level archives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Output directory for an archive's assets.
pub fn extraction_target(
    output_root: &Path,
    depth: usize,
    stem: &str,
    nested_prefix: &str,
) -> PathBuf {
    if depth == 0 {
        output_root.join(stem)
    } else {
        output_root.join(format!("{nested_prefix}{stem}"))
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Recursive asset extractor. One instance per run.
pub struct Extractor {
    options: EngineOptions,
    processed: ProcessedSet,
    tally: Tally,
}

impl Extractor {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            processed: ProcessedSet::default(),
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Processes a top-level archive and records the outcome in the tally.
    pub fn process_top_level(&mut self, archive_path: &Path, output_root: &Path) -> bool {
        let ok = self.process(archive_path, output_root, 0);
        self.tally.record(ok);
        ok
    }

    /// Extracts the assets of `archive_path` (and of every archive nested in it) below
    /// `output_root`. Returns `false` only when the archive itself could not be processed.
    pub fn process(&mut self, archive_path: &Path, output_root: &Path, depth: usize) -> bool {
        self.process_ref(&ArchiveRef::from_path(archive_path), output_root, depth)
    }

    fn process_ref(&mut self, archive: &ArchiveRef, output_root: &Path, depth: usize) -> bool {
        let pad = indent(depth);
        let name = archive.display_name();

        let canonical = match archive.path.canonicalize() {
            Ok(path) => path,
            Err(e) => {
                error!("{pad}Cannot resolve archive {}: {}", archive.path.display(), e);
                return false;
            }
        };
        if !self.processed.insert_path(canonical) {
            info!("{pad}Skipping already processed: {name}");
            return true;
        }

        // Top-level digests are never recorded, so a bundled copy of a top-level JAR
        // still gets its own nested folder whatever the processing order.
        if depth > 0 {
            let digest = match io::hash_file(&archive.path) {
                Ok(digest) => digest,
                Err(e) => {
                    error!("{pad}Archive processing failed for {name}: {e:#}");
                    return false;
                }
            };
            if !self.processed.insert_digest(digest) {
                info!("{pad}Skipping already processed: {name} (duplicate nested content)");
                return true;
            }
        }

        let kind = if depth == 0 { "Main Mod" } else { "Nested Mod" };
        info!("{pad}Processing {kind}: {name}");

        match self.extract_archive(archive, output_root, depth) {
            Ok(()) => true,
            Err(e) => {
                error!("{pad}Archive processing failed for {name}: {e:#}");
                false
            }
        }
    }

    /// Fails only when the container cannot be opened. Member and nested-archive errors
    /// are logged and skipped.
    fn extract_archive(
        &mut self,
        archive: &ArchiveRef,
        output_root: &Path,
        depth: usize,
    ) -> Result<()> {
        let pad = indent(depth);
        let mut jar = JarArchive::open(archive)?;
        let names = jar.member_names();

        let assets = self.options.policy.asset_members(&names);
        if assets.is_empty() {
            info!("{pad}No '{}' found.", self.options.policy.asset_prefix());
        } else {
            let target = extraction_target(
                output_root,
                depth,
                &archive.stem,
                &self.options.nested_prefix,
            );
            let count = self.extract_assets(&mut jar, &assets, &target, &pad);
            info!("{pad}Extracted {count} file(s) to: {}", target.display());
        }

        let nested = self.options.policy.nested_archives(&names);
        if !nested.is_empty() {
            info!("{pad}Found {} nested JAR(s).", nested.len());
            for member in nested {
                if let Err(e) = self.descend(&mut jar, member, output_root, depth) {
                    error!("{pad}Nested JAR '{member}' could not be processed: {e:#}");
                }
            }
        } else if depth > 0 {
            info!("{pad}Finished nested JAR.");
        }
        Ok(())
    }

    /// Writes every safe asset member below `target`. Returns the number of files written.
    ///
    /// A member that cannot be written is logged and skipped.
    fn extract_assets(
        &self,
        jar: &mut JarArchive,
        assets: &[&str],
        target: &Path,
        pad: &str,
    ) -> usize {
        let base = match io::ensure_dir_exists(target).and_then(|()| {
            target
                .canonicalize()
                .with_context(|| format!("Failed to resolve extraction directory {:?}", target))
        }) {
            Ok(base) => base,
            Err(e) => {
                error!("{pad}Cannot create extraction directory: {e:#}");
                return 0;
            }
        };

        let mut count = 0;
        for member in assets {
            let relative = self
                .options
                .policy
                .asset_relative_path(member, self.options.keep_asset_prefix);
            let destination = match paths::resolve_within(&base, relative) {
                Ok(destination) => destination,
                Err(e) => {
                    warn!("{pad}Skipped unsafe path: {member}");
                    debug!("{pad}{e}");
                    continue;
                }
            };

            if member.ends_with('/') {
                if let Err(e) = io::ensure_dir_exists(&destination) {
                    error!("{pad}Failed to extract '{member}': {e:#}");
                }
                continue;
            }
            if destination == base {
                warn!("{pad}Skipped unsafe path: {member}");
                continue;
            }
            match jar.copy_member_to(member, &destination) {
                Ok(_) => {
                    debug!("{pad}Wrote {}", destination.display());
                    count += 1;
                }
                Err(e) => error!("{pad}Failed to extract '{member}': {e:#}"),
            }
        }
        count
    }

    /// Materializes nested `member` into its own scratch directory and processes it.
    ///
    /// Errors are only returned for the materialization step; the caller logs them and
    /// moves on to the next sibling.
    fn descend(
        &mut self,
        jar: &mut JarArchive,
        member: &str,
        output_root: &Path,
        depth: usize,
    ) -> Result<()> {
        let scratch = tempfile::Builder::new()
            .prefix("modassets-")
            .tempdir()
            .context("Failed to create temporary directory for nested JAR")?;
        let nested_path = scratch.path().join(members::materialized_name(member));
        jar.copy_member_to(member, &nested_path)
            .with_context(|| format!("Failed to materialize nested JAR '{member}'"))?;

        let nested = ArchiveRef::nested(&nested_path, member);
        if !self.process_ref(&nested, output_root, depth + 1) {
            debug!("{}Nested JAR '{member}' failed; continuing with siblings.", indent(depth));
        }

        if let Err(e) = scratch.close() {
            warn!("{}Failed to remove temporary files for '{member}': {e}", indent(depth));
        }
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::{Cursor, Write};
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    /// Builds a JAR in memory from `(name, bytes)` pairs. Names ending in `/` become
    /// directory entries.
    fn jar_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(*name, SimpleFileOptions::default())
                    .unwrap();
            } else {
                writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                writer.write_all(data).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
        File::create(path)
            .unwrap()
            .write_all(&jar_bytes(entries))
            .unwrap();
    }

    /// Like `jar_bytes`, but every entry is stored uncompressed so its payload can be
    /// located and damaged in the returned bytes.
    fn stored_jar_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// Flips one byte in the middle of `payload` inside `archive`, breaking its CRC.
    fn corrupt_payload(archive: &mut [u8], payload: &[u8]) {
        let start = archive
            .windows(payload.len())
            .position(|window| window == payload)
            .expect("payload not found in archive");
        archive[start + payload.len() / 2] ^= 0xFF;
    }

    /// All regular files below `root`, as sorted `/`-separated relative paths.
    fn files_under(root: &Path) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_extraction_target_naming() {
        let root = Path::new("/out");
        assert_eq!(extraction_target(root, 0, "mod_a", "nested_"), root.join("mod_a"));
        assert_eq!(extraction_target(root, 1, "lib", "nested_"), root.join("nested_lib"));
        assert_eq!(extraction_target(root, 4, "lib", "nested_"), root.join("nested_lib"));
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally, Tally { succeeded: 2, failed: 1 });
    }

    #[test]
    fn test_scenario_with_embedded_library() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let lib = jar_bytes(&[("assets/textures/y.png", b"yyy")]);
        let mod_a = dir.path().join("mod_a.jar");
        write_jar(
            &mod_a,
            &[
                ("assets/textures/x.png", b"xxx"),
                ("META-INF/jars/lib.jar", &lib),
            ],
        );

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&mod_a, &out));

        assert_eq!(
            files_under(&out),
            vec!["mod_a/textures/x.png", "nested_lib/textures/y.png"]
        );
        assert_eq!(fs::read(out.join("mod_a/textures/x.png"))?, b"xxx");
        assert_eq!(fs::read(out.join("nested_lib/textures/y.png"))?, b"yyy");
        assert_eq!(engine.tally(), Tally { succeeded: 1, failed: 0 });
        Ok(())
    }

    #[test]
    fn test_keep_asset_prefix_layout() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let mod_a = dir.path().join("mod_a.jar");
        write_jar(&mod_a, &[("assets/textures/x.png", b"xxx")]);

        let options = EngineOptions {
            keep_asset_prefix: true,
            ..Default::default()
        };
        assert!(Extractor::new(options).process(&mod_a, &out, 0));
        assert_eq!(files_under(&out), vec!["mod_a/assets/textures/x.png"]);
        Ok(())
    }

    #[test]
    fn test_only_asset_members_are_extracted() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let jar = dir.path().join("mod_b.jar");
        write_jar(
            &jar,
            &[
                ("assets/", b""),
                ("assets/lang/", b""),
                ("assets/lang/en_us.json", b"{}"),
                ("data/recipes/r.json", b"{}"),
                ("com/example/Mod.class", b"\xca\xfe\xba\xbe"),
                ("pack.mcmeta", b"{}"),
            ],
        );

        assert!(Extractor::new(EngineOptions::default()).process(&jar, &out, 0));
        assert_eq!(files_under(&out), vec!["mod_b/lang/en_us.json"]);
        Ok(())
    }

    #[test]
    fn test_archive_without_assets_succeeds_without_output() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let jar = dir.path().join("library.jar");
        write_jar(&jar, &[("com/example/Lib.class", b"\xca\xfe")]);

        assert!(Extractor::new(EngineOptions::default()).process(&jar, &out, 0));
        assert!(!out.join("library").exists());
        Ok(())
    }

    #[test]
    fn test_unsafe_members_never_written() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        fs::create_dir_all(&out)?;
        let jar = dir.path().join("evil.jar");
        write_jar(
            &jar,
            &[
                ("assets/ok.txt", b"fine"),
                ("assets/../../escaped.txt", b"pwned"),
                ("assets/../../../escaped_too.txt", b"pwned"),
                ("assets/..\\..\\backslash.txt", b"pwned"),
            ],
        );

        assert!(Extractor::new(EngineOptions::default()).process(&jar, &out, 0));
        assert_eq!(fs::read(out.join("evil/ok.txt"))?, b"fine");
        assert!(!dir.path().join("escaped.txt").exists());
        assert!(!out.join("escaped.txt").exists());
        assert!(!out.join("backslash.txt").exists());
        // Nothing outside the extraction target.
        assert_eq!(files_under(dir.path()).iter().filter(|f| !f.ends_with(".jar")).count(), 1);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_output_subdir_not_followed() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let outside = dir.path().join("outside");
        fs::create_dir_all(out.join("mod_c"))?;
        fs::create_dir_all(&outside)?;
        std::os::unix::fs::symlink(&outside, out.join("mod_c/textures"))?;

        let jar = dir.path().join("mod_c.jar");
        write_jar(&jar, &[("assets/textures/x.png", b"xxx")]);

        assert!(Extractor::new(EngineOptions::default()).process(&jar, &out, 0));
        assert!(!outside.join("x.png").exists());
        Ok(())
    }

    #[test]
    fn test_same_path_processed_once() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let jar = dir.path().join("mod_a.jar");
        write_jar(&jar, &[("assets/a.txt", b"one")]);

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process(&jar, &out, 0));

        // Removing the output shows whether the second call writes anything.
        fs::remove_dir_all(&out)?;
        let alias = dir.path().join(".").join("mod_a.jar");
        assert!(engine.process(&alias, &out, 0));
        assert!(!out.exists());
        assert_eq!(engine.processed.paths.len(), 1);
        Ok(())
    }

    #[test]
    fn test_identical_top_level_copies_both_extracted() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let entries: &[(&str, &[u8])] = &[("assets/a.txt", b"same")];
        write_jar(&dir.path().join("first.jar"), entries);
        write_jar(&dir.path().join("second.jar"), entries);

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&dir.path().join("first.jar"), &out));
        assert!(engine.process_top_level(&dir.path().join("second.jar"), &out));
        assert_eq!(files_under(&out), vec!["first/a.txt", "second/a.txt"]);
        Ok(())
    }

    #[test]
    fn test_repeated_nested_content_processed_once() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");

        // `inner` is bundled twice inside `outer`, and `outer` twice inside `top`. Every
        // copy lands at a fresh scratch path, so only the digest can recognise it.
        let inner = jar_bytes(&[("assets/a.txt", b"inner")]);
        let outer = jar_bytes(&[
            ("assets/b.txt", b"outer"),
            ("META-INF/jars/inner.jar", &inner),
            ("META-INF/jars/inner_again.jar", &inner),
        ]);
        let top = dir.path().join("top.jar");
        write_jar(
            &top,
            &[
                ("assets/c.txt", b"top"),
                ("META-INF/jars/outer.jar", &outer),
                ("libs/outer_copy.jar", &outer),
            ],
        );

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&top, &out));
        assert_eq!(
            files_under(&out),
            vec!["nested_inner/a.txt", "nested_outer/b.txt", "top/c.txt"]
        );
        assert!(!out.join("nested_inner_again").exists());
        assert!(!out.join("nested_outer_copy").exists());
        assert_eq!(engine.tally(), Tally { succeeded: 1, failed: 0 });
        Ok(())
    }

    #[test]
    fn test_nested_discovery_skips_other_metadata() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let signed = jar_bytes(&[("assets/signed.txt", b"no")]);
        let bundled = jar_bytes(&[("assets/bundled.txt", b"yes")]);
        let jar = dir.path().join("host.jar");
        write_jar(
            &jar,
            &[
                ("META-INF/other/signed.jar", &signed),
                ("META-INF/jars/bundled.jar", &bundled),
            ],
        );

        assert!(Extractor::new(EngineOptions::default()).process(&jar, &out, 0));
        assert_eq!(files_under(&out), vec!["nested_bundled/bundled.txt"]);
        Ok(())
    }

    #[test]
    fn test_deeply_nested_archives_flatten_into_output_root() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let level2 = jar_bytes(&[("assets/l2.txt", b"2")]);
        let level1 = jar_bytes(&[("assets/l1.txt", b"1"), ("META-INF/jars/level2.jar", &level2)]);
        let jar = dir.path().join("root.jar");
        write_jar(&jar, &[("META-INF/jars/level1.jar", &level1)]);

        assert!(Extractor::new(EngineOptions::default()).process(&jar, &out, 0));
        assert_eq!(
            files_under(&out),
            vec!["nested_level1/l1.txt", "nested_level2/l2.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_corrupt_archive_fails_locally() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let good_a = dir.path().join("a.jar");
        let broken = dir.path().join("b.jar");
        let good_c = dir.path().join("c.jar");
        write_jar(&good_a, &[("assets/a.txt", b"a")]);
        fs::write(&broken, b"PK\x03\x04 truncated garbage")?;
        write_jar(&good_c, &[("assets/c.txt", b"c")]);

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&good_a, &out));
        assert!(!engine.process_top_level(&broken, &out));
        assert!(engine.process_top_level(&good_c, &out));

        assert_eq!(files_under(&out), vec!["a/a.txt", "c/c.txt"]);
        assert_eq!(engine.tally(), Tally { succeeded: 2, failed: 1 });
        Ok(())
    }

    #[test]
    fn test_corrupt_nested_archive_does_not_fail_parent() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let good = jar_bytes(&[("assets/good.txt", b"ok")]);
        let jar = dir.path().join("parent.jar");
        write_jar(
            &jar,
            &[
                ("META-INF/jars/broken.jar", b"not a zip"),
                ("META-INF/jars/good.jar", &good),
            ],
        );

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&jar, &out));
        assert_eq!(files_under(&out), vec!["nested_good/good.txt"]);
        assert_eq!(engine.tally(), Tally { succeeded: 1, failed: 0 });
        Ok(())
    }

    #[test]
    fn test_nested_copy_of_top_level_jar_independent_of_order() -> Result<()> {
        let dir = tempdir()?;
        let library = jar_bytes(&[("assets/fabric/icon.png", b"icon")]);
        let standalone = dir.path().join("fabric-api.jar");
        let bundling = dir.path().join("mymod.jar");
        fs::write(&standalone, &library)?;
        write_jar(
            &bundling,
            &[
                ("assets/mymod/lang.json", b"{}"),
                ("META-INF/jars/fabric-api.jar", &library),
            ],
        );

        let run = |order: [&Path; 2], out: &Path| {
            let mut engine = Extractor::new(EngineOptions::default());
            for archive in order {
                assert!(engine.process_top_level(archive, out));
            }
            files_under(out)
        };
        let (standalone, bundling) = (standalone.as_path(), bundling.as_path());
        let top_first = run([standalone, bundling], &dir.path().join("out_a"));
        let nested_first = run([bundling, standalone], &dir.path().join("out_b"));

        assert_eq!(
            top_first,
            vec![
                "fabric-api/fabric/icon.png",
                "mymod/mymod/lang.json",
                "nested_fabric-api/fabric/icon.png",
            ]
        );
        assert_eq!(top_first, nested_first);
        Ok(())
    }

    #[test]
    fn test_unreadable_nested_member_does_not_skip_siblings() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let first = jar_bytes(&[("assets/a.txt", b"first nested payload")]);
        let second = jar_bytes(&[("assets/b.txt", b"second")]);
        let mut parent = stored_jar_bytes(&[
            ("META-INF/jars/a.jar", &first),
            ("META-INF/jars/b.jar", &second),
        ]);
        corrupt_payload(&mut parent, &first);
        let jar = dir.path().join("parent.jar");
        fs::write(&jar, &parent)?;

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&jar, &out));
        assert_eq!(files_under(&out), vec!["nested_b/b.txt"]);
        assert_eq!(engine.tally(), Tally { succeeded: 1, failed: 0 });
        Ok(())
    }

    #[test]
    fn test_unreadable_asset_member_skipped() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out");
        let damaged: &[u8] = b"texture bytes that will not survive";
        let mut bytes = stored_jar_bytes(&[
            ("assets/broken.png", damaged),
            ("assets/fine.png", b"fine"),
        ]);
        corrupt_payload(&mut bytes, damaged);
        let jar = dir.path().join("mod.jar");
        fs::write(&jar, &bytes)?;

        let mut engine = Extractor::new(EngineOptions::default());
        assert!(engine.process_top_level(&jar, &out));
        assert_eq!(files_under(&out), vec!["mod/fine.png"]);
        Ok(())
    }

    #[test]
    fn test_missing_archive_is_failure() {
        let dir = tempdir().unwrap();
        let mut engine = Extractor::new(EngineOptions::default());
        assert!(!engine.process_top_level(&dir.path().join("gone.jar"), dir.path()));
        assert_eq!(engine.tally(), Tally { succeeded: 0, failed: 1 });
    }
}
