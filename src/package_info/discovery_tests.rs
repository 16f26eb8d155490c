use super::*;
use std::fs;
use tempfile::tempdir;

fn touch(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn canonical_root(dir: &tempfile::TempDir) -> PathBuf {
    fs::canonicalize(dir.path()).unwrap()
}

#[test]
fn finds_directories_with_java_sources() -> Result<()> {
    let dir = tempdir()?;
    let root = canonical_root(&dir);
    let service = root.join("src/main/java/com/acme/service");
    let entity = root.join("src/main/java/com/acme/entity");
    touch(&service.join("FooService.java"), "public class FooService {}");
    touch(&entity.join("Foo.java"), "public class Foo {}");
    touch(&root.join("src/main/resources/application.yml"), "a: b");

    let packages = find_package_dirs(&GeneratorConfig::new(root.clone()))?;
    assert_eq!(packages, vec![entity, service]);
    Ok(())
}

#[test]
fn empty_tree_yields_no_packages() -> Result<()> {
    let dir = tempdir()?;
    let packages = find_package_dirs(&GeneratorConfig::new(dir.path().to_path_buf()))?;
    assert!(packages.is_empty());
    Ok(())
}

#[test]
fn directories_without_sources_are_excluded() -> Result<()> {
    let dir = tempdir()?;
    let root = canonical_root(&dir);
    touch(&root.join("docs/readme.txt"), "notes");
    touch(&root.join("pkg/Sources.kt"), "class Sources");
    // A header alone does not make a package
    touch(&root.join("only_header/package-info.java"), "package x;");

    let packages = find_package_dirs(&GeneratorConfig::new(root))?;
    assert!(packages.is_empty(), "unexpected packages: {packages:?}");
    Ok(())
}

#[test]
fn hidden_and_build_output_trees_are_pruned() -> Result<()> {
    let dir = tempdir()?;
    let root = canonical_root(&dir);
    touch(&root.join(".git/objects/Hidden.java"), "public class Hidden {}");
    touch(&root.join("target/generated/com/x/Gen.java"), "public class Gen {}");
    touch(&root.join("build/classes/Built.java"), "public class Built {}");
    touch(&root.join("out/production/Out.java"), "public class Out {}");
    touch(&root.join("src/com/x/Kept.java"), "public class Kept {}");

    let packages = find_package_dirs(&GeneratorConfig::new(root.clone()))?;
    assert_eq!(packages, vec![root.join("src/com/x")]);
    Ok(())
}

#[test]
fn extra_ignore_dirs_and_globs_are_honoured() -> Result<()> {
    let dir = tempdir()?;
    let root = canonical_root(&dir);
    touch(&root.join("generated/A.java"), "public class A {}");
    touch(&root.join("src/test/java/com/x/ATest.java"), "public class ATest {}");
    touch(&root.join("src/main/java/com/x/A.java"), "public class A {}");

    let mut config = GeneratorConfig::new(root.clone());
    config.ignore_dirs.insert("generated".into());
    config.ignore_globs.push("src/test".into());

    let packages = find_package_dirs(&config)?;
    assert_eq!(packages, vec![root.join("src/main/java/com/x")]);
    Ok(())
}

#[test]
fn base_package_filter_translates_dots() -> Result<()> {
    let dir = tempdir()?;
    let root = canonical_root(&dir);
    touch(&root.join("src/main/java/com/acme/api/A.java"), "public class A {}");
    touch(&root.join("src/main/java/org/other/B.java"), "public class B {}");

    let mut config = GeneratorConfig::new(root.clone());
    config.base_package = Some("com.acme".into());

    let packages = find_package_dirs(&config)?;
    assert_eq!(packages, vec![root.join("src/main/java/com/acme/api")]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_sources_mark_their_directory() -> Result<()> {
    let dir = tempdir()?;
    let root = canonical_root(&dir);
    let real = root.join("shared/Real.java");
    touch(&real, "public class Real {}");
    let linked = root.join("src/main/java/com/acme/linked");
    fs::create_dir_all(&linked)?;
    std::os::unix::fs::symlink(&real, linked.join("Linked.java"))?;
    // Dangling links are not sources
    std::os::unix::fs::symlink(root.join("gone/Gone.java"), root.join("src/main/java/Gone.java"))?;

    let packages = find_package_dirs(&GeneratorConfig::new(root.clone()))?;
    assert_eq!(packages, vec![root.join("shared"), linked.clone()]);
    assert_eq!(crate::package_info::analyze_directory(&linked)?.len(), 1);
    Ok(())
}

#[test]
fn invalid_glob_is_a_pattern_error() {
    let dir = tempdir().unwrap();
    let mut config = GeneratorConfig::new(dir.path().to_path_buf());
    config.ignore_globs.push("a/[".into());

    let err = find_package_dirs(&config).unwrap_err();
    assert!(matches!(err, PkgInfoError::Pattern { .. }));
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path().join("does-not-exist"));
    assert!(find_package_dirs(&config).is_err());
}

#[test]
fn is_source_file_skips_header() {
    assert!(is_source_file(Path::new("/x/Foo.java")));
    assert!(!is_source_file(Path::new("/x/package-info.java")));
    assert!(!is_source_file(Path::new("/x/Foo.kt")));
    assert!(!is_source_file(Path::new("/x/java")));
}
