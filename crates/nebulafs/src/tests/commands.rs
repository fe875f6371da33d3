use crate::error::Error;
use crate::fs::VirtualFileSystem;
use crate::memory_persistence::MemoryStore;
use crate::path::normalize;
use crate::snapshot::{MOTD_TEXT, README_TEXT, default_tree};

fn new_fs() -> VirtualFileSystem {
    VirtualFileSystem::open(MemoryStore::new())
}

#[test]
fn test_fresh_session_walkthrough() {
    let mut fs = new_fs();

    assert_eq!(fs.pwd(), "/home/visitor");
    assert_eq!(fs.ls(None).unwrap(), vec!["projects/", "readme.txt"]);
    assert_eq!(fs.cat("readme.txt").unwrap(), README_TEXT);

    assert_eq!(fs.mkdir("notes").unwrap(), "Created directory notes");
    assert_eq!(
        fs.ls(None).unwrap(),
        vec!["notes/", "projects/", "readme.txt"]
    );

    assert_eq!(fs.cd(Some("projects")).unwrap(), "/home/visitor/projects");
    assert_eq!(fs.pwd(), "/home/visitor/projects");
}

#[test]
fn test_ls_variants() {
    let fs = new_fs();
    assert_eq!(fs.ls(Some("/")).unwrap(), vec!["home/", "system/"]);
    assert_eq!(fs.ls(Some("/system/motd.txt")).unwrap(), vec!["motd.txt"]);
    assert_eq!(fs.ls(Some("")).unwrap(), fs.ls(Some(".")).unwrap());
    assert_eq!(
        fs.ls(Some("missing")),
        Err(Error::path_not_found("missing"))
    );
}

#[test]
fn test_cd_home_and_errors() {
    let mut fs = new_fs();
    fs.cd(Some("/system")).unwrap();

    // No argument jumps home
    assert_eq!(fs.cd(None).unwrap(), "/home/visitor");
    fs.cd(Some("/")).unwrap();
    assert_eq!(fs.cd(Some("")).unwrap(), "/home/visitor");

    assert_eq!(
        fs.cd(Some("nowhere")),
        Err(Error::directory_not_found("nowhere"))
    );
    assert_eq!(
        fs.cd(Some("readme.txt")),
        Err(Error::not_a_directory("readme.txt"))
    );
    assert_eq!(fs.pwd(), "/home/visitor");
}

#[test]
fn test_cd_parent_clamps_at_root() {
    let mut fs = new_fs();
    fs.cd(Some("/")).unwrap();
    for _ in 0..5 {
        assert_eq!(fs.cd(Some("..")).unwrap(), "/");
    }
    assert!(fs.cwd().is_empty());
}

#[test]
fn test_pwd_roundtrips_through_normalize() {
    let mut fs = new_fs();
    for target in ["/", "/system", "/home/visitor/projects", "../.."] {
        fs.cd(Some(target)).unwrap();
        assert_eq!(normalize(&fs.pwd(), fs.cwd()), fs.cwd());
        assert_eq!(normalize(&fs.pwd(), &["elsewhere"]), fs.cwd());
    }
}

#[test]
fn test_mkdir_twice_fails_and_leaves_tree() {
    let mut fs = new_fs();
    fs.mkdir("a").unwrap();
    let before = fs.root().clone();

    assert_eq!(fs.mkdir("a"), Err(Error::already_exists("a")));
    assert_eq!(fs.root(), &before);

    // A file of the same name collides too
    assert_eq!(fs.mkdir("readme.txt"), Err(Error::already_exists("readme.txt")));
}

#[test]
fn test_mkdir_parent_checks() {
    let mut fs = new_fs();
    assert_eq!(fs.mkdir(""), Err(Error::missing_argument("Usage: mkdir <dir>")));
    assert_eq!(
        fs.mkdir("no/such/dir"),
        Err(Error::parent_missing("/home/visitor/no/such"))
    );
    assert_eq!(
        fs.mkdir("readme.txt/inner"),
        Err(Error::not_a_directory("/home/visitor/readme.txt"))
    );
    assert_eq!(fs.mkdir("/"), Err(Error::RootNotAllowed));
    assert_eq!(fs.mkdir("/.."), Err(Error::RootNotAllowed));

    fs.mkdir("/system/logs").unwrap();
    assert_eq!(fs.ls(Some("/system")).unwrap(), vec!["logs/", "motd.txt"]);
}

#[test]
fn test_touch_write_cat() {
    let mut fs = new_fs();
    assert_eq!(fs.touch("f").unwrap(), "Touched f");
    assert_eq!(fs.cat("f").unwrap(), "");
    assert_eq!(fs.write("f", "x").unwrap(), "Wrote to f");
    assert_eq!(fs.cat("f").unwrap(), "x");
}

#[test]
fn test_touch_preserves_existing_content() {
    let mut fs = new_fs();
    fs.write("f", "x").unwrap();
    fs.touch("f").unwrap();
    assert_eq!(fs.cat("f").unwrap(), "x");
}

#[test]
fn test_touch_and_write_refuse_directories() {
    let mut fs = new_fs();
    assert_eq!(
        fs.touch("projects"),
        Err(Error::cannot_overwrite_directory("projects"))
    );
    assert_eq!(
        fs.write("projects", "text"),
        Err(Error::cannot_overwrite_directory("projects"))
    );
    assert_eq!(fs.touch(""), Err(Error::missing_argument("Usage: touch <file>")));
    assert_eq!(fs.touch("/"), Err(Error::RootNotAllowed));
}

#[test]
fn test_write_rejects_empty_content() {
    let mut fs = new_fs();
    let usage = Error::missing_argument("Usage: write <file> <text>");
    assert_eq!(fs.write("f", ""), Err(usage.clone()));
    assert_eq!(fs.write("", "x"), Err(usage));
    assert_eq!(fs.cat("f"), Err(Error::file_not_found("f")));
}

#[test]
fn test_write_replaces_content() {
    let mut fs = new_fs();
    fs.write("/system/motd.txt", "Maintenance tonight").unwrap();
    assert_eq!(fs.cat("/system/motd.txt").unwrap(), "Maintenance tonight");
    fs.write("../../system/motd.txt", MOTD_TEXT).unwrap();
    assert_eq!(fs.cat("/system/motd.txt").unwrap(), MOTD_TEXT);
}

#[test]
fn test_cat_errors() {
    let fs = new_fs();
    assert_eq!(fs.cat(""), Err(Error::missing_argument("Usage: cat <file>")));
    assert_eq!(fs.cat("ghost.txt"), Err(Error::file_not_found("ghost.txt")));
    assert_eq!(fs.cat("projects"), Err(Error::not_a_file("projects")));
    assert_eq!(fs.cat("/"), Err(Error::not_a_file("/")));
}

#[test]
fn test_tree_rendering() {
    let mut fs = new_fs();
    assert_eq!(
        fs.tree(Some("/")).unwrap(),
        [
            "/",
            "  home/",
            "    visitor/",
            "      projects/",
            "        nebula.txt",
            "      readme.txt",
            "  system/",
            "    motd.txt",
        ]
        .join("\n")
    );
    assert_eq!(
        fs.tree(None).unwrap(),
        "visitor/\n  projects/\n    nebula.txt\n  readme.txt"
    );
    assert_eq!(fs.tree(Some("readme.txt")).unwrap(), "readme.txt");
    assert_eq!(fs.tree(Some("nope")), Err(Error::path_not_found("nope")));

    fs.cd(Some("/")).unwrap();
    assert!(fs.tree(None).unwrap().starts_with("/\n  home/"));
}

#[test]
fn test_reset_restores_defaults() {
    let mut fs = new_fs();
    fs.mkdir("/tmp").unwrap();
    fs.write("/tmp/a.txt", "scratch").unwrap();
    fs.write("readme.txt", "overwritten").unwrap();
    fs.cd(Some("/tmp")).unwrap();

    assert_eq!(fs.reset(), "Filesystem reset");
    assert_eq!(fs.root(), &default_tree());
    assert_eq!(fs.pwd(), "/home/visitor");
    assert_eq!(fs.cat("readme.txt").unwrap(), README_TEXT);
}

#[test]
fn test_failures_are_repeatable() {
    let mut fs = new_fs();
    let first = fs.mkdir("x/y");
    let second = fs.mkdir("x/y");
    assert_eq!(first, second);
    assert!(first.is_err());
}
