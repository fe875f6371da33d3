use nebulafs::{Result, VirtualFileSystem};

use super::{Reply, first};

/// Shown by `ls` for a directory with no entries
pub const EMPTY_LISTING: &str = "(empty)";

pub fn ls(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    let items = fs.ls(first(args))?;
    Ok(Reply::Text(if items.is_empty() {
        EMPTY_LISTING.to_string()
    } else {
        items.join("  ")
    }))
}

pub fn pwd(fs: &mut VirtualFileSystem, _args: &[&str]) -> Result<Reply> {
    Ok(Reply::Text(fs.pwd()))
}

pub fn cd(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    fs.cd(first(args)).map(Reply::Text)
}

pub fn tree(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    fs.tree(first(args)).map(Reply::Text)
}
