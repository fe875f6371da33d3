use nebulafs::{Result, VirtualFileSystem};

use super::{Reply, first};

pub fn cat(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    fs.cat(first(args).unwrap_or_default()).map(Reply::Text)
}

pub fn mkdir(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    fs.mkdir(first(args).unwrap_or_default()).map(Reply::Text)
}

pub fn touch(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    fs.touch(first(args).unwrap_or_default()).map(Reply::Text)
}

/// Everything after the file name, rejoined with single spaces
pub fn write(fs: &mut VirtualFileSystem, args: &[&str]) -> Result<Reply> {
    let path = first(args).unwrap_or_default();
    let text = args.get(1..).unwrap_or_default().join(" ");
    fs.write(path, &text).map(Reply::Text)
}
