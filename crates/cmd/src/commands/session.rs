use nebulafs::{Result, VirtualFileSystem};

use super::Reply;

pub const HELP_TEXT: &str = "Commands: help, ls [path], pwd, cd [path], cat <file>, mkdir <dir>, touch <file>, write <file> <text>, tree [path], clear, reset";

pub fn help(_fs: &mut VirtualFileSystem, _args: &[&str]) -> Result<Reply> {
    Ok(Reply::Text(HELP_TEXT.to_string()))
}

/// Transcript only; the filesystem is untouched
pub fn clear(_fs: &mut VirtualFileSystem, _args: &[&str]) -> Result<Reply> {
    Ok(Reply::ClearTranscript)
}

pub fn reset(fs: &mut VirtualFileSystem, _args: &[&str]) -> Result<Reply> {
    Ok(Reply::Text(fs.reset()))
}
