//! File operation builtins - mkdir, touch

use super::{Builtin, Context, Docs};
use crate::error::{Error, Result};
use crate::output::Output;

/// The mkdir builtin - create directories.
///
/// Usage: mkdir [-p] DIRECTORY...
///
/// Options:
///   -p   Create parent directories as needed, no error if existing
pub struct Mkdir;

impl Builtin for Mkdir {
    fn docs(&self) -> Docs {
        Docs::new("mkdir", "create a directory").long(
            "Usage: mkdir [-p] DIRECTORY...\n\n\
             Fails if DIRECTORY already exists or its parent is missing.\n\
             If any DIRECTORY fails, none are created.\n\
             -p   create missing parent directories, no error if DIRECTORY exists",
        )
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        if ctx.args.is_empty() {
            return Err(Error::usage("missing operand"));
        }

        let parents = ctx.has_option(&["-p", "--parents"]);
        ctx.fs.make_directories(ctx.args, parents)?;

        Ok(Output::ok(""))
    }
}

/// The touch builtin - create empty files.
///
/// Usage: touch FILE...
///
/// Existing files are left as they are; timestamps are not modelled.
pub struct Touch;

impl Builtin for Touch {
    fn docs(&self) -> Docs {
        Docs::new("touch", "create an empty file").long(
            "Usage: touch FILE...\n\n\
             Creates FILE if it does not exist. Existing files are left unchanged.",
        )
    }

    fn execute(&self, ctx: Context<'_>) -> Result<Output> {
        if ctx.args.is_empty() {
            return Err(Error::usage("missing file operand"));
        }

        ctx.fs.touch_files(ctx.args)?;

        Ok(Output::ok(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;
    use crate::fs::VirtualFileSystem;

    fn run(
        cmd: &dyn Builtin,
        fs: &mut VirtualFileSystem,
        args: &[&str],
        options: &[&str],
    ) -> Result<Output> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        cmd.execute(Context {
            args: &args,
            options: &options,
            fs,
        })
    }

    #[test]
    fn test_mkdir_missing_operand() {
        let mut fs = VirtualFileSystem::new();
        let err = run(&Mkdir, &mut fs, &[], &["-p"]).unwrap_err();
        assert_eq!(err.to_string(), "missing operand");
    }

    #[test]
    fn test_mkdir_several_directories() {
        let mut fs = VirtualFileSystem::new();
        run(&Mkdir, &mut fs, &["a", "b"], &[]).unwrap();
        assert_eq!(fs.list_children(None).unwrap().len(), 2);
    }

    #[test]
    fn test_mkdir_failure_creates_nothing() {
        let mut fs = VirtualFileSystem::new();
        let err = run(&Mkdir, &mut fs, &["a", "x/y", "b"], &[]).unwrap_err();

        assert!(matches!(err, Error::Path(PathError::NotFound(ref s)) if s == "x"));
        assert!(fs.list_children(None).unwrap().is_empty());
    }

    #[test]
    fn test_mkdir_parents_failure_creates_nothing() {
        let mut fs = VirtualFileSystem::new();
        fs.touch_file("f").unwrap();

        let err = run(&Mkdir, &mut fs, &["a/b", "f/c"], &["-p"]).unwrap_err();
        assert!(matches!(err, Error::Path(PathError::NotADirectory(ref s)) if s == "f"));
        assert!(fs.resolve_path("a").is_err());
        assert_eq!(fs.usage().dir_count, 1);
    }

    #[test]
    fn test_mkdir_parents_flag() {
        let mut fs = VirtualFileSystem::new();
        run(&Mkdir, &mut fs, &["a/b/c"], &["-p"]).unwrap();
        assert!(fs.resolve_path("/a/b/c").is_ok());
    }

    #[test]
    fn test_touch_missing_operand() {
        let mut fs = VirtualFileSystem::new();
        let err = run(&Touch, &mut fs, &[], &[]).unwrap_err();
        assert_eq!(err.to_string(), "missing file operand");
    }

    #[test]
    fn test_touch_failure_creates_nothing() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("d", false).unwrap();

        let err = run(&Touch, &mut fs, &["a.txt", "d"], &[]).unwrap_err();
        assert!(matches!(err, Error::Path(PathError::AlreadyExists(ref s)) if s == "d"));
        assert_eq!(fs.usage().file_count, 0);
        assert!(fs.resolve_path("a.txt").is_err());
    }

    #[test]
    fn test_touch_twice() {
        let mut fs = VirtualFileSystem::new();
        run(&Touch, &mut fs, &["f.txt"], &[]).unwrap();
        run(&Touch, &mut fs, &["f.txt"], &[]).unwrap();
        assert_eq!(fs.usage().file_count, 1);
    }
}
