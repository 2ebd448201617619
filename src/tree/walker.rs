//! DirectoryWalker - depth-first walk building the hierarchy with subtotals

use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use super::config::ScanConfig;
use super::context::ScanContext;
use super::node::{EntryExtras, HierarchyEntry};
use super::utils::{entry_name, extras, timestamps};

/// What a directory entry turned out to be.
enum EntryKind {
    Dir,
    File,
    /// Symlink to a directory; never followed
    DirLink,
}

/// Recursive walker. Every file it lists is fed into the scan context, so
/// the statistics cover exactly the files present in the returned hierarchy.
pub struct DirectoryWalker {
    config: ScanConfig,
}

impl DirectoryWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `dir`, which sits at `depth` in the hierarchy.
    ///
    /// Subdirectories are only visited while `depth < max_depth`; at the
    /// cutoff they are neither listed nor descended into, but the files of
    /// `dir` are still recorded. Failures below `dir` are recorded in `ctx`
    /// and the walk carries on. An error is returned only when `dir` itself
    /// cannot be read.
    pub fn walk(
        &self,
        dir: &Path,
        depth: usize,
        ctx: &mut ScanContext,
    ) -> io::Result<HierarchyEntry> {
        debug!(path = %dir.display(), depth, "scanning directory");

        let meta = fs::metadata(dir)?;
        let entries = fs::read_dir(dir)?;
        ctx.record_directory();

        let mut subdirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    ctx.skip(dir.to_path_buf(), &err);
                    continue;
                }
            };
            let path = entry.path();
            match classify(&entry) {
                Ok(EntryKind::Dir) => subdirs.push(path),
                Ok(EntryKind::File) => files.push(path),
                Ok(EntryKind::DirLink) => {
                    debug!(path = %path.display(), "not following directory symlink")
                }
                Err(err) => ctx.skip(path, &err),
            }
        }

        let mut children = Vec::with_capacity(subdirs.len() + files.len());

        if depth < self.config.max_depth {
            for sub in subdirs {
                match self.walk(&sub, depth + 1, ctx) {
                    Ok(node) => children.push(node),
                    Err(err) => ctx.skip(sub, &err),
                }
            }
        } else if !subdirs.is_empty() {
            trace!(
                path = %dir.display(),
                pruned = subdirs.len(),
                "depth cutoff reached"
            );
        }

        for path in files {
            match self.file_entry(&path, depth + 1) {
                Ok(leaf) => {
                    ctx.record_file(&leaf.name, leaf.size);
                    children.push(leaf);
                }
                Err(err) => ctx.skip(path, &err),
            }
        }

        // empty (or fully pruned) directories get a literal zero
        let size = children.iter().map(|c| c.size).sum();
        let (created_at, modified_at) = timestamps(&meta);

        Ok(HierarchyEntry {
            name: entry_name(dir),
            path: dir.to_path_buf(),
            is_dir: true,
            size,
            created_at,
            modified_at,
            depth,
            extras: self.extras_for(&meta),
            children,
        })
    }

    fn file_entry(&self, path: &Path, depth: usize) -> io::Result<HierarchyEntry> {
        // follows symlinks, so a link to a file reports the target's length
        let meta = fs::metadata(path)?;
        let (created_at, modified_at) = timestamps(&meta);

        Ok(HierarchyEntry {
            name: entry_name(path),
            path: path.to_path_buf(),
            is_dir: false,
            size: meta.len(),
            created_at,
            modified_at,
            depth,
            extras: self.extras_for(&meta),
            children: Vec::new(),
        })
    }

    fn extras_for(&self, meta: &fs::Metadata) -> Option<EntryExtras> {
        if self.config.skip_expensive_metadata {
            None
        } else {
            Some(extras(meta))
        }
    }
}

fn classify(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return Ok(EntryKind::Dir);
    }
    if file_type.is_symlink() {
        let target = fs::metadata(entry.path())?;
        return Ok(if target.is_dir() {
            EntryKind::DirLink
        } else {
            EntryKind::File
        });
    }
    Ok(EntryKind::File)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write(path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path)
            .unwrap()
            .write_all(&vec![b'x'; len])
            .unwrap();
    }

    fn walk(root: &Path, config: ScanConfig) -> (HierarchyEntry, ScanContext) {
        let mut ctx = ScanContext::new(config.top_files);
        let walker = DirectoryWalker::new(config);
        let node = walker.walk(root, 0, &mut ctx).unwrap();
        (node, ctx)
    }

    #[test]
    fn test_subdirectories_come_before_files() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("aaa.txt"), 1);
        write(&dir.path().join("zzz/inner.txt"), 2);

        let (root, _) = walk(dir.path(), ScanConfig::default());
        assert_eq!(root.children.len(), 2);
        assert!(root.children[0].is_dir);
        assert_eq!(root.children[0].name, "zzz");
        assert!(!root.children[1].is_dir);
    }

    #[test]
    fn test_subtotals_and_depths() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("top.bin"), 10);
        write(&dir.path().join("a/mid.bin"), 20);
        write(&dir.path().join("a/b/deep.bin"), 30);

        let (root, ctx) = walk(dir.path(), ScanConfig::default());
        assert_eq!(root.size, 60);
        assert_eq!(root.depth, 0);

        let a = &root.children[0];
        assert_eq!((a.name.as_str(), a.depth, a.size), ("a", 1, 50));
        let b = &a.children[0];
        assert_eq!((b.name.as_str(), b.depth, b.size), ("b", 2, 30));
        assert_eq!(b.children[0].depth, 3);

        assert_eq!(ctx.files, 3);
        assert_eq!(ctx.directories, 3);
    }

    #[test]
    fn test_depth_cutoff_drops_subdirectories_entirely() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("root.txt"), 4);
        write(&dir.path().join("sub/skipped.txt"), 8);

        let (root, ctx) = walk(dir.path(), ScanConfig::with_max_depth(0));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "root.txt");
        assert_eq!(root.size, 4);
        assert_eq!(ctx.files, 1);
        assert_eq!(ctx.directories, 1);
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let (root, _) = walk(dir.path(), ScanConfig::default());
        let empty = &root.children[0];
        assert!(empty.is_dir);
        assert_eq!(empty.size, 0);
        assert!(empty.children.is_empty());
    }

    #[test]
    fn test_skip_expensive_metadata_omits_extras() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("f.txt"), 3);

        let (with, _) = walk(dir.path(), ScanConfig::default());
        assert!(with.extras.is_some());
        assert!(with.children[0].extras.is_some());

        let config = ScanConfig {
            skip_expensive_metadata: true,
            ..Default::default()
        };
        let (without, ctx) = walk(dir.path(), config);
        assert!(without.extras.is_none());
        assert!(without.children[0].extras.is_none());
        assert_eq!(ctx.extensions.get("txt").unwrap().size, 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("real/data.bin"), 16);
        symlink(dir.path().join("real"), dir.path().join("loop")).unwrap();
        symlink(dir.path().join("real/data.bin"), dir.path().join("link.bin")).unwrap();
        symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();

        let (root, ctx) = walk(dir.path(), ScanConfig::default());
        let names: Vec<_> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"real"));
        assert!(names.contains(&"link.bin"));
        assert!(!names.contains(&"loop"));
        assert!(!names.contains(&"dangling"));

        assert_eq!(root.size, 32);
        assert_eq!(ctx.skipped.len(), 1);
    }
}
