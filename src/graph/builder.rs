use std::fs;
use std::io;
use std::path::Path;

use miette::Result;
use walkdir::WalkDir;

use super::types::IncludeGraph;
use crate::error::HeaderGraphError;
use crate::include_parser::IncludePattern;

/// Builder for constructing include graphs from a directory tree
///
/// Two build modes are available: `build_header_graph` covers every file
/// with a given extension, `build_trace_graph` restricts the scan to files
/// mentioning a token in their name or contents. Both perform a single
/// static pass over the text; conditional compilation and include search
/// paths are not modeled.
pub struct IncludeGraphBuilder {
    graph: IncludeGraph,
    pattern: IncludePattern,
    trace_files: Vec<String>,
}

impl Default for IncludeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IncludeGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: IncludeGraph::new(),
            pattern: IncludePattern::new(),
            trace_files: Vec::new(),
        }
    }

    /// Build the include graph of every `*.{extension}` file under `root`
    ///
    /// Every matching file becomes a node keyed by its root-relative path,
    /// even when it has no includes. References that do not resolve to an
    /// existing file under `root` are dropped without creating phantom
    /// nodes. Unreadable files are skipped so a single bad file cannot
    /// abort the scan; a missing or unreadable root is fatal.
    pub fn build_header_graph(
        &mut self,
        root: &Path,
        extension: &str,
        excludes: &[String],
    ) -> Result<()> {
        validate_root(root)?;

        for entry in walk(root, excludes) {
            let Ok(entry) = entry else {
                // Unreadable directory entries are recovered per-file
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != extension) {
                continue;
            }

            let source_id = relative_id(path, root);
            self.graph.add_node(&source_id);

            let Some(text) = read_lossy(path) else {
                continue;
            };
            for reference in self.pattern.references(&text) {
                self.add_resolved_edge(&source_id, reference, root);
            }
        }

        Ok(())
    }

    /// Build the include graph restricted to trace-related files
    ///
    /// A file participates when its name contains `token` or its contents
    /// mention it. Edges are kept only for include references whose text
    /// also carries the token, so the resulting graph shows how the trace
    /// facility hangs together without the surrounding noise.
    pub fn build_trace_graph(
        &mut self,
        root: &Path,
        token: &str,
        excludes: &[String],
    ) -> Result<()> {
        validate_root(root)?;

        let mut selected: Vec<String> = Vec::new();
        for entry in walk(root, excludes) {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();

            let name_matches = path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().contains(token));
            if name_matches {
                selected.push(relative_id(path, root));
                continue;
            }
            if let Some(text) = read_lossy(path)
                && text.contains(token)
            {
                selected.push(relative_id(path, root));
            }
        }

        // Sorted selection keeps node order reproducible across runs
        selected.sort();

        for source_id in &selected {
            self.graph.add_node(source_id);
        }
        for source_id in &selected {
            let Some(text) = read_lossy(&root.join(source_id)) else {
                continue;
            };
            for reference in self.pattern.references(&text) {
                if !reference.contains(token) {
                    continue;
                }
                self.add_resolved_edge(source_id, reference, root);
            }
        }

        self.trace_files = selected;
        Ok(())
    }

    /// Resolve a reference against `root` and record the edge when the
    /// target exists on disk
    fn add_resolved_edge(&mut self, source_id: &str, reference: &str, root: &Path) {
        let target = root.join(reference);
        if !target.exists() {
            return;
        }
        let target_id = target
            .strip_prefix(root)
            .map(|rel| rel.to_string_lossy().into_owned())
            .unwrap_or_else(|_| reference.to_string());
        self.graph.add_edge(source_id, &target_id);
    }

    pub fn graph(&self) -> &IncludeGraph {
        &self.graph
    }

    /// Files selected by the last trace build, sorted by relative path
    pub fn trace_files(&self) -> &[String] {
        &self.trace_files
    }
}

fn walk<'a>(
    root: &Path,
    excludes: &'a [String],
) -> impl Iterator<Item = walkdir::Result<walkdir::DirEntry>> + 'a {
    // Sorted traversal keeps node insertion order identical across runs
    WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|entry| {
        let name = entry.file_name();
        !excludes.iter().any(|excluded| name == excluded.as_str())
    })
}

fn relative_id(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Decode a file as text, substituting invalid bytes; `None` means the file
/// could not be read at all
fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| HeaderGraphError::ScanError {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(HeaderGraphError::ScanError {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_file(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_simple_include_edge() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "a.h", "#include \"b.h\"\n");
        write_file(root, "b.h", "int b;\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_header_graph(root, "h", &[]).unwrap();

        let graph = builder.graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.index_of("a.h").unwrap();
        let b = graph.index_of("b.h").unwrap();
        assert_eq!(graph.successors(a), &[b]);
    }

    #[test]
    fn test_missing_target_dropped_without_phantom_node() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "a.h", "#include \"missing.h\"\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_header_graph(root, "h", &[]).unwrap();

        let graph = builder.graph();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        let a = graph.index_of("a.h").unwrap();
        assert!(graph.successors(a).is_empty());
        assert!(graph.index_of("missing.h").is_none());
    }

    #[test]
    fn test_mutual_includes() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "a.h", "#include \"b.h\"\n");
        write_file(root, "b.h", "#include \"a.h\"\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_header_graph(root, "h", &[]).unwrap();

        let graph = builder.graph();
        assert_eq!(graph.edge_count(), 2);
        let a = graph.index_of("a.h").unwrap();
        let b = graph.index_of("b.h").unwrap();
        assert_eq!(graph.successors(a), &[b]);
        assert_eq!(graph.successors(b), &[a]);
    }

    #[test]
    fn test_non_header_files_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "a.h", "#include \"b.c\"\n");
        write_file(root, "b.c", "#include \"a.h\"\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_header_graph(root, "h", &[]).unwrap();

        let graph = builder.graph();
        // b.c is never scanned as a source, but the resolved reference to it
        // still produces an edge and a leaf node
        let a = graph.index_of("a.h").unwrap();
        let b = graph.index_of("b.c").unwrap();
        assert_eq!(graph.successors(a), &[b]);
        assert!(graph.successors(b).is_empty());
    }

    #[test]
    fn test_subdirectories_and_relative_ids() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "sys/types.h", "typedef int x_t;\n");
        write_file(root, "top.h", "#include <sys/types.h>\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_header_graph(root, "h", &[]).unwrap();

        let graph = builder.graph();
        let top = graph.index_of("top.h").unwrap();
        let types = graph.index_of("sys/types.h").unwrap();
        assert_eq!(graph.successors(top), &[types]);
    }

    #[test]
    fn test_excluded_directories_skipped() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "a.h", "int a;\n");
        write_file(root, ".git/index.h", "int hidden;\n");
        write_file(root, "legacy/old.h", "int old;\n");

        let mut builder = IncludeGraphBuilder::new();
        builder
            .build_header_graph(root, "h", &[".git".to_string(), "legacy".to_string()])
            .unwrap();

        let graph = builder.graph();
        assert_eq!(graph.node_count(), 1);
        assert!(graph.index_of("a.h").is_some());
        assert!(graph.index_of("legacy/old.h").is_none());
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "b.h", "int b;\n");
        let mut bytes = b"#include \"b.h\"\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0x00, b'\n']);
        fs::write(root.join("a.h"), bytes).unwrap();

        let mut builder = IncludeGraphBuilder::new();
        builder.build_header_graph(root, "h", &[]).unwrap();

        assert_eq!(builder.graph().edge_count(), 1);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let mut builder = IncludeGraphBuilder::new();
        let result = builder.build_header_graph(&missing, "h", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_as_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "a.h", "int a;\n");

        let mut builder = IncludeGraphBuilder::new();
        let result = builder.build_header_graph(&root.join("a.h"), "h", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_trace_selection_by_name_and_content() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "trace_core.h", "int t;\n");
        write_file(root, "logger.c", "void log(void) { trace_emit(); }\n");
        write_file(root, "unrelated.h", "int u;\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_trace_graph(root, "trace", &[]).unwrap();

        assert_eq!(
            builder.trace_files(),
            &["logger.c".to_string(), "trace_core.h".to_string()]
        );
        assert_eq!(builder.graph().node_count(), 2);
        assert!(builder.graph().index_of("unrelated.h").is_none());
    }

    #[test]
    fn test_trace_edges_restricted_to_token() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "trace.h", "int t;\n");
        write_file(root, "common.h", "int c;\n");
        write_file(
            root,
            "trace_user.c",
            "#include \"common.h\"\n#include \"trace.h\"\n",
        );

        let mut builder = IncludeGraphBuilder::new();
        builder.build_trace_graph(root, "trace", &[]).unwrap();

        let graph = builder.graph();
        let user = graph.index_of("trace_user.c").unwrap();
        let trace = graph.index_of("trace.h").unwrap();
        // The include of common.h carries no token and is not an edge
        assert_eq!(graph.successors(user), &[trace]);
    }

    #[test]
    fn test_trace_files_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_file(root, "z_trace.h", "int z;\n");
        write_file(root, "a_trace.h", "int a;\n");

        let mut builder = IncludeGraphBuilder::new();
        builder.build_trace_graph(root, "trace", &[]).unwrap();

        assert_eq!(
            builder.trace_files(),
            &["a_trace.h".to_string(), "z_trace.h".to_string()]
        );
    }
}
