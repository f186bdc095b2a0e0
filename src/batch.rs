//! Parallel batch parsing across many files (ambient convenience layered
//! on top of `TableParser`, not part of the core per-file pipeline).

use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::parser::TableParser;
use crate::table::Table;

/// Parse many independent files concurrently, preserving input order in
/// the returned `Vec`. Each file's result is independent: one file's
/// error does not affect any other's.
pub fn parse_paths_parallel<P: AsRef<Path> + Sync>(
    parser: &TableParser,
    paths: &[P],
) -> Vec<Result<Vec<Table>>> {
    paths
        .par_iter()
        .map(|path| parser.parse_path(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_txt(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_paths_parallel_preserves_order_and_isolates_errors() {
        let good_a = write_txt("Depth  Age\n1  10\n2  20\n3  30\n4  40\n5  50\n");
        let good_b = write_txt("Depth  Age\n1  11\n2  21\n3  31\n4  41\n5  51\n");
        let bad = write_txt("Just a line of prose with no table at all here.\n");

        let parser = TableParser::new();
        let paths = vec![
            good_a.path().to_path_buf(),
            bad.path().to_path_buf(),
            good_b.path().to_path_buf(),
        ];

        let results = parse_paths_parallel(&parser, &paths);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
