use std::path::PathBuf;

/// Errors surfaced by the generator. All are terminal; the generator never
/// writes partial output for a failed input.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Reading an input or writing an output failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not parseable Rust source, or a marked type failed
    /// analysis (bad attribute, unsupported generics, strict-mode shape).
    #[error("{}: {source}", path.display())]
    Parse {
        /// The offending input file.
        path: PathBuf,
        /// The parse or analysis error with its span.
        #[source]
        source: syn::Error,
    },

    /// `--output` combined with a directory input.
    #[error("`--output` is only valid in file mode; the input is a directory")]
    OutputWithDirectory,

    /// The input file stem cannot name a module in the generated import.
    #[error("{}: file stem `{stem}` is not a valid module name", path.display())]
    BadModuleName {
        /// The offending input file.
        path: PathBuf,
        /// Its stem.
        stem: String,
    },
}
