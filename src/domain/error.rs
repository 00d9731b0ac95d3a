use thiserror::Error;

/// Fatal input conditions. Everything past a well-formed graph store is total.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("the input file must be given as an argument")]
    MissingArgument,

    #[error("could not open file: {path}")]
    UnreadableFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read number of vertices")]
    MalformedVertexCount,

    #[error("vertex count {vertex_count} is too large to allocate")]
    VertexCountTooLarge { vertex_count: usize },

    #[error("malformed edge on line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    #[error("vertex {vertex} is outside [0, {vertex_count})")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}
