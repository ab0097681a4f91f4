//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by `m`
//! non-comment-lines `u v w` representing a weighted edge `Edge(u, v, w)`.
//! Vertices are zero-based.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Write},
    path::Path,
};

use super::*;
use crate::ops::{AdjacencyList, GraphEdgeOrder, GraphFromScratch};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut parts = line.split(' ').filter(|t| !t.is_empty());
        let n: NumNodes = parse_next_value!(parts, "Number of nodes");
        let m: NumEdges = parse_next_value!(parts, "Number of edges");
        Ok((n, m))
    }

    fn parse_edge(&self, line: &str, n: NumNodes) -> Result<Edge> {
        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");
        let weight: Weight = parse_next_value!(parts, "Edge weight");

        raise_error_unless!(
            from < n && dest < n,
            ErrorKind::InvalidData,
            format!("Edge ({from}, {dest}) out of vertex range 0..{n}")
        );

        Ok(Edge(from, dest, weight))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = reader
            .lines()
            .filter(|line| match line {
                Ok(line) => !line.starts_with(&self.comment_identifier),
                Err(_) => true,
            });

        let header = lines
            .next()
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))??;
        let (n, m) = self.parse_header(&header)?;

        let mut edges = Vec::with_capacity(m as usize);
        for line in lines {
            edges.push(self.parse_edge(&line?, n)?);
        }

        raise_error_unless!(
            edges.len() == m as usize,
            ErrorKind::InvalidData,
            format!("Header announced {m} edges but {} were found", edges.len())
        );

        G::from_edges(n, edges).map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for Edge(u, v, w) in graph.edges(true) {
            writeln!(writer, "{u} {v} {w}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayUndir;

    #[test]
    fn reads_basic_input() {
        let input = "4 3\n0 1 5\n1 2 -2\n0 3 7\n";
        let graph = AdjArrayUndir::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weight_of(0, 1), Some(5));
        assert_eq!(graph.weight_of(2, 1), Some(-2));
        assert_eq!(graph.weight_of(3, 0), Some(7));
    }

    #[test]
    fn skips_comment_lines() {
        let input = "c a tiny graph\n2 1\nc the only edge\n0 1 9\n";
        let graph = AdjArrayUndir::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_of(0, 1), Some(9));
    }

    #[test]
    fn rejects_missing_header() {
        let res = AdjArrayUndir::try_read_edge_list("".as_bytes());
        assert_eq!(res.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let res = AdjArrayUndir::try_read_edge_list("2 1\n0 2 1\n".as_bytes());
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_edge_count_mismatch() {
        let res = AdjArrayUndir::try_read_edge_list("3 2\n0 1 1\n".as_bytes());
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_malformed_weight() {
        let res = AdjArrayUndir::try_read_edge_list("2 1\n0 1 heavy\n".as_bytes());
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_self_loop() {
        let res = AdjArrayUndir::try_read_edge_list("2 1\n1 1 4\n".as_bytes());
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn write_then_read_preserves_graph() {
        let graph =
            AdjArrayUndir::from_edges(5, [(0, 1, 4), (0, 2, 1), (3, 4, -6)]).unwrap();

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        let read = AdjArrayUndir::try_read_edge_list(buffer.as_slice()).unwrap();
        assert_eq!(read.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(read.number_of_edges(), graph.number_of_edges());
        for Edge(u, v, w) in graph.edges(true) {
            assert_eq!(read.weight_of(u, v), Some(w));
        }
    }
}
