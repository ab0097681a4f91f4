//! # AdjacencyList
//!
//! A human-readable, write-only dump of every neighborhood. After a fixed
//! header line, each vertex gets one line listing its neighbors in storage
//! order together with the respective edge weights:
//!
//! ```text
//! vertex: (neighbor, [Edge weight])
//! 0: (1, [4]) - (2, [1])
//! 1: (0, [4])
//! 2: (0, [1])
//! 3: No edges
//! ```

use std::{fs::File, io::Write, path::Path};

use itertools::Itertools;

use super::*;
use crate::ops::AdjacencyList;

/// A writer for the AdjacencyList-Format
#[derive(Debug, Clone, Default)]
pub struct AdjacencyListWriter;

impl AdjacencyListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: AdjacencyList> GraphWriter<G> for AdjacencyListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "vertex: (neighbor, [Edge weight])")?;

        for u in graph.vertices() {
            if graph.degree_of(u) == 0 {
                writeln!(writer, "{u}: No edges")?;
            } else {
                let neighbors = graph
                    .neighbors_of(u)
                    .map(|Neighbor { node, weight }| format!("({node}, [{weight}])"))
                    .join(" - ");
                writeln!(writer, "{u}: {neighbors}")?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the AdjacencyList-Format.
/// Shorthand for default settings.
pub trait AdjacencyListWrite {
    /// Tries to write the graph to a writer
    fn try_write_adjacency_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_adjacency_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_adjacency_list(writer)
    }
}

impl<G: AdjacencyList> AdjacencyListWrite for G {
    fn try_write_adjacency_list<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayUndir;

    fn render(graph: &AdjArrayUndir) -> String {
        let mut buffer = Vec::new();
        graph.try_write_adjacency_list(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_neighborhoods_in_storage_order() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1, 4), (0, 2, 1)]).unwrap();

        assert_eq!(
            render(&graph),
            "vertex: (neighbor, [Edge weight])\n\
             0: (1, [4]) - (2, [1])\n\
             1: (0, [4])\n\
             2: (0, [1])\n\
             3: No edges\n"
        );
    }

    #[test]
    fn edgeless_graph_is_all_no_edges() {
        let graph = AdjArrayUndir::new(2).unwrap();

        assert_eq!(
            render(&graph),
            "vertex: (neighbor, [Edge weight])\n0: No edges\n1: No edges\n"
        );
    }

    #[test]
    fn negative_weights_render_with_sign() {
        let graph = AdjArrayUndir::from_edges(2, [(0, 1, -3)]).unwrap();
        assert!(render(&graph).contains("0: (1, [-3])"));
    }
}
