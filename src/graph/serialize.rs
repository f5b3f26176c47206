//! Text adjacency format for graphs with `String` payloads.
//!
//! One line per node: the node name followed by `neighbor weight` pairs,
//!
//! ```text
//! a b 1 c 5
//! b c 2
//! c
//! ```
//!
//! Names must be non-empty and may not contain whitespace. Tokens are
//! separated by any run of spaces or tabs on input and by a single space on
//! output.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::warn;
use num_traits::Float;

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::{Error, Result};

impl<W> DirectedGraph<String, W>
where
    W: Float + Display + FromStr,
{
    /// Writes one line per node. Weights use the shortest representation
    /// that parses back to the same value.
    ///
    /// Every name is checked before anything is written: an empty name or
    /// one containing whitespace fails with [`Error::InvalidName`] and the
    /// output is left untouched.
    pub fn serialize<T: Write>(&self, mut output: T) -> Result<()> {
        if let Some(name) = self.nodes().find(|name| !is_writable_name(name)) {
            return Err(Error::InvalidName(name.clone()));
        }

        for (id, name) in self.node_ids() {
            write!(output, "{}", name)?;
            for (target, weight) in self.outgoing_edges(id) {
                if let Some(neighbor) = self.payload(target) {
                    write!(output, " {} {}", neighbor, weight)?;
                }
            }
            writeln!(output)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Builds a graph that owns its node names.
    ///
    /// Blank lines are skipped. A weight token that does not parse is logged
    /// and its `neighbor weight` pair is skipped; a trailing neighbor with no
    /// weight is ignored.
    pub fn deserialize<R: BufRead>(input: R) -> Result<Self> {
        let mut graph = DirectedGraph::new();

        for line in input.lines() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let name = match tokens.next() {
                Some(name) => name,
                None => continue,
            };
            if !graph.contains(name) {
                graph.add_node(name.to_owned())?;
            }

            while let (Some(neighbor), Some(weight)) = (tokens.next(), tokens.next()) {
                let weight: W = match weight.parse() {
                    Ok(weight) => weight,
                    Err(_) => {
                        warn!("Unrecognized weight '{}'; skipping", weight);
                        continue;
                    }
                };
                if !graph.contains(neighbor) {
                    graph.add_node(neighbor.to_owned())?;
                }
                graph.add_edge(name, neighbor, weight)?;
            }
        }

        Ok(graph)
    }
}

fn is_writable_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}
