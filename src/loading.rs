use crate::{Graph, MaxCutError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

impl Graph {
    /// Reads an instance file: a header line `n m` followed by `m` lines `u v w` with 1-indexed
    /// vertices.
    pub fn deserialize_instance<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Self::parse_instance(reader)
    }

    pub fn parse_instance<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines().enumerate().filter_map(|(i, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((i + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(e)),
        });

        // Parse the header line
        let (line_no, header) = lines.next().transpose()?.ok_or(MaxCutError::Parse {
            line: 1,
            message: "missing header line".to_string(),
        })?;
        let header_parts = header.split_ascii_whitespace().collect::<Vec<_>>();
        if header_parts.len() < 2 {
            return Err(MaxCutError::Parse {
                line: line_no,
                message: "header must contain vertex and edge counts".to_string(),
            });
        }
        // Vertices are addressed by `u32`.
        let vertex_count: u32 = parse_token(header_parts[0], line_no, "vertex count")?;
        let edge_count: usize = parse_token(header_parts[1], line_no, "edge count")?;

        let mut graph = Graph::new(vertex_count as usize);

        // Parse the edges
        let mut parsed = 0;
        while parsed < edge_count {
            let Some(next) = lines.next() else {
                break;
            };
            let (line_no, line) = next?;
            let parts = line.split_ascii_whitespace().collect::<Vec<_>>();
            if parts.len() < 3 {
                return Err(MaxCutError::Parse {
                    line: line_no,
                    message: format!("expected `u v w`, found `{line}`"),
                });
            }
            let src = parse_vertex(parts[0], line_no)?;
            let dst = parse_vertex(parts[1], line_no)?;
            let weight: i64 = parse_token(parts[2], line_no, "weight")?;
            graph.add_edge(src, dst, weight)?;
            parsed += 1;
        }

        if parsed < edge_count {
            return Err(MaxCutError::EdgeCountMismatch {
                expected: edge_count,
                actual: parsed,
            });
        }

        log::debug!(
            "loaded graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token.parse::<T>().map_err(|_| MaxCutError::Parse {
        line,
        message: format!("could not parse {what} from `{token}`"),
    })
}

/// Converts a 1-indexed vertex token into a 0-indexed vertex.
fn parse_vertex(token: &str, line: usize) -> Result<u32> {
    let vx: u32 = parse_token(token, line, "vertex")?;
    vx.checked_sub(1).ok_or_else(|| MaxCutError::Parse {
        line,
        message: "vertices are numbered from 1".to_string(),
    })
}
